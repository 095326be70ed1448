//! Wire shapes for the hotel and booking endpoints.
//!
//! Field names follow the published API (Spanish, camelCase) and are mapped
//! to domain types here so the domain never sees serde.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{BookingRequest, Error, Hotel, HotelDraft};

/// Hotel fields accepted on create and update.
///
/// Any `id` in the body is ignored; numeric fields default to zero when
/// omitted.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelRequest {
    #[schema(example = "Plaza")]
    pub nombre: Option<String>,
    #[serde(default)]
    #[schema(example = 4.5)]
    pub calificacion: f64,
    #[serde(default)]
    #[schema(example = "Madrid")]
    pub ubicacion: String,
    #[serde(default)]
    #[schema(example = 120)]
    pub precio_por_noche: i32,
    #[serde(default)]
    #[schema(example = 4)]
    pub estrellas: i32,
}

impl TryFrom<HotelRequest> for HotelDraft {
    type Error = Error;

    fn try_from(value: HotelRequest) -> Result<Self, Self::Error> {
        HotelDraft::new(
            value.nombre.unwrap_or_default(),
            value.calificacion,
            value.ubicacion,
            value.precio_por_noche,
            value.estrellas,
        )
    }
}

/// Hotel as returned by every read and write endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HotelResponse {
    #[schema(example = "6f1c2d9e-8a41-4c5b-9d2e-3a7b1c0f5e42")]
    pub id: String,
    pub nombre: String,
    pub calificacion: f64,
    pub ubicacion: String,
    pub precio_por_noche: i32,
    pub estrellas: i32,
}

impl From<Hotel> for HotelResponse {
    fn from(hotel: Hotel) -> Self {
        let (id, draft) = hotel.into_parts();
        Self {
            id: id.into(),
            nombre: draft.name().to_owned(),
            calificacion: draft.rating(),
            ubicacion: draft.location().to_owned(),
            precio_por_noche: draft.price_per_night(),
            estrellas: draft.stars(),
        }
    }
}

pub(crate) fn to_responses(hotels: Vec<Hotel>) -> Vec<HotelResponse> {
    hotels.into_iter().map(HotelResponse::from).collect()
}

/// Booking request body. Every field may be omitted; validation happens in
/// the booking service.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequestBody {
    #[schema(example = "6f1c2d9e-8a41-4c5b-9d2e-3a7b1c0f5e42")]
    pub hotel_id: Option<String>,
    #[schema(example = "Ana Garcia")]
    pub nombre_cliente: Option<String>,
    #[schema(example = "2026-05-01")]
    pub fecha_entrada: Option<String>,
    #[schema(example = 3)]
    pub noches: Option<i32>,
}

impl From<BookingRequestBody> for BookingRequest {
    fn from(body: BookingRequestBody) -> Self {
        Self {
            hotel_id: body.hotel_id,
            customer_name: body.nombre_cliente,
            check_in: body.fecha_entrada,
            nights: body.noches,
        }
    }
}

/// Query string of the location search.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct LocationQuery {
    pub ubicacion: Option<String>,
}
