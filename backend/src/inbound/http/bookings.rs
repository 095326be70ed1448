//! Booking confirmation handler.
//!
//! ```text
//! POST /hoteles/reservas {"hotelId":"...","nombreCliente":"Ana","fechaEntrada":"2026-05-01","noches":2}
//! ```

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, post, web};

use crate::domain::BookingRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::hotels_dto::BookingRequestBody;
use crate::inbound::http::state::HttpState;

/// Validate a booking and answer with a plain-text confirmation.
///
/// Nothing is stored.
#[utoipa::path(
    post,
    path = "/hoteles/reservas",
    request_body = BookingRequestBody,
    responses(
        (status = 201, description = "Booking confirmed", body = String, content_type = "text/plain"),
        (status = 400, description = "hotelId missing or nights not positive", body = ErrorResponse),
        (status = 401, description = "Unauthorised", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse)
    ),
    tags = ["reservas"],
    operation_id = "createBooking"
)]
#[post("/reservas")]
pub async fn create_booking(
    state: web::Data<HttpState>,
    payload: web::Json<BookingRequestBody>,
) -> ApiResult<HttpResponse> {
    let request = BookingRequest::from(payload.into_inner());
    let confirmation = state.bookings.confirm(&request).await?;
    Ok(HttpResponse::Created()
        .content_type(ContentType::plaintext())
        .body(confirmation.message()))
}
