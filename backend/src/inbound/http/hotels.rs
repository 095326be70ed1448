//! Hotel catalogue handlers.
//!
//! ```text
//! GET    /hoteles
//! GET    /hoteles/{id}
//! POST   /hoteles                       {"nombre":"Plaza", ...}
//! PUT    /hoteles/{id}
//! DELETE /hoteles/{id}
//! GET    /hoteles/busqueda?ubicacion=Madrid
//! GET    /hoteles/calificacion[/superior|/inferior]/{valor}
//! GET    /hoteles/precio[/superior|/inferior]/{valor}
//! GET    /hoteles/nombre/{nombre}
//! GET    /hoteles/estrellas/{minimo}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};

use crate::domain::{HotelDraft, HotelId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::hotels_dto::{HotelRequest, HotelResponse, LocationQuery, to_responses};
use crate::inbound::http::state::HttpState;

type HotelList = ApiResult<web::Json<Vec<HotelResponse>>>;

/// List every hotel.
#[utoipa::path(
    get,
    path = "/hoteles",
    responses(
        (status = 200, description = "All hotels", body = [HotelResponse]),
        (status = 503, description = "Database unavailable", body = ErrorResponse)
    ),
    tags = ["hoteles"],
    operation_id = "listHotels",
    security([])
)]
#[get("")]
pub async fn list_hotels(state: web::Data<HttpState>) -> HotelList {
    Ok(web::Json(to_responses(state.hotels.list().await?)))
}

/// Fetch one hotel by id.
#[utoipa::path(
    get,
    path = "/hoteles/{id}",
    params(("id" = String, Path, description = "Hotel identifier")),
    responses(
        (status = 200, description = "Hotel", body = HotelResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse)
    ),
    tags = ["hoteles"],
    operation_id = "getHotel",
    security([])
)]
#[get("/{id}")]
pub async fn get_hotel(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<web::Json<HotelResponse>> {
    let hotel = state.hotels.get(&HotelId::new(id.into_inner())).await?;
    Ok(web::Json(hotel.into()))
}

/// Create a hotel. The store assigns the id.
#[utoipa::path(
    post,
    path = "/hoteles",
    request_body = HotelRequest,
    responses(
        (status = 201, description = "Hotel created", body = HotelResponse),
        (status = 400, description = "Missing name or malformed JSON", body = ErrorResponse),
        (status = 401, description = "Unauthorised", body = ErrorResponse)
    ),
    tags = ["hoteles"],
    operation_id = "createHotel"
)]
#[post("")]
pub async fn create_hotel(
    state: web::Data<HttpState>,
    payload: web::Json<HotelRequest>,
) -> ApiResult<HttpResponse> {
    let draft = HotelDraft::try_from(payload.into_inner())?;
    let hotel = state.hotels.create(draft).await?;
    Ok(HttpResponse::Created().json(HotelResponse::from(hotel)))
}

/// Overwrite every field of an existing hotel.
#[utoipa::path(
    put,
    path = "/hoteles/{id}",
    params(("id" = String, Path, description = "Hotel identifier")),
    request_body = HotelRequest,
    responses(
        (status = 200, description = "Hotel updated", body = HotelResponse),
        (status = 400, description = "Missing name or malformed JSON", body = ErrorResponse),
        (status = 401, description = "Unauthorised", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse)
    ),
    tags = ["hoteles"],
    operation_id = "updateHotel"
)]
#[put("/{id}")]
pub async fn update_hotel(
    state: web::Data<HttpState>,
    id: web::Path<String>,
    payload: web::Json<HotelRequest>,
) -> ApiResult<web::Json<HotelResponse>> {
    let draft = HotelDraft::try_from(payload.into_inner())?;
    let hotel = state
        .hotels
        .update(&HotelId::new(id.into_inner()), draft)
        .await?;
    Ok(web::Json(hotel.into()))
}

#[utoipa::path(
    delete,
    path = "/hoteles/{id}",
    params(("id" = String, Path, description = "Hotel identifier")),
    responses(
        (status = 204, description = "Hotel deleted"),
        (status = 401, description = "Unauthorised", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse)
    ),
    tags = ["hoteles"],
    operation_id = "deleteHotel"
)]
#[delete("/{id}")]
pub async fn delete_hotel(
    state: web::Data<HttpState>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    state.hotels.delete(&HotelId::new(id.into_inner())).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Case-insensitive substring search over locations.
#[utoipa::path(
    get,
    path = "/hoteles/busqueda",
    params(("ubicacion" = Option<String>, Query, description = "City or area fragment")),
    responses(
        (status = 200, description = "Matching hotels", body = [HotelResponse]),
        (status = 400, description = "ubicacion missing or blank", body = ErrorResponse)
    ),
    tags = ["filtros"],
    operation_id = "searchHotelsByLocation",
    security([])
)]
#[get("/busqueda")]
pub async fn search_by_location(
    state: web::Data<HttpState>,
    query: web::Query<LocationQuery>,
) -> HotelList {
    let hotels = state
        .hotels
        .search_by_location(query.ubicacion.as_deref())
        .await?;
    Ok(web::Json(to_responses(hotels)))
}

#[utoipa::path(
    get,
    path = "/hoteles/calificacion/{valor}",
    params(("valor" = f64, Path, description = "Exact rating")),
    responses(
        (status = 200, description = "Hotels with that rating", body = [HotelResponse]),
        (status = 400, description = "Not a number", body = ErrorResponse),
        (status = 401, description = "Unauthorised", body = ErrorResponse)
    ),
    tags = ["filtros"],
    operation_id = "hotelsByRating"
)]
#[get("/calificacion/{valor}")]
pub async fn rating_equal_to(state: web::Data<HttpState>, valor: web::Path<f64>) -> HotelList {
    Ok(web::Json(to_responses(
        state.hotels.rating_equal_to(valor.into_inner()).await?,
    )))
}

#[utoipa::path(
    get,
    path = "/hoteles/calificacion/superior/{valor}",
    params(("valor" = f64, Path, description = "Exclusive lower bound")),
    responses(
        (status = 200, description = "Hotels rated above the bound", body = [HotelResponse]),
        (status = 400, description = "Not a number", body = ErrorResponse),
        (status = 401, description = "Unauthorised", body = ErrorResponse)
    ),
    tags = ["filtros"],
    operation_id = "hotelsRatedAbove"
)]
#[get("/calificacion/superior/{valor}")]
pub async fn rating_above(state: web::Data<HttpState>, valor: web::Path<f64>) -> HotelList {
    Ok(web::Json(to_responses(
        state.hotels.rating_above(valor.into_inner()).await?,
    )))
}

#[utoipa::path(
    get,
    path = "/hoteles/calificacion/inferior/{valor}",
    params(("valor" = f64, Path, description = "Exclusive upper bound")),
    responses(
        (status = 200, description = "Hotels rated below the bound", body = [HotelResponse]),
        (status = 400, description = "Not a number", body = ErrorResponse),
        (status = 401, description = "Unauthorised", body = ErrorResponse)
    ),
    tags = ["filtros"],
    operation_id = "hotelsRatedBelow"
)]
#[get("/calificacion/inferior/{valor}")]
pub async fn rating_below(state: web::Data<HttpState>, valor: web::Path<f64>) -> HotelList {
    Ok(web::Json(to_responses(
        state.hotels.rating_below(valor.into_inner()).await?,
    )))
}

#[utoipa::path(
    get,
    path = "/hoteles/precio/{valor}",
    params(("valor" = i32, Path, description = "Exact nightly price")),
    responses(
        (status = 200, description = "Hotels at that price", body = [HotelResponse]),
        (status = 400, description = "Not an integer", body = ErrorResponse),
        (status = 401, description = "Unauthorised", body = ErrorResponse)
    ),
    tags = ["filtros"],
    operation_id = "hotelsByPrice"
)]
#[get("/precio/{valor}")]
pub async fn price_equal_to(state: web::Data<HttpState>, valor: web::Path<i32>) -> HotelList {
    Ok(web::Json(to_responses(
        state.hotels.price_equal_to(valor.into_inner()).await?,
    )))
}

#[utoipa::path(
    get,
    path = "/hoteles/precio/superior/{valor}",
    params(("valor" = i32, Path, description = "Exclusive lower bound")),
    responses(
        (status = 200, description = "Hotels priced above the bound", body = [HotelResponse]),
        (status = 400, description = "Not an integer", body = ErrorResponse),
        (status = 401, description = "Unauthorised", body = ErrorResponse)
    ),
    tags = ["filtros"],
    operation_id = "hotelsPricedAbove"
)]
#[get("/precio/superior/{valor}")]
pub async fn price_above(state: web::Data<HttpState>, valor: web::Path<i32>) -> HotelList {
    Ok(web::Json(to_responses(
        state.hotels.price_above(valor.into_inner()).await?,
    )))
}

#[utoipa::path(
    get,
    path = "/hoteles/precio/inferior/{valor}",
    params(("valor" = i32, Path, description = "Exclusive upper bound")),
    responses(
        (status = 200, description = "Hotels priced below the bound", body = [HotelResponse]),
        (status = 400, description = "Not an integer", body = ErrorResponse),
        (status = 401, description = "Unauthorised", body = ErrorResponse)
    ),
    tags = ["filtros"],
    operation_id = "hotelsPricedBelow"
)]
#[get("/precio/inferior/{valor}")]
pub async fn price_below(state: web::Data<HttpState>, valor: web::Path<i32>) -> HotelList {
    Ok(web::Json(to_responses(
        state.hotels.price_below(valor.into_inner()).await?,
    )))
}

/// Exact-name lookup returning a single hotel.
#[utoipa::path(
    get,
    path = "/hoteles/nombre/{nombre}",
    params(("nombre" = String, Path, description = "Exact hotel name")),
    responses(
        (status = 200, description = "Hotel", body = HotelResponse),
        (status = 401, description = "Unauthorised", body = ErrorResponse),
        (status = 404, description = "Hotel not found", body = ErrorResponse)
    ),
    tags = ["filtros"],
    operation_id = "hotelByName"
)]
#[get("/nombre/{nombre}")]
pub async fn find_by_name(
    state: web::Data<HttpState>,
    nombre: web::Path<String>,
) -> ApiResult<web::Json<HotelResponse>> {
    let hotel = state.hotels.find_by_name(&nombre).await?;
    Ok(web::Json(hotel.into()))
}

#[utoipa::path(
    get,
    path = "/hoteles/estrellas/{minimo}",
    params(("minimo" = i32, Path, description = "Minimum stars, 0 to 5")),
    responses(
        (status = 200, description = "Hotels with at least that many stars", body = [HotelResponse]),
        (status = 400, description = "Out of range or not an integer", body = ErrorResponse),
        (status = 401, description = "Unauthorised", body = ErrorResponse)
    ),
    tags = ["filtros"],
    operation_id = "hotelsWithMinStars"
)]
#[get("/estrellas/{minimo}")]
pub async fn min_stars(state: web::Data<HttpState>, minimo: web::Path<i32>) -> HotelList {
    Ok(web::Json(to_responses(
        state.hotels.min_stars(minimo.into_inner()).await?,
    )))
}

/// Mount the `/hoteles` scope.
///
/// Literal sub-paths are registered before `/{id}` so they win the match.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/hoteles")
            .service(list_hotels)
            .service(create_hotel)
            .service(search_by_location)
            .service(super::bookings::create_booking)
            .service(rating_equal_to)
            .service(rating_above)
            .service(rating_below)
            .service(price_equal_to)
            .service(price_above)
            .service(price_below)
            .service(find_by_name)
            .service(min_stars)
            .service(get_hotel)
            .service(update_hotel)
            .service(delete_hotel),
    );
}

#[cfg(test)]
#[path = "hotels_tests.rs"]
mod tests;
