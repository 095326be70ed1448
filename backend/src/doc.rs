//! OpenAPI documentation.
//!
//! [`ApiDoc`] collects every handler under [`crate::inbound::http`] plus the
//! wire schemas. Protected operations inherit the document-level security
//! requirement (HTTP Basic or the session cookie); public ones override it
//! with `security([])`.

use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::hotels_dto::{BookingRequestBody, HotelRequest, HotelResponse};
use crate::inbound::http::login::LoginForm;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BasicAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Basic)
                    .description(Some("Credentials of a registered user."))
                    .build(),
            ),
        );
        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /login.",
            ))),
        );
    }
}

/// OpenAPI document for the hotel API. Served by Swagger UI in debug builds.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Hoteles API",
        description = "Hotel catalogue with search filters and booking confirmation."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BasicAuth" = []), ("SessionCookie" = [])),
    paths(
        crate::inbound::http::hotels::list_hotels,
        crate::inbound::http::hotels::get_hotel,
        crate::inbound::http::hotels::create_hotel,
        crate::inbound::http::hotels::update_hotel,
        crate::inbound::http::hotels::delete_hotel,
        crate::inbound::http::hotels::search_by_location,
        crate::inbound::http::hotels::rating_equal_to,
        crate::inbound::http::hotels::rating_above,
        crate::inbound::http::hotels::rating_below,
        crate::inbound::http::hotels::price_equal_to,
        crate::inbound::http::hotels::price_above,
        crate::inbound::http::hotels::price_below,
        crate::inbound::http::hotels::find_by_name,
        crate::inbound::http::hotels::min_stars,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::login::login,
        crate::inbound::http::login::logout,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(HotelRequest, HotelResponse, BookingRequestBody, ErrorResponse, LoginForm)),
    tags(
        (name = "hoteles", description = "Hotel CRUD"),
        (name = "filtros", description = "Catalogue filters"),
        (name = "reservas", description = "Booking confirmation"),
        (name = "autenticacion", description = "Form login and logout"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
