//! Handler tests over the in-memory store with the full middleware stack.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use rstest::rstest;
use serde_json::json;

use crate::domain::ports::HotelRepository;
use crate::domain::{HotelDraft, TRACE_ID_HEADER};
use crate::inbound::http::auth::Authentication;
use crate::inbound::http::error::ErrorResponse;
use crate::inbound::http::hotels_dto::HotelResponse;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::test_utils::{basic_auth, memory_state, test_session_middleware};
use crate::middleware::Trace;
use crate::outbound::memory::InMemoryHotelRepository;

fn test_app(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Authentication)
        .wrap(test_session_middleware())
        .wrap(Trace)
        .configure(crate::inbound::http::configure)
}

async fn seed(
    hotels: &Arc<InMemoryHotelRepository>,
    name: &str,
    rating: f64,
    location: &str,
    price: i32,
    stars: i32,
) -> String {
    let draft = HotelDraft::new(name, rating, location, price, stars).expect("valid draft");
    hotels
        .insert(&draft)
        .await
        .expect("insert")
        .id()
        .as_str()
        .to_owned()
}

async fn catalogue() -> (HttpState, Arc<InMemoryHotelRepository>) {
    let (state, hotels) = memory_state().await;
    seed(&hotels, "Plaza", 4.5, "Madrid Centro", 120, 4).await;
    seed(&hotels, "Costa", 3.8, "Valencia", 80, 3).await;
    seed(&hotels, "Sierra", 4.0, "Granada", 150, 5).await;
    (state, hotels)
}

fn names(hotels: &[HotelResponse]) -> Vec<&str> {
    hotels.iter().map(|hotel| hotel.nombre.as_str()).collect()
}

#[rstest]
#[actix_web::test]
async fn anonymous_listing_returns_every_hotel() {
    let (state, _) = catalogue().await;
    let app = test::init_service(test_app(state)).await;
    let response = test::call_service(&app, test::TestRequest::get().uri("/hoteles").to_request()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<HotelResponse> = test::read_body_json(response).await;
    assert_eq!(names(&body), ["Costa", "Plaza", "Sierra"]);
}

#[rstest]
#[actix_web::test]
async fn unknown_id_is_not_found_with_message() {
    let (state, _) = catalogue().await;
    let app = test::init_service(test_app(state)).await;
    let response =
        test::call_service(&app, test::TestRequest::get().uri("/hoteles/nope").to_request()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(response.headers().contains_key(TRACE_ID_HEADER));
    let body: ErrorResponse = test::read_body_json(response).await;
    assert_eq!(body.error_code, 404);
    assert_eq!(
        body.message,
        "El hotel con ID nope no ha sido encontrado en nuestro sistema."
    );
    assert!(body.trace_id.is_some());
}

#[rstest]
#[case("/hoteles/precio/superior/120", &["Sierra"])]
#[case("/hoteles/precio/superior/119", &["Plaza", "Sierra"])]
#[case("/hoteles/precio/inferior/120", &["Costa"])]
#[case("/hoteles/precio/80", &["Costa"])]
#[case("/hoteles/calificacion/4.5", &["Plaza"])]
#[case("/hoteles/calificacion/superior/4.0", &["Plaza"])]
#[case("/hoteles/calificacion/inferior/4.0", &["Costa"])]
#[case("/hoteles/estrellas/4", &["Plaza", "Sierra"])]
#[case("/hoteles/estrellas/0", &["Costa", "Plaza", "Sierra"])]
#[actix_web::test]
async fn protected_filters_apply_their_bounds(#[case] uri: &str, #[case] expected: &[&str]) {
    let (state, _) = catalogue().await;
    let app = test::init_service(test_app(state)).await;
    let request = test::TestRequest::get()
        .uri(uri)
        .insert_header(("Authorization", basic_auth()))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Vec<HotelResponse> = test::read_body_json(response).await;
    assert_eq!(names(&body), expected);
}

#[rstest]
#[case("/hoteles/estrellas/6")]
#[case("/hoteles/estrellas/-1")]
#[case("/hoteles/precio/barato")]
#[case("/hoteles/calificacion/alta")]
#[actix_web::test]
async fn bad_filter_values_are_bad_requests(#[case] uri: &str) {
    let (state, _) = catalogue().await;
    let app = test::init_service(test_app(state)).await;
    let request = test::TestRequest::get()
        .uri(uri)
        .insert_header(("Authorization", basic_auth()))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(response).await;
    assert_eq!(body.error_code, 400);
}

#[rstest]
#[actix_web::test]
async fn protected_route_without_credentials_is_unauthorised() {
    let (state, _) = catalogue().await;
    let app = test::init_service(test_app(state)).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get().uri("/hoteles/precio/100").to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body: ErrorResponse = test::read_body_json(response).await;
    assert_eq!(body.error_code, 401);
    assert!(body.trace_id.is_some());
}

#[rstest]
#[case("/hoteles/busqueda?ubicacion=madrid", StatusCode::OK)]
#[case("/hoteles/busqueda?ubicacion=%20", StatusCode::BAD_REQUEST)]
#[case("/hoteles/busqueda", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn location_search_is_public_and_requires_a_value(
    #[case] uri: &str,
    #[case] expected: StatusCode,
) {
    let (state, _) = catalogue().await;
    let app = test::init_service(test_app(state)).await;
    let response = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
    assert_eq!(response.status(), expected);
}

#[rstest]
#[actix_web::test]
async fn location_search_matches_substrings() {
    let (state, _) = catalogue().await;
    let app = test::init_service(test_app(state)).await;
    let response = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/hoteles/busqueda?ubicacion=centro")
            .to_request(),
    )
    .await;
    let body: Vec<HotelResponse> = test::read_body_json(response).await;
    assert_eq!(names(&body), ["Plaza"]);
}

#[rstest]
#[actix_web::test]
async fn create_update_delete_cycle() {
    let (state, _) = memory_state().await;
    let app = test::init_service(test_app(state)).await;

    let created = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/hoteles")
            .insert_header(("Authorization", basic_auth()))
            .set_json(json!({
                "nombre": "Faro",
                "calificacion": 4.2,
                "ubicacion": "Cadiz",
                "precioPorNoche": 95,
                "estrellas": 3
            }))
            .to_request(),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let hotel: HotelResponse = test::read_body_json(created).await;
    assert!(!hotel.id.is_empty());
    let uri = format!("/hoteles/{}", hotel.id);

    let updated = test::call_service(
        &app,
        test::TestRequest::put()
            .uri(&uri)
            .insert_header(("Authorization", basic_auth()))
            .set_json(json!({"id": "ignored", "nombre": "Faro Nuevo", "ubicacion": "Cadiz"}))
            .to_request(),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let body: HotelResponse = test::read_body_json(updated).await;
    assert_eq!(body.id, hotel.id);
    assert_eq!(body.nombre, "Faro Nuevo");
    assert_eq!(body.precio_por_noche, 0);

    let deleted = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header(("Authorization", basic_auth()))
            .to_request(),
    )
    .await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    let gone = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(gone.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case(json!({"ubicacion": "Madrid"}))]
#[case(json!({"nombre": "   "}))]
#[actix_web::test]
async fn create_without_name_is_bad_request(#[case] payload: serde_json::Value) {
    let (state, _) = memory_state().await;
    let app = test::init_service(test_app(state)).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/hoteles")
            .insert_header(("Authorization", basic_auth()))
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn malformed_json_is_bad_request() {
    let (state, _) = memory_state().await;
    let app = test::init_service(test_app(state)).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/hoteles")
            .insert_header(("Authorization", basic_auth()))
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"nombre\": ")
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: ErrorResponse = test::read_body_json(response).await;
    assert_eq!(body.error, "JSON mal formado");
}

#[rstest]
#[actix_web::test]
async fn updating_missing_hotel_is_not_found() {
    let (state, _) = memory_state().await;
    let app = test::init_service(test_app(state)).await;
    let response = test::call_service(
        &app,
        test::TestRequest::put()
            .uri("/hoteles/missing")
            .insert_header(("Authorization", basic_auth()))
            .set_json(json!({"nombre": "Nada"}))
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn name_lookup_is_exact() {
    let (state, _) = catalogue().await;
    let app = test::init_service(test_app(state)).await;
    let found = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/hoteles/nombre/Plaza")
            .insert_header(("Authorization", basic_auth()))
            .to_request(),
    )
    .await;
    assert_eq!(found.status(), StatusCode::OK);
    let missing = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/hoteles/nombre/plaza")
            .insert_header(("Authorization", basic_auth()))
            .to_request(),
    )
    .await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case(json!({"hotelId": "EXISTS", "nombreCliente": "Ana", "noches": 2}), StatusCode::CREATED)]
#[case(json!({"hotelId": "EXISTS", "noches": 0}), StatusCode::BAD_REQUEST)]
#[case(json!({"hotelId": "missing", "noches": 0}), StatusCode::NOT_FOUND)]
#[case(json!({"noches": 2}), StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn booking_outcomes(#[case] mut payload: serde_json::Value, #[case] expected: StatusCode) {
    let (state, hotels) = memory_state().await;
    let id = seed(&hotels, "Plaza", 4.5, "Madrid", 120, 4).await;
    if payload["hotelId"] == "EXISTS" {
        payload["hotelId"] = json!(id);
    }
    let app = test::init_service(test_app(state)).await;
    let response = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/hoteles/reservas")
            .insert_header(("Authorization", basic_auth()))
            .set_json(payload)
            .to_request(),
    )
    .await;
    assert_eq!(response.status(), expected);
    if expected == StatusCode::CREATED {
        let body = test::read_body(response).await;
        assert_eq!(body, "Reserva confirmada para el hotel: Plaza".as_bytes());
    }
}

#[rstest]
#[actix_web::test]
async fn session_cookie_grants_access() {
    let (state, _) = catalogue().await;
    let app = test::init_service(test_app(state)).await;
    let login = test::call_service(
        &app,
        test::TestRequest::post()
            .uri("/login")
            .insert_header(("content-type", "application/x-www-form-urlencoded"))
            .set_payload("username=admin&password=secret")
            .to_request(),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
    let cookie = login
        .response()
        .cookies()
        .find(|cookie| cookie.name() == "session")
        .expect("session cookie")
        .into_owned();

    let filtered = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/hoteles/estrellas/5")
            .cookie(cookie.clone())
            .to_request(),
    )
    .await;
    assert_eq!(filtered.status(), StatusCode::OK);
    let body: Vec<HotelResponse> = test::read_body_json(filtered).await;
    assert_eq!(names(&body), ["Sierra"]);
}
