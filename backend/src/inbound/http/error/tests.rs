//! Tests for HTTP error mapping.

use actix_web::ResponseError;
use actix_web::body::to_bytes;
use actix_web::http::StatusCode;
use rstest::rstest;

use super::*;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn body_of(error: &Error) -> ErrorResponse {
    let response = error.error_response();
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error body is JSON")
}

#[rstest]
#[case(Error::hotel_not_found("X"), 404, "Hotel no encontrado")]
#[case(Error::invalid_parameter_format("bad"), 400, "Formato invalido")]
#[case(Error::invalid_booking_request("bad"), 400, "Error en Reserva")]
#[case(Error::missing_parameter("ubicacion"), 400, "Faltan datos requeridos")]
#[case(Error::malformed_json("bad"), 400, "JSON mal formado")]
#[case(
    Error::database_connection("down"),
    503,
    "Servicio de base de datos no disponible"
)]
#[case(Error::unauthorized("no"), 401, "Usuario no autorizado")]
#[case(Error::unknown_user("ghost"), 401, "Usuario no autorizado")]
#[case(Error::internal("boom"), 500, "Error interno")]
#[actix_web::test]
async fn every_kind_has_a_status_and_label(
    #[case] error: Error,
    #[case] status: u16,
    #[case] label: &str,
) {
    assert_eq!(error.status_code().as_u16(), status);
    let body = body_of(&error).await;
    assert_eq!(body.error, label);
    assert_eq!(body.error_code, status);
}

#[rstest]
#[actix_web::test]
async fn not_found_body_carries_the_domain_message() {
    let body = body_of(&Error::hotel_not_found("X")).await;
    assert_eq!(
        body.message,
        "El hotel con ID X no ha sido encontrado en nuestro sistema."
    );
}

#[rstest]
#[actix_web::test]
async fn internal_details_are_redacted() {
    let body = body_of(&Error::internal("connection string leaked")).await;
    assert_eq!(body.message, "Internal server error");
}

#[rstest]
#[actix_web::test]
async fn trace_id_is_echoed_in_header_and_body() {
    let error = Error::unauthorized("no").with_trace_id(TRACE_ID);
    let response = error.error_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("ascii header");
    assert_eq!(header, TRACE_ID);
    assert_eq!(body_of(&error).await.trace_id.as_deref(), Some(TRACE_ID));
}

#[rstest]
fn trace_id_is_omitted_when_absent() {
    let json = serde_json::to_value(ErrorResponse::from(&Error::unauthorized("no")))
        .expect("serialises");
    assert!(json.get("traceId").is_none());
    assert_eq!(json["errorCode"], 401);
}
