//! Extractor configuration turning actix rejection errors into domain errors.
//!
//! Without these, a non-numeric path segment or a broken JSON body would get
//! actix's plain-text 400/404 instead of the JSON error body.

use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError, UrlencodedError};
use actix_web::{HttpRequest, web};
use tracing::debug;

use crate::domain::Error;

fn path_error(err: PathError, req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, path = req.path(), "rejected path parameter");
    Error::invalid_parameter_format(format!("Parametro de ruta invalido: {err}")).into()
}

fn query_error(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected query string");
    Error::invalid_parameter_format(format!("Parametro de consulta invalido: {err}")).into()
}

fn json_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected JSON body");
    Error::malformed_json(String::new()).into()
}

fn form_error(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected login form");
    Error::unauthorized(String::new()).into()
}

/// Register the extractor error handlers on a scope or app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PathConfig::default().error_handler(path_error))
        .app_data(web::QueryConfig::default().error_handler(query_error))
        .app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::FormConfig::default().error_handler(form_error));
}
