//! Translation of domain errors into HTTP responses.
//!
//! The status code and the `error` label of every [`ErrorKind`] are decided
//! here and nowhere else.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorKind, TRACE_ID_HEADER};

/// Result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// JSON error body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Short category label.
    #[schema(example = "Hotel no encontrado")]
    pub error: String,
    /// Human-readable detail.
    #[schema(example = "El hotel con ID X no ha sido encontrado en nuestro sistema.")]
    pub message: String,
    /// Numeric HTTP status repeated in the body.
    #[schema(example = 404)]
    pub error_code: u16,
    /// Request correlation id, when one was in scope.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::HotelNotFound => StatusCode::NOT_FOUND,
        ErrorKind::InvalidParameterFormat
        | ErrorKind::InvalidBookingRequest
        | ErrorKind::MissingRequiredParameter
        | ErrorKind::MalformedJson => StatusCode::BAD_REQUEST,
        ErrorKind::DatabaseConnection => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Unauthorized | ErrorKind::UnknownUser => StatusCode::UNAUTHORIZED,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn label_for(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::HotelNotFound => "Hotel no encontrado",
        ErrorKind::InvalidParameterFormat => "Formato invalido",
        ErrorKind::InvalidBookingRequest => "Error en Reserva",
        ErrorKind::MissingRequiredParameter => "Faltan datos requeridos",
        ErrorKind::MalformedJson => "JSON mal formado",
        ErrorKind::DatabaseConnection => "Servicio de base de datos no disponible",
        ErrorKind::Unauthorized | ErrorKind::UnknownUser => "Usuario no autorizado",
        ErrorKind::Internal => "Error interno",
    }
}

impl From<&Error> for ErrorResponse {
    fn from(err: &Error) -> Self {
        let message = match err.kind() {
            ErrorKind::Internal => "Internal server error".to_owned(),
            _ => err.message().to_owned(),
        };
        Self {
            error: label_for(err.kind()).to_owned(),
            message,
            error_code: status_for(err.kind()).as_u16(),
            trace_id: err.trace_id().map(str::to_owned),
        }
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.kind())
    }

    fn error_response(&self) -> HttpResponse {
        if self.kind() == ErrorKind::Internal {
            error!(message = self.message(), trace_id = ?self.trace_id(), "internal error");
        }
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(ErrorResponse::from(self))
    }
}

#[cfg(test)]
mod tests;
