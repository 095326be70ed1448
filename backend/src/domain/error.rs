//! Domain-level error types.
//!
//! Every failure the hotel domain can report is one [`ErrorKind`]. The kinds
//! are transport agnostic: the HTTP adapter owns the translation into status
//! codes and response bodies, so services never mention status literals.

use std::fmt;

use super::trace_id::TraceId;

/// Closed set of domain failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A hotel lookup by id or name yielded nothing.
    HotelNotFound,
    /// A path or query parameter is malformed or out of range.
    InvalidParameterFormat,
    /// A booking request carries an absent or non-positive night count.
    InvalidBookingRequest,
    /// A required query or body field is absent or blank.
    MissingRequiredParameter,
    /// The request body is not valid JSON for the expected shape.
    MalformedJson,
    /// The backing store could not be reached.
    DatabaseConnection,
    /// Credentials were missing or did not match.
    Unauthorized,
    /// Authentication named a user the store does not know.
    UnknownUser,
    /// An unexpected failure inside the service.
    Internal,
}

/// Domain error payload: a kind, a human-readable message and the trace id
/// of the request that produced it.
///
/// ## Invariants
/// - `message` is never blank; constructors substitute the kind's default
///   text when given one.
///
/// # Examples
/// ```
/// use hotel_backend::domain::{Error, ErrorKind};
///
/// let err = Error::hotel_not_found("abc");
/// assert_eq!(err.kind(), ErrorKind::HotelNotFound);
/// assert!(err.message().contains("abc"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
    trace_id: Option<String>,
}

impl Error {
    /// Create an error of the given kind.
    ///
    /// Captures the current trace identifier when one is in scope so the
    /// eventual response is correlated automatically.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            default_message(kind).to_owned()
        } else {
            message
        };
        Self {
            kind,
            message,
            trace_id: TraceId::current().map(|id| id.to_string()),
        }
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Human-readable detail.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured at construction, if any.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Attach an explicit trace identifier.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// No hotel matches `reference` (an id or a name).
    pub fn hotel_not_found(reference: impl fmt::Display) -> Self {
        Self::new(
            ErrorKind::HotelNotFound,
            format!("El hotel con ID {reference} no ha sido encontrado en nuestro sistema."),
        )
    }

    /// A parameter could not be parsed or is out of range.
    pub fn invalid_parameter_format(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidParameterFormat, message)
    }

    /// The booking request failed validation.
    pub fn invalid_booking_request(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidBookingRequest, message)
    }

    /// The named parameter is required but absent or blank.
    pub fn missing_parameter(parameter: &str) -> Self {
        Self::new(
            ErrorKind::MissingRequiredParameter,
            format!("El parametro requerido '{parameter}' no esta."),
        )
    }

    /// The request body could not be decoded.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedJson, message)
    }

    /// The store is unreachable.
    pub fn database_connection(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::DatabaseConnection, message)
    }

    /// Credentials are missing or wrong.
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unauthorized, message)
    }

    /// The username is not registered.
    pub fn unknown_user(username: &str) -> Self {
        Self::new(
            ErrorKind::UnknownUser,
            format!("Usuario no encontrado: {username}"),
        )
    }

    /// Unexpected internal failure.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

fn default_message(kind: ErrorKind) -> &'static str {
    match kind {
        ErrorKind::HotelNotFound => "El hotel no ha sido encontrado en nuestro sistema.",
        ErrorKind::InvalidParameterFormat => "Formato de parametro invalido.",
        ErrorKind::InvalidBookingRequest => "La solicitud de reserva no es valida.",
        ErrorKind::MissingRequiredParameter => "Falta un parametro requerido.",
        ErrorKind::MalformedJson => "The request body contains an invalid or malformed JSON.",
        ErrorKind::DatabaseConnection => {
            "A critical error occurred while connecting to the database."
        }
        ErrorKind::Unauthorized => "El usuario y contraseña no coinciden",
        ErrorKind::UnknownUser => "Usuario no encontrado",
        ErrorKind::Internal => "Internal server error",
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
