//! Hotel domain: entities, errors, ports and services.
//!
//! Nothing here depends on HTTP or a particular store. Inbound adapters call
//! the services; outbound adapters implement the ports.

pub mod auth;
pub mod booking;
mod booking_service;
mod credential_login;
pub mod error;
pub mod hotel;
mod hotel_service;
pub mod ports;
pub mod trace_id;
pub mod user;

pub use self::auth::{LoginCredentials, LoginValidationError, MalformedPasswordHash, PasswordHash};
pub use self::booking::{BookingConfirmation, BookingRequest};
pub use self::booking_service::BookingService;
pub use self::credential_login::CredentialLoginService;
pub use self::error::{Error, ErrorKind};
pub use self::hotel::{Hotel, HotelDraft, HotelId};
pub use self::hotel_service::{HotelService, STARS_RANGE};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::User;
