//! Shared HTTP adapter state.
//!
//! Handlers and the authentication middleware read this through
//! `web::Data<HttpState>`; they reach storage only via the domain services.

use std::sync::Arc;

use crate::domain::ports::{HotelRepository, LoginService};
use crate::domain::{BookingService, HotelService};

/// Port implementations the HTTP layer is built from.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub hotels: Arc<dyn HotelRepository>,
    pub login: Arc<dyn LoginService>,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub hotels: HotelService,
    pub bookings: BookingService,
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Build the services over the given ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use hotel_backend::domain::CredentialLoginService;
    /// use hotel_backend::inbound::http::state::{HttpState, HttpStatePorts};
    /// use hotel_backend::outbound::memory::{InMemoryHotelRepository, InMemoryUserRepository};
    ///
    /// let users = Arc::new(InMemoryUserRepository::new());
    /// let state = HttpState::new(HttpStatePorts {
    ///     hotels: Arc::new(InMemoryHotelRepository::new()),
    ///     login: Arc::new(CredentialLoginService::new(users)),
    /// });
    /// let _hotels = state.hotels.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts { hotels, login } = ports;
        Self {
            hotels: HotelService::new(Arc::clone(&hotels)),
            bookings: BookingService::new(hotels),
            login,
        }
    }
}
