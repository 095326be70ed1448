//! Booking request and confirmation values.
//!
//! Bookings are validated against the hotel catalogue and confirmed, but never
//! stored.

use super::HotelId;

/// Unvalidated booking request as received from a caller.
///
/// Every field is optional so that the booking service, not the transport,
/// decides which omissions are errors and in which order they are reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingRequest {
    pub hotel_id: Option<String>,
    pub customer_name: Option<String>,
    pub check_in: Option<String>,
    pub nights: Option<i32>,
}

/// Outcome of a successful booking validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingConfirmation {
    hotel_id: HotelId,
    hotel_name: String,
}

impl BookingConfirmation {
    pub fn new(hotel_id: HotelId, hotel_name: impl Into<String>) -> Self {
        Self {
            hotel_id,
            hotel_name: hotel_name.into(),
        }
    }

    pub fn hotel_id(&self) -> &HotelId {
        &self.hotel_id
    }

    pub fn hotel_name(&self) -> &str {
        self.hotel_name.as_str()
    }

    /// Text returned to the caller.
    ///
    /// # Examples
    /// ```
    /// use hotel_backend::domain::{BookingConfirmation, HotelId};
    ///
    /// let confirmation = BookingConfirmation::new(HotelId::new("h1"), "Plaza");
    /// assert_eq!(confirmation.message(), "Reserva confirmada para el hotel: Plaza");
    /// ```
    pub fn message(&self) -> String {
        format!("Reserva confirmada para el hotel: {}", self.hotel_name)
    }
}
