//! Booking confirmation use-case.

use std::sync::Arc;

use tracing::info;

use crate::domain::hotel_service::map_repository_error;
use crate::domain::ports::HotelRepository;
use crate::domain::{BookingConfirmation, BookingRequest, Error, HotelId};

/// Validates booking requests against the hotel catalogue.
///
/// Confirmed bookings are not stored anywhere; the service only answers
/// whether the request would be accepted.
#[derive(Clone)]
pub struct BookingService {
    hotels: Arc<dyn HotelRepository>,
}

impl BookingService {
    pub fn new(hotels: Arc<dyn HotelRepository>) -> Self {
        Self { hotels }
    }

    /// Validate `request` and produce a confirmation.
    ///
    /// Checks run in this order, first failure wins:
    /// 1. `MissingRequiredParameter` when `hotel_id` is absent or blank.
    /// 2. `HotelNotFound` when no hotel has that id.
    /// 3. `InvalidBookingRequest` when `nights` is absent or not positive.
    pub async fn confirm(&self, request: &BookingRequest) -> Result<BookingConfirmation, Error> {
        let hotel_id = request
            .hotel_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .map(HotelId::new)
            .ok_or_else(|| Error::missing_parameter("hotelId"))?;

        let hotel = self
            .hotels
            .find_by_id(&hotel_id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::hotel_not_found(&hotel_id))?;

        match request.nights {
            Some(nights) if nights > 0 => {}
            _ => {
                return Err(Error::invalid_booking_request(
                    "Numeros de noches deben ser mayores a 0",
                ));
            }
        }

        info!(hotel_id = %hotel_id, nights = ?request.nights, "booking confirmed");
        Ok(BookingConfirmation::new(hotel_id, hotel.name()))
    }
}
