//! Hotel catalogue use-cases.
//!
//! Wraps the [`HotelRepository`] port with the not-found and parameter
//! checks the catalogue promises to callers, and translates port failures
//! into domain errors.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::ports::{HotelRepository, HotelRepositoryError};
use crate::domain::{Error, Hotel, HotelDraft, HotelId};

/// Inclusive bounds accepted by the minimum-stars filter.
pub const STARS_RANGE: std::ops::RangeInclusive<i32> = 0..=5;

/// Catalogue service over a hotel store.
#[derive(Clone)]
pub struct HotelService {
    repository: Arc<dyn HotelRepository>,
}

pub(crate) fn map_repository_error(error: HotelRepositoryError) -> Error {
    match error {
        HotelRepositoryError::Connection { message } => Error::database_connection(message),
        HotelRepositoryError::Query { message } => {
            Error::internal(format!("hotel repository error: {message}"))
        }
    }
}

impl HotelService {
    pub fn new(repository: Arc<dyn HotelRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> Result<Vec<Hotel>, Error> {
        self.repository.list().await.map_err(map_repository_error)
    }

    /// # Errors
    /// `HotelNotFound` naming `id` when absent.
    pub async fn get(&self, id: &HotelId) -> Result<Hotel, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::hotel_not_found(id))
    }

    /// Store a new hotel; the store assigns its identifier.
    pub async fn create(&self, draft: HotelDraft) -> Result<Hotel, Error> {
        let hotel = self
            .repository
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        info!(hotel_id = %hotel.id(), "hotel created");
        Ok(hotel)
    }

    /// Overwrite every field of the hotel at `id`, keeping that id.
    pub async fn update(&self, id: &HotelId, draft: HotelDraft) -> Result<Hotel, Error> {
        let hotel = self
            .repository
            .replace(id, &draft)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::hotel_not_found(id))?;
        info!(hotel_id = %id, "hotel updated");
        Ok(hotel)
    }

    pub async fn delete(&self, id: &HotelId) -> Result<(), Error> {
        let deleted = self
            .repository
            .delete(id)
            .await
            .map_err(map_repository_error)?;
        if !deleted {
            return Err(Error::hotel_not_found(id));
        }
        info!(hotel_id = %id, "hotel deleted");
        Ok(())
    }

    pub async fn rating_equal_to(&self, rating: f64) -> Result<Vec<Hotel>, Error> {
        self.repository
            .rating_equal_to(rating)
            .await
            .map_err(map_repository_error)
    }

    pub async fn rating_above(&self, rating: f64) -> Result<Vec<Hotel>, Error> {
        self.repository
            .rating_above(rating)
            .await
            .map_err(map_repository_error)
    }

    pub async fn rating_below(&self, rating: f64) -> Result<Vec<Hotel>, Error> {
        self.repository
            .rating_below(rating)
            .await
            .map_err(map_repository_error)
    }

    pub async fn price_equal_to(&self, price: i32) -> Result<Vec<Hotel>, Error> {
        self.repository
            .price_equal_to(price)
            .await
            .map_err(map_repository_error)
    }

    pub async fn price_above(&self, price: i32) -> Result<Vec<Hotel>, Error> {
        self.repository
            .price_above(price)
            .await
            .map_err(map_repository_error)
    }

    pub async fn price_below(&self, price: i32) -> Result<Vec<Hotel>, Error> {
        self.repository
            .price_below(price)
            .await
            .map_err(map_repository_error)
    }

    /// # Errors
    /// `HotelNotFound` naming `name` when no hotel carries it.
    pub async fn find_by_name(&self, name: &str) -> Result<Hotel, Error> {
        self.repository
            .find_by_name(name)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::hotel_not_found(name))
    }

    /// Case-insensitive substring search over locations.
    ///
    /// # Errors
    /// `MissingRequiredParameter` naming `ubicacion` when `location` is
    /// absent or blank.
    pub async fn search_by_location(&self, location: Option<&str>) -> Result<Vec<Hotel>, Error> {
        let fragment = location
            .filter(|value| !value.trim().is_empty())
            .ok_or_else(|| Error::missing_parameter("ubicacion"))?;
        debug!(fragment, "searching hotels by location");
        self.repository
            .location_contains(fragment)
            .await
            .map_err(map_repository_error)
    }

    /// Hotels with at least `stars` stars.
    ///
    /// # Errors
    /// `InvalidParameterFormat` when `stars` falls outside [`STARS_RANGE`].
    /// The store is not consulted in that case.
    pub async fn min_stars(&self, stars: i32) -> Result<Vec<Hotel>, Error> {
        if !STARS_RANGE.contains(&stars) {
            return Err(Error::invalid_parameter_format(format!(
                "Las estrellas deben estar entre {} y {}, recibido: {stars}",
                STARS_RANGE.start(),
                STARS_RANGE.end()
            )));
        }
        self.repository
            .stars_at_least(stars)
            .await
            .map_err(map_repository_error)
    }
}

#[cfg(test)]
#[path = "hotel_service_tests.rs"]
mod tests;
