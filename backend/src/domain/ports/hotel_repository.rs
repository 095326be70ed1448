//! Driven port for hotel storage and filtered lookups.
//!
//! Each comparison (equal, above, below) over rating and price is its own
//! method so adapters push the predicate down to the store instead of the
//! service filtering full listings.

use async_trait::async_trait;

use crate::domain::{Hotel, HotelDraft, HotelId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by hotel repository adapters.
    pub enum HotelRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "hotel repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } => "hotel repository query failed: {message}",
    }
}

/// Hotel persistence port.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelRepository: Send + Sync {
    /// Every stored hotel.
    async fn list(&self) -> Result<Vec<Hotel>, HotelRepositoryError>;

    async fn find_by_id(&self, id: &HotelId) -> Result<Option<Hotel>, HotelRepositoryError>;

    /// Store a new hotel under a freshly assigned identifier.
    async fn insert(&self, draft: &HotelDraft) -> Result<Hotel, HotelRepositoryError>;

    /// Overwrite every field of an existing hotel.
    ///
    /// Returns `None` when no hotel has that identifier.
    async fn replace(
        &self,
        id: &HotelId,
        draft: &HotelDraft,
    ) -> Result<Option<Hotel>, HotelRepositoryError>;

    /// Remove a hotel. Returns whether a record was deleted.
    async fn delete(&self, id: &HotelId) -> Result<bool, HotelRepositoryError>;

    async fn rating_equal_to(&self, rating: f64) -> Result<Vec<Hotel>, HotelRepositoryError>;

    /// Hotels rated strictly above `rating`.
    async fn rating_above(&self, rating: f64) -> Result<Vec<Hotel>, HotelRepositoryError>;

    /// Hotels rated strictly below `rating`.
    async fn rating_below(&self, rating: f64) -> Result<Vec<Hotel>, HotelRepositoryError>;

    async fn price_equal_to(&self, price: i32) -> Result<Vec<Hotel>, HotelRepositoryError>;

    /// Hotels priced strictly above `price`.
    async fn price_above(&self, price: i32) -> Result<Vec<Hotel>, HotelRepositoryError>;

    /// Hotels priced strictly below `price`.
    async fn price_below(&self, price: i32) -> Result<Vec<Hotel>, HotelRepositoryError>;

    /// First hotel whose name equals `name` exactly.
    async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>, HotelRepositoryError>;

    /// Hotels whose location contains `fragment`, ignoring case.
    ///
    /// `fragment` is matched literally; pattern metacharacters carry no
    /// meaning.
    async fn location_contains(&self, fragment: &str)
    -> Result<Vec<Hotel>, HotelRepositoryError>;

    /// Hotels with at least `stars` stars.
    async fn stars_at_least(&self, stars: i32) -> Result<Vec<Hotel>, HotelRepositoryError>;
}
