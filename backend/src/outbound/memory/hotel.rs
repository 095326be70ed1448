//! In-memory [`HotelRepository`].

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{HotelRepository, HotelRepositoryError};
use crate::domain::{Hotel, HotelDraft, HotelId};

/// Cloneable handle; clones share the same map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHotelRepository {
    hotels: Arc<RwLock<HashMap<HotelId, Hotel>>>,
}

fn poisoned<T>(_: PoisonError<T>) -> HotelRepositoryError {
    HotelRepositoryError::query("hotel store lock poisoned")
}

impl InMemoryHotelRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hotels matching `keep`, ordered by name then id.
    fn select(&self, keep: impl Fn(&Hotel) -> bool) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let guard = self.hotels.read().map_err(poisoned)?;
        let mut selected: Vec<Hotel> = guard.values().filter(|&hotel| keep(hotel)).cloned().collect();
        selected.sort_by(|a, b| {
            a.name()
                .cmp(b.name())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(selected)
    }
}

#[async_trait]
impl HotelRepository for InMemoryHotelRepository {
    async fn list(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.select(|_| true)
    }

    async fn find_by_id(&self, id: &HotelId) -> Result<Option<Hotel>, HotelRepositoryError> {
        let guard = self.hotels.read().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    async fn insert(&self, draft: &HotelDraft) -> Result<Hotel, HotelRepositoryError> {
        let hotel = draft
            .clone()
            .with_id(HotelId::new(Uuid::new_v4().to_string()));
        let mut guard = self.hotels.write().map_err(poisoned)?;
        guard.insert(hotel.id().clone(), hotel.clone());
        Ok(hotel)
    }

    async fn replace(
        &self,
        id: &HotelId,
        draft: &HotelDraft,
    ) -> Result<Option<Hotel>, HotelRepositoryError> {
        let mut guard = self.hotels.write().map_err(poisoned)?;
        Ok(guard.get_mut(id).map(|slot| {
            *slot = draft.clone().with_id(id.clone());
            slot.clone()
        }))
    }

    async fn delete(&self, id: &HotelId) -> Result<bool, HotelRepositoryError> {
        let mut guard = self.hotels.write().map_err(poisoned)?;
        Ok(guard.remove(id).is_some())
    }

    async fn rating_equal_to(&self, rating: f64) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.select(|h| h.rating() == rating)
    }

    async fn rating_above(&self, rating: f64) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.select(|h| h.rating() > rating)
    }

    async fn rating_below(&self, rating: f64) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.select(|h| h.rating() < rating)
    }

    async fn price_equal_to(&self, price: i32) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.select(|h| h.price_per_night() == price)
    }

    async fn price_above(&self, price: i32) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.select(|h| h.price_per_night() > price)
    }

    async fn price_below(&self, price: i32) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.select(|h| h.price_per_night() < price)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>, HotelRepositoryError> {
        Ok(self.select(|h| h.name() == name)?.into_iter().next())
    }

    async fn location_contains(
        &self,
        fragment: &str,
    ) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let needle = fragment.to_lowercase();
        self.select(|h| h.location().to_lowercase().contains(&needle))
    }

    async fn stars_at_least(&self, stars: i32) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.select(|h| h.stars() >= stars)
    }
}
