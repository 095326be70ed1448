//! PostgreSQL-backed [`HotelRepository`] using Diesel.

use async_trait::async_trait;
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::Bool;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::domain::ports::{HotelRepository, HotelRepositoryError};
use crate::domain::{Hotel, HotelDraft, HotelId};

use super::diesel_error_mapping::map_diesel_error;
use super::models::{HotelChangeset, HotelRow, NewHotelRow};
use super::pool::{DbPool, PoolError};
use super::schema::hotels;

type HotelPredicate = Box<dyn BoxableExpression<hotels::table, Pg, SqlType = Bool>>;

/// Diesel adapter for the hotel catalogue.
///
/// Identifiers are UUID v4 strings generated here on insert.
#[derive(Clone)]
pub struct DieselHotelRepository {
    pool: DbPool,
}

impl DieselHotelRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn load_where(
        &self,
        predicate: HotelPredicate,
    ) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<HotelRow> = hotels::table
            .into_boxed()
            .filter(predicate)
            .order(hotels::name.asc())
            .select(HotelRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows.into_iter().map(row_to_hotel).collect()
    }
}

fn map_pool_error(error: PoolError) -> HotelRepositoryError {
    HotelRepositoryError::connection(error.into_message())
}

fn diesel_error(error: diesel::result::Error) -> HotelRepositoryError {
    map_diesel_error(
        error,
        HotelRepositoryError::query,
        HotelRepositoryError::connection,
    )
}

fn row_to_hotel(row: HotelRow) -> Result<Hotel, HotelRepositoryError> {
    let HotelRow {
        id,
        name,
        rating,
        location,
        price_per_night,
        stars,
    } = row;
    HotelDraft::new(name, rating, location, price_per_night, stars)
        .map(|draft| draft.with_id(HotelId::new(id)))
        .map_err(|err| HotelRepositoryError::query(format!("invalid hotel row: {err}")))
}

/// `%fragment%` with LIKE metacharacters escaped under the default `\`
/// escape character.
fn contains_pattern(fragment: &str) -> String {
    let mut pattern = String::with_capacity(fragment.len() + 2);
    pattern.push('%');
    for ch in fragment.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[async_trait]
impl HotelRepository for DieselHotelRepository {
    async fn list(&self) -> Result<Vec<Hotel>, HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<HotelRow> = hotels::table
            .order(hotels::name.asc())
            .select(HotelRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows.into_iter().map(row_to_hotel).collect()
    }

    async fn find_by_id(&self, id: &HotelId) -> Result<Option<Hotel>, HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        hotels::table
            .find(id.as_str())
            .select(HotelRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?
            .map(row_to_hotel)
            .transpose()
    }

    async fn insert(&self, draft: &HotelDraft) -> Result<Hotel, HotelRepositoryError> {
        let id = Uuid::new_v4().to_string();
        let new_row = NewHotelRow {
            id: id.as_str(),
            name: draft.name(),
            rating: draft.rating(),
            location: draft.location(),
            price_per_night: draft.price_per_night(),
            stars: draft.stars(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(hotels::table)
            .values(&new_row)
            .returning(HotelRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        row_to_hotel(row)
    }

    async fn replace(
        &self,
        id: &HotelId,
        draft: &HotelDraft,
    ) -> Result<Option<Hotel>, HotelRepositoryError> {
        let changes = HotelChangeset {
            name: draft.name(),
            rating: draft.rating(),
            location: draft.location(),
            price_per_night: draft.price_per_night(),
            stars: draft.stars(),
        };
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(hotels::table.find(id.as_str()))
            .set(&changes)
            .returning(HotelRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?
            .map(row_to_hotel)
            .transpose()
    }

    async fn delete(&self, id: &HotelId) -> Result<bool, HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let deleted = diesel::delete(hotels::table.find(id.as_str()))
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(deleted > 0)
    }

    async fn rating_equal_to(&self, rating: f64) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.load_where(Box::new(hotels::rating.eq(rating))).await
    }

    async fn rating_above(&self, rating: f64) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.load_where(Box::new(hotels::rating.gt(rating))).await
    }

    async fn rating_below(&self, rating: f64) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.load_where(Box::new(hotels::rating.lt(rating))).await
    }

    async fn price_equal_to(&self, price: i32) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.load_where(Box::new(hotels::price_per_night.eq(price))).await
    }

    async fn price_above(&self, price: i32) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.load_where(Box::new(hotels::price_per_night.gt(price))).await
    }

    async fn price_below(&self, price: i32) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.load_where(Box::new(hotels::price_per_night.lt(price))).await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Hotel>, HotelRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        hotels::table
            .filter(hotels::name.eq(name))
            .order(hotels::id.asc())
            .select(HotelRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?
            .map(row_to_hotel)
            .transpose()
    }

    async fn location_contains(
        &self,
        fragment: &str,
    ) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.load_where(Box::new(hotels::location.ilike(contains_pattern(fragment))))
            .await
    }

    async fn stars_at_least(&self, stars: i32) -> Result<Vec<Hotel>, HotelRepositoryError> {
        self.load_where(Box::new(hotels::stars.ge(stars))).await
    }
}
