//! Diesel row structs. Persistence-internal; never handed to the domain.

use diesel::prelude::*;

use super::schema::{hotels, users};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = hotels)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct HotelRow {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub location: String,
    pub price_per_night: i32,
    pub stars: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = hotels)]
pub(crate) struct NewHotelRow<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub rating: f64,
    pub location: &'a str,
    pub price_per_night: i32,
    pub stars: i32,
}

/// Full overwrite of every mutable hotel column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = hotels)]
pub(crate) struct HotelChangeset<'a> {
    pub name: &'a str,
    pub rating: f64,
    pub location: &'a str,
    pub price_per_night: i32,
    pub stars: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub username: String,
    pub password_hash: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub(crate) struct NewUserRow<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
}
