//! PostgreSQL adapters for the domain ports.

mod diesel_error_mapping;
mod diesel_hotel_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_hotel_repository::DieselHotelRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
