//! Domain ports: the traits adapters implement or call at the hexagonal
//! boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod hotel_repository;
mod login_service;
mod user_repository;

#[cfg(test)]
pub use hotel_repository::MockHotelRepository;
pub use hotel_repository::{HotelRepository, HotelRepositoryError};
pub use login_service::LoginService;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserRepository, UserRepositoryError};
