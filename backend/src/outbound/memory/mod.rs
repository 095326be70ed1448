//! Process-local adapters used when no database is configured.
//!
//! Records live in `RwLock`-guarded maps and vanish on restart. Locks are
//! never held across an `.await`.

mod hotel;
mod user;

pub use hotel::InMemoryHotelRepository;
pub use user::InMemoryUserRepository;
