//! Driving port for authentication.
//!
//! The HTTP authentication middleware and the login handler depend on this
//! trait only, so tests can swap in a double without wiring a user store.

use async_trait::async_trait;

use crate::domain::{Error, LoginCredentials, User};

#[async_trait]
pub trait LoginService: Send + Sync {
    /// Resolve credentials to a registered user.
    ///
    /// # Errors
    /// `UnknownUser` when the username is not registered, `Unauthorized` on
    /// a password mismatch, `DatabaseConnection` when the store is down.
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error>;
}
