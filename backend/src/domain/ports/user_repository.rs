//! Driven port for user credential storage.
use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Errors raised by user repository adapters.
    pub enum UserRepositoryError {
        /// The store could not be reached.
        Connection { message: String } => "user repository connection failed: {message}",
        /// A query, mutation or row conversion failed.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user or replace the stored password hash for that username.
    async fn upsert(&self, user: &User) -> Result<(), UserRepositoryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError>;
}
