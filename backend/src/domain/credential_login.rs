//! Credential-checking implementation of the [`LoginService`] port.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{LoginService, UserRepository, UserRepositoryError};
use crate::domain::{Error, LoginCredentials, PasswordHash, User};

/// Authenticates against a [`UserRepository`] injected at construction.
#[derive(Clone)]
pub struct CredentialLoginService {
    users: Arc<dyn UserRepository>,
}

fn map_user_error(error: UserRepositoryError) -> Error {
    match error {
        UserRepositoryError::Connection { message } => Error::database_connection(message),
        UserRepositoryError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
    }
}

impl CredentialLoginService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Hash `password` and store it for `username`, replacing any previous
    /// password.
    pub async fn register(&self, username: &str, password: &str) -> Result<User, Error> {
        let credentials = LoginCredentials::try_from_parts(username, password)
            .map_err(|err| Error::invalid_parameter_format(err.to_string()))?;
        let user = User::new(credentials.username(), PasswordHash::derive(password));
        self.users.upsert(&user).await.map_err(map_user_error)?;
        Ok(user)
    }
}

#[async_trait]
impl LoginService for CredentialLoginService {
    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<User, Error> {
        let user = self
            .users
            .find_by_username(credentials.username())
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| {
                warn!(username = credentials.username(), "login for unknown user");
                Error::unknown_user(credentials.username())
            })?;

        if !user.password_hash().verify(credentials.password()) {
            warn!(username = credentials.username(), "password mismatch");
            return Err(Error::unauthorized("El usuario y contraseña no coinciden"));
        }
        Ok(user)
    }
}
