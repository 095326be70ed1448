//! In-memory [`UserRepository`].

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::User;
use crate::domain::ports::{UserRepository, UserRepositoryError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

fn poisoned<T>(_: PoisonError<T>) -> UserRepositoryError {
    UserRepositoryError::query("user store lock poisoned")
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn upsert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut guard = self.users.write().map_err(poisoned)?;
        guard.insert(user.username().to_owned(), user.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserRepositoryError> {
        let guard = self.users.read().map_err(poisoned)?;
        Ok(guard.get(username).cloned())
    }
}
