//! Registered user able to authenticate against protected routes.

use super::PasswordHash;

/// Stored user record.
///
/// ## Invariants
/// - `username` is trimmed and non-empty; it is the unique login key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    username: String,
    password_hash: PasswordHash,
}

impl User {
    pub fn new(username: impl Into<String>, password_hash: PasswordHash) -> Self {
        Self {
            username: username.into().trim().to_owned(),
            password_hash,
        }
    }

    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }
}
