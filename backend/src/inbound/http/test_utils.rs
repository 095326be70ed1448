//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::domain::CredentialLoginService;
use crate::inbound::http::state::{HttpState, HttpStatePorts};
use crate::outbound::memory::{InMemoryHotelRepository, InMemoryUserRepository};

pub const TEST_USERNAME: &str = "admin";
pub const TEST_PASSWORD: &str = "secret";

/// Session middleware with a fresh key and the `Secure` flag off.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// In-memory state with one registered user, plus the hotel store for seeding.
pub async fn memory_state() -> (HttpState, Arc<InMemoryHotelRepository>) {
    let hotels = Arc::new(InMemoryHotelRepository::new());
    let login = CredentialLoginService::new(Arc::new(InMemoryUserRepository::new()));
    login
        .register(TEST_USERNAME, TEST_PASSWORD)
        .await
        .expect("register test user");
    let state = HttpState::new(HttpStatePorts {
        hotels: hotels.clone(),
        login: Arc::new(login),
    });
    (state, hotels)
}

/// `Authorization` header value for the test user.
pub fn basic_auth() -> String {
    basic_auth_for(TEST_USERNAME, TEST_PASSWORD)
}

pub fn basic_auth_for(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{username}:{password}")))
}
