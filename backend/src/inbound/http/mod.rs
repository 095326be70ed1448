//! HTTP inbound adapter exposing the hotel REST API.

pub mod auth;
pub mod bookings;
pub mod error;
pub mod extractors;
pub mod health;
pub mod hotels;
pub mod hotels_dto;
pub mod login;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;

use actix_web::web;

pub use error::ApiResult;

/// Register every API route and the extractor error handlers.
///
/// Health probes are mounted separately by the server because their state
/// lives outside [`state::HttpState`].
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(extractors::configure)
        .configure(hotels::configure)
        .service(login::login)
        .service(login::logout);
}
