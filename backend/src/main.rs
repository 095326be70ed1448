//! Hotel backend entry-point: loads settings, prepares storage and serves
//! the REST API.

mod server;

use actix_web::cookie::SameSite;
use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use hotel_backend::inbound::http::health::HealthState;
use hotel_backend::inbound::http::session_config::{BuildMode, load_session_key};
use hotel_backend::inbound::http::state::HttpState;
use server::{ServerConfig, ServerSettings, build_http_ports, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load().map_err(|err| std::io::Error::other(err.to_string()))?;
    let key = load_session_key(
        settings.session_key_file.as_deref(),
        settings.session_allow_ephemeral,
        BuildMode::from_debug_assertions(),
    )
    .map_err(std::io::Error::other)?;

    let health_state = web::Data::new(HealthState::new());
    let http_state = HttpState::new(build_http_ports(&settings).await?);
    let bind_addr = settings.bind_addr();
    let config = ServerConfig::new(key, settings.cookie_secure, SameSite::Lax, bind_addr);

    let server = create_server(health_state.clone(), http_state, config)?;
    health_state.mark_ready();
    info!(%bind_addr, "hotel backend listening");
    server.await
}
