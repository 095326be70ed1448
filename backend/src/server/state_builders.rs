//! Storage selection and bootstrap user seeding.

use std::sync::Arc;

use tracing::{info, warn};

use hotel_backend::domain::CredentialLoginService;
use hotel_backend::domain::ports::{HotelRepository, UserRepository};
use hotel_backend::inbound::http::state::HttpStatePorts;
use hotel_backend::outbound::memory::{InMemoryHotelRepository, InMemoryUserRepository};
use hotel_backend::outbound::persistence::{
    DbPool, DieselHotelRepository, DieselUserRepository, PoolConfig, run_pending_migrations,
};

use super::ServerSettings;

/// Migrate and connect to PostgreSQL when a URL is configured, otherwise
/// fall back to the in-memory adapters.
async fn build_repositories(
    settings: &ServerSettings,
) -> std::io::Result<(Arc<dyn HotelRepository>, Arc<dyn UserRepository>)> {
    let Some(database_url) = settings.database_url.clone() else {
        warn!("no database configured; hotels are kept in memory");
        return Ok((
            Arc::new(InMemoryHotelRepository::new()),
            Arc::new(InMemoryUserRepository::new()),
        ));
    };

    let migration_url = database_url.clone();
    tokio::task::spawn_blocking(move || run_pending_migrations(&migration_url))
        .await
        .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
        .map_err(std::io::Error::other)?;

    let pool = DbPool::new(PoolConfig::new(database_url))
        .await
        .map_err(|err| std::io::Error::other(err.into_message()))?;
    info!("connected to PostgreSQL");
    Ok((
        Arc::new(DieselHotelRepository::new(pool.clone())),
        Arc::new(DieselUserRepository::new(pool)),
    ))
}

/// Build the HTTP ports and upsert the configured admin user.
///
/// # Errors
/// Storage start-up failures and a rejected bootstrap user surface as
/// [`std::io::Error`].
pub async fn build_http_ports(settings: &ServerSettings) -> std::io::Result<HttpStatePorts> {
    let (hotels, users) = build_repositories(settings).await?;
    let login = CredentialLoginService::new(users);

    match settings.admin_credentials() {
        Some((username, password)) => {
            login
                .register(username, password)
                .await
                .map_err(|err| std::io::Error::other(format!("seeding admin user: {err}")))?;
            info!(username, "bootstrap user ready");
        }
        None => warn!("no admin credentials configured; protected routes need existing users"),
    }

    Ok(HttpStatePorts {
        hotels,
        login: Arc::new(login),
    })
}
