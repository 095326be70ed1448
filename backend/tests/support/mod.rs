//! Embedded PostgreSQL helpers shared by the Diesel adapter suites.
//!
//! Every test gets its own temporary database on a process-wide cluster,
//! migrated with the same embedded migrations the server runs at start-up.

use pg_embedded_setup_unpriv::{ClusterHandle, TemporaryDatabase};

use hotel_backend::outbound::persistence::run_pending_migrations;

/// Returns true when `SKIP_TEST_CLUSTER` is set to "1", "true" or "yes".
pub fn should_skip_test_cluster() -> bool {
    std::env::var("SKIP_TEST_CLUSTER")
        .map(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

/// Skips the test when `SKIP_TEST_CLUSTER` is truthy, otherwise panics so CI
/// breakage stays visible.
pub fn handle_cluster_setup_failure<T>(reason: impl std::fmt::Display) -> Option<T> {
    if should_skip_test_cluster() {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("Test cluster setup failed: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}

fn shared_cluster() -> Result<&'static ClusterHandle, String> {
    pg_embedded_setup_unpriv::test_support::shared_cluster_handle()
        .map_err(|err| format!("bootstrap embedded cluster: {err:?}"))
}

/// Creates a fresh database on the shared cluster and applies migrations.
///
/// Must be called outside a Tokio runtime; the migration runner blocks.
pub fn provision_migrated_database() -> Result<TemporaryDatabase, String> {
    let cluster = shared_cluster()?;
    let database = cluster
        .create_temporary_database()
        .map_err(|err| format!("create temporary database: {err:?}"))?;
    run_pending_migrations(database.url()).map_err(|err| err.to_string())?;
    Ok(database)
}
