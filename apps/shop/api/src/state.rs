//! Shared application state.

use database::postgres::DatabaseConnection;

/// Cloned into the readiness handler and used to build each domain service.
#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    /// PostgreSQL connection pool
    pub db: DatabaseConnection,
}
