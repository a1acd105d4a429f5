pub mod middleware;
pub mod openapi;
pub mod routes;

use axum::Router;
use std::sync::Arc;
use tally_core::error::{LogError, TrackerError};
use tally_core::{Catalog, Tracker};
use tally_db::{DbStore, schema};
use tokio::net::TcpListener;

/// Credentials the HTTP surface checks against. All optional: an unset
/// credential means the corresponding endpoint never authenticates.
#[derive(Clone, Debug, Default)]
pub struct AuthSettings {
    pub admin_login: Option<String>,
    pub admin_password: Option<String>,
    pub dashboard_password: Option<String>,
}

#[derive(Clone)]
pub struct AppState {
    pub db_path: String,
    pub catalog: Arc<Catalog>,
    pub auth: Arc<AuthSettings>,
}

/// Open a fresh store handle for one request. No connection pooling; every
/// query re-reads the log, matching the stateless deployment model.
pub fn build_tracker(state: &AppState) -> Result<Tracker<DbStore>, TrackerError> {
    let conn = schema::open_and_migrate(&state.db_path).map_err(|err| {
        TrackerError::Log(LogError::Persistence {
            message: err.to_string(),
        })
    })?;
    Ok(Tracker::new(DbStore::new(conn), (*state.catalog).clone()))
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
}

pub async fn serve(state: AppState, addr: std::net::SocketAddr) -> Result<(), std::io::Error> {
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await
}
