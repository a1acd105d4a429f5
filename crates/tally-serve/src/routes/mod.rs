pub mod catalog;
pub mod completion;
pub mod dashboard;
pub mod error;
pub mod session;
pub mod submit;
pub mod weekly;

use crate::middleware::correlation::correlation_middleware;
use crate::middleware::session::session_middleware;
use crate::{AppState, openapi};
use axum::Router;
use axum::middleware;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .merge(submit::router(state.clone()))
        .merge(completion::router(state.clone()))
        .merge(weekly::router(state.clone()))
        .merge(dashboard::router(state.clone()))
        .merge(catalog::router(state.clone()))
        .merge(session::router(state))
        .merge(openapi::router())
        .route_layer(middleware::from_fn(session_middleware))
        .route_layer(middleware::from_fn(correlation_middleware));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
