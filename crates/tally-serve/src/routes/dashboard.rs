use crate::routes::error::map_error;
use crate::{AppState, build_tracker};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde_json::json;
use tally_core::types::DashboardStats;
use utoipa::IntoParams;

#[derive(Debug, serde::Deserialize, IntoParams)]
pub struct DashboardQuery {
    pub pass: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dashboard", get(dashboard))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(DashboardQuery),
    responses((status = 200, body = DashboardStats), (status = 401))
)]
pub(crate) async fn dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let authorized = matches!(
        (&state.auth.dashboard_password, &query.pass),
        (Some(expected), Some(given)) if expected == given
    );
    if !authorized {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "ok": false }))).into_response();
    }

    let tracker = match build_tracker(&state) {
        Ok(tracker) => tracker,
        Err(err) => return map_error(&err, None).into_response(),
    };
    match tracker.dashboard().snapshot(Utc::now().date_naive()) {
        Ok(stats) => Json(stats).into_response(),
        Err(err) => map_error(&err, None).into_response(),
    }
}
