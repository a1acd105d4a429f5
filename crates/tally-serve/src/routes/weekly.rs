use crate::middleware::correlation::CorrelationId;
use crate::routes::error::map_error;
use crate::{AppState, build_tracker};
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use chrono::Utc;
use tally_core::types::WeeklyReport;

pub fn router(state: AppState) -> Router {
    Router::new().route("/weekly", get(weekly)).with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/weekly",
    responses((status = 200, body = WeeklyReport), (status = 500))
)]
pub(crate) async fn weekly(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
) -> Response {
    let tracker = match build_tracker(&state) {
        Ok(tracker) => tracker,
        Err(err) => {
            tracing::error!(error = %err, "weekly aggregation failed");
            return map_error(&err, Some(correlation.0)).into_response();
        }
    };
    match tracker.weekly().aggregate(Utc::now().date_naive()) {
        Ok(report) => Json(report).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "weekly aggregation failed");
            map_error(&err, Some(correlation.0)).into_response()
        }
    }
}
