use crate::middleware::correlation::CorrelationId;
use crate::middleware::session::SessionIdentity;
use crate::{AppState, build_tracker};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Extension, Json, Router};
use chrono::Utc;
use serde_json::json;
use tally_core::types::SubmitInput;
use tally_core::{RequestContext, TrackerError};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/submit", post(submit_answers).get(submit_hint))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/api/submit",
    request_body = SubmitInput,
    responses((status = 200), (status = 400), (status = 500))
)]
pub(crate) async fn submit_answers(
    State(state): State<AppState>,
    Extension(correlation): Extension<CorrelationId>,
    Extension(identity): Extension<SessionIdentity>,
    payload: Result<Json<SubmitInput>, JsonRejection>,
) -> Response {
    let Ok(Json(input)) = payload else {
        return failure(StatusCode::BAD_REQUEST, "invalid payload");
    };
    let tracker = match build_tracker(&state) {
        Ok(tracker) => tracker,
        Err(err) => return error_response(&err),
    };
    let ctx = RequestContext::new(identity.user.clone(), Some(correlation.0));
    match tracker.submissions().submit(&ctx, input, Utc::now()) {
        Ok(_) => Json(json!({ "ok": true })).into_response(),
        Err(err) => error_response(&err),
    }
}

async fn submit_hint() -> Response {
    Json(json!({ "ok": true, "hint": "Use POST to submit" })).into_response()
}

fn failure(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "ok": false, "error": message }))).into_response()
}

fn error_response(err: &TrackerError) -> Response {
    tracing::error!(error = %err, "submit failed");
    let status = match err {
        TrackerError::Submit(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    failure(status, &err.to_string())
}
