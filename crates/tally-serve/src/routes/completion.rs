use crate::routes::error::map_error;
use crate::{AppState, build_tracker};
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use tally_core::types::CompletedChecklists;
use utoipa::IntoParams;

#[derive(Debug, serde::Deserialize, IntoParams)]
pub struct DoneQuery {
    pub area: String,
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/done", get(done)).with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/done",
    params(DoneQuery),
    responses((status = 200, body = CompletedChecklists))
)]
pub(crate) async fn done(State(state): State<AppState>, Query(query): Query<DoneQuery>) -> Response {
    let tracker = match build_tracker(&state) {
        Ok(tracker) => tracker,
        Err(err) => return map_error(&err, None).into_response(),
    };
    match tracker
        .completion()
        .completed_ids(&query.area, Utc::now().date_naive())
    {
        Ok(checklist_ids) => Json(CompletedChecklists { checklist_ids }).into_response(),
        Err(err) => map_error(&err, None).into_response(),
    }
}
