use crate::AppState;
use crate::routes::error::map_error;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tally_core::TrackerError;
use tally_core::catalog::Checklist;
use tally_core::error::CatalogError;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, serde::Deserialize, IntoParams)]
pub struct ChecklistsQuery {
    pub area: String,
    pub id: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChecklistsResponse {
    pub checklists: Vec<Checklist>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/checklists", get(checklists))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/checklists",
    params(ChecklistsQuery),
    responses((status = 200, body = ChecklistsResponse), (status = 404))
)]
pub(crate) async fn checklists(
    State(state): State<AppState>,
    Query(query): Query<ChecklistsQuery>,
) -> Response {
    let Some(lists) = state.catalog.checklists(&query.area) else {
        let err = TrackerError::Catalog(CatalogError::UnknownArea { area: query.area });
        return map_error(&err, None).into_response();
    };

    match query.id {
        Some(id) => match lists.iter().find(|list| list.id == id) {
            Some(list) => Json(ChecklistsResponse {
                checklists: vec![list.clone()],
            })
            .into_response(),
            None => {
                let err = TrackerError::Catalog(CatalogError::NotFound {
                    area: query.area,
                    checklist_id: id,
                });
                map_error(&err, None).into_response()
            }
        },
        None => Json(ChecklistsResponse {
            checklists: lists.to_vec(),
        })
        .into_response(),
    }
}
