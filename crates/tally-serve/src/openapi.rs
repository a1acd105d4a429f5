use crate::routes::catalog::ChecklistsResponse;
use crate::routes::session::LoginInput;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tally_core::catalog::{Checklist, Question, QuestionKind};
use tally_core::types::{
    AnswerInput, AreaWeekly, CompletedChecklists, DailyStats, DashboardStats, QuestionRef,
    SubmitInput, SubmitOutcome, WeekWindow, WeeklyReport,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::submit::submit_answers,
        crate::routes::completion::done,
        crate::routes::weekly::weekly,
        crate::routes::dashboard::dashboard,
        crate::routes::catalog::checklists,
        crate::routes::session::login,
        crate::routes::session::logout,
        crate::routes::session::session_info,
    ),
    components(schemas(
        SubmitInput,
        AnswerInput,
        QuestionRef,
        SubmitOutcome,
        WeeklyReport,
        WeekWindow,
        AreaWeekly,
        DailyStats,
        CompletedChecklists,
        DashboardStats,
        Checklist,
        Question,
        QuestionKind,
        LoginInput,
        ChecklistsResponse,
    ))
)]
pub struct ApiDoc;

pub fn generate_spec() -> String {
    ApiDoc::openapi().to_pretty_json().unwrap_or_default()
}

pub fn router() -> Router {
    Router::new().route("/openapi.json", get(spec))
}

async fn spec() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
