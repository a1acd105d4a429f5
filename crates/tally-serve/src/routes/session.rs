use crate::AppState;
use crate::middleware::session::{SESSION_COOKIE, SessionIdentity, USER_COOKIE};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginInput {
    pub login: String,
    pub password: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route("/logout", post(logout))
        .route("/session", get(session_info))
        .with_state(state)
}

/// The session cookie is http-only, so clients ask the server who they are.
#[utoipa::path(get, path = "/api/session", responses((status = 200)))]
pub(crate) async fn session_info(Extension(identity): Extension<SessionIdentity>) -> Response {
    Json(json!({
        "authenticated": identity.authenticated,
        "user": identity.user,
    }))
    .into_response()
}

#[utoipa::path(
    post,
    path = "/api/login",
    request_body = LoginInput,
    responses((status = 200), (status = 400), (status = 401))
)]
pub(crate) async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginInput>, JsonRejection>,
) -> Response {
    let Ok(Json(input)) = payload else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "ok": false, "error": "invalid payload" })),
        )
            .into_response();
    };

    let accepted = matches!(
        (&state.auth.admin_login, &state.auth.admin_password),
        (Some(login), Some(password)) if *login == input.login && *password == input.password
    );
    if !accepted {
        return (StatusCode::UNAUTHORIZED, Json(json!({ "ok": false }))).into_response();
    }

    let session = Cookie::build((SESSION_COOKIE, "ok"))
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .build();
    let user = Cookie::build((USER_COOKIE, input.login.clone()))
        .same_site(SameSite::Lax)
        .path("/")
        .build();
    (jar.add(session).add(user), Json(json!({ "ok": true }))).into_response()
}

#[utoipa::path(post, path = "/api/logout", responses((status = 200)))]
pub(crate) async fn logout(jar: CookieJar) -> Response {
    let jar = jar
        .remove(Cookie::build((SESSION_COOKIE, "")).path("/").build())
        .remove(Cookie::build((USER_COOKIE, "")).path("/").build());
    (jar, Json(json!({ "ok": true }))).into_response()
}
