use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

pub const SESSION_COOKIE: &str = "session";
pub const USER_COOKIE: &str = "user_login";

/// What the rest of the system is allowed to know about the caller: whether
/// a session exists and which identity it carries. Extraction is soft;
/// requests without cookies still pass through, unauthenticated and
/// anonymous.
#[derive(Clone, Debug)]
pub struct SessionIdentity {
    pub authenticated: bool,
    pub user: Option<String>,
}

pub async fn session_middleware(mut request: Request<Body>, next: Next) -> Response {
    let jar = CookieJar::from_headers(request.headers());
    let authenticated = jar
        .get(SESSION_COOKIE)
        .is_some_and(|cookie| !cookie.value().is_empty());
    let user = jar
        .get(USER_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty());
    request
        .extensions_mut()
        .insert(SessionIdentity {
            authenticated,
            user,
        });
    next.run(request).await
}
