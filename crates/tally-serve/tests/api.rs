use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use std::sync::Arc;
use tally_core::Catalog;
use tally_serve::{AppState, AuthSettings};
use tower::ServiceExt;

fn state() -> AppState {
    let catalog = Catalog::parse(
        r#"{
            "Hotel": [
                {"id": "H1", "title": "Morning", "questions": [
                    {"id": "q1", "text": "a", "type": "yesno"},
                    {"id": "q2", "text": "b", "type": "yesno"}
                ]}
            ]
        }"#,
    )
    .unwrap();
    AppState {
        db_path: ":memory:".to_string(),
        catalog: Arc::new(catalog),
        auth: Arc::new(AuthSettings {
            admin_login: Some("admin".to_string()),
            admin_password: Some("hunter2".to_string()),
            dashboard_password: Some("peek".to_string()),
        }),
    }
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn submit_accepts_a_single_question() {
    let app = tally_serve::app(state());
    let body = r#"{
        "area": "Hotel",
        "checklistId": "H1",
        "question": {"id": "q1", "text": "a"},
        "answer": "TAK"
    }"#;
    let response = app
        .oneshot(json_request("POST", "/api/submit", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["ok"], true);
}

#[tokio::test]
async fn submit_rejects_a_malformed_payload() {
    let app = tally_serve::app(state());
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/submit",
            r#"{"area": "Hotel", "checklistId": "H1"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["ok"], false);
}

#[tokio::test]
async fn done_is_empty_on_a_fresh_log() {
    let app = tally_serve::app(state());
    let response = app
        .oneshot(get_request("/api/done?area=Hotel"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["checklistIds"], serde_json::json!([]));
}

#[tokio::test]
async fn weekly_window_spans_seven_days() {
    let app = tally_serve::app(state());
    let response = app.oneshot(get_request("/api/weekly")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["window"]["days"].as_array().unwrap().len(), 7);
    assert!(json["byArea"]["Hotel"]["daily"].is_array());
}

#[tokio::test]
async fn responses_carry_a_correlation_id() {
    let app = tally_serve::app(state());
    let response = app.oneshot(get_request("/api/weekly")).await.unwrap();
    assert!(response.headers().contains_key("x-correlation-id"));
}

#[tokio::test]
async fn login_sets_session_cookies() {
    let app = tally_serve::app(state());
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"login": "admin", "password": "hunter2"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookies: Vec<_> = response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect();
    assert!(cookies.iter().any(|cookie| cookie.starts_with("session=ok")));
    assert!(
        cookies
            .iter()
            .any(|cookie| cookie.starts_with("user_login=admin"))
    );
}

#[tokio::test]
async fn session_info_reflects_cookies() {
    let app = tally_serve::app(state());
    let response = app.oneshot(get_request("/api/session")).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["authenticated"], false);
    assert_eq!(json["user"], serde_json::Value::Null);

    let app = tally_serve::app(state());
    let request = Request::builder()
        .uri("/api/session")
        .header(header::COOKIE, "session=ok; user_login=admin")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let json = body_json(response).await;
    assert_eq!(json["authenticated"], true);
    assert_eq!(json["user"], "admin");
}

#[tokio::test]
async fn submit_records_the_cookie_identity() {
    let app = tally_serve::app(state());
    let body = r#"{
        "area": "Hotel",
        "checklistId": "H1",
        "answers": [{"questionId": "q1", "answer": "TAK"}]
    }"#;
    let request = Request::builder()
        .method("POST")
        .uri("/api/submit")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::COOKIE, "session=ok; user_login=alice")
        .body(Body::from(body))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let app = tally_serve::app(state());
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/login",
            r#"{"login": "admin", "password": "wrong"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dashboard_requires_the_password() {
    let app = tally_serve::app(state());
    let response = app.oneshot(get_request("/api/dashboard")).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let app = tally_serve::app(state());
    let response = app
        .oneshot(get_request("/api/dashboard?pass=peek"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["totalAnswers"], 0);
}

#[tokio::test]
async fn unknown_area_is_a_404_on_the_catalog_route() {
    let app = tally_serve::app(state());
    let response = app
        .oneshot(get_request("/api/checklists?area=Spa"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "not_found");
}

#[tokio::test]
async fn known_area_lists_its_checklists() {
    let app = tally_serve::app(state());
    let response = app
        .oneshot(get_request("/api/checklists?area=Hotel"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["checklists"][0]["id"], "H1");
}
