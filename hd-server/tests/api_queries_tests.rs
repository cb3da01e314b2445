//! Integration tests for the query log endpoints
mod common;

use crate::common::create_test_app_state;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use hd_server::build_router;

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Log a user in and return their id
async fn login(app: &Router, identifier: &str) -> i64 {
    let response = app
        .clone()
        .oneshot(post_json(
            "/api/login",
            format!(r#"{{"identifier": "{}"}}"#, identifier),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    json_body(response).await["id"].as_i64().unwrap()
}

/// Save a query for the user, optionally public
async fn save(app: &Router, user_id: i64, problem: &str, is_public: bool) {
    let body = format!(
        r#"{{"userId": {}, "problem": "{}", "answer": "an answer", "isPublic": {}}}"#,
        user_id, problem, is_public
    );
    let response = app
        .clone()
        .oneshot(post_json("/api/save-query", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_save_query_returns_success() {
    let state = create_test_app_state("http://127.0.0.1:9".to_string()).await;
    let app = build_router(state);
    let user_id = login(&app, "john@example.com").await;

    let response = app
        .oneshot(post_json(
            "/api/save-query",
            format!(
                r#"{{"userId": {}, "problem": "p", "answer": "a"}}"#,
                user_id
            ),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["success"], true);
}

#[tokio::test]
async fn test_save_query_requires_problem() {
    let state = create_test_app_state("http://127.0.0.1:9".to_string()).await;
    let app = build_router(state);

    let response = app
        .oneshot(post_json(
            "/api/save-query",
            r#"{"problem": "  ", "answer": "a"}"#.to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        json_body(response).await["error"]["code"],
        "VALIDATION_ERROR"
    );
}

#[tokio::test]
async fn test_history_empty_for_new_user() {
    let state = create_test_app_state("http://127.0.0.1:9".to_string()).await;
    let app = build_router(state);
    let user_id = login(&app, "john@example.com").await;

    let response = app
        .oneshot(get(&format!("/api/history/{}", user_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_history_returns_newest_first() {
    let state = create_test_app_state("http://127.0.0.1:9".to_string()).await;
    let app = build_router(state);
    let user_id = login(&app, "john@example.com").await;

    save(&app, user_id, "first", false).await;
    save(&app, user_id, "second", false).await;

    let response = app
        .oneshot(get(&format!("/api/history/{}", user_id)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let queries = json.as_array().unwrap();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[0]["problem"], "second");
    assert_eq!(queries[1]["problem"], "first");
}

#[tokio::test]
async fn test_history_images_round_trip_as_array() {
    let state = create_test_app_state("http://127.0.0.1:9".to_string()).await;
    let app = build_router(state);
    let user_id = login(&app, "john@example.com").await;

    let body = format!(
        r#"{{"userId": {}, "problem": "p", "answer": "a", "images": ["data:image/png;base64,AAA"]}}"#,
        user_id
    );
    let response = app
        .clone()
        .oneshot(post_json("/api/save-query", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .oneshot(get(&format!("/api/history/{}", user_id)))
        .await
        .unwrap();

    let json = json_body(response).await;
    let images = json[0]["images"].as_array().unwrap();
    assert_eq!(images.len(), 1);
    assert_eq!(images[0], "data:image/png;base64,AAA");
}

#[tokio::test]
async fn test_public_feed_masks_email() {
    let state = create_test_app_state("http://127.0.0.1:9".to_string()).await;
    let app = build_router(state);
    let user_id = login(&app, "john@example.com").await;

    save(&app, user_id, "shared", true).await;

    let response = app.oneshot(get("/api/public-feed")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let feed = json.as_array().unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["identifier"], "joh***@example.com");
    assert_eq!(feed[0]["problem"], "shared");
}

#[tokio::test]
async fn test_public_feed_masks_phone() {
    let state = create_test_app_state("http://127.0.0.1:9".to_string()).await;
    let app = build_router(state);
    let user_id = login(&app, "09121234567").await;

    save(&app, user_id, "shared", true).await;

    let response = app.oneshot(get("/api/public-feed")).await.unwrap();

    let json = json_body(response).await;
    assert_eq!(json[0]["identifier"], "0912****567");
}

#[tokio::test]
async fn test_public_feed_excludes_private_queries() {
    let state = create_test_app_state("http://127.0.0.1:9".to_string()).await;
    let app = build_router(state);
    let user_id = login(&app, "john@example.com").await;

    save(&app, user_id, "private", false).await;
    save(&app, user_id, "public", true).await;

    let response = app.oneshot(get("/api/public-feed")).await.unwrap();

    let json = json_body(response).await;
    let feed = json.as_array().unwrap();
    assert_eq!(feed.len(), 1);
    assert_eq!(feed[0]["problem"], "public");
}

#[tokio::test]
async fn test_save_query_defaults_to_private() {
    let state = create_test_app_state("http://127.0.0.1:9".to_string()).await;
    let app = build_router(state);
    let user_id = login(&app, "john@example.com").await;

    let body = format!(
        r#"{{"userId": {}, "problem": "defaulted", "answer": "a"}}"#,
        user_id
    );
    let response = app
        .clone()
        .oneshot(post_json("/api/save-query", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Saved and visible in history, but never in the feed without opting in
    let response = app
        .clone()
        .oneshot(get(&format!("/api/history/{}", user_id)))
        .await
        .unwrap();
    assert_eq!(json_body(response).await.as_array().unwrap().len(), 1);

    let response = app.oneshot(get("/api/public-feed")).await.unwrap();
    let json = json_body(response).await;
    assert_eq!(json.as_array().unwrap().len(), 0);
}
