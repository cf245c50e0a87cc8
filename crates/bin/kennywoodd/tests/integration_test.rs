//! End-to-end smoke tests for the full kennywoodd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use http_body_util::BodyExt;
use kennywood_adapter_http_axum::router;
use kennywood_adapter_http_axum::state::AppState;
use kennywood_adapter_storage_sqlite_sqlx::{Config, SqliteParkAreaRepository};
use kennywood_app::services::park_area_service::ParkAreaService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqliteParkAreaRepository::new(db.pool().clone());
    router::build(AppState::new(ParkAreaService::new(repo)))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("host", "testserver")
        .body(Body::empty())
        .unwrap()
}

fn send_json(method: &str, uri: &str, json: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("host", "testserver")
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header("host", "testserver")
        .body(Body::empty())
        .unwrap()
}

async fn body_json(resp: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&resp.into_body().collect().await.unwrap().to_bytes()).unwrap()
}

async fn create(app: &axum::Router, name: &str, theme: &str) -> serde_json::Value {
    let payload = serde_json::json!({ "name": name, "theme": theme }).to_string();
    let resp = app
        .clone()
        .oneshot(send_json("POST", "/parkareas", &payload))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    body_json(resp).await
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: park areas
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_create_racetrack_and_link_to_it() {
    let app = app().await;

    let body = create(&app, "Racetrack", "Speed").await;

    assert_eq!(body["name"], "Racetrack");
    assert_eq!(body["theme"], "Speed");
    let id = body["id"].as_i64().expect("id should be an integer");
    assert_eq!(
        body["url"],
        format!("http://testserver/parkareas/{id}").as_str()
    );

    // The link resolves to the same record.
    let resp = app
        .oneshot(get(&format!("/parkareas/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched = body_json(resp).await;
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn should_list_every_persisted_park_area() {
    let app = app().await;
    create(&app, "Racetrack", "Speed").await;
    create(&app, "Kiddieland", "Family").await;
    create(&app, "Lost Kennywood", "Adventure").await;

    let resp = app.oneshot(get("/parkareas")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_json(resp).await;
    let areas = body.as_array().expect("list should be an array");
    assert_eq!(areas.len(), 3);
    for area in areas {
        for key in ["id", "url", "name", "theme"] {
            assert!(area.get(key).is_some(), "missing {key} in {area}");
        }
    }
}

#[tokio::test]
async fn should_return_new_values_after_update() {
    let app = app().await;
    let created = create(&app, "Racetrack", "Speed").await;
    let id = created["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(send_json(
            "PUT",
            &format!("/parkareas/{id}"),
            r#"{"name":"Kiddieland","theme":"Family"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(
        resp.into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .is_empty()
    );

    let fetched = body_json(
        app.oneshot(get(&format!("/parkareas/{id}")))
            .await
            .unwrap(),
    )
    .await;
    assert_eq!(fetched["id"], id);
    assert_eq!(fetched["name"], "Kiddieland");
    assert_eq!(fetched["theme"], "Family");
}

#[tokio::test]
async fn should_return_404_after_delete() {
    let app = app().await;
    let created = create(&app, "Racetrack", "Speed").await;
    let id = created["id"].as_i64().unwrap();

    let resp = app
        .clone()
        .oneshot(delete(&format!("/parkareas/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app
        .clone()
        .oneshot(get(&format!("/parkareas/{id}")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app.oneshot(get("/parkareas")).await.unwrap();
    assert_eq!(body_json(resp).await, serde_json::json!([]));
}

#[tokio::test]
async fn should_return_404_with_message_when_deleting_missing_park_area() {
    let resp = app().await.oneshot(delete("/parkareas/9999")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body = body_json(resp).await;
    assert!(body["message"].as_str().is_some_and(|m| m.contains("9999")));
}

#[tokio::test]
async fn should_return_404_when_retrieving_missing_park_area() {
    let resp = app().await.oneshot(get("/parkareas/9999")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_reject_create_without_theme_and_persist_nothing() {
    let app = app().await;

    let resp = app
        .clone()
        .oneshot(send_json("POST", "/parkareas", r#"{"name":"Racetrack"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert_eq!(body["fields"]["theme"], "This field is required.");

    let resp = app.oneshot(get("/parkareas")).await.unwrap();
    assert_eq!(body_json(resp).await, serde_json::json!([]));
}

#[tokio::test]
async fn should_return_404_when_updating_missing_park_area() {
    let resp = app()
        .await
        .oneshot(send_json(
            "PUT",
            "/parkareas/1",
            r#"{"name":"Kiddieland","theme":"Family"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
