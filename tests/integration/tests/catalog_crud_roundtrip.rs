//! End-to-end catalog scenarios driven through the gateway router with a
//! shared server state, so each step observes the mutations of the last.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use reel_gateway::{build_catalog_router, CatalogServerState};

fn seeded_router() -> Router {
    build_catalog_router(Arc::new(CatalogServerState::with_seed_data()))
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(payload) => builder
            .header("content-type", "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };
    let response = app.clone().oneshot(request).await.expect("gateway response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    (status, serde_json::from_slice(&bytes).expect("json body"))
}

#[tokio::test]
async fn filter_delete_and_reject_scenario() {
    let app = seeded_router();

    // Sci-Fi filter returns The Matrix then Inception, seed order preserved.
    let (status, body) = send(&app, "GET", "/api/movies/filter?genre=Sci-Fi", None).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|movie| movie["title"].as_str().expect("title"))
        .collect();
    assert_eq!(titles, ["The Matrix", "Inception"]);

    // Deleting index 0 returns The Matrix and shifts Inception into its slot.
    let (status, body) = send(&app, "DELETE", "/api/movies/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Movie deleted");
    assert_eq!(body["movie"]["title"], "The Matrix");

    let (status, body) = send(&app, "GET", "/api/movies/0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Inception");

    // A string year is present but mistyped.
    let payload = json!({
        "title": "Dune",
        "genre": "Sci-Fi",
        "year": "2021",
        "director": "Denis Villeneuve",
    });
    let (status, body) = send(&app, "POST", "/api/movies", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Year must be a number" }));
}

#[tokio::test]
async fn create_then_get_last_round_trip() {
    let app = seeded_router();

    let payload = json!({
        "title": "Dune",
        "genre": "Sci-Fi",
        "year": 2021,
        "director": "Denis Villeneuve",
    });
    let (status, created) = send(&app, "POST", "/api/movies", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, payload);

    let (_, listed) = send(&app, "GET", "/api/movies", None).await;
    let movies = listed.as_array().expect("array body");
    assert_eq!(movies.len(), 6);

    let (status, fetched) = send(&app, "GET", "/api/movies/5", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, payload);
}

#[tokio::test]
async fn replace_then_get_round_trip_leaves_no_leftover_fields() {
    let app = seeded_router();

    let payload = json!({
        "title": "Heat",
        "genre": "Crime",
        "year": 1995,
        "director": "Michael Mann",
    });
    let (status, replaced) = send(&app, "PUT", "/api/movies/2", Some(payload.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(replaced, payload);

    let (status, fetched) = send(&app, "GET", "/api/movies/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, payload);
    assert_eq!(
        fetched.as_object().expect("object body").len(),
        4,
        "exactly the four canonical fields"
    );
}

#[tokio::test]
async fn delete_shifts_every_later_record_down_by_one() {
    let app = seeded_router();

    let (_, before) = send(&app, "GET", "/api/movies", None).await;
    let before = before.as_array().expect("array body").clone();

    let (status, _) = send(&app, "DELETE", "/api/movies/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, after) = send(&app, "GET", "/api/movies", None).await;
    let after = after.as_array().expect("array body").clone();

    assert_eq!(after.len(), before.len() - 1);
    assert_eq!(after[..2], before[..2]);
    assert_eq!(after[2..], before[3..]);
}
