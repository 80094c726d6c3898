//! Integration tests for the demo server

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use paginate_kit::cli::{router, ServerConfig};
use paginate_kit::PaginateConfig;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(items: i64) -> axum::Router {
    router(ServerConfig {
        paginate: PaginateConfig::default(),
        items,
    })
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn ids(data: &Value) -> Vec<i64> {
    data["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let (status, body) = get_json(app(10), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn test_items_second_page() {
    let (status, body) = get_json(app(250), "/items?page=2&limit=20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let data = &body["data"];
    assert_eq!(ids(data), (21..=40).collect::<Vec<_>>());
    assert_eq!(data["items"][0]["name"], "item-21");
    assert_eq!(data["page"], 2);
    assert_eq!(data["skip"], 20);
    assert_eq!(data["total"], 250);
    assert_eq!(data["page_count"], 13);
    assert_eq!(data["has_previous_pages"], true);
    assert_eq!(data["has_next_pages"], true);
    assert_eq!(data["previous"], "/items?page=1&limit=20");
    assert_eq!(data["next"], "/items?page=3&limit=20");
    assert_eq!(
        data["pages"],
        json!([
            {"number": 1, "url": "/items?page=1&limit=20"},
            {"number": 2, "url": "/items?page=2&limit=20"},
            {"number": 3, "url": "/items?page=3&limit=20"},
        ])
    );
}

#[tokio::test]
async fn test_items_last_page() {
    let (_, body) = get_json(app(25), "/items?page=3").await;
    let data = &body["data"];
    assert_eq!(ids(data), vec![21, 22, 23, 24, 25]);
    assert_eq!(data["page_count"], 3);
    assert_eq!(data["has_next_pages"], false);
    assert_eq!(data["next"], Value::Null);
    assert_eq!(data["pages"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_items_past_the_end() {
    let (status, body) = get_json(app(25), "/items?page=99").await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert!(ids(data).is_empty());
    assert_eq!(data["pages"], json!([]));
    assert_eq!(data["has_next_pages"], false);
}

#[tokio::test]
async fn test_items_zero_limit() {
    let (status, body) = get_json(app(25), "/items?limit=-1").await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["limit"], 0);
    assert_eq!(data["page_count"], 0);
    assert!(ids(data).is_empty());
}

#[tokio::test]
async fn test_items_huge_total_page_count() {
    let (status, body) = get_json(app(i64::MAX), "/items?page=2").await;
    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(ids(data), (11..=20).collect::<Vec<_>>());
    assert_eq!(data["page_count"], i64::MAX / 10 + 1);
    assert_eq!(data["has_next_pages"], true);
}
