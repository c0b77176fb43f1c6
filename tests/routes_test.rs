use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use lowscan::{build_router, AppState};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn create_test_app() -> axum::Router {
    build_router(Arc::new(AppState::new(42)))
}

async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 4 * 1024 * 1024)
        .await
        .unwrap();
    (status, body.to_vec())
}

async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn test_universe_lists_every_row() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/universe").await;
    assert_eq!(status, StatusCode::OK);
    let rows = json.as_array().unwrap();
    assert_eq!(rows.len(), 243);
    assert_eq!(rows[0]["symbol"], "AAPL");
}

#[tokio::test]
async fn test_status_counts_scans() {
    let app = create_test_app();
    let (_, before) = get_json(&app, "/api/status").await;
    assert_eq!(before["scansServed"], 0);
    assert_eq!(before["overview"]["total_listings"], 243);
    assert_eq!(before["overview"]["sectors"].as_array().unwrap().len(), 6);

    get_json(&app, "/api/scan").await;
    let (_, after) = get_json(&app, "/api/status").await;
    assert_eq!(after["scansServed"], 1);
}

#[tokio::test]
async fn test_scan_with_defaults() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/scan").await;
    assert_eq!(status, StatusCode::OK);

    let filtered = json["filtered"].as_array().unwrap();
    let near_low = json["near_low"].as_array().unwrap();
    assert_eq!(json["aggregates"]["scanned_count"], filtered.len());
    assert_eq!(json["aggregates"]["near_low_count"], near_low.len());
    for row in near_low {
        assert!(row["pct_from_low"].as_f64().unwrap() <= 5.0);
        assert_eq!(row["near_low"], true);
    }
}

#[tokio::test]
async fn test_scan_with_no_sectors() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/scan?sectors=").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["filtered"].as_array().unwrap().is_empty());
    assert!(json["aggregates"]["mean_pct_from_low"].is_null());
    assert!(json["aggregates"]["closest_pct_from_low"].is_null());
}

#[tokio::test]
async fn test_scan_rejects_bad_params() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/scan?threshold=20").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("threshold"));

    let (status, _) = get_json(&app, "/api/scan?sectors=Utilities").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_inverted_caps_are_empty_not_errors() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/scan?min_cap=300&max_cap=10").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["filtered"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_charts_for_sector_subset() {
    let app = create_test_app();
    let uri = "/api/scan/charts?threshold=15&sectors=Energy,Technology\
               &min_cap=0&max_cap=500&min_volume=0";
    let (status, json) = get_json(&app, uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["threshold_pct"], 15.0);

    let heatmap = json["heatmap"].as_array().unwrap();
    assert_eq!(heatmap.len(), 2);
    let first = heatmap[0]["avg_pct_from_low"].as_f64().unwrap();
    let second = heatmap[1]["avg_pct_from_low"].as_f64().unwrap();
    assert!(first <= second);
    for point in json["scatter"].as_array().unwrap() {
        assert!(point["sector"] == "Energy" || point["sector"] == "Technology");
    }
}

#[tokio::test]
async fn test_csv_export() {
    let app = create_test_app();
    let request = Request::builder()
        .uri("/api/scan/csv?threshold=15&min_cap=0&max_cap=500&min_volume=0")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/csv");
    let disposition = response.headers()[header::CONTENT_DISPOSITION].to_str().unwrap().to_string();
    assert!(disposition.contains("52_week_low_stocks_"));

    let body = axum::body::to_bytes(response.into_body(), 4 * 1024 * 1024).await.unwrap();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert!(text.starts_with("ID,Symbol,Name,Sector"));

    let (_, json) =
        get_json(&app, "/api/scan?threshold=15&min_cap=0&max_cap=500&min_volume=0").await;
    let near_low = json["near_low"].as_array().unwrap().len();
    assert_eq!(text.lines().count(), near_low + 1);
}
