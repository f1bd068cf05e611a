//! Integration tests for the product HTTP API.

mod common;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_create_without_name_and_price_returns_400() {
    let app = common::TestApp::with_unreachable_database();

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({"description": "no name or price"})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Name and price are required");
}

#[tokio::test]
async fn test_create_with_empty_name_returns_400() {
    let app = common::TestApp::with_unreachable_database();

    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({"name": "", "price": 9.99})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Name and price are required");
}

#[tokio::test]
async fn test_create_with_zero_price_passes_validation() {
    let app = common::TestApp::with_unreachable_database();

    // Presence check only: price 0 is legal, so this request reaches
    // storage and surfaces the storage failure instead of a 400.
    let response = app
        .request(
            "POST",
            "/api/products",
            Some(json!({"name": "Freebie", "price": 0})),
        )
        .await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "Failed to create product");
}

#[tokio::test]
async fn test_update_without_required_fields_returns_400() {
    let app = common::TestApp::with_unreachable_database();

    let response = app
        .request("PUT", "/api/products/1", Some(json!({"price": 5.0})))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Name and price are required");
}

#[tokio::test]
async fn test_list_surfaces_storage_failure_as_500_with_message() {
    let app = common::TestApp::with_unreachable_database();

    let response = app.request("GET", "/api/products", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "Failed to list products");
}

#[tokio::test]
async fn test_get_surfaces_storage_failure_as_500_with_message() {
    let app = common::TestApp::with_unreachable_database();

    let response = app.request("GET", "/api/products/42", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "Failed to load product");
}

#[tokio::test]
async fn test_delete_surfaces_storage_failure_as_500_with_message() {
    let app = common::TestApp::with_unreachable_database();

    let response = app.request("DELETE", "/api/products/42", None).await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "Failed to delete product");
}

#[tokio::test]
async fn test_non_numeric_id_is_rejected_before_storage() {
    let app = common::TestApp::with_unreachable_database();

    let response = app.request("GET", "/api/products/not-a-number", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_is_ok_without_database() {
    let app = common::TestApp::with_unreachable_database();

    let response = app.request("GET", "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
}

#[tokio::test]
async fn test_detailed_health_reports_unreachable_database() {
    let app = common::TestApp::with_unreachable_database();

    let response = app.request("GET", "/health/detailed", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "degraded");
    assert_eq!(response.body["database"], "unreachable");
}
