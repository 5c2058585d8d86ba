//! Integration tests for the storefront pickup booking boundary.
//!
//! These tests require:
//! - The storefront server running (cargo run -p bottega-storefront)
//! - Content platform credentials for a test dataset in environment
//!
//! Run with: cargo test -p bottega-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use bottega_integration_tests::storefront_base_url;

/// A booking payload that lands inside the Thursday morning window.
fn valid_booking() -> Value {
    json!({
        "customerName": "Lucia Greco",
        "customerPhone": "328 765 4321",
        "productList": "2 kg pezzetti di cavallo",
        "pickupDate": "2025-03-06",
        "pickupTime": "09:30"
    })
}

// ============================================================================
// Booking Submission Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and content platform credentials"]
async fn test_booking_submission_succeeds() {
    let client = Client::new();
    let base_url = storefront_base_url();

    let resp = client
        .post(format!("{base_url}/api/reservations"))
        .json(&valid_booking())
        .send()
        .await
        .expect("Failed to submit booking");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
}

#[tokio::test]
#[ignore = "Requires running storefront server and content platform credentials"]
async fn test_booking_rejects_sunday_pickup() {
    let client = Client::new();
    let base_url = storefront_base_url();

    let mut payload = valid_booking();
    payload["pickupDate"] = json!("2025-03-09");

    let resp = client
        .post(format!("{base_url}/api/reservations"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to submit booking");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("errors array");
    assert!(errors.iter().any(|e| e["field"] == "pickupTime"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and content platform credentials"]
async fn test_booking_rejects_afternoon_slot_on_half_day() {
    let client = Client::new();
    let base_url = storefront_base_url();

    // Thursday afternoon is outside the schedule.
    let mut payload = valid_booking();
    payload["pickupTime"] = json!("17:30");

    let resp = client
        .post(format!("{base_url}/api/reservations"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to submit booking");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("errors array");
    assert!(errors.iter().any(|e| e["field"] == "pickupTime"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and content platform credentials"]
async fn test_booking_rejects_missing_slot_fields() {
    let client = Client::new();
    let base_url = storefront_base_url();

    let mut payload = valid_booking();
    payload["pickupDate"] = json!("");
    payload["pickupTime"] = json!("");

    let resp = client
        .post(format!("{base_url}/api/reservations"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to submit booking");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("errors array");
    assert!(errors.iter().any(|e| e["field"] == "pickupDate"));
    assert!(errors.iter().any(|e| e["field"] == "pickupTime"));
}
