//! Integration tests for the admin reservation endpoints.
//!
//! These tests require:
//! - The admin server running (cargo run -p bottega-admin)
//! - `ADMIN_API_TOKEN` set to the token the server was started with
//! - Content platform credentials for a test dataset in environment
//!
//! Run with: cargo test -p bottega-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::Value;

use bottega_integration_tests::{admin_api_token, admin_base_url};

// ============================================================================
// Reservation Listing Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_reservations_require_bearer_token() {
    let client = Client::new();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/api/reservations"))
        .send()
        .await
        .expect("Failed to list reservations");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server and content platform credentials"]
async fn test_reservations_list_filters_by_status() {
    let client = Client::new();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/api/reservations?status=pending"))
        .bearer_auth(admin_api_token())
        .send()
        .await
        .expect("Failed to list reservations");

    assert_eq!(resp.status(), StatusCode::OK);
    let reservations: Vec<Value> = resp.json().await.expect("Failed to parse response");
    for reservation in &reservations {
        assert_eq!(reservation["status"], "pending");
    }
}

// ============================================================================
// Pickup Completion Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server and content platform credentials"]
async fn test_complete_unknown_reservation_returns_not_found() {
    let client = Client::new();
    let base_url = admin_base_url();

    let resp = client
        .post(format!("{base_url}/api/reservations/no-such-doc/complete"))
        .bearer_auth(admin_api_token())
        .send()
        .await
        .expect("Failed to complete reservation");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
