//! Integration tests for the admin shop-status switch.
//!
//! These tests require:
//! - The admin server running (cargo run -p bottega-admin)
//! - `ADMIN_API_TOKEN` set to the token the server was started with
//! - Content platform credentials for a test dataset in environment
//!
//! Run with: cargo test -p bottega-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use bottega_integration_tests::{admin_api_token, admin_base_url};

// ============================================================================
// Shop Status Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_shop_status_requires_bearer_token() {
    let client = Client::new();
    let base_url = admin_base_url();

    let resp = client
        .get(format!("{base_url}/api/shop-status"))
        .send()
        .await
        .expect("Failed to get shop status");

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "Requires running admin server and content platform credentials"]
async fn test_shop_status_update_round_trip() {
    let client = Client::new();
    let base_url = admin_base_url();
    let token = admin_api_token();

    let resp = client
        .patch(format!("{base_url}/api/shop-status"))
        .bearer_auth(&token)
        .json(&json!({
            "isShopOpen": false,
            "closingReason": "Chiusi per ferie fino al 20 agosto"
        }))
        .send()
        .await
        .expect("Failed to update shop status");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/api/shop-status"))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to get shop status");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["isShopOpen"], false);
    assert_eq!(body["closingReason"], "Chiusi per ferie fino al 20 agosto");

    // Reopen so the dataset is left usable for the other tests.
    let resp = client
        .patch(format!("{base_url}/api/shop-status"))
        .bearer_auth(&token)
        .json(&json!({ "isShopOpen": true }))
        .send()
        .await
        .expect("Failed to reopen shop");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["isShopOpen"], true);
    assert_eq!(body["closingReason"], "");
}

#[tokio::test]
#[ignore = "Requires running admin server"]
async fn test_shop_status_update_requires_boolean_flag() {
    let client = Client::new();
    let base_url = admin_base_url();

    let resp = client
        .patch(format!("{base_url}/api/shop-status"))
        .bearer_auth(admin_api_token())
        .json(&json!({ "isShopOpen": "nope" }))
        .send()
        .await
        .expect("Failed to update shop status");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
