//! Integration tests for the storefront checkout boundary.
//!
//! These tests require:
//! - The storefront server running (cargo run -p bottega-storefront)
//! - Content platform credentials for a test dataset in environment
//!
//! Run with: cargo test -p bottega-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use bottega_core::Order;
use bottega_integration_tests::storefront_base_url;

/// A checkout payload that passes every validation rule.
fn valid_checkout(transaction_id: &str) -> Value {
    json!({
        "customer": {
            "name": "Anna Russo",
            "addressLine": "Via Roma 1",
            "city": "Lecce",
            "province": "LE",
            "zip": "73100",
            "email": "anna@esempio.it",
            "phone": "329 1234567"
        },
        "lineItems": [{
            "productId": "tagliata-di-asino",
            "name": "Tagliata di asino",
            "unitPrice": "19.50",
            "weightPerUnit": "0.5",
            "quantity": 2
        }],
        "transactionId": transaction_id
    })
}

// ============================================================================
// Checkout Submission Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server and content platform credentials"]
async fn test_order_submission_returns_derived_order_id() {
    let client = Client::new();
    let base_url = storefront_base_url();
    let transaction_id = "5TY05013KD174921V";

    let resp = client
        .post(format!("{base_url}/api/orders"))
        .json(&valid_checkout(transaction_id))
        .send()
        .await
        .expect("Failed to submit order");

    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(
        body["orderId"],
        Order::id_from_transaction(transaction_id).as_str()
    );
}

#[tokio::test]
#[ignore = "Requires running storefront server and content platform credentials"]
async fn test_order_submission_rejects_missing_fields() {
    let client = Client::new();
    let base_url = storefront_base_url();

    let mut payload = valid_checkout("5TY05013KD174921V");
    payload["customer"]["email"] = json!("");

    let resp = client
        .post(format!("{base_url}/api/orders"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to submit order");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("errors array");
    assert!(errors.iter().any(|e| e["field"] == "email"));
}

#[tokio::test]
#[ignore = "Requires running storefront server and content platform credentials"]
async fn test_order_submission_rejects_island_destination() {
    let client = Client::new();
    let base_url = storefront_base_url();

    let mut payload = valid_checkout("5TY05013KD174921V");
    payload["customer"]["city"] = json!("Palermo");
    payload["customer"]["province"] = json!("PA");
    payload["customer"]["zip"] = json!("90010");

    let resp = client
        .post(format!("{base_url}/api/orders"))
        .json(&payload)
        .send()
        .await
        .expect("Failed to submit order");

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = resp.json().await.expect("Failed to parse response");
    let errors = body["errors"].as_array().expect("errors array");
    assert!(!errors.is_empty());
}

// ============================================================================
// Shop Status Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_shop_status_is_always_available() {
    let client = Client::new();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/api/shop-status"))
        .send()
        .await
        .expect("Failed to get shop status");

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.expect("Failed to parse response");
    assert!(body["isShopOpen"].is_boolean());
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[tokio::test]
#[ignore = "Requires running storefront server"]
async fn test_catalog_lists_products_and_resolves_ids() {
    let client = Client::new();
    let base_url = storefront_base_url();

    let resp = client
        .get(format!("{base_url}/api/products"))
        .send()
        .await
        .expect("Failed to get catalog");

    assert_eq!(resp.status(), StatusCode::OK);
    let products: Vec<Value> = resp.json().await.expect("Failed to parse response");
    assert!(!products.is_empty());

    let first_id = products[0]["id"].as_str().expect("product id");
    let resp = client
        .get(format!("{base_url}/api/products/{first_id}"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = client
        .get(format!("{base_url}/api/products/no-such-product"))
        .send()
        .await
        .expect("Failed to get product");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
