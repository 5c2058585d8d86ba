//! Content platform client for the admin API.
//!
//! The admin binary needs more than the storefront's read/create pair: it
//! lists persisted orders and reservations, patches tracking data onto
//! shipped orders, and upserts the shop-status singleton.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

use bottega_core::{Order, Reservation, ReservationStatus, ShopStatus};

use crate::config::ContentConfig;

/// The fixed document id of the shop-status singleton.
const SHOP_STATUS_ID: &str = "shopStatus";

/// Errors that can occur when talking to the content platform.
#[derive(Debug, Error)]
pub enum ContentError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response or serialize a document.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A document as stored in the platform: its `_id` plus the typed payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stored<T> {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(flatten)]
    pub document: T,
}

/// Content platform client with list, patch, and upsert access.
#[derive(Clone)]
pub struct ContentClient {
    client: reqwest::Client,
    api_url: String,
    dataset: String,
}

impl ContentClient {
    /// Create a new content platform client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ContentConfig) -> Result<Self, ContentError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.token.expose_secret());
        headers.insert(
            "Authorization",
            HeaderValue::from_str(&auth_value)
                .map_err(|e| ContentError::Parse(format!("Invalid token format: {e}")))?,
        );
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            dataset: config.dataset.clone(),
        })
    }

    /// Fetch the shop-status singleton, defaulting to open when absent.
    ///
    /// # Errors
    ///
    /// Returns error if the query request fails.
    pub async fn fetch_shop_status(&self) -> Result<ShopStatus, ContentError> {
        let status: Option<ShopStatus> = self
            .query(r#"*[_type == "shopStatus"][0]"#, &[])
            .await?;
        Ok(status.unwrap_or_default())
    }

    /// Upsert the shop-status singleton.
    ///
    /// The document is created with the open default if it does not exist
    /// yet, then patched with the requested values, all in one transaction.
    ///
    /// # Errors
    ///
    /// Returns error if the mutation request fails.
    pub async fn upsert_shop_status(&self, status: &ShopStatus) -> Result<(), ContentError> {
        let set = serde_json::to_value(status).map_err(|e| ContentError::Parse(e.to_string()))?;
        self.mutate(json!([
            {
                "createIfNotExists": {
                    "_id": SHOP_STATUS_ID,
                    "_type": "shopStatus",
                    "isShopOpen": true,
                    "closingReason": "",
                }
            },
            { "patch": { "id": SHOP_STATUS_ID, "set": set } },
        ]))
        .await
    }

    /// List all persisted orders, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query request fails.
    pub async fn list_orders(&self) -> Result<Vec<Stored<Order>>, ContentError> {
        self.query(r#"*[_type == "order"] | order(createdAt desc)"#, &[])
            .await
    }

    /// Find one order by its customer-facing order id.
    ///
    /// # Errors
    ///
    /// Returns error if the query request fails.
    pub async fn find_order(&self, order_id: &str) -> Result<Option<Stored<Order>>, ContentError> {
        let param = encode_param(order_id)?;
        self.query(
            r#"*[_type == "order" && orderId == $orderId][0]"#,
            &[("$orderId", param.as_str())],
        )
        .await
    }

    /// Record tracking data on an order and move it to shipped.
    ///
    /// # Errors
    ///
    /// Returns error if the mutation request fails.
    pub async fn mark_order_shipped(
        &self,
        doc_id: &str,
        tracking_code: &str,
        courier: &str,
        courier_link: Option<&str>,
    ) -> Result<(), ContentError> {
        self.mutate(json!([{
            "patch": {
                "id": doc_id,
                "set": shipment_fields(tracking_code, courier, courier_link),
            }
        }]))
        .await
    }

    /// List reservations, optionally filtered by status, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query request fails.
    pub async fn list_reservations(
        &self,
        status: Option<ReservationStatus>,
    ) -> Result<Vec<Stored<Reservation>>, ContentError> {
        match status {
            Some(status) => {
                let param = serde_json::to_string(&status)
                    .map_err(|e| ContentError::Parse(e.to_string()))?;
                self.query(
                    r#"*[_type == "reservation" && status == $status] | order(createdAt desc)"#,
                    &[("$status", param.as_str())],
                )
                .await
            }
            None => {
                self.query(r#"*[_type == "reservation"] | order(createdAt desc)"#, &[])
                    .await
            }
        }
    }

    /// Find one reservation by its document id.
    ///
    /// # Errors
    ///
    /// Returns error if the query request fails.
    pub async fn find_reservation(
        &self,
        doc_id: &str,
    ) -> Result<Option<Stored<Reservation>>, ContentError> {
        let param = encode_param(doc_id)?;
        self.query(
            r#"*[_type == "reservation" && _id == $id][0]"#,
            &[("$id", param.as_str())],
        )
        .await
    }

    /// Mark a reservation as completed.
    ///
    /// # Errors
    ///
    /// Returns error if the mutation request fails.
    pub async fn complete_reservation(&self, doc_id: &str) -> Result<(), ContentError> {
        self.mutate(json!([{
            "patch": { "id": doc_id, "set": { "status": "completed" } }
        }]))
        .await
    }

    /// Run a read query and deserialize the `result` envelope.
    ///
    /// Query parameters are passed as `$name` entries with JSON-encoded
    /// values, matching the platform's parameter convention.
    async fn query<T: DeserializeOwned>(
        &self,
        query: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ContentError> {
        let url = format!("{}/v1/data/query/{}", self.api_url, self.dataset);

        let mut request = self.client.get(&url).query(&[("query", query)]);
        for (name, value) in params {
            request = request.query(&[(name, value)]);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ContentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: QueryEnvelope<T> = response
            .json()
            .await
            .map_err(|e| ContentError::Parse(e.to_string()))?;

        Ok(envelope.result)
    }

    /// Submit a mutations array to the mutate endpoint.
    async fn mutate(&self, mutations: Value) -> Result<(), ContentError> {
        let url = format!("{}/v1/data/mutate/{}", self.api_url, self.dataset);
        let body = json!({ "mutations": mutations });

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ContentError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }
}

/// JSON-encode a string query parameter.
fn encode_param(value: &str) -> Result<String, ContentError> {
    serde_json::to_string(value).map_err(|e| ContentError::Parse(e.to_string()))
}

/// Build the `set` payload for a shipment patch.
fn shipment_fields(tracking_code: &str, courier: &str, courier_link: Option<&str>) -> Value {
    let mut set = json!({
        "status": "shipped",
        "trackingCode": tracking_code,
        "courier": courier,
    });
    if let (Some(link), Some(fields)) = (courier_link, set.as_object_mut()) {
        fields.insert("courierLink".to_string(), Value::String(link.to_string()));
    }
    set
}

/// Wrapper for the query response envelope.
#[derive(Debug, Deserialize)]
struct QueryEnvelope<T> {
    result: T,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_order_deserializes_with_id() {
        let json = r#"{
            "result": [{
                "_id": "8c1f0d2e",
                "_type": "order",
                "orderId": "5TY05013",
                "customerName": "Anna Russo",
                "customerEmail": "anna@esempio.it",
                "total": "54.00",
                "status": "pending",
                "createdAt": "2025-03-03T10:15:00Z"
            }]
        }"#;
        let envelope: QueryEnvelope<Vec<Stored<Order>>> = serde_json::from_str(json).unwrap();
        let stored = envelope.result.first().unwrap();
        assert_eq!(stored.id, "8c1f0d2e");
        assert_eq!(stored.document.order_id, "5TY05013");
    }

    #[test]
    fn test_stored_serializes_id_alongside_document() {
        let stored = Stored {
            id: "abc".to_string(),
            document: ShopStatus {
                is_open: false,
                closing_reason: "Ferie".to_string(),
            },
        };
        let value = serde_json::to_value(&stored).unwrap();
        assert_eq!(value.get("_id").unwrap(), "abc");
        assert_eq!(value.get("isShopOpen").unwrap(), false);
    }

    #[test]
    fn test_shipment_fields_without_link() {
        let set = shipment_fields("TRK123", "BRT", None);
        assert_eq!(set.get("status").unwrap(), "shipped");
        assert_eq!(set.get("trackingCode").unwrap(), "TRK123");
        assert_eq!(set.get("courier").unwrap(), "BRT");
        assert!(set.get("courierLink").is_none());
    }

    #[test]
    fn test_shipment_fields_with_link() {
        let set = shipment_fields("TRK123", "BRT", Some("https://brt.example/TRK123"));
        assert_eq!(
            set.get("courierLink").unwrap(),
            "https://brt.example/TRK123"
        );
    }

    #[test]
    fn test_encode_param_quotes_value() {
        assert_eq!(encode_param("5TY05013").unwrap(), "\"5TY05013\"");
    }
}
