//! Content platform client for the storefront.
//!
//! The shop-status singleton and the persisted order/reservation documents
//! live in an external headless content platform. The storefront only needs
//! two capabilities: read the shop status and create new documents. Listing
//! and patching are admin concerns.

use reqwest::header::{HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use bottega_core::{Order, Reservation, ShopStatus};

use crate::config::ContentConfig;

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

/// Content platform client with read and create access.
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

    /// Fetch the shop-status singleton.
    ///
    /// A missing document resolves to the open default; transport and API
    /// failures are returned so the caller can decide how to degrade.
    ///
    /// # Errors
    ///
    /// Returns error if the query request fails.
    pub async fn fetch_shop_status(&self) -> Result<ShopStatus, ContentError> {
        let status: Option<ShopStatus> = self.query(r#"*[_type == "shopStatus"][0]"#).await?;
        Ok(status.unwrap_or_default())
    }

    /// Persist a new order document.
    ///
    /// # Errors
    ///
    /// Returns error if the mutation request fails.
    pub async fn create_order(&self, order: &Order) -> Result<(), ContentError> {
        self.create_document("order", order).await
    }

    /// Persist a new reservation document.
    ///
    /// # Errors
    ///
    /// Returns error if the mutation request fails.
    pub async fn create_reservation(&self, reservation: &Reservation) -> Result<(), ContentError> {
        self.create_document("reservation", reservation).await
    }

    /// Run a read query and deserialize the `result` envelope.
    async fn query<T: DeserializeOwned>(&self, query: &str) -> Result<T, ContentError> {
        let url = format!("{}/v1/data/query/{}", self.api_url, self.dataset);

        let response = self.client.get(&url).query(&[("query", query)]).send().await?;
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

    /// Submit a `create` mutation for one document of the given type.
    async fn create_document<T: Serialize>(
        &self,
        doc_type: &str,
        document: &T,
    ) -> Result<(), ContentError> {
        let mut doc = serde_json::to_value(document).map_err(|e| ContentError::Parse(e.to_string()))?;
        let Some(fields) = doc.as_object_mut() else {
            return Err(ContentError::Parse(format!(
                "document of type {doc_type} did not serialize to an object"
            )));
        };
        fields.insert(
            "_type".to_string(),
            serde_json::Value::String(doc_type.to_string()),
        );

        let url = format!("{}/v1/data/mutate/{}", self.api_url, self.dataset);
        let body = serde_json::json!({
            "mutations": [{ "create": doc }]
        });

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
    fn test_query_envelope_deserializes_missing_singleton() {
        let envelope: QueryEnvelope<Option<ShopStatus>> =
            serde_json::from_str(r#"{"result": null}"#).unwrap();
        assert!(envelope.result.is_none());
    }

    #[test]
    fn test_query_envelope_deserializes_shop_status() {
        let envelope: QueryEnvelope<Option<ShopStatus>> = serde_json::from_str(
            r#"{"result": {"isShopOpen": false, "closingReason": "Ferie estive"}}"#,
        )
        .unwrap();
        let status = envelope.result.unwrap();
        assert!(!status.is_open);
        assert_eq!(status.closing_reason, "Ferie estive");
    }
}
