//! HTTP client for the purchasing list store (app1)
//!
//! The gateway relays the store's JSON bodies untouched; responses are
//! carried as `serde_json::Value` rather than retyped here. The client is
//! built without a timeout, matching the deployed middleware - a hung
//! store hangs the requesting task, nothing else.

use reqwest::Client;
use serde_json::Value;

/// Upstream failure from the purchasing store
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("upstream responded with status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the purchasing store's REST surface
#[derive(Clone)]
pub struct PurchasingClient {
    client: Client,
    base_url: String,
}

impl PurchasingClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// GET /lists, relayed as-is.
    pub async fn lists(&self) -> Result<Value, UpstreamError> {
        self.fetch_json(format!("{}/lists", self.base_url)).await
    }

    /// GET /items, optionally filtered by list.
    pub async fn items(&self, list_id: Option<i32>) -> Result<Value, UpstreamError> {
        let url = match list_id {
            Some(list_id) => format!("{}/items?list_id={}", self.base_url, list_id),
            None => format!("{}/items", self.base_url),
        };
        self.fetch_json(url).await
    }

    /// Liveness probe: a successful status on the listing endpoint.
    pub async fn probe(&self) -> bool {
        match self.client.get(format!("{}/lists", self.base_url)).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                tracing::error!("App1 connection error: {}", e);
                false
            }
        }
    }

    async fn fetch_json(&self, url: String) -> Result<Value, UpstreamError> {
        tracing::debug!("Proxying to {}", url);

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(UpstreamError::Status(response.status()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn relays_upstream_body_verbatim() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/lists")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id":1,"name":"groceries"}]"#)
            .create_async()
            .await;

        let client = PurchasingClient::new(server.url());
        let body = client.lists().await.expect("request failed");
        assert_eq!(body, json!([{"id": 1, "name": "groceries"}]));
    }

    #[tokio::test]
    async fn items_filter_is_passed_through() {
        let mut server = mockito::Server::new_async().await;
        let filtered = server
            .mock("GET", "/items?list_id=4")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let client = PurchasingClient::new(server.url());
        client.items(Some(4)).await.expect("request failed");
        filtered.assert_async().await;
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/lists")
            .with_status(500)
            .with_body(r#"{"error":"boom"}"#)
            .create_async()
            .await;

        let client = PurchasingClient::new(server.url());
        match client.lists().await {
            Err(UpstreamError::Status(status)) => assert_eq!(status.as_u16(), 500),
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn probe_reports_liveness() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/lists")
            .with_status(200)
            .with_body("[]")
            .create_async()
            .await;

        assert!(PurchasingClient::new(server.url()).probe().await);
        assert!(!PurchasingClient::new("http://127.0.0.1:1").probe().await);
    }
}
