//! Shared HTTP transport bound to the account API host.

use log::debug;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;

use crate::target;

use super::envelope::{ApiResponse, unwrap_payload};
use super::error::ApiError;

/// Long-lived transport shared by every account API operation.
///
/// Read-only after construction. No timeout is configured; callers that
/// need one wrap the call themselves.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Creates a transport from a configured reqwest Client and an optional
    /// base URL, falling back to the resolved API hostname.
    pub fn new(client: Client, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(target::api_hostname);
        Self { client, base_url }
    }

    /// Returns a reference to the underlying reqwest Client.
    pub fn inner(&self) -> &Client {
        &self.client
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues a GET request and returns the unwrapped payload.
    #[tracing::instrument(skip(self, query))]
    pub async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} with query {:?}...", url, query);

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        normalize(response).await
    }

    /// Issues a POST request with a JSON body and returns the unwrapped payload.
    #[tracing::instrument(skip(self, body))]
    pub async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Value, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("POST {}...", url);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::from_transport(&e))?;

        normalize(response).await
    }
}

/// Shared response/error normalization: non-success statuses become
/// `ApiError::Remote`, success bodies go through envelope unwrapping.
async fn normalize(response: reqwest::Response) -> Result<Value, ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::from_transport(&e))?;

    let envelope = ApiResponse {
        status: status.as_u16(),
        data: parse_body(&text),
    };

    if status.is_success() {
        Ok(unwrap_payload(&envelope))
    } else {
        Err(ApiError::Remote(envelope))
    }
}

/// Endpoints that answer with an empty or non-JSON body still produce a
/// response-shaped value.
fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Null;
    }
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_client(base_url: &str) -> ApiClient {
        ApiClient::new(Client::new(), Some(base_url.to_string()))
    }

    /// Binds an ephemeral port and frees it again, so dialing it is
    /// guaranteed to be refused.
    fn unreachable_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);
        format!("http://127.0.0.1:{}", port)
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(""), Value::Null);
        assert_eq!(parse_body(r#"{"id": "a1"}"#), json!({"id": "a1"}));
        assert_eq!(parse_body("halted"), json!("halted"));
    }

    #[test]
    fn test_base_url_accessors() {
        let client = test_client("https://api.example.com");
        assert_eq!(client.base_url(), "https://api.example.com");
        // The inner client is the shared instance, exposed read-only.
        let _ = client.inner();
    }

    #[tokio::test]
    async fn test_get_unwraps_nested_payload() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/v1/resource")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data": {"id": "a1"}}"#)
            .create_async()
            .await;

        let client = test_client(&url);
        let payload = client.get("/v1/resource", &[]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(payload, json!({"id": "a1"}));
    }

    #[tokio::test]
    async fn test_get_without_envelope_returns_full_response() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/v1/resource")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"accounts": []}"#)
            .create_async()
            .await;

        let client = test_client(&url);
        let payload = client.get("/v1/resource", &[]).await.unwrap();

        mock.assert_async().await;
        assert_eq!(payload, json!({"status": 200, "data": {"accounts": []}}));
    }

    #[tokio::test]
    async fn test_get_sends_query_parameters() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/v1/resource?currency=USD")
            .with_status(200)
            .with_body(r#"{"data": {"currency": "USD"}}"#)
            .create_async()
            .await;

        let client = test_client(&url);
        let payload = client
            .get("/v1/resource", &[("currency", "USD")])
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(payload, json!({"currency": "USD"}));
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("POST", "/v1/resource")
            .match_body(mockito::Matcher::Json(json!({"name": "test"})))
            .with_status(201)
            .with_body(r#"{"data": {"id": "a1"}}"#)
            .create_async()
            .await;

        let client = test_client(&url);
        let payload = client
            .post("/v1/resource", &json!({"name": "test"}))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(payload, json!({"id": "a1"}));
    }

    #[tokio::test]
    async fn test_error_status_yields_remote_error() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/v1/resource")
            .with_status(404)
            .with_body(r#"{"code": 404, "message": "Not Found"}"#)
            .create_async()
            .await;

        let client = test_client(&url);
        let error = client.get("/v1/resource", &[]).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(
            error,
            ApiError::Remote(ApiResponse {
                status: 404,
                data: json!({"code": 404, "message": "Not Found"}),
            })
        );
    }

    #[tokio::test]
    async fn test_error_status_with_empty_body() {
        let mut server = mockito::Server::new_async().await;
        let url = server.url();

        let mock = server
            .mock("GET", "/v1/resource")
            .with_status(500)
            .create_async()
            .await;

        let client = test_client(&url);
        let error = client.get("/v1/resource", &[]).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(
            error,
            ApiError::Remote(ApiResponse {
                status: 500,
                data: Value::Null,
            })
        );
    }

    #[tokio::test]
    async fn test_connection_failure_yields_transport_error() {
        let client = test_client(&unreachable_url());
        let error = client.get("/v1/resource", &[]).await.unwrap_err();

        assert!(matches!(error, ApiError::Transport(_)));
    }
}
