use reqwest::Client as HttpClient;

use crate::types::{ChatQuery, EndpointReply, McpQuery};
use chatpane_core::{Error, Result};

/// A query endpoint: sends one request and surfaces status plus raw body.
///
/// Transport-level failures (connection, DNS, body read) come back as `Err`;
/// anything the server actually said, 4xx/5xx included, comes back as an
/// [`EndpointReply`] for the caller to interpret.
#[async_trait::async_trait]
pub trait Endpoint: Send + Sync {
    /// Send a query with the requested match count.
    async fn send(&self, query: &str, top_k: u32) -> Result<EndpointReply>;

    /// Route suffix this endpoint posts to (named in user-facing failures).
    fn route(&self) -> &str;
}

/// Primary endpoint: `POST {base}/mcp` with `{input, top_k}`.
pub struct McpEndpoint {
    client: HttpClient,
    base_url: String,
}

impl McpEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: HttpClient::new(), base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl Endpoint for McpEndpoint {
    async fn send(&self, query: &str, top_k: u32) -> Result<EndpointReply> {
        let body = McpQuery { input: query.to_string(), top_k };
        let url = format!("{}{}", self.base_url, self.route());

        tracing::debug!(%url, top_k, "sending primary query");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Endpoint(format!("request to {} failed: {}", self.route(), e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Endpoint(format!("reading {} reply failed: {}", self.route(), e)))?;

        Ok(EndpointReply::new(status, text))
    }

    fn route(&self) -> &str {
        "/mcp"
    }
}

/// Secondary endpoint: `POST {base}/chat` with `{query, top_k}`.
pub struct ChatEndpoint {
    client: HttpClient,
    base_url: String,
}

impl ChatEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { client: HttpClient::new(), base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait::async_trait]
impl Endpoint for ChatEndpoint {
    async fn send(&self, query: &str, top_k: u32) -> Result<EndpointReply> {
        let body = ChatQuery { query: query.to_string(), top_k };
        let url = format!("{}{}", self.base_url, self.route());

        tracing::debug!(%url, top_k, "sending fallback query");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| Error::Endpoint(format!("request to {} failed: {}", self.route(), e)))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Endpoint(format!("reading {} reply failed: {}", self.route(), e)))?;

        Ok(EndpointReply::new(status, text))
    }

    fn route(&self) -> &str {
        "/chat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mcp_endpoint_creation() {
        let endpoint = McpEndpoint::new("http://127.0.0.1:5001");
        assert_eq!(endpoint.base_url(), "http://127.0.0.1:5001");
        assert_eq!(endpoint.route(), "/mcp");
    }

    #[test]
    fn test_chat_endpoint_creation() {
        let endpoint = ChatEndpoint::new("http://127.0.0.1:5000");
        assert_eq!(endpoint.base_url(), "http://127.0.0.1:5000");
        assert_eq!(endpoint.route(), "/chat");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_transport_error() {
        // Port 0 is never listening; the send must fail before any reply.
        let endpoint = ChatEndpoint::new("http://127.0.0.1:0");
        let err = endpoint.send("hello", 3).await.unwrap_err();
        assert!(err.to_string().contains("/chat"));
    }
}
