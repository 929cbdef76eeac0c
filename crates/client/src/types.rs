use serde::{Deserialize, Serialize};

/// Default number of retrieval matches requested per query.
pub const DEFAULT_TOP_K: u32 = 3;

/// Request body for the primary endpoint (`POST {base}/mcp`)
#[derive(Debug, Clone, Serialize)]
pub struct McpQuery {
    pub input: String,
    pub top_k: u32,
}

/// Request body for the secondary endpoint (`POST {base}/chat`)
#[derive(Debug, Clone, Serialize)]
pub struct ChatQuery {
    pub query: String,
    pub top_k: u32,
}

/// Response body of the primary endpoint.
///
/// Every field is optional: the reply is only trusted after
/// [`interpret_primary`](crate::interpret_primary) has looked at it.
#[derive(Debug, Clone, Deserialize)]
pub struct McpReply {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body of the secondary endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default)]
    pub answer_html: Option<String>,
}

/// Raw reply surfaced by an endpoint: HTTP status plus unparsed body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointReply {
    pub status: u16,
    pub body: String,
}

impl EndpointReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the endpoint itself is absent.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}
