use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::endpoint::Endpoint;
use crate::types::EndpointReply;
use chatpane_core::{Error, Result};

/// One scripted turn of a [`MockEndpoint`]
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Serve this reply
    Reply(EndpointReply),
    /// Fail at the transport level with this message
    Error(String),
}

/// A call the mock received, kept for assertions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    pub query: String,
    pub top_k: u32,
}

/// Mock endpoint for deterministic testing without a server.
///
/// Replies are consumed in script order; sending past the end of the script
/// is a transport error.
pub struct MockEndpoint {
    route: String,
    replies: Vec<MockReply>,
    cursor: AtomicUsize,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockEndpoint {
    pub fn new(route: impl Into<String>) -> Self {
        Self { route: route.into(), replies: Vec::new(), cursor: AtomicUsize::new(0), calls: Mutex::new(Vec::new()) }
    }

    /// Script a reply with the given status and body.
    pub fn with_reply(mut self, status: u16, body: impl Into<String>) -> Self {
        self.replies.push(MockReply::Reply(EndpointReply::new(status, body)));
        self
    }

    /// Script a transport-level failure.
    pub fn with_transport_error(mut self, message: impl Into<String>) -> Self {
        self.replies.push(MockReply::Error(message.into()));
        self
    }

    /// Number of sends this mock has served.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// All calls received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_reply(&self) -> Result<EndpointReply> {
        let index = self.cursor.fetch_add(1, Ordering::SeqCst);
        match self.replies.get(index) {
            Some(MockReply::Reply(reply)) => Ok(reply.clone()),
            Some(MockReply::Error(message)) => Err(Error::Endpoint(message.clone())),
            None => Err(Error::Endpoint(format!(
                "no scripted reply for {} (requested: {}, available: {})",
                self.route,
                index + 1,
                self.replies.len()
            ))),
        }
    }
}

#[async_trait::async_trait]
impl Endpoint for MockEndpoint {
    async fn send(&self, query: &str, top_k: u32) -> Result<EndpointReply> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall { query: query.to_string(), top_k });
        self.next_reply()
    }

    fn route(&self) -> &str {
        &self.route
    }
}
