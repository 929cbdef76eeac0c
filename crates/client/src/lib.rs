pub mod endpoint;
pub mod interpret;
pub mod mock;
pub mod types;

pub use endpoint::{ChatEndpoint, Endpoint, McpEndpoint};
pub use interpret::{
    MISSING_ANSWER_PLACEHOLDER, PrimaryVerdict, SecondaryVerdict, interpret_primary,
    interpret_secondary,
};
pub use mock::{MockEndpoint, MockReply, RecordedCall};
pub use types::{ChatQuery, ChatReply, DEFAULT_TOP_K, EndpointReply, McpQuery, McpReply};

pub use chatpane_core::{Error, Result};
