pub mod config;
pub mod error;
pub mod escape;
pub mod logging;

pub use config::{
    Config, EndpointsConfig, LoggingConfig, QueryConfig, ScrollConfig, TranscriptConfig,
};
pub use error::{Error, Result};
pub use escape::escape;
pub use logging::{LogFormat, init_logging};
