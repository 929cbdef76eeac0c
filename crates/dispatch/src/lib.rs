pub mod dispatcher;

pub use dispatcher::{DispatchOutcome, QueryDispatcher, parse_top_k};

pub use chatpane_core::{Error, Result};
