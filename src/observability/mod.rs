//! Observability for configstore
//!
//! Structured JSON logging: one log line per event, synchronous and
//! unbuffered, with deterministic key ordering.

mod logger;

pub use logger::{Logger, Severity};
