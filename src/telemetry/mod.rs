//! Telemetry
//!
//! Structured logging setup.

pub mod logging;

pub use logging::{LogFormat, LogLevel, LoggingConfig};
