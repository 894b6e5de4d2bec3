//! # abidecoder-observability
//!
//! Structured logging for abidecoder hosts.
//!
//! The library crates only emit `tracing` events (`debug!` on registry
//! mutation and selector misses, `warn!` on codec failures). This crate
//! installs a subscriber for them: human-readable text or JSON lines,
//! with per-component log levels.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, try_init_tracing, LogConfig};
