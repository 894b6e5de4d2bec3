//! Error types for the abidecoder registry and decode pipeline.

use thiserror::Error;

/// Errors raised while registering interface entries or decoding payloads.
///
/// An unknown selector is not an error: lookups return `Ok(None)` instead.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("Unknown ABI type '{ty}': {reason}")]
    UnknownType { ty: String, reason: String },

    #[error("ABI decode failed: {reason}")]
    AbiDecodeFailed { reason: String },

    #[error("Invalid hex: {reason}")]
    InvalidHex { reason: String },

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
