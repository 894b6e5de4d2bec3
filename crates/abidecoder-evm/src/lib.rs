//! # abidecoder-evm
//!
//! EVM implementation of the abidecoder pipeline, built on alloy-rs.
//!
//! ## Implementation notes
//! - `AlloyCodec` decodes parameter sequences with `alloy-dyn-abi`
//! - Call data: `0x` + 4-byte selector + ABI-encoded inputs
//! - Logs: topics[0] → event selector, topics[1..] → indexed params,
//!   `data` → non-indexed params
//! - `AbiDecoder` bundles a registry and a codec into one decoding context

pub mod batch;
pub mod codec;
pub mod decoder;
pub mod normalizer;

pub use codec::AlloyCodec;
pub use decoder::AbiDecoder;

pub use abidecoder_core::{
    AbiValue, DecodeError, DecodedEventParam, DecodedLog, DecodedMethod, DecodedParam, EntryKind,
    InterfaceEntry, Param, RawLog, Registry, Selector,
};
