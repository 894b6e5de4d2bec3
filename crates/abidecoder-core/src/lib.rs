//! # abidecoder-core
//!
//! Selector registry and decode pipeline shared by every abidecoder crate.
//!
//! Interface entries (ABI items) are registered in a [`Registry`], which
//! indexes them by selector. Raw call data and event logs are routed through
//! that index, decoded by a [`ParamCodec`], and canonicalized: integers
//! become base-10 strings, indexed addresses are cut from their 32-byte
//! topic slot.

pub mod call;
pub mod codec;
pub mod entry;
pub mod error;
pub mod event;
pub mod normalize;
pub mod registry;
pub mod selector;
pub mod types;

pub use call::{decode_method, DecodedMethod, DecodedParam};
pub use codec::ParamCodec;
pub use entry::{EntryKind, InterfaceEntry, Param};
pub use error::DecodeError;
pub use event::{decode_log, decode_logs, DecodedEventParam, DecodedLog, RawLog};
pub use normalize::normalize_address;
pub use registry::Registry;
pub use selector::{selector_for, Keccak256, Selector, SignatureHasher};
pub use types::AbiValue;
