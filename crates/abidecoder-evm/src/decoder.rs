//! `AbiDecoder`: one registry plus one codec behind the public decoding API.

use abidecoder_core::{
    call::{decode_method, DecodedMethod},
    codec::ParamCodec,
    entry::InterfaceEntry,
    error::DecodeError,
    event::{decode_logs, DecodedLog, RawLog},
    registry::Registry,
    selector::Selector,
};
use indexmap::IndexMap;

use crate::{batch, codec::AlloyCodec};

/// A decoding context: the registry of known entries and the codec used to
/// decode their parameters.
///
/// Registration takes `&mut self`; decoding takes `&self`. Share one across
/// threads behind a lock, or give each thread its own.
#[derive(Debug, Default, Clone)]
pub struct AbiDecoder<C = AlloyCodec> {
    registry: Registry,
    codec: C,
}

impl AbiDecoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ParamCodec> AbiDecoder<C> {
    /// Use a different parameter codec.
    pub fn with_codec(codec: C) -> Self {
        Self {
            registry: Registry::new(),
            codec,
        }
    }

    pub fn add(&mut self, entries: &[InterfaceEntry]) {
        self.registry.add(entries);
    }

    pub fn remove(&mut self, entries: &[InterfaceEntry]) {
        self.registry.remove(entries);
    }

    /// Register every item of an ABI JSON array.
    pub fn add_json(&mut self, json: &str) -> Result<usize, DecodeError> {
        self.registry.add_json(json)
    }

    pub fn remove_json(&mut self, json: &str) -> Result<usize, DecodeError> {
        self.registry.remove_json(json)
    }

    pub fn all_entries(&self) -> &[InterfaceEntry] {
        self.registry.all_entries()
    }

    pub fn selector_index(&self) -> &IndexMap<Selector, InterfaceEntry> {
        self.registry.selector_index()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Decode call data; `Ok(None)` if the selector is not registered.
    pub fn decode_method(&self, data: &str) -> Result<Option<DecodedMethod>, DecodeError> {
        decode_method(&self.registry, &self.codec, data)
    }

    /// Decode a batch of logs, one output slot per input log.
    pub fn decode_logs(&self, logs: &[RawLog]) -> Result<Vec<Option<DecodedLog>>, DecodeError> {
        decode_logs(&self.registry, &self.codec, logs)
    }
}

impl<C: ParamCodec + Sync> AbiDecoder<C> {
    /// Same as [`decode_logs`](Self::decode_logs), fanned out with Rayon.
    pub fn decode_logs_parallel(
        &self,
        logs: &[RawLog],
    ) -> Result<Vec<Option<DecodedLog>>, DecodeError> {
        batch::parallel_decode(&self.registry, &self.codec, logs)
    }
}
