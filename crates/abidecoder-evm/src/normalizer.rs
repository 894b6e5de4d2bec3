//! Converts alloy-core `DynSolValue` → abidecoder `AbiValue`.
//!
//! Integers keep their full 256-bit form here; base-10 rendering is left to
//! the call and log decoders, which decide per declared type.

use abidecoder_core::types::AbiValue;
use alloy_core::dyn_abi::DynSolValue;

/// Convert a decoded `DynSolValue` into an `AbiValue`.
pub fn normalize(val: DynSolValue) -> AbiValue {
    match val {
        DynSolValue::Bool(b) => AbiValue::Bool(b),

        DynSolValue::Int(i, _bits) => AbiValue::Int(i),

        DynSolValue::Uint(u, _bits) => AbiValue::Uint(u),

        // bytesN is right-padded inside a 32-byte word
        DynSolValue::FixedBytes(word, size) => AbiValue::Bytes(word[..size.min(32)].to_vec()),

        DynSolValue::Bytes(b) => AbiValue::Bytes(b),

        DynSolValue::String(s) => AbiValue::Str(s),

        // EIP-55 checksum encoding
        DynSolValue::Address(a) => AbiValue::Address(a.to_checksum(None)),

        DynSolValue::Array(vals) | DynSolValue::FixedArray(vals) => {
            AbiValue::Array(vals.into_iter().map(normalize).collect())
        }

        DynSolValue::Tuple(fields) => AbiValue::Tuple(fields.into_iter().map(normalize).collect()),

        // address + selector, 24 bytes
        DynSolValue::Function(f) => AbiValue::Bytes(f.to_vec()),
    }
}
