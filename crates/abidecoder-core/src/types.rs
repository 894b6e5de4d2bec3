//! Decoded parameter values.
//!
//! A [`ParamCodec`](crate::codec::ParamCodec) produces `AbiValue`s; the call
//! and log decoders then canonicalize integers into base-10 strings and
//! addresses into 40-hex-digit form.

use alloy_primitives::{I256, U256};
use serde::{ser::SerializeSeq, Serialize, Serializer};
use std::fmt;

/// A decoded ABI value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    /// Unsigned integer straight from the codec
    Uint(U256),
    /// Signed integer straight from the codec
    Int(I256),
    /// Canonical base-10 rendering of an integer
    Decimal(String),
    Bool(bool),
    /// 0x-prefixed, 40 hex digits
    Address(String),
    Bytes(Vec<u8>),
    Str(String),
    /// Raw hex word as found in a log topic, passed through verbatim
    Hex(String),
    Array(Vec<AbiValue>),
    Tuple(Vec<AbiValue>),
    /// Absent value, e.g. an indexed parameter with no topic left to consume
    Null,
}

impl AbiValue {
    /// Returns `true` if this value is absent.
    pub fn is_null(&self) -> bool {
        matches!(self, AbiValue::Null)
    }

    /// Returns the inner string if this is an Address value.
    pub fn as_address(&self) -> Option<&str> {
        match self {
            AbiValue::Address(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the inner string if this is a canonical Decimal value.
    pub fn as_decimal(&self) -> Option<&str> {
        match self {
            AbiValue::Decimal(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[AbiValue]> {
        match self {
            AbiValue::Array(v) => Some(v.as_slice()),
            _ => None,
        }
    }
}

impl fmt::Display for AbiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbiValue::Uint(v) => write!(f, "{v}"),
            AbiValue::Int(v) => write!(f, "{v}"),
            AbiValue::Decimal(v) => write!(f, "{v}"),
            AbiValue::Bool(v) => write!(f, "{v}"),
            AbiValue::Address(a) => write!(f, "{a}"),
            AbiValue::Bytes(b) => write!(f, "0x{}", hex::encode(b)),
            AbiValue::Str(s) => write!(f, "{s}"),
            AbiValue::Hex(h) => write!(f, "{h}"),
            AbiValue::Array(v) | AbiValue::Tuple(v) => {
                let parts: Vec<_> = v.iter().map(|x| x.to_string()).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            AbiValue::Null => write!(f, "null"),
        }
    }
}

// JSON shape: integers and addresses as strings, bytes as 0x-hex, arrays and
// tuples as sequences, absent as null.
impl Serialize for AbiValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AbiValue::Uint(v) => serializer.collect_str(v),
            AbiValue::Int(v) => serializer.collect_str(v),
            AbiValue::Bool(b) => serializer.serialize_bool(*b),
            AbiValue::Decimal(s)
            | AbiValue::Address(s)
            | AbiValue::Str(s)
            | AbiValue::Hex(s) => serializer.serialize_str(s),
            AbiValue::Bytes(b) => serializer.collect_str(&format_args!("0x{}", hex::encode(b))),
            AbiValue::Array(items) | AbiValue::Tuple(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            AbiValue::Null => serializer.serialize_none(),
        }
    }
}
