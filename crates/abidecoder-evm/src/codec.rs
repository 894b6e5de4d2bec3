//! `AlloyCodec`: the `ParamCodec` implementation built on alloy-dyn-abi.
//!
//! Type names are parsed with `DynSolType::parse` and the payload is decoded
//! as a parameter sequence (the layout of call data after the selector and
//! of log `data`).

use abidecoder_core::{
    codec::ParamCodec, error::DecodeError, selector::strip_hex_prefix, types::AbiValue,
};
use alloy_dyn_abi::{DynSolType, DynSolValue};

use crate::normalizer;

/// Stateless alloy-backed parameter codec. Cheap to copy, thread-safe.
#[derive(Debug, Default, Clone, Copy)]
pub struct AlloyCodec;

impl AlloyCodec {
    pub fn new() -> Self {
        Self
    }

    /// Parse a list of Solidity type names.
    pub fn parse_types(types: &[&str]) -> Result<Vec<DynSolType>, DecodeError> {
        types
            .iter()
            .map(|ty| {
                DynSolType::parse(ty).map_err(|e| DecodeError::UnknownType {
                    ty: ty.to_string(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

impl ParamCodec for AlloyCodec {
    fn decode_parameters(
        &self,
        types: &[&str],
        encoded_hex: &str,
    ) -> Result<Vec<AbiValue>, DecodeError> {
        if types.is_empty() {
            return Ok(Vec::new());
        }

        let tuple_type = DynSolType::Tuple(Self::parse_types(types)?);
        let bytes = hex::decode(strip_hex_prefix(encoded_hex)).map_err(|e| {
            DecodeError::InvalidHex {
                reason: format!("encoded parameters: {e}"),
            }
        })?;

        let decoded = tuple_type
            .abi_decode_params(&bytes)
            .map_err(|e| DecodeError::AbiDecodeFailed {
                reason: e.to_string(),
            })?;

        let values = match decoded {
            DynSolValue::Tuple(vals) => vals,
            other => vec![other],
        };
        Ok(values.into_iter().map(normalizer::normalize).collect())
    }
}
