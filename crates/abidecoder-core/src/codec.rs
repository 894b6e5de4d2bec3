//! The `ParamCodec` trait: primitive ABI parameter decoding.
//!
//! The call and log decoders only route, split, and canonicalize; the
//! actual ABI decoding is delegated to a codec. `abidecoder-evm` provides
//! the alloy-backed implementation.

use crate::error::DecodeError;
use crate::types::AbiValue;

/// Decodes an ABI-encoded parameter sequence.
pub trait ParamCodec {
    /// Decode `encoded_hex` (optional `0x` prefix) as the parameter list
    /// `types`, returning one value per type in declared order.
    ///
    /// Array types decode to [`AbiValue::Array`]. An empty `types` slice
    /// must yield an empty vector.
    fn decode_parameters(
        &self,
        types: &[&str],
        encoded_hex: &str,
    ) -> Result<Vec<AbiValue>, DecodeError>;
}

impl<C: ParamCodec + ?Sized> ParamCodec for &C {
    fn decode_parameters(
        &self,
        types: &[&str],
        encoded_hex: &str,
    ) -> Result<Vec<AbiValue>, DecodeError> {
        (**self).decode_parameters(types, encoded_hex)
    }
}
