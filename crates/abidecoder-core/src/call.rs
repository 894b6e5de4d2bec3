//! Function-call decoding.
//!
//! Call data is `0x` + 4-byte selector + ABI-encoded inputs. The selector
//! routes to a registered entry, the codec decodes the inputs, and integer
//! inputs are rendered as base-10 strings.

use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::ParamCodec;
use crate::error::DecodeError;
use crate::normalize;
use crate::registry::Registry;
use crate::selector::{SignatureHasher, FUNCTION_SELECTOR_LEN};
use crate::types::AbiValue;

/// Length of the `0x` prefix that precedes the selector.
const PREFIX_LEN: usize = 2;

/// One decoded input parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedParam {
    pub name: String,
    pub value: AbiValue,
    #[serde(rename = "type")]
    pub ty: String,
}

/// Result of decoding a function call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedMethod {
    /// Function name, e.g. "transfer"
    pub name: String,
    /// Inputs in declaration order
    pub params: Vec<DecodedParam>,
}

impl DecodedMethod {
    /// Look up a decoded input by name
    pub fn param(&self, name: &str) -> Option<&DecodedParam> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// Decode raw call data against the registry.
///
/// Returns `Ok(None)` when the selector is not registered, or when `data`
/// is too short to carry one. Codec failures on a matched entry are
/// returned as errors.
pub fn decode_method<H, C>(
    registry: &Registry<H>,
    codec: &C,
    data: &str,
) -> Result<Option<DecodedMethod>, DecodeError>
where
    H: SignatureHasher,
    C: ParamCodec + ?Sized,
{
    let selector_end = PREFIX_LEN + FUNCTION_SELECTOR_LEN;
    let Some(selector) = data.get(PREFIX_LEN..selector_end) else {
        debug!("call data too short for a selector ({} chars)", data.len());
        return Ok(None);
    };
    let Some(entry) = registry.lookup(selector) else {
        debug!("no entry for selector {}", selector);
        return Ok(None);
    };

    let types: Vec<&str> = entry.inputs.iter().map(|p| p.ty.as_str()).collect();
    let encoded = &data[selector_end..];
    let values = codec.decode_parameters(&types, encoded).map_err(|e| {
        warn!("decoding {} failed: {}", entry.canonical_signature(), e);
        e
    })?;

    let params = entry
        .inputs
        .iter()
        .zip(values)
        .map(|(input, value)| {
            let value = if normalize::is_integer_type(&input.ty) {
                normalize::to_decimal(value, normalize::is_signed_type(&input.ty))?
            } else {
                value
            };
            Ok(DecodedParam {
                name: input.name.clone(),
                value,
                ty: input.ty.clone(),
            })
        })
        .collect::<Result<Vec<_>, DecodeError>>()?;

    Ok(Some(DecodedMethod {
        name: entry.named().unwrap_or_default().to_string(),
        params,
    }))
}
