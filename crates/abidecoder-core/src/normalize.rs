//! Canonicalization applied after the codec has decoded raw values.
//!
//! Integers become base-10 strings and addresses are cut (or padded) to
//! exactly 40 hex digits.

use alloy_primitives::{I256, U256};

use crate::error::DecodeError;
use crate::selector::strip_hex_prefix;
use crate::types::AbiValue;

const ADDRESS_HEX_LEN: usize = 40;

/// Types that log decoding renders as decimal strings. Deliberately narrow:
/// other widths keep whatever form the codec produced.
const LOG_DECIMAL_TYPES: [&str; 3] = ["uint256", "uint8", "int"];

/// Recover a 20-byte address from a hex string of any length.
///
/// Longer inputs (a 32-byte topic slot) keep their rightmost 40 digits,
/// shorter ones are left-padded with `'0'`.
pub fn normalize_address(hex: &str) -> String {
    let digits = strip_hex_prefix(hex);
    if digits.len() < ADDRESS_HEX_LEN {
        format!("0x{digits:0>ADDRESS_HEX_LEN$}")
    } else {
        // Char-boundary safe even on non-ASCII garbage input.
        let skip = digits.chars().count().saturating_sub(ADDRESS_HEX_LEN);
        let tail: String = digits.chars().skip(skip).collect();
        format!("0x{tail}")
    }
}

/// Whether a declared type is rendered as a decimal string in call decoding.
pub fn is_integer_type(ty: &str) -> bool {
    ty.starts_with("uint") || ty.starts_with("int")
}

/// Whether a declared type is rendered as a decimal string in log decoding.
pub fn is_log_decimal_type(ty: &str) -> bool {
    LOG_DECIMAL_TYPES.contains(&ty)
}

/// Render an integer value in base 10, recursing into arrays element-wise.
///
/// Topic words are read as 256-bit big-endian integers; `signed` selects
/// two's-complement. Non-integer values are returned unchanged.
pub fn to_decimal(value: AbiValue, signed: bool) -> Result<AbiValue, DecodeError> {
    Ok(match value {
        AbiValue::Uint(u) => AbiValue::Decimal(u.to_string()),
        AbiValue::Int(i) => AbiValue::Decimal(i.to_string()),
        AbiValue::Hex(h) => AbiValue::Decimal(hex_word_to_decimal(&h, signed)?),
        AbiValue::Array(items) => AbiValue::Array(
            items
                .into_iter()
                .map(|v| to_decimal(v, signed))
                .collect::<Result<_, _>>()?,
        ),
        other => other,
    })
}

/// Apply address normalization to a string-like value.
pub fn to_address(value: AbiValue) -> AbiValue {
    match value {
        AbiValue::Address(s) | AbiValue::Hex(s) | AbiValue::Str(s) => {
            AbiValue::Address(normalize_address(&s))
        }
        other => other,
    }
}

/// Whether a declared integer type is signed (`int`, `int24`, `int256[]`...).
pub fn is_signed_type(ty: &str) -> bool {
    ty.starts_with("int")
}

fn hex_word_to_decimal(hex: &str, signed: bool) -> Result<String, DecodeError> {
    let digits = strip_hex_prefix(hex);
    let significant = digits.trim_start_matches('0');
    if significant.len() > 64 {
        return Err(DecodeError::InvalidHex {
            reason: format!(
                "integer word '{hex}': value exceeds 256 bits ({} hex digits)",
                significant.len()
            ),
        });
    }
    let word = if significant.is_empty() {
        U256::ZERO
    } else {
        U256::from_str_radix(significant, 16).map_err(|e| DecodeError::InvalidHex {
            reason: format!("integer word '{hex}': {e}"),
        })?
    };
    Ok(if signed {
        I256::from_raw(word).to_string()
    } else {
        word.to_string()
    })
}
