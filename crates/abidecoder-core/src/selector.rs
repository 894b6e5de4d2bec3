//! Selector derivation.
//!
//! The selector of an entry is the keccak256 hash of its canonical signature:
//!   keccak256("transfer(address,uint256)")[..4]     → a9059cbb
//!   keccak256("Transfer(address,address,uint256)")  → ddf252ad…b3ef
//!
//! Functions (and every other non-event kind) keep the first 4 bytes, events
//! keep the full 32-byte digest. Selectors are stored as lowercase hex
//! without a `0x` prefix.

use serde::{Deserialize, Serialize};
use tiny_keccak::{Hasher, Keccak};

use crate::entry::{EntryKind, InterfaceEntry};

/// Length in hex characters of a function selector.
pub const FUNCTION_SELECTOR_LEN: usize = 8;
/// Length in hex characters of an event selector.
pub const EVENT_SELECTOR_LEN: usize = 64;

/// The hash capability used for selector derivation.
pub trait SignatureHasher {
    fn hash(&self, input: &[u8]) -> [u8; 32];
}

/// Keccak-256, the hash Ethereum uses for ABI selectors.
#[derive(Debug, Default, Clone, Copy)]
pub struct Keccak256;

impl SignatureHasher for Keccak256 {
    fn hash(&self, input: &[u8]) -> [u8; 32] {
        let mut hasher = Keccak::v256();
        let mut output = [0u8; 32];
        hasher.update(input);
        hasher.finalize(&mut output);
        output
    }
}

/// Hex selector routing raw call data or log topics to an entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Selector(String);

impl Selector {
    /// Build a selector from hex, dropping any `0x` prefix and lowercasing.
    pub fn from_hex(hex: &str) -> Self {
        Self(strip_hex_prefix(hex).to_ascii_lowercase())
    }

    pub fn as_hex(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::borrow::Borrow<str> for Selector {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Compute the selector of an entry.
///
/// Returns `None` for entries without a non-empty name; those are never
/// indexed.
pub fn selector_for<H: SignatureHasher + ?Sized>(
    entry: &InterfaceEntry,
    hasher: &H,
) -> Option<Selector> {
    entry.named()?;
    let digest = hex::encode(hasher.hash(entry.canonical_signature().as_bytes()));
    let selector = match entry.kind {
        EntryKind::Event => digest,
        _ => digest[..FUNCTION_SELECTOR_LEN].to_string(),
    };
    Some(Selector(selector))
}

/// Drop a leading `0x` / `0X` if present.
pub fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Param;

    fn transfer_fn() -> InterfaceEntry {
        InterfaceEntry::function(
            "transfer",
            vec![Param::new("to", "address"), Param::new("amount", "uint256")],
        )
    }

    #[test]
    fn erc20_transfer_function_selector() {
        let sel = selector_for(&transfer_fn(), &Keccak256).unwrap();
        assert_eq!(sel.as_hex(), "a9059cbb");
    }

    #[test]
    fn erc20_transfer_event_selector_is_full_digest() {
        let e = InterfaceEntry::event(
            "Transfer",
            vec![
                Param::indexed("from", "address"),
                Param::indexed("to", "address"),
                Param::new("value", "uint256"),
            ],
        );
        let sel = selector_for(&e, &Keccak256).unwrap();
        assert_eq!(sel.as_hex().len(), EVENT_SELECTOR_LEN);
        assert_eq!(
            sel.as_hex(),
            "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
        );
    }

    #[test]
    fn uniswap_v3_swap_selector() {
        let e = InterfaceEntry::event(
            "Swap",
            ["address", "address", "int256", "int256", "uint160", "uint128", "int24"]
                .iter()
                .enumerate()
                .map(|(i, ty)| Param::new(format!("p{i}"), *ty))
                .collect(),
        );
        assert_eq!(
            selector_for(&e, &Keccak256).unwrap().as_hex(),
            "c42079f94a6350d7e6235f29174924f928cc2ac818eb64fed8004e115fbcca67"
        );
    }

    #[test]
    fn constructor_uses_short_form() {
        let mut e = transfer_fn();
        e.kind = EntryKind::Constructor;
        assert_eq!(selector_for(&e, &Keccak256).unwrap().as_hex().len(), 8);
    }

    #[test]
    fn unnamed_entry_has_no_selector() {
        let mut e = transfer_fn();
        e.name = None;
        assert!(selector_for(&e, &Keccak256).is_none());
    }

    #[test]
    fn from_hex_normalizes() {
        assert_eq!(Selector::from_hex("0xA9059CBB").as_hex(), "a9059cbb");
        assert_eq!(Selector::from_hex("a9059cbb").as_hex(), "a9059cbb");
    }
}
