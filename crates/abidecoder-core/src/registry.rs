//! The definition registry: every entry ever added, plus a selector index.
//!
//! A registry is created once per decoding context and mutated explicitly
//! through `add` / `remove`. It has no internal locking; mutation takes
//! `&mut self`, so callers sharing one across threads wrap it themselves.

use indexmap::IndexMap;
use tracing::debug;

use crate::entry::InterfaceEntry;
use crate::error::DecodeError;
use crate::selector::{selector_for, Keccak256, Selector, SignatureHasher};

/// Append-only entry log plus a last-write-wins selector index.
#[derive(Debug, Clone, Default)]
pub struct Registry<H = Keccak256> {
    hasher: H,
    /// Every entry ever added, in call order; never shrinks
    all_entries: Vec<InterfaceEntry>,
    /// Selector → entry currently routed to it
    selector_index: IndexMap<Selector, InterfaceEntry>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: SignatureHasher> Registry<H> {
    /// Create a registry that derives selectors with a custom hasher.
    pub fn with_hasher(hasher: H) -> Self {
        Self {
            hasher,
            all_entries: Vec::new(),
            selector_index: IndexMap::new(),
        }
    }

    /// Register entries.
    ///
    /// Named entries are indexed under their selector, overwriting any entry
    /// with the same signature. Every entry, named or not, is then appended
    /// to [`all_entries`](Self::all_entries).
    pub fn add(&mut self, entries: &[InterfaceEntry]) {
        for entry in entries {
            if let Some(selector) = selector_for(entry, &self.hasher) {
                debug!(
                    "indexing {} {} under {}",
                    entry.kind,
                    entry.canonical_signature(),
                    selector
                );
                if let Some(prev) = self.selector_index.insert(selector, entry.clone()) {
                    if prev != *entry {
                        debug!("selector collision: {} replaced", prev.canonical_signature());
                    }
                }
            }
        }
        self.all_entries.extend_from_slice(entries);
    }

    /// Unregister entries by recomputed selector.
    ///
    /// Matching is by selector only, so removing an entry also drops a
    /// colliding entry that currently owns the slot. `all_entries` is left
    /// untouched.
    pub fn remove(&mut self, entries: &[InterfaceEntry]) {
        for entry in entries {
            if let Some(selector) = selector_for(entry, &self.hasher) {
                if self.selector_index.shift_remove(&selector).is_some() {
                    debug!("removed selector {}", selector);
                }
            }
        }
    }

    /// Register entries from ABI JSON text.
    ///
    /// The top-level value must be an array of ABI items. Nothing is
    /// registered unless every item parses.
    pub fn add_json(&mut self, json: &str) -> Result<usize, DecodeError> {
        let entries = parse_abi_array(json)?;
        self.add(&entries);
        Ok(entries.len())
    }

    /// Unregister entries described by ABI JSON text.
    pub fn remove_json(&mut self, json: &str) -> Result<usize, DecodeError> {
        let entries = parse_abi_array(json)?;
        self.remove(&entries);
        Ok(entries.len())
    }

    /// Every entry ever added, in insertion order, duplicates included.
    pub fn all_entries(&self) -> &[InterfaceEntry] {
        &self.all_entries
    }

    /// The current selector → entry table.
    pub fn selector_index(&self) -> &IndexMap<Selector, InterfaceEntry> {
        &self.selector_index
    }

    /// Look up an entry by selector hex (prefix optional, case-insensitive).
    pub fn lookup(&self, selector: &str) -> Option<&InterfaceEntry> {
        self.selector_index
            .get(Selector::from_hex(selector).as_hex())
    }

    /// Number of indexed selectors.
    pub fn len(&self) -> usize {
        self.selector_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selector_index.is_empty()
    }
}

fn parse_abi_array(json: &str) -> Result<Vec<InterfaceEntry>, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Array(items) = value else {
        return Err(DecodeError::InvalidInput {
            reason: format!("expected ABI array, got {}", json_kind(&value)),
        });
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item).map_err(|e| DecodeError::InvalidInput {
                reason: format!("ABI item {i}: {e}"),
            })
        })
        .collect()
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{EntryKind, Param};

    const TRANSFER_EVENT: &str =
        "ddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

    fn transfer_fn(to_name: &str) -> InterfaceEntry {
        InterfaceEntry::function(
            "transfer",
            vec![Param::new(to_name, "address"), Param::new("amount", "uint256")],
        )
    }

    fn transfer_event() -> InterfaceEntry {
        InterfaceEntry::event(
            "Transfer",
            vec![
                Param::indexed("from", "address"),
                Param::indexed("to", "address"),
                Param::new("value", "uint256"),
            ],
        )
    }

    #[test]
    fn add_and_lookup() {
        let mut reg = Registry::new();
        reg.add(&[transfer_fn("to"), transfer_event()]);

        assert_eq!(reg.lookup("a9059cbb"), Some(&transfer_fn("to")));
        assert_eq!(reg.lookup(&format!("0x{TRANSFER_EVENT}")), Some(&transfer_event()));
        assert_eq!(reg.len(), 2);
        assert_eq!(reg.all_entries().len(), 2);
    }

    #[test]
    fn collision_last_write_wins() {
        let mut reg = Registry::new();
        reg.add(&[transfer_fn("to")]);
        reg.add(&[transfer_fn("recipient")]);

        assert_eq!(reg.len(), 1);
        assert_eq!(reg.selector_index()["a9059cbb"], transfer_fn("recipient"));
        assert_eq!(reg.all_entries().len(), 2);
    }

    #[test]
    fn add_then_remove_restores_index_but_not_entries() {
        let mut reg = Registry::new();
        reg.add(&[transfer_event()]);
        let before = reg.selector_index().clone();

        reg.add(&[transfer_fn("to")]);
        reg.remove(&[transfer_fn("to")]);

        assert_eq!(reg.selector_index(), &before);
        assert_eq!(reg.all_entries().len(), 2);
    }

    #[test]
    fn remove_drops_colliding_slot() {
        let mut reg = Registry::new();
        reg.add(&[transfer_fn("recipient")]);
        reg.remove(&[transfer_fn("to")]);
        assert!(reg.lookup("a9059cbb").is_none());
    }

    #[test]
    fn unnamed_entries_are_kept_but_not_indexed() {
        let mut reg = Registry::new();
        let fallback = InterfaceEntry {
            name: None,
            kind: EntryKind::Fallback,
            inputs: vec![],
        };
        reg.add(&[fallback.clone(), InterfaceEntry::function("", vec![])]);
        assert!(reg.is_empty());
        assert_eq!(reg.all_entries(), &[fallback, InterfaceEntry::function("", vec![])]);
    }

    #[test]
    fn add_json_registers_items() {
        let mut reg = Registry::new();
        let n = reg
            .add_json(
                r#"[
                    {"type": "function", "name": "balanceOf",
                     "inputs": [{"name": "owner", "type": "address"}],
                     "outputs": [{"name": "", "type": "uint256"}]},
                    {"type": "fallback"}
                ]"#,
            )
            .unwrap();
        assert_eq!(n, 2);
        assert_eq!(reg.lookup("70a08231").unwrap().named(), Some("balanceOf"));
    }

    #[test]
    fn add_json_rejects_non_array() {
        let mut reg = Registry::new();
        let err = reg.add_json(r#"{"name": "transfer"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidInput { .. }));
        assert!(err.to_string().contains("got object"));
        assert!(reg.all_entries().is_empty());
    }

    #[test]
    fn add_json_rejects_bad_item_without_mutation() {
        let mut reg = Registry::new();
        let err = reg
            .add_json(r#"[{"name": "ok", "inputs": []}, {"name": 5}]"#)
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidInput { .. }));
        assert!(reg.all_entries().is_empty());
        assert!(reg.is_empty());
    }

    #[test]
    fn remove_json_requires_array() {
        let mut reg = Registry::new();
        assert!(matches!(
            reg.remove_json("42"),
            Err(DecodeError::InvalidInput { .. })
        ));
    }

    struct ZeroHasher;

    impl SignatureHasher for ZeroHasher {
        fn hash(&self, _input: &[u8]) -> [u8; 32] {
            [0u8; 32]
        }
    }

    #[test]
    fn custom_hasher() {
        let mut reg = Registry::with_hasher(ZeroHasher);
        reg.add(&[transfer_fn("to")]);
        assert!(reg.lookup("00000000").is_some());
    }
}
