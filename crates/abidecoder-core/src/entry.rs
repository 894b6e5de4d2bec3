//! Interface entries: the in-memory form of a single ABI JSON item.

use serde::{Deserialize, Serialize};

/// What kind of ABI item an entry describes.
///
/// Only `Event` changes selector derivation; every other kind uses the
/// 4-byte form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    #[default]
    Function,
    Event,
    Constructor,
    Fallback,
    Receive,
    Error,
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            EntryKind::Function => "function",
            EntryKind::Event => "event",
            EntryKind::Constructor => "constructor",
            EntryKind::Fallback => "fallback",
            EntryKind::Receive => "receive",
            EntryKind::Error => "error",
        };
        write!(f, "{s}")
    }
}

/// A single input parameter of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name (may be empty)
    #[serde(default)]
    pub name: String,
    /// Solidity type name, e.g. "uint256", "address", "uint8[]"
    #[serde(rename = "type")]
    pub ty: String,
    /// Events only: carried in a topic rather than the data payload
    #[serde(default)]
    pub indexed: bool,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            indexed: false,
        }
    }

    /// Same as [`Param::new`] but marked as an indexed event parameter.
    pub fn indexed(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            indexed: true,
            ..Self::new(name, ty)
        }
    }
}

/// One function, event, constructor, or fallback definition.
///
/// Deserializes straight from standard ABI JSON; fields this crate does not
/// use (`outputs`, `stateMutability`, `anonymous`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: EntryKind,
    #[serde(default)]
    pub inputs: Vec<Param>,
}

impl InterfaceEntry {
    pub fn function(name: impl Into<String>, inputs: Vec<Param>) -> Self {
        Self {
            name: Some(name.into()),
            kind: EntryKind::Function,
            inputs,
        }
    }

    pub fn event(name: impl Into<String>, inputs: Vec<Param>) -> Self {
        Self {
            name: Some(name.into()),
            kind: EntryKind::Event,
            inputs,
        }
    }

    /// The entry name, if present and non-empty.
    pub fn named(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }

    /// `name(type1,type2,...)`, the hashing input for selector derivation.
    ///
    /// Types are joined verbatim; tuple components are not expanded.
    pub fn canonical_signature(&self) -> String {
        let types: Vec<&str> = self.inputs.iter().map(|p| p.ty.as_str()).collect();
        format!(
            "{}({})",
            self.name.as_deref().unwrap_or_default(),
            types.join(",")
        )
    }

    /// Returns only the indexed inputs (log topics[1..]).
    pub fn indexed_inputs(&self) -> Vec<&Param> {
        self.inputs.iter().filter(|p| p.indexed).collect()
    }

    /// Returns only the non-indexed inputs (log data payload).
    pub fn data_inputs(&self) -> Vec<&Param> {
        self.inputs.iter().filter(|p| !p.indexed).collect()
    }
}
