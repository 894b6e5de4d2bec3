//! Raw and decoded event logs.
//!
//! `topics[0]` carries the event selector, `topics[1..]` the indexed
//! parameters (one 32-byte word each) and `data` the ABI-encoded
//! non-indexed parameters.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::codec::ParamCodec;
use crate::entry::InterfaceEntry;
use crate::error::DecodeError;
use crate::normalize;
use crate::registry::Registry;
use crate::selector::SignatureHasher;
use crate::types::AbiValue;

/// A raw, undecoded log entry as returned by a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLog {
    /// Contract address that emitted the log
    pub address: String,
    /// 32-byte hex words; topics[0] is the event selector
    pub topics: Vec<String>,
    /// Hex-encoded non-indexed parameters
    pub data: String,
}

impl RawLog {
    /// Returns topics[0], the event selector, if present.
    pub fn event_selector(&self) -> Option<&str> {
        self.topics.first().map(|s| s.as_str())
    }
}

/// One decoded event parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedEventParam {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub value: AbiValue,
}

/// A decoded log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedLog {
    /// Event name, e.g. "Transfer"
    pub name: String,
    /// Parameters in declaration order, indexed and non-indexed interleaved
    pub events: Vec<DecodedEventParam>,
    /// Address of the emitting contract, copied from the raw log
    pub address: String,
}

impl DecodedLog {
    /// Get a parameter value by name.
    pub fn field(&self, name: &str) -> Option<&AbiValue> {
        self.events.iter().find(|p| p.name == name).map(|p| &p.value)
    }
}

/// Decode a batch of logs.
///
/// The output has one slot per input log: `None` where the selector is not
/// registered (or the log has no topics). A codec failure on any matched
/// log aborts the batch.
pub fn decode_logs<H, C>(
    registry: &Registry<H>,
    codec: &C,
    logs: &[RawLog],
) -> Result<Vec<Option<DecodedLog>>, DecodeError>
where
    H: SignatureHasher,
    C: ParamCodec + ?Sized,
{
    let decoded = logs
        .iter()
        .map(|log| decode_log(registry, codec, log))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        "decoded {}/{} logs",
        decoded.iter().filter(|d| d.is_some()).count(),
        logs.len()
    );
    Ok(decoded)
}

/// Decode a single log; `Ok(None)` if its selector is unknown.
pub fn decode_log<H, C>(
    registry: &Registry<H>,
    codec: &C,
    log: &RawLog,
) -> Result<Option<DecodedLog>, DecodeError>
where
    H: SignatureHasher,
    C: ParamCodec + ?Sized,
{
    let Some(selector) = log.event_selector() else {
        debug!("log from {} has no topics", log.address);
        return Ok(None);
    };
    let Some(entry) = registry.lookup(selector) else {
        debug!("no event for selector {}", selector);
        return Ok(None);
    };
    decode_with_entry(entry, codec, log).map(Some)
}

fn decode_with_entry<C: ParamCodec + ?Sized>(
    entry: &InterfaceEntry,
    codec: &C,
    log: &RawLog,
) -> Result<DecodedLog, DecodeError> {
    let data_types: Vec<&str> = entry
        .data_inputs()
        .into_iter()
        .map(|p| p.ty.as_str())
        .collect();
    let data_values = if data_types.is_empty() {
        Vec::new()
    } else {
        codec.decode_parameters(&data_types, &log.data).map_err(|e| {
            warn!("decoding {} log data failed: {}", entry.canonical_signature(), e);
            e
        })?
    };

    let mut topics = log.topics.iter().skip(1);
    let mut data = data_values.into_iter();
    let mut events = Vec::with_capacity(entry.inputs.len());

    for param in &entry.inputs {
        let raw = if param.indexed {
            topics.next().map(|t| AbiValue::Hex(t.clone()))
        } else {
            data.next()
        };
        let value = match raw {
            None | Some(AbiValue::Null) => AbiValue::Null,
            Some(v) if param.ty == "address" => normalize::to_address(v),
            Some(v) if normalize::is_log_decimal_type(&param.ty) => {
                normalize::to_decimal(v, normalize::is_signed_type(&param.ty))?
            }
            Some(v) => v,
        };
        events.push(DecodedEventParam {
            name: param.name.clone(),
            ty: param.ty.clone(),
            value,
        });
    }

    Ok(DecodedLog {
        name: entry.named().unwrap_or_default().to_string(),
        events,
        address: log.address.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::Param;
    use alloy_primitives::U256;
    use std::cell::RefCell;

    const TRANSFER_SIG: &str =
        "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";
    const FROM_TOPIC: &str =
        "0x000000000000000000000000d8da6bf26964af9d7eed9e03e53415d37aa96045";
    const TO_TOPIC: &str =
        "0x000000000000000000000000ab5801a7d398351b8be11c439e05c5b3259aec9b";

    /// Hands out canned values and records the types it was asked for.
    struct RecordingCodec {
        values: Vec<AbiValue>,
        calls: RefCell<Vec<Vec<String>>>,
    }

    impl RecordingCodec {
        fn new(values: Vec<AbiValue>) -> Self {
            Self {
                values,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ParamCodec for RecordingCodec {
        fn decode_parameters(
            &self,
            types: &[&str],
            _encoded_hex: &str,
        ) -> Result<Vec<AbiValue>, DecodeError> {
            self.calls
                .borrow_mut()
                .push(types.iter().map(|t| t.to_string()).collect());
            Ok(self.values.clone())
        }
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

    fn transfer_log() -> RawLog {
        RawLog {
            address: "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".into(),
            topics: vec![TRANSFER_SIG.into(), FROM_TOPIC.into(), TO_TOPIC.into()],
            data: "0x".into(),
        }
    }

    fn registry() -> Registry {
        let mut reg = Registry::new();
        reg.add(&[transfer_event()]);
        reg
    }

    #[test]
    fn transfer_log_decodes_in_declared_order() {
        let codec = RecordingCodec::new(vec![AbiValue::Uint(U256::from(1_000_000u64))]);
        let out = decode_log(&registry(), &codec, &transfer_log())
            .unwrap()
            .unwrap();

        assert_eq!(out.name, "Transfer");
        assert_eq!(out.address, "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48");
        let names: Vec<&str> = out.events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["from", "to", "value"]);
        assert_eq!(
            out.field("from").unwrap().as_address(),
            Some("0xd8da6bf26964af9d7eed9e03e53415d37aa96045")
        );
        assert_eq!(
            out.field("to").unwrap().as_address(),
            Some("0xab5801a7d398351b8be11c439e05c5b3259aec9b")
        );
        assert_eq!(out.field("value").unwrap().as_decimal(), Some("1000000"));

        // Only the non-indexed type reaches the codec.
        assert_eq!(*codec.calls.borrow(), vec![vec!["uint256".to_string()]]);
    }

    #[test]
    fn interleaved_indexed_and_data_params() {
        let mut reg = Registry::new();
        reg.add(&[InterfaceEntry::event(
            "Deposit",
            vec![
                Param::new("amount", "uint8"),
                Param::indexed("user", "address"),
                Param::new("memo", "string"),
                Param::indexed("id", "uint256"),
            ],
        )]);
        let sel = reg.selector_index().keys().next().unwrap().clone();
        let log = RawLog {
            address: "0x01".into(),
            topics: vec![
                format!("0x{sel}"),
                FROM_TOPIC.into(),
                "0x000000000000000000000000000000000000000000000000000000000000002a".into(),
            ],
            data: "0x".into(),
        };
        let codec = RecordingCodec::new(vec![
            AbiValue::Uint(U256::from(3u64)),
            AbiValue::Str("hi".into()),
        ]);
        let out = decode_log(&reg, &codec, &log).unwrap().unwrap();

        assert_eq!(out.field("amount").unwrap().as_decimal(), Some("3"));
        assert!(out.field("user").unwrap().as_address().is_some());
        assert_eq!(out.field("memo"), Some(&AbiValue::Str("hi".into())));
        assert_eq!(out.field("id").unwrap().as_decimal(), Some("42"));
        assert_eq!(
            *codec.calls.borrow(),
            vec![vec!["uint8".to_string(), "string".to_string()]]
        );
    }

    #[test]
    fn missing_topic_yields_null() {
        let codec = RecordingCodec::new(vec![AbiValue::Uint(U256::from(1u64))]);
        let mut log = transfer_log();
        log.topics.truncate(2);
        let out = decode_log(&registry(), &codec, &log).unwrap().unwrap();
        assert!(out.field("to").unwrap().is_null());
        assert_eq!(out.field("value").unwrap().as_decimal(), Some("1"));
    }

    #[test]
    fn non_allow_listed_integer_passes_through() {
        let mut reg = Registry::new();
        reg.add(&[InterfaceEntry::event(
            "Sync",
            vec![Param::new("reserve0", "uint112"), Param::new("reserve1", "uint112")],
        )]);
        let sel = reg.selector_index().keys().next().unwrap().clone();
        let log = RawLog {
            address: "0x01".into(),
            topics: vec![sel.to_string()],
            data: "0x".into(),
        };
        let codec = RecordingCodec::new(vec![
            AbiValue::Uint(U256::from(5u64)),
            AbiValue::Uint(U256::from(6u64)),
        ]);
        let out = decode_log(&reg, &codec, &log).unwrap().unwrap();
        assert_eq!(out.field("reserve0"), Some(&AbiValue::Uint(U256::from(5u64))));
    }

    #[test]
    fn all_indexed_event_skips_codec() {
        let mut reg = Registry::new();
        reg.add(&[InterfaceEntry::event(
            "Ping",
            vec![Param::indexed("who", "address")],
        )]);
        let sel = reg.selector_index().keys().next().unwrap().clone();
        let log = RawLog {
            address: "0x01".into(),
            topics: vec![format!("0x{sel}"), FROM_TOPIC.into()],
            data: "0x".into(),
        };
        let codec = RecordingCodec::new(vec![]);
        let out = decode_log(&reg, &codec, &log).unwrap().unwrap();
        assert_eq!(out.events.len(), 1);
        assert!(codec.calls.borrow().is_empty());
    }

    #[test]
    fn batch_keeps_unknown_slots() {
        let codec = RecordingCodec::new(vec![AbiValue::Uint(U256::from(9u64))]);
        let unknown = RawLog {
            address: "0x02".into(),
            topics: vec![format!("0x{}", "ab".repeat(32))],
            data: "0x".into(),
        };
        let empty = RawLog {
            address: "0x03".into(),
            topics: vec![],
            data: "0x".into(),
        };
        let out = decode_logs(&registry(), &codec, &[unknown, transfer_log(), empty]).unwrap();
        assert_eq!(out.len(), 3);
        assert!(out[0].is_none());
        assert_eq!(out[1].as_ref().unwrap().name, "Transfer");
        assert!(out[2].is_none());
    }

    #[test]
    fn raw_log_serde_roundtrip() {
        let json = serde_json::to_string(&transfer_log()).unwrap();
        let back: RawLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, transfer_log());
    }
}
