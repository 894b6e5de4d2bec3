//! Rayon-powered batch log decoding.
//!
//! Logs are independent of each other once the registry is fixed, so a
//! batch can be fanned out across threads. Output order matches input order
//! and per-log semantics are identical to `abidecoder_core::decode_logs`.

use abidecoder_core::{
    codec::ParamCodec,
    error::DecodeError,
    event::{decode_log, DecodedLog, RawLog},
    registry::Registry,
    selector::SignatureHasher,
};
use rayon::prelude::*;
use tracing::debug;

/// Decode a slice of logs in parallel.
///
/// Unknown selectors yield `None` in their slot; the first codec failure
/// (in input order) is returned as the batch error.
pub fn parallel_decode<H, C>(
    registry: &Registry<H>,
    codec: &C,
    logs: &[RawLog],
) -> Result<Vec<Option<DecodedLog>>, DecodeError>
where
    H: SignatureHasher + Sync,
    C: ParamCodec + Sync + ?Sized,
{
    let results: Vec<Result<Option<DecodedLog>, DecodeError>> = logs
        .par_iter()
        .map(|log| decode_log(registry, codec, log))
        .collect();

    let decoded = results.into_iter().collect::<Result<Vec<_>, _>>()?;
    debug!(
        "parallel decode: {}/{} logs matched",
        decoded.iter().filter(|d| d.is_some()).count(),
        logs.len()
    );
    Ok(decoded)
}

/// Split `logs` into chunks of at most `chunk_size` and decode each chunk in
/// parallel. Bounds the number of in-flight results for very large batches.
pub fn chunked_decode<H, C>(
    registry: &Registry<H>,
    codec: &C,
    logs: &[RawLog],
    chunk_size: usize,
) -> Result<Vec<Option<DecodedLog>>, DecodeError>
where
    H: SignatureHasher + Sync,
    C: ParamCodec + Sync + ?Sized,
{
    let mut out = Vec::with_capacity(logs.len());
    for chunk in logs.chunks(chunk_size.max(1)) {
        out.extend(parallel_decode(registry, codec, chunk)?);
    }
    Ok(out)
}
