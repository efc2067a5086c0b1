//! Deterministic cache key derivation.
//!
//! Keys must be stable across processes and restarts: same normalized
//! input, same key, always. The hash is the classic 31-multiplier rolling
//! hash wrapping in 32-bit signed range — not collision-guarded, which is
//! fine for a cache identity.

use analysis_core::AnalysisKind;

const FIELD_DELIMITER: &str = "|";

/// Derive a cache key from request fields.
///
/// Fields are trimmed, lowercased and joined with `|` in the order given.
/// The caller order is part of the contract: industry, location, audience,
/// description. Missing fields must be passed as `""`.
pub fn derive_key(fields: &[&str]) -> String {
    let joined = fields
        .iter()
        .map(|f| f.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join(FIELD_DELIMITER);

    let mut hash: i32 = 0;
    for ch in joined.chars() {
        hash = hash.wrapping_mul(31).wrapping_add(ch as i32);
    }

    format!("{:x}", hash.unsigned_abs())
}

/// Derive a key prefixed with the analysis-type namespace, e.g. `risk:a3f1`.
/// One live cache entry exists per (namespace, key).
pub fn namespaced_key(kind: AnalysisKind, fields: &[&str]) -> String {
    format!("{}:{}", kind.as_str(), derive_key(fields))
}
