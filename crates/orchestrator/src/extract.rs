//! Pulls a JSON plan out of raw model output.
//!
//! Models rarely answer with bare JSON; the usual shape is prose around a
//! fenced ```json block. The fenced content is tried first, then the whole
//! text, and the first successful decode wins.

use serde_json::Value;

use crate::error::{OrchestratorError, Result};

const FENCE_OPEN: &str = "```json";
const FENCE_CLOSE: &str = "```";

/// Decode exactly one JSON value from `raw`.
///
/// Returns the fenced block's value when a well-formed ```json fence is
/// present, otherwise falls back to decoding the full text. The error
/// carries the fallback attempt's decode diagnostic.
pub fn extract_plan_json(raw: &str) -> Result<Value> {
    if let Some(candidate) = fenced_block(raw) {
        if let Ok(value) = serde_json::from_str(candidate) {
            return Ok(value);
        }
    }

    serde_json::from_str(raw.trim()).map_err(OrchestratorError::Extraction)
}

/// Trimmed text between the opening ```json marker and the next ``` after
/// it, if both are present.
fn fenced_block(raw: &str) -> Option<&str> {
    let start = raw.find(FENCE_OPEN)? + FENCE_OPEN.len();
    let rest = &raw[start..];
    let end = rest.find(FENCE_CLOSE)?;
    Some(rest[..end].trim())
}
