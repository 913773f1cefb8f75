//! JSONP loading.
//!
//! Upstream tools emit rarefaction data as `callback({"data": [...]})`. The wrapper is stripped
//! and the object body parsed as JSON.
//!
//! Two extraction modes exist:
//! - [`JsonpExtraction::FirstBrace`] (default): body runs from the first `{` to the first `}`.
//!   Only correct for flat payloads, which is what the upstream producer writes.
//! - [`JsonpExtraction::Balanced`]: finds the `}` that closes the first `{`, skipping braces
//!   inside strings, so nested objects are accepted.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{RarefactionError, RarefactionResult};

/// How the JSON object is cut out of the JSONP envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonpExtraction {
    #[default]
    FirstBrace,
    Balanced,
}

/// The parsed JSONP object. Only `data` is required; other keys are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JsonpPayload {
    /// Records shaped `[group, depth, value_1, ..., value_k, metadata]`.
    pub data: Vec<serde_json::Value>,
}

/// Read a JSONP file and parse its payload.
pub fn load_jsonp_from_path(
    path: impl AsRef<Path>,
    extraction: JsonpExtraction,
) -> RarefactionResult<JsonpPayload> {
    let text = fs::read_to_string(path)?;
    load_jsonp_from_str(&text, extraction)
}

/// Parse a JSONP payload from an in-memory string.
pub fn load_jsonp_from_str(
    input: &str,
    extraction: JsonpExtraction,
) -> RarefactionResult<JsonpPayload> {
    let body = unwrap_jsonp(input, extraction)?;
    let payload: JsonpPayload = serde_json::from_str(&body)?;
    tracing::debug!(records = payload.data.len(), ?extraction, "parsed jsonp payload");
    Ok(payload)
}

/// Strip the callback envelope and return the JSON object text.
pub fn unwrap_jsonp(input: &str, extraction: JsonpExtraction) -> RarefactionResult<String> {
    let start = input
        .find('{')
        .ok_or_else(|| RarefactionError::parse("jsonp input contains no '{'"))?;

    match extraction {
        JsonpExtraction::FirstBrace => {
            let rest = &input[start + 1..];
            let body = rest.split('}').next().unwrap_or(rest);
            Ok(format!("{{{body}}}"))
        }
        JsonpExtraction::Balanced => {
            let end = matching_brace(input, start).ok_or_else(|| {
                RarefactionError::parse("jsonp input has no closing '}' for its outer object")
            })?;
            Ok(input[start..=end].to_string())
        }
    }
}

/// Byte index of the `}` closing the `{` at `open`, ignoring braces inside JSON strings.
fn matching_brace(input: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, b) in input.bytes().enumerate().skip(open) {
        if in_string {
            match b {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}
