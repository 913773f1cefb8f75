//! Per-group, per-depth means over JSONP data records.

use serde_json::Value;

use crate::error::{RarefactionError, RarefactionResult};
use crate::ingestion::JsonpPayload;
use crate::types::MeanTable;

use super::stats::mean;

/// Fields that are not averaged: group, depth and the trailing metadata element.
const NON_VALUE_FIELDS: usize = 3;

/// Build a [`MeanTable`] from the `data` records of a JSONP payload.
///
/// Each record is `[group, depth, value_1, ..., value_k, metadata]`; the mean of
/// `value_1..value_k` is stored under `(group, depth)`. The trailing element is always
/// dropped. Records are identified by their 0-based position in `data` in error messages.
pub fn group_means(payload: &JsonpPayload) -> RarefactionResult<MeanTable> {
    let mut table = MeanTable::new();
    for (index, record) in payload.data.iter().enumerate() {
        let (group, depth, value) = record_mean(index, record)?;
        table.insert(&group, &depth, value);
    }
    tracing::debug!(groups = table.len(), records = payload.data.len(), "computed group means");
    Ok(table)
}

fn record_mean(index: usize, record: &Value) -> RarefactionResult<(String, String, f64)> {
    let malformed = |group: &str, message: String| RarefactionError::MalformedRecord {
        index,
        group: group.to_string(),
        message,
    };

    let fields = record
        .as_array()
        .ok_or_else(|| malformed("?", format!("expected an array, found {record}")))?;

    let group = fields
        .first()
        .and_then(label_of)
        .ok_or_else(|| malformed("?", "first field must be a group name".to_string()))?;

    if fields.len() <= NON_VALUE_FIELDS {
        return Err(malformed(
            &group,
            format!(
                "expected group, depth, at least one value and a trailing metadata field; \
                 found {} fields",
                fields.len()
            ),
        ));
    }

    let depth = label_of(&fields[1]).ok_or_else(|| {
        malformed(&group, format!("depth must be a number or string, found {}", fields[1]))
    })?;

    let values = fields[2..fields.len() - 1]
        .iter()
        .enumerate()
        .map(|(i, v)| {
            v.as_f64().ok_or_else(|| {
                malformed(&group, format!("field {} is not numeric: {v}", i + 2))
            })
        })
        .collect::<RarefactionResult<Vec<f64>>>()?;

    let value = mean(&values)
        .ok_or_else(|| malformed(&group, "no values to average".to_string()))?;
    Ok((group, depth, value))
}

/// Text used for a group name or depth key.
fn label_of(v: &Value) -> Option<String> {
    match v {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
