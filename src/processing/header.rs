//! Depth extraction from `depth-<D>_iter-<I>` column labels.

use crate::error::{RarefactionError, RarefactionResult};
use crate::types::{DepthSet, RawTable};

/// Collect the distinct depths named by the iteration columns of `table`'s header.
///
/// Column 0 (the sample column) is skipped, as is any label not containing `iter`
/// (trailing metadata columns).
pub fn extract_depths(table: &RawTable) -> RarefactionResult<DepthSet> {
    let mut depths = Vec::new();
    for (idx, label) in table.header.iter().enumerate().skip(1) {
        if !label.contains("iter") {
            continue;
        }
        depths.push(parse_depth(label).ok_or_else(|| {
            RarefactionError::parse(format!(
                "column {idx} header '{label}' does not name a depth (expected depth-<D>_iter-<I>)"
            ))
        })?);
    }

    let set: DepthSet = depths.into_iter().collect();
    tracing::debug!(depths = set.len(), "extracted header depths");
    Ok(set)
}

/// Depth named by an iteration column label, `None` for other columns.
pub(crate) fn iteration_depth(label: &str) -> Option<u64> {
    if label.contains("iter") {
        parse_depth(label)
    } else {
        None
    }
}

fn parse_depth(label: &str) -> Option<u64> {
    let stripped = label.replace("depth-", "");
    stripped.split('_').next()?.trim().parse().ok()
}
