//! Windowed statistics over contiguous per-depth iteration blocks (CSV path).

use crate::error::{RarefactionError, RarefactionResult};
use crate::types::{DepthSet, StatRow};

use super::header::iteration_depth;
use super::stats::StatMethod;

/// Default number of iteration columns per depth.
pub const DEFAULT_ITERATIONS: usize = 10;

/// Compute one [`StatRow`] per sample row.
///
/// Starting at column 1, each row is cut into non-overlapping windows of `iterations` cells.
/// Every full window is parsed as integers and reduced with `method`; a trailing shorter window
/// is dropped.
pub fn window_stats(
    rows: &[Vec<String>],
    method: StatMethod,
    iterations: usize,
) -> RarefactionResult<Vec<StatRow>> {
    if iterations == 0 {
        return Err(RarefactionError::InvalidOption {
            message: "iterations must be a positive integer".to_string(),
        });
    }

    rows.iter()
        .enumerate()
        .map(|(idx0, row)| {
            // 1-based, +1 again because the header is row 1.
            let user_row = idx0 + 2;
            stat_row(user_row, row, method, iterations)
        })
        .collect()
}

fn stat_row(
    user_row: usize,
    row: &[String],
    method: StatMethod,
    iterations: usize,
) -> RarefactionResult<StatRow> {
    let (sample, data) = row
        .split_first()
        .ok_or_else(|| RarefactionError::parse(format!("row {user_row} is empty")))?;

    let mut values = Vec::with_capacity(data.len() / iterations);
    let mut window = Vec::with_capacity(iterations);
    for (w, cells) in data.chunks_exact(iterations).enumerate() {
        window.clear();
        for (k, raw) in cells.iter().enumerate() {
            let count = raw.parse::<i64>().map_err(|e| RarefactionError::InvalidCount {
                row: user_row,
                column: 1 + w * iterations + k,
                raw: raw.clone(),
                message: e.to_string(),
            })?;
            window.push(count as f64);
        }
        // chunks_exact never yields an empty window.
        if let Some(v) = method.apply(&window) {
            values.push(v);
        }
    }

    Ok(StatRow::new(sample.clone(), values))
}

/// Check that every row holds exactly `depths` full windows of `iterations` cells.
///
/// Catches an `iterations` value that does not match the file, which would otherwise silently
/// produce fewer (or misaligned) statistics than header depths.
pub fn check_window_count(
    rows: &[Vec<String>],
    depths: usize,
    iterations: usize,
) -> RarefactionResult<()> {
    if iterations == 0 {
        return Err(RarefactionError::InvalidOption {
            message: "iterations must be a positive integer".to_string(),
        });
    }

    for (idx0, row) in rows.iter().enumerate() {
        let windows = row.len().saturating_sub(1) / iterations;
        if windows != depths {
            return Err(RarefactionError::WindowMismatch {
                row: idx0 + 2,
                sample: row.first().cloned().unwrap_or_default(),
                windows,
                iterations,
                depths,
            });
        }
    }
    Ok(())
}

/// Check that header iteration columns sit in the block of the depth they name.
///
/// Blocks are read positionally while the depth header is ascending, so a file whose depth
/// blocks are not in ascending order would attach statistics to the wrong depth.
pub fn check_header_blocks(
    header: &[String],
    depths: &DepthSet,
    iterations: usize,
) -> RarefactionResult<()> {
    if iterations == 0 {
        return Err(RarefactionError::InvalidOption {
            message: "iterations must be a positive integer".to_string(),
        });
    }

    for (idx, label) in header.iter().enumerate().skip(1) {
        let Some(named) = iteration_depth(label) else {
            continue;
        };
        let block = (idx - 1) / iterations;
        let expected = depths.as_slice().get(block).copied();
        if expected != Some(named) {
            return Err(RarefactionError::parse(format!(
                "column {idx} '{label}' names depth {named} but falls in block {block} ({})",
                expected.map_or_else(|| "past the last depth".to_string(), |d| format!("depth {d}"))
            )));
        }
    }
    Ok(())
}
