//! End-to-end runs: load → aggregate → reshape → write.
//!
//! The two pipelines share no state. Each either writes a complete `<prefix>.tsv` or returns an
//! error without touching the output path.

use std::path::{Path, PathBuf};

use crate::error::{RarefactionError, RarefactionResult};
use crate::ingestion::{
    load_from_path, InputFormat, JsonpExtraction, JsonpPayload, LoadOptions, LoadedInput,
};
use crate::output::write_tsv;
use crate::processing::{
    check_header_blocks, check_window_count, extract_depths, group_means, reshape_means,
    window_stats, StatMethod, DEFAULT_ITERATIONS,
};
use crate::types::{OutputTable, RawTable};

/// Settings for the CSV pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvSummaryOptions {
    /// Iteration columns per depth block. Must be at least 1.
    pub iterations: usize,
    /// Statistic computed per block.
    pub method: StatMethod,
    /// Require the header's depth blocks to be ascending and every row to hold exactly one
    /// full block per header depth.
    ///
    /// When `false`, trailing partial blocks are dropped silently and rows may carry fewer
    /// values than the header has depths.
    pub check_depth_count: bool,
}

impl Default for CsvSummaryOptions {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            method: StatMethod::default(),
            check_depth_count: true,
        }
    }
}

/// Settings for the JSONP pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonpSummaryOptions {
    pub extraction: JsonpExtraction,
}

/// Summarise a loaded CSV table into a `samples\depth` table.
pub fn summarize_csv(
    table: &RawTable,
    options: &CsvSummaryOptions,
) -> RarefactionResult<OutputTable> {
    let depths = extract_depths(table)?;
    if options.check_depth_count {
        check_window_count(&table.rows, depths.len(), options.iterations)?;
        check_header_blocks(&table.header, &depths, options.iterations)?;
    }
    let stats = window_stats(&table.rows, options.method, options.iterations)?;
    tracing::info!(
        samples = stats.len(),
        depths = depths.len(),
        method = %options.method,
        iterations = options.iterations,
        "computed window statistics"
    );
    Ok(OutputTable::from_stat_rows(&depths, stats))
}

/// Summarise a parsed JSONP payload into a `Group Name\Depths` table.
pub fn summarize_jsonp(payload: &JsonpPayload) -> RarefactionResult<OutputTable> {
    let means = group_means(payload)?;
    let table = reshape_means(&means)?;
    tracing::info!(
        groups = table.row_count(),
        depths = table.column_count().saturating_sub(1),
        "computed group means"
    );
    Ok(table)
}

/// Load `input` as CSV, summarise it and write `<out_prefix>.tsv`.
pub fn run_csv(
    input: impl AsRef<Path>,
    out_prefix: impl AsRef<Path>,
    options: &CsvSummaryOptions,
    load: &LoadOptions,
) -> RarefactionResult<PathBuf> {
    let load = LoadOptions {
        format: Some(InputFormat::Csv),
        ..load.clone()
    };
    let table = match load_from_path(input, &load)? {
        LoadedInput::Csv(table) => table,
        LoadedInput::Jsonp(_) => return Err(unexpected_format(InputFormat::Csv)),
    };
    let output = summarize_csv(&table, options)?;
    write_tsv(&output, out_prefix)
}

/// Load `input` as JSONP, summarise it and write `<out_prefix>.tsv`.
pub fn run_jsonp(
    input: impl AsRef<Path>,
    out_prefix: impl AsRef<Path>,
    options: &JsonpSummaryOptions,
    load: &LoadOptions,
) -> RarefactionResult<PathBuf> {
    let load = LoadOptions {
        format: Some(InputFormat::Jsonp),
        extraction: options.extraction,
        ..load.clone()
    };
    let payload = match load_from_path(input, &load)? {
        LoadedInput::Jsonp(payload) => payload,
        LoadedInput::Csv(_) => return Err(unexpected_format(InputFormat::Jsonp)),
    };
    let output = summarize_jsonp(&payload)?;
    write_tsv(&output, out_prefix)
}

fn unexpected_format(expected: InputFormat) -> RarefactionError {
    RarefactionError::parse(format!("loader returned input that is not {expected:?}"))
}
