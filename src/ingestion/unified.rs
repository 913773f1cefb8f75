//! Unified loading entrypoint.
//!
//! [`load_from_path`] picks the loader from [`LoadOptions::format`] (or the file extension when
//! unset) and reports the outcome to an optional [`IngestionObserver`].

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{RarefactionError, RarefactionResult};
use crate::types::RawTable;

use super::jsonp::{JsonpExtraction, JsonpPayload};
use super::observability::{IngestionContext, IngestionObserver, IngestionSeverity, IngestionStats};
use super::{csv, jsonp};

/// Supported input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Per-iteration table, one column per (depth, iteration).
    Csv,
    /// `callback({"data": [...]})` envelope.
    Jsonp,
}

impl InputFormat {
    /// Parse an input format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "jsonp" | "js" => Some(Self::Jsonp),
            _ => None,
        }
    }
}

/// Loaded input, one variant per format.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadedInput {
    Csv(RawTable),
    Jsonp(JsonpPayload),
}

impl LoadedInput {
    /// Sample rows (CSV) or data records (JSONP).
    pub fn record_count(&self) -> usize {
        match self {
            Self::Csv(table) => table.row_count(),
            Self::Jsonp(payload) => payload.data.len(),
        }
    }
}

/// Options controlling how input is loaded.
#[derive(Clone)]
pub struct LoadOptions {
    /// If `None`, infer the format from the file extension.
    pub format: Option<InputFormat>,
    /// JSONP envelope handling.
    pub extraction: JsonpExtraction,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn IngestionObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: IngestionSeverity,
}

impl fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("extraction", &self.extraction)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            format: None,
            extraction: JsonpExtraction::default(),
            observer: None,
            alert_at_or_above: IngestionSeverity::Critical,
        }
    }
}

/// Load `path` with the loader selected by `options`.
///
/// When an observer is configured this reports `on_success` with the record count, or
/// `on_failure` (plus `on_alert` at or above `options.alert_at_or_above`) on error.
///
/// ```no_run
/// use rarefaction_summary::ingestion::{load_from_path, LoadOptions, LoadedInput};
///
/// # fn main() -> Result<(), rarefaction_summary::RarefactionError> {
/// // `.csv` selects the CSV loader.
/// let options = LoadOptions::default();
/// if let LoadedInput::Csv(table) = load_from_path("alpha_rarefaction.csv", &options)? {
///     println!("samples={}", table.row_count());
/// }
/// # Ok(())
/// # }
/// ```
pub fn load_from_path(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> RarefactionResult<LoadedInput> {
    let path = path.as_ref();
    let fmt = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = IngestionContext {
        path: path.to_path_buf(),
        format: fmt,
    };

    let result = match fmt {
        InputFormat::Csv => csv::load_csv_from_path(path).map(LoadedInput::Csv),
        InputFormat::Jsonp => {
            jsonp::load_jsonp_from_path(path, options.extraction).map(LoadedInput::Jsonp)
        }
    };

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(input) => obs.on_success(
                &ctx,
                IngestionStats {
                    records: input.record_count(),
                },
            ),
            Err(e) => {
                let sev = severity_for_error(e);
                obs.on_failure(&ctx, sev, e);
                if sev >= options.alert_at_or_above {
                    obs.on_alert(&ctx, sev, e);
                }
            }
        }
    }

    result
}

fn severity_for_error(e: &RarefactionError) -> IngestionSeverity {
    match e {
        RarefactionError::InputRead(_) => IngestionSeverity::Critical,
        _ => IngestionSeverity::Error,
    }
}

fn infer_format_from_path(path: &Path) -> RarefactionResult<InputFormat> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .ok_or_else(|| {
            RarefactionError::parse(format!(
                "cannot infer format: path has no extension ({})",
                path.display()
            ))
        })?;

    InputFormat::from_extension(ext).ok_or_else(|| {
        RarefactionError::parse(format!(
            "cannot infer format from extension '{ext}' for path ({})",
            path.display()
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension_is_case_insensitive() {
        assert_eq!(InputFormat::from_extension("CSV"), Some(InputFormat::Csv));
        assert_eq!(InputFormat::from_extension("jsonp"), Some(InputFormat::Jsonp));
        assert_eq!(InputFormat::from_extension("parquet"), None);
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = load_from_path("data.tsv", &LoadOptions::default()).unwrap_err();
        assert!(err.to_string().contains("cannot infer format from extension 'tsv'"));
    }

    #[test]
    fn only_unreadable_input_is_critical() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(
            severity_for_error(&RarefactionError::InputRead(missing)),
            IngestionSeverity::Critical
        );
        assert_eq!(
            severity_for_error(&RarefactionError::parse("bad header")),
            IngestionSeverity::Error
        );
        assert!(IngestionSeverity::Error < IngestionSeverity::Critical);
    }
}
