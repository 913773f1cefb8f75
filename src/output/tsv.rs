//! TSV serialization with `,` as the decimal separator.
//!
//! Numbers follow the upstream tool's rendering: integral values keep one decimal place
//! (`5.0` becomes `5,0`), everything else uses the shortest representation that parses back to
//! the same `f64` (`4.25` becomes `4,25`). Labels are written verbatim.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{RarefactionError, RarefactionResult};
use crate::types::{Cell, OutputTable};

/// Beyond this magnitude `f64` values are always integral; render them without the `.0`.
const FIXED_DECIMAL_LIMIT: f64 = 1e16;

/// Render `v` with `,` as decimal separator.
pub fn format_decimal(v: f64) -> String {
    let text = if v.is_finite() && v.fract() == 0.0 && v.abs() < FIXED_DECIMAL_LIMIT {
        format!("{v:.1}")
    } else {
        format!("{v}")
    };
    text.replace('.', ",")
}

/// Render a single cell as written to the file.
pub fn render_cell(cell: &Cell) -> String {
    match cell {
        Cell::Label(s) => s.clone(),
        Cell::Depth(s) => s.replace('.', ","),
        Cell::Value(v) => format_decimal(*v),
    }
}

/// `<prefix>.tsv`. The suffix is appended, never substituted for an existing extension.
pub fn output_path(prefix: impl AsRef<Path>) -> PathBuf {
    let mut os = prefix.as_ref().as_os_str().to_owned();
    os.push(".tsv");
    PathBuf::from(os)
}

/// Serialize `table` into `writer`, header first, one line per row.
pub fn write_tsv_to_writer<W: Write>(table: &OutputTable, writer: W) -> csv::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .quote_style(csv::QuoteStyle::Never)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(writer);

    wtr.write_record(table.header.iter().map(render_cell))?;
    for row in &table.rows {
        wtr.write_record(row.iter().map(render_cell))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `table` to `<prefix>.tsv`, replacing any existing file.
///
/// Content goes to a temporary file in the destination directory which is then renamed into
/// place, so a failed run never leaves a truncated table behind. Missing parent directories are
/// created. Returns the final path.
pub fn write_tsv(table: &OutputTable, prefix: impl AsRef<Path>) -> RarefactionResult<PathBuf> {
    let path = output_path(prefix);
    let write_err = |source: io::Error| RarefactionError::Write {
        path: path.clone(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    fs::create_dir_all(&dir).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(&dir).map_err(write_err)?;
    write_tsv_to_writer(table, &mut tmp).map_err(|e| write_err(io::Error::from(e)))?;
    tmp.persist(&path).map_err(|e| write_err(e.error))?;

    tracing::info!(
        path = %path.display(),
        rows = table.row_count(),
        columns = table.column_count(),
        "wrote tsv"
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_like_upstream() {
        assert_eq!(format_decimal(5.0), "5,0");
        assert_eq!(format_decimal(4.25), "4,25");
        assert_eq!(format_decimal(-0.5), "-0,5");
        assert_eq!(format_decimal(1234.0), "1234,0");
    }

    #[test]
    fn decimal_text_round_trips() {
        for v in [0.1, 1.0 / 3.0, 2.0 / 7.0 * 1e6, 11.0, 123456.789] {
            let back: f64 = format_decimal(v).replace(',', ".").parse().unwrap();
            assert_eq!(back, v);
        }
    }

    #[test]
    fn appends_tsv_suffix() {
        assert_eq!(output_path("out/run.v2"), PathBuf::from("out/run.v2.tsv"));
    }

    #[test]
    fn writes_labels_verbatim_and_values_with_comma() {
        let table = OutputTable::new(
            vec![Cell::Label("samples\\depth".into()), Cell::Depth("10".into())],
            vec![vec![Cell::Label("S.1".into()), Cell::Value(2.5)]],
        );
        let mut buf = Vec::new();
        write_tsv_to_writer(&table, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "samples\\depth\t10\nS.1\t2,5\n");
    }
}
