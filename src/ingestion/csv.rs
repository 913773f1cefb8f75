//! CSV loading for per-iteration rarefaction tables.

use std::path::Path;

use crate::error::{RarefactionError, RarefactionResult};
use crate::types::RawTable;

/// Load a rarefaction CSV into a [`RawTable`].
///
/// Rules:
///
/// - The first non-empty line is the header.
/// - Rows may have different lengths (trailing metadata columns are kept).
/// - Cells are trimmed but otherwise left as text.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> RarefactionResult<RawTable> {
    let path = path.as_ref();
    // Open through std so a missing file surfaces as an input read error, not a csv error.
    let file = std::fs::File::open(path)?;
    let mut rdr = reader_builder().from_reader(file);
    load_csv_from_reader(&mut rdr)
}

/// Load a rarefaction CSV from an existing CSV reader.
///
/// The reader should be built without header handling; use [`reader_builder`] to get the
/// settings used by [`load_csv_from_path`].
pub fn load_csv_from_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> RarefactionResult<RawTable> {
    let mut records = rdr.records();

    let header = match records.next() {
        Some(record) => record?.iter().map(str::to_owned).collect::<Vec<_>>(),
        None => return Err(RarefactionError::parse("csv input has no header row")),
    };

    let mut rows = Vec::new();
    for result in records {
        let record = result?;
        rows.push(record.iter().map(str::to_owned).collect::<Vec<_>>());
    }

    tracing::debug!(columns = header.len(), rows = rows.len(), "loaded csv");
    Ok(RawTable::new(header, rows))
}

/// Reader settings for rarefaction CSVs: no header handling, ragged rows, trimmed cells.
pub fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All);
    builder
}
