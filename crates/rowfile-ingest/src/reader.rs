use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rowfile_model::{Result, Row, RowfileError};

use crate::parse::parse_row;

/// Read every valid row from the file at `path`, in file order.
///
/// Lines that fail validation are skipped with a warning carrying the raw
/// line and the rejection reason; malformed data never aborts the read.
/// After the last line a summary of total, valid, and skipped counts is
/// logged at info level.
///
/// # Errors
///
/// Returns [`RowfileError::FileAccess`] if the file cannot be opened or a
/// line cannot be read. No partial row list is returned in that case.
pub fn read_rows(path: &Path) -> Result<Vec<Row>> {
    let file = File::open(path).map_err(|source| RowfileError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let mut rows = Vec::new();
    let mut total = 0usize;
    for line in reader.lines() {
        let line = line.map_err(|source| RowfileError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        total += 1;
        match parse_row(&line) {
            Ok(row) => rows.push(row),
            Err(reason) => tracing::warn!(row = %line, %reason, "skipping file row"),
        }
    }
    tracing::info!(
        path = %path.display(),
        total_rows = total,
        valid_rows = rows.len(),
        invalid_rows = total - rows.len(),
        "finished reading file"
    );
    Ok(rows)
}
