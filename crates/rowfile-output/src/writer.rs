use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rowfile_model::{DELIMITER, Result, Row};

use crate::token::TokenProvider;

/// Fixed prefix of every generated output file name.
pub const FILE_PREFIX: &str = "output_";
/// Fixed extension of every generated output file name.
pub const FILE_EXTENSION: &str = ".txt";

/// Write `rows` to a freshly named file under `output_dir`.
///
/// The file is named `<FILE_PREFIX><token><FILE_EXTENSION>` from a single
/// token requested from `provider`, and is overwritten if it already exists.
/// Rows are written last-first, each line as `"<second>,<first>"`. The file
/// handle is flushed and released before the written path is returned.
///
/// # Errors
///
/// Returns [`rowfile_model::RowfileError::Io`] on any create, write, or
/// flush failure. A partially written file is left in place.
pub fn write_rows(
    output_dir: &Path,
    rows: &[Row],
    provider: &dyn TokenProvider,
) -> Result<PathBuf> {
    let token = provider.next_id();
    let path = output_dir.join(format!("{FILE_PREFIX}{token}{FILE_EXTENSION}"));
    let file = File::create(&path)?;
    let mut writer = BufWriter::new(file);
    for row in rows.iter().rev() {
        writeln!(writer, "{}{DELIMITER}{}", row.second, row.first)?;
    }
    writer.flush()?;
    tracing::info!(path = %path.display(), rows = rows.len(), "records written to file");
    Ok(path)
}
