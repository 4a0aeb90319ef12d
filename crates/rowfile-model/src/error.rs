use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RowfileError {
    /// The input file could not be opened or read.
    #[error("cannot access input file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The output file could not be created, written, or flushed.
    #[error("output io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RowfileError>;
