use std::num::ParseIntError;

use thiserror::Error;

use rowfile_model::{DELIMITER, Row};

const FIELDS_PER_ROW: usize = 2;

/// Why a line was dropped. Never surfaced to callers of the reader; the
/// reader logs it and moves on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowRejection {
    #[error("invalid row: expected {FIELDS_PER_ROW} fields, found {0}")]
    FieldCount(usize),
    #[error("error converting field `{value}` to integer")]
    NumberFormat {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Parse one line into a [`Row`].
///
/// The line is split on [`DELIMITER`]; exactly two fields are required, each
/// parsed as a base-10 signed integer with no trimming. Any other shape is
/// rejected, and a line of 3+ fields is rejected before any field is parsed.
pub fn parse_row(line: &str) -> Result<Row, RowRejection> {
    let fields: Vec<&str> = line.split(DELIMITER).collect();
    if fields.len() != FIELDS_PER_ROW {
        return Err(RowRejection::FieldCount(fields.len()));
    }
    let first = parse_field(fields[0])?;
    let second = parse_field(fields[1])?;
    Ok(Row::new(first, second))
}

fn parse_field(value: &str) -> Result<i32, RowRejection> {
    value.parse().map_err(|source| RowRejection::NumberFormat {
        value: value.to_string(),
        source,
    })
}
