//! Delimited row ingestion.
//!
//! [`parse_row`] is the pure per-line decision: a line either becomes a
//! [`rowfile_model::Row`] or a [`RowRejection`] naming why it was dropped.
//! [`read_rows`] applies that decision over a whole file, skipping rejected
//! lines and returning the accepted rows in file order.

mod parse;
mod reader;

pub use parse::{RowRejection, parse_row};
pub use reader::read_rows;
