//! Core data model for the rowfile pipeline.
//!
//! A [`Row`] is an immutable pair of integers parsed from one input line.
//! [`RowfileError`] covers the two fatal failure classes shared by the
//! ingest and output crates: input file access and output I/O.

pub mod error;
pub mod row;

pub use error::{Result, RowfileError};
pub use row::{DELIMITER, Row};
