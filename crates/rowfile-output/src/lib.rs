//! Row file output.
//!
//! [`write_rows`] emits a row sequence to a freshly named file, last row
//! first and with the two fields of each row swapped. The file name is built
//! from a token supplied by a [`TokenProvider`], injected so tests can pin
//! the generated name.

mod token;
mod writer;

pub use token::{TokenProvider, UuidProvider};
pub use writer::{FILE_EXTENSION, FILE_PREFIX, write_rows};
