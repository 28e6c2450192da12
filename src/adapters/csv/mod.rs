//! CSV import/export
//!
//! Bulk transfer of patient lists to and from delimited text files with a
//! fixed header contract.

pub mod codec;

pub use codec::{CsvCodec, EXPECTED_HEADERS};
