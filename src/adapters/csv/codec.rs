//! CSV codec implementation
//!
//! Reads and writes patient lists in the fixed-header CSV format. One
//! dialect (delimiter + default quoting) is shared by both directions, so
//! writing what was read reproduces the data rows byte for byte, modulo
//! row order.

use crate::domain::{KardexError, Patient, Result};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs;
use std::path::{Path, PathBuf};

/// Fixed column set, in order. Matching against a file header is
/// case-insensitive. The first four columns are required; a historical
/// four-column file without `diagnosis` is still accepted.
pub const EXPECTED_HEADERS: [&str; 5] = [
    "firstName",
    "lastName",
    "generalPractitioner",
    "socialSecurityNumber",
    "diagnosis",
];

/// Number of leading columns a header must carry (through the key column).
const REQUIRED_COLUMNS: usize = 4;

/// CSV serializer/deserializer for patient lists
///
/// # Examples
///
/// ```no_run
/// use kardex::adapters::csv::CsvCodec;
/// use kardex::domain::Patient;
/// use std::path::Path;
///
/// # fn example() -> kardex::domain::Result<()> {
/// let codec = CsvCodec::default();
/// let patients = vec![Patient::new("Nina", "Olsen", "01019912345")?];
///
/// codec.write(Some(Path::new("patients.csv")), &patients)?;
/// let read_back = codec.read(Some(Path::new("patients.csv")))?;
/// assert_eq!(read_back, patients);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CsvCodec {
    delimiter: u8,
}

impl Default for CsvCodec {
    fn default() -> Self {
        Self { delimiter: b';' }
    }
}

impl CsvCodec {
    /// Creates a codec using the given field delimiter
    pub fn new(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Returns the header row this codec expects, joined with its delimiter
    pub fn expected_header_text(&self) -> String {
        EXPECTED_HEADERS.join(&(self.delimiter as char).to_string())
    }

    /// Reads a patient list from the given CSV file
    ///
    /// A `None` source (a cancelled file dialog) yields an empty list
    /// without error. A missing optional trailing column and missing
    /// optional cells both decode as the empty string.
    ///
    /// # Errors
    ///
    /// - [`KardexError::Io`] if the source cannot be read.
    /// - [`KardexError::Schema`] if the header does not match the fixed
    ///   column set; the message embeds the expected header text.
    /// - [`KardexError::Validation`] if a data row has a blank required
    ///   field.
    pub fn read(&self, source: Option<&Path>) -> Result<Vec<Patient>> {
        let Some(path) = source else {
            return Ok(Vec::new());
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let headers = reader.headers()?.clone();
        self.check_header(&headers)?;

        let mut patients = Vec::new();
        for record in reader.records() {
            let record = record?;
            let field = |index: usize| record.get(index).unwrap_or("").to_string();

            patients.push(
                Patient::builder(field(0), field(1), field(3))
                    .general_practitioner(field(2))
                    .diagnosis(field(4))
                    .build()?,
            );
        }

        tracing::debug!(path = %path.display(), count = patients.len(), "Read patient list");
        Ok(patients)
    }

    /// Writes the given patient list to the given CSV file
    ///
    /// A `None` destination or an empty list is a no-op. An existing
    /// destination is overwritten atomically from the caller's
    /// perspective: rows are written to a sibling temporary file which is
    /// renamed over the destination only after a successful flush.
    ///
    /// # Errors
    ///
    /// Returns [`KardexError::Io`] if the destination cannot be written.
    pub fn write(&self, destination: Option<&Path>, patients: &[Patient]) -> Result<()> {
        let Some(path) = destination else {
            return Ok(());
        };
        if patients.is_empty() {
            return Ok(());
        }

        let tmp = sibling_tmp_path(path);
        if let Err(e) = self.write_rows(&tmp, patients) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!(path = %path.display(), count = patients.len(), "Wrote patient list");
        Ok(())
    }

    fn write_rows(&self, path: &Path, patients: &[Patient]) -> Result<()> {
        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)?;

        writer.write_record(EXPECTED_HEADERS)?;
        for patient in patients {
            writer.write_record([
                patient.first_name(),
                patient.last_name(),
                patient.general_practitioner(),
                patient.social_security_number(),
                patient.diagnosis(),
            ])?;
        }

        writer.flush().map_err(KardexError::from)?;
        Ok(())
    }

    fn check_header(&self, headers: &StringRecord) -> Result<()> {
        let matches = headers.len() >= REQUIRED_COLUMNS
            && headers.len() <= EXPECTED_HEADERS.len()
            && headers
                .iter()
                .zip(EXPECTED_HEADERS.iter())
                .all(|(found, expected)| found.trim().eq_ignore_ascii_case(expected));

        if matches {
            Ok(())
        } else {
            Err(KardexError::Schema {
                expected: self.expected_header_text(),
                found: headers
                    .iter()
                    .collect::<Vec<_>>()
                    .join(&(self.delimiter as char).to_string()),
            })
        }
    }
}

fn sibling_tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
