//! CSV tokenizing for LOS exports
//!
//! This module splits CSV text into header-keyed rows. It knows nothing about
//! tourism semantics; validation happens in the record parser.

use tracing::debug;

use super::row::RawRow;
use crate::{Error, Result};

/// Tokenize CSV data into header-keyed rows
///
/// `data` is the raw source content and must be valid UTF-8. The first row
/// is the header. Blank lines are skipped. A row shorter than the header
/// leaves its trailing columns absent; cells beyond the header are ignored.
/// Any CSV syntax error aborts the whole read, so callers never see a
/// partial row set.
pub fn read_rows(data: impl AsRef<[u8]>, source_name: &str) -> Result<Vec<RawRow>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_ref());

    let headers = csv_reader
        .headers()
        .map_err(|e| {
            Error::csv_syntax(
                source_name,
                format!("Failed to read CSV headers: {}", e),
                Some(e),
            )
        })?
        .clone();

    debug!("CSV header has {} columns", headers.len());

    let mut rows = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| {
            let message = match e.position() {
                Some(pos) => format!("Malformed CSV at line {}: {}", pos.line(), e),
                None => format!("Malformed CSV at data row {}: {}", index + 1, e),
            };
            Error::csv_syntax(source_name, message, Some(e))
        })?;

        if record.len() != headers.len() {
            debug!(
                "Data row {} has {} cells for {} headers",
                index + 1,
                record.len(),
                headers.len()
            );
        }

        rows.push(headers.iter().zip(record.iter()).collect::<RawRow>());
    }

    debug!("Tokenized {} data rows from {}", rows.len(), source_name);
    Ok(rows)
}
