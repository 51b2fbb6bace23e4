//! Header-keyed CSV reading.

use std::collections::BTreeMap;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{ImportError, Result};

/// One data row keyed by column header.
pub type CsvRow = BTreeMap<String, String>;

/// Read a CSV file into a vector of row maps.
///
/// The first line is the header row. Header names have a UTF-8 BOM stripped
/// and values are trimmed. Rows shorter than the header are accepted; their
/// missing cells are simply absent from the map. Cells beyond the last
/// header are ignored.
pub fn read_csv_rows(path: &Path) -> Result<Vec<CsvRow>> {
    let bytes = std::fs::read(path).map_err(|e| ImportError::read(path, e))?;

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes.as_slice());
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| ImportError::csv(path, e))?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| ImportError::csv(path, e))?;
        let row: CsvRow = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.clone(), value.trim().to_string()))
            .collect();
        rows.push(row);
    }
    debug!(path = %path.display(), rows = rows.len(), "read csv rows");
    Ok(rows)
}

/// Get a field value from a row, returning empty string if not present.
pub fn get_field(row: &CsvRow, key: &str) -> String {
    row.get(key).cloned().unwrap_or_default()
}
