//! Compliance control ingestion.
//!
//! Converts per-standard CSV exports into one combined set of
//! [`ControlRecord`](compass_model::ControlRecord)s.
//!
//! # Features
//!
//! - **CSV Loading**: header-keyed rows with BOM stripping and short-row tolerance
//! - **Row Normalization**: control id derivation and free-text defaults
//! - **Mapping Parsing**: classify `mapping_id` tokens into OWASP, ISO27001 and NIST lists
//! - **Export**: write the combined record set as pretty-printed JSON
//!
//! # Example
//!
//! ```ignore
//! use compass_import::{ImportSource, import_sources, write_records};
//! use compass_model::Standard;
//!
//! let sources = vec![
//!     ImportSource::new(Standard::Owasp, "data_files/owasp_controls.csv"),
//!     ImportSource::new(Standard::Iso27001, "data_files/iso27001_controls.csv"),
//!     ImportSource::new(Standard::Nist, "data_files/nist_ssdf.csv"),
//! ];
//! let report = import_sources(&sources)?;
//! write_records("app-data.json".as_ref(), &report.records)?;
//! ```

mod convert;
mod csv_utils;
mod error;
mod mapping;
mod record;
mod writer;

// === Error Types ===
pub use error::{ImportError, Result};

// === CSV Reading ===
pub use csv_utils::{CsvRow, get_field, read_csv_rows};

// === Normalization ===
pub use mapping::{classify_token, parse_mappings};
pub use record::{columns, control_id, record_from_row};

// === Import ===
pub use convert::{ImportReport, ImportSource, SourceSummary, convert_csv, import_sources};
pub use writer::write_records;
