//! Per-file conversion and multi-source import.

use std::path::{Path, PathBuf};

use compass_model::{ControlRecord, Standard, total_mapping_count};
use serde::{Deserialize, Serialize};
use tracing::{info, info_span};

use crate::csv_utils::read_csv_rows;
use crate::error::Result;
use crate::record::record_from_row;

/// A CSV export tagged with the standard its rows belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportSource {
    pub standard: Standard,
    pub path: PathBuf,
}

impl ImportSource {
    pub fn new(standard: Standard, path: impl Into<PathBuf>) -> Self {
        Self {
            standard,
            path: path.into(),
        }
    }
}

/// Counts for one imported source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    pub standard: Standard,
    pub path: PathBuf,
    pub records: usize,
    pub mappings: usize,
}

/// Combined output of [`import_sources`].
#[derive(Debug, Clone, Default)]
pub struct ImportReport {
    /// All records, concatenated in source order.
    pub records: Vec<ControlRecord>,
    pub sources: Vec<SourceSummary>,
}

impl ImportReport {
    pub fn total_records(&self) -> usize {
        self.records.len()
    }

    pub fn total_mappings(&self) -> usize {
        total_mapping_count(&self.records)
    }
}

/// Convert one CSV export into control records, in row order.
pub fn convert_csv(path: &Path, standard: Standard) -> Result<Vec<ControlRecord>> {
    let rows = read_csv_rows(path)?;
    Ok(rows
        .iter()
        .map(|row| record_from_row(row, standard))
        .collect())
}

/// Convert every source and concatenate the results in the given order.
///
/// The first source that cannot be read aborts the import.
pub fn import_sources(sources: &[ImportSource]) -> Result<ImportReport> {
    let span = info_span!("import", sources = sources.len());
    let _guard = span.enter();

    let mut report = ImportReport::default();
    for source in sources {
        let records = convert_csv(&source.path, source.standard)?;
        let summary = SourceSummary {
            standard: source.standard,
            path: source.path.clone(),
            records: records.len(),
            mappings: total_mapping_count(&records),
        };
        info!(
            standard = %summary.standard,
            path = %summary.path.display(),
            records = summary.records,
            mappings = summary.mappings,
            "converted source"
        );
        report.records.extend(records);
        report.sources.push(summary);
    }
    info!(records = report.total_records(), "import complete");
    Ok(report)
}
