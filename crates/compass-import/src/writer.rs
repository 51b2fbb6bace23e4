//! Export of the combined record set.

use std::fs;
use std::path::Path;

use compass_model::ControlRecord;
use tracing::info;

use crate::error::{ImportError, Result};

/// Write records as a pretty-printed JSON array.
///
/// The parent directory is created when missing; an existing file is
/// overwritten.
pub fn write_records(path: &Path, records: &[ControlRecord]) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ImportError::FileWrite {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let json = serde_json::to_string_pretty(records).map_err(|e| ImportError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, format!("{json}\n")).map_err(|e| ImportError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), records = records.len(), "wrote record set");
    Ok(())
}
