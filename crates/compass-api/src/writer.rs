//! Pretty-printed JSON file output.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::{ApiError, Result};

/// Ensure an output subdirectory exists and return its path.
pub(crate) fn ensure_output_dir(base_dir: &Path, name: &str) -> Result<PathBuf> {
    let dir = base_dir.join(name);
    fs::create_dir_all(&dir).map_err(|e| ApiError::DirectoryCreate {
        path: dir.clone(),
        source: e,
    })?;
    Ok(dir)
}

/// Serialize `value` with two-space indentation and write it to `path`,
/// replacing any existing file.
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| ApiError::JsonWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, format!("{json}\n")).map_err(|e| ApiError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    debug!(path = %path.display(), "wrote endpoint file");
    Ok(())
}
