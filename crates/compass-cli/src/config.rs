//! Pipeline configuration loaded from `compass.toml`.
//!
//! Every field has a default, so a missing file (or a partial one) yields
//! the standard repository layout:
//!
//! ```toml
//! [import]
//! output = "data/app-data.json"
//! sources = [
//!   { standard = "OWASP", path = "data/data_files/owasp_controls.csv" },
//!   { standard = "ISO27001", path = "data/data_files/iso27001_controls.csv" },
//!   { standard = "NIST", path = "data/data_files/nist_ssdf.csv" },
//! ]
//!
//! [api]
//! source = "data/app-data.json"
//! output_dir = "api"
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use compass_api::{DEFAULT_BASE_URL, DEFAULT_ENDPOINT_PREFIX, GenerateOptions};
use compass_import::ImportSource;
use compass_model::{DEFAULT_API_VERSION, Standard};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "compass.toml";

/// Root configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompassConfig {
    pub import: ImportConfig,
    pub api: ApiConfig,
}

/// Importer settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportConfig {
    /// Combined record set written by the importer.
    pub output: PathBuf,
    /// CSV exports, converted and concatenated in this order.
    pub sources: Vec<ImportSource>,
}

impl Default for ImportConfig {
    fn default() -> Self {
        let data_files = Path::new("data").join("data_files");
        Self {
            output: Path::new("data").join("app-data.json"),
            sources: vec![
                ImportSource::new(Standard::Owasp, data_files.join("owasp_controls.csv")),
                ImportSource::new(Standard::Iso27001, data_files.join("iso27001_controls.csv")),
                ImportSource::new(Standard::Nist, data_files.join("nist_ssdf.csv")),
            ],
        }
    }
}

/// API generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Record set read by the generator.
    pub source: PathBuf,
    /// Root of the generated API tree.
    pub output_dir: PathBuf,
    pub base_url: String,
    /// Value of `meta.version`.
    pub version: String,
    pub endpoint_prefix: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            source: Path::new("data").join("app-data.json"),
            output_dir: PathBuf::from("api"),
            base_url: DEFAULT_BASE_URL.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            endpoint_prefix: DEFAULT_ENDPOINT_PREFIX.to_string(),
        }
    }
}

impl ApiConfig {
    /// Generation options for a run starting now.
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions::default()
            .with_version(self.version.clone())
            .with_base_url(self.base_url.clone())
            .with_endpoint_prefix(self.endpoint_prefix.clone())
    }
}

impl CompassConfig {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, `compass.toml` in the
    /// working directory is used when present and defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load_from(path)
                } else {
                    debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_repository_layout() {
        let config = CompassConfig::default();
        let standards: Vec<Standard> = config.import.sources.iter().map(|s| s.standard).collect();
        assert_eq!(standards, Standard::ALL);
        assert_eq!(config.import.output, config.api.source);
        assert_eq!(config.api.output_dir, PathBuf::from("api"));
        assert_eq!(config.api.version, "1.0.0");
    }

    #[test]
    fn bundled_config_matches_defaults() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../compass.toml");
        let config = CompassConfig::load_from(&path).unwrap();
        assert_eq!(config, CompassConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: CompassConfig = toml::from_str(
            r#"
            [api]
            output_dir = "public/api"
            base_url = "https://example.org/compass"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.output_dir, PathBuf::from("public/api"));
        assert_eq!(config.api.base_url, "https://example.org/compass");
        assert_eq!(config.api.endpoint_prefix, "/api");
        assert_eq!(config.import, ImportConfig::default());
    }

    #[test]
    fn sources_accept_any_case_standard_names() {
        let config: CompassConfig = toml::from_str(
            r#"
            [import]
            sources = [
              { standard = "Nist", path = "nist.csv" },
              { standard = "OWASP", path = "owasp.csv" },
              { standard = "Iso27001", path = "iso.csv" },
            ]
            "#,
        )
        .unwrap();
        let standards: Vec<Standard> = config
            .import
            .sources
            .iter()
            .map(|source| source.standard)
            .collect();
        assert_eq!(
            standards,
            [Standard::Nist, Standard::Owasp, Standard::Iso27001]
        );
        assert_eq!(config.import.sources[1].path, PathBuf::from("owasp.csv"));
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = CompassConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().starts_with("read config"));
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("compass.toml");
        std::fs::write(&path, "[api\noutput_dir = 3").unwrap();
        let err = CompassConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("parse config"));
    }
}
