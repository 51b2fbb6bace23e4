//! Fan-out of a record set into the static API tree.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use compass_model::{ApiResponse, ControlRecord, DEFAULT_API_VERSION};
use tracing::{info, info_span, warn};

use crate::endpoints::{
    ALL_FILE, CATEGORIES_DIR, CONTROLS_DIR, INDEX_FILE, MAPPINGS_DIR, STANDARDS_DIR,
    category_file, control_file, endpoint, mapping_file, standard_file,
};
use crate::error::{ApiError, Result};
use crate::grouping::{RecordGroup, group_by_category, group_by_standard};
use crate::index::build_index;
use crate::slug::slugify;
use crate::writer::{ensure_output_dir, write_json};

/// Public site the API is published under.
pub const DEFAULT_BASE_URL: &str = "https://secuardenai.github.io/compliance-compass";

/// Endpoint path prefix under the site root.
pub const DEFAULT_ENDPOINT_PREFIX: &str = "/api";

/// Settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Value of `meta.version` in every file.
    pub version: String,
    /// Timestamp stamped into every file. Fix it for reproducible output.
    pub generated_at: DateTime<Utc>,
    pub base_url: String,
    pub endpoint_prefix: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_API_VERSION.to_string(),
            generated_at: Utc::now(),
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoint_prefix: DEFAULT_ENDPOINT_PREFIX.to_string(),
        }
    }
}

impl GenerateOptions {
    #[must_use]
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_endpoint_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.endpoint_prefix = prefix.into();
        self
    }
}

/// One standard or category partition that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSummary {
    pub key: String,
    pub name: String,
    pub records: usize,
    pub endpoint: String,
}

/// What a generation run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub output_dir: PathBuf,
    pub controls: usize,
    pub standards: Vec<GroupSummary>,
    pub categories: Vec<GroupSummary>,
    pub control_endpoints: usize,
    pub mapping_endpoints: usize,
}

impl GenerationSummary {
    /// Number of files written, counting overwrites.
    pub fn total_files(&self) -> usize {
        self.control_endpoints
            + self.mapping_endpoints
            + self.standards.len()
            + self.categories.len()
            + 2
    }
}

/// Load a combined record set written by the importer.
pub fn load_records(path: &Path) -> Result<Vec<ControlRecord>> {
    let text = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ApiError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ApiError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let records: Vec<ControlRecord> =
        serde_json::from_str(&text).map_err(|e| ApiError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?;
    info!(path = %path.display(), records = records.len(), "loaded record set");
    Ok(records)
}

/// Write the full API tree for `records` under `output_dir`.
///
/// Existing files are overwritten. Given the same records and the same
/// `generated_at`, the output is byte-for-byte identical.
pub fn generate(
    records: &[ControlRecord],
    output_dir: &Path,
    options: &GenerateOptions,
) -> Result<GenerationSummary> {
    let span = info_span!("generate", output_dir = %output_dir.display());
    let _guard = span.enter();

    fs::create_dir_all(output_dir).map_err(|e| ApiError::DirectoryCreate {
        path: output_dir.to_path_buf(),
        source: e,
    })?;
    let prefix = options.endpoint_prefix.as_str();
    let version = options.version.as_str();
    let generated_at = options.generated_at;

    // All controls
    let all_endpoint = endpoint(prefix, ALL_FILE);
    write_json(
        &output_dir.join(ALL_FILE),
        &ApiResponse::list(records, version, generated_at, all_endpoint),
    )?;
    info!(controls = records.len(), "wrote all-controls endpoint");

    // Standards
    ensure_output_dir(output_dir, STANDARDS_DIR)?;
    let standards = write_groups(
        &group_by_standard(records),
        output_dir,
        options,
        standard_file,
    )?;
    info!(count = standards.len(), "wrote standard endpoints");

    // Categories
    ensure_output_dir(output_dir, CATEGORIES_DIR)?;
    let categories = write_groups(
        &group_by_category(records),
        output_dir,
        options,
        category_file,
    )?;
    info!(count = categories.len(), "wrote category endpoints");

    // Individual controls and their mapping projections
    ensure_output_dir(output_dir, CONTROLS_DIR)?;
    ensure_output_dir(output_dir, MAPPINGS_DIR)?;
    let mut seen: HashMap<String, &str> = HashMap::new();
    for record in records {
        let slug = slugify(&record.id);
        if let Some(previous) = seen.insert(slug.clone(), &record.id) {
            warn!(
                slug = %slug,
                previous = %previous,
                id = %record.id,
                "control id slug collision; later control overwrites earlier file"
            );
        }

        let relative = control_file(&slug);
        write_json(
            &output_dir.join(&relative),
            &ApiResponse::single(record, version, generated_at, endpoint(prefix, &relative)),
        )?;

        let relative = mapping_file(&slug);
        write_json(
            &output_dir.join(&relative),
            &ApiResponse::single(
                record.projection(),
                version,
                generated_at,
                endpoint(prefix, &relative),
            ),
        )?;
    }
    info!(count = records.len(), "wrote control and mapping endpoints");

    // Index
    let category_slugs: Vec<&str> = categories.iter().map(|c| c.key.as_str()).collect();
    write_json(
        &output_dir.join(INDEX_FILE),
        &build_index(&category_slugs, options),
    )?;

    let summary = GenerationSummary {
        output_dir: output_dir.to_path_buf(),
        controls: records.len(),
        standards,
        categories,
        control_endpoints: records.len(),
        mapping_endpoints: records.len(),
    };
    info!(files = summary.total_files(), "api generation complete");
    Ok(summary)
}

fn write_groups(
    groups: &[RecordGroup<'_>],
    output_dir: &Path,
    options: &GenerateOptions,
    file_for: fn(&str) -> String,
) -> Result<Vec<GroupSummary>> {
    let mut summaries = Vec::with_capacity(groups.len());
    for group in groups {
        let relative = file_for(&group.key);
        let endpoint = endpoint(&options.endpoint_prefix, &relative);
        write_json(
            &output_dir.join(&relative),
            &ApiResponse::list(
                &group.records[..],
                &options.version,
                options.generated_at,
                endpoint.clone(),
            ),
        )?;
        summaries.push(GroupSummary {
            key: group.key.clone(),
            name: group.name.clone(),
            records: group.records.len(),
            endpoint,
        });
    }
    Ok(summaries)
}
