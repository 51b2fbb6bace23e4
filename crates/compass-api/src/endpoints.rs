//! Relative file paths and public endpoint paths of the API tree.

pub const ALL_FILE: &str = "all.json";
pub const INDEX_FILE: &str = "index.json";
pub const STANDARDS_DIR: &str = "standards";
pub const CATEGORIES_DIR: &str = "categories";
pub const CONTROLS_DIR: &str = "controls";
pub const MAPPINGS_DIR: &str = "mappings";

/// Placeholder shown in the index for per-control endpoints.
pub const CONTROL_ID_PLACEHOLDER: &str = "{control-id}";

/// Relative file path of a standard partition.
pub fn standard_file(key: &str) -> String {
    format!("{STANDARDS_DIR}/{key}.json")
}

/// Relative file path of a category partition.
pub fn category_file(slug: &str) -> String {
    format!("{CATEGORIES_DIR}/{slug}.json")
}

/// Relative file path of a full control record.
pub fn control_file(slug: &str) -> String {
    format!("{CONTROLS_DIR}/{slug}.json")
}

/// Relative file path of a control's mapping projection.
pub fn mapping_file(slug: &str) -> String {
    format!("{MAPPINGS_DIR}/{slug}.json")
}

/// Public endpoint path for a relative file path, e.g. `/api/all.json`.
pub fn endpoint(prefix: &str, relative: &str) -> String {
    format!("{}/{relative}", prefix.trim_end_matches('/'))
}
