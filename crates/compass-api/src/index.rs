//! The `index.json` document listing every endpoint.

use compass_model::{Standard, format_generated};
use serde::{Deserialize, Serialize};

use crate::endpoints::{
    ALL_FILE, CONTROL_ID_PLACEHOLDER, category_file, control_file, endpoint, mapping_file,
    standard_file,
};
use crate::generator::GenerateOptions;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiIndex {
    pub meta: IndexMeta,
    pub endpoints: IndexEndpoints,
    pub usage: IndexUsage,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexMeta {
    pub version: String,
    pub generated: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEndpoints {
    pub all_controls: String,
    pub standards: StandardLinks,
    pub categories: Vec<String>,
    pub individual_controls: String,
    pub mappings: String,
}

/// Example links, one per known standard, independent of the data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardLinks {
    pub owasp: String,
    pub iso27001: String,
    pub nist: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexUsage {
    pub base_url: String,
    pub example: String,
}

/// Build the index from the generated category slugs.
///
/// Category endpoints are listed sorted by slug.
pub fn build_index<S: AsRef<str>>(category_slugs: &[S], options: &GenerateOptions) -> ApiIndex {
    let prefix = options.endpoint_prefix.as_str();
    let standard_link = |standard: Standard| endpoint(prefix, &standard_file(standard.slug()));

    let mut slugs: Vec<&str> = category_slugs.iter().map(AsRef::as_ref).collect();
    slugs.sort_unstable();

    let base_url = options.base_url.trim_end_matches('/');
    ApiIndex {
        meta: IndexMeta {
            version: options.version.clone(),
            generated: format_generated(options.generated_at),
        },
        endpoints: IndexEndpoints {
            all_controls: endpoint(prefix, ALL_FILE),
            standards: StandardLinks {
                owasp: standard_link(Standard::Owasp),
                iso27001: standard_link(Standard::Iso27001),
                nist: standard_link(Standard::Nist),
            },
            categories: slugs
                .into_iter()
                .map(|slug| endpoint(prefix, &category_file(slug)))
                .collect(),
            individual_controls: endpoint(prefix, &control_file(CONTROL_ID_PLACEHOLDER)),
            mappings: endpoint(prefix, &mapping_file(CONTROL_ID_PLACEHOLDER)),
        },
        usage: IndexUsage {
            base_url: base_url.to_string(),
            example: format!("{base_url}{}", standard_link(Standard::Owasp)),
        },
    }
}
