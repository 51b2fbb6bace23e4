//! The `meta` + `data` envelope wrapped around every generated API file.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Schema version written to `meta.version` unless configured otherwise.
pub const DEFAULT_API_VERSION: &str = "1.0.0";

/// Format a generation timestamp as RFC 3339 UTC with a `Z` suffix.
pub fn format_generated(generated_at: DateTime<Utc>) -> String {
    generated_at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Envelope metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub version: String,
    pub generated: String,
    pub total: usize,
    pub endpoint: String,
}

/// A payload wrapped with [`ResponseMeta`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub meta: ResponseMeta,
    pub data: T,
}

impl<'a, T> ApiResponse<&'a [T]> {
    /// Wrap a sequence; `total` is its length.
    pub fn list(
        items: &'a [T],
        version: &str,
        generated_at: DateTime<Utc>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            meta: ResponseMeta {
                version: version.to_string(),
                generated: format_generated(generated_at),
                total: items.len(),
                endpoint: endpoint.into(),
            },
            data: items,
        }
    }
}

impl<T> ApiResponse<T> {
    /// Wrap a single item; `total` is 1.
    pub fn single(
        item: T,
        version: &str,
        generated_at: DateTime<Utc>,
        endpoint: impl Into<String>,
    ) -> Self {
        Self {
            meta: ResponseMeta {
                version: version.to_string(),
                generated: format_generated(generated_at),
                total: 1,
                endpoint: endpoint.into(),
            },
            data: item,
        }
    }
}
