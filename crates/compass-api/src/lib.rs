//! Static JSON API generation.
//!
//! Expands a combined control record set into a tree of pre-rendered JSON
//! files that a static host can serve as-is:
//!
//! ```text
//! <output>/all.json
//! <output>/standards/<standard>.json
//! <output>/categories/<category-slug>.json
//! <output>/controls/<control-id-slug>.json
//! <output>/mappings/<control-id-slug>.json
//! <output>/index.json
//! ```
//!
//! Every file except the index is wrapped in an
//! [`ApiResponse`](compass_model::ApiResponse) envelope.

pub mod endpoints;
mod error;
pub mod generator;
pub mod grouping;
pub mod index;
pub mod search;
pub mod slug;
mod writer;

pub use error::{ApiError, Result};
pub use generator::{
    DEFAULT_BASE_URL, DEFAULT_ENDPOINT_PREFIX, GenerateOptions, GenerationSummary, GroupSummary,
    generate, load_records,
};
pub use grouping::{RecordGroup, group_by_category, group_by_standard};
pub use index::{ApiIndex, build_index};
pub use search::{SearchFilter, categories, search};
pub use slug::slugify;
