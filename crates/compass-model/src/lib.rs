//! Data model shared by the importer and the API generator.
//!
//! A [`ControlRecord`] is produced once per source row by the importer and
//! consumed read-only by the generator, which wraps every payload it writes
//! in an [`ApiResponse`] envelope.

pub mod control;
pub mod envelope;
pub mod error;
pub mod standard;

pub use control::{ControlRecord, MappingProjection, Mappings, total_mapping_count};
pub use envelope::{ApiResponse, DEFAULT_API_VERSION, ResponseMeta, format_generated};
pub use error::{ModelError, Result};
pub use standard::Standard;
