//! Control records and their cross-standard mappings.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::standard::Standard;

/// Cross-references from one control to equivalent controls in each standard.
///
/// All three lists are always present, even when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mappings {
    pub owasp: Vec<String>,
    pub iso27001: Vec<String>,
    pub nist: Vec<String>,
}

impl Mappings {
    /// Identifiers mapped into the given standard.
    pub fn for_standard(&self, standard: Standard) -> &[String] {
        match standard {
            Standard::Owasp => &self.owasp,
            Standard::Iso27001 => &self.iso27001,
            Standard::Nist => &self.nist,
        }
    }

    /// Append an identifier to the list for `standard`.
    pub fn push(&mut self, standard: Standard, id: impl Into<String>) {
        let list = match standard {
            Standard::Owasp => &mut self.owasp,
            Standard::Iso27001 => &mut self.iso27001,
            Standard::Nist => &mut self.nist,
        };
        list.push(id.into());
    }

    /// Total number of mapped identifiers across all standards.
    pub fn len(&self) -> usize {
        self.owasp.len() + self.iso27001.len() + self.nist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single compliance control, normalized from one source row.
///
/// Optional fields read as `null` take their empty default. Keys outside the
/// known set are kept in `extra` and written back after the known fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRecord {
    pub id: String,
    /// Display name of the owning standard. Kept as text; see [`Standard`] for lookups.
    pub standard: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mappings: Mappings,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recommendation: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl ControlRecord {
    /// Number of cross-standard identifiers this control maps to.
    pub fn mapping_count(&self) -> usize {
        self.mappings.len()
    }

    /// Reduced view used by the mappings endpoint.
    pub fn projection(&self) -> MappingProjection<'_> {
        MappingProjection {
            id: &self.id,
            standard: &self.standard,
            title: &self.title,
            mappings: &self.mappings,
        }
    }
}

/// The `id`/`standard`/`title`/`mappings` subset of a [`ControlRecord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MappingProjection<'a> {
    pub id: &'a str,
    pub standard: &'a str,
    pub title: &'a str,
    pub mappings: &'a Mappings,
}

/// Sum of mapping identifiers over a record set.
pub fn total_mapping_count(records: &[ControlRecord]) -> usize {
    records.iter().map(ControlRecord::mapping_count).sum()
}
