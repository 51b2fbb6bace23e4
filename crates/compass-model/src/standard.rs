//! The compliance standards covered by the record set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// A compliance standard with its own control catalogue.
///
/// Source files are tagged with one of these; records carry the display name
/// (`OWASP`, `ISO27001`, `NIST`) and API paths use the lower-cased slug.
/// Deserialization goes through [`FromStr`], so any casing is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Standard {
    /// OWASP Proactive Security Controls (`OPSC-*`).
    #[serde(rename = "OWASP")]
    Owasp,
    /// ISO/IEC 27001 Annex A controls (`A.*`).
    #[serde(rename = "ISO27001")]
    Iso27001,
    /// NIST Secure Software Development Framework practices (`PO.*`, `PS.*`, `PW.*`, `RV.*`).
    #[serde(rename = "NIST")]
    Nist,
}

impl Standard {
    /// All standards, in import order.
    pub const ALL: [Standard; 3] = [Standard::Owasp, Standard::Iso27001, Standard::Nist];

    /// Display name as stored on records.
    pub fn name(&self) -> &'static str {
        match self {
            Standard::Owasp => "OWASP",
            Standard::Iso27001 => "ISO27001",
            Standard::Nist => "NIST",
        }
    }

    /// Lower-cased path segment used for API endpoints and mapping keys.
    pub fn slug(&self) -> &'static str {
        match self {
            Standard::Owasp => "owasp",
            Standard::Iso27001 => "iso27001",
            Standard::Nist => "nist",
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Standard {
    type Err = ModelError;

    /// Case-insensitive lookup by display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Standard::ALL
            .into_iter()
            .find(|standard| standard.name() == normalized)
            .ok_or_else(|| ModelError::UnknownStandard {
                name: s.to_string(),
            })
    }
}

impl TryFrom<String> for Standard {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("owasp".parse::<Standard>(), Ok(Standard::Owasp));
        assert_eq!(" Iso27001 ".parse::<Standard>(), Ok(Standard::Iso27001));
        assert_eq!("NIST".parse::<Standard>(), Ok(Standard::Nist));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "PCI-DSS".parse::<Standard>().unwrap_err();
        assert_eq!(err.to_string(), "unknown standard: PCI-DSS");
    }

    #[test]
    fn serializes_as_display_name() {
        let json = serde_json::to_string(&Standard::Iso27001).unwrap();
        assert_eq!(json, "\"ISO27001\"");
        assert_eq!(Standard::Iso27001.slug(), "iso27001");
    }

    #[test]
    fn deserializes_any_casing() {
        let parsed: Vec<Standard> =
            serde_json::from_str(r#"["Nist", "iso27001", "Owasp", "ISO27001"]"#).unwrap();
        assert_eq!(
            parsed,
            [
                Standard::Nist,
                Standard::Iso27001,
                Standard::Owasp,
                Standard::Iso27001
            ]
        );
        let err = serde_json::from_str::<Standard>(r#""PCI""#).unwrap_err();
        assert!(err.to_string().contains("unknown standard: PCI"));
    }
}
