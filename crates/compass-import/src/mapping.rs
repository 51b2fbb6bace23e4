//! Normalization of the `mapping_id` column.
//!
//! The column holds a semicolon-separated list of heterogeneous identifiers,
//! e.g. `ISO27001:2013:A.14.1.1;NIST-SSDF-PO-1-1;OPSC-C3;`. Each token is
//! routed to the standard it references and reduced to that standard's
//! canonical control id.

use compass_model::{Mappings, Standard};

const OWASP_PREFIX: &str = "OPSC-";
const ISO_MARKER: &str = "ISO27001";
const ISO_PREFIX: &str = "A.";
const NIST_MARKER: &str = "NIST";
const NIST_SSDF_PREFIX: &str = "NIST-SSDF-";
const NIST_PRACTICE_PREFIXES: [&str; 4] = ["PO.", "PS.", "PW.", "RV."];

/// Parse a raw `mapping_id` cell into per-standard lists.
///
/// Empty tokens are discarded. Tokens that reference none of the known
/// standards are dropped silently.
pub fn parse_mappings(raw: &str) -> Mappings {
    let mut mappings = Mappings::default();
    for token in raw.split(';').map(str::trim).filter(|t| !t.is_empty()) {
        if let Some((standard, id)) = classify_token(token) {
            mappings.push(standard, id);
        }
    }
    mappings
}

/// Classify one trimmed token and normalize its control id.
///
/// Rules are checked in order; the first match wins:
///
/// - `OPSC-*` is an OWASP control, kept verbatim.
/// - Anything containing `ISO27001` or starting with `A.` is ISO27001.
/// - Anything containing `NIST` or starting with a practice group
///   (`PO.`, `PS.`, `PW.`, `RV.`) is NIST.
///
/// For ISO27001 and NIST a qualified token such as `ISO27001:2013:A.14.1.1`
/// reduces to the part after the last colon. NIST `NIST-SSDF-PO-1-1` tokens
/// become `PO.1.1`; every `NIST-SSDF-` occurrence is removed, not only the
/// leading one.
pub fn classify_token(token: &str) -> Option<(Standard, String)> {
    if token.starts_with(OWASP_PREFIX) {
        return Some((Standard::Owasp, token.to_string()));
    }

    if token.contains(ISO_MARKER) || token.starts_with(ISO_PREFIX) {
        let id = after_last_colon(token).unwrap_or(token);
        return Some((Standard::Iso27001, id.to_string()));
    }

    if token.contains(NIST_MARKER)
        || NIST_PRACTICE_PREFIXES
            .iter()
            .any(|prefix| token.starts_with(prefix))
    {
        let id = if let Some(id) = after_last_colon(token) {
            id.to_string()
        } else if token.starts_with(NIST_SSDF_PREFIX) {
            token.replace(NIST_SSDF_PREFIX, "").replace('-', ".")
        } else {
            token.to_string()
        };
        return Some((Standard::Nist, id));
    }

    None
}

fn after_last_colon(token: &str) -> Option<&str> {
    token.rsplit_once(':').map(|(_, tail)| tail)
}
