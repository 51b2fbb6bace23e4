//! Row → [`ControlRecord`] normalization.

use compass_model::{ControlRecord, Standard};

use crate::csv_utils::{CsvRow, get_field};
use crate::mapping::parse_mappings;

/// Source column names.
pub mod columns {
    pub const CONTROL_CODE: &str = "cntrl_code";
    pub const CONTROL_NUMBER: &str = "cntrl_number";
    pub const CATEGORY: &str = "addressed_control";
    pub const TITLE: &str = "recommendations";
    pub const DESCRIPTION: &str = "Description";
    pub const MAPPING_ID: &str = "mapping_id";
    pub const RECOMMENDATION: &str = "action_items";
}

/// Build a control id from its code and number.
///
/// `code-number` when a number is present, otherwise the code alone.
pub fn control_id(code: &str, number: &str) -> String {
    let code = code.trim();
    let number = number.trim();
    if number.is_empty() {
        code.to_string()
    } else {
        format!("{code}-{number}")
    }
}

/// Normalize one source row into a control record tagged with `standard`.
///
/// Nothing is validated; absent columns become empty strings.
pub fn record_from_row(row: &CsvRow, standard: Standard) -> ControlRecord {
    let field = |name: &str| get_field(row, name).trim().to_string();
    ControlRecord {
        id: control_id(
            &get_field(row, columns::CONTROL_CODE),
            &get_field(row, columns::CONTROL_NUMBER),
        ),
        standard: standard.name().to_string(),
        category: field(columns::CATEGORY),
        title: field(columns::TITLE),
        description: field(columns::DESCRIPTION),
        mappings: parse_mappings(&get_field(row, columns::MAPPING_ID)),
        recommendation: field(columns::RECOMMENDATION),
        extra: Default::default(),
    }
}
