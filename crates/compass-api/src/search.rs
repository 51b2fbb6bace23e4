//! Offline filtering of a record set by text, standard and category.

use std::collections::BTreeSet;

use compass_model::ControlRecord;

/// Search criteria. Absent criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Case-insensitive substring of the title, description or id.
    pub query: Option<String>,
    /// Standard name, compared case-insensitively.
    pub standard: Option<String>,
    /// Exact category label.
    pub category: Option<String>,
}

impl SearchFilter {
    pub fn matches(&self, record: &ControlRecord) -> bool {
        let query_match = match self.query.as_deref().filter(|q| !q.is_empty()) {
            Some(query) => {
                let query = query.to_lowercase();
                [&record.title, &record.description, &record.id]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&query))
            }
            None => true,
        };
        let standard_match = self
            .standard
            .as_deref()
            .filter(|s| !s.is_empty())
            .is_none_or(|standard| record.standard.eq_ignore_ascii_case(standard));
        let category_match = self
            .category
            .as_deref()
            .filter(|c| !c.is_empty())
            .is_none_or(|category| record.category == category);
        query_match && standard_match && category_match
    }
}

/// Records matching `filter`, in input order.
pub fn search<'a>(records: &'a [ControlRecord], filter: &SearchFilter) -> Vec<&'a ControlRecord> {
    records.iter().filter(|r| filter.matches(r)).collect()
}

/// Distinct category labels, sorted.
pub fn categories(records: &[ControlRecord]) -> Vec<&str> {
    records
        .iter()
        .map(|r| r.category.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
