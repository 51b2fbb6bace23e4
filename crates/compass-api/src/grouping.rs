//! First-seen-order grouping of records.

use std::collections::HashMap;

use compass_model::ControlRecord;

use crate::slug::slugify;

/// Records sharing one grouping key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordGroup<'a> {
    /// Key used for the file name (lower-cased standard or category slug).
    pub key: String,
    /// First label seen for this key.
    pub name: String,
    /// Members, in input order.
    pub records: Vec<&'a ControlRecord>,
}

/// Group by lower-cased standard name.
pub fn group_by_standard(records: &[ControlRecord]) -> Vec<RecordGroup<'_>> {
    group_by(records, |record| {
        (record.standard.to_lowercase(), record.standard.clone())
    })
}

/// Group by category slug.
///
/// Labels that slugify to the same string (`"Access Control"` and
/// `"access-control"`) share one group named after the first label seen.
pub fn group_by_category(records: &[ControlRecord]) -> Vec<RecordGroup<'_>> {
    group_by(records, |record| {
        (slugify(&record.category), record.category.clone())
    })
}

fn group_by<'a, F>(records: &'a [ControlRecord], key_of: F) -> Vec<RecordGroup<'a>>
where
    F: Fn(&ControlRecord) -> (String, String),
{
    let mut groups: Vec<RecordGroup<'a>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    for record in records {
        let (key, name) = key_of(record);
        match positions.get(&key) {
            Some(&idx) => groups[idx].records.push(record),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(RecordGroup {
                    key,
                    name,
                    records: vec![record],
                });
            }
        }
    }
    groups
}
