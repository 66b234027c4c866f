use std::collections::BTreeMap;

use log::{debug, info};
use serde_json::Value;

use crate::rarity;

/// Identifiers grouped by rarity label.
///
/// Labels iterate in ascending order; each list keeps input order and
/// duplicates, so repeated identifiers weigh more when sampled.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RarityGroups {
    groups: BTreeMap<String, Vec<Value>>,
    total_records: usize,
    skipped_records: usize,
}

impl RarityGroups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, label: &str) -> Option<&[Value]> {
        self.groups.get(label).map(Vec::as_slice)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.groups.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn total_records(&self) -> usize {
        self.total_records
    }

    /// Records that lacked `Rare` or `Id` (or were not objects).
    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }
}

// `null` counts as absent
fn field<'a>(record: &'a Value, key: &str) -> Option<&'a Value> {
    record.get(key).filter(|v| !v.is_null())
}

/// Single pass over `records`, grouping each `Id` under the label of its `Rare`.
pub fn group_by_rarity(records: &[Value], normalize: bool) -> RarityGroups {
    let mut out = RarityGroups {
        total_records: records.len(),
        ..RarityGroups::default()
    };

    for (idx, record) in records.iter().enumerate() {
        let (rare, id) = match (field(record, "Rare"), field(record, "Id")) {
            (Some(rare), Some(id)) => (rare, id),
            _ => {
                debug!("record {idx}: missing Rare or Id, skipped");
                out.skipped_records += 1;
                continue;
            }
        };

        let mut label = rarity::label_of(rare);
        if normalize {
            label = rarity::normalize(&label);
        }
        out.groups.entry(label).or_default().push(id.clone());
    }

    info!(
        "Grouped {} records into {} rarity labels ({} skipped)",
        out.total_records,
        out.groups.len(),
        out.skipped_records
    );
    out
}
