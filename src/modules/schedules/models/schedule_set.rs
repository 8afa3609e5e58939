use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tracing::warn;

use super::FeeScheduleRecord;

/// Immutable snapshot of every fee schedule record loaded from the store.
///
/// A snapshot is never edited after construction; a reload builds a new one.
#[derive(Debug, Clone)]
pub struct ScheduleSet {
    records: Vec<FeeScheduleRecord>,
    index: HashMap<String, usize>,
    loaded_at: DateTime<Utc>,
}

impl ScheduleSet {
    /// Build a snapshot. When two records share a subclass code the first one
    /// is kept.
    pub fn from_records(records: impl IntoIterator<Item = FeeScheduleRecord>) -> Self {
        let mut kept = Vec::new();
        let mut index = HashMap::new();

        for record in records {
            if index.contains_key(&record.subclass_code) {
                warn!(
                    subclass_code = %record.subclass_code,
                    visa_name = %record.visa_name,
                    "Duplicate fee schedule record ignored"
                );
                continue;
            }
            index.insert(record.subclass_code.clone(), kept.len());
            kept.push(record);
        }

        Self {
            records: kept,
            index,
            loaded_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self::from_records(Vec::new())
    }

    /// Look up the record for a subclass code
    pub fn get(&self, subclass_code: &str) -> Option<&FeeScheduleRecord> {
        self.index
            .get(subclass_code.trim())
            .and_then(|&position| self.records.get(position))
    }

    /// Records in load order
    pub fn records(&self) -> &[FeeScheduleRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

impl Default for ScheduleSet {
    fn default() -> Self {
        Self::empty()
    }
}
