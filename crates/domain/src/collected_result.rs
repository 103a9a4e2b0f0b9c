use super::{RecordType, ResolvedRecord};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Records gathered for one looked-up name.
///
/// Every tag in [`RecordType::COLLECTED`] is always present, in that order,
/// even when its list is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectedResult {
    entries: Vec<(RecordType, Vec<ResolvedRecord>)>,
}

impl CollectedResult {
    pub fn new() -> Self {
        Self {
            entries: RecordType::COLLECTED
                .iter()
                .map(|record_type| (*record_type, Vec::new()))
                .collect(),
        }
    }

    /// Replaces the list stored under `record_type`. Types outside the
    /// collected set are ignored.
    pub fn set(&mut self, record_type: RecordType, records: Vec<ResolvedRecord>) {
        if let Some((_, slot)) = self.entries.iter_mut().find(|(t, _)| *t == record_type) {
            *slot = records;
        }
    }

    /// `None` only for types that are never collected (e.g. NS).
    pub fn get(&self, record_type: RecordType) -> Option<&[ResolvedRecord]> {
        self.entries
            .iter()
            .find(|(t, _)| *t == record_type)
            .map(|(_, records)| records.as_slice())
    }

    pub fn records(&self, record_type: RecordType) -> &[ResolvedRecord] {
        self.get(record_type).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (RecordType, &[ResolvedRecord])> {
        self.entries
            .iter()
            .map(|(record_type, records)| (*record_type, records.as_slice()))
    }

    pub fn total_records(&self) -> usize {
        self.entries.iter().map(|(_, records)| records.len()).sum()
    }
}

impl Default for CollectedResult {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for CollectedResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (record_type, records) in &self.entries {
            map.serialize_entry(record_type.as_str(), records)?;
        }
        map.end()
    }
}
