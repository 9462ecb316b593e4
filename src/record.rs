use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::classify::Category;

pub use crate::types::{Extension, FolderPath, Handle, RecordId};

/// Canonical record parsed from one listing line. Immutable once created.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    /// 0-based position in the parse output; dense within one parse session.
    pub id: RecordId,
    /// Last path segment.
    pub file_name: String,
    /// Full path, `/`-prefixed with empty segments dropped.
    pub full_path: String,
    /// All segments except the last, `/`-prefixed; `/` for top-level files.
    pub folder_path: FolderPath,
    /// Lowercased extension after the final `.`, or empty when there is none.
    pub extension: Extension,
    /// Classification derived from `extension`.
    pub category: Category,
    /// Opaque resource identifier used to build shareable links.
    pub handle: Handle,
}

/// Ordered records from the most recent parse. Replaced wholesale by the next
/// parse or an explicit reset; never merged incrementally.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RecordSet {
    /// Records in parse order; positions match record ids.
    pub records: Vec<FileRecord>,
    /// When this set was parsed.
    pub captured_at: DateTime<Utc>,
}

impl RecordSet {
    /// Build a set from parse output, stamped with the current time.
    pub fn new(records: Vec<FileRecord>) -> Self {
        Self {
            records,
            captured_at: Utc::now(),
        }
    }

    /// Empty set, the initial session state.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Unordered selection of distinct records drawn from the current record set.
/// Independent lifecycle from the set; always a subset of it by id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Batch {
    /// Selected records; no id appears twice.
    pub records: Vec<FileRecord>,
}

impl Batch {
    /// True when no records are selected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of selected records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when a record with this id is already selected.
    pub fn contains_id(&self, id: RecordId) -> bool {
        self.records.iter().any(|record| record.id == id)
    }

    /// Put a record at the front unless its id is already present.
    pub fn prepend_unique(&mut self, record: FileRecord) {
        if !self.contains_id(record.id) {
            self.records.insert(0, record);
        }
    }

    /// Drop all selected records.
    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn sample_record(id: RecordId, name: &str) -> FileRecord {
        let listing = format!("/folder/{name} <H:H{id}>");
        let mut record = parser::parse(&listing).records.remove(0);
        record.id = id;
        record
    }

    #[test]
    fn prepend_unique_skips_existing_ids() {
        let mut batch = Batch::default();
        batch.prepend_unique(sample_record(0, "a.txt"));
        batch.prepend_unique(sample_record(0, "a.txt"));
        assert_eq!(batch.len(), 1);
    }

    #[test]
    fn prepend_unique_puts_newest_first() {
        let mut batch = Batch::default();
        batch.prepend_unique(sample_record(0, "a.txt"));
        batch.prepend_unique(sample_record(1, "b.txt"));
        assert_eq!(batch.records[0].id, 1);
        assert_eq!(batch.records[1].id, 0);
    }

    #[test]
    fn record_set_replaces_wholesale() {
        let set = RecordSet::new(vec![sample_record(0, "a.txt")]);
        assert_eq!(set.len(), 1);
        let replacement = RecordSet::empty();
        assert!(replacement.is_empty());
    }
}
