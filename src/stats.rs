use indexmap::IndexMap;

use crate::classify::Category;
use crate::record::FileRecord;
use crate::types::FolderPath;

/// Aggregate folder statistics for a record set.
#[derive(Clone, Debug, PartialEq)]
pub struct FolderBreakdown {
    /// Total records counted.
    pub total: usize,
    /// Number of distinct folder paths.
    pub folders: usize,
    /// Per-folder counts, largest first.
    pub per_folder: Vec<FolderShare>,
}

/// One folder's share of a record set.
#[derive(Clone, Debug, PartialEq)]
pub struct FolderShare {
    /// The folder path, `/` for top-level files.
    pub folder: FolderPath,
    /// Records in this folder.
    pub count: usize,
    /// Fraction of the total record count.
    pub share: f64,
}

/// Compute folder statistics from a record set. Returns `None` when the set
/// is empty.
pub fn folder_breakdown(records: &[FileRecord]) -> Option<FolderBreakdown> {
    if records.is_empty() {
        return None;
    }
    let total = records.len();
    let mut counts: IndexMap<FolderPath, usize> = IndexMap::new();
    for record in records {
        *counts.entry(record.folder_path.clone()).or_insert(0) += 1;
    }
    let folders = counts.len();
    let mut per_folder: Vec<FolderShare> = counts
        .into_iter()
        .map(|(folder, count)| FolderShare {
            folder,
            count,
            share: count as f64 / total as f64,
        })
        .collect();
    per_folder.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.folder.cmp(&b.folder)));
    Some(FolderBreakdown {
        total,
        folders,
        per_folder,
    })
}

/// Number of distinct `folder_path` values in a record set.
pub fn unique_folder_count(records: &[FileRecord]) -> usize {
    folder_breakdown(records).map_or(0, |breakdown| breakdown.folders)
}

/// Record counts per category, in first-seen order.
pub fn category_counts(records: &[FileRecord]) -> IndexMap<Category, usize> {
    let mut counts = IndexMap::new();
    for record in records {
        *counts.entry(record.category).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    fn build_records() -> Vec<FileRecord> {
        let listing = "/docs/a.pdf <H:1>\n\
                       /docs/b.pdf <H:2>\n\
                       /pics/c.png <H:3>\n\
                       top.bin <H:4>\n";
        parser::parse(listing).records
    }

    #[test]
    fn breakdown_counts_distinct_folders() {
        let records = build_records();
        let breakdown = folder_breakdown(&records).expect("breakdown");
        assert_eq!(breakdown.total, 4);
        assert_eq!(breakdown.folders, 3);
        assert_eq!(breakdown.per_folder[0].folder, "/docs");
        assert_eq!(breakdown.per_folder[0].count, 2);
        assert!((breakdown.per_folder[0].share - 0.5).abs() < 1e-6);
    }

    #[test]
    fn breakdown_of_empty_set_is_none() {
        assert!(folder_breakdown(&[]).is_none());
        assert_eq!(unique_folder_count(&[]), 0);
    }

    #[test]
    fn unique_folder_count_matches_breakdown() {
        let records = build_records();
        assert_eq!(unique_folder_count(&records), 3);
    }

    #[test]
    fn category_counts_group_by_derived_category() {
        let records = build_records();
        let counts = category_counts(&records);
        assert_eq!(counts.get(&Category::Document), Some(&2));
        assert_eq!(counts.get(&Category::Image), Some(&1));
        assert_eq!(counts.get(&Category::File), Some(&1));
    }
}
