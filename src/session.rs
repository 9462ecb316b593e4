//! One owner for all interactive state: the current record set, the running
//! batch, and the current selection. Every operation is a synchronous,
//! all-or-nothing replacement; there is exactly one actor, so the latest
//! action simply wins.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::config::SessionConfig;
use crate::errors::SessionError;
use crate::export;
use crate::parser::{self, ParseSummary};
use crate::record::{Batch, FileRecord, RecordSet};
use crate::sampler::BatchSampler;
use crate::stats::{self, FolderBreakdown};

/// Interactive sampling session over a parsed listing.
pub struct Session {
    config: SessionConfig,
    records: RecordSet,
    batch: Batch,
    current: Option<FileRecord>,
    sampler: BatchSampler,
}

impl Session {
    /// Create an empty session (no data loaded).
    pub fn new(config: SessionConfig) -> Self {
        let sampler = BatchSampler::new(config.seed);
        Self {
            config,
            records: RecordSet::empty(),
            batch: Batch::default(),
            current: None,
            sampler,
        }
    }

    /// Parse pasted text into a fresh record set, replacing the prior one.
    /// The batch and current selection are cleared so they stay subsets of
    /// the live set. Never fails; an empty result only logs one aggregate
    /// warning, which callers surface alongside the returned summary.
    pub fn load_text(&mut self, text: &str) -> ParseSummary {
        let parsed = parser::parse(text);
        if parsed.records.is_empty() {
            warn!(
                total_lines = parsed.summary.total_lines,
                "no records found; expected lines like '/folder/name.ext  <H:handle>'"
            );
        } else {
            debug!(
                records = parsed.summary.records,
                candidate_lines = parsed.summary.candidate_lines,
                "listing loaded"
            );
        }
        self.records = RecordSet::new(parsed.records);
        self.batch.clear();
        self.current = None;
        parsed.summary
    }

    /// Read a listing from a file and load it. The read is the only failure
    /// mode; on error the session state is unchanged.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<ParseSummary, SessionError> {
        let text = fs::read_to_string(path)?;
        Ok(self.load_text(&text))
    }

    /// Pick one record uniformly at random. It becomes the current selection
    /// and is prepended to the batch unless already present by id. Returns
    /// `None` (a silent no-op) when nothing is loaded.
    pub fn pick_one(&mut self) -> Option<&FileRecord> {
        let picked = self.sampler.pick_one(&self.records.records)?.clone();
        self.batch.prepend_unique(picked.clone());
        self.current = Some(picked);
        self.current.as_ref()
    }

    /// Draw a batch of distinct records, replacing the existing batch and
    /// current selection. `count` defaults to the configured batch size; the
    /// result holds `min(count, loaded records)` entries, and the first one
    /// becomes the current selection.
    pub fn draw_batch(&mut self, count: Option<usize>) -> &Batch {
        let count = count.unwrap_or(self.config.batch_size);
        self.batch = Batch {
            records: self.sampler.draw(&self.records.records, count),
        };
        self.current = self.batch.records.first().cloned();
        &self.batch
    }

    /// Clear the batch and current selection; the record set is untouched.
    pub fn clear_batch(&mut self) {
        self.batch.clear();
        self.current = None;
    }

    /// Return to the initial state: record set, batch, and selection cleared.
    pub fn reset(&mut self) {
        self.records = RecordSet::empty();
        self.clear_batch();
    }

    /// The current record set.
    pub fn records(&self) -> &RecordSet {
        &self.records
    }

    /// The running batch.
    pub fn batch(&self) -> &Batch {
        &self.batch
    }

    /// The currently highlighted record, if any.
    pub fn current(&self) -> Option<&FileRecord> {
        self.current.as_ref()
    }

    /// Shareable link for a record, built from the configured host prefix.
    pub fn link_for(&self, record: &FileRecord) -> String {
        export::link_for(&self.config.link_prefix, &record.handle)
    }

    /// Plain-text export of the running batch.
    pub fn batch_listing(&self) -> String {
        export::batch_listing(&self.batch.records, &self.config.link_prefix)
    }

    /// CSV export of the running batch.
    pub fn batch_csv(&self) -> Result<String, SessionError> {
        export::batch_csv(&self.batch.records, &self.config.link_prefix)
    }

    /// JSON export of the running batch.
    pub fn batch_json(&self) -> Result<String, SessionError> {
        export::batch_json(&self.batch.records)
    }

    /// Count of distinct folder paths in the record set.
    pub fn unique_folder_count(&self) -> usize {
        stats::unique_folder_count(&self.records.records)
    }

    /// Folder statistics for the record set; `None` when nothing is loaded.
    pub fn folder_breakdown(&self) -> Option<FolderBreakdown> {
        stats::folder_breakdown(&self.records.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LISTING: &str = "mega> ls\n\
                           /docs/report.pdf <H:D1>\n\
                           /pics/img.png <H:P1>\n\
                           /pics/img2.png <H:P2>\n";

    fn loaded_session() -> Session {
        let mut session = Session::new(SessionConfig::default());
        session.load_text(LISTING);
        session
    }

    #[test]
    fn load_replaces_prior_state_wholesale() {
        let mut session = loaded_session();
        session.draw_batch(None);
        assert!(!session.batch().is_empty());

        let summary = session.load_text("/other/file.txt <H:X>");
        assert_eq!(summary.records, 1);
        assert_eq!(session.records().len(), 1);
        assert!(session.batch().is_empty());
        assert!(session.current().is_none());
    }

    #[test]
    fn pick_one_sets_selection_and_grows_batch_once() {
        let mut session = Session::new(SessionConfig::default());
        session.load_text("/only/one.txt <H:X>");

        let first = session.pick_one().expect("record").id;
        let second = session.pick_one().expect("record").id;
        assert_eq!(first, second);
        assert_eq!(session.batch().len(), 1);
        assert_eq!(session.current().expect("selection").id, first);
    }

    #[test]
    fn pick_one_without_records_is_a_noop() {
        let mut session = Session::new(SessionConfig::default());
        assert!(session.pick_one().is_none());
        assert!(session.batch().is_empty());
        assert!(session.current().is_none());
    }

    #[test]
    fn draw_batch_uses_configured_default_count() {
        let mut session = Session::new(SessionConfig::default().with_batch_size(2));
        session.load_text(LISTING);
        session.draw_batch(None);
        assert_eq!(session.batch().len(), 2);
        assert_eq!(
            session.current().expect("selection").id,
            session.batch().records[0].id
        );
    }

    #[test]
    fn clear_batch_keeps_the_record_set() {
        let mut session = loaded_session();
        session.draw_batch(Some(2));
        session.clear_batch();
        assert!(session.batch().is_empty());
        assert!(session.current().is_none());
        assert_eq!(session.records().len(), 3);
    }

    #[test]
    fn reset_returns_to_initial_state() {
        let mut session = loaded_session();
        session.draw_batch(Some(2));
        session.reset();
        assert!(session.records().is_empty());
        assert!(session.batch().is_empty());
        assert!(session.current().is_none());
    }

    #[test]
    fn unique_folder_count_is_folder_cardinality() {
        let session = loaded_session();
        assert_eq!(session.unique_folder_count(), 2);
    }
}
