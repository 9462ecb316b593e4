//! Derived views over a batch: shareable links and text/CSV/JSON exports.
//! All pure formatting; nothing here is persisted.

use std::fmt::Write as _;

use crate::constants::export::CSV_HEADERS;
use crate::errors::SessionError;
use crate::record::FileRecord;
use crate::types::Handle;

/// Build a shareable link: host prefix + `/` + handle.
pub fn link_for(link_prefix: &str, handle: &Handle) -> String {
    format!("{}/{}", link_prefix.trim_end_matches('/'), handle)
}

/// Plain-text batch export: one line per entry with a 1-based index, file
/// name, full path, and link.
pub fn batch_listing(records: &[FileRecord], link_prefix: &str) -> String {
    let mut out = String::new();
    for (position, record) in records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {}  {}  {}",
            position + 1,
            record.file_name,
            record.full_path,
            link_for(link_prefix, &record.handle),
        );
    }
    out
}

/// CSV batch export with the headers from [`CSV_HEADERS`].
pub fn batch_csv(records: &[FileRecord], link_prefix: &str) -> Result<String, SessionError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(CSV_HEADERS)
        .map_err(|e| SessionError::Export(e.to_string()))?;
    for (position, record) in records.iter().enumerate() {
        writer
            .write_record([
                (position + 1).to_string(),
                record.file_name.clone(),
                record.full_path.clone(),
                record.folder_path.clone(),
                record.category.to_string(),
                link_for(link_prefix, &record.handle),
            ])
            .map_err(|e| SessionError::Export(e.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| SessionError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| SessionError::Export(e.to_string()))
}

/// JSON batch export of the full record structures.
pub fn batch_json(records: &[FileRecord]) -> Result<String, SessionError> {
    serde_json::to_string_pretty(records).map_err(|e| SessionError::Export(e.to_string()))
}
