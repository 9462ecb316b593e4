//! Listing-line parsing for pasted cloud-storage output.
//!
//! Input is heterogeneous terminal text: shell prompts, banners, and blank
//! lines mixed with listing lines shaped like
//! `/videos/trip/clip1.mp4   <H:AbCd1234XyZ>`. Only lines carrying a `<H:`
//! marker are candidates; everything else is skipped silently. Parsing never
//! fails — malformed candidates are dropped, and an empty result is the
//! caller's cue to show one aggregate warning.

use serde::Serialize;
use tracing::debug;

use crate::classify::Category;
use crate::constants::parser::{HANDLE_CLOSE, HANDLE_OPEN, PATH_SEPARATOR};
use crate::record::FileRecord;
use crate::types::RecordId;

/// Per-parse accounting so callers can surface a single aggregate warning
/// instead of per-line errors.
#[derive(Clone, Copy, Debug, Default, Serialize, PartialEq, Eq)]
pub struct ParseSummary {
    /// Lines seen in the input, including noise.
    pub total_lines: usize,
    /// Lines containing the `<H:` marker.
    pub candidate_lines: usize,
    /// Records produced. Always `<= candidate_lines`.
    pub records: usize,
}

/// Parse output: records in input order plus accounting.
#[derive(Clone, Debug, Default)]
pub struct ParsedListing {
    /// Records in input order; ids are dense `0..records.len()`.
    pub records: Vec<FileRecord>,
    /// Line accounting for this parse.
    pub summary: ParseSummary,
}

/// Parse a pasted listing into records. Never errors; unmatched lines are
/// dropped. Ids are assigned by output position, so skipped lines do not
/// consume ids.
pub fn parse(text: &str) -> ParsedListing {
    let mut records = Vec::new();
    let mut summary = ParseSummary::default();

    for line in text.lines() {
        summary.total_lines += 1;
        if !line.contains(HANDLE_OPEN) {
            continue;
        }
        summary.candidate_lines += 1;
        match parse_line(line, records.len()) {
            Some(record) => records.push(record),
            None => debug!(line, "skipping malformed listing line"),
        }
    }

    summary.records = records.len();
    ParsedListing { records, summary }
}

/// Grammar: `<path><whitespace>+<H:handle>` anchored at both ends after
/// trimming. Checked explicitly rather than with a non-greedy regex; the last
/// `<H:` token wins, matching the regex's anchored non-greedy path capture.
fn parse_line(line: &str, id: RecordId) -> Option<FileRecord> {
    let trimmed = line.trim();
    let open = trimmed.rfind(HANDLE_OPEN)?;
    let token = &trimmed[open + HANDLE_OPEN.len()..];
    let close = token.find(HANDLE_CLOSE)?;
    // Anchored at the end: nothing may follow the closing delimiter.
    if !token[close + HANDLE_CLOSE.len_utf8()..].is_empty() {
        return None;
    }
    let handle = &token[..close];

    // At least one whitespace must separate the path from the handle token.
    let path_part = &trimmed[..open];
    if !path_part.ends_with(char::is_whitespace) {
        return None;
    }

    build_record(id, path_part.trim(), handle)
}

fn build_record(id: RecordId, path: &str, handle: &str) -> Option<FileRecord> {
    let segments: Vec<&str> = path
        .split(PATH_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect();
    // A path of only slashes (or nothing) yields zero segments.
    let file_name = (*segments.last()?).to_string();

    let full_path = format!("/{}", segments.join("/"));
    let folder_path = if segments.len() == 1 {
        String::from("/")
    } else {
        format!("/{}", segments[..segments.len() - 1].join("/"))
    };
    let extension = file_name
        .rfind('.')
        .map(|dot| file_name[dot + 1..].to_lowercase())
        .unwrap_or_default();
    let category = Category::from_extension(&extension);

    Some(FileRecord {
        id,
        file_name,
        full_path,
        folder_path,
        extension,
        category,
        handle: handle.to_string(),
    })
}
