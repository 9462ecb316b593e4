#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/// Extension-based category classification.
pub mod classify;
/// Session configuration types.
pub mod config;
/// Centralized constants used across parser, sampler, and exports.
pub mod constants;
/// Batch export helpers (text, CSV, JSON, links).
pub mod export;
/// Listing-line parsing.
pub mod parser;
/// File record, record set, and batch types.
pub mod record;
/// Random single-pick and batch-draw sampling.
pub mod sampler;
/// Session state: record set, batch, and current selection.
pub mod session;
/// Folder and category aggregates over a record set.
pub mod stats;
/// Shared type aliases.
pub mod types;

mod errors;

pub use classify::Category;
pub use config::{entropy_seed, SessionConfig};
pub use errors::SessionError;
pub use export::{batch_csv, batch_json, batch_listing, link_for};
pub use parser::{parse, ParseSummary, ParsedListing};
pub use record::{Batch, FileRecord, RecordSet};
pub use sampler::BatchSampler;
pub use session::Session;
pub use stats::{category_counts, folder_breakdown, unique_folder_count, FolderBreakdown};
pub use types::{Extension, FolderPath, Handle, RecordId};
