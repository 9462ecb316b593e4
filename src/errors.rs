use std::io;

use thiserror::Error;

/// Error type for session input and export failures.
///
/// Parsing itself never fails; malformed lines are dropped, not reported.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The source text could not be read (the only input failure mode).
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A batch export writer failed.
    #[error("export failed: {0}")]
    Export(String),
}
