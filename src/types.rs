/// Record identifier: the record's 0-based position in the parse output.
/// Dense within one parse session, not stable across re-parses.
pub type RecordId = usize;
/// Opaque resource identifier extracted from a `<H:...>` token.
/// Example: `AbCd1234XyZ`
pub type Handle = String;
/// Lowercased extension text after the final `.` in a file name, or empty.
/// Examples: `mp4`, `png`
pub type Extension = String;
/// Folder portion of a record path, always `/`-prefixed.
/// Examples: `/videos/trip`, `/` (top-level files)
pub type FolderPath = String;
