/// Constants used by listing-line parsing.
pub mod parser {
    /// Marker that opens a handle token; lines without it are never candidates.
    pub const HANDLE_OPEN: &str = "<H:";
    /// Delimiter that closes a handle token.
    pub const HANDLE_CLOSE: char = '>';
    /// Separator used when splitting listing paths into segments.
    pub const PATH_SEPARATOR: char = '/';
}

/// Constants used by sampling defaults.
pub mod sampler {
    /// Batch size used when a draw does not specify one.
    pub const DEFAULT_BATCH_SIZE: usize = 10;
    /// RNG seed used when a session does not specify one.
    pub const DEFAULT_SEED: u64 = 42;
}

/// Constants used by export formatting and link construction.
pub mod export {
    /// Host prefix prepended to handles when building shareable links.
    pub const DEFAULT_LINK_PREFIX: &str = "https://mega.nz/file";
    /// Column headers for CSV batch exports.
    pub const CSV_HEADERS: [&str; 6] = [
        "index",
        "file_name",
        "full_path",
        "folder_path",
        "category",
        "link",
    ];
}

/// Fixed extension sets backing category classification.
pub mod classify {
    /// Extensions classified as images.
    pub const IMAGE_EXTENSIONS: &[&str] = &[
        "jpg", "jpeg", "png", "gif", "bmp", "webp", "svg", "heic", "tif", "tiff", "ico",
    ];
    /// Extensions classified as videos.
    pub const VIDEO_EXTENSIONS: &[&str] = &[
        "mp4", "mkv", "avi", "mov", "wmv", "flv", "webm", "m4v", "mpg", "mpeg", "3gp",
    ];
    /// Extensions classified as audio.
    pub const AUDIO_EXTENSIONS: &[&str] = &[
        "mp3", "wav", "flac", "aac", "ogg", "m4a", "wma", "opus", "aiff",
    ];
    /// Extensions classified as documents.
    pub const DOCUMENT_EXTENSIONS: &[&str] = &[
        "pdf", "doc", "docx", "txt", "rtf", "odt", "xls", "xlsx", "ppt", "pptx", "csv", "md",
        "epub",
    ];
}
