/// Default directory (relative to the working directory) holding attachment data files.
pub const DEFAULT_STATIC_DATA_DIR: &str = "static/data";

/// Media type served when a file extension is not registered.
pub const FALLBACK_MEDIA_TYPE: &str = "application/octet-stream";
