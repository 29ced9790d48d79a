//! Heart Analyzer static data files
//!
//! This crate owns everything the API knows about raw attachment content:
//!
//! - the registered media types and their file extensions ([`media`])
//! - read-only access to the directory holding the data files ([`StaticDataService`])
//!
//! ## Example Usage
//!
//! ```no_run
//! use analyzer_files::StaticDataService;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let service = StaticDataService::new(Path::new("static/data"))?;
//! let file = service.read("eb635c2c-d485-4f1f-af6f-64098f57010e.json")?;
//! assert_eq!(file.media_type, "application/com.laralab.analysis-primitives+json");
//! # Ok(())
//! # }
//! ```

mod constants;
mod files;
pub mod media;

pub use constants::{DEFAULT_STATIC_DATA_DIR, FALLBACK_MEDIA_TYPE};
pub use files::{StaticDataService, StaticFile};
pub use media::{extension_for, media_type_for, media_type_for_file_name, MEDIA_TYPE_EXTENSIONS};

/// Errors that can occur during static file operations
#[derive(Debug, thiserror::Error)]
pub enum FilesError {
    /// Root directory does not exist or is not a directory
    #[error("Invalid root directory: {0}")]
    InvalidRootDirectory(String),

    /// Requested name is not a single safe path component
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// No file with the requested name exists
    #[error("File not found: {0}")]
    NotFound(String),

    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
