//! Static attachment data files.
//!
//! Raw attachment content (measurement JSON, screenshots, 3D models) lives as
//! flat files in a single directory, named `<attachment id>.<extension>`:
//!
//! ```text
//! static/data/
//! ├── eb635c2c-d485-4f1f-af6f-64098f57010e.json
//! ├── 2d687456-15bc-4e68-9f43-be9194ca03aa.jpeg
//! └── 0ba22873-912d-4ca8-a3aa-2c71ca246248.gltf
//! ```
//!
//! # Security Model
//!
//! - The root directory is canonicalised and validated at construction time
//! - Requested names must be a single plain path component (no separators,
//!   no `..`, no hidden files), so reads cannot escape the root

use crate::media::media_type_for_file_name;
use crate::FilesError;
use std::fs;
use std::path::{Path, PathBuf};

/// A data file read from the static directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    /// Name the file was requested by.
    pub file_name: String,

    /// Media type derived from the file extension.
    pub media_type: &'static str,

    /// Raw file content.
    pub bytes: Vec<u8>,
}

/// Read-only access to the directory of attachment data files.
#[derive(Debug, Clone)]
pub struct StaticDataService {
    root_directory: PathBuf,
}

impl StaticDataService {
    /// Creates a new `StaticDataService` rooted at `root_directory`.
    ///
    /// # Errors
    ///
    /// Returns `FilesError::InvalidRootDirectory` if:
    /// - the directory does not exist,
    /// - the path is not a directory,
    /// - the path cannot be canonicalised.
    pub fn new(root_directory: &Path) -> Result<Self, FilesError> {
        if !root_directory.exists() {
            return Err(FilesError::InvalidRootDirectory(format!(
                "Directory does not exist: {}",
                root_directory.display()
            )));
        }

        if !root_directory.is_dir() {
            return Err(FilesError::InvalidRootDirectory(format!(
                "Path is not a directory: {}",
                root_directory.display()
            )));
        }

        let root_directory = root_directory.canonicalize().map_err(|e| {
            FilesError::InvalidRootDirectory(format!(
                "Cannot canonicalize path {}: {}",
                root_directory.display(),
                e
            ))
        })?;

        Ok(Self { root_directory })
    }

    /// Canonical root directory this service reads from.
    pub fn root_directory(&self) -> &Path {
        &self.root_directory
    }

    /// Reads the data file called `file_name`.
    ///
    /// The media type comes from the registered extension table and falls back
    /// to `application/octet-stream` for unknown extensions; an unknown
    /// extension is not an error.
    ///
    /// # Errors
    ///
    /// Returns `FilesError` if:
    /// - `file_name` is not a single safe path component (`InvalidPath`),
    /// - no such file exists in the root directory (`NotFound`),
    /// - the file cannot be read (`Io`).
    pub fn read(&self, file_name: &str) -> Result<StaticFile, FilesError> {
        validate_file_name(file_name)?;

        let path = self.root_directory.join(file_name);
        if !path.is_file() {
            return Err(FilesError::NotFound(file_name.to_string()));
        }

        let bytes = fs::read(&path).map_err(|e| {
            FilesError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read file from {}: {}", path.display(), e),
            ))
        })?;

        tracing::debug!(file_name, size = bytes.len(), "read static data file");

        Ok(StaticFile {
            file_name: file_name.to_string(),
            media_type: media_type_for_file_name(file_name),
            bytes,
        })
    }
}

fn validate_file_name(file_name: &str) -> Result<(), FilesError> {
    let unsafe_name = file_name.is_empty()
        || file_name.starts_with('.')
        || file_name.contains(['/', '\\', '\0']);

    if unsafe_name {
        return Err(FilesError::InvalidPath(file_name.to_string()));
    }
    Ok(())
}
