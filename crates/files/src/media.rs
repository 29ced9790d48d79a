//! Registered media types and their data file extensions.
//!
//! The table is bijective: every media type maps to exactly one extension and
//! every extension maps back to exactly one media type. Attachment `data`
//! links are built from the forward direction and the static data endpoint
//! derives its `Content-Type` from the reverse direction.

use crate::FALLBACK_MEDIA_TYPE;

/// `(media type, file extension)` pairs understood by the API.
///
/// The strings are part of the wire contract with existing clients and must
/// not be altered.
pub const MEDIA_TYPE_EXTENSIONS: &[(&str, &str)] = &[
    ("application/com.laralab.analysis-primitives+json", "json"),
    ("image/jpeg", "jpeg"),
    ("model/gltf+json", "gltf"),
];

/// Returns the file extension registered for `media_type`.
///
/// # Arguments
///
/// * `media_type` - MIME type identifier, compared exactly.
///
/// # Returns
///
/// `Some(extension)` without a leading dot, or `None` if the media type is not registered.
pub fn extension_for(media_type: &str) -> Option<&'static str> {
    MEDIA_TYPE_EXTENSIONS
        .iter()
        .find(|(registered, _)| *registered == media_type)
        .map(|(_, extension)| *extension)
}

/// Returns the media type registered for `extension` (without a leading dot).
pub fn media_type_for(extension: &str) -> Option<&'static str> {
    MEDIA_TYPE_EXTENSIONS
        .iter()
        .find(|(_, registered)| *registered == extension)
        .map(|(media_type, _)| *media_type)
}

/// Derives the media type of a data file from the extension of `file_name`.
///
/// The extension is everything after the last `.`. Names with no registered
/// extension fall back to [`FALLBACK_MEDIA_TYPE`].
pub fn media_type_for_file_name(file_name: &str) -> &'static str {
    file_name
        .rsplit_once('.')
        .and_then(|(_, extension)| media_type_for(extension))
        .unwrap_or(FALLBACK_MEDIA_TYPE)
}
