//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into
//! services and handlers. Request handling never reads environment variables.

use crate::constants::{DEFAULT_DOCS_PATH, DEFAULT_REST_ADDR};
use crate::{CoreError, CoreResult};
use analyzer_files::DEFAULT_STATIC_DATA_DIR;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    static_data_dir: PathBuf,
    docs_path: String,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidInput` if `docs_path` is not an absolute URL
    /// path, or is the API root itself.
    pub fn new(static_data_dir: PathBuf, docs_path: String) -> CoreResult<Self> {
        if !docs_path.starts_with('/') || docs_path == "/" {
            return Err(CoreError::InvalidInput(format!(
                "docs path must be an absolute path other than '/': {docs_path:?}"
            )));
        }

        Ok(Self {
            static_data_dir,
            docs_path,
        })
    }

    pub fn static_data_dir(&self) -> &Path {
        &self.static_data_dir
    }

    pub fn docs_path(&self) -> &str {
        &self.docs_path
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parse the REST listen address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_REST_ADDR`].
pub fn rest_addr_from_env_value(value: Option<String>) -> CoreResult<SocketAddr> {
    let value = non_empty(value).unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());
    value
        .parse()
        .map_err(|e| CoreError::InvalidInput(format!("invalid listen address {value:?}: {e}")))
}

/// Parse the documentation path from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_DOCS_PATH`].
pub fn docs_path_from_env_value(value: Option<String>) -> String {
    non_empty(value).unwrap_or_else(|| DEFAULT_DOCS_PATH.to_string())
}

/// Resolve the static data directory without reading environment variables.
///
/// If `override_dir` is provided, it must be a directory. Otherwise this looks
/// for `static/data/` relative to the current working directory and then walks
/// up from `CARGO_MANIFEST_DIR`.
pub fn resolve_static_data_dir(override_dir: Option<PathBuf>) -> CoreResult<PathBuf> {
    if let Some(dir) = override_dir {
        if dir.is_dir() {
            return Ok(dir);
        }
        return Err(CoreError::InvalidInput(format!(
            "ANALYZER_STATIC_DATA_DIR override is not a directory: {}",
            dir.display()
        )));
    }

    let cwd_relative = PathBuf::from(DEFAULT_STATIC_DATA_DIR);
    if cwd_relative.is_dir() {
        return Ok(cwd_relative);
    }

    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    for ancestor in manifest_dir.ancestors() {
        let candidate = ancestor.join(DEFAULT_STATIC_DATA_DIR);
        if candidate.is_dir() {
            return Ok(candidate);
        }
    }

    Err(CoreError::InvalidInput(format!(
        "could not locate {DEFAULT_STATIC_DATA_DIR}/ directory"
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn new_rejects_relative_docs_path() {
        let err = CoreConfig::new(PathBuf::from("static/data"), "docs".into()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(_)));

        assert!(CoreConfig::new(PathBuf::from("static/data"), "/".into()).is_err());
    }

    #[test]
    fn new_keeps_values() {
        let cfg = CoreConfig::new(PathBuf::from("static/data"), "/docs".into()).unwrap();
        assert_eq!(cfg.static_data_dir(), Path::new("static/data"));
        assert_eq!(cfg.docs_path(), "/docs");
    }

    #[test]
    fn rest_addr_defaults_when_unset_or_blank() {
        let expected: SocketAddr = DEFAULT_REST_ADDR.parse().unwrap();
        assert_eq!(rest_addr_from_env_value(None).unwrap(), expected);
        assert_eq!(rest_addr_from_env_value(Some("  ".into())).unwrap(), expected);
    }

    #[test]
    fn rest_addr_parses_and_rejects() {
        assert_eq!(
            rest_addr_from_env_value(Some("127.0.0.1:9000".into())).unwrap(),
            "127.0.0.1:9000".parse::<SocketAddr>().unwrap()
        );
        assert!(rest_addr_from_env_value(Some("localhost".into())).is_err());
    }

    #[test]
    fn docs_path_defaults() {
        assert_eq!(docs_path_from_env_value(None), "/docs");
        assert_eq!(docs_path_from_env_value(Some("/swagger".into())), "/swagger");
    }

    #[test]
    fn static_dir_override_must_exist() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            resolve_static_data_dir(Some(temp.path().to_path_buf())).unwrap(),
            temp.path()
        );

        let missing = temp.path().join("missing");
        assert!(resolve_static_data_dir(Some(missing)).is_err());
    }
}
