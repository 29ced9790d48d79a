//! Constants used throughout the analyzer core crate.
//!
//! Route prefixes live here so that the link enricher and the HTTP router
//! agree on every path.

/// Default REST listen address when no explicit address is configured.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:8000";

/// Default documentation path the API root redirects to.
pub const DEFAULT_DOCS_PATH: &str = "/docs";

/// Path of the OpenAPI document.
pub const OPENAPI_JSON_PATH: &str = "/openapi.json";

/// Collection path for patients.
pub const PATIENTS_PATH: &str = "/patients";

/// Collection path for attachments.
pub const ATTACHMENTS_PATH: &str = "/attachments";

/// Path prefix under which raw attachment data files are served.
pub const STATIC_DATA_PATH: &str = "/static/data";

/// Query parameter filtering attachments by owning patient.
pub const OWNER_ID_PARAM: &str = "owner_id";
