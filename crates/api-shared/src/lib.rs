//! # API Shared
//!
//! Shared representation types for the Heart Analyzer API.
//!
//! Contains:
//! - Resource representations in summary and full shapes (`resources` module)
//! - Shared services like `HealthService`
//!
//! Used by `analyzer-core` to build responses and by `api-rest` and `analyzer-cli` to serve them.

pub mod health;
pub mod resources;

pub use health::HealthService;
pub use resources::*;
