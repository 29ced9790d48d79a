//! # Analyzer Core
//!
//! Core logic for the Heart Analyzer API.
//!
//! This crate contains pure data operations:
//! - The [`EntityStore`] abstraction and the seeded [`InMemoryStore`]
//! - Hypermedia link enrichment ([`links`])
//! - The [`ResourceService`] that fetches, enriches and projects resources
//!
//! **No API concerns**: HTTP routing, status codes and serialisation belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod links;
pub mod model;
pub mod projection;
pub mod seed;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use model::{Attachment, EntityKind, Patient};
pub use seed::seeded_store;
pub use service::ResourceService;
pub use store::{EntityStore, InMemoryStore};
