//! Resource representations returned by the API.
//!
//! Every entity is served in one of two shapes:
//! - a *summary*, used in collection listings, carrying a reduced attribute set
//! - a *full* representation, used when a single entity is requested
//!
//! Both shapes carry the entity `id` and the hypermedia `links` computed for the
//! response. Shapes are separate record types; a summary is never a full
//! representation with fields blanked out.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// HTTP method a link must be followed with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum LinkMethod {
    Get,
    Post,
}

/// Named reference to other entities within the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LinkRes {
    /// Relation name, e.g. `self`, `attachments`, `data`, `owner`.
    pub rel: String,
    /// Target path, possibly with a query string.
    pub href: String,
    pub method: LinkMethod,
}

/// Administrative sex of a patient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

/// Patient as listed in collections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PatientSummary {
    pub id: Uuid,
    pub links: Vec<LinkRes>,
    pub name: String,
    pub date_of_birth: NaiveDate,
}

/// Patient with all attributes.
///
/// `assigned_physician` and `clinical_notes` are always serialised, as `null`
/// when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PatientFull {
    pub id: Uuid,
    pub links: Vec<LinkRes>,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub sex: Sex,
    pub assigned_physician: Option<String>,
    pub clinical_notes: Option<String>,
}

/// A piece of data attached to a patient in the course of an analysis, as listed in collections.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttachmentSummary {
    pub id: Uuid,
    pub links: Vec<LinkRes>,
    /// Path-like label, e.g. `measurements/mitral-annulus`.
    pub name: String,
    pub media_type: String,
}

/// Attachment with all attributes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttachmentFull {
    pub id: Uuid,
    pub links: Vec<LinkRes>,
    pub name: String,
    pub media_type: String,
}

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Error body returned with non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub status: String,
    pub message: String,
}
