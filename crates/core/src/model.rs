//! Domain entities held by the entity store.
//!
//! Entities carry only their own attributes. Links are never stored on an
//! entity; they are computed per response by [`crate::links`]. Ownership of
//! attachments is a separate relation kept by the store.

use api_shared::Sex;
use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

/// The kinds of entity the store holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Patient,
    Attachment,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Patient => write!(f, "patient"),
            EntityKind::Attachment => write!(f, "attachment"),
        }
    }
}

/// A patient under analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub date_of_birth: NaiveDate,
    pub sex: Sex,
    pub assigned_physician: Option<String>,
    pub clinical_notes: Option<String>,
}

/// A piece of data attached to a patient in the course of an analysis.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attachment {
    pub id: Uuid,
    /// Path-like label, e.g. `screenshot/mitral-annulus/saddle-shape`.
    pub name: String,
    /// MIME type; must be registered in [`analyzer_files::MEDIA_TYPE_EXTENSIONS`].
    pub media_type: String,
}
