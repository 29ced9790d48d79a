//! Hypermedia link enrichment.
//!
//! Links are derived from an entity at response time and never stored. Each
//! function here is deterministic and returns links in a fixed order:
//!
//! | entity     | rel           | href                              |
//! |------------|---------------|-----------------------------------|
//! | patient    | `self`        | `/patients/{id}`                  |
//! | patient    | `attachments` | `/attachments/?owner_id={id}`     |
//! | attachment | `self`        | `/attachments/{id}`               |
//! | attachment | `data`        | `/static/data/{id}.{extension}`   |
//! | attachment | `owner`       | `/patients/{owner_id}`            |
//!
//! All links are followed with `GET`. Consumers must not rely on the order.

use crate::constants::{ATTACHMENTS_PATH, OWNER_ID_PARAM, PATIENTS_PATH, STATIC_DATA_PATH};
use crate::error::{CoreError, CoreResult};
use crate::model::{Attachment, Patient};
use crate::store::EntityStore;
use analyzer_files::extension_for;
use api_shared::{LinkMethod, LinkRes};
use uuid::Uuid;

pub const REL_SELF: &str = "self";
pub const REL_ATTACHMENTS: &str = "attachments";
pub const REL_DATA: &str = "data";
pub const REL_OWNER: &str = "owner";

/// A navigable relation from one representation to another resource.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub rel: &'static str,
    pub href: String,
    pub method: LinkMethod,
}

impl Link {
    fn get(rel: &'static str, href: String) -> Self {
        Self {
            rel,
            href,
            method: LinkMethod::Get,
        }
    }
}

impl From<Link> for LinkRes {
    fn from(link: Link) -> Self {
        LinkRes {
            rel: link.rel.to_string(),
            href: link.href,
            method: link.method,
        }
    }
}

/// Path of a single patient.
pub fn patient_path(id: Uuid) -> String {
    format!("{PATIENTS_PATH}/{id}")
}

/// Path of a single attachment.
pub fn attachment_path(id: Uuid) -> String {
    format!("{ATTACHMENTS_PATH}/{id}")
}

/// Path of the attachment listing filtered to one owner.
pub fn attachments_by_owner_path(owner_id: Uuid) -> String {
    format!("{ATTACHMENTS_PATH}/?{OWNER_ID_PARAM}={owner_id}")
}

/// Path of the raw data file for an attachment, or `None` if its media type
/// is not registered.
pub fn attachment_data_path(attachment: &Attachment) -> Option<String> {
    extension_for(&attachment.media_type)
        .map(|extension| format!("{STATIC_DATA_PATH}/{}.{extension}", attachment.id))
}

/// Links for a patient: `self`, then `attachments`.
pub fn patient_links(patient: &Patient) -> Vec<Link> {
    vec![
        Link::get(REL_SELF, patient_path(patient.id)),
        Link::get(REL_ATTACHMENTS, attachments_by_owner_path(patient.id)),
    ]
}

/// Links for an attachment: `self`, `data`, then `owner`.
///
/// The owner is looked up through `store`.
///
/// # Errors
///
/// Returns an integrity violation if:
/// - the media type is not registered ([`CoreError::UnknownMediaType`]),
/// - the store records no owner ([`CoreError::MissingOwner`]).
pub fn attachment_links(store: &dyn EntityStore, attachment: &Attachment) -> CoreResult<Vec<Link>> {
    let data_path = attachment_data_path(attachment).ok_or_else(|| CoreError::UnknownMediaType {
        attachment_id: attachment.id,
        media_type: attachment.media_type.clone(),
    })?;
    let owner_id = store.owner_of(attachment.id)?;

    Ok(vec![
        Link::get(REL_SELF, attachment_path(attachment.id)),
        Link::get(REL_DATA, data_path),
        Link::get(REL_OWNER, patient_path(owner_id)),
    ])
}
