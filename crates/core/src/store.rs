//! Entity store.
//!
//! The [`EntityStore`] trait is the only way handlers reach patient and
//! attachment data. Callers hold it as `Arc<dyn EntityStore>`, so a different
//! backing store can be substituted without touching them.
//!
//! [`InMemoryStore`] is the implementation used by the server: built once at
//! process start from the seed dataset and never mutated afterwards, which lets
//! concurrent requests read it without locking.

use crate::error::{CoreError, CoreResult};
use crate::model::{Attachment, EntityKind, Patient};
use analyzer_files::extension_for;
use std::collections::HashMap;
use uuid::Uuid;

/// Read access to patients, attachments and the attachment ownership relation.
pub trait EntityStore: Send + Sync {
    /// Fetch one patient.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no patient has this id.
    fn get_patient(&self, id: Uuid) -> CoreResult<Patient>;

    /// All patients, in insertion order.
    fn list_patients(&self) -> CoreResult<Vec<Patient>>;

    /// Fetch one attachment.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] if no attachment has this id.
    fn get_attachment(&self, id: Uuid) -> CoreResult<Attachment>;

    /// All attachments, in insertion order.
    fn list_attachments(&self) -> CoreResult<Vec<Attachment>>;

    /// Id of the patient owning `attachment_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingOwner`] if the ownership relation has no entry
    /// for the attachment. This is an integrity violation, not a user error.
    fn owner_of(&self, attachment_id: Uuid) -> CoreResult<Uuid>;
}

trait Identified {
    const KIND: EntityKind;

    fn id(&self) -> Uuid;
}

impl Identified for Patient {
    const KIND: EntityKind = EntityKind::Patient;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Identified for Attachment {
    const KIND: EntityKind = EntityKind::Attachment;

    fn id(&self) -> Uuid {
        self.id
    }
}

/// Insertion-ordered rows with an id index.
#[derive(Clone, Debug)]
struct Table<T> {
    rows: Vec<T>,
    index: HashMap<Uuid, usize>,
}

impl<T: Identified + Clone> Table<T> {
    fn from_rows(rows: Vec<T>) -> CoreResult<Self> {
        let mut index = HashMap::with_capacity(rows.len());
        for (position, row) in rows.iter().enumerate() {
            if index.insert(row.id(), position).is_some() {
                return Err(CoreError::DuplicateId {
                    kind: T::KIND,
                    id: row.id(),
                });
            }
        }
        Ok(Self { rows, index })
    }

    fn get(&self, id: Uuid) -> CoreResult<T> {
        self.index
            .get(&id)
            .map(|&position| self.rows[position].clone())
            .ok_or(CoreError::NotFound { kind: T::KIND, id })
    }

    fn contains(&self, id: Uuid) -> bool {
        self.index.contains_key(&id)
    }
}

/// Immutable in-memory [`EntityStore`].
#[derive(Clone, Debug)]
pub struct InMemoryStore {
    patients: Table<Patient>,
    attachments: Table<Attachment>,
    ownership: HashMap<Uuid, Uuid>,
}

impl InMemoryStore {
    /// Builds a store and checks its integrity.
    ///
    /// # Arguments
    ///
    /// * `patients` - Patients in listing order.
    /// * `attachments` - Attachments in listing order.
    /// * `ownership` - `(attachment id, owning patient id)` pairs.
    ///
    /// # Errors
    ///
    /// Returns a `CoreError` if:
    /// - an id appears twice within patients, attachments, or the ownership relation,
    /// - an attachment has no owner, or its owner is not a known patient,
    /// - an attachment's media type is not registered.
    pub fn new(
        patients: Vec<Patient>,
        attachments: Vec<Attachment>,
        ownership: Vec<(Uuid, Uuid)>,
    ) -> CoreResult<Self> {
        let store = Self::without_integrity_check(patients, attachments, ownership)?;
        store.check_integrity()?;
        Ok(store)
    }

    /// Builds a store without checking ownership or media types.
    ///
    /// Duplicate ids are still rejected. Integrity violations in the data
    /// surface later, when links for the affected attachment are computed.
    pub fn without_integrity_check(
        patients: Vec<Patient>,
        attachments: Vec<Attachment>,
        ownership: Vec<(Uuid, Uuid)>,
    ) -> CoreResult<Self> {
        let mut owners = HashMap::with_capacity(ownership.len());
        for (attachment_id, owner_id) in ownership {
            if owners.insert(attachment_id, owner_id).is_some() {
                return Err(CoreError::DuplicateId {
                    kind: EntityKind::Attachment,
                    id: attachment_id,
                });
            }
        }

        Ok(Self {
            patients: Table::from_rows(patients)?,
            attachments: Table::from_rows(attachments)?,
            ownership: owners,
        })
    }

    /// Checks that every attachment has a registered media type and exactly one
    /// owner that exists in the patient table.
    pub fn check_integrity(&self) -> CoreResult<()> {
        for attachment in &self.attachments.rows {
            let owner_id =
                *self
                    .ownership
                    .get(&attachment.id)
                    .ok_or(CoreError::MissingOwner {
                        attachment_id: attachment.id,
                    })?;

            if !self.patients.contains(owner_id) {
                return Err(CoreError::UnknownOwner {
                    attachment_id: attachment.id,
                    owner_id,
                });
            }

            if extension_for(&attachment.media_type).is_none() {
                return Err(CoreError::UnknownMediaType {
                    attachment_id: attachment.id,
                    media_type: attachment.media_type.clone(),
                });
            }
        }

        for attachment_id in self.ownership.keys() {
            if !self.attachments.contains(*attachment_id) {
                tracing::warn!(%attachment_id, "ownership entry for unknown attachment");
            }
        }

        Ok(())
    }
}

impl EntityStore for InMemoryStore {
    fn get_patient(&self, id: Uuid) -> CoreResult<Patient> {
        self.patients.get(id)
    }

    fn list_patients(&self) -> CoreResult<Vec<Patient>> {
        Ok(self.patients.rows.clone())
    }

    fn get_attachment(&self, id: Uuid) -> CoreResult<Attachment> {
        self.attachments.get(id)
    }

    fn list_attachments(&self) -> CoreResult<Vec<Attachment>> {
        Ok(self.attachments.rows.clone())
    }

    fn owner_of(&self, attachment_id: Uuid) -> CoreResult<Uuid> {
        self.ownership
            .get(&attachment_id)
            .copied()
            .ok_or(CoreError::MissingOwner { attachment_id })
    }
}
