//! Resource service.
//!
//! Every operation follows the same pipeline: fetch from the [`EntityStore`],
//! compute links, project to the requested shape. This module contains
//! **only** data operations; HTTP status mapping belongs in `api-rest`.

use crate::error::CoreResult;
use crate::links::{attachment_links, patient_links};
use crate::projection::{attachment_full, attachment_summary, patient_full, patient_summary};
use crate::store::EntityStore;
use api_shared::{AttachmentFull, AttachmentSummary, PatientFull, PatientSummary};
use std::sync::Arc;
use uuid::Uuid;

/// Read-only patient and attachment operations over an injected store.
#[derive(Clone)]
pub struct ResourceService {
    store: Arc<dyn EntityStore>,
}

impl ResourceService {
    /// Creates a new `ResourceService` reading from `store`.
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn EntityStore {
        self.store.as_ref()
    }

    /// Lists all patients in store order as summaries.
    ///
    /// # Returns
    ///
    /// An empty vector when the store holds no patients.
    pub fn list_patients(&self) -> CoreResult<Vec<PatientSummary>> {
        Ok(self
            .store
            .list_patients()?
            .into_iter()
            .map(|patient| {
                let links = patient_links(&patient);
                patient_summary(patient, links)
            })
            .collect())
    }

    /// Fetches one patient in full.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no patient has this id.
    pub fn get_patient(&self, id: Uuid) -> CoreResult<PatientFull> {
        let patient = self.store.get_patient(id)?;
        let links = patient_links(&patient);
        Ok(patient_full(patient, links))
    }

    /// Lists attachments in store order as summaries.
    ///
    /// When `owner_id` is given, only attachments whose ownership entry equals
    /// it are kept. An owner without attachments (or an unknown owner) yields
    /// an empty vector.
    ///
    /// # Errors
    ///
    /// Returns an integrity violation if any attachment cannot be enriched.
    pub fn list_attachments(&self, owner_id: Option<Uuid>) -> CoreResult<Vec<AttachmentSummary>> {
        let mut summaries = Vec::new();
        for attachment in self.store.list_attachments()? {
            let links = attachment_links(self.store(), &attachment)?;
            if let Some(owner_id) = owner_id {
                if self.store.owner_of(attachment.id)? != owner_id {
                    continue;
                }
            }
            summaries.push(attachment_summary(attachment, links));
        }
        Ok(summaries)
    }

    /// Fetches one attachment in full.
    ///
    /// # Errors
    ///
    /// Returns a `CoreError` if:
    /// - no attachment has this id (`NotFound`),
    /// - the attachment cannot be enriched (integrity violation).
    pub fn get_attachment(&self, id: Uuid) -> CoreResult<AttachmentFull> {
        let attachment = self.store.get_attachment(id)?;
        let links = attachment_links(self.store(), &attachment)?;
        Ok(attachment_full(attachment, links))
    }
}
