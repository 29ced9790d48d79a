//! Projection of enriched entities onto their representation shapes.
//!
//! Each shape is built field by field from the entity and its computed links.

use crate::links::Link;
use crate::model::{Attachment, Patient};
use api_shared::{AttachmentFull, AttachmentSummary, LinkRes, PatientFull, PatientSummary};

fn wire_links(links: Vec<Link>) -> Vec<LinkRes> {
    links.into_iter().map(LinkRes::from).collect()
}

pub fn patient_summary(patient: Patient, links: Vec<Link>) -> PatientSummary {
    PatientSummary {
        id: patient.id,
        links: wire_links(links),
        name: patient.name,
        date_of_birth: patient.date_of_birth,
    }
}

pub fn patient_full(patient: Patient, links: Vec<Link>) -> PatientFull {
    PatientFull {
        id: patient.id,
        links: wire_links(links),
        name: patient.name,
        date_of_birth: patient.date_of_birth,
        sex: patient.sex,
        assigned_physician: patient.assigned_physician,
        clinical_notes: patient.clinical_notes,
    }
}

pub fn attachment_summary(attachment: Attachment, links: Vec<Link>) -> AttachmentSummary {
    AttachmentSummary {
        id: attachment.id,
        links: wire_links(links),
        name: attachment.name,
        media_type: attachment.media_type,
    }
}

pub fn attachment_full(attachment: Attachment, links: Vec<Link>) -> AttachmentFull {
    AttachmentFull {
        id: attachment.id,
        links: wire_links(links),
        name: attachment.name,
        media_type: attachment.media_type,
    }
}
