//! Demonstration dataset loaded at process start.

use crate::error::{CoreError, CoreResult};
use crate::model::{Attachment, Patient};
use crate::store::InMemoryStore;
use api_shared::Sex;
use chrono::NaiveDate;
use uuid::Uuid;

pub const JOHN_DOE_ID: Uuid = Uuid::from_u128(0x930471cd_b69f_40a8_be5c_5205c56feade);
pub const JANE_DOE_ID: Uuid = Uuid::from_u128(0x26c6f92e_e693_448d_aca1_0ec042ac0f82);

pub const MITRAL_ANNULUS_MEASUREMENTS_ID: Uuid =
    Uuid::from_u128(0xeb635c2c_d485_4f1f_af6f_64098f57010e);
pub const SADDLE_SHAPE_SCREENSHOT_ID: Uuid =
    Uuid::from_u128(0x2d687456_15bc_4e68_9f43_be9194ca03aa);
pub const ANATOMICAL_MODEL_ID: Uuid = Uuid::from_u128(0x0ba22873_912d_4ca8_a3aa_2c71ca246248);

fn date(year: i32, month: u32, day: u32) -> CoreResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        CoreError::InvalidInput(format!("invalid date {year:04}-{month:02}-{day:02}"))
    })
}

/// Builds the seeded [`InMemoryStore`] with two patients and three attachments.
///
/// # Errors
///
/// Returns a `CoreError` if the seed data fails the store's integrity check.
pub fn seeded_store() -> CoreResult<InMemoryStore> {
    let patients = vec![
        Patient {
            id: JOHN_DOE_ID,
            name: "John Doe".into(),
            date_of_birth: date(1960, 7, 15)?,
            sex: Sex::Male,
            assigned_physician: Some("Dr. Carla Clipper".into()),
            clinical_notes: Some("Echo shows severe mitral stenosis.".into()),
        },
        Patient {
            id: JANE_DOE_ID,
            name: "Jane Doe".into(),
            date_of_birth: date(1964, 3, 3)?,
            sex: Sex::Female,
            assigned_physician: Some("Dr. Tom Tavi".into()),
            clinical_notes: None,
        },
    ];

    let attachments = vec![
        Attachment {
            id: MITRAL_ANNULUS_MEASUREMENTS_ID,
            name: "measurements/mitral-annulus".into(),
            media_type: "application/com.laralab.analysis-primitives+json".into(),
        },
        Attachment {
            id: SADDLE_SHAPE_SCREENSHOT_ID,
            name: "screenshot/mitral-annulus/saddle-shape".into(),
            media_type: "image/jpeg".into(),
        },
        Attachment {
            id: ANATOMICAL_MODEL_ID,
            name: "3d-model/anatomical".into(),
            media_type: "model/gltf+json".into(),
        },
    ];

    let ownership = vec![
        (MITRAL_ANNULUS_MEASUREMENTS_ID, JOHN_DOE_ID),
        (SADDLE_SHAPE_SCREENSHOT_ID, JOHN_DOE_ID),
        (ANATOMICAL_MODEL_ID, JANE_DOE_ID),
    ];

    InMemoryStore::new(patients, attachments, ownership)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::EntityStore;

    #[test]
    fn seed_passes_integrity_check() {
        let store = seeded_store().expect("seed is consistent");
        assert_eq!(store.list_patients().unwrap().len(), 2);
        assert_eq!(store.list_attachments().unwrap().len(), 3);
    }

    #[test]
    fn seed_ids_match_canonical_text() {
        assert_eq!(
            JOHN_DOE_ID.to_string(),
            "930471cd-b69f-40a8-be5c-5205c56feade"
        );
        assert_eq!(
            ANATOMICAL_MODEL_ID.to_string(),
            "0ba22873-912d-4ca8-a3aa-2c71ca246248"
        );
    }

    #[test]
    fn every_attachment_owner_is_a_known_patient() {
        let store = seeded_store().unwrap();
        for attachment in store.list_attachments().unwrap() {
            let owner = store.owner_of(attachment.id).unwrap();
            assert!(store.get_patient(owner).is_ok());
        }
    }
}
