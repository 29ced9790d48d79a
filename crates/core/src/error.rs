use crate::model::EntityKind;
use uuid::Uuid;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: Uuid },

    // Integrity violations: the dataset itself is inconsistent.
    #[error("attachment {attachment_id} has no recorded owner")]
    MissingOwner { attachment_id: Uuid },
    #[error("attachment {attachment_id} is owned by unknown patient {owner_id}")]
    UnknownOwner { attachment_id: Uuid, owner_id: Uuid },
    #[error("attachment {attachment_id} has unregistered media type {media_type:?}")]
    UnknownMediaType {
        attachment_id: Uuid,
        media_type: String,
    },
    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: EntityKind, id: Uuid },

    #[error("static data error: {0}")]
    Files(#[from] analyzer_files::FilesError),
}

impl CoreError {
    /// Whether this error reports a corrupt dataset rather than a bad request.
    pub fn is_integrity_violation(&self) -> bool {
        matches!(
            self,
            CoreError::MissingOwner { .. }
                | CoreError::UnknownOwner { .. }
                | CoreError::UnknownMediaType { .. }
                | CoreError::DuplicateId { .. }
        )
    }
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
