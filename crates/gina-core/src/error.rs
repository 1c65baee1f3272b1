use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("patch must be a JSON object, got {0}")]
    PatchNotAnObject(&'static str),

    #[error("invalid uuid: {0}")]
    InvalidUuid(#[from] uuid::Error),
}
