use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown audit type: {0}")]
    UnknownAuditType(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
