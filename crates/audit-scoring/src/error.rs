use audit_core::error::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error(transparent)]
    Core(#[from] CoreError),
}
