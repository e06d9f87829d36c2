use thiserror::Error;

use crate::{
    application::ports::ResourceError,
    domain::{entities::RecordId, error::DomainError, modal::ModalMode},
    infra::error::InfraError,
};

/// User-observable failure of a controller operation. The display text is the
/// localized message shown in the banner or inside the open dialog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControllerError {
    /// Listing failed; the previous canonical list is kept.
    #[error("{message}")]
    FetchFailed { message: String },
    /// Create or update failed; the dialog stays open with its draft.
    #[error("{message}")]
    MutationFailed { mode: ModalMode, message: String },
    /// Delete failed; the canonical list is unchanged.
    #[error("{message}")]
    DeleteFailed { message: String },
    /// The draft was rejected before any request was sent.
    #[error("{message}")]
    Validation { field: &'static str, message: String },
}

impl ControllerError {
    pub fn message(&self) -> &str {
        match self {
            Self::FetchFailed { message }
            | Self::MutationFailed { message, .. }
            | Self::DeleteFailed { message }
            | Self::Validation { message, .. } => message,
        }
    }
}

/// Failure of one console invocation.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Infra(#[from] InfraError),
    #[error(transparent)]
    Resource(#[from] ResourceError),
    #[error(transparent)]
    Controller(#[from] ControllerError),
    /// A dialog could not be opened from the current one.
    #[error("{message}")]
    Transition {
        message: String,
        #[source]
        source: DomainError,
    },
    #[error("{message} ({id})")]
    NotFound { id: RecordId, message: String },
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl AppError {
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::Unexpected(message.into())
    }
}
