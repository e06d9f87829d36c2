use thiserror::Error;

use crate::domain::modal::ModalMode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("domain validation failed: `{field}` must not be blank")]
    Blank { field: &'static str },
    #[error("modal cannot move from {from:?} to {to:?}")]
    InvalidTransition { from: ModalMode, to: ModalMode },
}

impl DomainError {
    pub fn blank(field: &'static str) -> Self {
        Self::Blank { field }
    }

    pub fn invalid_transition(from: ModalMode, to: ModalMode) -> Self {
        Self::InvalidTransition { from, to }
    }
}
