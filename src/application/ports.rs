//! Collaborator traits describing what the collection controller needs from
//! the outside: the remote collection, a confirmation prompt and a toast sink.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{CollectionItem, RecordId};

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("failed to decode response body: {0}")]
    Decode(String),
    #[error("invalid resource URL: {0}")]
    Url(String),
}

impl ResourceError {
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    pub fn decode(err: impl std::fmt::Display) -> Self {
        Self::Decode(err.to_string())
    }
}

/// Status code of a remote call, with the decoded body when one was returned.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply<T> {
    pub status: u16,
    pub body: Option<T>,
}

impl<T> Reply<T> {
    pub fn new(status: u16, body: T) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self { status, body: None }
    }

    pub fn status_in(&self, accepted: &[u16]) -> bool {
        accepted.contains(&self.status)
    }
}

/// Remote source of truth for one collection.
#[async_trait]
pub trait CollectionResource<T: CollectionItem>: Send + Sync {
    async fn list(&self) -> Result<Reply<Vec<T>>, ResourceError>;

    async fn create(&self, body: &T::Write) -> Result<Reply<T>, ResourceError>;

    async fn update(&self, id: &RecordId, body: &T::Write) -> Result<Reply<T>, ResourceError>;

    async fn delete(&self, id: &RecordId) -> Result<u16, ResourceError>;
}

/// Asks the user before a destructive operation. May suspend on user input.
#[async_trait]
pub trait Confirm: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    Create,
    Update,
    Delete,
    #[default]
    Default,
}

impl ToastVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Default => "default",
        }
    }
}

/// Fire-and-forget user notification.
pub trait Notify: Send + Sync {
    fn notify(&self, message: &str, variant: ToastVariant);
}
