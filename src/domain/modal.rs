//! Lifecycle of one create/show/edit dialog.
//!
//! Allowed transitions:
//!
//! ```text
//! Closed -> Create -> Closed
//! Closed -> Show -> Edit -> Closed
//! Closed -> Show -> Closed
//! Closed -> Edit -> Closed
//! ```
//!
//! Any session may be closed. Create never becomes Edit.

use crate::domain::{entities::CollectionItem, error::DomainError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Closed,
    Show,
    Create,
    Edit,
}

/// The open dialog, if any. The record held by `Show`/`Edit` is a copy taken
/// when the dialog opened; editing the draft never touches the canonical list.
#[derive(Debug, Clone)]
pub enum ModalSession<T: CollectionItem> {
    Closed,
    Show { record: T },
    Create { draft: T::Draft },
    Edit { record: T, draft: T::Draft },
}

impl<T: CollectionItem> Default for ModalSession<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T: CollectionItem> ModalSession<T> {
    pub fn mode(&self) -> ModalMode {
        match self {
            Self::Closed => ModalMode::Closed,
            Self::Show { .. } => ModalMode::Show,
            Self::Create { .. } => ModalMode::Create,
            Self::Edit { .. } => ModalMode::Edit,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn record(&self) -> Option<&T> {
        match self {
            Self::Show { record } | Self::Edit { record, .. } => Some(record),
            Self::Closed | Self::Create { .. } => None,
        }
    }

    pub fn draft(&self) -> Option<&T::Draft> {
        match self {
            Self::Create { draft } | Self::Edit { draft, .. } => Some(draft),
            Self::Closed | Self::Show { .. } => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut T::Draft> {
        match self {
            Self::Create { draft } | Self::Edit { draft, .. } => Some(draft),
            Self::Closed | Self::Show { .. } => None,
        }
    }

    pub fn open_create(&mut self) -> Result<(), DomainError> {
        self.ensure_from(ModalMode::Create, &[ModalMode::Closed])?;
        *self = Self::Create {
            draft: T::Draft::default(),
        };
        Ok(())
    }

    pub fn open_show(&mut self, record: T) -> Result<(), DomainError> {
        self.ensure_from(ModalMode::Show, &[ModalMode::Closed])?;
        *self = Self::Show { record };
        Ok(())
    }

    pub fn open_edit(&mut self, record: T) -> Result<(), DomainError> {
        self.ensure_from(ModalMode::Edit, &[ModalMode::Closed, ModalMode::Show])?;
        let draft = record.draft();
        *self = Self::Edit { record, draft };
        Ok(())
    }

    /// Drop the session and its draft. Safe from any mode.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    fn ensure_from(&self, to: ModalMode, allowed: &[ModalMode]) -> Result<(), DomainError> {
        let from = self.mode();
        if allowed.contains(&from) {
            Ok(())
        } else {
            Err(DomainError::invalid_transition(from, to))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{CategoryDraft, CategoryRecord, RecordId};

    fn category(id: i64, name: &str) -> CategoryRecord {
        CategoryRecord {
            id: RecordId::Number(id),
            name: name.into(),
            created_at: Some("2024-01-01".into()),
        }
    }

    #[test]
    fn create_starts_with_blank_draft() {
        let mut session = ModalSession::<CategoryRecord>::default();
        session.open_create().expect("open create");
        assert_eq!(session.mode(), ModalMode::Create);
        assert_eq!(session.draft(), Some(&CategoryDraft::default()));
        assert!(session.record().is_none());
    }

    #[test]
    fn show_then_edit_prefills_draft() {
        let mut session = ModalSession::default();
        session.open_show(category(1, "Tech")).expect("open show");
        assert!(session.draft().is_none());

        session.open_edit(category(1, "Tech")).expect("show -> edit");
        assert_eq!(session.mode(), ModalMode::Edit);
        assert_eq!(session.draft().map(|d| d.name.as_str()), Some("Tech"));
    }

    #[test]
    fn editing_draft_leaves_selected_record_alone() {
        let mut session = ModalSession::default();
        session.open_edit(category(1, "Tech")).expect("open edit");
        if let Some(draft) = session.draft_mut() {
            draft.name = "Technology".into();
        }
        assert_eq!(session.record().map(|r| r.name.as_str()), Some("Tech"));
        assert_eq!(session.draft().map(|d| d.name.as_str()), Some("Technology"));
    }

    #[test]
    fn create_never_becomes_edit() {
        let mut session = ModalSession::default();
        session.open_create().expect("open create");
        let err = session.open_edit(category(1, "Tech")).expect_err("create -> edit");
        assert_eq!(
            err,
            DomainError::invalid_transition(ModalMode::Create, ModalMode::Edit)
        );
        assert_eq!(session.mode(), ModalMode::Create);
    }

    #[test]
    fn open_sessions_cannot_be_replaced() {
        let mut session = ModalSession::default();
        session.open_show(category(1, "Tech")).expect("open show");
        assert!(session.open_create().is_err());
        assert!(session.open_show(category(2, "Sports")).is_err());
        assert_eq!(session.record().map(|r| r.id.clone()), Some(RecordId::Number(1)));
    }

    #[test]
    fn close_is_idempotent_from_every_mode() {
        let mut session = ModalSession::<CategoryRecord>::default();
        session.close();
        assert_eq!(session.mode(), ModalMode::Closed);

        session.open_create().expect("open create");
        session.close();
        session.close();
        assert_eq!(session.mode(), ModalMode::Closed);
        assert!(session.draft().is_none());

        session.open_edit(category(3, "Art")).expect("open edit");
        session.close();
        assert!(!session.is_open());
    }
}
