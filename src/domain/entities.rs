//! Collection items managed by the admin console.

use std::fmt;

use serde::Serialize;

pub use blogdesk_api_types::{
    CategoryRecord, CategoryWriteRequest, PostRecord, PostWriteRequest, RecordId,
};

use crate::domain::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Post,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Post => "post",
        }
    }
}

/// A record of a remote collection as held in the canonical list.
pub trait CollectionItem: Clone + fmt::Debug + Send + Sync + 'static {
    /// Editable fields, as held by an open create/edit form.
    type Draft: Clone + Default + fmt::Debug + PartialEq + Send + Sync;
    /// Body sent to the remote collection on create and update.
    type Write: Serialize + fmt::Debug + Send + Sync;

    const KIND: EntityKind;

    fn id(&self) -> &RecordId;

    /// Human-readable label. Absent values read as empty.
    fn name(&self) -> &str;

    fn created_at(&self) -> Option<&str>;

    /// Copy of the editable fields, used to pre-fill an edit form.
    fn draft(&self) -> Self::Draft;

    /// Validate a draft and normalize it into a request body.
    fn write_request(draft: &Self::Draft) -> Result<Self::Write, DomainError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
}

impl CollectionItem for CategoryRecord {
    type Draft = CategoryDraft;
    type Write = CategoryWriteRequest;

    const KIND: EntityKind = EntityKind::Category;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn draft(&self) -> CategoryDraft {
        CategoryDraft {
            name: self.name.clone(),
        }
    }

    fn write_request(draft: &CategoryDraft) -> Result<CategoryWriteRequest, DomainError> {
        Ok(CategoryWriteRequest {
            name: required(&draft.name, "name")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    pub header: String,
    pub title: String,
    pub content: String,
    pub category_id: Option<RecordId>,
}

impl CollectionItem for PostRecord {
    type Draft = PostDraft;
    type Write = PostWriteRequest;

    const KIND: EntityKind = EntityKind::Post;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn name(&self) -> &str {
        &self.header
    }

    fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    fn draft(&self) -> PostDraft {
        PostDraft {
            header: self.header.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
            category_id: self.category_id.clone(),
        }
    }

    fn write_request(draft: &PostDraft) -> Result<PostWriteRequest, DomainError> {
        let header = required(&draft.header, "header")?;
        let title = required(&draft.title, "title")?;
        if draft.content.trim().is_empty() {
            return Err(DomainError::blank("content"));
        }
        Ok(PostWriteRequest {
            header,
            title,
            content: draft.content.clone(),
            category_id: draft.category_id.clone(),
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::blank(field));
    }
    Ok(trimmed.to_string())
}
