//! Administrative console for blog categories and posts.
//!
//! A [`application::collection::CollectionController`] keeps a local copy of
//! one remote collection, filters and paginates it, and drives create, edit
//! and delete dialogs against the backend.

pub mod application;
pub mod config;
pub mod domain;
pub mod i18n;
pub mod infra;
pub mod presentation;
