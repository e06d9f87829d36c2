//! Collection view controller.
//!
//! Owns the canonical copy of one remote collection, the search/page state
//! over it and the open dialog. Every successful write is followed by a full
//! refetch; the canonical list is only ever replaced by what the server
//! returned.

use std::{collections::HashSet, num::NonZeroUsize, sync::Arc};

use tracing::{debug, info, warn};

use crate::{
    application::{
        error::ControllerError,
        pagination::{DEFAULT_PAGE_WINDOW, PageView, ViewState, compute_view, page_window},
        ports::{CollectionResource, Confirm, Notify, ToastVariant},
    },
    domain::{
        entities::{CollectionItem, RecordId},
        error::DomainError,
        modal::{ModalMode, ModalSession},
    },
    i18n::{EntityTexts, Translator, fill},
};

const CREATE_OK: &[u16] = &[200, 201];
const UPDATE_OK: &[u16] = &[200];
const DELETE_OK: &[u16] = &[200];
const LIST_OK: &[u16] = &[200];

/// Result of a user-initiated mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The server accepted the change and the list was refetched.
    Applied,
    /// The user declined the confirmation; nothing was sent.
    Declined,
    /// Not attempted: wrong dialog mode or another operation in flight.
    Rejected,
    /// Attempted and failed; see the controller's error state.
    Failed,
}

pub struct CollectionController<T: CollectionItem> {
    resource: Arc<dyn CollectionResource<T>>,
    confirm: Arc<dyn Confirm>,
    notify: Arc<dyn Notify>,
    translator: Translator,
    records: Vec<T>,
    view: ViewState,
    modal: ModalSession<T>,
    loading: bool,
    saving: bool,
    error: Option<ControllerError>,
    modal_error: Option<ControllerError>,
}

impl<T: CollectionItem> CollectionController<T> {
    pub fn new(
        resource: Arc<dyn CollectionResource<T>>,
        confirm: Arc<dyn Confirm>,
        notify: Arc<dyn Notify>,
        translator: Translator,
        page_size: NonZeroUsize,
    ) -> Self {
        Self {
            resource,
            confirm,
            notify,
            translator,
            records: Vec::new(),
            view: ViewState::new(page_size),
            modal: ModalSession::default(),
            loading: false,
            saving: false,
            error: None,
            modal_error: None,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    pub fn modal(&self) -> &ModalSession<T> {
        &self.modal
    }

    pub fn translator(&self) -> Translator {
        self.translator
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Whether the presentation layer should hold back further mutations.
    pub fn is_busy(&self) -> bool {
        self.loading || self.saving
    }

    /// List-level error shown as a banner.
    pub fn error(&self) -> Option<&ControllerError> {
        self.error.as_ref()
    }

    /// Error shown inside the open dialog.
    pub fn modal_error(&self) -> Option<&ControllerError> {
        self.modal_error.as_ref()
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn texts(&self) -> &'static EntityTexts {
        self.translator.entity(T::KIND)
    }

    /// Replace the canonical list with the server's current collection.
    ///
    /// On failure the previous list is kept and the banner error is set.
    /// `loading` is cleared on every path.
    pub async fn refresh(&mut self) -> Outcome {
        self.loading = true;
        self.error = None;

        let outcome = match self.resource.list().await {
            Ok(reply) if reply.status_in(LIST_OK) => match reply.body {
                Some(records) => {
                    self.replace_records(records);
                    Outcome::Applied
                }
                None => {
                    warn!(
                        target = "application::collection::refresh",
                        kind = T::KIND.as_str(),
                        status = reply.status,
                        "list response carried no body"
                    );
                    self.fail_fetch();
                    Outcome::Failed
                }
            },
            Ok(reply) => {
                warn!(
                    target = "application::collection::refresh",
                    kind = T::KIND.as_str(),
                    status = reply.status,
                    "list request rejected"
                );
                self.fail_fetch();
                Outcome::Failed
            }
            Err(err) => {
                warn!(
                    target = "application::collection::refresh",
                    kind = T::KIND.as_str(),
                    error = %err,
                    "list request failed"
                );
                self.fail_fetch();
                Outcome::Failed
            }
        };

        self.loading = false;
        outcome
    }

    fn replace_records(&mut self, records: Vec<T>) {
        let received = records.len();
        let mut seen = HashSet::with_capacity(received);
        let records: Vec<T> = records
            .into_iter()
            .filter(|record| seen.insert(record.id().clone()))
            .collect();
        if records.len() != received {
            warn!(
                target = "application::collection::refresh",
                kind = T::KIND.as_str(),
                dropped = received - records.len(),
                "dropped records with duplicate ids"
            );
        }

        if records.len() != self.records.len() {
            self.view.reset_page();
        }
        self.records = records;

        info!(
            target = "application::collection::refresh",
            kind = T::KIND.as_str(),
            count = self.records.len(),
            "collection refreshed"
        );
    }

    fn fail_fetch(&mut self) {
        self.error = Some(ControllerError::FetchFailed {
            message: self.texts().fetch_failed.to_string(),
        });
    }

    /// The page currently on screen.
    pub fn view(&self) -> PageView<'_, T> {
        compute_view(
            &self.records,
            self.view.search_term(),
            self.view.page_size(),
            self.view.current_page(),
        )
    }

    /// Numbered page buttons for the current page.
    pub fn page_window(&self) -> Vec<usize> {
        let view = self.view();
        page_window(view.page, view.total_pages, DEFAULT_PAGE_WINDOW)
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.view.set_search_term(term);
    }

    pub fn set_page_size(&mut self, page_size: NonZeroUsize) {
        self.view.set_page_size(page_size);
    }

    /// Jump to page `page`; silently ignored when out of range.
    pub fn goto_page(&mut self, page: usize) -> bool {
        let total_pages = self.view().total_pages;
        self.view.goto_page(page, total_pages)
    }

    /// Distinct non-empty record names, in list order, for search completion.
    pub fn suggestions(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|record| record.name())
            .filter(|name| !name.is_empty() && seen.insert(*name))
            .collect()
    }

    pub fn find_by_id(&self, id: &RecordId) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn open_create(&mut self) -> Result<(), DomainError> {
        self.modal.open_create()?;
        self.modal_error = None;
        Ok(())
    }

    pub fn open_show(&mut self, record: T) -> Result<(), DomainError> {
        self.modal.open_show(record)?;
        self.modal_error = None;
        Ok(())
    }

    pub fn open_edit(&mut self, record: T) -> Result<(), DomainError> {
        self.modal.open_edit(record)?;
        self.modal_error = None;
        Ok(())
    }

    pub fn close_modal(&mut self) {
        self.modal.close();
        self.modal_error = None;
    }

    /// Form draft of the open create/edit dialog.
    pub fn draft_mut(&mut self) -> Option<&mut T::Draft> {
        self.modal.draft_mut()
    }

    pub fn modal_title(&self) -> Option<&'static str> {
        let texts = self.texts();
        match self.modal.mode() {
            ModalMode::Closed => None,
            ModalMode::Show => Some(texts.view),
            ModalMode::Create => Some(texts.create),
            ModalMode::Edit => Some(texts.update),
        }
    }

    /// Send the open create/edit form to the server.
    ///
    /// On success the list is refetched, the dialog closed and a toast
    /// emitted. On failure the dialog stays open with its draft and a
    /// dialog-scoped error. `saving` is cleared on every path.
    pub async fn submit(&mut self) -> Outcome {
        if self.is_busy() {
            debug!(
                target = "application::collection::submit",
                kind = T::KIND.as_str(),
                "submit ignored while busy"
            );
            return Outcome::Rejected;
        }

        let (mode, target, draft) = match &self.modal {
            ModalSession::Create { draft } => (ModalMode::Create, None, draft.clone()),
            ModalSession::Edit { record, draft } => {
                (ModalMode::Edit, Some(record.id().clone()), draft.clone())
            }
            ModalSession::Closed | ModalSession::Show { .. } => return Outcome::Rejected,
        };

        let body = match T::write_request(&draft) {
            Ok(body) => body,
            Err(DomainError::Blank { field }) => {
                self.modal_error = Some(ControllerError::Validation {
                    field,
                    message: self.texts().name_required.to_string(),
                });
                return Outcome::Failed;
            }
            Err(err) => {
                self.modal_error = Some(self.mutation_error(mode));
                warn!(
                    target = "application::collection::submit",
                    kind = T::KIND.as_str(),
                    error = %err,
                    "draft rejected"
                );
                return Outcome::Failed;
            }
        };

        self.saving = true;
        self.modal_error = None;

        let result = match &target {
            None => self
                .resource
                .create(&body)
                .await
                .map(|reply| (reply.status, reply.status_in(CREATE_OK))),
            Some(id) => self
                .resource
                .update(id, &body)
                .await
                .map(|reply| (reply.status, reply.status_in(UPDATE_OK))),
        };

        let outcome = match result {
            Ok((status, true)) => {
                info!(
                    target = "application::collection::submit",
                    kind = T::KIND.as_str(),
                    mode = ?mode,
                    status,
                    "mutation accepted"
                );
                self.refresh().await;
                self.close_modal();
                let (message, variant) = match mode {
                    ModalMode::Edit => (self.texts().updated_toast, ToastVariant::Update),
                    _ => (self.texts().created_toast, ToastVariant::Create),
                };
                self.notify.notify(message, variant);
                Outcome::Applied
            }
            Ok((status, false)) => {
                warn!(
                    target = "application::collection::submit",
                    kind = T::KIND.as_str(),
                    mode = ?mode,
                    status,
                    "mutation rejected"
                );
                self.modal_error = Some(self.mutation_error(mode));
                Outcome::Failed
            }
            Err(err) => {
                warn!(
                    target = "application::collection::submit",
                    kind = T::KIND.as_str(),
                    mode = ?mode,
                    error = %err,
                    "mutation failed"
                );
                self.modal_error = Some(self.mutation_error(mode));
                Outcome::Failed
            }
        };

        self.saving = false;
        outcome
    }

    fn mutation_error(&self, mode: ModalMode) -> ControllerError {
        let texts = self.texts();
        let message = match mode {
            ModalMode::Edit => texts.update_failed,
            _ => texts.create_failed,
        };
        ControllerError::MutationFailed {
            mode,
            message: message.to_string(),
        }
    }

    /// Delete `record` after the user confirms.
    ///
    /// Declining sends nothing and changes nothing. The record only leaves
    /// the list through the refetch that follows a successful delete.
    pub async fn delete_record(&mut self, record: &T) -> Outcome {
        if self.is_busy() {
            return Outcome::Rejected;
        }

        let common = &self.translator.texts().common;
        let question = fill(common.confirm_delete, &[("name", record.name())]);
        let message = format!("{question} {}", common.irreversible);
        if !self.confirm.confirm(&message).await {
            debug!(
                target = "application::collection::delete",
                kind = T::KIND.as_str(),
                id = %record.id(),
                "delete declined"
            );
            return Outcome::Declined;
        }

        self.error = None;
        let failure = match self.resource.delete(record.id()).await {
            Ok(status) if DELETE_OK.contains(&status) => {
                info!(
                    target = "application::collection::delete",
                    kind = T::KIND.as_str(),
                    id = %record.id(),
                    "record deleted"
                );
                self.refresh().await;
                self.notify
                    .notify(self.texts().deleted_toast, ToastVariant::Delete);
                return Outcome::Applied;
            }
            Ok(status) => format!("status {status}"),
            Err(err) => err.to_string(),
        };

        warn!(
            target = "application::collection::delete",
            kind = T::KIND.as_str(),
            id = %record.id(),
            error = %failure,
            "delete failed"
        );
        self.error = Some(ControllerError::DeleteFailed {
            message: self.texts().delete_failed.to_string(),
        });
        Outcome::Failed
    }
}
