//! Console actions. Each one drives a [`CollectionController`] the way the
//! admin screen would and returns the text to print on stdout.

use tracing::info;

use crate::{
    application::{
        collection::{CollectionController, Outcome},
        error::AppError,
    },
    domain::{entities::RecordId, error::DomainError},
    i18n::{Translator, fill},
    presentation::views::{ListView, Tabular, render_details, render_list},
};

/// Options of the list screen.
#[derive(Debug, Clone, Default)]
pub struct ListOptions<'a> {
    pub search: Option<&'a str>,
    pub page: Option<usize>,
}

async fn load<T: Tabular>(controller: &mut CollectionController<T>) -> Result<(), AppError> {
    if controller.refresh().await == Outcome::Applied {
        return Ok(());
    }
    Err(banner(controller))
}

fn banner<T: Tabular>(controller: &CollectionController<T>) -> AppError {
    controller.error().cloned().map_or_else(
        || AppError::unexpected(controller.translator().texts().common.busy),
        AppError::from,
    )
}

/// The list-level error left behind by an applied write, if its refetch failed.
fn settle<T: Tabular>(controller: &CollectionController<T>) -> Result<(), AppError> {
    match controller.error() {
        Some(err) => Err(AppError::from(err.clone())),
        None => Ok(()),
    }
}

fn transition(translator: Translator, source: DomainError) -> AppError {
    AppError::Transition {
        message: translator.texts().common.invalid_transition.to_string(),
        source,
    }
}

fn dialog_error<T: Tabular>(controller: &CollectionController<T>) -> AppError {
    controller
        .modal_error()
        .cloned()
        .map_or_else(|| banner(controller), AppError::from)
}

fn lookup<T: Tabular>(controller: &CollectionController<T>, id: &RecordId) -> Result<T, AppError> {
    controller
        .find_by_id(id)
        .cloned()
        .ok_or_else(|| AppError::NotFound {
            id: id.clone(),
            message: controller.translator().texts().common.not_found.to_string(),
        })
}

pub async fn list<T: Tabular>(
    controller: &mut CollectionController<T>,
    options: ListOptions<'_>,
) -> Result<String, AppError> {
    load(controller).await?;

    if let Some(term) = options.search {
        controller.set_search_term(term);
    }
    if let Some(page) = options.page {
        let total_pages = controller.view().total_pages;
        controller.goto_page(page.clamp(1, total_pages));
    }

    let translator = controller.translator();
    let mut out = render_list(&ListView::from_controller(controller), translator);
    if controller.view().total_items == 0 {
        let names = controller.suggestions();
        if !names.is_empty() {
            let names = names.join(", ");
            out.push_str(&fill(
                translator.texts().common.suggestions,
                &[("names", names.as_str())],
            ));
            out.push('\n');
        }
    }
    Ok(out)
}

pub async fn show<T: Tabular>(
    controller: &mut CollectionController<T>,
    id: &RecordId,
) -> Result<String, AppError> {
    load(controller).await?;
    let record = lookup(controller, id)?;
    let translator = controller.translator();
    controller
        .open_show(record)
        .map_err(|err| transition(translator, err))?;

    let title = controller.modal_title().unwrap_or_default();
    let rendered = controller
        .modal()
        .record()
        .map(|record| render_details(title, record, controller.translator()))
        .unwrap_or_default();
    controller.close_modal();
    Ok(rendered)
}

pub async fn create<T, F>(controller: &mut CollectionController<T>, fill: F) -> Result<(), AppError>
where
    T: Tabular,
    F: FnOnce(&mut T::Draft),
{
    let translator = controller.translator();
    controller
        .open_create()
        .map_err(|err| transition(translator, err))?;
    if let Some(draft) = controller.draft_mut() {
        fill(draft);
    }
    finish_submit(controller).await
}

/// Open the record read-only, switch to editing, apply `fill` and save.
pub async fn update<T, F>(
    controller: &mut CollectionController<T>,
    id: &RecordId,
    fill: F,
) -> Result<(), AppError>
where
    T: Tabular,
    F: FnOnce(&mut T::Draft),
{
    load(controller).await?;
    let record = lookup(controller, id)?;
    let translator = controller.translator();
    controller
        .open_show(record.clone())
        .map_err(|err| transition(translator, err))?;
    controller
        .open_edit(record)
        .map_err(|err| transition(translator, err))?;
    if let Some(draft) = controller.draft_mut() {
        fill(draft);
    }
    finish_submit(controller).await
}

async fn finish_submit<T: Tabular>(
    controller: &mut CollectionController<T>,
) -> Result<(), AppError> {
    match controller.submit().await {
        Outcome::Applied => settle(controller),
        Outcome::Declined => Ok(()),
        Outcome::Rejected => Err(AppError::unexpected(
            controller.translator().texts().common.busy,
        )),
        Outcome::Failed => {
            let err = dialog_error(controller);
            controller.close_modal();
            Err(err)
        }
    }
}

pub async fn delete<T: Tabular>(
    controller: &mut CollectionController<T>,
    id: &RecordId,
) -> Result<(), AppError> {
    load(controller).await?;
    let record = lookup(controller, id)?;
    match controller.delete_record(&record).await {
        Outcome::Applied => settle(controller),
        Outcome::Declined => {
            info!(
                target = "presentation::commands::delete",
                id = %id,
                "delete cancelled by user"
            );
            Ok(())
        }
        Outcome::Rejected => Err(AppError::unexpected(
            controller.translator().texts().common.busy,
        )),
        Outcome::Failed => Err(banner(controller)),
    }
}

#[cfg(test)]
mod tests {
    use std::{
        num::NonZeroUsize,
        sync::{
            Arc, Mutex,
            atomic::{AtomicUsize, Ordering},
        },
    };

    use async_trait::async_trait;

    use super::*;
    use crate::{
        application::{
            error::ControllerError,
            ports::{CollectionResource, Confirm, Notify, Reply, ResourceError, ToastVariant},
        },
        domain::entities::{CategoryRecord, CategoryWriteRequest},
        i18n::{Language, Translator},
    };

    struct Backend {
        records: Mutex<Vec<CategoryRecord>>,
        list_status: u16,
        /// Lists answered before the backend starts returning 503.
        healthy_lists: usize,
        lists: AtomicUsize,
        delete_status: u16,
        writes: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl CollectionResource<CategoryRecord> for Backend {
        async fn list(&self) -> Result<Reply<Vec<CategoryRecord>>, ResourceError> {
            if self.lists.fetch_add(1, Ordering::SeqCst) >= self.healthy_lists {
                return Ok(Reply::empty(503));
            }
            if self.list_status != 200 {
                return Ok(Reply::empty(self.list_status));
            }
            Ok(Reply::new(200, self.records.lock().expect("records").clone()))
        }

        async fn create(
            &self,
            body: &CategoryWriteRequest,
        ) -> Result<Reply<CategoryRecord>, ResourceError> {
            self.writes.lock().expect("writes").push(body.name.clone());
            Ok(Reply::empty(201))
        }

        async fn update(
            &self,
            id: &RecordId,
            body: &CategoryWriteRequest,
        ) -> Result<Reply<CategoryRecord>, ResourceError> {
            self.writes
                .lock()
                .expect("writes")
                .push(format!("{id}={}", body.name));
            Ok(Reply::empty(200))
        }

        async fn delete(&self, _id: &RecordId) -> Result<u16, ResourceError> {
            Ok(self.delete_status)
        }
    }

    struct Silent;

    impl Notify for Silent {
        fn notify(&self, _message: &str, _variant: ToastVariant) {}
    }

    #[async_trait]
    impl Confirm for Silent {
        async fn confirm(&self, _message: &str) -> bool {
            true
        }
    }

    fn backend(names: &[&str], list_status: u16) -> Arc<Backend> {
        flaky_backend(names, list_status, usize::MAX, 500)
    }

    fn flaky_backend(
        names: &[&str],
        list_status: u16,
        healthy_lists: usize,
        delete_status: u16,
    ) -> Arc<Backend> {
        let records = names
            .iter()
            .zip(1..)
            .map(|(name, id)| CategoryRecord {
                id: RecordId::Number(id),
                name: (*name).to_string(),
                created_at: None,
            })
            .collect();
        Arc::new(Backend {
            records: Mutex::new(records),
            list_status,
            healthy_lists,
            lists: AtomicUsize::new(0),
            delete_status,
            writes: Mutex::new(Vec::new()),
        })
    }

    fn controller(backend: Arc<Backend>) -> CollectionController<CategoryRecord> {
        CollectionController::new(
            backend,
            Arc::new(Silent),
            Arc::new(Silent),
            Translator::new(Language::En),
            NonZeroUsize::new(5).expect("non-zero"),
        )
    }

    #[tokio::test]
    async fn list_clamps_requested_page() -> Result<(), AppError> {
        let mut controller = controller(backend(&["a", "b", "c", "d", "e", "f"], 200));
        let out = list(
            &mut controller,
            ListOptions {
                search: None,
                page: Some(9),
            },
        )
        .await?;
        assert!(out.contains("Page 2 / 2"));
        Ok(())
    }

    #[tokio::test]
    async fn list_failure_surfaces_fetch_error() {
        let mut controller = controller(backend(&["a"], 503));
        let err = list(&mut controller, ListOptions::default())
            .await
            .expect_err("fetch fails");
        assert!(matches!(
            err,
            AppError::Controller(ControllerError::FetchFailed { .. })
        ));
        assert_eq!(
            err.to_string(),
            "An error occurred while fetching the blog category list."
        );
    }

    #[tokio::test]
    async fn show_unknown_id_is_not_found() {
        let mut controller = controller(backend(&["a"], 200));
        let err = show(&mut controller, &RecordId::Number(42))
            .await
            .expect_err("missing");
        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn update_goes_through_show_then_edit() -> Result<(), AppError> {
        let backend = backend(&["Tech"], 200);
        let mut controller = controller(backend.clone());
        update(&mut controller, &RecordId::Number(1), |draft| {
            draft.name = "Technology".into();
        })
        .await?;

        assert_eq!(
            backend.writes.lock().expect("writes").clone(),
            vec!["1=Technology".to_string()]
        );
        assert!(!controller.modal().is_open());
        Ok(())
    }

    #[tokio::test]
    async fn blank_create_reports_validation_message() {
        let backend = backend(&[], 200);
        let mut controller = controller(backend.clone());
        let err = create(&mut controller, |draft| draft.name = " ".into())
            .await
            .expect_err("blank");
        assert_eq!(err.to_string(), "Category name is required.");
        assert!(backend.writes.lock().expect("writes").is_empty());
    }

    #[tokio::test]
    async fn failed_delete_reports_delete_message() {
        let mut controller = controller(backend(&["Tech"], 200));
        let err = delete(&mut controller, &RecordId::Number(1))
            .await
            .expect_err("500");
        assert_eq!(
            err.to_string(),
            "An error occurred while deleting the category."
        );
    }

    #[tokio::test]
    async fn delete_with_failed_refetch_is_an_error() {
        let mut controller = controller(flaky_backend(&["Tech"], 200, 1, 200));
        let err = delete(&mut controller, &RecordId::Number(1))
            .await
            .expect_err("refetch fails");
        assert!(matches!(
            err,
            AppError::Controller(ControllerError::FetchFailed { .. })
        ));
        assert_eq!(
            err.to_string(),
            "An error occurred while fetching the blog category list."
        );
    }

    #[tokio::test]
    async fn create_with_failed_refetch_is_an_error() {
        let backend = flaky_backend(&[], 200, 0, 500);
        let mut controller = controller(backend.clone());
        let err = create(&mut controller, |draft| draft.name = "Rust".into())
            .await
            .expect_err("refetch fails");
        assert!(matches!(
            err,
            AppError::Controller(ControllerError::FetchFailed { .. })
        ));
        assert_eq!(
            backend.writes.lock().expect("writes").clone(),
            vec!["Rust".to_string()]
        );
    }

    #[tokio::test]
    async fn show_accepts_text_ids_from_server() -> Result<(), AppError> {
        let backend = backend(&[], 200);
        backend.records.lock().expect("records").push(CategoryRecord {
            id: RecordId::Text("5".into()),
            name: "Tech".into(),
            created_at: None,
        });
        let mut controller = controller(backend);

        let id: RecordId = "5".parse().expect("parsed id");
        let out = show(&mut controller, &id).await?;
        assert!(out.contains("Tech"));
        Ok(())
    }

    #[tokio::test]
    async fn open_dialog_blocks_another_with_translated_message() {
        let mut controller = controller(backend(&["Tech"], 200));
        controller.open_create().expect("open create");

        let err = show(&mut controller, &RecordId::Number(1))
            .await
            .expect_err("dialog already open");
        assert!(matches!(err, AppError::Transition { .. }));
        assert_eq!(
            err.to_string(),
            "That dialog cannot be opened from the current one."
        );
    }

    #[tokio::test]
    async fn empty_search_result_lists_known_names() -> Result<(), AppError> {
        let mut controller = controller(backend(&["Tech", "Art", "Tech"], 200));
        let out = list(
            &mut controller,
            ListOptions {
                search: Some("zzz"),
                page: None,
            },
        )
        .await?;
        assert!(out.contains("No results match the filter."));
        assert!(out.contains("Known names: Tech, Art"));
        Ok(())
    }
}
