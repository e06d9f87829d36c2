use std::{process, sync::Arc};

use blogdesk::{
    application::{collection::CollectionController, error::AppError, ports::Confirm},
    config::{self, CategoryAction, Command, PostAction, Settings},
    domain::entities::{CategoryRecord, PostRecord},
    i18n::Translator,
    infra::{
        console::{AutoConfirm, ConsoleNotifier, PromptConfirm},
        error::InfraError,
        http::ApiClient,
        telemetry,
    },
    presentation::{
        commands::{self, ListOptions},
        views::Tabular,
    },
};
use serde::de::DeserializeOwned;
use tracing::{Dispatch, Level, dispatcher, error, info};
use tracing_subscriber::fmt as tracing_fmt;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        report_application_error(&error);
        process::exit(1);
    }
}

fn report_application_error(error: &AppError) {
    if dispatcher::has_been_set() {
        error!(error = %error, "application error");
        return;
    }

    let subscriber = tracing_fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::ERROR)
        .finish();
    let dispatch = Dispatch::new(subscriber);
    dispatcher::with_default(&dispatch, || {
        error!(error = %error, "application error");
    });
}

async fn run() -> Result<(), AppError> {
    let (cli_args, settings) = config::load_with_cli().map_err(|err| {
        InfraError::configuration(format!("failed to load configuration: {err}"))
    })?;

    telemetry::init(&settings.logging)?;

    let translator = Translator::new(settings.i18n.language);
    let api = ApiClient::new(&settings.api.base_url, settings.api.timeout)?;
    info!(
        target = "blogdesk::run",
        base_url = %api.base(),
        language = translator.language().code(),
        page_size = settings.view.page_size.get(),
        "starting"
    );

    match cli_args.command {
        Command::Categories(args) => run_categories(&api, &settings, translator, args.action).await,
        Command::Posts(args) => run_posts(&api, &settings, translator, args.action).await,
    }
}

fn build_controller<T>(
    api: &ApiClient,
    settings: &Settings,
    translator: Translator,
    assume_yes: bool,
) -> Result<CollectionController<T>, AppError>
where
    T: Tabular + DeserializeOwned,
{
    let resource = Arc::new(api.collection::<T>()?);
    let confirm: Arc<dyn Confirm> = if assume_yes {
        Arc::new(AutoConfirm)
    } else {
        Arc::new(PromptConfirm::new(translator))
    };
    Ok(CollectionController::new(
        resource,
        confirm,
        Arc::new(ConsoleNotifier),
        translator,
        settings.view.page_size,
    ))
}

async fn run_categories(
    api: &ApiClient,
    settings: &Settings,
    translator: Translator,
    action: CategoryAction,
) -> Result<(), AppError> {
    let assume_yes = matches!(&action, CategoryAction::Delete(args) if args.yes);
    let mut controller = build_controller::<CategoryRecord>(api, settings, translator, assume_yes)?;

    match action {
        CategoryAction::List(args) => {
            let options = ListOptions {
                search: args.search.as_deref(),
                page: args.page,
            };
            print!("{}", commands::list(&mut controller, options).await?);
        }
        CategoryAction::Show(args) => {
            print!("{}", commands::show(&mut controller, &args.id).await?);
        }
        CategoryAction::Create(args) => {
            commands::create(&mut controller, |draft| draft.name = args.name).await?;
        }
        CategoryAction::Update(args) => {
            commands::update(&mut controller, &args.id, |draft| {
                if let Some(name) = args.name {
                    draft.name = name;
                }
            })
            .await?;
        }
        CategoryAction::Delete(args) => {
            commands::delete(&mut controller, &args.id).await?;
        }
    }
    Ok(())
}

async fn run_posts(
    api: &ApiClient,
    settings: &Settings,
    translator: Translator,
    action: PostAction,
) -> Result<(), AppError> {
    let assume_yes = matches!(&action, PostAction::Delete(args) if args.yes);
    let mut controller = build_controller::<PostRecord>(api, settings, translator, assume_yes)?;

    match action {
        PostAction::List(args) => {
            let options = ListOptions {
                search: args.search.as_deref(),
                page: args.page,
            };
            print!("{}", commands::list(&mut controller, options).await?);
        }
        PostAction::Show(args) => {
            print!("{}", commands::show(&mut controller, &args.id).await?);
        }
        PostAction::Create(args) => {
            commands::create(&mut controller, |draft| {
                draft.header = args.header;
                draft.title = args.title;
                draft.content = args.content;
                draft.category_id = args.category_id;
            })
            .await?;
        }
        PostAction::Update(args) => {
            commands::update(&mut controller, &args.id, |draft| {
                if let Some(header) = args.header {
                    draft.header = header;
                }
                if let Some(title) = args.title {
                    draft.title = title;
                }
                if let Some(content) = args.content {
                    draft.content = content;
                }
                if args.category_id.is_some() {
                    draft.category_id = args.category_id;
                }
            })
            .await?;
        }
        PostAction::Delete(args) => {
            commands::delete(&mut controller, &args.id).await?;
        }
    }
    Ok(())
}
