//! Configuration layer: typed settings with layered precedence (file → env → CLI).

use std::{num::NonZeroUsize, path::PathBuf, str::FromStr, time::Duration};

use clap::{Args, Parser, Subcommand, builder::BoolishValueParser};
use config::{Config, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use url::Url;

use crate::{
    application::pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS},
    domain::entities::RecordId,
    i18n::Language,
};

const DEFAULT_CONFIG_BASENAME: &str = "config/default";
const LOCAL_CONFIG_BASENAME: &str = "blogdesk";
const ENV_PREFIX: &str = "BLOGDESK";
const DEFAULT_API_BASE_URL: &str = "http://localhost:4444";
const DEFAULT_API_TIMEOUT_SECS: u64 = 10;

/// Command-line arguments for the blogdesk binary.
#[derive(Debug, Parser)]
#[command(
    name = "blogdesk",
    version,
    about = "Manage blog categories and posts on a remote blog API"
)]
pub struct CliArgs {
    /// Optional path to a configuration file.
    #[arg(
        long = "config-file",
        env = "BLOGDESK_CONFIG_FILE",
        value_name = "PATH",
        global = true
    )]
    pub config_file: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: GlobalOverrides,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args, Default, Clone)]
pub struct GlobalOverrides {
    /// Override the base URL of the blog API.
    #[arg(long = "api-base-url", value_name = "URL", global = true)]
    pub api_base_url: Option<String>,

    /// Override the request timeout.
    #[arg(long = "api-timeout-seconds", value_name = "SECONDS", global = true)]
    pub api_timeout_seconds: Option<u64>,

    /// Override the display language (en|tr).
    #[arg(long = "language", value_name = "CODE", global = true)]
    pub language: Option<String>,

    /// Override the base log level (trace|debug|info|warn|error).
    #[arg(long = "log-level", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Toggle JSON logging.
    #[arg(
        long = "log-json",
        value_name = "BOOL",
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub log_json: Option<bool>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Manage blog categories.
    Categories(CategoriesArgs),
    /// Manage blog posts.
    Posts(PostsArgs),
}

#[derive(Debug, Args, Clone)]
pub struct CategoriesArgs {
    #[command(subcommand)]
    pub action: CategoryAction,
}

#[derive(Debug, Args, Clone)]
pub struct PostsArgs {
    #[command(subcommand)]
    pub action: PostAction,
}

#[derive(Debug, Subcommand, Clone)]
pub enum CategoryAction {
    /// List categories, filtered and paginated.
    List(ListArgs),
    /// Show one category.
    Show(IdArgs),
    /// Create a category.
    Create(CategoryCreateArgs),
    /// Rename a category.
    Update(CategoryUpdateArgs),
    /// Delete a category.
    Delete(DeleteArgs),
}

#[derive(Debug, Subcommand, Clone)]
pub enum PostAction {
    /// List posts, filtered and paginated.
    List(ListArgs),
    /// Show one post.
    Show(IdArgs),
    /// Create a post.
    Create(PostCreateArgs),
    /// Change fields of a post.
    Update(PostUpdateArgs),
    /// Delete a post.
    Delete(DeleteArgs),
}

#[derive(Debug, Args, Default, Clone)]
pub struct ListArgs {
    /// Case-insensitive filter over id, name and date.
    #[arg(long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Page to show; out-of-range pages are clamped.
    #[arg(long, value_name = "N")]
    pub page: Option<usize>,

    /// Records per page (5, 7, 10, 15 or 25).
    #[arg(long = "page-size", value_name = "N")]
    pub page_size: Option<usize>,
}

#[derive(Debug, Args, Clone)]
pub struct IdArgs {
    #[arg(long, value_name = "ID")]
    pub id: RecordId,
}

#[derive(Debug, Args, Clone)]
pub struct DeleteArgs {
    #[arg(long, value_name = "ID")]
    pub id: RecordId,

    /// Skip the confirmation prompt.
    #[arg(long, short = 'y', action = clap::ArgAction::SetTrue)]
    pub yes: bool,
}

#[derive(Debug, Args, Clone)]
pub struct CategoryCreateArgs {
    #[arg(long, value_name = "NAME")]
    pub name: String,
}

#[derive(Debug, Args, Clone)]
pub struct CategoryUpdateArgs {
    #[arg(long, value_name = "ID")]
    pub id: RecordId,

    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,
}

#[derive(Debug, Args, Clone)]
pub struct PostCreateArgs {
    #[arg(long, value_name = "TEXT")]
    pub header: String,

    #[arg(long, value_name = "TEXT")]
    pub title: String,

    #[arg(long, value_name = "TEXT")]
    pub content: String,

    #[arg(long = "category-id", value_name = "ID")]
    pub category_id: Option<RecordId>,
}

#[derive(Debug, Args, Clone)]
pub struct PostUpdateArgs {
    #[arg(long, value_name = "ID")]
    pub id: RecordId,

    #[arg(long, value_name = "TEXT")]
    pub header: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub title: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub content: Option<String>,

    #[arg(long = "category-id", value_name = "ID")]
    pub category_id: Option<RecordId>,
}

impl Command {
    /// Page size requested on the command line for a list action.
    fn page_size_override(&self) -> Option<usize> {
        match self {
            Command::Categories(CategoriesArgs {
                action: CategoryAction::List(list),
            })
            | Command::Posts(PostsArgs {
                action: PostAction::List(list),
            }) => list.page_size,
            _ => None,
        }
    }
}

/// Fully-resolved settings after precedence resolution and validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub view: ViewSettings,
    pub i18n: I18nSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: Url,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct ViewSettings {
    pub page_size: NonZeroUsize,
}

#[derive(Debug, Clone)]
pub struct I18nSettings {
    pub language: Language,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy)]
pub enum LogFormat {
    Json,
    Compact,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to build configuration: {0}")]
    Build(#[from] config::ConfigError),
    #[error("invalid configuration for `{key}`: {reason}")]
    Invalid { key: &'static str, reason: String },
}

impl LoadError {
    fn invalid(key: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            reason: reason.into(),
        }
    }
}

/// Load settings using the configured precedence (file → environment → CLI).
pub fn load(cli: &CliArgs) -> Result<Settings, LoadError> {
    let mut builder = Config::builder()
        .add_source(File::with_name(DEFAULT_CONFIG_BASENAME).required(false))
        .add_source(File::with_name(LOCAL_CONFIG_BASENAME).required(false));

    if let Some(path) = cli.config_file.as_ref() {
        builder = builder.add_source(File::from(path.as_path()).required(true));
    }

    builder = builder.add_source(Environment::with_prefix(ENV_PREFIX).separator("__"));

    let mut raw: RawSettings = builder.build()?.try_deserialize()?;
    raw.apply_global_overrides(&cli.overrides);
    if let Some(page_size) = cli.command.page_size_override() {
        raw.view.page_size = Some(page_size);
    }

    Settings::from_raw(raw)
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawSettings {
    api: RawApiSettings,
    view: RawViewSettings,
    i18n: RawI18nSettings,
    logging: RawLoggingSettings,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawApiSettings {
    base_url: Option<String>,
    timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawViewSettings {
    page_size: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawI18nSettings {
    language: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
struct RawLoggingSettings {
    level: Option<String>,
    json: Option<bool>,
}

impl RawSettings {
    fn apply_global_overrides(&mut self, overrides: &GlobalOverrides) {
        if let Some(url) = overrides.api_base_url.as_ref() {
            self.api.base_url = Some(url.clone());
        }
        if let Some(seconds) = overrides.api_timeout_seconds {
            self.api.timeout_seconds = Some(seconds);
        }
        if let Some(language) = overrides.language.as_ref() {
            self.i18n.language = Some(language.clone());
        }
        if let Some(level) = overrides.log_level.as_ref() {
            self.logging.level = Some(level.clone());
        }
        if let Some(json) = overrides.log_json {
            self.logging.json = Some(json);
        }
    }
}

impl Settings {
    fn from_raw(raw: RawSettings) -> Result<Self, LoadError> {
        let RawSettings {
            api,
            view,
            i18n,
            logging,
        } = raw;

        Ok(Self {
            api: build_api_settings(api)?,
            view: build_view_settings(view)?,
            i18n: build_i18n_settings(i18n),
            logging: build_logging_settings(logging)?,
        })
    }
}

fn build_api_settings(api: RawApiSettings) -> Result<ApiSettings, LoadError> {
    let raw_url = api
        .base_url
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let base_url = Url::parse(raw_url.trim())
        .map_err(|err| LoadError::invalid("api.base_url", format!("failed to parse: {err}")))?;
    if !matches!(base_url.scheme(), "http" | "https") {
        return Err(LoadError::invalid(
            "api.base_url",
            format!("unsupported scheme `{}`", base_url.scheme()),
        ));
    }

    let timeout_secs = api.timeout_seconds.unwrap_or(DEFAULT_API_TIMEOUT_SECS);
    if timeout_secs == 0 {
        return Err(LoadError::invalid(
            "api.timeout_seconds",
            "must be greater than zero",
        ));
    }

    Ok(ApiSettings {
        base_url,
        timeout: Duration::from_secs(timeout_secs),
    })
}

fn build_view_settings(view: RawViewSettings) -> Result<ViewSettings, LoadError> {
    let page_size = match view.page_size {
        Some(size) => page_size_option(size, "view.page_size")?,
        None => DEFAULT_PAGE_SIZE,
    };
    Ok(ViewSettings { page_size })
}

fn page_size_option(size: usize, key: &'static str) -> Result<NonZeroUsize, LoadError> {
    if !PAGE_SIZE_OPTIONS.contains(&size) {
        return Err(LoadError::invalid(
            key,
            format!("must be one of {PAGE_SIZE_OPTIONS:?}"),
        ));
    }
    NonZeroUsize::new(size).ok_or_else(|| LoadError::invalid(key, "must be greater than zero"))
}

fn build_i18n_settings(i18n: RawI18nSettings) -> I18nSettings {
    let language = i18n
        .language
        .as_deref()
        .map(Language::resolve)
        .unwrap_or_default();
    I18nSettings { language }
}

fn build_logging_settings(logging: RawLoggingSettings) -> Result<LoggingSettings, LoadError> {
    let level = match logging.level {
        Some(level) => LevelFilter::from_str(level.as_str()).map_err(|err| {
            LoadError::invalid("logging.level", format!("failed to parse: {err}"))
        })?,
        None => LevelFilter::INFO,
    };

    let format = if logging.json.unwrap_or(false) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };

    Ok(LoggingSettings { level, format })
}

/// Resolve configuration using the supplied CLI arguments, returning both for downstream use.
pub fn load_with_cli() -> Result<(CliArgs, Settings), LoadError> {
    let args = CliArgs::parse();
    let settings = load(&args)?;
    Ok((args, settings))
}
