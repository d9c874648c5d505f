use std::{fs::create_dir_all, path::PathBuf};

use clap::Parser;
use cli::{Cli, Commands};
use config::ScripturesConfig;
use errors::{ScripError, ScripResult};
use tracing::{Level, event, level_filters::LevelFilter};
use tracing_subscriber::{
    Layer,
    fmt::{self},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

mod api;
mod breadcrumbs;
mod cli;
mod commands;
mod config;
mod errors;
mod html;
mod map;
mod scriptures;
mod views;

static APP_NAME: &str = "scriptures-mapped";

fn get_logs_dir() -> ScripResult<PathBuf> {
    #[cfg(target_os = "macos")]
    let path = dirs_next::home_dir()
        .ok_or(ScripError::LogFileNotFound)
        .map(|dir| dir.join("Library/Logs").join(APP_NAME));

    #[cfg(not(target_os = "macos"))]
    let path = dirs_next::data_local_dir()
        .ok_or(ScripError::LogFileNotFound)
        .map(|dir| dir.join(APP_NAME).join("logs"));

    if let Ok(path) = &path
        && !path.exists()
    {
        create_dir_all(path).map_err(|_| ScripError::LogFileNotFound)?;
    }
    path
}

/// Logs go to stderr and, when the log directory is usable, to `data.log`.
fn init_tracing(level: LevelFilter) -> ScripResult<()> {
    let log_file = get_logs_dir().and_then(|dir| {
        std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(dir.join("data.log"))
            .map_err(|_| ScripError::LogFileNotFound)
    });
    let (log_file, file_error) = match log_file {
        Ok(file) => (Some(file), None),
        Err(err) => (None, Some(err)),
    };
    tracing_subscriber::registry()
        .with(log_file.map(|file| {
            fmt::layer()
                .with_timer(fmt::time::LocalTime::rfc_3339())
                .with_ansi(false)
                .with_writer(file)
                .with_filter(level)
        }))
        .with(
            fmt::layer()
                .with_timer(fmt::time::LocalTime::rfc_3339())
                .event_format(fmt::format().pretty())
                .with_writer(std::io::stderr)
                .with_filter(level),
        )
        .init();
    match file_error {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

fn main() {
    let cli = Cli::parse();
    let config = ScripturesConfig::get();
    let level = config
        .as_ref()
        .map(|config| config.log_level)
        .unwrap_or_default();
    if let Err(err) = init_tracing(level.filter()) {
        event!(Level::WARN, "logging to stderr only: {err}");
    }
    let config = config.unwrap_or_else(|err| {
        event!(Level::WARN, "config unavailable, using defaults: {err}");
        ScripturesConfig::default()
    });
    let span = tracing::info_span!("run", log_level = %level);
    let _enter = span.enter();

    let base_url = cli.base_url.unwrap_or(config.base_url);
    event!(Level::INFO, base_url = base_url.as_str(), "starting");
    let result = match cli.command {
        Commands::Show(args) => commands::show::run(args, &base_url),
        Commands::Browse => commands::browse::run(&base_url),
    };

    if let Err(err) = result {
        event!(Level::ERROR, "{err}");
        std::process::exit(1);
    }
}
