/*
[INPUT]:  CLI arguments, optional YAML configuration file
[OUTPUT]: Running terminal task board, or a validated configuration on --dry-run
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags, startup flow, or logging setup
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use taskboard_store::SortKey;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use taskboard_tui::tui::LogWriterFactory;
use taskboard_tui::{AppConfig, LogBuffer, run_tui};

#[derive(Parser, Debug)]
#[command(name = "taskboard", version, about = "In-memory terminal to-do list")]
struct Cli {
    #[arg(long = "config", value_name = "PATH")]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL")]
    log_level: Option<String>,
    #[arg(long = "sort", value_name = "KEY", value_parser = parse_sort_key)]
    sort: Option<SortKey>,
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[arg(long = "dry-run")]
    dry_run: bool,
}

fn parse_sort_key(value: &str) -> Result<SortKey, String> {
    value.parse::<SortKey>().map_err(|err| err.to_string())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let mut config = AppConfig::load(args.config_path.as_deref()).context("load config")?;
    if let Some(sort) = args.sort {
        config.default_sort = sort;
    }
    if let Some(level) = args.log_level {
        config.log_level = level;
    }
    config.validate().context("validate config")?;

    if args.dry_run {
        init_stderr_tracing(&config.log_level)?;
        info!(
            default_sort = ?config.default_sort,
            tick_rate_ms = config.tick_rate_ms,
            seed_tasks = config.seed_tasks.len(),
            "dry-run requested; configuration validated"
        );
        return Ok(());
    }

    let log_buffer = LogBuffer::handle(config.log_buffer_capacity);
    let _file_guard = init_tui_tracing(
        &config.log_level,
        LogWriterFactory::new(log_buffer.clone()),
        args.log_file.as_deref(),
    )?;

    info!("starting taskboard");
    run_tui(&config, log_buffer).await
}

fn init_stderr_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

/// Routes logs into the activity panel, and to `log_file` when given.
fn init_tui_tracing(
    log_level: &str,
    buffer_writer: LogWriterFactory,
    log_file: Option<&Path>,
) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let buffer_layer = fmt::layer()
        .with_writer(buffer_writer)
        .with_ansi(false)
        .with_target(false)
        .compact();

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(buffer_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(guard)
}

fn file_writer(path: &Path) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let directory = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .context("log file path must name a file")?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("create log directory {}", directory.display()))?;
    let appender = tracing_appender::rolling::never(directory, file_name);
    Ok(tracing_appender::non_blocking(appender))
}
