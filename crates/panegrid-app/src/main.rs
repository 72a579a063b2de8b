mod app_state;
mod cli;
mod commands;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use panegrid_common::PanegridError;
use panegrid_config::PanegridConfig;
use panegrid_store::{FileStore, MemoryStore, SharedStore};
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use cli::Command;

fn init_logging(directive: &str) {
    let directive: Directive = directive
        .parse()
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

/// Data root from `--data-dir`, else the config, else the platform default.
fn data_root(args: &cli::Args, config: &PanegridConfig) -> Result<PathBuf, PanegridError> {
    let override_dir = args
        .data_dir
        .as_deref()
        .or(config.storage.data_dir.as_deref());
    let root = panegrid_platform::resolve_data_dir(override_dir)?;
    panegrid_platform::ensure_dirs(&root)?;
    Ok(root)
}

/// Open the session store for the grid. Failure leaves the grid usable
/// without persistence.
fn open_store(args: &cli::Args, config: &PanegridConfig) -> Option<SharedStore> {
    if config.storage.disabled {
        tracing::info!("storage disabled, session state lives in memory");
        return Some(Arc::new(MemoryStore::new()));
    }
    let opened = data_root(args, config).and_then(|root| Ok(FileStore::open(root)?));
    match opened {
        Ok(store) => Some(Arc::new(store)),
        Err(e) => {
            tracing::warn!(error = %e, "session store unavailable, running without persistence");
            None
        }
    }
}

fn run_command(args: &cli::Args, config: &PanegridConfig, command: &Command) -> ExitCode {
    let result = data_root(args, config)
        .and_then(|root| Ok(FileStore::open(root)?))
        .and_then(|store| commands::run(command, &store, &mut std::io::stdout().lock()));
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("panegrid: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let args = cli::parse();

    let loaded = panegrid_config::load_config(args.config.as_deref());
    let directive = match (&args.log_level, &loaded) {
        (Some(level), _) => level.clone(),
        (None, Ok(config)) => config.logging.level.directive().to_string(),
        (None, Err(_)) => "panegrid=info".to_string(),
    };
    init_logging(&directive);

    tracing::info!("PaneGrid v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = &args.config {
        tracing::info!(path = %path.display(), "using config override");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "config load failed, using defaults");
        PanegridConfig::default()
    });

    match &args.command {
        Some(Command::Run) | None => {}
        Some(command) => return run_command(&args, &config, command),
    }

    let store = open_store(&args, &config);

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!(error = %e, "failed to create event loop");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::PanegridApp::new(config, store);

    tracing::info!("entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!(error = %e, "event loop error");
        return ExitCode::FAILURE;
    }
    tracing::info!("shutdown complete");
    ExitCode::SUCCESS
}
