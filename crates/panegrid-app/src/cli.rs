use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// PaneGrid: a grid of persistent browser panes.
#[derive(Parser, Debug)]
#[command(name = "panegrid", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error or a filter directive).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Data directory override (sub-windows, cookies, settings).
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the pane grid (default).
    Run,
    /// List stored sub-windows.
    List,
    /// Add a sub-window at the end of the grid.
    Add { name: String, url: String },
    /// Remove a sub-window with its saved state and cookies.
    Remove { id: u32 },
}

pub fn parse() -> Args {
    Args::parse()
}
