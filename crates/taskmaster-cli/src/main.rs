//! Task Master CLI binary entrypoint.

mod commands;
mod logging;
pub mod paths;

use clap::Parser;
use commands::Commands;
use std::path::PathBuf;

/// Task Master — project file management
#[derive(Parser)]
#[command(name = "task-master", version, about, long_about = None)]
struct Cli {
    /// Project root (defaults to the nearest directory with .taskmaster, .taskmasterconfig or .git)
    #[arg(short, long, global = true, value_name = "PATH")]
    project_root: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Parses CLI arguments and dispatches to command handlers.
fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    commands::execute(cli.command, cli.project_root.as_deref());
}
