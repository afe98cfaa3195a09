//! CLI subcommand declarations and dispatch.

pub mod remove;

use clap::Subcommand;
use std::path::Path;

/// Top-level CLI subcommands supported by `task-master`.
#[derive(Subcommand)]
pub enum Commands {
    /// Remove all Task Master files and directories from the project
    #[command(visible_alias = "uninstall")]
    Remove {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,

        /// Print the result as JSON instead of the interactive transcript
        #[arg(long)]
        json: bool,
    },
}

/// Dispatches a parsed CLI command to its command module.
pub fn execute(command: Commands, project_root: Option<&Path>) {
    match command {
        Commands::Remove { yes, json } => remove::execute(project_root, yes, json),
    }
}
