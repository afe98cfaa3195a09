//! Command handler for `task-master remove`.

use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use taskmaster_project::{
    remove_project_files, Confirm, RemovalCandidate, RemovalOptions, RemovalOutcome, Reporter,
};

use crate::paths;

// Bare U+26A0 without the emoji variation selector: one terminal column,
// which `boxed` relies on when sizing the border.
const BANNER_TITLE: &str = "\u{26a0}  Remove Task Master Files  \u{26a0}";

/// Executes the `task-master remove` command.
pub fn execute(project_root: Option<&Path>, yes: bool, json: bool) {
    let root = paths::resolve_project_root(project_root);
    let options = RemovalOptions { yes };

    let runtime = match tokio::runtime::Builder::new_current_thread().build() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("{} Failed to start async runtime: {}", "✗".red().bold(), e);
            process::exit(1);
        }
    };

    let mut confirm = TerminalConfirm;
    let result = if json {
        runtime.block_on(remove_project_files(
            &options,
            root.as_deref(),
            &mut confirm,
            &mut Silent,
        ))
    } else {
        runtime.block_on(remove_project_files(
            &options,
            root.as_deref(),
            &mut confirm,
            &mut Transcript,
        ))
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{} {}", "✗".red().bold(), format!("Error: {e}").red());
            process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&outcome) {
            Ok(rendered) => println!("{rendered}"),
            Err(e) => {
                eprintln!("{} Failed to render result: {}", "✗".red().bold(), e);
                process::exit(1);
            }
        }
    }
}

/// Asks on stderr and reads the answer from stdin.
struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    async fn confirm(&mut self, question: &str, default: bool) -> bool {
        let question = question.to_string();
        match tokio::task::spawn_blocking(move || prompt(&question, default)).await {
            Ok(Ok(answer)) => answer,
            Ok(Err(e)) => {
                log::warn!("failed to read confirmation: {e}");
                default
            }
            Err(e) => {
                log::warn!("confirmation prompt did not complete: {e}");
                default
            }
        }
    }
}

fn prompt(question: &str, default: bool) -> io::Result<bool> {
    let hint = if default { "(Y/n)" } else { "(y/N)" };
    eprint!("{} {} {} ", "?".green().bold(), question.bold(), hint.dimmed());
    io::stderr().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        eprintln!();
        return Ok(default);
    }
    Ok(parse_answer(&input).unwrap_or(default))
}

fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Colored human-readable output.
struct Transcript;

impl Reporter for Transcript {
    fn banner(&mut self) {
        println!("{}", boxed(BANNER_TITLE).yellow().bold());
        println!();
        println!(
            "This command will remove all Task Master-related files and directories from your project."
        );
        println!("This action cannot be undone.");
        println!();
    }

    fn nothing_found(&mut self) {
        println!(
            "{} {}",
            "✓".green().bold(),
            "No Task Master files found in this project.".green()
        );
    }

    fn listing(&mut self, candidates: &[RemovalCandidate]) {
        println!(
            "{}",
            "The following files and directories will be deleted:".yellow()
        );
        for candidate in candidates {
            println!("{}", format!("  - {}", candidate.path).cyan());
        }
        println!();
    }

    fn removing(&mut self, candidate: &RemovalCandidate) {
        println!("{}", format!("  Removing {}...", candidate.path).dimmed());
    }

    fn finished(&mut self, outcome: &RemovalOutcome) {
        match outcome {
            RemovalOutcome::NothingFound => {}
            RemovalOutcome::Removed { .. } => println!(
                "{} {}",
                "✓".green().bold(),
                "Successfully removed all Task Master files.".green()
            ),
            RemovalOutcome::Failed { path, error, .. } => {
                eprintln!("{}", failure_report(path, error))
            }
            RemovalOutcome::Cancelled { .. } => {
                println!("{}", "Operation cancelled. No files were deleted.".dimmed())
            }
        }
    }
}

fn failure_report(path: &str, error: &str) -> String {
    format!(
        "{} {}\n  {}: {}",
        "✗".red().bold(),
        "An error occurred during deletion.".red(),
        path.cyan(),
        error
    )
}

/// Discards progress; used with `--json`.
struct Silent;

impl Reporter for Silent {
    fn banner(&mut self) {}
    fn nothing_found(&mut self) {}
    fn listing(&mut self, _candidates: &[RemovalCandidate]) {}
    fn removing(&mut self, _candidate: &RemovalCandidate) {}
    fn finished(&mut self, _outcome: &RemovalOutcome) {}
}

/// Draws a double-line box with one line of padding around `title`.
fn boxed(title: &str) -> String {
    let inner = title.chars().count() + 6;
    let rule = "═".repeat(inner);
    let blank = " ".repeat(inner);
    [
        format!("╔{rule}╗"),
        format!("║{blank}║"),
        format!("║   {title}   ║"),
        format!("║{blank}║"),
        format!("╚{rule}╝"),
    ]
    .join("\n")
}
