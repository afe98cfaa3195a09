// SPDX-License-Identifier: Apache-2.0

//! Interactive removal of Task Master files from a project.

use serde::Serialize;
use std::fs;
use std::future::Future;
use std::io;
use std::path::Path;

use crate::candidates::{collect_candidates, RemovalCandidate};
use crate::error::RemoveError;

/// Question asked before anything is deleted.
pub const CONFIRM_QUESTION: &str = "Are you sure you want to proceed with the deletion?";

/// Options accepted by [`remove_project_files`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemovalOptions {
    /// Skip the confirmation prompt.
    pub yes: bool,
}

/// Yes/no prompt shown before deletion.
pub trait Confirm {
    /// Asks `question` and resolves to the answer, or `default` when the
    /// user gives none.
    fn confirm(&mut self, question: &str, default: bool) -> impl Future<Output = bool>;
}

/// Receives every user-visible step of a removal.
pub trait Reporter {
    fn banner(&mut self);
    fn nothing_found(&mut self);
    fn listing(&mut self, candidates: &[RemovalCandidate]);
    fn removing(&mut self, candidate: &RemovalCandidate);
    fn finished(&mut self, outcome: &RemovalOutcome);
}

/// How a removal ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RemovalOutcome {
    /// No artifacts existed; nothing was asked or deleted.
    NothingFound,
    /// Every candidate was removed.
    Removed { paths: Vec<String> },
    /// Removing `path` failed; `removed` lists what was deleted before it.
    /// Later candidates were not attempted.
    Failed {
        removed: Vec<String>,
        path: String,
        error: String,
    },
    /// The user declined; nothing was deleted.
    Cancelled { paths: Vec<String> },
}

/// Finds the Task Master artifacts under `project_root`, asks for
/// confirmation unless `options.yes` is set, and deletes them in order.
///
/// A missing or empty root is rejected before any output or filesystem
/// access. Deletion failures do not produce an error: they end the loop and
/// are returned as [`RemovalOutcome::Failed`].
pub async fn remove_project_files<C, R>(
    options: &RemovalOptions,
    project_root: Option<&Path>,
    confirm: &mut C,
    reporter: &mut R,
) -> Result<RemovalOutcome, RemoveError>
where
    C: Confirm,
    R: Reporter,
{
    let root = match project_root {
        Some(root) if !root.as_os_str().is_empty() => root,
        _ => return Err(RemoveError::MissingProjectRoot),
    };

    reporter.banner();

    let candidates = collect_candidates(root);
    if candidates.is_empty() {
        let outcome = RemovalOutcome::NothingFound;
        reporter.nothing_found();
        reporter.finished(&outcome);
        return Ok(outcome);
    }

    reporter.listing(&candidates);

    let confirmed = options.yes || confirm.confirm(CONFIRM_QUESTION, false).await;
    let outcome = if confirmed {
        delete_candidates(root, &candidates, reporter, remove_path)
    } else {
        log::debug!("removal declined for {}", root.display());
        RemovalOutcome::Cancelled {
            paths: paths_of(&candidates),
        }
    };

    reporter.finished(&outcome);
    Ok(outcome)
}

fn delete_candidates<R, F>(
    root: &Path,
    candidates: &[RemovalCandidate],
    reporter: &mut R,
    mut remove: F,
) -> RemovalOutcome
where
    R: Reporter,
    F: FnMut(&Path) -> io::Result<()>,
{
    let mut removed = Vec::with_capacity(candidates.len());

    for candidate in candidates {
        reporter.removing(candidate);
        if let Err(e) = remove(&root.join(&candidate.path)) {
            log::warn!("failed to remove {}: {e}", candidate.path);
            return RemovalOutcome::Failed {
                removed,
                path: candidate.path.clone(),
                error: e.to_string(),
            };
        }
        removed.push(candidate.path.clone());
    }

    RemovalOutcome::Removed { paths: removed }
}

fn paths_of(candidates: &[RemovalCandidate]) -> Vec<String> {
    candidates.iter().map(|c| c.path.clone()).collect()
}

/// Recursively and forcibly deletes `path`. A path that does not exist is
/// not an error. Symlinks are removed, never followed.
pub fn remove_path(path: &Path) -> io::Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(m) => m,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    log::debug!("removing {}", path.display());
    let result = if metadata.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        other => other,
    }
}
