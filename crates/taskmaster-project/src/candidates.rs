// SPDX-License-Identifier: Apache-2.0

//! Collects the Task Master artifacts present under a project root.

use serde::Serialize;
use std::fs;
use std::io;
use std::path::Path;

use crate::artifacts::{KNOWN_ARTIFACTS, ROO_DIR, ROO_RULES_PREFIX};

/// Where a candidate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateSource {
    /// One of the fixed artifact names.
    Known,
    /// A `rules-*` directory found inside `.roo`.
    Discovered,
}

/// A file or directory eligible for deletion, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemovalCandidate {
    pub path: String,
    pub source: CandidateSource,
}

impl RemovalCandidate {
    fn known(name: &str) -> Self {
        RemovalCandidate {
            path: name.to_string(),
            source: CandidateSource::Known,
        }
    }

    fn discovered(parent: &str, name: &str) -> Self {
        RemovalCandidate {
            path: format!("{parent}/{name}"),
            source: CandidateSource::Discovered,
        }
    }
}

/// Returns the fixed artifacts that currently exist under `root`.
pub fn find_known_artifacts(root: &Path) -> Vec<RemovalCandidate> {
    KNOWN_ARTIFACTS
        .iter()
        .filter(|name| {
            let exists = root.join(name).exists();
            log::debug!("{name}: {}", if exists { "present" } else { "absent" });
            exists
        })
        .map(|name| RemovalCandidate::known(name))
        .collect()
}

/// Returns the `rules-*` directories inside `<root>/.roo`, sorted by name.
///
/// Best-effort: if `.roo` is missing, unreadable, or any entry cannot be
/// inspected, the result is empty and the failure is only logged.
pub fn discover_roo_rule_dirs(root: &Path) -> Vec<RemovalCandidate> {
    match scan_roo_rule_dirs(root) {
        Ok(found) => found,
        Err(e) => {
            log::debug!("skipping {ROO_DIR} rule discovery: {e}");
            Vec::new()
        }
    }
}

fn scan_roo_rule_dirs(root: &Path) -> io::Result<Vec<RemovalCandidate>> {
    let roo = root.join(ROO_DIR);
    let mut names = Vec::new();

    for entry in fs::read_dir(&roo)? {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.starts_with(ROO_RULES_PREFIX) {
            continue;
        }
        // Follows symlinks, so a link to a directory counts as a directory.
        if fs::metadata(entry.path())?.is_dir() {
            names.push(name);
        }
    }

    names.sort();
    Ok(names
        .iter()
        .map(|name| RemovalCandidate::discovered(ROO_DIR, name))
        .collect())
}

/// Builds the full candidate list: known artifacts first, then discovered
/// rule directories.
pub fn collect_candidates(root: &Path) -> Vec<RemovalCandidate> {
    let mut candidates = find_known_artifacts(root);
    candidates.extend(discover_roo_rule_dirs(root));
    candidates
}
