// SPDX-License-Identifier: Apache-2.0

//! Locates the Task Master project enclosing a directory.

use std::path::{Path, PathBuf};

use crate::artifacts::{LEGACY_CONFIG_FILE, TASKMASTER_DIR};

/// Entries whose presence marks a directory as a project root.
pub const PROJECT_MARKERS: [&str; 3] = [TASKMASTER_DIR, LEGACY_CONFIG_FILE, ".git"];

/// Walks from `start` up through its ancestors and returns the first
/// directory containing one of [`PROJECT_MARKERS`].
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| {
            PROJECT_MARKERS
                .iter()
                .any(|marker| dir.join(marker).exists())
        })
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn finds_root_from_nested_directory() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join(".taskmaster")).unwrap();
        let nested = tmp.path().join("src/deep/er");
        fs::create_dir_all(&nested).unwrap();

        assert_eq!(find_project_root(&nested).as_deref(), Some(tmp.path()));
    }

    #[test]
    fn nearest_marker_wins() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir(tmp.path().join(".git")).unwrap();
        let inner = tmp.path().join("packages/app");
        fs::create_dir_all(&inner).unwrap();
        fs::write(inner.join(".taskmasterconfig"), "{}").unwrap();

        assert_eq!(find_project_root(&inner), Some(inner.clone()));
    }

    #[test]
    fn unmarked_tree_has_no_root() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a/b");
        fs::create_dir_all(&nested).unwrap();

        // The temp dir itself may live under a marked ancestor, so only check
        // that nothing inside the scratch tree is reported.
        match find_project_root(&nested) {
            None => {}
            Some(found) => assert!(!found.starts_with(tmp.path())),
        }
    }
}
