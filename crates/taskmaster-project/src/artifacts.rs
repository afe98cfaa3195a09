// SPDX-License-Identifier: Apache-2.0

//! Names of the files and directories Task Master scaffolds into a project.

/// Task Master configuration and task data.
pub const TASKMASTER_DIR: &str = ".taskmaster";
/// Cursor editor rules.
pub const CURSOR_DIR: &str = ".cursor";
/// Roo Code rules. Also holds per-mode `rules-*` directories.
pub const ROO_DIR: &str = ".roo";
pub const WINDSURF_RULES_FILE: &str = ".windsurfrules";
pub const ROOMODES_FILE: &str = ".roomodes";
/// Pre-`.taskmaster` configuration file.
pub const LEGACY_CONFIG_FILE: &str = ".taskmasterconfig";

/// Fixed artifacts checked at the project root, in listing order.
pub const KNOWN_ARTIFACTS: [&str; 6] = [
    TASKMASTER_DIR,
    CURSOR_DIR,
    ROO_DIR,
    WINDSURF_RULES_FILE,
    ROOMODES_FILE,
    LEGACY_CONFIG_FILE,
];

/// Prefix of the mode rule directories inside [`ROO_DIR`].
pub const ROO_RULES_PREFIX: &str = "rules-";
