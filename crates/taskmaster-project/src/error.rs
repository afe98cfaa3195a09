// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Errors that stop a removal before it touches the filesystem.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemoveError {
    #[error("Not inside a Task Master project.")]
    MissingProjectRoot,
}
