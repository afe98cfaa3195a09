// SPDX-License-Identifier: Apache-2.0

//! Discovery and removal of the files Task Master writes into a project.

pub mod artifacts;
pub mod candidates;
pub mod error;
pub mod remover;
pub mod root;

pub use candidates::{collect_candidates, CandidateSource, RemovalCandidate};
pub use error::RemoveError;
pub use remover::{
    remove_path, remove_project_files, Confirm, RemovalOptions, RemovalOutcome, Reporter,
    CONFIRM_QUESTION,
};
pub use root::find_project_root;
