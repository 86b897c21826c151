// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for kb-core operations.

use thiserror::Error;

/// All possible errors that can occur in kb-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("a title is required before the issue can be saved")]
    TitleRequired,

    #[error("cannot {action} while {state}")]
    InvalidTransition { state: String, action: String },

    #[error("no active project\n  hint: complete onboarding before working with issues")]
    NoActiveProject,

    #[error("invalid status: '{0}'\n  hint: valid statuses are: todo, in_progress, done")]
    InvalidStatus(String),

    #[error("invalid priority: '{0}'\n  hint: valid priorities are: lowest, low, medium, high, highest")]
    InvalidPriority(String),

    #[error("invalid issue type: '{0}'\n  hint: valid types are: story, task, bug, epic")]
    InvalidIssueType(String),

    #[error("invalid project category: '{0}'\n  hint: valid categories are: software, service_desk, business")]
    InvalidCategory(String),

    #[error("invalid project key: '{0}'\n  hint: 1-5 ASCII letters or digits, e.g. 'JC' or 'OPS1'")]
    InvalidProjectKey(String),

    #[error("unknown user: '{0}'")]
    UnknownUser(String),

    #[error("a suggestion request is already in flight for this draft")]
    AssistBusy,

    #[error("{0}")]
    InvalidInput(String),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for kb-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
