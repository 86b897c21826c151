// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the kbrs shell.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] kb_core::Error),

    #[error("unknown command: '{0}'\n  hint: type 'help' for the command list")]
    UnknownCommand(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("unknown field: '{0}'\n  hint: valid fields are: title, desc, status, priority, type, assignee, points, criteria, steps")]
    UnknownField(String),

    #[error("invalid estimate: '{0}'\n  hint: use a whole number of points, or 'none'")]
    InvalidEstimate(String),

    #[error("no draft open\n  hint: start one with 'draft new' or 'draft edit <key>'")]
    NoDraft,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for kbrs operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
