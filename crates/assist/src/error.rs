// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for kb-assist operations.
//!
//! These stay internal to the crate: the [`TextGenerator`] surface maps
//! every failure to "no suggestion" after logging it.
//!
//! [`TextGenerator`]: crate::generator::TextGenerator

use thiserror::Error;

/// All possible errors that can occur talking to the model endpoint.
#[derive(Debug, Error)]
pub enum Error {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("the model returned no usable text")]
    EmptyResponse,
}

/// A specialized Result type for kb-assist operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
