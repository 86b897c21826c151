// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! kb-assist: Optional text-generation collaborator for the kanbo board.
//!
//! Exposes the [`TextGenerator`] capability the editor consumes, plus a
//! Gemini-backed implementation. The collaborator is advisory: when no
//! API key is configured, or a call fails, callers get "no suggestion"
//! rather than an error.

pub mod error;
pub mod gemini;
pub mod generator;

pub use error::{Error, Result};
pub use gemini::GeminiClient;
pub use generator::{NullGenerator, TextGenerator};
