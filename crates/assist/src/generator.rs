// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The text-generation capability consumed by the editor.

use async_trait::async_trait;

use kb_core::{Issue, IssueType, Suggestion};

/// An external collaborator that can enrich issue drafts.
///
/// Implementations must tolerate their own absence: a missing credential
/// or a failed call yields `None`, never an error the caller has to
/// handle.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generates a structured suggestion from a short prompt, the issue
    /// type, and the project key. `None` means "no suggestion".
    async fn generate_details(
        &self,
        prompt: &str,
        issue_type: IssueType,
        project_key: &str,
    ) -> Option<Suggestion>;

    /// Summarizes a full issue snapshot as a short status update.
    /// `None` means "summary unavailable".
    async fn summarize(&self, issue: &Issue) -> Option<String>;
}

/// The collaborator used when assist is disabled or unconfigured:
/// always has nothing to offer.
#[derive(Debug, Default)]
pub struct NullGenerator;

#[async_trait]
impl TextGenerator for NullGenerator {
    async fn generate_details(
        &self,
        _prompt: &str,
        _issue_type: IssueType,
        _project_key: &str,
    ) -> Option<Suggestion> {
        None
    }

    async fn summarize(&self, _issue: &Issue) -> Option<String> {
        None
    }
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
