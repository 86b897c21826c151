// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structured suggestions from the text-generation collaborator.
//!
//! The collaborator is optional and advisory: a suggestion fills editor
//! fields, it never commits anything. Absent fields and empty strings
//! mean "nothing to offer" for that field.

use serde::{Deserialize, Serialize};

use crate::issue::Priority;

/// A generated enrichment for an issue draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Proposed title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Proposed description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Proposed priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Proposed acceptance criteria (stories).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_criteria: Option<String>,
    /// Proposed reproduction steps (bugs).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_to_reproduce: Option<String>,
}

impl Suggestion {
    /// True when the suggestion offers nothing at all.
    pub fn is_empty(&self) -> bool {
        fn blank(field: &Option<String>) -> bool {
            field.as_deref().is_none_or(|s| s.trim().is_empty())
        }
        blank(&self.summary)
            && blank(&self.description)
            && self.priority.is_none()
            && blank(&self.acceptance_criteria)
            && blank(&self.steps_to_reproduce)
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
