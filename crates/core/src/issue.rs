// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the kanbo board.
//!
//! This module contains the fundamental data types: Issue, IssueType,
//! Status, Priority, and the draft/patch shapes used to create and
//! mutate issues.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Workflow status of an issue. One status per board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Not yet started. Initial state for new issues.
    Todo,
    /// Currently being worked on.
    InProgress,
    /// Successfully completed.
    Done,
}

impl Status {
    /// The fixed board columns, in display order.
    pub const COLUMNS: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in_progress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(Status::Todo),
            "in_progress" | "in-progress" | "inprogress" => Ok(Status::InProgress),
            "done" => Ok(Status::Done),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Urgency of an issue. Ordinal: `Lowest < Low < Medium < High < Highest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Lowest,
    Low,
    Medium,
    High,
    Highest,
}

impl Priority {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Lowest => "lowest",
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Highest => "highest",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "lowest" => Ok(Priority::Lowest),
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "highest" => Ok(Priority::Highest),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// Classification of issues by their nature and scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    /// User-facing feature work, usually with acceptance criteria.
    Story,
    /// Standard unit of work.
    Task,
    /// Defect or problem to fix.
    Bug,
    /// Cross-cutting initiative spanning multiple stories or tasks.
    Epic,
}

impl IssueType {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Story => "story",
            IssueType::Task => "task",
            IssueType::Bug => "bug",
            IssueType::Epic => "epic",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "story" => Ok(IssueType::Story),
            "task" => Ok(IssueType::Task),
            "bug" => Ok(IssueType::Bug),
            "epic" => Ok(IssueType::Epic),
            _ => Err(Error::InvalidIssueType(s.to_string())),
        }
    }
}

/// The primary entity representing a tracked work item.
///
/// `id`, `project_id`, `created_at`, and `reporter` are fixed at creation;
/// every other field is mutable through [`IssuePatch`], which also
/// refreshes `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Internal identifier (format: `i-{hash}`).
    pub id: String,
    /// Project-scoped human-readable key (format: `{project_key}-{n}`).
    pub key: String,
    /// The project this issue belongs to. Immutable.
    pub project_id: String,
    /// Short description of the work.
    pub title: String,
    /// Longer description providing context.
    pub description: String,
    /// Current board column.
    pub status: Status,
    /// Urgency.
    pub priority: Priority,
    /// Classification of the issue.
    pub issue_type: IssueType,
    /// User id of the person working on this, if anyone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// User id of the person who filed the issue. Always set.
    pub reporter: String,
    /// When the issue was created.
    pub created_at: DateTime<Utc>,
    /// When the issue was last modified.
    pub updated_at: DateTime<Utc>,
    /// Conditions that must hold for a story to be accepted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acceptance_criteria: Option<String>,
    /// How to trigger a bug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps_to_reproduce: Option<String>,
    /// Story-point estimate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<u32>,
}

/// Working copy of an issue's fields before it is committed to the store.
///
/// Unset fields are defaulted at creation time: status falls back to the
/// draft's target column or `Todo`, priority to `Medium`, type to `Task`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssueDraft {
    pub title: String,
    pub description: String,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub issue_type: Option<IssueType>,
    pub assignee: Option<String>,
    pub acceptance_criteria: Option<String>,
    pub steps_to_reproduce: Option<String>,
    pub estimate: Option<u32>,
}

impl IssueDraft {
    /// Creates an empty draft with the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        IssueDraft { title: title.into(), ..IssueDraft::default() }
    }
}

/// A partial update merged over an existing issue.
///
/// `None` fields are left untouched. `assignee` is doubly optional so a
/// patch can distinguish "leave as is" from "unassign".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IssuePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
    pub issue_type: Option<IssueType>,
    pub assignee: Option<Option<String>>,
    pub acceptance_criteria: Option<Option<String>>,
    pub steps_to_reproduce: Option<Option<String>>,
    pub estimate: Option<Option<u32>>,
}

impl IssuePatch {
    /// A patch that only moves the issue to another column.
    pub fn status(status: Status) -> Self {
        IssuePatch { status: Some(status), ..IssuePatch::default() }
    }

    /// Returns true if the patch would not change anything.
    pub fn is_empty(&self) -> bool {
        *self == IssuePatch::default()
    }
}

impl Issue {
    /// Merges a patch over this issue. The caller refreshes `updated_at`.
    ///
    /// `id`, `key`, `project_id`, `created_at`, and `reporter` are never
    /// touched.
    pub(crate) fn apply(&mut self, patch: IssuePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
        if let Some(issue_type) = patch.issue_type {
            self.issue_type = issue_type;
        }
        if let Some(assignee) = patch.assignee {
            self.assignee = assignee;
        }
        if let Some(criteria) = patch.acceptance_criteria {
            self.acceptance_criteria = criteria;
        }
        if let Some(steps) = patch.steps_to_reproduce {
            self.steps_to_reproduce = steps;
        }
        if let Some(estimate) = patch.estimate {
            self.estimate = estimate;
        }
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
