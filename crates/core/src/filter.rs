// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board filter state.
//!
//! Four independent dimensions: a free-text search term plus toggled
//! sets of assignees, priorities, and types. Dimensions combine with
//! AND; values within a dimension combine with OR. An empty dimension
//! matches everything, so a cleared filter is the identity.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::identity::Roster;
use crate::issue::{Issue, IssueType, Priority};

/// Active filter criteria for the board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardFilter {
    /// Case-insensitive free-text term matched against title, key,
    /// description, and assignee display name.
    pub search: String,
    /// Selected assignee ids.
    pub assignees: BTreeSet<String>,
    /// Selected priorities.
    pub priorities: BTreeSet<Priority>,
    /// Selected issue types.
    pub types: BTreeSet<IssueType>,
}

impl BoardFilter {
    pub fn new() -> Self {
        BoardFilter::default()
    }

    /// True when no dimension constrains the board.
    pub fn is_empty(&self) -> bool {
        self.search.is_empty()
            && self.assignees.is_empty()
            && self.priorities.is_empty()
            && self.types.is_empty()
    }

    /// Replaces the search term. An empty term clears the dimension.
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    /// Flips membership of an assignee id.
    pub fn toggle_assignee(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.assignees.remove(&id) {
            self.assignees.insert(id);
        }
    }

    /// Flips membership of a priority.
    pub fn toggle_priority(&mut self, priority: Priority) {
        if !self.priorities.remove(&priority) {
            self.priorities.insert(priority);
        }
    }

    /// Flips membership of an issue type.
    pub fn toggle_type(&mut self, issue_type: IssueType) {
        if !self.types.remove(&issue_type) {
            self.types.insert(issue_type);
        }
    }

    /// Resets all four dimensions in one operation.
    pub fn clear(&mut self) {
        *self = BoardFilter::default();
    }

    /// Whether an issue passes every dimension.
    ///
    /// The roster resolves assignee ids to display names for the search
    /// dimension.
    pub fn matches(&self, issue: &Issue, roster: &Roster) -> bool {
        self.matches_search(issue, roster)
            && self.matches_assignee(issue)
            && (self.priorities.is_empty() || self.priorities.contains(&issue.priority))
            && (self.types.is_empty() || self.types.contains(&issue.issue_type))
    }

    fn matches_search(&self, issue: &Issue, roster: &Roster) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let term = self.search.to_lowercase();
        if issue.title.to_lowercase().contains(&term)
            || issue.key.to_lowercase().contains(&term)
            || issue.description.to_lowercase().contains(&term)
        {
            return true;
        }
        issue
            .assignee
            .as_deref()
            .and_then(|id| roster.get(id))
            .is_some_and(|user| user.name.to_lowercase().contains(&term))
    }

    fn matches_assignee(&self, issue: &Issue) -> bool {
        if self.assignees.is_empty() {
            return true;
        }
        issue.assignee.as_deref().is_some_and(|id| self.assignees.contains(id))
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
