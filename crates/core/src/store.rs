// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory issue store for the active project.
//!
//! Issues live in an append-ordered collection for the duration of one
//! session; the store is cleared wholesale when the session's project
//! goes away. Mutations are synchronous and total: updating, moving, or
//! deleting a missing id is a no-op, not a failure.

use crate::clock::Clock;
use crate::error::{Error, Result};
use crate::id::{uniquify, IdSource};
use crate::issue::{Issue, IssueDraft, IssuePatch, IssueType, Priority, Status};
use crate::project::Project;

/// Ordered collection of issues for the active project.
#[derive(Debug, Default)]
pub struct IssueStore {
    issues: Vec<Issue>,
    /// Next key suffix. Monotonic across deletes so keys never repeat
    /// within a session.
    seq: u32,
}

impl IssueStore {
    pub fn new() -> Self {
        IssueStore::default()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// All issues in append order.
    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn iter(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter()
    }

    /// Looks an issue up by internal id.
    pub fn get(&self, id: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }

    /// Looks an issue up by human key, case-insensitively.
    pub fn get_by_key(&self, key: &str) -> Option<&Issue> {
        self.issues.iter().find(|i| i.key.eq_ignore_ascii_case(key))
    }

    /// Creates an issue from a draft and appends it.
    ///
    /// Unset draft fields are defaulted: status to the draft's target
    /// column or `Todo`, priority to `Medium`, type to `Task`. The
    /// reporter and both timestamps are stamped here; the key suffix is
    /// the next sequence number for this session.
    pub fn create(
        &mut self,
        draft: IssueDraft,
        project: &Project,
        reporter: &str,
        clock: &dyn Clock,
        ids: &dyn IdSource,
    ) -> Result<Issue> {
        let title = draft.title.trim().to_string();
        if title.is_empty() {
            return Err(Error::TitleRequired);
        }

        let now = clock.now();
        let id = uniquify(ids.issue_id(&title, &now), |candidate| {
            self.get(candidate).is_some()
        });
        self.seq += 1;

        let issue = Issue {
            id,
            key: format!("{}-{}", project.key, self.seq),
            project_id: project.id.clone(),
            title,
            description: draft.description,
            status: draft.status.unwrap_or(Status::Todo),
            priority: draft.priority.unwrap_or(Priority::Medium),
            issue_type: draft.issue_type.unwrap_or(IssueType::Task),
            assignee: draft.assignee,
            reporter: reporter.to_string(),
            created_at: now,
            updated_at: now,
            acceptance_criteria: draft.acceptance_criteria,
            steps_to_reproduce: draft.steps_to_reproduce,
            estimate: draft.estimate,
        };
        self.issues.push(issue.clone());
        Ok(issue)
    }

    /// Merges a patch over an existing issue and refreshes `updated_at`.
    ///
    /// Returns false (leaving the store untouched) when the id is absent.
    pub fn update(&mut self, id: &str, patch: IssuePatch, clock: &dyn Clock) -> bool {
        match self.issues.iter_mut().find(|i| i.id == id) {
            Some(issue) => {
                issue.apply(patch);
                issue.updated_at = clock.now();
                true
            }
            None => false,
        }
    }

    /// Moves an issue to another column. Same contract as [`update`].
    ///
    /// [`update`]: IssueStore::update
    pub fn transition(&mut self, id: &str, status: Status, clock: &dyn Clock) -> bool {
        self.update(id, IssuePatch::status(status), clock)
    }

    /// Removes an issue if present. Idempotent.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.issues.len();
        self.issues.retain(|i| i.id != id);
        self.issues.len() != before
    }

    /// Drops every issue and resets the key sequence. Used on identity
    /// reset (sign-out).
    pub fn clear(&mut self) {
        self.issues.clear();
        self.seq = 0;
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
