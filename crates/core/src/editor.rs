// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Transient editor session for creating or editing one issue.
//!
//! The editor holds a working draft outside the durable store. Committing
//! hands back either a create draft or an update patch for the store to
//! apply; cancelling discards everything. Suggestion requests are
//! single-flight and generation-checked so a reply that arrives after the
//! draft moved on is dropped instead of clobbering newer input.

use crate::error::{Error, Result};
use crate::issue::{Issue, IssueDraft, IssuePatch, Status};
use crate::suggest::Suggestion;

/// What the editor session is working on.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    /// Drafting a new issue, optionally pre-targeted at a column.
    Create { target: Option<Status> },
    /// Editing a copy of an existing issue.
    Edit { id: String },
}

/// The outcome of a successful commit, for the store to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Commit {
    Create(IssueDraft),
    Update { id: String, patch: IssuePatch },
}

/// Claim on the editor's single suggestion slot. A reply is only applied
/// while its ticket is still current.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistTicket {
    session: u64,
    generation: u64,
}

/// A working copy of one issue's fields, plus suggestion bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
    session: u64,
    mode: EditorMode,
    pub draft: IssueDraft,
    generation: u64,
    in_flight: bool,
}

impl EditorSession {
    /// Opens an editor for a new issue. `session` must be unique across
    /// editor sessions (the caller owns the counter).
    pub fn create(session: u64, target: Option<Status>) -> Self {
        let draft = IssueDraft { status: target, ..IssueDraft::default() };
        EditorSession {
            session,
            mode: EditorMode::Create { target },
            draft,
            generation: 0,
            in_flight: false,
        }
    }

    /// Opens an editor seeded with an existing issue's fields.
    pub fn edit(session: u64, issue: &Issue) -> Self {
        let draft = IssueDraft {
            title: issue.title.clone(),
            description: issue.description.clone(),
            status: Some(issue.status),
            priority: Some(issue.priority),
            issue_type: Some(issue.issue_type),
            assignee: issue.assignee.clone(),
            acceptance_criteria: issue.acceptance_criteria.clone(),
            steps_to_reproduce: issue.steps_to_reproduce.clone(),
            estimate: issue.estimate,
        };
        EditorSession {
            session,
            mode: EditorMode::Edit { id: issue.id.clone() },
            draft,
            generation: 0,
            in_flight: false,
        }
    }

    pub fn mode(&self) -> &EditorMode {
        &self.mode
    }

    /// True while a suggestion request is outstanding.
    pub fn assist_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Claims the suggestion slot. Refused while a request is already in
    /// flight, or before the draft has a title to prompt with.
    pub fn begin_assist(&mut self) -> Result<AssistTicket> {
        if self.in_flight {
            return Err(Error::AssistBusy);
        }
        if self.draft.title.trim().is_empty() {
            return Err(Error::TitleRequired);
        }
        self.generation += 1;
        self.in_flight = true;
        Ok(AssistTicket { session: self.session, generation: self.generation })
    }

    /// Applies a suggestion if its ticket is still current.
    ///
    /// Returns false, leaving the draft untouched, when the ticket is
    /// stale (another request superseded it, or it belongs to an earlier
    /// editor session). A non-empty suggestion field wins over the
    /// draft's value; absent fields leave the draft alone.
    pub fn apply_suggestion(&mut self, ticket: AssistTicket, suggestion: Suggestion) -> bool {
        if !self.ticket_is_current(ticket) {
            return false;
        }
        self.in_flight = false;

        if let Some(summary) = non_blank(suggestion.summary) {
            self.draft.title = summary;
        }
        if let Some(description) = non_blank(suggestion.description) {
            self.draft.description = description;
        }
        if let Some(priority) = suggestion.priority {
            self.draft.priority = Some(priority);
        }
        if let Some(criteria) = non_blank(suggestion.acceptance_criteria) {
            self.draft.acceptance_criteria = Some(criteria);
        }
        if let Some(steps) = non_blank(suggestion.steps_to_reproduce) {
            self.draft.steps_to_reproduce = Some(steps);
        }
        true
    }

    /// Releases the suggestion slot without touching the draft, for when
    /// the collaborator comes back empty-handed. Stale tickets are
    /// ignored here too.
    pub fn finish_assist(&mut self, ticket: AssistTicket) -> bool {
        if !self.ticket_is_current(ticket) {
            return false;
        }
        self.in_flight = false;
        true
    }

    /// Validates the draft and converts it into a store operation.
    ///
    /// Borrows the session so a failed validation leaves the draft
    /// intact for another edit; the caller discards the session after a
    /// successful commit.
    pub fn commit(&self) -> Result<Commit> {
        if self.draft.title.trim().is_empty() {
            return Err(Error::TitleRequired);
        }
        match &self.mode {
            EditorMode::Create { .. } => Ok(Commit::Create(self.draft.clone())),
            EditorMode::Edit { id } => {
                let draft = self.draft.clone();
                let patch = IssuePatch {
                    title: Some(draft.title),
                    description: Some(draft.description),
                    status: draft.status,
                    priority: draft.priority,
                    issue_type: draft.issue_type,
                    assignee: Some(draft.assignee),
                    acceptance_criteria: Some(draft.acceptance_criteria),
                    steps_to_reproduce: Some(draft.steps_to_reproduce),
                    estimate: Some(draft.estimate),
                };
                Ok(Commit::Update { id: id.clone(), patch })
            }
        }
    }

    fn ticket_is_current(&self, ticket: AssistTicket) -> bool {
        ticket.session == self.session && ticket.generation == self.generation && self.in_flight
    }
}

fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
#[path = "editor_tests.rs"]
mod tests;
