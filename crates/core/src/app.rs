// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The application reducer.
//!
//! One owned state object and one entry point: [`App::dispatch`] takes a
//! discrete [`Action`] and applies it synchronously. The presentation
//! layer never mutates state directly; it emits actions and re-reads the
//! projection. Clock and id generation are injected capabilities so the
//! whole reducer is deterministic under test.

use crate::board::BoardView;
use crate::clock::{Clock, SystemClock};
use crate::editor::{Commit, EditorSession};
use crate::error::{Error, Result};
use crate::filter::BoardFilter;
use crate::id::{HashIds, IdSource};
use crate::identity::Roster;
use crate::issue::{Issue, IssueDraft, IssuePatch, IssueType, Priority, Status};
use crate::project::ProjectCategory;
use crate::seed;
use crate::session::Session;
use crate::store::IssueStore;

/// Every discrete mutation the presentation layer can request.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SignIn { email: String },
    CreateOrganization { name: String, slug: Option<String> },
    CreateProject {
        name: String,
        key: Option<String>,
        description: String,
        category: ProjectCategory,
    },
    SignOut,
    CreateIssue(IssueDraft),
    UpdateIssue { id: String, patch: IssuePatch },
    TransitionStatus { id: String, status: Status },
    DeleteIssue { id: String },
    SetSearch { term: String },
    ToggleAssignee { id: String },
    TogglePriority { priority: Priority },
    ToggleType { issue_type: IssueType },
    ClearFilters,
}

/// What a dispatched action did.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    SignedIn,
    OrganizationCreated,
    ProjectCreated { seeded: usize },
    SignedOut,
    Created(Issue),
    Updated { found: bool },
    Transitioned { found: bool },
    Deleted { found: bool },
    FilterChanged,
}

/// Owned application state plus the injected capabilities.
pub struct App {
    session: Session,
    store: IssueStore,
    filter: BoardFilter,
    roster: Roster,
    clock: Box<dyn Clock>,
    ids: Box<dyn IdSource>,
    editor_seq: u64,
}

impl App {
    /// An app wired to the system clock and hash ids.
    pub fn new() -> Self {
        App::with_capabilities(Box::new(SystemClock), Box::new(HashIds))
    }

    /// An app with injected capabilities, for deterministic tests.
    pub fn with_capabilities(clock: Box<dyn Clock>, ids: Box<dyn IdSource>) -> Self {
        App {
            session: Session::default(),
            store: IssueStore::new(),
            filter: BoardFilter::new(),
            roster: Roster::new(seed::demo_roster()),
            clock,
            ids,
            editor_seq: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &IssueStore {
        &self.store
    }

    pub fn filter(&self) -> &BoardFilter {
        &self.filter
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Projects the currently visible board.
    pub fn board(&self) -> BoardView {
        BoardView::project(&self.store, &self.filter, &self.roster)
    }

    /// Applies one action to the state.
    pub fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        match action {
            Action::SignIn { email } => {
                self.session.sign_in(&email)?;
                if let Some(user) = self.session.user() {
                    self.roster.upsert(user.clone());
                }
                Ok(Outcome::SignedIn)
            }
            Action::CreateOrganization { name, slug } => {
                self.session.create_organization(&name, slug)?;
                Ok(Outcome::OrganizationCreated)
            }
            Action::CreateProject { name, key, description, category } => {
                self.session.create_project(&name, key, &description, category)?;
                let seeded = match (self.session.project(), self.session.user()) {
                    (Some(project), Some(user)) => seed::seed_demo(
                        &mut self.store,
                        project,
                        &user.id,
                        &*self.clock,
                        &*self.ids,
                    )?,
                    _ => 0,
                };
                Ok(Outcome::ProjectCreated { seeded })
            }
            Action::SignOut => {
                self.session.sign_out();
                self.store.clear();
                self.filter.clear();
                self.roster = Roster::new(seed::demo_roster());
                Ok(Outcome::SignedOut)
            }
            Action::CreateIssue(draft) => {
                let project = self.session.project().ok_or(Error::NoActiveProject)?;
                let reporter = self.session.user().map(|u| u.id.clone()).unwrap_or_default();
                let issue =
                    self.store.create(draft, project, &reporter, &*self.clock, &*self.ids)?;
                Ok(Outcome::Created(issue))
            }
            Action::UpdateIssue { id, patch } => {
                let found = self.store.update(&id, patch, &*self.clock);
                Ok(Outcome::Updated { found })
            }
            Action::TransitionStatus { id, status } => {
                let found = self.store.transition(&id, status, &*self.clock);
                Ok(Outcome::Transitioned { found })
            }
            Action::DeleteIssue { id } => {
                let found = self.store.delete(&id);
                Ok(Outcome::Deleted { found })
            }
            Action::SetSearch { term } => {
                self.filter.set_search(term);
                Ok(Outcome::FilterChanged)
            }
            Action::ToggleAssignee { id } => {
                self.filter.toggle_assignee(id);
                Ok(Outcome::FilterChanged)
            }
            Action::TogglePriority { priority } => {
                self.filter.toggle_priority(priority);
                Ok(Outcome::FilterChanged)
            }
            Action::ToggleType { issue_type } => {
                self.filter.toggle_type(issue_type);
                Ok(Outcome::FilterChanged)
            }
            Action::ClearFilters => {
                self.filter.clear();
                Ok(Outcome::FilterChanged)
            }
        }
    }

    /// Opens an editor for a new issue, optionally targeted at a column.
    /// Requires the board to be active.
    pub fn open_editor(&mut self, target: Option<Status>) -> Result<EditorSession> {
        if !self.session.is_active() {
            return Err(Error::NoActiveProject);
        }
        self.editor_seq += 1;
        Ok(EditorSession::create(self.editor_seq, target))
    }

    /// Opens an editor seeded from the issue with the given key.
    pub fn open_editor_for(&mut self, key: &str) -> Result<EditorSession> {
        let issue = self
            .store
            .get_by_key(key)
            .ok_or_else(|| Error::IssueNotFound(key.to_string()))?
            .clone();
        self.editor_seq += 1;
        Ok(EditorSession::edit(self.editor_seq, &issue))
    }

    /// Commits an editor session through the reducer. The caller drops
    /// the session after a successful commit.
    pub fn commit_editor(&mut self, editor: &EditorSession) -> Result<Outcome> {
        match editor.commit()? {
            Commit::Create(draft) => self.dispatch(Action::CreateIssue(draft)),
            Commit::Update { id, patch } => self.dispatch(Action::UpdateIssue { id, patch }),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        App::new()
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
