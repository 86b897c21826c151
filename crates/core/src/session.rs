// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session state machine for authentication and onboarding.
//!
//! A session walks a fixed path: signed out, then workspace setup, then
//! project setup, then the active board. Signing out from any state
//! returns to the start. The credential check is a trusted stub and
//! always succeeds; the interesting part is which transitions are legal
//! from where.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::identity::User;
use crate::project::{Organization, Project, ProjectCategory};

/// Where the session is in the onboarding flow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Session {
    /// No user; the sign-in screen.
    #[default]
    Unauthenticated,
    /// Signed in, workspace not yet created.
    OrganizationPending { user: User },
    /// Workspace created, project not yet created.
    ProjectPending { user: User, org: Organization },
    /// Fully onboarded; the board is visible.
    Active { user: User, org: Organization, project: Project },
}

impl Session {
    /// Human-readable name of the current state, for error messages.
    pub fn state_name(&self) -> &'static str {
        match self {
            Session::Unauthenticated => "signed out",
            Session::OrganizationPending { .. } => "setting up a workspace",
            Session::ProjectPending { .. } => "setting up a project",
            Session::Active { .. } => "on the board",
        }
    }

    /// The signed-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            Session::Unauthenticated => None,
            Session::OrganizationPending { user }
            | Session::ProjectPending { user, .. }
            | Session::Active { user, .. } => Some(user),
        }
    }

    /// The workspace, once created.
    pub fn organization(&self) -> Option<&Organization> {
        match self {
            Session::ProjectPending { org, .. } | Session::Active { org, .. } => Some(org),
            _ => None,
        }
    }

    /// The active project, once onboarding completes.
    pub fn project(&self) -> Option<&Project> {
        match self {
            Session::Active { project, .. } => Some(project),
            _ => None,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Session::Active { .. })
    }

    /// Signs in with the stubbed credential check. Always succeeds from
    /// the signed-out state; the user is synthesized from the email.
    pub fn sign_in(&mut self, email: &str) -> Result<()> {
        match self {
            Session::Unauthenticated => {
                *self = Session::OrganizationPending { user: User::from_email(email.trim()) };
                Ok(())
            }
            _ => Err(self.transition_error("sign in")),
        }
    }

    /// Creates the workspace and advances to project setup.
    pub fn create_organization(&mut self, name: &str, slug: Option<String>) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("a workspace name is required".to_string()));
        }
        match std::mem::take(self) {
            Session::OrganizationPending { user } => {
                let org = Organization::new(name, slug);
                *self = Session::ProjectPending { user, org };
                Ok(())
            }
            other => {
                *self = other;
                Err(self.transition_error("create a workspace"))
            }
        }
    }

    /// Creates the project and activates the board.
    pub fn create_project(
        &mut self,
        name: &str,
        key: Option<String>,
        description: &str,
        category: ProjectCategory,
    ) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::InvalidInput("a project name is required".to_string()));
        }
        match std::mem::take(self) {
            Session::ProjectPending { user, org } => {
                match Project::new(name, key, description, category) {
                    Ok(project) => {
                        *self = Session::Active { user, org, project };
                        Ok(())
                    }
                    Err(e) => {
                        *self = Session::ProjectPending { user, org };
                        Err(e)
                    }
                }
            }
            other => {
                *self = other;
                Err(self.transition_error("create a project"))
            }
        }
    }

    /// Signs out, discarding user, workspace, and project. Legal from any
    /// state; the caller clears dependent state (issues, filters).
    pub fn sign_out(&mut self) {
        *self = Session::Unauthenticated;
    }

    fn transition_error(&self, action: &str) -> Error {
        Error::InvalidTransition {
            state: self.state_name().to_string(),
            action: action.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
