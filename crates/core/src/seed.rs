// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Demo fixtures: the teammate roster and the starter issues planted on
//! a freshly created project.
//!
//! Seeding is once-per-session: it only runs against an empty store, so
//! re-entering the board never duplicates the starter set.

use crate::clock::Clock;
use crate::error::Result;
use crate::id::IdSource;
use crate::identity::User;
use crate::issue::{IssueDraft, IssueType, Priority, Status};
use crate::project::Project;
use crate::store::IssueStore;

/// The static demo teammates available for assignment.
pub fn demo_roster() -> Vec<User> {
    vec![
        User::new("u1", "Alex Johnson", "alex@example.com"),
        User::new("u2", "Sarah Miller", "sarah@example.com"),
        User::new("u3", "Mike Ross", "mike@example.com"),
    ]
}

/// Seeds the starter issues into an empty store, stamped with the new
/// project and the current user as reporter. Returns how many issues
/// were planted: zero when the store already has content.
pub fn seed_demo(
    store: &mut IssueStore,
    project: &Project,
    reporter: &str,
    clock: &dyn Clock,
    ids: &dyn IdSource,
) -> Result<usize> {
    if !store.is_empty() {
        return Ok(0);
    }

    let drafts = starter_drafts();
    let count = drafts.len();
    for draft in drafts {
        store.create(draft, project, reporter, clock, ids)?;
    }
    Ok(count)
}

fn starter_drafts() -> Vec<IssueDraft> {
    vec![
        IssueDraft {
            title: "Implement enterprise auth flow".into(),
            description: "Create login, signup and password recovery screens using modern \
                          Tailwind UI."
                .into(),
            status: Some(Status::InProgress),
            priority: Some(Priority::High),
            issue_type: Some(IssueType::Story),
            assignee: Some("u1".into()),
            ..IssueDraft::default()
        },
        IssueDraft {
            title: "AI model integration for ticket generation".into(),
            description: "Connect Gemini 3 Flash to provide smart descriptions and priority \
                          suggestions."
                .into(),
            status: Some(Status::Todo),
            priority: Some(Priority::Highest),
            issue_type: Some(IssueType::Task),
            assignee: Some("u2".into()),
            ..IssueDraft::default()
        },
    ]
}

#[cfg(test)]
#[path = "seed_tests.rs"]
mod tests;
