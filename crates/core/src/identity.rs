// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Users and the session roster.
//!
//! Authentication is a trusted stub: signing in synthesizes the current
//! user from the supplied email, it never verifies anything. The roster
//! holds every user the session can reference (demo teammates plus the
//! signed-in user) and resolves assignee ids to display names.

use serde::{Deserialize, Serialize};

/// Well-known id of the signed-in user.
pub const CURRENT_USER_ID: &str = "u-current";

/// A person who can report or be assigned issues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Avatar image URL, derived from the name.
    pub avatar_url: String,
}

impl User {
    /// Creates a user with an avatar derived from the name.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        let name = name.into();
        let avatar_url = avatar_url(&name);
        User { id: id.into(), name, email: email.into(), avatar_url }
    }

    /// Synthesizes the current user from a sign-in email.
    ///
    /// The display name is the upper-cased local part of the email,
    /// or "USER" when the email is empty.
    pub fn from_email(email: &str) -> Self {
        let name = display_name_from_email(email);
        let email = if email.is_empty() { "user@example.com" } else { email };
        User::new(CURRENT_USER_ID, name, email)
    }
}

/// Derives a display name from the local part of an email address.
pub fn display_name_from_email(email: &str) -> String {
    match email.split('@').next().filter(|local| !local.is_empty()) {
        Some(local) => local.to_uppercase(),
        None => "USER".to_string(),
    }
}

/// Builds an avatar service URL for a display name.
pub fn avatar_url(name: &str) -> String {
    let encoded = name.split_whitespace().collect::<Vec<_>>().join("+");
    format!("https://ui-avatars.com/api/?name={encoded}&background=6366f1&color=fff&bold=true")
}

/// Every user the current session can reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    users: Vec<User>,
}

impl Roster {
    /// Creates a roster from a list of users.
    pub fn new(users: Vec<User>) -> Self {
        Roster { users }
    }

    /// Looks a user up by exact id.
    pub fn get(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Resolves a user from an id or a case-insensitive name fragment.
    ///
    /// Exact id matches win; otherwise the first user whose display name
    /// contains the query is returned.
    pub fn resolve(&self, query: &str) -> Option<&User> {
        if let Some(user) = self.get(query) {
            return Some(user);
        }
        let needle = query.to_lowercase();
        self.users.iter().find(|u| u.name.to_lowercase().contains(&needle))
    }

    /// Adds a user, replacing any existing entry with the same id.
    pub fn upsert(&mut self, user: User) {
        self.users.retain(|u| u.id != user.id);
        self.users.push(user);
    }

    /// Removes a user by id.
    pub fn remove(&mut self, id: &str) {
        self.users.retain(|u| u.id != id);
    }

    /// Iterates over all users.
    pub fn iter(&self) -> impl Iterator<Item = &User> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
#[path = "identity_tests.rs"]
mod tests;
