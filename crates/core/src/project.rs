// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workspace and project containers created during onboarding.
//!
//! An organization is the top-level tenant; a project groups issues and
//! contributes the short key prefixed onto every issue (`JC-1`). Both are
//! created once per session and not mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Top-level tenant container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL-safe slug derived from the name, independently editable.
    pub slug: String,
}

impl Organization {
    /// Creates an organization. A `None` slug falls back to
    /// [`slug_from_name`].
    pub fn new(name: impl Into<String>, slug: Option<String>) -> Self {
        let name = name.into();
        let slug = slug
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| slug_from_name(&name));
        Organization { id: "org-1".to_string(), name, slug }
    }
}

/// Lower-cased, whitespace-to-hyphen transform of an organization name.
pub fn slug_from_name(name: &str) -> String {
    name.trim().to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// What kind of work a project tracks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectCategory {
    #[default]
    Software,
    ServiceDesk,
    Business,
}

impl ProjectCategory {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Software => "software",
            ProjectCategory::ServiceDesk => "service_desk",
            ProjectCategory::Business => "business",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ProjectCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "software" => Ok(ProjectCategory::Software),
            "service_desk" | "service-desk" | "servicedesk" => Ok(ProjectCategory::ServiceDesk),
            "business" => Ok(ProjectCategory::Business),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

/// A container for related issues, created during onboarding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short uppercase prefix used to build issue keys.
    pub key: String,
    /// Longer description of the project.
    pub description: String,
    /// What kind of work this project tracks.
    pub category: ProjectCategory,
}

impl Project {
    /// Creates a project. A `None` key falls back to [`key_from_name`];
    /// the key is validated either way.
    pub fn new(
        name: impl Into<String>,
        key: Option<String>,
        description: impl Into<String>,
        category: ProjectCategory,
    ) -> Result<Self> {
        let name = name.into();
        let key = match key.filter(|k| !k.trim().is_empty()) {
            Some(k) => k.trim().to_uppercase(),
            None => key_from_name(&name),
        };
        validate_key(&key)?;
        Ok(Project {
            id: "p-1".to_string(),
            name,
            key,
            description: description.into(),
            category,
        })
    }
}

/// Derives an issue-key prefix from a project name.
///
/// Multi-word names take the initial of each word; single-word names take
/// the first three characters. Upper-cased either way, capped at the
/// five-character key limit.
pub fn key_from_name(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let key = if words.len() > 1 {
        words.iter().filter_map(|w| w.chars().next()).collect::<String>()
    } else {
        name.trim().chars().take(3).collect::<String>()
    };
    key.to_uppercase().chars().take(5).collect()
}

/// Validates an issue-key prefix: 1 to 5 ASCII alphanumerics.
pub fn validate_key(key: &str) -> Result<()> {
    let ok = !key.is_empty() && key.len() <= 5 && key.chars().all(|c| c.is_ascii_alphanumeric());
    if ok {
        Ok(())
    } else {
        Err(Error::InvalidProjectKey(key.to_string()))
    }
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;
