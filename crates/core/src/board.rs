// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Board projection.
//!
//! A pure derivation of the visible board: the store's issues pushed
//! through the active filter, grouped into the three fixed columns.
//! Recomputed on demand; never stored.

use crate::filter::BoardFilter;
use crate::identity::Roster;
use crate::issue::{Issue, Status};
use crate::store::IssueStore;

/// One board column: a status and the visible issues in it, in store
/// (append) order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub status: Status,
    pub issues: Vec<Issue>,
}

impl Column {
    pub fn count(&self) -> usize {
        self.issues.len()
    }
}

/// The filtered, column-grouped view of the board.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    columns: Vec<Column>,
}

impl BoardView {
    /// Projects the visible board from the store, filter, and roster.
    pub fn project(store: &IssueStore, filter: &BoardFilter, roster: &Roster) -> Self {
        let columns = Status::COLUMNS
            .iter()
            .map(|&status| Column {
                status,
                issues: store
                    .iter()
                    .filter(|issue| issue.status == status && filter.matches(issue, roster))
                    .cloned()
                    .collect(),
            })
            .collect();
        BoardView { columns }
    }

    /// The three columns in fixed display order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The column for a status.
    pub fn column(&self, status: Status) -> Option<&Column> {
        self.columns.iter().find(|c| c.status == status)
    }

    /// Total visible issues across all columns.
    pub fn total(&self) -> usize {
        self.columns.iter().map(Column::count).sum()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
