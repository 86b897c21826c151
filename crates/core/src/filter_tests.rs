// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::identity::User;
use crate::issue::Status;
use yare::parameterized;

fn roster() -> Roster {
    Roster::new(vec![
        User::new("u1", "Alex Johnson", "alex@example.com"),
        User::new("u2", "Sarah Miller", "sarah@example.com"),
    ])
}

fn issue(key: &str, title: &str) -> Issue {
    let at = chrono::DateTime::parse_from_rfc3339("2026-03-01T09:30:00Z")
        .unwrap()
        .to_utc();
    Issue {
        id: format!("i-{key}"),
        key: key.to_string(),
        project_id: "p-1".into(),
        title: title.to_string(),
        description: String::new(),
        status: Status::Todo,
        priority: Priority::Medium,
        issue_type: IssueType::Task,
        assignee: None,
        reporter: "u-current".into(),
        created_at: at,
        updated_at: at,
        acceptance_criteria: None,
        steps_to_reproduce: None,
        estimate: None,
    }
}

#[test]
fn empty_filter_matches_everything() {
    let filter = BoardFilter::new();
    assert!(filter.is_empty());
    assert!(filter.matches(&issue("JC-1", "Fix login bug"), &roster()));
}

#[parameterized(
    title_match = { "login", true },
    title_case_insensitive = { "LOGIN", true },
    key_match = { "jc-1", true },
    description_match = { "cookie", true },
    assignee_name_match = { "johnson", true },
    no_match = { "metrics", false },
)]
fn search_dimension(term: &str, expected: bool) {
    let mut subject = issue("JC-1", "Fix login bug");
    subject.description = "Session cookie expires immediately".into();
    subject.assignee = Some("u1".into());

    let mut filter = BoardFilter::new();
    filter.set_search(term);
    assert_eq!(filter.matches(&subject, &roster()), expected);
}

#[test]
fn search_ignores_unknown_assignee_id() {
    let mut subject = issue("JC-1", "Fix login bug");
    subject.assignee = Some("u-ghost".into());
    let mut filter = BoardFilter::new();
    filter.set_search("johnson");
    assert!(!filter.matches(&subject, &roster()));
}

#[test]
fn assignee_dimension_requires_membership() {
    let mut assigned = issue("JC-1", "Fix login bug");
    assigned.assignee = Some("u1".into());
    let unassigned = issue("JC-2", "Add metrics");

    let mut filter = BoardFilter::new();
    filter.toggle_assignee("u1");
    assert!(filter.matches(&assigned, &roster()));
    assert!(!filter.matches(&unassigned, &roster()));
}

#[test]
fn values_within_a_dimension_are_ored() {
    let mut filter = BoardFilter::new();
    filter.toggle_priority(Priority::High);
    filter.toggle_priority(Priority::Highest);

    let mut high = issue("JC-1", "One");
    high.priority = Priority::High;
    let mut low = issue("JC-2", "Two");
    low.priority = Priority::Low;

    assert!(filter.matches(&high, &roster()));
    assert!(!filter.matches(&low, &roster()));
}

#[test]
fn dimensions_are_anded() {
    let mut filter = BoardFilter::new();
    filter.set_search("login");
    filter.toggle_type(IssueType::Bug);

    let mut matching = issue("JC-1", "Fix login bug");
    matching.issue_type = IssueType::Bug;
    let mut wrong_type = issue("JC-2", "Login redesign");
    wrong_type.issue_type = IssueType::Story;

    assert!(filter.matches(&matching, &roster()));
    assert!(!filter.matches(&wrong_type, &roster()));
}

#[test]
fn toggle_is_an_involution() {
    let mut filter = BoardFilter::new();
    filter.toggle_type(IssueType::Bug);
    assert!(!filter.is_empty());
    filter.toggle_type(IssueType::Bug);
    assert!(filter.is_empty());
}

#[test]
fn clear_resets_all_dimensions() {
    let mut filter = BoardFilter::new();
    filter.set_search("login");
    filter.toggle_assignee("u1");
    filter.toggle_priority(Priority::High);
    filter.toggle_type(IssueType::Bug);
    assert!(!filter.is_empty());

    filter.clear();
    assert!(filter.is_empty());
    assert!(filter.matches(&issue("JC-1", "Anything"), &roster()));
}

#[test]
fn empty_search_term_clears_dimension() {
    let mut filter = BoardFilter::new();
    filter.set_search("login");
    filter.set_search("");
    assert!(filter.is_empty());
}
