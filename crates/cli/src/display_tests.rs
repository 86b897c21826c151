// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use kb_core::{IssueType, Priority, User};
use yare::parameterized;

fn roster() -> Roster {
    Roster::new(vec![User::new("u1", "Alex Johnson", "alex@example.com")])
}

fn issue(key: &str, title: &str, status: Status) -> Issue {
    let at = chrono::DateTime::parse_from_rfc3339("2026-03-01T09:30:00Z")
        .unwrap()
        .to_utc();
    Issue {
        id: format!("i-{key}"),
        key: key.to_string(),
        project_id: "p-1".into(),
        title: title.to_string(),
        description: String::new(),
        status,
        priority: Priority::Medium,
        issue_type: IssueType::Task,
        assignee: None,
        reporter: "u1".into(),
        created_at: at,
        updated_at: at,
        acceptance_criteria: None,
        steps_to_reproduce: None,
        estimate: None,
    }
}

#[parameterized(
    todo = { Status::Todo, "Backlog" },
    in_progress = { Status::InProgress, "In Progress" },
    done = { Status::Done, "Done" },
)]
fn column_titles(status: Status, expected: &str) {
    assert_eq!(column_title(status), expected);
}

#[test]
fn wrap_preserves_short_lines() {
    assert_eq!(wrap_text("short", 96), "short");
}

#[test]
fn wrap_preserves_multiline_content() {
    let content = "line one\nthis is a deliberately very long second line that would otherwise wrap";
    assert_eq!(wrap_text(content, 20), content);
}

#[test]
fn wrap_breaks_long_single_lines_at_word_boundaries() {
    let wrapped = wrap_text("alpha beta gamma delta", 11);
    assert_eq!(wrapped, "alpha beta\ngamma delta");
}

fn board_fixture() -> (BoardView, BoardFilter, usize) {
    let mut store = kb_core::IssueStore::new();
    let at = chrono::DateTime::parse_from_rfc3339("2026-03-01T09:30:00Z")
        .unwrap()
        .to_utc();
    let clock = kb_core::FixedClock(at);
    let project = kb_core::Project::new(
        "Jira Clone",
        Some("JC".into()),
        "",
        kb_core::ProjectCategory::Software,
    )
    .unwrap();
    let mut draft = kb_core::IssueDraft::titled("Fix login bug");
    draft.assignee = Some("u1".into());
    store.create(draft, &project, "u1", &clock, &kb_core::id::HashIds).unwrap();

    let filter = BoardFilter::new();
    let view = BoardView::project(&store, &filter, &roster());
    (view, filter, store.len())
}

#[test]
fn board_shows_columns_counts_and_cards() {
    let (view, filter, total) = board_fixture();
    let rendered = render_board(&view, &filter, total, &roster(), false);
    assert!(rendered.contains("Backlog (1)"));
    assert!(rendered.contains("In Progress (0)"));
    assert!(rendered.contains("Done (0)"));
    assert!(rendered.contains("JC-1"));
    assert!(rendered.contains("Fix login bug"));
    assert!(rendered.contains("· Alex Johnson"));
    assert!(rendered.contains("1 of 1 issues visible"));
    assert!(!rendered.contains("filters:"));
}

#[test]
fn board_footer_names_active_filters() {
    let (view, mut filter, total) = board_fixture();
    filter.set_search("login");
    filter.toggle_type(IssueType::Bug);
    let rendered = render_board(&view, &filter, total, &roster(), false);
    assert!(rendered.contains("filters: search:\"login\", type:bug"));
}

#[test]
fn describe_filter_resolves_assignee_names() {
    let mut filter = BoardFilter::new();
    filter.toggle_assignee("u1");
    assert_eq!(describe_filter(&filter, &roster()), "assignee:Alex Johnson");
}

#[test]
fn issue_detail_includes_sections_when_present() {
    let mut subject = issue("JC-1", "Fix login bug", Status::Todo);
    subject.description = "Session cookie expires immediately".into();
    subject.steps_to_reproduce = Some("1. Log in\n2. Refresh".into());
    subject.estimate = Some(3);

    let rendered = render_issue(&subject, &roster(), false);
    assert!(rendered.contains("JC-1 · Fix login bug"));
    assert!(rendered.contains("type: task   status: todo   priority: medium"));
    assert!(rendered.contains("reporter: Alex Johnson"));
    assert!(rendered.contains("estimate: 3 points"));
    assert!(rendered.contains("Description"));
    assert!(rendered.contains("    Session cookie expires immediately"));
    assert!(rendered.contains("Steps to Reproduce"));
    assert!(rendered.contains("    1. Log in"));
    assert!(!rendered.contains("Acceptance Criteria"));
}

#[test]
fn issue_detail_marks_unassigned() {
    let subject = issue("JC-1", "Fix login bug", Status::Todo);
    let rendered = render_issue(&subject, &roster(), false);
    assert!(rendered.contains("assignee: unassigned"));
}

#[test]
fn draft_render_marks_missing_title_and_defaults() {
    let editor = EditorSession::create(1, None);
    let rendered = render_draft(&editor, &roster(), false);
    assert!(rendered.contains("Draft (new issue)"));
    assert!(rendered.contains("title: (required)"));
    assert!(rendered.contains("type: task (default)"));
    assert!(rendered.contains("status: todo (default)"));
    assert!(rendered.contains("priority: medium (default)"));
}

#[test]
fn draft_render_shows_target_column() {
    let editor = EditorSession::create(1, Some(Status::InProgress));
    let rendered = render_draft(&editor, &roster(), false);
    assert!(rendered.contains("Draft (new issue in In Progress)"));
    assert!(rendered.contains("status: in_progress"));
}

#[test]
fn draft_render_flags_assist_in_flight() {
    let mut editor = EditorSession::create(1, None);
    editor.draft.title = "Fix login bug".into();
    let _ticket = editor.begin_assist().unwrap();
    let rendered = render_draft(&editor, &roster(), false);
    assert!(rendered.contains("suggestion request in flight"));
}
