// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use kb_core::{BoardFilter, BoardView, EditorMode, EditorSession, Issue, Roster, Status};

use crate::colors;

/// Maximum line width for wrapped text content (excluding 4-space indent).
const WRAP_WIDTH: usize = 96;

/// Map board status to the column title shown on screen.
pub fn column_title(status: Status) -> &'static str {
    match status {
        Status::Todo => "Backlog",
        Status::InProgress => "In Progress",
        Status::Done => "Done",
    }
}

/// Wrap text at word boundaries if it's a single line.
///
/// - If content contains newlines: return as-is (preserve user formatting)
/// - If content is single line >width: wrap at word boundaries
/// - If content is single line <=width: return as-is
pub fn wrap_text(content: &str, width: usize) -> String {
    // If content contains newlines, preserve exactly
    if content.contains('\n') {
        return content.to_string();
    }

    // If fits in width, return as-is
    if content.len() <= width {
        return content.to_string();
    }

    // Wrap at word boundaries
    let mut result = String::new();
    let mut current_line = String::new();

    for word in content.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= width {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            if !result.is_empty() {
                result.push('\n');
            }
            result.push_str(&current_line);
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        if !result.is_empty() {
            result.push('\n');
        }
        result.push_str(&current_line);
    }

    result
}

fn indented(content: &str, indent: &str) -> String {
    wrap_text(content, WRAP_WIDTH)
        .lines()
        .map(|line| format!("{indent}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn assignee_name<'a>(issue: &'a Issue, roster: &'a Roster) -> Option<&'a str> {
    issue
        .assignee
        .as_deref()
        .and_then(|id| roster.get(id))
        .map(|user| user.name.as_str())
}

/// One board card: key, type and priority markers, title, assignee.
fn card_line(issue: &Issue, roster: &Roster, color: bool) -> String {
    let mut line = format!(
        "  {}  [{}] {} {}",
        colors::key(&issue.key, color),
        colors::type_marker(issue.issue_type),
        colors::priority(issue.priority, &format!("[{}]", issue.priority), color),
        issue.title,
    );
    if let Some(name) = assignee_name(issue, roster) {
        line.push_str(&colors::context(&format!("  · {name}"), color));
    }
    line
}

/// The full board: three fixed columns with per-column counts, plus a
/// footer naming the active filters when the view is narrowed.
pub fn render_board(
    view: &BoardView,
    filter: &BoardFilter,
    total_issues: usize,
    roster: &Roster,
    color: bool,
) -> String {
    let mut out = String::new();
    for column in view.columns() {
        let title = format!("{} ({})", column_title(column.status), column.count());
        out.push_str(&colors::status(column.status, &title, color));
        out.push('\n');
        for issue in &column.issues {
            out.push_str(&card_line(issue, roster, color));
            out.push('\n');
        }
    }
    out.push('\n');
    out.push_str(&colors::context(
        &format!("{} of {} issues visible", view.total(), total_issues),
        color,
    ));
    if !filter.is_empty() {
        out.push_str(&colors::context(
            &format!(" · filters: {}", describe_filter(filter, roster)),
            color,
        ));
    }
    out.push('\n');
    out
}

/// The active filter dimensions, compactly.
pub fn describe_filter(filter: &BoardFilter, roster: &Roster) -> String {
    let mut parts = Vec::new();
    if !filter.search.is_empty() {
        parts.push(format!("search:\"{}\"", filter.search));
    }
    for id in &filter.assignees {
        let name = roster.get(id).map_or(id.as_str(), |u| u.name.as_str());
        parts.push(format!("assignee:{name}"));
    }
    for priority in &filter.priorities {
        parts.push(format!("priority:{priority}"));
    }
    for issue_type in &filter.types {
        parts.push(format!("type:{issue_type}"));
    }
    parts.join(", ")
}

/// Full detail view of one issue.
pub fn render_issue(issue: &Issue, roster: &Roster, color: bool) -> String {
    let mut out = format!(
        "{} · {}\n",
        colors::key(&issue.key, color),
        colors::header(&issue.title, color)
    );
    out.push_str(&format!(
        "  type: {}   status: {}   priority: {}\n",
        issue.issue_type, issue.status, issue.priority
    ));
    let assignee = assignee_name(issue, roster).unwrap_or("unassigned");
    let reporter = roster.get(&issue.reporter).map_or(issue.reporter.as_str(), |u| u.name.as_str());
    out.push_str(&format!("  assignee: {assignee}   reporter: {reporter}\n"));
    if let Some(points) = issue.estimate {
        out.push_str(&format!("  estimate: {points} points\n"));
    }
    out.push_str(&colors::context(
        &format!(
            "  created: {} · updated: {}\n",
            issue.created_at.format("%Y-%m-%d %H:%M"),
            issue.updated_at.format("%Y-%m-%d %H:%M")
        ),
        color,
    ));

    if !issue.description.is_empty() {
        out.push('\n');
        out.push_str(&colors::header("  Description", color));
        out.push('\n');
        out.push_str(&indented(&issue.description, "    "));
        out.push('\n');
    }
    if let Some(criteria) = issue.acceptance_criteria.as_deref() {
        out.push('\n');
        out.push_str(&colors::header("  Acceptance Criteria", color));
        out.push('\n');
        out.push_str(&indented(criteria, "    "));
        out.push('\n');
    }
    if let Some(steps) = issue.steps_to_reproduce.as_deref() {
        out.push('\n');
        out.push_str(&colors::header("  Steps to Reproduce", color));
        out.push('\n');
        out.push_str(&indented(steps, "    "));
        out.push('\n');
    }
    out
}

/// The open draft, with unset fields marked.
pub fn render_draft(editor: &EditorSession, roster: &Roster, color: bool) -> String {
    let heading = match editor.mode() {
        EditorMode::Create { target: Some(status) } => {
            format!("Draft (new issue in {})", column_title(*status))
        }
        EditorMode::Create { target: None } => "Draft (new issue)".to_string(),
        EditorMode::Edit { id } => format!("Draft (editing {id})"),
    };
    let draft = &editor.draft;
    let mut out = colors::header(&heading, color);
    out.push('\n');

    let title = if draft.title.is_empty() { "(required)" } else { draft.title.as_str() };
    out.push_str(&format!("  title: {title}\n"));
    out.push_str(&format!(
        "  type: {}   status: {}   priority: {}\n",
        draft.issue_type.map_or("task (default)".to_string(), |t| t.to_string()),
        draft.status.map_or("todo (default)".to_string(), |s| s.to_string()),
        draft.priority.map_or("medium (default)".to_string(), |p| p.to_string()),
    ));
    let assignee = draft
        .assignee
        .as_deref()
        .and_then(|id| roster.get(id))
        .map_or("unassigned", |u| u.name.as_str());
    out.push_str(&format!("  assignee: {assignee}\n"));
    if let Some(points) = draft.estimate {
        out.push_str(&format!("  estimate: {points} points\n"));
    }
    if !draft.description.is_empty() {
        out.push_str("  description:\n");
        out.push_str(&indented(&draft.description, "    "));
        out.push('\n');
    }
    if let Some(criteria) = draft.acceptance_criteria.as_deref() {
        out.push_str("  acceptance criteria:\n");
        out.push_str(&indented(criteria, "    "));
        out.push('\n');
    }
    if let Some(steps) = draft.steps_to_reproduce.as_deref() {
        out.push_str("  steps to reproduce:\n");
        out.push_str(&indented(steps, "    "));
        out.push('\n');
    }
    if editor.assist_in_flight() {
        out.push_str(&colors::context("  (suggestion request in flight)\n", color));
    }
    out
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
