// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for board output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use kb_core::{IssueType, Priority, Status};

/// ANSI 256-color codes for board output
pub mod codes {
    /// Column headers and section titles: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Issue keys: light grey
    pub const KEY: u8 = 250;
    /// Secondary context (counts, reporters, timestamps): medium grey
    pub const CONTEXT: u8 = 245;
    /// Todo column marker
    pub const TODO: u8 = 250;
    /// In-progress column marker: amber
    pub const IN_PROGRESS: u8 = 214;
    /// Done column marker: green
    pub const DONE: u8 = 71;
    /// High/highest priority marker: red
    pub const URGENT: u8 = 167;

    /// ANSI reset sequence
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    // NO_COLOR=1 disables colors
    if std::env::var("NO_COLOR").is_ok_and(|v| v == "1") {
        return false;
    }

    // COLOR=1 forces colors even without TTY
    if std::env::var("COLOR").is_ok_and(|v| v == "1") {
        return true;
    }

    // Default: enable colors only if stdout is a TTY
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

fn paint(code: u8, text: &str, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", fg256(code), text, codes::RESET)
    } else {
        text.to_string()
    }
}

/// Apply header color (column titles, screen headings) to text.
pub fn header(text: &str, enabled: bool) -> String {
    paint(codes::HEADER, text, enabled)
}

/// Apply key color (issue keys) to text.
pub fn key(text: &str, enabled: bool) -> String {
    paint(codes::KEY, text, enabled)
}

/// Apply context color (counts, hints, metadata) to text.
pub fn context(text: &str, enabled: bool) -> String {
    paint(codes::CONTEXT, text, enabled)
}

/// Color for a status marker.
pub fn status(status: Status, text: &str, enabled: bool) -> String {
    let code = match status {
        Status::Todo => codes::TODO,
        Status::InProgress => codes::IN_PROGRESS,
        Status::Done => codes::DONE,
    };
    paint(code, text, enabled)
}

/// Color for a priority marker. Only the urgent half gets color.
pub fn priority(priority: Priority, text: &str, enabled: bool) -> String {
    match priority {
        Priority::High | Priority::Highest => paint(codes::URGENT, text, enabled),
        _ => paint(codes::CONTEXT, text, enabled),
    }
}

/// Short display marker for an issue type.
pub fn type_marker(issue_type: IssueType) -> &'static str {
    match issue_type {
        IssueType::Story => "S",
        IssueType::Task => "T",
        IssueType::Bug => "B",
        IssueType::Epic => "E",
    }
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
