// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn default_suggestion_is_empty() {
    assert!(Suggestion::default().is_empty());
}

#[test]
fn blank_strings_count_as_empty() {
    let suggestion = Suggestion {
        summary: Some("   ".into()),
        description: Some(String::new()),
        ..Suggestion::default()
    };
    assert!(suggestion.is_empty());
}

#[test]
fn any_real_field_makes_it_non_empty() {
    let with_priority = Suggestion { priority: Some(Priority::High), ..Suggestion::default() };
    assert!(!with_priority.is_empty());

    let with_steps = Suggestion {
        steps_to_reproduce: Some("1. Log in".into()),
        ..Suggestion::default()
    };
    assert!(!with_steps.is_empty());
}

#[test]
fn serialization_skips_absent_fields() {
    let suggestion = Suggestion {
        summary: Some("Fix login".into()),
        priority: Some(Priority::High),
        ..Suggestion::default()
    };
    let json = serde_json::to_value(&suggestion).unwrap();
    assert_eq!(json["summary"], "Fix login");
    assert_eq!(json["priority"], "high");
    assert!(json.get("description").is_none());
}

#[test]
fn deserializes_from_wire_form() {
    let suggestion: Suggestion =
        serde_json::from_str(r#"{"summary":"Fix login","priority":"highest"}"#).unwrap();
    assert_eq!(suggestion.summary.as_deref(), Some("Fix login"));
    assert_eq!(suggestion.priority, Some(Priority::Highest));
}
