// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the draft editor and the assist degradation path.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

const ONBOARD: &str = "alex@acme.dev\nAcme Corp\n\nJira Clone\n\n\n";

fn kanbo() -> Command {
    let mut cmd = cargo_bin_cmd!("kanbo");
    cmd.arg("--no-assist").env("NO_COLOR", "1");
    cmd
}

fn run_script(commands: &str) -> assert_cmd::assert::Assert {
    kanbo().write_stdin(format!("{ONBOARD}{commands}")).assert().success()
}

#[test]
fn draft_builds_an_issue_field_by_field() {
    run_script(
        "draft new\n\
         draft set title Polish the empty states\n\
         draft set type story\n\
         draft set priority low\n\
         draft set assignee mike\n\
         draft set criteria Empty columns show a call to action\n\
         draft save\n\
         show jc-3\n",
    )
    .stdout(predicate::str::contains("Created JC-3: Polish the empty states"))
    .stdout(predicate::str::contains("type: story"))
    .stdout(predicate::str::contains("priority: low"))
    .stdout(predicate::str::contains("assignee: Mike Ross"))
    .stdout(predicate::str::contains("Acceptance Criteria"))
    .stdout(predicate::str::contains("Empty columns show a call to action"));
}

#[test]
fn draft_new_can_target_a_column() {
    run_script("draft new done\ndraft set title Retro notes\ndraft save\nboard\n")
        .stdout(predicate::str::contains("Created JC-3: Retro notes"))
        .stdout(predicate::str::contains("Done (1)"));
}

#[test]
fn draft_save_requires_a_title_but_keeps_the_draft() {
    run_script(
        "draft new\ndraft set desc written before the title\ndraft save\n\
         draft set title Recovered\ndraft save\nshow jc-3\n",
    )
    .stdout(predicate::str::contains("a title is required"))
    .stdout(predicate::str::contains("Created JC-3: Recovered"))
    .stdout(predicate::str::contains("written before the title"));
}

#[test]
fn draft_edit_round_trips_an_existing_issue() {
    run_script(
        "draft edit jc-2\ndraft set priority medium\ndraft save\nshow jc-2\n",
    )
    .stdout(predicate::str::contains("Editing JC-2."))
    .stdout(predicate::str::contains("Draft saved."))
    .stdout(predicate::str::contains("priority: medium"));
}

#[test]
fn draft_cancel_discards_changes() {
    run_script("draft edit jc-2\ndraft set title Never saved\ndraft cancel\nshow jc-2\n")
        .stdout(predicate::str::contains("draft discarded."))
        .stdout(predicate::str::contains("AI model integration for ticket generation"));
}

#[test]
fn draft_commands_require_an_open_draft() {
    run_script("draft save\n")
        .stdout(predicate::str::contains("no draft open"));
}

#[test]
fn draft_show_marks_defaults_and_missing_title() {
    run_script("draft new\ndraft show\n")
        .stdout(predicate::str::contains("title: (required)"))
        .stdout(predicate::str::contains("type: task (default)"));
}

#[test]
fn assist_degrades_to_no_suggestion() {
    run_script("draft new\ndraft set title Fix login\ndraft ai\n")
        .stdout(predicate::str::contains("assist unavailable; no suggestion."));
}

#[test]
fn summary_degrades_when_unconfigured() {
    run_script("summary jc-1\n")
        .stdout(predicate::str::contains("JC-1: summary unavailable."));
}

#[test]
fn summary_of_unknown_key_reports_not_found() {
    run_script("summary jc-9\n")
        .stdout(predicate::str::contains("error: issue not found: jc-9"));
}
