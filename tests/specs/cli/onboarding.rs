// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rust specs for the onboarding wizard: sign-in, workspace setup,
//! project setup, and the session reset on logout.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;

fn kanbo() -> Command {
    let mut cmd = cargo_bin_cmd!("kanbo");
    cmd.arg("--no-assist").env("NO_COLOR", "1");
    cmd
}

#[test]
fn sign_in_derives_name_from_email() {
    kanbo()
        .write_stdin("alex@acme.dev\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as ALEX."));
}

#[test]
fn empty_email_falls_back_to_default_name() {
    kanbo()
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Signed in as USER."));
}

#[test]
fn workspace_slug_defaults_from_name() {
    kanbo()
        .write_stdin("alex@acme.dev\nAcme Corp\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("workspace slug [acme-corp]:"))
        .stdout(predicate::str::contains("Workspace Acme Corp (acme-corp) created."));
}

#[test]
fn workspace_slug_is_editable() {
    kanbo()
        .write_stdin("alex@acme.dev\nAcme Corp\nacme\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Workspace Acme Corp (acme) created."));
}

#[test]
fn project_key_derives_initials_for_multiword_names() {
    kanbo()
        .write_stdin("alex@acme.dev\nAcme Corp\n\nQ3 Roadmap\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("issue key prefix [QR]:"))
        .stdout(predicate::str::contains("Project Q3 Roadmap (QR) is ready."));
}

#[test]
fn project_key_derives_prefix_for_single_word_names() {
    kanbo()
        .write_stdin("alex@acme.dev\nAcme Corp\n\nRoadmap\n\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("issue key prefix [ROA]:"));
}

#[test]
fn invalid_project_key_reprompts() {
    kanbo()
        .write_stdin("alex@acme.dev\nAcme Corp\n\nRoadmap\nTOOLONG\n\nRoadmap\nRM\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("invalid project key: 'TOOLONG'"))
        .stdout(predicate::str::contains("Project Roadmap (RM) is ready."));
}

#[test]
fn completed_onboarding_seeds_the_board() {
    kanbo()
        .write_stdin("alex@acme.dev\nAcme Corp\n\nJira Clone\n\n\nboard\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Seeded 2 starter issues."))
        .stdout(predicate::str::contains("Backlog (1)"))
        .stdout(predicate::str::contains("In Progress (1)"))
        .stdout(predicate::str::contains("Done (0)"))
        .stdout(predicate::str::contains("JC-1"))
        .stdout(predicate::str::contains("JC-2"));
}

#[test]
fn logout_resets_and_reseeds_on_the_next_project() {
    let script = "alex@acme.dev\nAcme Corp\n\nJira Clone\n\n\n\
                  new Only in the first session\n\
                  logout\n\
                  sarah@acme.dev\nOther Org\n\nSecond Run\n\n\n\
                  show jc-3\n";
    kanbo()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created JC-3: Only in the first session"))
        .stdout(predicate::str::contains("Signed out."))
        .stdout(predicate::str::contains("Signed in as SARAH."))
        .stdout(predicate::str::contains("Project Second Run (SR) is ready."))
        .stdout(predicate::str::contains("SR-1"))
        // The first session's issues did not survive the identity reset.
        .stdout(predicate::str::contains("issue not found: jc-3"));
}

#[test]
fn quit_works_from_the_sign_in_prompt() {
    kanbo().write_stdin("quit\n").assert().success();
}

#[test]
fn board_commands_are_refused_before_onboarding() {
    // The wizard consumes the line as an email, so the session just asks
    // for the workspace next; no issues exist yet anywhere.
    kanbo()
        .write_stdin("board\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("workspace name:"));
}
