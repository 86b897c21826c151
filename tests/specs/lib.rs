// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end specs for the kanbo shell.
//!
//! The actual test files live under `cli/` and are wired up as `[[test]]`
//! targets of the kanbo package, so they run against the real binary.
