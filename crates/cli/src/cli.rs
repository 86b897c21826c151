// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;

/// Command-line options for the kanbo shell.
#[derive(Parser, Debug, Default)]
#[command(name = "kanbo")]
#[command(about = "An in-memory kanban board with a terminal shell")]
#[command(version)]
pub struct Cli {
    /// Disable the AI assist integration even when a key is configured
    #[arg(long)]
    pub no_assist: bool,

    /// Enable verbose logging (to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
