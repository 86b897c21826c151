// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Identifier generation for issues.
//!
//! Internal issue ids are content hashes of the title and creation time,
//! behind the [`IdSource`] capability so tests can pair them with a fixed
//! clock and get stable ids. Human-readable issue keys (`JC-1`) are a
//! separate concern, owned by the store.

use chrono::{DateTime, Utc};
use sha2::{Digest, Sha256};

/// Capability for minting internal issue identifiers.
pub trait IdSource: Send + Sync {
    /// Generate an id for an issue created at `created_at` with `title`.
    fn issue_id(&self, title: &str, created_at: &DateTime<Utc>) -> String;
}

/// Default id source: `i-{hash}` where hash is the first 8 hex chars of
/// SHA256(title + timestamp).
#[derive(Debug, Default)]
pub struct HashIds;

impl IdSource for HashIds {
    fn issue_id(&self, title: &str, created_at: &DateTime<Utc>) -> String {
        let input = format!("{}{}", title, created_at.to_rfc3339());
        let hash = Sha256::digest(input.as_bytes());
        let short_hash = hex::encode(&hash[..4]); // First 8 hex chars (4 bytes)
        format!("i-{short_hash}")
    }
}

/// Make `base_id` unique against `exists`, appending an incrementing
/// suffix on collision.
pub fn uniquify<F>(base_id: String, exists: F) -> String
where
    F: Fn(&str) -> bool,
{
    if !exists(&base_id) {
        return base_id;
    }

    let mut suffix = 2;
    loop {
        let id = format!("{base_id}-{suffix}");
        if !exists(&id) {
            return id;
        }
        suffix += 1;
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
