// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Background bridge to the text-generation collaborator.
//!
//! Requests run on a tokio runtime so the input loop never waits on the
//! network; results come back over a channel the shell drains between
//! commands. Staleness is handled downstream: suggestion replies carry
//! their [`AssistTicket`] and the editor decides whether they still
//! apply.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use kb_assist::TextGenerator;
use kb_core::{AssistTicket, Issue, IssueType, Suggestion};

/// A completed collaborator call.
#[derive(Debug)]
pub enum AssistEvent {
    /// A structured suggestion (or "nothing to offer") for a draft.
    Suggestion { ticket: AssistTicket, suggestion: Option<Suggestion> },
    /// A status summary (or "unavailable") for an issue.
    Summary { key: String, summary: Option<String> },
}

/// Owns the runtime and the event channel.
pub struct AssistBridge {
    runtime: tokio::runtime::Runtime,
    generator: Arc<dyn TextGenerator>,
    tx: Sender<AssistEvent>,
    rx: Receiver<AssistEvent>,
}

impl AssistBridge {
    /// Spins up a runtime around the given collaborator.
    pub fn new(generator: Arc<dyn TextGenerator>) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        let (tx, rx) = std::sync::mpsc::channel();
        Ok(AssistBridge { runtime, generator, tx, rx })
    }

    /// Requests a structured suggestion for a draft.
    pub fn request_details(
        &self,
        ticket: AssistTicket,
        prompt: String,
        issue_type: IssueType,
        project_key: String,
    ) {
        let generator = Arc::clone(&self.generator);
        let tx = self.tx.clone();
        self.runtime.spawn(async move {
            let suggestion = generator.generate_details(&prompt, issue_type, &project_key).await;
            if tx.send(AssistEvent::Suggestion { ticket, suggestion }).is_err() {
                debug!("suggestion arrived after the shell shut down");
            }
        });
    }

    /// Requests a status summary for an issue snapshot.
    pub fn request_summary(&self, issue: Issue) {
        let generator = Arc::clone(&self.generator);
        let tx = self.tx.clone();
        let key = issue.key.clone();
        self.runtime.spawn(async move {
            let summary = generator.summarize(&issue).await;
            if tx.send(AssistEvent::Summary { key, summary }).is_err() {
                debug!("summary arrived after the shell shut down");
            }
        });
    }

    /// Drains every event that has already completed, without blocking.
    pub fn drain(&self) -> Vec<AssistEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        events
    }

    /// Waits up to `timeout` for the next event. Used when the user asks
    /// for output that depends on an in-flight call.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<AssistEvent> {
        self.rx.recv_timeout(timeout).ok()
    }
}

#[cfg(test)]
#[path = "assist_tests.rs"]
mod tests;
