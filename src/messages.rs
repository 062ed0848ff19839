//! Shared in-memory message log.
//!
//! # Responsibilities
//! - Collect human-readable messages from the client for display elsewhere
//! - Share one append-only, unbounded list between all clone holders
//!
//! The log is injected into [`HeroClient`](crate::HeroClient) at
//! construction rather than reached through a global, so tests can observe
//! it in isolation. Operator diagnostics go through `tracing` instead.

use std::sync::{Arc, Mutex};

/// Clonable handle to a process-wide append-only message list.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the log.
    pub fn add(&self, message: impl Into<String>) {
        self.lock().push(message.into());
    }

    /// Snapshot of all messages logged so far, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// Discard all logged messages.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        // A panic while holding the lock leaves plain strings behind, which
        // are still safe to read.
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
