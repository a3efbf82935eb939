// SPDX-License-Identifier: MPL-2.0
//! In-memory record of notification activity.
//!
//! Components hold a clonable [`DiagnosticsHandle`] and record
//! [`DiagnosticEvent`]s into a shared [`CircularBuffer`]. The buffer can be
//! snapshotted or exported as JSON for bug reports. Console output is the job
//! of `tracing`; this module only keeps the recent history.

mod buffer;
mod events;

pub use buffer::CircularBuffer;
pub use events::{DiagnosticEvent, DiagnosticEventKind};

use crate::domain::BufferCapacity;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Shared handle to the diagnostics buffer.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<CircularBuffer<DiagnosticEvent>>>,
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(CircularBuffer::new(capacity))),
        }
    }

    // A panic while recording must not disable diagnostics for the rest of the run.
    fn lock(&self) -> MutexGuard<'_, CircularBuffer<DiagnosticEvent>> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Records an event, evicting the oldest when full.
    pub fn record(&self, kind: DiagnosticEventKind) {
        self.lock().push(DiagnosticEvent::new(kind));
    }

    /// Returns a copy of the recorded events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        self.lock().iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Exports the recorded events as pretty-printed JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.snapshot())
    }
}
