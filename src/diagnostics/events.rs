// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types recorded by the notification system.

use crate::notifications::FadeDirection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What happened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    /// A container attached its listener to a manager.
    ManagerBound { manager: u64 },

    /// A container detached its listener from a manager.
    ManagerUnbound { manager: u64 },

    /// A message was appended to a container's items.
    MessageQueued { message: u64 },

    /// A manager dismissed a message shown by a container.
    MessageDismissed {
        message: u64,
        /// Whether removal waits for a fade-out.
        animated: bool,
    },

    /// A message left a container's items.
    ItemRemoved { message: u64 },

    FadeStarted {
        message: u64,
        direction: FadeDirection,
        duration_ms: u64,
    },

    FadeCompleted {
        message: u64,
        direction: FadeDirection,
    },

    /// Container misuse (incompatible manager, items source conflict).
    UsageError { error: String },

    /// A warning notification was pushed.
    Warning { text: String },

    /// An error notification was pushed.
    Error { text: String },
}

/// A recorded event with its wall-clock timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticEvent {
    pub at: DateTime<Utc>,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self { at: Utc::now(), kind }
    }

    /// Returns true for usage errors and error notifications.
    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(
            self.kind,
            DiagnosticEventKind::UsageError { .. } | DiagnosticEventKind::Error { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_with_snake_case_tag() {
        let event = DiagnosticEvent::new(DiagnosticEventKind::FadeStarted {
            message: 7,
            direction: FadeDirection::Out,
            duration_ms: 250,
        });
        let json = serde_json::to_value(&event).expect("serialize");
        assert_eq!(json["type"], "fade_started");
        assert_eq!(json["message"], 7);
        assert_eq!(json["direction"], "out");
    }

    #[test]
    fn error_classification() {
        let usage = DiagnosticEvent::new(DiagnosticEventKind::UsageError {
            error: "boom".into(),
        });
        let queued = DiagnosticEvent::new(DiagnosticEventKind::MessageQueued { message: 1 });
        assert!(usage.is_error());
        assert!(!queued.is_error());
    }
}
