// SPDX-License-Identifier: MPL-2.0
//! The contract a value must fulfil to travel through a manager and be shown
//! by a container.
//!
//! Messages are opaque to the container: it only needs their identity, and
//! optionally their [`Animatable`] capability to decide whether to fade.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Unique identifier of a message. Identity equality is what list removal uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl MessageId {
    /// Creates a new unique message ID.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw numeric value, for logs and diagnostics.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A value queued by a [`Manager`](super::Manager) and displayed by a
/// [`NotificationContainer`](super::NotificationContainer).
pub trait QueuedMessage: Clone {
    /// Identity of this message.
    fn id(&self) -> MessageId;

    /// Optional fade capability. Messages without it are added and removed
    /// without animation.
    fn as_animatable(&self) -> Option<&dyn Animatable> {
        None
    }

    /// Whether the manager should dismiss this message on its next tick.
    fn is_expired(&self, _now: Instant) -> bool {
        false
    }
}

/// Per-message animation metadata.
pub trait Animatable {
    /// Whether this message fades in and out at all.
    fn animates(&self) -> bool;

    /// The visual whose opacity is animated. `None` disables the fade.
    fn animatable_element(&self) -> Option<&VisualElement>;

    /// Length of each fade.
    fn animation_duration(&self) -> Duration;
}

/// Handle to the opacity of a rendered toast.
///
/// Clones share the same value, so the container can animate what the view
/// reads. Two handles are equal only if they point at the same element.
/// Opacity is always within `[0.0, 1.0]`.
#[derive(Debug, Clone)]
pub struct VisualElement {
    opacity_bits: Arc<AtomicU32>,
}

impl VisualElement {
    /// Creates a fully opaque element.
    #[must_use]
    pub fn new() -> Self {
        Self::with_opacity(1.0)
    }

    #[must_use]
    pub fn with_opacity(opacity: f32) -> Self {
        Self {
            opacity_bits: Arc::new(AtomicU32::new(clamp_opacity(opacity).to_bits())),
        }
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        f32::from_bits(self.opacity_bits.load(Ordering::Relaxed))
    }

    /// Sets the opacity, clamping to `[0.0, 1.0]`. NaN becomes 0.
    pub fn set_opacity(&self, opacity: f32) {
        self.opacity_bits
            .store(clamp_opacity(opacity).to_bits(), Ordering::Relaxed);
    }

    /// Whether both handles refer to the same element.
    #[must_use]
    pub fn same_element(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.opacity_bits, &other.opacity_bits)
    }
}

impl Default for VisualElement {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for VisualElement {
    fn eq(&self, other: &Self) -> bool {
        self.same_element(other)
    }
}

fn clamp_opacity(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
