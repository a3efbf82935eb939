// SPDX-License-Identifier: MPL-2.0
//! Type-safe wrappers for notification and diagnostics settings.
//!
//! Each newtype clamps on construction so values read from `settings.toml`
//! or the command line never need checking at the usage site.

use crate::config::defaults::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, DEFAULT_FADE_DURATION_MS, DEFAULT_MAX_VISIBLE,
    MAX_DIAGNOSTICS_BUFFER_CAPACITY, MAX_FADE_DURATION_MS, MAX_MAX_VISIBLE,
    MIN_DIAGNOSTICS_BUFFER_CAPACITY, MIN_FADE_DURATION_MS, MIN_MAX_VISIBLE,
};
use std::time::Duration;

// =============================================================================
// FadeDuration
// =============================================================================

/// Length of a toast fade-in or fade-out (0–5000 ms).
///
/// # Example
///
/// ```
/// use iced_toasts::domain::FadeDuration;
///
/// let fade = FadeDuration::from_millis(300);
/// assert_eq!(fade.as_millis(), 300);
///
/// // Values outside range are clamped
/// assert_eq!(FadeDuration::from_millis(60_000).as_millis(), 5_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct FadeDuration(u64);

impl FadeDuration {
    /// Creates a fade duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_FADE_DURATION_MS, MAX_FADE_DURATION_MS))
    }

    /// Creates a fade duration from fractional seconds.
    ///
    /// Negative and non-finite values map to zero.
    #[must_use]
    pub fn from_secs_f32(secs: f32) -> Self {
        if !secs.is_finite() || secs <= 0.0 {
            return Self::from_millis(0);
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // clamped right after; anything above u64 range saturates
        let millis = (secs * 1000.0).round() as u64;
        Self::from_millis(millis)
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true when the fade completes instantly.
    #[must_use]
    pub fn is_instant(self) -> bool {
        self.0 == 0
    }
}

impl Default for FadeDuration {
    fn default() -> Self {
        Self(DEFAULT_FADE_DURATION_MS)
    }
}

// =============================================================================
// MaxVisible
// =============================================================================

/// Number of toasts a manager shows at once (1–10).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaxVisible(usize);

impl MaxVisible {
    /// Creates a new limit, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_MAX_VISIBLE, MAX_MAX_VISIBLE))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for MaxVisible {
    fn default() -> Self {
        Self(DEFAULT_MAX_VISIBLE)
    }
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Capacity of the diagnostics event buffer (16–10000 events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}
