// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Visible toast limit and fade timing
//! - **Diagnostics**: Event buffer capacity
//! - **Logging**: Default tracing filter

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default number of toasts shown at once (others wait in the manager queue).
pub const DEFAULT_MAX_VISIBLE: usize = 3;

/// Minimum number of visible toasts.
pub const MIN_MAX_VISIBLE: usize = 1;

/// Maximum number of visible toasts.
pub const MAX_MAX_VISIBLE: usize = 10;

/// Whether toasts fade in and out by default.
pub const DEFAULT_FADE_ENABLED: bool = true;

/// Default fade duration in milliseconds.
pub const DEFAULT_FADE_DURATION_MS: u64 = 250;

/// Minimum fade duration (zero completes on the next tick).
pub const MIN_FADE_DURATION_MS: u64 = 0;

/// Maximum fade duration in milliseconds.
pub const MAX_FADE_DURATION_MS: u64 = 5_000;

/// Interval of the tick driving auto-dismiss and fades (~60 fps).
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default diagnostics buffer capacity (events).
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 16;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Logging Defaults
// ==========================================================================

/// Default tracing filter directive.
pub const DEFAULT_LOG_FILTER: &str = "iced_toasts=info";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_VISIBLE > 0);
    assert!(MAX_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);

    assert!(MAX_FADE_DURATION_MS >= MIN_FADE_DURATION_MS);
    assert!(DEFAULT_FADE_DURATION_MS >= MIN_FADE_DURATION_MS);
    assert!(DEFAULT_FADE_DURATION_MS <= MAX_FADE_DURATION_MS);

    assert!(TICK_INTERVAL_MS > 0);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_defaults_are_valid() {
        assert_eq!(DEFAULT_FADE_DURATION_MS, 250);
        assert!(DEFAULT_FADE_DURATION_MS <= MAX_FADE_DURATION_MS);
    }

    #[test]
    fn tick_is_shorter_than_default_fade() {
        assert!(TICK_INTERVAL_MS < DEFAULT_FADE_DURATION_MS);
    }
}
