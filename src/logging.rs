// SPDX-License-Identifier: MPL-2.0
//! Console logging setup.
//!
//! `RUST_LOG` takes precedence over the filter from `settings.toml` or `--log`.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Builds the filter: `RUST_LOG` if set and valid, otherwise `fallback`.
#[must_use]
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global tracing subscriber.
///
/// Returns `false` if a subscriber was already installed (e.g. by a test harness).
pub fn init(fallback_filter: &str) -> bool {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .with(build_filter(fallback_filter))
        .try_init()
        .is_ok()
}
