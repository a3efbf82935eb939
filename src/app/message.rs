// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications::{ManagerMessage, Severity};
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Push a demo notification of the given severity to the active manager.
    Push(Severity),
    /// Messages from the toast overlay (dismiss buttons).
    Notification(ManagerMessage),
    /// Bind the container to the other manager.
    SwitchManager,
    /// Dismiss everything on the active manager.
    ClearAll,
    /// Toggle fading for newly pushed notifications.
    ToggleFade(bool),
    /// Write the diagnostics history to the log.
    DumpDiagnostics,
    /// Periodic tick for auto-dismiss and fades.
    Tick(Instant),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOASTS_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Fade duration override in milliseconds.
    pub fade_ms: Option<u64>,
    /// Disable fades regardless of the configuration.
    pub no_fade: bool,
    /// Tracing filter override.
    pub log_filter: Option<String>,
}
