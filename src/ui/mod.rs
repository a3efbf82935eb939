// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`toast`] - Toast card and overlay rendering

pub mod design_tokens;
pub mod toast;
