// SPDX-License-Identifier: MPL-2.0
//! Domain value objects with validated ranges.
//!
//! - [`FadeDuration`](newtypes::FadeDuration): toast fade length
//! - [`MaxVisible`](newtypes::MaxVisible): visible toast limit
//! - [`BufferCapacity`](newtypes::BufferCapacity): diagnostics buffer size

pub mod newtypes;

pub use newtypes::{BufferCapacity, FadeDuration, MaxVisible};
