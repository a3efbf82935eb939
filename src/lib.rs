// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a toast notification container for the Iced GUI framework.
//!
//! A [`NotificationContainer`](notifications::NotificationContainer) binds to a
//! [`Manager`](notifications::Manager), mirrors the messages it queues and
//! dismisses, and optionally fades them in and out. The `app` module hosts a
//! small demo built on top of it.

#![doc(html_root_url = "https://docs.rs/iced_toasts/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod logging;
pub mod notifications;
pub mod ui;
