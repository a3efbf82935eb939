// SPDX-License-Identifier: MPL-2.0
//! Toast notification system.
//!
//! A [`Manager`] owns the logical set of notifications and raises
//! `Queued` / `Dismissed` events. A [`NotificationContainer`] bound to it
//! mirrors those events into the list of toasts on screen, fading messages
//! that expose the [`Animatable`] capability.
//!
//! # Components
//!
//! - [`message`] - The `QueuedMessage` / `Animatable` contracts and `VisualElement`
//! - [`manager`] - `Manager` for queuing, auto-dismiss and event delivery
//! - [`container`] - `NotificationContainer`, the event-to-items bridge
//! - [`fade`] - Linear opacity tween with hold-end / stop fill
//! - [`notification`] - The concrete `Notification` with severity levels
//!
//! # Usage
//!
//! ```
//! use iced_toasts::notifications::{Manager, Notification, NotificationContainer};
//! use std::time::Instant;
//!
//! let mut manager = Manager::new();
//! let mut container = NotificationContainer::new();
//! container.set_manager(Some(&mut manager)).unwrap();
//!
//! manager.push(Notification::success("Settings saved"));
//! container.pump(Instant::now()).unwrap();
//! assert_eq!(container.len(), 1);
//! ```

pub mod container;
pub mod fade;
pub mod manager;
pub mod message;
pub mod notification;

pub use container::NotificationContainer;
pub use fade::{Fade, FadeDirection, FadeState, FillBehavior};
pub use manager::{Manager, ManagerEvent, ManagerId, Message as ManagerMessage, Subscription};
pub use message::{Animatable, MessageId, QueuedMessage, VisualElement};
pub use notification::{Notification, Severity};
