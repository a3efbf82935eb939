// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick driving notification auto-dismiss and fades.
///
/// The tick only runs while something is on screen or animating.
pub fn create_tick_subscription(has_notifications: bool, is_animating: bool) -> Subscription<Message> {
    if has_notifications || is_animating {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
