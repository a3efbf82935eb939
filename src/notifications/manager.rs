// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the logical message set: it queues messages, limits how
//! many are visible, auto-dismisses expired ones on tick, and raises
//! [`ManagerEvent::Queued`] / [`ManagerEvent::Dismissed`] to every listener.
//!
//! Listeners receive events through an unbounded FIFO channel, so delivery
//! order is the order in which events were raised. Dropping the receiving
//! [`Subscription`] detaches the listener; nothing raised afterwards can
//! reach it.

use super::message::{MessageId, QueuedMessage};
use super::notification::{Notification, Severity};
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use crate::domain::MaxVisible;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

/// Unique identifier of a manager instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManagerId(u64);

impl ManagerId {
    fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Identifier of one listener on one manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Events raised by a manager.
#[derive(Debug, Clone, PartialEq)]
pub enum ManagerEvent<M> {
    /// The message became visible.
    Queued(M),
    /// The visible message was dismissed.
    Dismissed(M),
}

impl<M: QueuedMessage> ManagerEvent<M> {
    #[must_use]
    pub fn message(&self) -> &M {
        match self {
            ManagerEvent::Queued(message) | ManagerEvent::Dismissed(message) => message,
        }
    }
}

/// Receiving end of a manager listener.
#[derive(Debug)]
pub struct Subscription<M> {
    id: SubscriptionId,
    manager: ManagerId,
    receiver: UnboundedReceiver<ManagerEvent<M>>,
}

impl<M> Subscription<M> {
    #[must_use]
    pub fn id(&self) -> SubscriptionId {
        self.id
    }

    /// The manager this subscription listens to.
    #[must_use]
    pub fn manager(&self) -> ManagerId {
        self.manager
    }

    /// Takes the oldest pending event, if any.
    pub fn try_next(&mut self) -> Option<ManagerEvent<M>> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }
}

/// Messages for manager state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific message by ID.
    Dismiss(MessageId),
    /// Periodic tick for auto-dismiss timers.
    Tick(Instant),
}

/// Manages the message queue and the visible messages.
#[derive(Debug)]
pub struct Manager<M = Notification> {
    id: ManagerId,
    /// Currently visible messages, oldest first.
    visible: VecDeque<M>,
    /// Messages waiting for a free slot.
    pending: VecDeque<M>,
    max_visible: MaxVisible,
    listeners: Vec<(SubscriptionId, UnboundedSender<ManagerEvent<M>>)>,
    next_subscription: u64,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<M: QueuedMessage> Default for Manager<M> {
    fn default() -> Self {
        Self::with_max_visible(MaxVisible::default())
    }
}

impl<M: QueuedMessage> Manager<M> {
    /// Creates a new empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_visible(max_visible: MaxVisible) -> Self {
        Self {
            id: ManagerId::next(),
            visible: VecDeque::new(),
            pending: VecDeque::new(),
            max_visible,
            listeners: Vec::new(),
            next_subscription: 0,
            diagnostics: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ManagerId {
        self.id
    }

    /// Sets the diagnostics handle for recording activity.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    /// Attaches a new listener.
    pub fn subscribe(&mut self) -> Subscription<M> {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        let (sender, receiver) = mpsc::unbounded_channel();
        self.listeners.push((id, sender));
        tracing::debug!(manager = self.id.0, subscription = id.0, "listener attached");
        Subscription {
            id,
            manager: self.id,
            receiver,
        }
    }

    /// Detaches a listener. Returns `false` if it was not attached.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener, _)| *listener != id);
        let removed = self.listeners.len() < before;
        if removed {
            tracing::debug!(manager = self.id.0, subscription = id.0, "listener detached");
        }
        removed
    }

    /// Number of live listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .iter()
            .filter(|(_, sender)| !sender.is_closed())
            .count()
    }

    fn emit(&mut self, event: &ManagerEvent<M>) {
        // A send only fails when the receiver was dropped: prune that listener.
        self.listeners
            .retain(|(_, sender)| sender.send(event.clone()).is_ok());
    }

    /// Pushes a new message.
    ///
    /// If fewer than `max_visible` messages are showing it becomes visible and
    /// `Queued` is raised; otherwise it waits until a slot frees up. A message
    /// whose id is already visible or pending is ignored.
    pub fn push(&mut self, message: M) {
        let id = message.id();
        if self.visible.iter().chain(self.pending.iter()).any(|m| m.id() == id) {
            tracing::trace!(manager = self.id.0, toast = %id, "message already queued");
            return;
        }
        if self.visible.len() < self.max_visible.value() {
            self.show(message);
        } else {
            tracing::trace!(manager = self.id.0, toast = %id, "message pending");
            self.pending.push_back(message);
        }
    }

    fn show(&mut self, message: M) {
        tracing::debug!(manager = self.id.0, toast = %message.id(), "message queued");
        self.visible.push_back(message.clone());
        self.emit(&ManagerEvent::Queued(message));
    }

    /// Dismisses a message by its ID.
    ///
    /// A visible message raises `Dismissed` and frees its slot; a pending one
    /// is dropped silently. Returns `true` if the message was found.
    pub fn dismiss(&mut self, id: MessageId) -> bool {
        if let Some(pos) = self.visible.iter().position(|m| m.id() == id) {
            if let Some(message) = self.visible.remove(pos) {
                tracing::debug!(manager = self.id.0, toast = %id, "message dismissed");
                self.emit(&ManagerEvent::Dismissed(message));
            }
            self.promote_pending();
            return true;
        }

        if let Some(pos) = self.pending.iter().position(|m| m.id() == id) {
            self.pending.remove(pos);
            return true;
        }

        false
    }

    /// Dismisses every visible message whose expiry has passed at `now`.
    pub fn tick(&mut self, now: Instant) {
        let expired: Vec<MessageId> = self
            .visible
            .iter()
            .filter(|m| m.is_expired(now))
            .map(QueuedMessage::id)
            .collect();

        for id in expired {
            self.dismiss(id);
        }
    }

    /// Handles a manager message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick(now) => self.tick(*now),
        }
    }

    /// Returns the currently visible messages, oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &M> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Returns whether there are any messages (visible or pending).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.pending.is_empty()
    }

    /// Dismisses every visible message and drops the pending ones.
    pub fn clear(&mut self) {
        self.pending.clear();
        while let Some(message) = self.visible.pop_front() {
            self.emit(&ManagerEvent::Dismissed(message));
        }
    }

    fn promote_pending(&mut self) {
        while self.visible.len() < self.max_visible.value() {
            match self.pending.pop_front() {
                Some(message) => self.show(message),
                None => break,
            }
        }
    }
}

impl Manager<Notification> {
    /// Pushes a notification, recording warnings and errors in diagnostics.
    pub fn notify(&mut self, notification: Notification) {
        if let Some(handle) = &self.diagnostics {
            match notification.severity() {
                Severity::Warning => handle.record(DiagnosticEventKind::Warning {
                    text: notification.text().to_string(),
                }),
                Severity::Error => handle.record(DiagnosticEventKind::Error {
                    text: notification.text().to_string(),
                }),
                Severity::Success | Severity::Info => {}
            }
        }
        self.push(notification);
    }
}
