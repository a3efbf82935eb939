// SPDX-License-Identifier: MPL-2.0
//! The visible toast list, kept in step with a bound [`Manager`].
//!
//! The container listens to exactly one manager at a time. Each `Queued`
//! event appends the message to [`items`](NotificationContainer::items) and
//! each `Dismissed` event removes it, either immediately or once its fade-out
//! has finished. Fades are advanced by [`tick`](NotificationContainer::tick).
//!
//! An external items source can be displayed instead of the internal list,
//! but never both: manager events arriving while a source is bound are
//! rejected with [`Error::ItemsSourceInUse`].

use super::fade::{Fade, FadeDirection, FadeState};
use super::manager::{Manager, ManagerEvent, ManagerId, Subscription};
use super::message::{MessageId, QueuedMessage, VisualElement};
use super::notification::Notification;
use crate::diagnostics::{DiagnosticEventKind, DiagnosticsHandle};
use crate::error::{Error, Result};
use std::any::Any;
use std::time::{Duration, Instant};

/// A fade in progress for one item.
#[derive(Debug)]
struct ActiveFade {
    message: MessageId,
    fade: Fade,
}

/// Toast list bound to a manager.
#[derive(Debug)]
pub struct NotificationContainer<M = Notification> {
    items: Vec<M>,
    items_source: Option<Vec<M>>,
    binding: Option<Subscription<M>>,
    fades: Vec<ActiveFade>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl<M: QueuedMessage> Default for NotificationContainer<M> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            items_source: None,
            binding: None,
            fades: Vec::new(),
            diagnostics: None,
        }
    }
}

impl<M: QueuedMessage> NotificationContainer<M> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostics handle for recording activity.
    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    fn record(&self, kind: DiagnosticEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.record(kind);
        }
    }

    fn usage_error(&self, error: Error) -> Error {
        tracing::error!(%error, "notification container misuse");
        self.record(DiagnosticEventKind::UsageError {
            error: error.to_string(),
        });
        error
    }

    // =========================================================================
    // Manager binding
    // =========================================================================

    /// Binds the container to `manager`, or unbinds it with `None`.
    ///
    /// Events the previous manager raised while bound are applied first, then
    /// its listener is detached; nothing it raises afterwards reaches this
    /// container. The binding changes even if applying those events fails, in
    /// which case the first failure is returned.
    pub fn set_manager(&mut self, manager: Option<&mut Manager<M>>) -> Result<()> {
        let next = manager.map(Manager::subscribe);
        self.on_manager_changed(next, Instant::now())
    }

    /// Binds to a value of unknown type.
    ///
    /// Anything other than a `Manager<M>` is rejected and the current binding
    /// is kept.
    pub fn try_set_manager(&mut self, value: &mut dyn Any) -> Result<()>
    where
        M: 'static,
    {
        match value.downcast_mut::<Manager<M>>() {
            Some(manager) => self.set_manager(Some(manager)),
            None => Err(self.usage_error(Error::IncompatibleManager {
                expected: std::any::type_name::<Manager<M>>(),
            })),
        }
    }

    /// Detach/attach hook run whenever the bound manager changes.
    fn on_manager_changed(&mut self, next: Option<Subscription<M>>, now: Instant) -> Result<()> {
        let mut outcome = Ok(());

        if let Some(mut previous) = self.binding.take() {
            while let Some(event) = previous.try_next() {
                if let Err(err) = self.handle_event(event, now) {
                    outcome = Err(err);
                    break;
                }
            }
            let manager = previous.manager();
            drop(previous);
            tracing::debug!(manager = manager.value(), "container unbound");
            self.record(DiagnosticEventKind::ManagerUnbound {
                manager: manager.value(),
            });
        }

        if let Some(subscription) = next {
            let manager = subscription.manager();
            tracing::debug!(manager = manager.value(), "container bound");
            self.record(DiagnosticEventKind::ManagerBound {
                manager: manager.value(),
            });
            self.binding = Some(subscription);
        }

        outcome
    }

    /// The currently bound manager.
    #[must_use]
    pub fn manager_id(&self) -> Option<ManagerId> {
        self.binding.as_ref().map(Subscription::manager)
    }

    // =========================================================================
    // Event handling
    // =========================================================================

    /// Applies every pending event from the bound manager, in raise order.
    ///
    /// Stops at the first failure; the remaining events stay pending.
    /// Returns the number of events applied.
    pub fn pump(&mut self, now: Instant) -> Result<usize> {
        let mut applied = 0;
        loop {
            let Some(event) = self.binding.as_mut().and_then(Subscription::try_next) else {
                return Ok(applied);
            };
            self.handle_event(event, now)?;
            applied += 1;
        }
    }

    /// Applies one manager event.
    pub fn handle_event(&mut self, event: ManagerEvent<M>, now: Instant) -> Result<()> {
        match event {
            ManagerEvent::Queued(message) => self.on_message_queued(message, now),
            ManagerEvent::Dismissed(message) => self.on_message_dismissed(&message, now),
        }
    }

    fn ensure_items_in_use(&self) -> Result<()> {
        if self.items_source.is_some() {
            return Err(self.usage_error(Error::ItemsSourceInUse));
        }
        Ok(())
    }

    fn on_message_queued(&mut self, message: M, now: Instant) -> Result<()> {
        self.ensure_items_in_use()?;

        let id = message.id();
        tracing::debug!(toast = %id, "toast added");
        self.record(DiagnosticEventKind::MessageQueued { message: id.value() });

        let fade = fade_target(&message)
            .map(|(element, duration)| Fade::fade_in(element, duration, now));
        // A re-queued id replaces its item in place and drops any exit fade.
        match self.items.iter().position(|m| m.id() == id) {
            Some(pos) => {
                self.cancel_fade(id);
                self.items[pos] = message;
            }
            None => self.items.push(message),
        }
        if let Some(fade) = fade {
            self.start_fade(id, fade);
        }
        Ok(())
    }

    fn on_message_dismissed(&mut self, message: &M, now: Instant) -> Result<()> {
        self.ensure_items_in_use()?;

        let id = message.id();
        if !self.contains(id) {
            tracing::trace!(toast = %id, "dismissed message is not displayed");
            return Ok(());
        }
        if self.is_fading_out(id) {
            tracing::trace!(toast = %id, "dismissed message is already leaving");
            return Ok(());
        }

        match fade_target(message) {
            Some((element, duration)) => {
                self.record(DiagnosticEventKind::MessageDismissed {
                    message: id.value(),
                    animated: true,
                });
                self.start_fade(id, Fade::fade_out(element, duration, now));
            }
            None => {
                self.record(DiagnosticEventKind::MessageDismissed {
                    message: id.value(),
                    animated: false,
                });
                self.cancel_fade(id);
                self.remove_item(id);
            }
        }
        Ok(())
    }

    // =========================================================================
    // Animation
    // =========================================================================

    fn start_fade(&mut self, message: MessageId, fade: Fade) {
        // A new fade replaces whatever was running for the same item.
        self.fades.retain(|active| active.message != message);
        tracing::trace!(toast = %message, direction = ?fade.direction(), "fade started");
        self.record(DiagnosticEventKind::FadeStarted {
            message: message.value(),
            direction: fade.direction(),
            duration_ms: u64::try_from(fade.duration().as_millis()).unwrap_or(u64::MAX),
        });
        self.fades.push(ActiveFade { message, fade });
    }

    fn is_fading_out(&self, message: MessageId) -> bool {
        self.fades.iter().any(|active| {
            active.message == message && active.fade.direction() == FadeDirection::Out
        })
    }

    fn cancel_fade(&mut self, message: MessageId) {
        self.fades.retain(|active| active.message != message);
    }

    /// Advances running fades to `now`.
    ///
    /// Completed fade-outs remove their item; the removed ids are returned.
    pub fn tick(&mut self, now: Instant) -> Vec<MessageId> {
        let mut completed = Vec::new();
        self.fades.retain(|active| match active.fade.advance(now) {
            FadeState::Running => true,
            FadeState::Completed => {
                completed.push((active.message, active.fade.direction()));
                false
            }
        });

        let mut removed = Vec::new();
        for (message, direction) in completed {
            self.record(DiagnosticEventKind::FadeCompleted {
                message: message.value(),
                direction,
            });
            if direction == FadeDirection::Out && self.remove_item(message) {
                removed.push(message);
            }
        }
        removed
    }

    /// Whether any fade is still running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.fades.is_empty()
    }

    // =========================================================================
    // Items
    // =========================================================================

    fn remove_item(&mut self, id: MessageId) -> bool {
        match self.items.iter().position(|m| m.id() == id) {
            Some(pos) => {
                self.items.remove(pos);
                tracing::debug!(toast = %id, "toast removed");
                self.record(DiagnosticEventKind::ItemRemoved { message: id.value() });
                true
            }
            None => false,
        }
    }

    /// The internal item list, in queue order.
    #[must_use]
    pub fn items(&self) -> &[M] {
        &self.items
    }

    /// Whether the internal list holds a message with this id.
    #[must_use]
    pub fn contains(&self, id: MessageId) -> bool {
        self.items.iter().any(|m| m.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Binds (or with `None`, unbinds) an external items source.
    ///
    /// Fails if the internal list is not empty.
    pub fn set_items_source(&mut self, source: Option<Vec<M>>) -> Result<()> {
        if source.is_some() && !self.items.is_empty() {
            return Err(self.usage_error(Error::ItemsNotEmpty));
        }
        self.items_source = source;
        Ok(())
    }

    #[must_use]
    pub fn items_source(&self) -> Option<&[M]> {
        self.items_source.as_deref()
    }

    /// What should be rendered: the items source if bound, otherwise the items.
    #[must_use]
    pub fn displayed(&self) -> &[M] {
        self.items_source.as_deref().unwrap_or(&self.items)
    }
}

/// The element and duration to fade, if the message animates at all.
fn fade_target<M: QueuedMessage>(message: &M) -> Option<(VisualElement, Duration)> {
    let animatable = message.as_animatable()?;
    if !animatable.animates() {
        return None;
    }
    let element = animatable.animatable_element()?.clone();
    Some((element, animatable.animation_duration()))
}
