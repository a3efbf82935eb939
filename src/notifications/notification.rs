// SPDX-License-Identifier: MPL-2.0
//! The application's concrete message type.
//!
//! A `Notification` carries a severity, its text, auto-dismiss timing and
//! the fade metadata the container uses through [`Animatable`].

use super::message::{Animatable, MessageId, QueuedMessage, VisualElement};
use crate::domain::FadeDuration;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::{Duration, Instant};

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// Operation completed successfully (green, 3s duration).
    #[default]
    Success,
    /// Informational message (blue, 3s duration).
    Info,
    /// Warning that doesn't block operation (orange, 5s duration).
    Warning,
    /// Error requiring attention (red, manual dismiss).
    Error,
}

impl Severity {
    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration, `None` for errors.
    #[must_use]
    pub fn auto_dismiss_duration(&self) -> Option<Duration> {
        match self {
            Severity::Success | Severity::Info => Some(Duration::from_secs(3)),
            Severity::Warning => Some(Duration::from_secs(5)),
            Severity::Error => None,
        }
    }

    /// Short glyph shown in front of the text.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Info => "ℹ",
            Severity::Warning | Severity::Error => "⚠",
        }
    }
}

/// Fade settings of one notification.
#[derive(Debug, Clone, PartialEq)]
struct FadeSettings {
    enabled: bool,
    duration: FadeDuration,
    element: VisualElement,
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: MessageId,
    severity: Severity,
    text: String,
    created_at: Instant,
    /// Overrides the severity default when set.
    custom_dismiss_duration: Option<Duration>,
    fade: FadeSettings,
}

impl PartialEq for Notification {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Notification {
    /// Creates a new notification that fades with the default duration.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            severity,
            text: text.into(),
            created_at: Instant::now(),
            custom_dismiss_duration: None,
            fade: FadeSettings {
                enabled: true,
                duration: FadeDuration::default(),
                element: VisualElement::new(),
            },
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Severity::Success, text)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(Severity::Warning, text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(Severity::Error, text)
    }

    /// Sets a custom auto-dismiss duration, overriding the severity default.
    #[must_use]
    pub fn auto_dismiss(mut self, duration: Duration) -> Self {
        self.custom_dismiss_duration = Some(duration);
        self
    }

    /// Enables fading with the given duration.
    #[must_use]
    pub fn with_fade(mut self, duration: FadeDuration) -> Self {
        self.fade.enabled = true;
        self.fade.duration = duration;
        self
    }

    /// Shows and hides the notification without animation.
    #[must_use]
    pub fn without_fade(mut self) -> Self {
        self.fade.enabled = false;
        self
    }

    /// Applies the configured fade, `None` meaning no animation.
    #[must_use]
    pub fn with_fade_setting(self, fade: Option<FadeDuration>) -> Self {
        match fade {
            Some(duration) => self.with_fade(duration),
            None => self.without_fade(),
        }
    }

    #[must_use]
    pub fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Current opacity of the rendered toast.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.fade.element.opacity()
    }

    /// The effective auto-dismiss delay, if any.
    #[must_use]
    pub fn dismiss_after(&self) -> Option<Duration> {
        self.custom_dismiss_duration
            .or_else(|| self.severity.auto_dismiss_duration())
    }
}

impl QueuedMessage for Notification {
    fn id(&self) -> MessageId {
        self.id
    }

    fn as_animatable(&self) -> Option<&dyn Animatable> {
        Some(self as &dyn Animatable)
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.dismiss_after()
            .is_some_and(|after| now.saturating_duration_since(self.created_at) >= after)
    }
}

impl Animatable for Notification {
    fn animates(&self) -> bool {
        self.fade.enabled
    }

    fn animatable_element(&self) -> Option<&VisualElement> {
        Some(&self.fade.element)
    }

    fn animation_duration(&self) -> Duration {
        self.fade.duration.as_duration()
    }
}
