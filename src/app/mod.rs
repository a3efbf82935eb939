// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a toast container bound to one of two managers.
//!
//! The `App` owns both managers and the container. Every update ends with a
//! pump so the container mirrors whatever the bound manager raised, and the
//! tick subscription runs only while something is queued or fading.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{Config, DEFAULT_FADE_DURATION_MS};
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::FadeDuration;
use crate::notifications::{Manager, ManagerMessage, Notification, NotificationContainer, Severity};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Which of the two demo managers the container is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerSlot {
    Primary,
    Secondary,
}

impl ManagerSlot {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::Primary => Self::Secondary,
            Self::Secondary => Self::Primary,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Root application state.
pub struct App {
    primary: Manager<Notification>,
    secondary: Manager<Notification>,
    toasts: NotificationContainer<Notification>,
    active: ManagerSlot,
    /// Fade applied to newly pushed notifications; `None` disables fading.
    fade: Option<FadeDuration>,
    /// Duration used when fading is re-enabled from the UI.
    fade_duration: FadeDuration,
    diagnostics: DiagnosticsHandle,
    /// Last container error, shown under the controls.
    status: Option<String>,
    pushed: u64,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.active)
            .field("items", &self.toasts.len())
            .field("fade", &self.fade)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags, config: Config) -> iced::Result {
    use std::cell::RefCell;

    // iced requires a `Fn` boot closure; the inputs are consumed on first call.
    let boot_state = RefCell::new(Some((flags, config)));
    let boot = move || {
        let (flags, config) = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags, config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Resolves the effective fade: `--no-fade` wins, then `--fade-ms`, then the config.
fn resolve_fade(flags: &Flags, config: &Config) -> Option<FadeDuration> {
    if flags.no_fade {
        return None;
    }
    match flags.fade_ms {
        Some(ms) => Some(FadeDuration::from_millis(ms)),
        None => config.notifications.fade(),
    }
}

impl App {
    /// Creates the app with the container bound to the primary manager.
    pub fn new(flags: Flags, config: Config) -> (Self, Task<Message>) {
        let diagnostics = DiagnosticsHandle::new(config.diagnostics.buffer_capacity());
        let max_visible = config.notifications.max_visible();

        let mut primary = Manager::with_max_visible(max_visible);
        primary.set_diagnostics(diagnostics.clone());
        let mut secondary = Manager::with_max_visible(max_visible);
        secondary.set_diagnostics(diagnostics.clone());

        let mut toasts = NotificationContainer::new();
        toasts.set_diagnostics(diagnostics.clone());

        let fade = resolve_fade(&flags, &config);
        let fade_duration = fade.unwrap_or(FadeDuration::from_millis(
            config
                .notifications
                .fade_duration_ms
                .unwrap_or(DEFAULT_FADE_DURATION_MS),
        ));

        let status = toasts
            .set_manager(Some(&mut primary))
            .err()
            .map(|err| err.to_string());

        let app = Self {
            primary,
            secondary,
            toasts,
            active: ManagerSlot::Primary,
            fade,
            fade_duration,
            diagnostics,
            status,
            pushed: 0,
        };
        tracing::info!(?app, "application started");
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Toasts ({} manager)", self.active.label())
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn manager_mut(&mut self, slot: ManagerSlot) -> &mut Manager<Notification> {
        match slot {
            ManagerSlot::Primary => &mut self.primary,
            ManagerSlot::Secondary => &mut self.secondary,
        }
    }

    fn manager(&self, slot: ManagerSlot) -> &Manager<Notification> {
        match slot {
            ManagerSlot::Primary => &self.primary,
            ManagerSlot::Secondary => &self.secondary,
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::Push(severity) => self.push_demo(severity),
            Message::Notification(ManagerMessage::Dismiss(id)) => {
                // The id belongs to whichever manager pushed it.
                if !self.primary.dismiss(id) {
                    self.secondary.dismiss(id);
                }
            }
            Message::Notification(ManagerMessage::Tick(at)) | Message::Tick(at) => {
                self.primary.tick(at);
                self.secondary.tick(at);
                self.sync(at);
                self.toasts.tick(at);
            }
            Message::SwitchManager => self.switch_manager(),
            Message::ClearAll => self.manager_mut(self.active).clear(),
            Message::ToggleFade(enabled) => {
                self.fade = enabled.then_some(self.fade_duration);
            }
            Message::DumpDiagnostics => match self.diagnostics.export_json() {
                Ok(json) => tracing::info!(events = self.diagnostics.len(), "{json}"),
                Err(err) => tracing::warn!(%err, "failed to export diagnostics"),
            },
        }
        self.sync(now);
        Task::none()
    }

    fn push_demo(&mut self, severity: Severity) {
        self.pushed += 1;
        let text = match severity {
            Severity::Success => format!("Saved item {}", self.pushed),
            Severity::Info => format!("Heads up, this is toast {}", self.pushed),
            Severity::Warning => format!("Toast {} needs attention", self.pushed),
            Severity::Error => format!("Toast {} failed", self.pushed),
        };
        let notification = Notification::new(severity, text).with_fade_setting(self.fade);
        let active = self.active;
        self.manager_mut(active).notify(notification);
    }

    /// Rebinds the container to the other manager.
    ///
    /// The outgoing manager is cleared first so its toasts leave the screen
    /// before the binding moves.
    fn switch_manager(&mut self) {
        let previous = self.active;
        self.manager_mut(previous).clear();

        let next = previous.other();
        let result = match next {
            ManagerSlot::Primary => self.toasts.set_manager(Some(&mut self.primary)),
            ManagerSlot::Secondary => self.toasts.set_manager(Some(&mut self.secondary)),
        };
        self.active = next;
        if let Err(err) = result {
            self.status = Some(err.to_string());
        }
        tracing::info!(from = previous.label(), to = next.label(), "switched manager");
    }

    /// Applies pending manager events to the container.
    fn sync(&mut self, now: Instant) {
        if let Err(err) = self.toasts.pump(now) {
            tracing::warn!(%err, "container rejected manager event");
            self.status = Some(err.to_string());
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let manager = self.manager(self.active);
        view::view(view::ViewContext {
            toasts: &self.toasts,
            active: self.active,
            fade_enabled: self.fade.is_some(),
            visible: manager.visible_count(),
            pending: manager.pending_count(),
            status: self.status.as_deref(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(
            self.primary.has_notifications() || self.secondary.has_notifications(),
            self.toasts.is_animating() || !self.toasts.is_empty(),
        )
    }
}
