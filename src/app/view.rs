// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::{ManagerSlot, Message};
use crate::notifications::{Notification, NotificationContainer, Severity};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::toast::Toast;
use iced::widget::{button, checkbox, Column, Container, Row, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toasts: &'a NotificationContainer<Notification>,
    pub active: ManagerSlot,
    pub fade_enabled: bool,
    pub visible: usize,
    pub pending: usize,
    pub status: Option<&'a str>,
}

/// Renders the controls with the toast overlay stacked on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let push_buttons = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Success")).on_press(Message::Push(Severity::Success)))
        .push(button(Text::new("Info")).on_press(Message::Push(Severity::Info)))
        .push(button(Text::new("Warning")).on_press(Message::Push(Severity::Warning)))
        .push(button(Text::new("Error")).on_press(Message::Push(Severity::Error)));

    let manager_row = Row::new()
        .spacing(spacing::XS)
        .push(button(Text::new("Switch manager")).on_press(Message::SwitchManager))
        .push(button(Text::new("Clear all")).on_press(Message::ClearAll))
        .push(button(Text::new("Dump diagnostics")).on_press(Message::DumpDiagnostics));

    let fade_toggle = checkbox(ctx.fade_enabled).label("Fade in/out").on_toggle(Message::ToggleFade);

    let summary = Text::new(format!(
        "Bound to the {} manager: {} visible, {} pending, {} on screen",
        ctx.active.label(),
        ctx.visible,
        ctx.pending,
        ctx.toasts.len()
    ))
    .size(typography::CAPTION);

    let mut controls = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(Text::new("Toast notifications").size(typography::TITLE_MD))
        .push(push_buttons)
        .push(manager_row)
        .push(fade_toggle)
        .push(summary);

    if let Some(status) = ctx.status {
        controls = controls.push(Text::new(status).size(typography::CAPTION));
    }

    let overlay = Toast::view_overlay(ctx.toasts).map(Message::Notification);

    Stack::new()
        .push(
            Container::new(controls)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .push(overlay)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
