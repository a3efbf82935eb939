// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the container's items.
//!
//! Toasts are small cards with a severity-colored border and a dismiss
//! button. Every color is scaled by the toast's current opacity so the
//! container's fades are visible.

use crate::notifications::{ManagerMessage, Notification, NotificationContainer, Severity};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast rendering helpers.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view(notification: &Notification) -> Element<'_, ManagerMessage> {
        let severity = notification.severity();
        let alpha = notification.opacity();
        let accent_color = faded(severity.color(), alpha);

        let glyph = Text::new(severity.glyph())
            .size(sizing::ICON_MD)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let message_widget = Text::new(notification.text())
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, alpha)),
            });

        let dismiss_button = button(Text::new("✕").size(typography::CAPTION))
            .on_press(ManagerMessage::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));

        // Layout: [glyph] [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(glyph).padding(spacing::XXS))
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, severity, alpha))
            .into()
    }

    /// Renders every displayed item of the container, stacked in the
    /// bottom-right corner.
    pub fn view_overlay(
        toasts: &NotificationContainer<Notification>,
    ) -> Element<'_, ManagerMessage> {
        let cards: Vec<Element<'_, ManagerMessage>> =
            toasts.displayed().iter().map(Self::view).collect();

        if cards.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let column = Column::with_children(cards)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Bottom)
            .padding(spacing::MD)
            .into()
    }
}

/// Scales a color's alpha by the toast opacity.
fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..color
    }
}

fn toast_container_style(theme: &Theme, severity: Severity, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(faded(bg_color, alpha))),
        border: iced::Border {
            color: faded(severity.color(), alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, alpha * opacity::OVERLAY_MEDIUM),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let base = theme.extended_palette().background.base;
    let text_color = faded(base.text, alpha);
    let highlight = |a: f32| {
        Some(iced::Background::Color(faded(
            Color { a, ..palette::GRAY_400 },
            alpha,
        )))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: highlight(opacity::OVERLAY_SUBTLE),
            text_color,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: highlight(opacity::OVERLAY_MEDIUM),
            text_color,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: faded(text_color, opacity::OVERLAY_MEDIUM),
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_container_style_uses_severity_accent() {
        let style = toast_container_style(&Theme::Dark, Severity::Success, 1.0);
        assert_eq!(style.border.color, palette::SUCCESS_500);
        assert!(style.background.is_some());
    }

    #[test]
    fn transparent_toast_has_transparent_border() {
        let style = toast_container_style(&Theme::Dark, Severity::Error, 0.0);
        assert!(style.border.color.a.abs() < f32::EPSILON);
    }

    #[test]
    fn faded_scales_alpha_only() {
        let color = faded(palette::INFO_500, 0.5);
        assert!((color.a - 0.5).abs() < f32::EPSILON);
        assert!((color.r - palette::INFO_500.r).abs() < f32::EPSILON);
    }

    #[test]
    fn dismiss_button_active_has_no_background() {
        let style = dismiss_button_style(&Theme::Light, button::Status::Active, 1.0);
        assert!(style.background.is_none());
    }
}
