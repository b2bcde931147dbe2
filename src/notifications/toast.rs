// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts are the visual representation of notifications, appearing as
//! small cards with severity-colored accents, an optional action button
//! and a dismiss button.

use super::manager::{Manager, Message};
use super::presentation::{self, HorizontalEdge, ToastPosition, ToastView, VerticalEdge};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Glyph used by the dismiss button.
const DISMISS_GLYPH: &str = "×";

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(view: ToastView) -> Element<'a, Message> {
        let alpha = view.opacity();
        let accent_color = Color {
            a: alpha,
            ..view.accent
        };

        let icon_widget = Text::new(view.glyph)
            .size(typography::TITLE_SM)
            .style(move |_theme: &Theme| text::Style {
                color: Some(accent_color),
            });

        let mut body = Column::new().spacing(spacing::XXS);
        if let Some(title) = view.title {
            body = body.push(
                Text::new(title)
                    .size(typography::BODY_LG)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.palette().text),
                    }),
            );
        }
        body = body.push(
            Text::new(view.body)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                }),
        );

        // Layout: [icon] [title/message] [action] [dismiss]
        let mut content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Container::new(icon_widget).padding(spacing::XXS))
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            );

        if let Some(label) = view.action_label {
            content = content.push(
                button(Text::new(label).size(typography::BODY_SM))
                    .on_press(Message::TriggerAction(view.id))
                    .padding(spacing::XXS)
                    .style(move |theme: &Theme, status| {
                        action_button_style(theme, status, accent_color)
                    }),
            );
        }

        let dismiss_button = button(Text::new(DISMISS_GLYPH).size(sizing::ICON_SM))
            .on_press(Message::Dismiss(view.id))
            .padding(spacing::XXS)
            .style(dismiss_button_style);
        content = content.push(dismiss_button);

        // Toast container with accent border
        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications, anchored
    /// where the manager's settings say.
    pub fn view_overlay<'a>(manager: &Manager) -> Element<'a, Message> {
        let position = manager.settings().position;
        let views = presentation::project(&manager.notifications(), position);
        Self::view_stack(views, position)
    }

    /// Renders already projected toasts as a positioned stack.
    pub fn view_stack<'a>(views: Vec<ToastView>, position: ToastPosition) -> Element<'a, Message> {
        if views.is_empty() {
            // Return an empty container that takes no space
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let horizontal = horizontal_alignment(position.horizontal);
        let toasts: Vec<Element<'a, Message>> = views.into_iter().map(Self::view).collect();
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(vertical_alignment(position.vertical))
            .padding(spacing::MD)
            .into()
    }
}

fn horizontal_alignment(edge: HorizontalEdge) -> alignment::Horizontal {
    match edge {
        HorizontalEdge::Left => alignment::Horizontal::Left,
        HorizontalEdge::Center => alignment::Horizontal::Center,
        HorizontalEdge::Right => alignment::Horizontal::Right,
    }
}

fn vertical_alignment(edge: VerticalEdge) -> alignment::Vertical {
    match edge {
        VerticalEdge::Top => alignment::Vertical::Top,
        VerticalEdge::Bottom => alignment::Vertical::Bottom,
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::SURFACE.min(accent_color.a),
            ..bg_color
        })),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the action button: outlined in the severity color.
fn action_button_style(
    theme: &Theme,
    status: button::Status,
    accent_color: Color,
) -> button::Style {
    let base = theme.extended_palette().background.base;
    let fill = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background: fill.map(|a| iced::Background::Color(Color { a, ..accent_color })),
        text_color: base.text,
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color: base.text,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(iced::Background::Color(Color {
                a: if status == button::Status::Hovered {
                    opacity::OVERLAY_SUBTLE
                } else {
                    opacity::OVERLAY_MEDIUM
                },
                ..palette::GRAY_400
            })),
            text_color: base.text,
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}
