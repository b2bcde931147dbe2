// SPDX-License-Identifier: MPL-2.0
//! Dashboard layout: a panel of demo actions with the toast overlay on top.

use super::message::DemoEvent;
use super::Message;
use crate::notifications::{Manager, Toast};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use iced::widget::{button, text, Column, Container, Row, Stack, Text};
use iced::{Element, Length, Theme};

/// Buttons per row in the demo panel.
const BUTTONS_PER_ROW: usize = 3;

pub fn view(notifications: &Manager) -> Element<'_, Message> {
    let header = Text::new("PharmacyDesk notifications")
        .size(typography::TITLE_MD)
        .style(|_theme: &Theme| text::Style {
            color: Some(palette::PRIMARY_500),
        });

    let settings = notifications.settings();
    let summary = Text::new(format!(
        "{} visible, max {}, default {} ms, {}",
        notifications.len(),
        settings.max_notifications.value(),
        settings.default_duration.millis(),
        settings.position,
    ))
    .size(typography::BODY_SM);

    let rows: Vec<Element<'_, Message>> = DemoEvent::ALL
        .chunks(BUTTONS_PER_ROW)
        .map(|chunk| {
            chunk
                .iter()
                .fold(Row::new().spacing(spacing::XS), |row, event| {
                    row.push(demo_button(*event))
                })
                .into()
        })
        .collect();

    let panel = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(header)
        .push(summary)
        .push(Column::with_children(rows).spacing(spacing::XS));

    let base = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(base)
        .push(Toast::view_overlay(notifications).map(Message::Notification))
        .into()
}

fn demo_button<'a>(event: DemoEvent) -> Element<'a, Message> {
    button(Text::new(event.label()).size(typography::BODY))
        .on_press(Message::Demo(event))
        .padding(spacing::XS)
        .height(Length::Fixed(sizing::BUTTON_HEIGHT))
        .into()
}
