// SPDX-License-Identifier: MPL-2.0
//! Render-agnostic projection of the notification list.
//!
//! Every visual decision (glyph, accent color, entrance delay, stack order)
//! is a pure function of a record's severity and its place in the list.
//! The iced widgets in [`super::toast`] only draw what this module computes.

use super::notification::{Notification, NotificationId, Severity};
use crate::config::defaults::{ENTER_FADE_MS, ENTER_STAGGER_MS};
use crate::error::Error;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalEdge {
    Top,
    #[default]
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalEdge {
    Left,
    Center,
    #[default]
    Right,
}

/// Screen corner or edge the toast stack is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToastPosition {
    #[serde(default)]
    pub vertical: VerticalEdge,
    #[serde(default)]
    pub horizontal: HorizontalEdge,
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let vertical = match self.vertical {
            VerticalEdge::Top => "top",
            VerticalEdge::Bottom => "bottom",
        };
        let horizontal = match self.horizontal {
            HorizontalEdge::Left => "left",
            HorizontalEdge::Center => "center",
            HorizontalEdge::Right => "right",
        };
        write!(f, "{vertical}-{horizontal}")
    }
}

impl FromStr for ToastPosition {
    type Err = Error;

    /// Parses `"top-left"`, `"bottom-center"` and the like.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::Config(format!("invalid toast position: {s}"));
        let (vertical, horizontal) = s.trim().split_once('-').ok_or_else(invalid)?;

        let vertical = match vertical.to_ascii_lowercase().as_str() {
            "top" => VerticalEdge::Top,
            "bottom" => VerticalEdge::Bottom,
            _ => return Err(invalid()),
        };
        let horizontal = match horizontal.to_ascii_lowercase().as_str() {
            "left" => HorizontalEdge::Left,
            "center" => HorizontalEdge::Center,
            "right" => HorizontalEdge::Right,
            _ => return Err(invalid()),
        };

        Ok(Self {
            vertical,
            horizontal,
        })
    }
}

/// Glyph drawn in front of the message.
#[must_use]
pub fn glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Info => "ℹ",
        Severity::Warning => "⚠",
        Severity::Error => "✕",
    }
}

/// Everything needed to draw one toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastView {
    pub id: NotificationId,
    pub severity: Severity,
    pub glyph: &'static str,
    pub accent: Color,
    pub title: Option<String>,
    pub body: String,
    pub action_label: Option<String>,
    /// Entrance delay, staggered by list position.
    pub enter_delay: Duration,
    /// Age of the record when the view was taken.
    pub age: Duration,
}

impl ToastView {
    /// Projects the record at `index` in the store (0 = newest).
    #[must_use]
    pub fn new(notification: &Notification, index: usize) -> Self {
        let severity = notification.severity();
        let stagger = u32::try_from(index).unwrap_or(u32::MAX);
        Self {
            id: notification.id(),
            severity,
            glyph: glyph(severity),
            accent: severity.color(),
            title: notification.title().map(str::to_string),
            body: notification.message().to_string(),
            action_label: notification.action().map(|a| a.label().to_string()),
            enter_delay: Duration::from_millis(ENTER_STAGGER_MS).saturating_mul(stagger),
            age: notification.age(),
        }
    }

    /// Entrance opacity: 0 until the stagger delay, then a linear fade-in.
    #[must_use]
    pub fn opacity_at(&self, age: Duration) -> f32 {
        let Some(shown_for) = age.checked_sub(self.enter_delay) else {
            return 0.0;
        };
        let fade = Duration::from_millis(ENTER_FADE_MS);
        (shown_for.as_secs_f32() / fade.as_secs_f32()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity_at(self.age)
    }

    /// Label announced to screen readers, e.g. `"error: Network error"`.
    #[must_use]
    pub fn accessible_label(&self) -> String {
        match &self.title {
            Some(title) => format!("{}: {} - {}", self.severity, title, self.body),
            None => format!("{}: {}", self.severity, self.body),
        }
    }
}

/// Projects the store (newest first) into draw order for `position`.
///
/// The newest toast always sits closest to the anchored edge.
#[must_use]
pub fn project(notifications: &[Notification], position: ToastPosition) -> Vec<ToastView> {
    let mut views: Vec<ToastView> = notifications
        .iter()
        .enumerate()
        .map(|(index, notification)| ToastView::new(notification, index))
        .collect();
    if position.vertical == VerticalEdge::Bottom {
        views.reverse();
    }
    views
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationRequest;

    const STORE_DEFAULT: Duration = Duration::from_millis(6000);

    fn record(severity: Severity, message: &str) -> Notification {
        Notification::new(NotificationRequest::new(severity, message), STORE_DEFAULT)
    }

    #[test]
    fn position_parses_and_displays() {
        let position: ToastPosition = "top-center".parse().expect("valid position");
        assert_eq!(position.vertical, VerticalEdge::Top);
        assert_eq!(position.horizontal, HorizontalEdge::Center);
        assert_eq!(position.to_string(), "top-center");
    }

    #[test]
    fn invalid_position_is_rejected() {
        assert!("middle-right".parse::<ToastPosition>().is_err());
        assert!("top".parse::<ToastPosition>().is_err());
    }

    #[test]
    fn default_position_is_bottom_right() {
        assert_eq!(ToastPosition::default().to_string(), "bottom-right");
    }

    #[test]
    fn glyphs_are_distinct() {
        let glyphs: std::collections::HashSet<_> =
            Severity::ALL.iter().map(|s| glyph(*s)).collect();
        assert_eq!(glyphs.len(), Severity::ALL.len());
    }

    #[test]
    fn error_view_shows_severity_and_body() {
        let view = ToastView::new(&record(Severity::Error, "Network error"), 0);
        assert_eq!(view.severity, Severity::Error);
        assert_eq!(view.body, "Network error");
        assert_eq!(view.title, None);
        assert_eq!(view.accent, Severity::Error.color());
        assert_eq!(view.accessible_label(), "error: Network error");
    }

    #[test]
    fn entrance_delay_is_staggered_by_index() {
        let n = record(Severity::Info, "x");
        assert_eq!(ToastView::new(&n, 0).enter_delay, Duration::ZERO);
        assert_eq!(ToastView::new(&n, 3).enter_delay, Duration::from_millis(300));
    }

    #[test]
    fn opacity_ramps_after_delay() {
        let view = ToastView::new(&record(Severity::Info, "x"), 1);
        assert_eq!(view.opacity_at(Duration::from_millis(50)), 0.0);
        assert!((view.opacity_at(Duration::from_millis(200)) - 0.5).abs() < 1e-6);
        assert_eq!(view.opacity_at(Duration::from_secs(5)), 1.0);
    }

    #[test]
    fn bottom_stacks_put_newest_last() {
        // Store order is newest first.
        let newest = record(Severity::Success, "newest");
        let oldest = record(Severity::Success, "oldest");
        let store = vec![newest, oldest];

        let bottom = project(&store, ToastPosition::default());
        assert_eq!(bottom[0].body, "oldest");
        assert_eq!(bottom[1].body, "newest");

        let top = project(
            &store,
            ToastPosition {
                vertical: VerticalEdge::Top,
                horizontal: HorizontalEdge::Left,
            },
        );
        assert_eq!(top[0].body, "newest");
        assert_eq!(top[0].enter_delay, Duration::ZERO);
    }

    #[test]
    fn action_label_is_projected() {
        let n = Notification::new(
            NotificationRequest::new(Severity::Warning, "Archived").action("Undo", || {}),
            STORE_DEFAULT,
        );
        assert_eq!(ToastView::new(&n, 0).action_label.as_deref(), Some("Undo"));
    }
}
