// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` record, the `Severity` enum and
//! the request/option types producers hand to the manager.

use super::payload::MessagePayload;
use crate::config::defaults::{ERROR_DURATION_MS, WARNING_DURATION_MS};
use crate::ui::design_tokens::palette;
use chrono::{DateTime, Utc};
use iced::Color;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Severity level determines display duration and visual styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Severity {
    /// Operation completed successfully (green, store default duration).
    #[default]
    Success,
    /// Informational message (blue, store default duration).
    Info,
    /// Warning that doesn't block operation (orange, 7s duration).
    Warning,
    /// Error requiring attention (red, 8s duration).
    Error,
}

impl Severity {
    /// All severities, in display order.
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Info,
        Severity::Warning,
        Severity::Error,
    ];

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the auto-dismiss duration for this severity.
    ///
    /// Success and info fall back to the store-wide default.
    #[must_use]
    pub fn default_duration(&self, store_default: Duration) -> Duration {
        match self {
            Severity::Success | Severity::Info => store_default,
            Severity::Warning => Duration::from_millis(WARNING_DURATION_MS),
            Severity::Error => Duration::from_millis(ERROR_DURATION_MS),
        }
    }

    /// Lowercase label, as shown to assistive technology.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single user-triggerable button attached to a notification.
///
/// Triggering it also dismisses the notification.
#[derive(Clone)]
pub struct Action {
    label: String,
    callback: Arc<dyn Fn() + Send + Sync>,
}

impl Action {
    pub fn new(label: impl Into<String>, callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            label: label.into(),
            callback: Arc::new(callback),
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    pub(crate) fn invoke(&self) {
        (self.callback)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Caller overrides applied on top of the severity presets.
#[derive(Debug, Clone, Default)]
pub struct NotificationOptions {
    pub title: Option<String>,
    /// Explicit auto-dismiss delay. `Some(Duration::ZERO)` disables the timer.
    pub duration: Option<Duration>,
    /// Suppresses the timer regardless of `duration`.
    pub persistent: bool,
    pub action: Option<Action>,
}

impl NotificationOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.persistent = true;
        self
    }

    /// Attaches a button that runs `callback` once, then dismisses the toast.
    ///
    /// A callback that needs the manager should capture
    /// [`Manager::downgrade`](super::Manager::downgrade): a strong clone
    /// stored in the record keeps the manager and its timers alive.
    #[must_use]
    pub fn action(
        mut self,
        label: impl Into<String>,
        callback: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.action = Some(Action::new(label, callback));
        self
    }
}

/// Everything `Manager::show` needs to create a record.
#[derive(Debug, Clone)]
pub struct NotificationRequest {
    pub severity: Severity,
    pub message: MessagePayload,
    pub options: NotificationOptions,
}

impl NotificationRequest {
    pub fn new(severity: Severity, message: impl Into<MessagePayload>) -> Self {
        Self {
            severity,
            message: message.into(),
            options: NotificationOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: NotificationOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.options = self.options.title(title);
        self
    }

    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.options = self.options.duration(duration);
        self
    }

    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.options = self.options.persistent();
        self
    }

    #[must_use]
    pub fn action(
        mut self,
        label: impl Into<String>,
        callback: impl Fn() + Send + Sync + 'static,
    ) -> Self {
        self.options = self.options.action(label, callback);
        self
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines color and default duration).
    severity: Severity,
    title: Option<String>,
    /// Display text, already normalized.
    message: String,
    /// Wall-clock creation time.
    created_at: DateTime<Utc>,
    /// Monotonic creation time, used for animation.
    created_instant: Instant,
    /// Resolved auto-dismiss delay; `None` means no timer is armed.
    duration: Option<Duration>,
    persistent: bool,
    action: Option<Action>,
}

impl Notification {
    /// Builds a record from a request, resolving the message and the
    /// effective auto-dismiss delay.
    pub fn new(request: NotificationRequest, store_default: Duration) -> Self {
        let NotificationRequest {
            severity,
            message,
            options,
        } = request;

        let duration = if options.persistent {
            None
        } else {
            let resolved = options
                .duration
                .unwrap_or_else(|| severity.default_duration(store_default));
            (!resolved.is_zero()).then_some(resolved)
        };

        Self {
            id: NotificationId::new(),
            severity,
            title: options.title.filter(|t| !t.trim().is_empty()),
            message: message.normalize(),
            created_at: Utc::now(),
            created_instant: Instant::now(),
            duration,
            persistent: options.persistent,
            action: options.action,
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Returns the severity level.
    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns when this notification was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the age of this notification.
    #[must_use]
    pub fn age(&self) -> Duration {
        self.created_instant.elapsed()
    }

    /// Returns the auto-dismiss delay, if a timer is armed for this record.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    #[must_use]
    pub fn action(&self) -> Option<&Action> {
        self.action.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STORE_DEFAULT: Duration = Duration::from_millis(6000);

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::new(NotificationRequest::new(Severity::Success, "a"), STORE_DEFAULT);
        let n2 = Notification::new(NotificationRequest::new(Severity::Success, "a"), STORE_DEFAULT);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let success = Severity::Success.color();
        let info = Severity::Info.color();
        let warning = Severity::Warning.color();
        let error = Severity::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn severity_default_durations() {
        assert_eq!(Severity::Success.default_duration(STORE_DEFAULT), STORE_DEFAULT);
        assert_eq!(Severity::Info.default_duration(STORE_DEFAULT), STORE_DEFAULT);
        assert_eq!(
            Severity::Warning.default_duration(STORE_DEFAULT),
            Duration::from_millis(7000)
        );
        assert_eq!(
            Severity::Error.default_duration(STORE_DEFAULT),
            Duration::from_millis(8000)
        );
    }

    #[test]
    fn explicit_duration_overrides_severity_default() {
        let request =
            NotificationRequest::new(Severity::Error, "boom").duration(Duration::from_secs(2));
        let notification = Notification::new(request, STORE_DEFAULT);
        assert_eq!(notification.duration(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn persistent_suppresses_duration() {
        let request = NotificationRequest::new(Severity::Info, "stay")
            .duration(Duration::from_secs(2))
            .persistent();
        let notification = Notification::new(request, STORE_DEFAULT);
        assert!(notification.is_persistent());
        assert_eq!(notification.duration(), None);
    }

    #[test]
    fn zero_duration_arms_no_timer() {
        let request = NotificationRequest::new(Severity::Info, "stay").duration(Duration::ZERO);
        let notification = Notification::new(request, STORE_DEFAULT);
        assert!(!notification.is_persistent());
        assert_eq!(notification.duration(), None);
    }

    #[test]
    fn blank_title_is_dropped() {
        let request = NotificationRequest::new(Severity::Info, "body").title("   ");
        let notification = Notification::new(request, STORE_DEFAULT);
        assert_eq!(notification.title(), None);
    }

    #[test]
    fn request_builder_pattern_works() {
        let request = NotificationRequest::new(Severity::Warning, "Stock low")
            .title("Inventory")
            .action("Reorder", || {});

        assert_eq!(request.severity, Severity::Warning);
        assert_eq!(request.options.title.as_deref(), Some("Inventory"));
        assert_eq!(
            request.options.action.as_ref().map(Action::label),
            Some("Reorder")
        );
    }

    #[test]
    fn action_debug_shows_label_only() {
        let action = Action::new("Undo", || {});
        assert!(format!("{action:?}").contains("Undo"));
    }
}
