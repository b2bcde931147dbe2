// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns the authoritative list of active notifications and is
//! the only way to mutate it. It caps the list, arms one dismiss timer per
//! timed record and cancels that timer whenever the record leaves early.
//!
//! A `Manager` is a cheap handle: clone it into every part of the dashboard
//! that needs to report something. There is no global instance.

use super::notification::{
    Notification, NotificationId, NotificationOptions, NotificationRequest, Severity,
};
use super::payload::MessagePayload;
use super::presentation::ToastPosition;
use super::timer::{DismissScheduler, TimerHandle, TokioScheduler};
use crate::domain::notification::{DismissDelay, MaxNotifications};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::watch;

/// Settings fixed when the manager is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NotificationSettings {
    pub max_notifications: MaxNotifications,
    /// Delay used by success and info toasts without an explicit duration.
    pub default_duration: DismissDelay,
    pub position: ToastPosition,
}

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID (close button).
    Dismiss(NotificationId),
    /// Run the notification's action, then dismiss it.
    TriggerAction(NotificationId),
}

/// Why a record left the store.
#[derive(Debug, Clone, Copy)]
enum Removal {
    Expired,
    Dismissed,
    Evicted,
    Cleared,
    Action,
}

/// Manages the visible notifications and their dismiss timers.
#[derive(Debug, Clone)]
pub struct Manager {
    shared: Arc<Shared>,
}

/// Non-owning handle to a [`Manager`].
///
/// Callbacks stored inside a notification should capture this instead of a
/// `Manager` clone, otherwise the record keeps its own manager alive.
#[derive(Debug, Clone)]
pub struct WeakManager {
    shared: Weak<Shared>,
}

impl WeakManager {
    /// Returns the manager if any strong handle is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Manager> {
        self.shared.upgrade().map(|shared| Manager { shared })
    }
}

#[derive(Debug)]
struct Shared {
    settings: NotificationSettings,
    scheduler: Arc<dyn DismissScheduler>,
    state: Mutex<State>,
    revision: watch::Sender<u64>,
}

#[derive(Debug, Default)]
struct State {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// One armed timer per timed record.
    timers: HashMap<NotificationId, TimerHandle>,
}

impl State {
    fn take(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.visible.iter().position(|n| n.id() == id)?;
        let notification = self.visible.remove(pos);
        self.cancel_timer(id);
        notification
    }

    fn cancel_timer(&mut self, id: NotificationId) {
        if let Some(timer) = self.timers.remove(&id) {
            timer.cancel();
        }
    }
}

impl Drop for Shared {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(PoisonError::into_inner);
        for (_, timer) in state.timers.drain() {
            timer.cancel();
        }
    }
}

impl Manager {
    /// Creates a manager that arms its timers through `scheduler`.
    pub fn new(settings: NotificationSettings, scheduler: Arc<dyn DismissScheduler>) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            shared: Arc::new(Shared {
                settings,
                scheduler,
                state: Mutex::new(State::default()),
                revision,
            }),
        }
    }

    /// Creates a manager whose timers run on the given tokio runtime.
    pub fn with_tokio(settings: NotificationSettings, handle: Handle) -> Self {
        Self::new(settings, Arc::new(TokioScheduler::new(handle)))
    }

    /// Creates a manager on the runtime the caller is running on.
    pub fn current(settings: NotificationSettings) -> crate::error::Result<Self> {
        Ok(Self::new(settings, Arc::new(TokioScheduler::current()?)))
    }

    #[must_use]
    pub fn downgrade(&self) -> WeakManager {
        WeakManager {
            shared: Arc::downgrade(&self.shared),
        }
    }

    #[must_use]
    pub fn settings(&self) -> NotificationSettings {
        self.shared.settings
    }

    /// Shows a new notification.
    ///
    /// The record goes to the front of the list. When the list grows past
    /// the configured maximum, the oldest records are dropped along with
    /// their timers.
    pub fn show(&self, request: NotificationRequest) -> NotificationId {
        let notification =
            Notification::new(request, self.shared.settings.default_duration.as_duration());
        let id = notification.id();
        log_shown(&notification);

        {
            let mut state = self.lock();
            if let Some(delay) = notification.duration() {
                let timer = self.arm_timer(id, delay);
                state.timers.insert(id, timer);
            }
            state.visible.push_front(notification);

            let max = self.shared.settings.max_notifications.value();
            while state.visible.len() > max {
                if let Some(oldest) = state.visible.pop_back() {
                    state.cancel_timer(oldest.id());
                    log_removed(oldest.id(), Removal::Evicted);
                }
            }
        }

        self.bump();
        id
    }

    pub fn success(&self, message: impl Into<MessagePayload>) -> NotificationId {
        self.success_with(message, NotificationOptions::default())
    }

    pub fn success_with(
        &self,
        message: impl Into<MessagePayload>,
        options: NotificationOptions,
    ) -> NotificationId {
        self.show(NotificationRequest::new(Severity::Success, message).with_options(options))
    }

    pub fn error(&self, message: impl Into<MessagePayload>) -> NotificationId {
        self.error_with(message, NotificationOptions::default())
    }

    pub fn error_with(
        &self,
        message: impl Into<MessagePayload>,
        options: NotificationOptions,
    ) -> NotificationId {
        self.show(NotificationRequest::new(Severity::Error, message).with_options(options))
    }

    pub fn warning(&self, message: impl Into<MessagePayload>) -> NotificationId {
        self.warning_with(message, NotificationOptions::default())
    }

    pub fn warning_with(
        &self,
        message: impl Into<MessagePayload>,
        options: NotificationOptions,
    ) -> NotificationId {
        self.show(NotificationRequest::new(Severity::Warning, message).with_options(options))
    }

    pub fn info(&self, message: impl Into<MessagePayload>) -> NotificationId {
        self.info_with(message, NotificationOptions::default())
    }

    pub fn info_with(
        &self,
        message: impl Into<MessagePayload>,
        options: NotificationOptions,
    ) -> NotificationId {
        self.show(NotificationRequest::new(Severity::Info, message).with_options(options))
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed. Unknown or
    /// already removed IDs are ignored.
    pub fn hide(&self, id: NotificationId) -> bool {
        self.remove(id, Removal::Dismissed).is_some()
    }

    /// Runs the notification's action and dismisses it.
    ///
    /// The record is removed before the callback runs, so the callback fires
    /// at most once per notification. The callback may itself show new
    /// notifications.
    pub fn trigger_action(&self, id: NotificationId) -> bool {
        let Some(notification) = self.remove(id, Removal::Action) else {
            return false;
        };
        if let Some(action) = notification.action() {
            tracing::debug!(id = %id, action = action.label(), "running notification action");
            action.invoke();
        }
        true
    }

    /// Clears all notifications and cancels every pending timer.
    pub fn clear_all(&self) {
        let cleared = {
            let mut state = self.lock();
            for (_, timer) in state.timers.drain() {
                timer.cancel();
            }
            let cleared = state.visible.len();
            state.visible.clear();
            cleared
        };

        if cleared > 0 {
            tracing::debug!(count = cleared, "cleared all notifications");
            self.bump();
        }
    }

    /// Clears every notification of one severity, e.g. stale load errors
    /// after a successful reload. Returns how many were removed.
    pub fn clear_severity(&self, severity: Severity) -> usize {
        let removed = {
            let mut state = self.lock();
            let ids: Vec<NotificationId> = state
                .visible
                .iter()
                .filter(|n| n.severity() == severity)
                .map(Notification::id)
                .collect();
            for id in &ids {
                state.take(*id);
                log_removed(*id, Removal::Cleared);
            }
            ids.len()
        };

        if removed > 0 {
            self.bump();
        }
        removed
    }

    /// Handles a notification message.
    pub fn handle_message(&self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.hide(*id);
            }
            Message::TriggerAction(id) => {
                self.trigger_action(*id);
            }
        }
    }

    /// Returns a snapshot of the visible notifications, newest first.
    #[must_use]
    pub fn notifications(&self) -> Vec<Notification> {
        self.lock().visible.iter().cloned().collect()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.lock().visible.iter().find(|n| n.id() == id).cloned()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().visible.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().visible.is_empty()
    }

    /// Returns whether there are any notifications to render.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.is_empty()
    }

    /// Number of armed dismiss timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.lock().timers.len()
    }

    /// Subscribes to change notifications.
    ///
    /// The value is a revision counter bumped after every mutation; read the
    /// new state with [`Manager::notifications`].
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.shared.revision.subscribe()
    }

    fn remove(&self, id: NotificationId, reason: Removal) -> Option<Notification> {
        let removed = self.lock().take(id);
        if removed.is_some() {
            log_removed(id, reason);
            self.bump();
        }
        removed
    }

    fn arm_timer(&self, id: NotificationId, delay: Duration) -> TimerHandle {
        let manager = self.downgrade();
        self.shared.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(manager) = manager.upgrade() {
                    manager.remove(id, Removal::Expired);
                }
            }),
        )
    }

    fn bump(&self) {
        self.shared
            .revision
            .send_modify(|revision| *revision = revision.wrapping_add(1));
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        self.shared
            .state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_shown(notification: &Notification) {
    let id = notification.id();
    let text = notification.message();
    match notification.severity() {
        Severity::Warning => tracing::warn!(id = %id, text, "warning notification shown"),
        Severity::Error => tracing::error!(id = %id, text, "error notification shown"),
        Severity::Success | Severity::Info => {
            tracing::debug!(
                id = %id,
                severity = %notification.severity(),
                text,
                "notification shown"
            );
        }
    }
}

fn log_removed(id: NotificationId, reason: Removal) {
    tracing::debug!(id = %id, reason = ?reason, "notification removed");
}
