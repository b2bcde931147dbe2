// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the dashboard.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Redraw interval while toasts are on screen.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a periodic tick subscription so timer-driven dismissals and
/// entrance fades are redrawn.
///
/// Dismiss timers run on the tokio runtime and mutate the store outside of
/// `update`; the tick is what makes the view catch up.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
