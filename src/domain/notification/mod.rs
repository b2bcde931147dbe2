// SPDX-License-Identifier: MPL-2.0
//! Notification domain types.
//!
//! - [`MaxNotifications`]: Capacity of the notification store
//! - [`DismissDelay`]: Store-wide auto-dismiss delay

mod newtypes;

pub use newtypes::{DismissDelay, MaxNotifications};
