// SPDX-License-Identifier: MPL-2.0
//! Domain layer - validated value objects with no UI or runtime dependencies.
//!
//! # Modules
//!
//! - [`notification`]: Notification store settings
//!   ([`MaxNotifications`](notification::MaxNotifications),
//!   [`DismissDelay`](notification::DismissDelay))

pub mod notification;
