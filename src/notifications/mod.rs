// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Dashboard screens report outcomes (a patient saved, a fetch failed) as
//! short-lived toasts. Producers talk to a [`Manager`]; the overlay renders
//! whatever the manager currently holds.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, `Severity` and request options
//! - [`payload`] - Normalization of text, errors and JSON into display text
//! - [`timer`] - Cancelable auto-dismiss timers
//! - [`manager`] - `Manager` for the bounded store and record lifecycle
//! - [`resource`] - "Patient created successfully" style helpers
//! - [`presentation`] - Pure projection of the store into drawable toasts
//! - [`toast`] - iced widgets for the projection
//!
//! # Usage
//!
//! ```no_run
//! use pharmacy_toasts::notifications::{Manager, NotificationSettings};
//!
//! # async fn demo() -> pharmacy_toasts::error::Result<()> {
//! let manager = Manager::current(NotificationSettings::default())?;
//!
//! manager.success("Patient created");
//! manager.load_failed("consultation queue", "502 Bad Gateway");
//! # Ok(())
//! # }
//! ```
//!
//! # Design Considerations
//!
//! - Durations: 6s for success/info (configurable), 7s warnings, 8s errors
//! - Max visible toasts: 5 (the oldest is evicted)
//! - Position: bottom-right corner by default

pub mod manager;
pub mod notification;
pub mod payload;
pub mod presentation;
pub mod resource;
pub mod timer;
pub mod toast;

pub use manager::{Manager, Message as NotificationMessage, NotificationSettings, WeakManager};
pub use notification::{
    Action, Notification, NotificationId, NotificationOptions, NotificationRequest, Severity,
};
pub use payload::MessagePayload;
pub use presentation::{HorizontalEdge, ToastPosition, ToastView, VerticalEdge};
pub use resource::Operation;
pub use timer::{DismissScheduler, ManualScheduler, TimerHandle, TokioScheduler};
pub use toast::Toast;
