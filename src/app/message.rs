// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the dashboard.

use crate::config::Config;
use crate::notifications;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(notifications::NotificationMessage),
    Demo(DemoEvent),
    Tick(Instant), // Periodic tick while toasts are visible
}

/// Simulated outcomes of dashboard operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoEvent {
    PatientCreated,
    MedicationUpdated,
    TemplateDeleted,
    AuditLoadFailed,
    PatientUpdateFailed,
    NetworkError,
    LowStock,
    QueueRefreshed,
    InterventionArchived,
    ClearAll,
}

impl DemoEvent {
    /// Every event, in button order.
    pub const ALL: [DemoEvent; 10] = [
        DemoEvent::PatientCreated,
        DemoEvent::MedicationUpdated,
        DemoEvent::TemplateDeleted,
        DemoEvent::AuditLoadFailed,
        DemoEvent::PatientUpdateFailed,
        DemoEvent::NetworkError,
        DemoEvent::LowStock,
        DemoEvent::QueueRefreshed,
        DemoEvent::InterventionArchived,
        DemoEvent::ClearAll,
    ];

    /// Button caption.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            DemoEvent::PatientCreated => "Create patient",
            DemoEvent::MedicationUpdated => "Update medication",
            DemoEvent::TemplateDeleted => "Delete template",
            DemoEvent::AuditLoadFailed => "Load audit log (fails)",
            DemoEvent::PatientUpdateFailed => "Update patient (fails)",
            DemoEvent::NetworkError => "Network error",
            DemoEvent::LowStock => "Low stock warning",
            DemoEvent::QueueRefreshed => "Refresh consultation queue",
            DemoEvent::InterventionArchived => "Archive intervention",
            DemoEvent::ClearAll => "Clear all",
        }
    }
}

/// Runtime flags passed from `main.rs` to the application.
#[derive(Debug, Clone)]
pub struct Flags {
    pub config: Config,
    /// Runtime driving the dismiss timers.
    pub runtime: tokio::runtime::Handle,
}
