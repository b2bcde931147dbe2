// SPDX-License-Identifier: MPL-2.0
//! Dashboard shell that owns the notification manager and renders the
//! toast overlay.
//!
//! The buttons stand in for real screens (patients, medications, audit
//! log, consultation queue) and report their outcomes the same way those
//! screens do.

mod message;
mod subscription;
mod view;

pub use message::{DemoEvent, Flags, Message};

use crate::notifications::{Manager, NotificationOptions};
use iced::{window, Element, Subscription, Task, Theme};
use serde_json::json;

const WINDOW_DEFAULT_WIDTH: f32 = 960.0;
const WINDOW_DEFAULT_HEIGHT: f32 = 640.0;

/// Root application state.
pub struct App {
    /// Toast notification manager for user feedback.
    notifications: Manager,
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window::Settings {
            size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
            ..window::Settings::default()
        })
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let settings = flags.config.notifications.settings();
        tracing::info!(
            max = settings.max_notifications.value(),
            default_ms = settings.default_duration.millis(),
            position = %settings.position,
            "starting notification dashboard"
        );

        let app = App {
            notifications: Manager::with_tokio(settings, flags.runtime),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.notifications.len() {
            0 => "PharmacyDesk".to_string(),
            n => format!("({n}) PharmacyDesk"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.notifications.has_notifications())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
            }
            Message::Demo(event) => self.report(event),
            Message::Tick(_) => {
                // Nothing to do: timers already updated the store, the view
                // reads it on redraw.
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(&self.notifications)
    }

    /// Reports the outcome of a simulated dashboard operation.
    fn report(&self, event: DemoEvent) {
        let notifications = &self.notifications;
        match event {
            DemoEvent::PatientCreated => {
                notifications.created("patient");
            }
            DemoEvent::MedicationUpdated => {
                notifications.updated("medication");
            }
            DemoEvent::TemplateDeleted => {
                notifications.deleted("template");
            }
            DemoEvent::AuditLoadFailed => {
                notifications.load_failed(
                    "audit log",
                    json!({ "response": { "data": { "message": "Request timed out" } } }),
                );
            }
            DemoEvent::PatientUpdateFailed => {
                notifications.update_failed("patient", json!({ "error": "Version conflict" }));
            }
            DemoEvent::NetworkError => {
                notifications.error("Network error");
            }
            DemoEvent::LowStock => {
                notifications.warning_with(
                    "Atorvastatin 20mg is below its reorder point",
                    NotificationOptions::new().title("Inventory"),
                );
            }
            DemoEvent::QueueRefreshed => {
                notifications.info("Consultation queue refreshed");
            }
            DemoEvent::InterventionArchived => {
                let follow_up = notifications.downgrade();
                notifications.warning_with(
                    "Clinical intervention archived",
                    NotificationOptions::new().persistent().action("Undo", move || {
                        if let Some(notifications) = follow_up.upgrade() {
                            notifications.success("Clinical intervention restored");
                        }
                    }),
                );
            }
            DemoEvent::ClearAll => notifications.clear_all(),
        }
    }
}
