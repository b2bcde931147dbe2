// SPDX-License-Identifier: MPL-2.0
//! Outcome helpers for CRUD screens.
//!
//! Screens report "Patient created successfully" or "Failed to update
//! medication: ..." through these instead of formatting messages by hand.

use super::manager::Manager;
use super::notification::NotificationId;
use super::payload::MessagePayload;

/// CRUD operations with a reportable outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Delete,
    Load,
}

impl Operation {
    /// Infinitive, as used in failure messages.
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Delete => "delete",
            Operation::Load => "load",
        }
    }

    /// Past participle, as used in success messages.
    #[must_use]
    pub fn past_tense(self) -> &'static str {
        match self {
            Operation::Create => "created",
            Operation::Update => "updated",
            Operation::Delete => "deleted",
            Operation::Load => "loaded",
        }
    }
}

/// `"{Resource} {verb} successfully"`, e.g. `"Patient created successfully"`.
#[must_use]
pub fn success_message(resource: &str, operation: Operation) -> String {
    format!(
        "{} {} successfully",
        capitalize(resource.trim()),
        operation.past_tense()
    )
}

/// `"Failed to {verb} {resource}: {detail}"`.
///
/// The colon and detail are left out when the error has nothing to say.
#[must_use]
pub fn failure_message(resource: &str, operation: Operation, detail: &str) -> String {
    let resource = resource.trim().to_lowercase();
    let detail = detail.trim();
    if detail.is_empty() {
        format!("Failed to {} {}", operation.verb(), resource)
    } else {
        format!("Failed to {} {}: {}", operation.verb(), resource, detail)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Manager {
    pub fn created(&self, resource: &str) -> NotificationId {
        self.success(success_message(resource, Operation::Create))
    }

    pub fn updated(&self, resource: &str) -> NotificationId {
        self.success(success_message(resource, Operation::Update))
    }

    pub fn deleted(&self, resource: &str) -> NotificationId {
        self.success(success_message(resource, Operation::Delete))
    }

    pub fn create_failed(
        &self,
        resource: &str,
        error: impl Into<MessagePayload>,
    ) -> NotificationId {
        self.failed(resource, Operation::Create, error.into())
    }

    pub fn update_failed(
        &self,
        resource: &str,
        error: impl Into<MessagePayload>,
    ) -> NotificationId {
        self.failed(resource, Operation::Update, error.into())
    }

    pub fn delete_failed(
        &self,
        resource: &str,
        error: impl Into<MessagePayload>,
    ) -> NotificationId {
        self.failed(resource, Operation::Delete, error.into())
    }

    pub fn load_failed(
        &self,
        resource: &str,
        error: impl Into<MessagePayload>,
    ) -> NotificationId {
        self.failed(resource, Operation::Load, error.into())
    }

    fn failed(
        &self,
        resource: &str,
        operation: Operation,
        error: MessagePayload,
    ) -> NotificationId {
        self.error(failure_message(resource, operation, &error.normalize()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::timer::ManualScheduler;
    use crate::notifications::{NotificationSettings, Severity};
    use serde_json::json;
    use std::sync::Arc;

    fn manager() -> Manager {
        Manager::new(
            NotificationSettings::default(),
            Arc::new(ManualScheduler::new()),
        )
    }

    fn only_message(manager: &Manager) -> (Severity, String) {
        let notifications = manager.notifications();
        assert_eq!(notifications.len(), 1);
        (
            notifications[0].severity(),
            notifications[0].message().to_string(),
        )
    }

    #[test]
    fn success_messages_capitalize_resource() {
        assert_eq!(
            success_message("patient", Operation::Create),
            "Patient created successfully"
        );
        assert_eq!(
            success_message("clinical intervention", Operation::Update),
            "Clinical intervention updated successfully"
        );
    }

    #[test]
    fn failure_messages_lowercase_resource() {
        assert_eq!(
            failure_message("Medication", Operation::Delete, "still referenced"),
            "Failed to delete medication: still referenced"
        );
    }

    #[test]
    fn failure_without_detail_drops_colon() {
        assert_eq!(
            failure_message("Feature flag", Operation::Load, "  "),
            "Failed to load feature flag"
        );
    }

    #[test]
    fn created_reports_success() {
        let manager = manager();
        manager.created("patient");
        assert_eq!(
            only_message(&manager),
            (Severity::Success, "Patient created successfully".to_string())
        );
    }

    #[test]
    fn deleted_reports_success() {
        let manager = manager();
        manager.deleted("template");
        assert_eq!(
            only_message(&manager),
            (Severity::Success, "Template deleted successfully".to_string())
        );
    }

    #[test]
    fn update_failed_flattens_api_error() {
        let manager = manager();
        manager.update_failed(
            "Patient",
            json!({ "response": { "data": { "message": "Version conflict" } } }),
        );
        assert_eq!(
            only_message(&manager),
            (
                Severity::Error,
                "Failed to update patient: Version conflict".to_string()
            )
        );
    }

    #[test]
    fn load_failed_accepts_rust_errors() {
        let manager = manager();
        let err = std::io::Error::other("connection refused");
        manager.load_failed("audit log", MessagePayload::from_error(&err));
        assert_eq!(
            only_message(&manager),
            (
                Severity::Error,
                "Failed to load audit log: connection refused".to_string()
            )
        );
    }

    #[test]
    fn create_failed_with_empty_error() {
        let manager = manager();
        manager.create_failed("subscription", serde_json::Value::Null);
        assert_eq!(
            only_message(&manager).1,
            "Failed to create subscription".to_string()
        );
    }
}
