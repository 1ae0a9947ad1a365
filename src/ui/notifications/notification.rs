// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Severity` enum
//! used throughout the notification system.

use crate::ui::design_tokens::palette;
use iced::Color;

/// Unique identifier for a notification.
///
/// The notifier uses it to tell a fresh request apart from the one it is
/// already animating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Severity selects the toast colors and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    /// A task was added.
    Success,
    /// A task changed completion state.
    #[default]
    Info,
    /// A task was deleted. Destructive, not a failure.
    Error,
}

impl Severity {
    /// Returns the toast background color for this severity level.
    #[must_use]
    pub fn background(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_100,
            Severity::Info => palette::INFO_100,
            Severity::Error => palette::ERROR_100,
        }
    }

    /// Returns the toast text color for this severity level.
    #[must_use]
    pub fn text_color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_700,
            Severity::Info => palette::INFO_700,
            Severity::Error => palette::ERROR_700,
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    /// Unique identifier for this notification.
    id: NotificationId,
    /// Severity level (determines color).
    severity: Severity,
    /// The i18n key for the notification message.
    message_key: String,
    /// Optional arguments for message interpolation.
    message_args: Vec<(String, String)>,
}

impl Default for Notification {
    fn default() -> Self {
        Self::info("")
    }
}

impl Notification {
    /// Creates a new notification with the given severity and message key.
    ///
    /// The `message_key` should be a valid i18n key that will be resolved
    /// at render time.
    pub fn new(severity: Severity, message_key: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message_key: message_key.into(),
            message_args: Vec::new(),
        }
    }

    /// Creates a success notification.
    pub fn success(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Success, message_key)
    }

    /// Creates an info notification.
    pub fn info(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Info, message_key)
    }

    /// Creates an error notification.
    pub fn error(message_key: impl Into<String>) -> Self {
        Self::new(Severity::Error, message_key)
    }

    /// Adds an argument for message interpolation.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.message_args.push((key.into(), value.into()));
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message_key(&self) -> &str {
        &self.message_key
    }

    #[must_use]
    pub fn message_args(&self) -> &[(String, String)] {
        &self.message_args
    }

    /// Returns the value of a message argument, if set.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&str> {
        self.message_args
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let all = [Severity::Success, Severity::Info, Severity::Error];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.background(), b.background());
                assert_ne!(a.text_color(), b.text_color());
            }
        }
    }

    #[test]
    fn notification_builder_pattern_works() {
        let notification = Notification::error("notification-task-deleted").with_arg("text", "Walk dog");

        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message_key(), "notification-task-deleted");
        assert_eq!(notification.arg("text"), Some("Walk dog"));
        assert_eq!(notification.arg("missing"), None);
    }

    #[test]
    fn notification_constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn default_notification_is_empty_info() {
        let notification = Notification::default();
        assert_eq!(notification.severity(), Severity::Info);
        assert!(notification.message_key().is_empty());
    }
}
