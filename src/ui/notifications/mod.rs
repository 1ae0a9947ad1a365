// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! A single toast confirms each task action. It fades and slides in, stays up
//! for a fixed dwell time, then fades out and reports that it is hidden.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`notifier`] - `Notifier` lifecycle state machine driven by frame ticks
//! - [`toast`] - `ToastState` owned by the task list, and the toast widget
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Notification, Notifier, ToastState};
//!
//! let mut toast = ToastState::default();
//! let mut notifier = Notifier::default();
//!
//! let notification = Notification::success("notification-task-added").with_arg("text", "Buy milk");
//! notifier.request(notification.id(), Instant::now());
//! toast.show(notification);
//!
//! // On every frame tick:
//! if let Some(NotifierEvent::Hidden) = notifier.tick(now) {
//!     toast.hide();
//! }
//! ```
//!
//! # Design Considerations
//!
//! - Entrance 200ms, dwell 2000ms from entrance start, exit 200ms
//! - One toast at a time; a new request replaces the current one
//! - Position: top center

pub mod notification;
pub mod notifier;
pub mod toast;

pub use notification::{Notification, NotificationId, Severity};
pub use notifier::{Notifier, NotifierEvent, Phase, Timings};
pub use toast::{Toast, ToastState};
