// SPDX-License-Identifier: MPL-2.0
//! Task value record and its identifier and text newtypes.

use chrono::{DateTime, Utc};
use std::fmt;

/// Opaque, unique identifier of a task.
///
/// Built from the creation time in milliseconds and a process-wide sequence
/// number, so two tasks created within the same millisecond still differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a fresh identifier for a task created at `now`.
    #[must_use]
    pub fn generate(now: DateTime<Utc>) -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static SEQUENCE: AtomicU64 = AtomicU64::new(0);
        let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{}-{seq}", now.timestamp_millis()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Task text, guaranteed non-empty and trimmed.
///
/// # Example
///
/// ```
/// use iced_tasks::tasks::TaskText;
///
/// let text = TaskText::parse("  Buy milk ").unwrap();
/// assert_eq!(text.as_str(), "Buy milk");
///
/// assert!(TaskText::parse("   ").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskText(String);

impl TaskText {
    /// Trims `raw` and returns `None` if nothing is left.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single to-do item.
///
/// `completed_at` is set if and only if `completed` is true. Fields are
/// private so that the only way to change completion is [`Task::toggle`].
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    id: TaskId,
    text: TaskText,
    completed: bool,
    completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Creates an incomplete task with a fresh id.
    #[must_use]
    pub fn new(text: TaskText, now: DateTime<Utc>) -> Self {
        Self {
            id: TaskId::generate(now),
            text,
            completed: false,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &TaskId {
        &self.id
    }

    #[must_use]
    pub fn text(&self) -> &TaskText {
        &self.text
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Flips completion. Stamps `now` when the task becomes complete and
    /// clears the stamp when it becomes incomplete.
    pub fn toggle(&mut self, now: DateTime<Utc>) {
        self.completed = !self.completed;
        self.completed_at = self.completed.then_some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    #[test]
    fn parse_trims_and_rejects_blank_text() {
        assert_eq!(TaskText::parse("\t walk \n").unwrap().as_str(), "walk");
        assert!(TaskText::parse("").is_none());
        assert!(TaskText::parse(" \t\n ").is_none());
    }

    #[test]
    fn ids_generated_in_the_same_millisecond_differ() {
        let now = at(1_700_000_000);
        let a = TaskId::generate(now);
        let b = TaskId::generate(now);
        assert_ne!(a, b);
        assert!(a.as_str().starts_with("1700000000000-"));
    }

    #[test]
    fn new_task_is_incomplete_without_timestamp() {
        let task = Task::new(TaskText::parse("Buy milk").unwrap(), at(10));
        assert!(!task.is_completed());
        assert!(task.completed_at().is_none());
        assert_eq!(task.text().as_str(), "Buy milk");
    }

    #[test]
    fn toggle_sets_and_clears_completed_at() {
        let mut task = Task::new(TaskText::parse("Buy milk").unwrap(), at(10));

        task.toggle(at(20));
        assert!(task.is_completed());
        assert_eq!(task.completed_at(), Some(at(20)));

        task.toggle(at(30));
        assert!(!task.is_completed());
        assert_eq!(task.completed_at(), None);
    }
}
