// SPDX-License-Identifier: MPL-2.0
//! Task list controller.
//!
//! The controller is the single owner of the task collection and of the toast
//! state. Every mutation that changes a task also replaces the toast message;
//! operations on unknown ids change nothing at all.

use crate::tasks::{order, Task, TaskId, TaskText};
use crate::ui::notifications::{Notification, ToastState};
use chrono::{DateTime, Utc};

/// Owns the tasks (newest first) and the toast state.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    tasks: Vec<Task>,
    toast: ToastState,
}

impl Controller {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task in front of all existing ones and announces it.
    pub fn add(&mut self, text: TaskText) -> TaskId {
        self.add_at(text, Utc::now())
    }

    /// [`Controller::add`] with an explicit creation time.
    pub fn add_at(&mut self, text: TaskText, now: DateTime<Utc>) -> TaskId {
        let task = Task::new(text, now);
        let id = task.id().clone();
        tracing::info!(task = %id, "task added");
        tracing::debug!(task = %id, text = %task.text(), "task text");

        self.toast.show(
            Notification::success("notification-task-added").with_arg("text", task.text().as_str()),
        );
        self.tasks.insert(0, task);
        id
    }

    /// Flips completion of the task `id`.
    ///
    /// Returns `false` (and leaves the toast alone) if no task has that id.
    pub fn toggle_complete(&mut self, id: &TaskId) -> bool {
        self.toggle_complete_at(id, Utc::now())
    }

    /// [`Controller::toggle_complete`] with an explicit completion time.
    pub fn toggle_complete_at(&mut self, id: &TaskId, now: DateTime<Utc>) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id() == id) else {
            tracing::debug!(task = %id, "toggle ignored, unknown task");
            return false;
        };

        task.toggle(now);

        // The message describes the state the task is in now.
        let key = if task.is_completed() {
            "notification-task-completed"
        } else {
            "notification-task-reopened"
        };
        tracing::info!(task = %id, completed = task.is_completed(), "task toggled");

        let notification = Notification::info(key).with_arg("text", task.text().as_str());
        self.toast.show(notification);
        true
    }

    /// Removes the task `id`.
    ///
    /// Returns `false` (and leaves the toast alone) if no task has that id.
    pub fn delete(&mut self, id: &TaskId) -> bool {
        let Some(position) = self.tasks.iter().position(|task| task.id() == id) else {
            tracing::debug!(task = %id, "delete ignored, unknown task");
            return false;
        };

        let task = self.tasks.remove(position);
        tracing::info!(task = %id, "task deleted");

        self.toast.show(
            Notification::error("notification-task-deleted").with_arg("text", task.text().as_str()),
        );
        true
    }

    /// Tasks in display order: incomplete first (newest first), then
    /// completed with the most recently completed first.
    ///
    /// The iterator is finite and can be cloned to walk it again; call this
    /// again after any mutation.
    pub fn sorted_tasks(&self) -> impl Iterator<Item = &Task> + Clone + '_ {
        order::sorted(&self.tasks).into_iter()
    }

    /// Clears the toast's visible flag once the notifier finished hiding it.
    pub fn hide_toast(&mut self) {
        self.toast.hide();
    }

    #[must_use]
    pub fn toast(&self) -> &ToastState {
        &self.toast
    }

    /// Tasks in insertion order, newest first.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::Severity;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn text(raw: &str) -> TaskText {
        TaskText::parse(raw).unwrap()
    }

    fn sorted_texts(controller: &Controller) -> Vec<String> {
        controller
            .sorted_tasks()
            .map(|task| task.text().to_string())
            .collect()
    }

    #[test]
    fn adds_produce_unique_ids() {
        let mut controller = Controller::new();
        let ids: Vec<TaskId> = (0..50)
            .map(|i| controller.add_at(text(&format!("task {i}")), at(1)))
            .collect();

        assert_eq!(controller.len(), 50);
        let unique: HashSet<&TaskId> = ids.iter().collect();
        assert_eq!(unique.len(), 50);
    }

    #[test]
    fn add_inserts_first_and_never_merges_duplicates() {
        let mut controller = Controller::new();
        controller.add(text("Same"));
        let second = controller.add(text("Same"));

        assert_eq!(controller.len(), 2);
        assert_eq!(controller.tasks()[0].id(), &second);
    }

    #[test]
    fn add_shows_success_toast_with_text() {
        let mut controller = Controller::new();
        controller.add(text("Buy milk"));

        let toast = controller.toast();
        assert!(toast.is_visible());
        assert_eq!(toast.severity(), Severity::Success);
        assert_eq!(toast.notification().message_key(), "notification-task-added");
        assert_eq!(toast.notification().arg("text"), Some("Buy milk"));
    }

    #[test]
    fn toggle_is_involutive() {
        let mut controller = Controller::new();
        let id = controller.add_at(text("Buy milk"), at(1));

        assert!(controller.toggle_complete_at(&id, at(2)));
        let task = controller.get(&id).unwrap();
        assert!(task.is_completed());
        assert_eq!(task.completed_at(), Some(at(2)));

        assert!(controller.toggle_complete_at(&id, at(3)));
        let task = controller.get(&id).unwrap();
        assert!(!task.is_completed());
        assert_eq!(task.completed_at(), None);
    }

    #[test]
    fn toggle_message_describes_the_resulting_state() {
        let mut controller = Controller::new();
        let id = controller.add(text("Walk dog"));

        controller.toggle_complete(&id);
        let toast = controller.toast();
        assert_eq!(toast.severity(), Severity::Info);
        assert_eq!(toast.notification().message_key(), "notification-task-completed");
        assert_eq!(toast.notification().arg("text"), Some("Walk dog"));

        controller.toggle_complete(&id);
        assert_eq!(
            controller.toast().notification().message_key(),
            "notification-task-reopened"
        );
    }

    #[test]
    fn toggle_leaves_other_tasks_untouched() {
        let mut controller = Controller::new();
        let a = controller.add(text("A"));
        let b = controller.add(text("B"));

        controller.toggle_complete(&a);
        assert!(!controller.get(&b).unwrap().is_completed());
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut controller = Controller::new();
        controller.add(text("A"));
        controller.hide_toast();
        let before_toast = controller.toast().clone();
        let before_tasks = controller.tasks().to_vec();

        let unknown = TaskId::generate(at(0));
        assert!(!controller.toggle_complete(&unknown));
        assert_eq!(controller.toast(), &before_toast);
        assert_eq!(controller.tasks(), before_tasks.as_slice());
    }

    #[test]
    fn delete_removes_exactly_the_matching_task() {
        let mut controller = Controller::new();
        let a = controller.add(text("A"));
        let b = controller.add(text("B"));
        let c = controller.add(text("C"));

        assert!(controller.delete(&b));
        let remaining: Vec<&TaskId> = controller.tasks().iter().map(Task::id).collect();
        assert_eq!(remaining, [&c, &a]);
    }

    #[test]
    fn delete_shows_error_toast_naming_the_task() {
        let mut controller = Controller::new();
        let id = controller.add(text("Walk dog"));
        controller.delete(&id);

        let toast = controller.toast();
        assert_eq!(toast.severity(), Severity::Error);
        assert_eq!(toast.notification().message_key(), "notification-task-deleted");
        assert_eq!(toast.notification().arg("text"), Some("Walk dog"));
    }

    #[test]
    fn delete_unknown_id_leaves_tasks_and_toast_unchanged() {
        let mut controller = Controller::new();
        let id = controller.add(text("A"));
        let before_toast = controller.toast().clone();

        assert!(controller.delete(&id));
        let after_first = controller.toast().clone();
        assert_ne!(after_first, before_toast);

        assert!(!controller.delete(&id));
        assert!(controller.is_empty());
        assert_eq!(controller.toast(), &after_first);
    }

    #[test]
    fn newest_incomplete_task_is_listed_first() {
        let mut controller = Controller::new();
        controller.add(text("A"));
        controller.add(text("B"));
        assert_eq!(sorted_texts(&controller), ["B", "A"]);
    }

    #[test]
    fn completed_task_sinks_below_new_ones() {
        let mut controller = Controller::new();
        let milk = controller.add_at(text("Buy milk"), at(1));
        controller.toggle_complete_at(&milk, at(2));
        controller.add_at(text("Walk dog"), at(3));

        assert_eq!(sorted_texts(&controller), ["Walk dog", "Buy milk"]);
        let sorted: Vec<&Task> = controller.sorted_tasks().collect();
        assert!(!sorted[0].is_completed());
        assert!(sorted[1].is_completed());
    }

    #[test]
    fn completed_tasks_are_ordered_by_completion_time() {
        let mut controller = Controller::new();
        let a = controller.add_at(text("A"), at(1));
        let b = controller.add_at(text("B"), at(1));
        let c = controller.add_at(text("C"), at(1));
        controller.toggle_complete_at(&b, at(10));
        controller.toggle_complete_at(&a, at(20));
        controller.toggle_complete_at(&c, at(5));

        assert_eq!(sorted_texts(&controller), ["A", "B", "C"]);
    }

    #[test]
    fn sorted_tasks_can_be_walked_twice() {
        let mut controller = Controller::new();
        controller.add(text("A"));
        controller.add(text("B"));

        let iter = controller.sorted_tasks();
        assert_eq!(iter.clone().count(), 2);
        assert_eq!(iter.count(), 2);
    }

    #[test]
    fn hide_toast_keeps_message() {
        let mut controller = Controller::new();
        controller.add(text("A"));
        controller.hide_toast();

        assert!(!controller.toast().is_visible());
        assert_eq!(controller.toast().notification().arg("text"), Some("A"));
    }
}
