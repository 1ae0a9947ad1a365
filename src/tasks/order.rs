// SPDX-License-Identifier: MPL-2.0
//! Display ordering of tasks.
//!
//! Incomplete tasks come first, then completed tasks with the most recently
//! completed on top. The comparator reports two incomplete tasks
//! (or a completed task missing its timestamp) as equal: the input is already
//! newest-first, and a stable sort keeps that order.

use super::Task;
use std::cmp::Ordering;

/// Compares two tasks for display.
#[must_use]
pub fn display_order(a: &Task, b: &Task) -> Ordering {
    match (a.is_completed(), b.is_completed()) {
        (false, true) => Ordering::Less,
        (true, false) => Ordering::Greater,
        (true, true) => match (a.completed_at(), b.completed_at()) {
            (Some(a_at), Some(b_at)) => b_at.cmp(&a_at),
            _ => Ordering::Equal,
        },
        (false, false) => Ordering::Equal,
    }
}

/// Returns references to `tasks` in display order.
///
/// `sort_by` is stable, which is what keeps incomplete tasks in their
/// insertion order.
#[must_use]
pub fn sorted(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| display_order(a, b));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskText;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn task(text: &str) -> Task {
        Task::new(TaskText::parse(text).unwrap(), at(0))
    }

    fn texts(tasks: &[&Task]) -> Vec<String> {
        tasks.iter().map(|t| t.text().to_string()).collect()
    }

    #[test]
    fn incomplete_tasks_keep_their_relative_order() {
        let tasks = vec![task("C"), task("B"), task("A")];
        assert_eq!(texts(&sorted(&tasks)), ["C", "B", "A"]);
    }

    #[test]
    fn incomplete_tasks_come_before_completed_ones() {
        let mut done = task("done");
        done.toggle(at(5));
        let tasks = vec![done, task("todo-1"), task("todo-2")];

        assert_eq!(texts(&sorted(&tasks)), ["todo-1", "todo-2", "done"]);
    }

    #[test]
    fn completed_tasks_are_most_recent_first() {
        let mut early = task("early");
        early.toggle(at(10));
        let mut late = task("late");
        late.toggle(at(20));
        let mut middle = task("middle");
        middle.toggle(at(15));
        let tasks = vec![early, late, middle];

        assert_eq!(texts(&sorted(&tasks)), ["late", "middle", "early"]);
    }

    #[test]
    fn equal_completion_times_keep_insertion_order() {
        let mut first = task("first");
        first.toggle(at(10));
        let mut second = task("second");
        second.toggle(at(10));
        let tasks = vec![first, second];

        assert_eq!(texts(&sorted(&tasks)), ["first", "second"]);
    }

    #[test]
    fn display_order_is_antisymmetric_for_mixed_states() {
        let mut done = task("done");
        done.toggle(at(1));
        let open = task("open");

        assert_eq!(display_order(&open, &done), Ordering::Less);
        assert_eq!(display_order(&done, &open), Ordering::Greater);
        assert_eq!(display_order(&open, &open), Ordering::Equal);
    }
}
