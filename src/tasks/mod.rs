// SPDX-License-Identifier: MPL-2.0
//! Task domain types.
//!
//! This module is independent of the UI toolkit: it holds the [`Task`]
//! record, its identifier and text newtypes, and the display ordering used
//! by the task list.

pub mod order;
mod task;

pub use task::{Task, TaskId, TaskText};
