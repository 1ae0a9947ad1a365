// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! # Screens
//!
//! - [`task_list`] - Task entry, task rows and the toast overlay
//!
//! # Shared Infrastructure
//!
//! - [`notifications`] - Toast state, widget and animation state machine
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod styles;
pub mod task_list;
pub mod theming;
