// SPDX-License-Identifier: MPL-2.0
//! `iced_tasks` is a single-screen task list built with the Iced GUI framework.
//!
//! Tasks can be added, completed and deleted. Each action is confirmed by a
//! short toast that fades in at the top of the window and hides itself after
//! two seconds. Strings are localized with Fluent; display preferences come
//! from an optional `settings.toml`.

#![doc(html_root_url = "https://docs.rs/iced_tasks/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod tasks;
pub mod ui;
