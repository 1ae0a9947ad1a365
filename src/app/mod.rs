// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the task list screen to localization, the theme
//! setting and the window lifecycle. Tasks live only in memory; closing the
//! window cancels any running toast timers and exits.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, defaults};
use crate::i18n::fluent::I18n;
use crate::ui::task_list;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    task_list: task_list::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("theme_mode", &self.theme_mode)
            .field("tasks", &self.task_list.controller().len())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            theme_mode: ThemeMode::System,
            task_list: task_list::State::default(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            defaults::WINDOW_DEFAULT_WIDTH,
            defaults::WINDOW_DEFAULT_HEIGHT,
        ),
        min_size: Some(iced::Size::new(
            defaults::MIN_WINDOW_WIDTH,
            defaults::MIN_WINDOW_HEIGHT,
        )),
        // Close requests go through `Message::WindowCloseRequested` first.
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings and localization for a fresh, empty task list.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) =
            config::load_with_override(flags.config_dir.map(PathBuf::from));
        if let Some(reason) = config_warning {
            tracing::warn!(%reason, "settings file ignored, using defaults");
        }

        let i18n = I18n::new(flags.lang, &config);
        tracing::info!(locale = %i18n.current_locale(), "starting task list");

        let app = App {
            i18n,
            theme_mode: config.general.theme_mode,
            task_list: task_list::State::default(),
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.task_list.is_animating());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::TaskList(task_list_message) => self
                .task_list
                .update(task_list_message)
                .map(Message::TaskList),
            Message::Tick(now) => {
                self.task_list.tick(now);
                Task::none()
            }
            Message::WindowCloseRequested(window_id) => {
                tracing::debug!(?window_id, "close requested");
                self.task_list.teardown();
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            task_list: &self.task_list,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskText;
    use crate::ui::task_list::input;

    #[test]
    fn window_waits_for_close_handling() {
        let settings = window_settings();
        assert!(!settings.exit_on_close_request);
        assert_eq!(
            settings.min_size,
            Some(iced::Size::new(
                defaults::MIN_WINDOW_WIDTH,
                defaults::MIN_WINDOW_HEIGHT
            ))
        );
    }

    #[test]
    fn new_app_starts_empty_with_english_title() {
        let (app, _task) = App::new(Flags {
            lang: Some("en-US".into()),
            config_dir: Some(
                std::env::temp_dir()
                    .join("iced_tasks_missing")
                    .display()
                    .to_string(),
            ),
        });
        assert!(app.task_list.controller().is_empty());
        assert_eq!(app.title(), "Task Manager");
    }

    #[test]
    fn submitted_text_reaches_the_list() {
        let mut app = App::default();
        let _ = app.update(Message::TaskList(task_list::Message::Input(
            input::Message::DraftChanged("Buy milk".into()),
        )));
        let _ = app.update(Message::TaskList(task_list::Message::Input(
            input::Message::Submit,
        )));

        let tasks = app.task_list.controller().tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(Some(tasks[0].text()), TaskText::parse("Buy milk").as_ref());
        assert!(app.task_list.is_animating());
    }

    #[test]
    fn close_request_cancels_toast() {
        let mut app = App::default();
        let _ = app.update(Message::TaskList(task_list::Message::Input(
            input::Message::DraftChanged("A".into()),
        )));
        let _ = app.update(Message::TaskList(task_list::Message::Input(
            input::Message::Submit,
        )));
        assert!(app.task_list.is_animating());

        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(!app.task_list.is_animating());
    }
}
