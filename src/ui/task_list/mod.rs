// SPDX-License-Identifier: MPL-2.0
//! Task list screen.
//!
//! [`State`] wires the [`Controller`] to the entry field and to the toast
//! [`Notifier`]. Whenever the controller publishes a new toast message the
//! notifier animation is (re)started; when the notifier reports that the
//! toast finished hiding, the controller's visible flag is cleared.
//! A submitted task also dismisses keyboard focus from the entry field.

pub mod controller;
pub mod input;
pub mod row;

pub use controller::Controller;

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::notifications::{Notifier, NotifierEvent, Timings, Toast};
use crate::ui::styles;
use iced::widget::{scrollable, text, Column, Container, Stack};
use iced::{alignment, Element, Length, Task, Theme};
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Message {
    Input(input::Message),
    Row(row::Message),
}

#[derive(Debug)]
pub struct State {
    controller: Controller,
    input: input::State,
    notifier: Notifier,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Timings::default())
    }
}

impl State {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            controller: Controller::new(),
            input: input::State::default(),
            notifier: Notifier::new(timings),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.update_at(message, Instant::now())
    }

    /// [`State::update`] with an explicit clock reading for the notifier.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Task<Message> {
        let task = match message {
            Message::Input(message) => match self.input.update(message) {
                input::Event::Submitted(text) => {
                    self.controller.add(text);
                    input::dismiss_focus()
                }
                input::Event::None => Task::none(),
            },
            Message::Row(row::Message::Toggle(id)) => {
                self.controller.toggle_complete(&id);
                Task::none()
            }
            Message::Row(row::Message::Delete(id)) => {
                self.controller.delete(&id);
                Task::none()
            }
        };
        self.sync_notifier(now);
        task
    }

    /// Advances the toast animation.
    pub fn tick(&mut self, now: Instant) {
        if let Some(NotifierEvent::Hidden) = self.notifier.tick(now) {
            tracing::debug!("toast hidden");
            self.controller.hide_toast();
        }
    }

    /// Stops any pending toast timers. Called before the window goes away.
    pub fn teardown(&mut self) {
        self.notifier.cancel();
    }

    /// Whether frame ticks are needed.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.notifier.is_active()
    }

    #[must_use]
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    #[must_use]
    pub fn input(&self) -> &input::State {
        &self.input
    }

    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    fn sync_notifier(&mut self, now: Instant) {
        let toast = self.controller.toast();
        if !toast.is_visible() {
            return;
        }
        let id = toast.notification().id();
        if self.notifier.current_request() != Some(id) {
            self.notifier.request(id, now);
        }
    }

    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        let entry = self.input.view(i18n).map(Message::Input);

        let list: Element<'a, Message> = if self.controller.is_empty() {
            let hint = text(i18n.tr("task-list-empty"))
                .size(typography::BODY_LG)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::GRAY_500),
                });
            Container::new(hint)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center)
                .into()
        } else {
            let rows = self
                .controller
                .sorted_tasks()
                .map(|task| row::view(task, i18n).map(Message::Row));
            scrollable(Column::with_children(rows).spacing(spacing::SM))
                .height(Length::Fill)
                .into()
        };

        let content = Column::new()
            .push(entry)
            .push(list)
            .spacing(spacing::LG)
            .padding(spacing::LG);

        let screen = Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::screen);

        // The screen stays the first child of the same root so widget state
        // (input focus, scroll offset) survives the toast coming and going.
        let mut stack = Stack::new()
            .push(screen)
            .width(Length::Fill)
            .height(Length::Fill);

        if let Some(toast) = Toast::view(self.controller.toast(), &self.notifier, i18n) {
            stack = stack.push(toast);
        }

        stack.into()
    }
}
