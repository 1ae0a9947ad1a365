// SPDX-License-Identifier: MPL-2.0
//! A single task row: completion checkbox, text and delete button.
//!
//! Rows are stateless. Pressing the checkbox or the text toggles the task,
//! the trailing button deletes it. Completed tasks are struck through.

use crate::i18n::fluent::I18n;
use crate::tasks::{Task, TaskId};
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::text::{Rich, Span};
use iced::widget::{button, rich_text, span, text, tooltip, Container, Row, Text};
use iced::{alignment, never, Element, Length};
use std::convert::Infallible;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Toggle(TaskId),
    Delete(TaskId),
}

pub fn view<'a>(task: &'a Task, i18n: &I18n) -> Element<'a, Message> {
    let completed = task.is_completed();

    let mark = Container::new(text(if completed { "✓" } else { "" }).size(typography::BODY))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);
    let checkbox = button(mark)
        .width(Length::Fixed(sizing::CHECKBOX))
        .height(Length::Fixed(sizing::CHECKBOX))
        .padding(0)
        .on_press(Message::Toggle(task.id().clone()))
        .style(styles::button::checkbox(completed));

    let label: Rich<'a, Infallible, Message> = rich_text([task_label(task)])
        .on_link_click(never)
        .size(typography::BODY_LG);
    let body = button(label)
        .width(Length::Fill)
        .padding([0.0, spacing::XS])
        .on_press(Message::Toggle(task.id().clone()))
        .style(styles::button::row_text);

    let delete_button: Element<'a, Message> = button(text("✕").size(sizing::ICON_SM))
        .padding(spacing::XXS)
        .on_press(Message::Delete(task.id().clone()))
        .style(styles::button::delete)
        .into();
    let delete = tooltip(
        delete_button,
        Text::new(i18n.tr("task-row-delete-button")),
        tooltip::Position::Left,
    )
    .gap(4);

    let row = Row::new()
        .push(checkbox)
        .push(body)
        .push(delete)
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    Container::new(row)
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
}

/// The task text, muted and struck through once completed.
fn task_label(task: &Task) -> Span<'_, Infallible> {
    let completed = task.is_completed();
    span(task.text().as_str())
        .strikethrough(completed)
        .color_maybe(completed.then_some(palette::GRAY_500))
}
