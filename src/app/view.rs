// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::task_list;
use iced::Element;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub task_list: &'a task_list::State,
}

/// Renders the single task list screen.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    ctx.task_list.view(ctx.i18n).map(Message::TaskList)
}
