// SPDX-License-Identifier: MPL-2.0
//! Task entry field with its add button.
//!
//! The draft is submitted either with the button or with Enter. Drafts that
//! are blank after trimming never reach the controller. A successful submit
//! clears the field, and the screen follows it with [`dismiss_focus`].

use crate::i18n::fluent::I18n;
use crate::tasks::TaskText;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::advanced::widget::{operate, operation::focusable};
use iced::widget::{button, text, text_input, Container, Row};
use iced::{alignment, Element, Length, Task};

/// Text currently typed in the field.
#[derive(Debug, Clone, Default)]
pub struct State {
    draft: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    DraftChanged(String),
    Submit,
}

/// What the parent has to do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Submitted(TaskText),
}

impl State {
    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// The add button is enabled only for drafts with visible characters.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::DraftChanged(draft) => {
                self.draft = draft;
                Event::None
            }
            Message::Submit => match TaskText::parse(&self.draft) {
                Some(text) => {
                    self.draft.clear();
                    Event::Submitted(text)
                }
                // Keep what the user typed, even if it is only whitespace.
                None => Event::None,
            },
        }
    }

    pub fn view<'a>(&'a self, i18n: &I18n) -> Element<'a, Message> {
        let field = text_input(&i18n.tr("task-input-placeholder"), &self.draft)
            .on_input(Message::DraftChanged)
            .on_submit(Message::Submit)
            .padding(spacing::SM)
            .size(typography::BODY_LG)
            .width(Length::Fill);

        let label = text("+").size(sizing::ICON_MD);
        let add = button(
            Container::new(label)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Center),
        )
        .width(Length::Fixed(sizing::INPUT_HEIGHT))
        .height(Length::Fixed(sizing::INPUT_HEIGHT))
        .padding(0)
        .on_press_maybe(self.can_submit().then_some(Message::Submit))
        .style(styles::button::primary);

        Row::new()
            .push(field)
            .push(add)
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .into()
    }
}

/// Takes keyboard focus away from whichever widget holds it.
pub fn dismiss_focus<T>() -> Task<T>
where
    T: Send + 'static,
{
    operate(focusable::unfocus())
}
