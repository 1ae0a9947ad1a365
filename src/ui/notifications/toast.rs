// SPDX-License-Identifier: MPL-2.0
//! Toast state and widget.
//!
//! [`ToastState`] is the data the task list controller owns: whether a toast
//! should be visible and which notification it carries. [`Toast::view`]
//! combines it with the [`Notifier`] animation values to draw the overlay.

use super::notification::{Notification, Severity};
use super::notifier::{Notifier, Phase};
use crate::config::TOAST_SLIDE_DISTANCE;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Container, Text};
use iced::{alignment, font, Color, Element, Font, Length, Padding, Theme};

/// Gap above the toast once it has settled. Never smaller than the slide,
/// so the entrance starts inside the window.
const TOP_MARGIN: f32 = spacing::MD;

const _: () = assert!(TOP_MARGIN >= TOAST_SLIDE_DISTANCE);

/// Transient, singleton toast state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    visible: bool,
    notification: Notification,
}

impl ToastState {
    /// Replaces the current message and makes the toast visible.
    pub fn show(&mut self, notification: Notification) {
        self.visible = true;
        self.notification = notification;
    }

    /// Clears the visible flag, keeping the last message.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.notification.severity()
    }
}

/// Toast widget.
pub struct Toast;

impl Toast {
    /// Resolves the notification text in the current locale.
    #[must_use]
    pub fn message(notification: &Notification, i18n: &I18n) -> String {
        if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        }
    }

    /// Renders the toast overlay, or `None` when nothing should be drawn.
    ///
    /// The toast is centered at the top of its parent and slides down while
    /// fading in, following the notifier's current frame.
    pub fn view<'a, Message: 'a>(
        state: &ToastState,
        notifier: &Notifier,
        i18n: &I18n,
    ) -> Option<Element<'a, Message>> {
        if !state.is_visible() || notifier.phase() == Phase::Hidden {
            return None;
        }

        let severity = state.severity();
        let alpha = notifier.opacity();
        let text_color = with_alpha(severity.text_color(), alpha);

        let message = Text::new(Self::message(state.notification(), i18n))
            .size(typography::BODY)
            .font(Font {
                weight: font::Weight::Medium,
                ..Font::DEFAULT
            })
            .style(move |_theme: &Theme| text::Style {
                color: Some(text_color),
            });

        let pill = Container::new(message)
            .max_width(sizing::TOAST_MAX_WIDTH)
            .padding([spacing::XS + spacing::XXS / 2.0, spacing::MD])
            .style(move |_theme: &Theme| toast_container_style(severity, alpha));

        Some(
            Container::new(pill)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Center)
                .align_y(alignment::Vertical::Top)
                .padding(Padding::ZERO.top(top_padding(notifier.offset())))
                .into(),
        )
    }
}

fn top_padding(offset: f32) -> f32 {
    TOP_MARGIN + offset
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha,
        ..color
    }
}

/// Style function for the toast container.
fn toast_container_style(severity: Severity, alpha: f32) -> container::Style {
    let drop_shadow = iced::Shadow {
        color: with_alpha(shadow::SM.color, 0.1 * alpha),
        ..shadow::SM
    };

    container::Style {
        background: Some(iced::Background::Color(with_alpha(
            severity.background(),
            alpha,
        ))),
        border: iced::Border {
            radius: radius::XL.into(),
            ..Default::default()
        },
        shadow: drop_shadow,
        text_color: Some(with_alpha(severity.text_color(), alpha)),
        ..Default::default()
    }
}
