// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Screen background: a light gray in light mode, the theme background otherwise.
pub fn screen(theme: &Theme) -> container::Style {
    let background = if theme.extended_palette().is_dark {
        theme.extended_palette().background.base.color
    } else {
        palette::GRAY_50
    };

    container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Card surface used for task rows and the input field.
///
/// The color is derived from the active Iced `Theme`, so cards stay readable
/// in both light and dark modes.
pub fn card(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();
    let surface = if extended.is_dark {
        extended.background.weak.color
    } else {
        palette::WHITE
    };

    container::Style {
        background: Some(Background::Color(surface)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: Shadow {
            color: Color {
                a: 0.1,
                ..shadow::SM.color
            },
            ..shadow::SM
        },
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}
