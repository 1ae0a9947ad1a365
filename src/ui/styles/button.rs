// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (the add button).
///
/// Drawn in a muted brand color while disabled, i.e. while the draft is empty.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Active => palette::PRIMARY_500,
        button::Status::Hovered => palette::PRIMARY_400,
        button::Status::Pressed => palette::PRIMARY_600,
        button::Status::Disabled => palette::PRIMARY_200,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Round completion checkbox of a task row.
pub fn checkbox(checked: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = match (checked, status) {
            (true, _) => Some(Background::Color(palette::PRIMARY_500)),
            (false, button::Status::Hovered) => Some(Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::PRIMARY_500
            })),
            (false, _) => None,
        };

        button::Style {
            background: fill,
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless button wrapping the task text; the row card provides the surface.
pub fn row_text(theme: &Theme, _status: button::Status) -> button::Style {
    button::Style {
        background: None,
        text_color: theme.extended_palette().background.base.text,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Delete button of a task row.
pub fn delete(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::DANGER_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color: palette::DANGER_400,
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let theme = Theme::Light;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn primary_button_is_muted_when_disabled() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_200))
        );
    }

    #[test]
    fn checkbox_is_filled_only_when_checked() {
        let theme = Theme::Light;
        let checked = checkbox(true)(&theme, button::Status::Active);
        let unchecked = checkbox(false)(&theme, button::Status::Active);

        assert!(checked.background.is_some());
        assert!(unchecked.background.is_none());
        assert_eq!(unchecked.border.color, palette::PRIMARY_500);
    }

    #[test]
    fn delete_button_highlights_on_hover() {
        let theme = Theme::Light;
        let normal = delete(&theme, button::Status::Active);
        let hover = delete(&theme, button::Status::Hovered);

        assert_ne!(normal.background, hover.background);
        assert_eq!(normal.text_color, palette::DANGER_400);
    }
}
