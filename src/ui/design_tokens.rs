// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines all of the application's design tokens, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Border**: Border width scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_tasks::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let muted = Color {
    a: opacity::OVERLAY_MEDIUM,
    ..palette::PRIMARY_500
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_500: Color = Color::from_rgb(0.533, 0.533, 0.533); // #888888
    pub const GRAY_50: Color = Color::from_rgb(0.973, 0.973, 0.973); // #F8F8F8

    // Brand colors (blue scale)
    pub const PRIMARY_200: Color = Color::from_rgb(0.627, 0.753, 0.941); // #A0C0F0, disabled
    pub const PRIMARY_400: Color = Color::from_rgb(0.345, 0.569, 0.973); // Hover
    pub const PRIMARY_500: Color = Color::from_rgb(0.204, 0.471, 0.965); // #3478F6
    pub const PRIMARY_600: Color = Color::from_rgb(0.153, 0.400, 0.878); // Pressed

    // Semantic colors (toast surfaces and text)
    pub const SUCCESS_100: Color = Color::from_rgb(0.906, 0.961, 0.910); // #E7F5E8
    pub const SUCCESS_700: Color = Color::from_rgb(0.180, 0.490, 0.196); // #2E7D32
    pub const ERROR_100: Color = Color::from_rgb(0.980, 0.929, 0.925); // #FAEDEC
    pub const ERROR_700: Color = Color::from_rgb(0.776, 0.157, 0.157); // #C62828
    pub const INFO_100: Color = Color::from_rgb(0.910, 0.945, 0.976); // #E8F1F9
    pub const INFO_700: Color = Color::from_rgb(0.082, 0.396, 0.753); // #1565C0

    // Destructive action accent
    pub const DANGER_400: Color = Color::from_rgb(1.0, 0.302, 0.302); // #FF4D4D
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    // Icon sizes
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;

    // Interactive element heights
    pub const INPUT_HEIGHT: f32 = 50.0;

    /// Round completion checkbox in task rows.
    pub const CHECKBOX: f32 = 24.0;

    // Component widths
    pub const TOAST_MAX_WIDTH: f32 = 360.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font size scale.

    /// Large body - Form inputs, task text
    pub const BODY_LG: f32 = 16.0;

    /// Standard body - Toast messages, labels
    pub const BODY: f32 = 14.0;
}

// ============================================================================
// Border Scale
// ============================================================================

pub mod border {
    /// Medium border - Checkbox outline
    pub const WIDTH_MD: f32 = 2.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 10.0;
    pub const LG: f32 = 12.0;
    pub const XL: f32 = 20.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 1.0 },
        blur_radius: 2.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    // Sizing validation
    assert!(sizing::ICON_MD > sizing::ICON_SM);

    // Typography validation
    assert!(typography::BODY_LG > typography::BODY);

    // Radius validation
    assert!(radius::XL > radius::LG);
};
