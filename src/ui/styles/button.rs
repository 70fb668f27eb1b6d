// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (theme toggle).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, border_color, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500, shadow::MD),
        button::Status::Disabled => return button::Style::default(),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_600, shadow::SM)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow,
        snap: true,
    }
}

/// Style for the selected category chip.
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::PRIMARY_400,
        _ => palette::PRIMARY_500,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::PRIMARY_600,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Style for unselected category chips.
/// Adapts to light/dark theme while maintaining consistency.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);

    let (bg_color, text_color) = if is_light {
        (palette::GRAY_100, palette::GRAY_900)
    } else {
        (palette::GRAY_700, WHITE)
    };

    let border_color = match status {
        button::Status::Hovered => palette::PRIMARY_500,
        _ => palette::GRAY_400,
    };

    button::Style {
        background: Some(Background::Color(bg_color)),
        text_color,
        border: Border {
            color: border_color,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless button wrapping a gallery thumbnail.
pub fn thumbnail(_theme: &Theme, status: button::Status) -> button::Style {
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_500,
        _ => Color::TRANSPARENT,
    };

    button::Style {
        background: None,
        text_color: WHITE,
        border: Border {
            color: border_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Lightbox control (close, arrows, play/pause).
///
/// The keyboard-focused control gets a brand-colored ring.
pub fn lightbox_control(focused: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match status {
            button::Status::Hovered => opacity::OVERLAY_HOVER,
            button::Status::Pressed => opacity::OVERLAY_PRESSED,
            _ => opacity::OVERLAY_MEDIUM,
        };

        let border = if focused {
            Border {
                color: palette::PRIMARY_400,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            }
        } else {
            Border {
                radius: radius::FULL.into(),
                ..Border::default()
            }
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: WHITE,
            border,
            shadow: shadow::MD,
            snap: true,
        }
    }
}

/// Preview dot under the lightbox image.
pub fn preview_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = match (active, status) {
            (true, _) => opacity::OPAQUE,
            (false, button::Status::Hovered) => opacity::OVERLAY_HOVER,
            (false, _) => opacity::OVERLAY_MEDIUM,
        };

        button::Style {
            background: Some(Background::Color(Color { a: alpha, ..WHITE })),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Border::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}
