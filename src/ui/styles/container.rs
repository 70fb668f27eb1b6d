// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{BLACK, WHITE},
    radius, shadow,
};
use crate::ui::state::Phase;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface for a gallery item.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so cards stay readable in both light and dark modes without
/// hard-coding colors.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Backdrop behind the lightbox image; lighter while fading in or out.
pub fn backdrop(phase: Phase) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = match phase {
            Phase::Open => opacity::BACKDROP_OPEN,
            Phase::Opening | Phase::Closing => opacity::BACKDROP_FADING,
            Phase::Closed => opacity::TRANSPARENT,
        };

        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..BLACK })),
            text_color: Some(WHITE),
            ..Default::default()
        }
    }
}

/// Pill behind the price label and zoom indicator.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}
