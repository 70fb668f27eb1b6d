// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The lightbox replaces the gallery for as long as it is on screen,
//! including its closing fade.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery::{self, view::ViewEnv};
use crate::ui::lightbox;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    pub gallery: &'a gallery::State,
    pub lightbox: &'a lightbox::component::State,
    /// i18n key of a pending warning banner.
    pub notice: Option<&'a str>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.lightbox.is_on_screen() {
        return ctx.lightbox.view(ctx.i18n).map(Message::Lightbox);
    }

    let page = gallery::view::view(
        ctx.gallery,
        ViewEnv {
            i18n: ctx.i18n,
            theme_mode: ctx.theme_mode,
        },
    )
    .map(Message::Gallery);

    match ctx.notice {
        Some(key) => column![notice_banner(ctx.i18n, key), page].into(),
        None => page,
    }
}

fn notice_banner<'a>(i18n: &I18n, key: &str) -> Element<'a, Message> {
    let dismiss = button(text("×").size(typography::BODY))
        .on_press(Message::DismissNotice)
        .padding([0.0, spacing::XS])
        .style(styles::button::unselected);

    container(
        row![
            text(i18n.tr(key)).size(typography::BODY_SM).width(Length::Fill),
            dismiss,
        ]
        .spacing(spacing::SM)
        .align_y(Alignment::Center),
    )
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .style(styles::container::badge)
    .into()
}
