// SPDX-License-Identifier: MPL-2.0
//! Gallery page layout: header with filters, item cards and the reviews strip.

use super::component::{Message, State};
use crate::catalog::{CategoryFilter, GalleryItem};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::ImageRef;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, column, container, image, scrollable, text, Column, Row};
use iced::{Alignment, ContentFit, Element, Length};

/// Environment information required to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
}

pub fn view<'a>(state: &'a State, env: ViewEnv<'a>) -> Element<'a, Message> {
    let ViewEnv { i18n, theme_mode } = env;

    let mut body = Column::new().spacing(spacing::XL).padding(spacing::LG);

    if let Some(key) = state.load_error() {
        body = body.push(text(i18n.tr(key)).size(typography::BODY_LG));
    } else if state.catalog().is_empty() {
        body = body.push(text(i18n.tr("gallery-empty")).size(typography::BODY_LG));
    } else {
        let cards: Vec<Element<'a, Message>> = state
            .visible_items()
            .map(|(index, item)| card(index, item))
            .collect();

        if cards.is_empty() {
            body = body.push(text(i18n.tr("gallery-empty-filter")));
        } else {
            body = body.push(
                Row::with_children(cards)
                    .spacing(spacing::LG)
                    .wrap()
                    .vertical_spacing(spacing::LG),
            );
        }

        if !state.catalog().reviews.is_empty() {
            body = body.push(reviews(state, i18n));
        }
    }

    column![
        header(state, i18n, theme_mode),
        scrollable(body).width(Length::Fill).height(Length::Fill),
    ]
    .into()
}

fn header<'a>(state: &'a State, i18n: &I18n, theme_mode: ThemeMode) -> Element<'a, Message> {
    let mut chips = Row::new()
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .push(chip(
            i18n.tr("gallery-filter-all"),
            CategoryFilter::All,
            state.filter(),
        ));

    for category in state.catalog().categories() {
        chips = chips.push(chip(
            category.to_string(),
            CategoryFilter::Category(category.to_string()),
            state.filter(),
        ));
    }

    let theme_toggle = button(text(i18n.tr(theme_mode.toggle_label_key())).size(typography::BODY))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::primary);

    Row::new()
        .padding(spacing::MD)
        .spacing(spacing::LG)
        .align_y(Alignment::Center)
        .push(text(i18n.tr("app-title")).size(typography::TITLE_LG))
        .push(container(chips).width(Length::Fill))
        .push(theme_toggle)
        .into()
}

fn chip<'a>(
    label: String,
    filter: CategoryFilter,
    current: &CategoryFilter,
) -> Element<'a, Message> {
    let style = if *current == filter {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(text(label).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .on_press(Message::SelectCategory(filter))
        .style(style)
        .into()
}

fn card(index: usize, item: &GalleryItem) -> Element<'_, Message> {
    let thumbnails = item.images.iter().enumerate().map(|(position, image_ref)| {
        thumbnail(
            image_ref,
            sizing::THUMBNAIL,
            Message::OpenItem {
                item: index,
                image: position,
            },
        )
    });

    let mut content = Column::new()
        .spacing(spacing::SM)
        .push(text(item.title.as_str()).size(typography::TITLE_SM))
        .push(
            Row::with_children(thumbnails)
                .spacing(spacing::XS)
                .wrap()
                .vertical_spacing(spacing::XS),
        );

    if let Some(price) = &item.price {
        content = content.push(text(price.as_str()).size(typography::BODY));
    }

    container(content)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .style(styles::container::card)
        .into()
}

fn reviews<'a>(state: &'a State, i18n: &I18n) -> Element<'a, Message> {
    let strip = state
        .catalog()
        .reviews
        .iter()
        .enumerate()
        .map(|(index, review)| {
            let mut entry = Column::new().spacing(spacing::XXS).push(thumbnail(
                &review.image,
                sizing::REVIEW_THUMBNAIL,
                Message::OpenReview(index),
            ));
            if let Some(caption) = &review.caption {
                entry = entry.push(text(caption.as_str()).size(typography::CAPTION));
            }
            entry.into()
        });

    column![
        text(i18n.tr("gallery-reviews-title")).size(typography::TITLE_MD),
        Row::with_children(strip)
            .spacing(spacing::MD)
            .wrap()
            .vertical_spacing(spacing::MD),
    ]
    .spacing(spacing::SM)
    .into()
}

fn thumbnail<'a>(image_ref: &ImageRef, size: f32, on_press: Message) -> Element<'a, Message> {
    let picture = image(image::Handle::from_path(image_ref.as_str()))
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .content_fit(ContentFit::Cover);

    button(picture)
        .padding(0)
        .on_press(on_press)
        .style(styles::button::thumbnail)
        .into()
}
