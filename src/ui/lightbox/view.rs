// SPDX-License-Identifier: MPL-2.0
//! Rendering of the lightbox regions.
//!
//! The layout has fixed bands (header, side gutters, footer) around a central
//! image area, which lets pointer presses be classified from window geometry
//! alone.

use super::component::Message;
use super::surface::ModalRegions;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::state::zoom::format_percent;
use crate::ui::state::{HitTarget, ModalControl, SlideshowAffordance, ZoomLevel};
use crate::ui::styles;
use iced::widget::{button, column, container, image, row, text, tooltip, Column, Row};
use iced::{Alignment, ContentFit, Element, Length, Point, Rectangle, Size};

/// Area of the window the current image is drawn in.
#[must_use]
pub fn image_area(window: Size) -> Rectangle {
    let width = (window.width - 2.0 * sizing::LIGHTBOX_GUTTER).max(0.0);
    let height = (window.height - sizing::LIGHTBOX_HEADER - sizing::LIGHTBOX_FOOTER).max(0.0);
    Rectangle::new(
        Point::new(sizing::LIGHTBOX_GUTTER, sizing::LIGHTBOX_HEADER),
        Size::new(width, height),
    )
}

/// Visible rectangle of the current picture.
///
/// The picture is fitted (`Contain`) into the image area scaled by `zoom`,
/// centered, then clipped to the area. Without intrinsic dimensions the
/// whole scaled frame counts as picture.
#[must_use]
pub fn image_bounds(window: Size, picture: Option<Size>, zoom: ZoomLevel) -> Rectangle {
    let area = image_area(window);
    let frame = Size::new(area.width * zoom.value(), area.height * zoom.value());

    let fitted = match picture {
        Some(picture) if picture.width > 0.0 && picture.height > 0.0 => {
            let scale = (frame.width / picture.width).min(frame.height / picture.height);
            Size::new(picture.width * scale, picture.height * scale)
        }
        _ => frame,
    };

    let center = area.center();
    let drawn = Rectangle::new(
        Point::new(center.x - fitted.width / 2.0, center.y - fitted.height / 2.0),
        fitted,
    );
    drawn
        .intersection(&area)
        .unwrap_or(Rectangle::new(area.position(), Size::ZERO))
}

/// Classifies a press position as image or backdrop.
#[must_use]
pub fn hit_target(
    window: Size,
    position: Point,
    picture: Option<Size>,
    zoom: ZoomLevel,
) -> HitTarget {
    let bounds = image_bounds(window, picture, zoom);
    if bounds.width > 0.0 && bounds.height > 0.0 && bounds.contains(position) {
        HitTarget::Image
    } else {
        HitTarget::Backdrop
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub regions: &'a ModalRegions,
    pub window: Size,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let ViewContext {
        i18n,
        regions,
        window,
    } = ctx;

    let content: Element<'_, Message> = if regions.visible {
        column![
            header(i18n, regions),
            row![
                gutter(regions.navigation.then(|| {
                    control(i18n, regions, ModalControl::Previous, "‹", "lightbox-previous")
                })),
                image_region(regions, window),
                gutter(regions.navigation.then(|| {
                    control(i18n, regions, ModalControl::Next, "›", "lightbox-next")
                })),
            ]
            .height(Length::Fill)
            .align_y(Alignment::Center),
            footer(i18n, regions),
        ]
        .into()
    } else {
        // Fading out: only the backdrop remains.
        Column::new().into()
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(regions.phase))
        .into()
}

fn header<'a>(i18n: &I18n, regions: &ModalRegions) -> Element<'a, Message> {
    let mut bar = Row::new()
        .height(Length::Fixed(sizing::LIGHTBOX_HEADER))
        .padding([0.0, spacing::MD])
        .align_y(Alignment::Center)
        .push(container(Column::new()).width(Length::Fill));

    if regions.zoom.value() > 1.0 {
        let percent = format_percent(regions.zoom);
        bar = bar.push(
            container(
                text(i18n.tr_with_args("lightbox-zoom", &[("percent", percent.as_str())]))
                    .size(typography::CAPTION),
            )
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::badge),
        );
    }

    bar.spacing(spacing::SM)
        .push(control(i18n, regions, ModalControl::Close, "✕", "lightbox-close"))
        .into()
}

fn gutter(content: Option<Element<'_, Message>>) -> Element<'_, Message> {
    let inner = content.unwrap_or_else(|| Column::new().into());
    container(inner)
        .center_x(Length::Fixed(sizing::LIGHTBOX_GUTTER))
        .into()
}

fn image_region<'a>(regions: &ModalRegions, window: Size) -> Element<'a, Message> {
    let Some(current) = &regions.image else {
        return container(Column::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    };

    let area = image_area(window);
    let zoom = regions.zoom.value();
    let picture = image(image::Handle::from_path(current.as_str()))
        .content_fit(ContentFit::Contain)
        .width(Length::Fixed((area.width * zoom).max(1.0)))
        .height(Length::Fixed((area.height * zoom).max(1.0)));

    container(picture)
        .center(Length::Fill)
        .clip(true)
        .into()
}

fn footer<'a>(i18n: &I18n, regions: &ModalRegions) -> Element<'a, Message> {
    let mut footer = Column::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::LIGHTBOX_FOOTER))
        .spacing(spacing::XS)
        .align_x(Alignment::Center);

    if let Some(price) = &regions.price {
        footer = footer.push(
            container(text(price.clone()).size(typography::BODY_LG))
                .padding([spacing::XXS, spacing::MD])
                .style(styles::container::badge),
        );
    }

    if regions.has_previews() {
        footer = footer.push(previews(regions));
    }

    if regions.navigation {
        let mut controls = Row::new()
            .spacing(spacing::SM)
            .align_y(Alignment::Center)
            .push(control(
                i18n,
                regions,
                ModalControl::PlayPause,
                match regions.affordance {
                    SlideshowAffordance::Play => "▶",
                    SlideshowAffordance::Pause => "⏸",
                },
                regions.affordance.label_key(),
            ));

        if let Some(active) = regions.active_preview {
            let current = (active + 1).to_string();
            let total = regions.preview_count.to_string();
            controls = controls.push(
                text(i18n.tr_with_args(
                    "lightbox-position",
                    &[("current", current.as_str()), ("total", total.as_str())],
                ))
                .size(typography::CAPTION),
            );
        }
        footer = footer.push(controls);
    }

    footer.into()
}

fn previews<'a>(regions: &ModalRegions) -> Element<'a, Message> {
    let dots = (0..regions.preview_count).map(|index| {
        let active = regions.active_preview == Some(index);
        button(Column::new())
            .width(Length::Fixed(sizing::PREVIEW_DOT))
            .height(Length::Fixed(sizing::PREVIEW_DOT))
            .padding(0)
            .on_press(Message::SelectPreview(index))
            .style(styles::button::preview_dot(active))
            .into()
    });

    Row::with_children(dots)
        .spacing(spacing::XS)
        .align_y(Alignment::Center)
        .into()
}

fn control<'a>(
    i18n: &I18n,
    regions: &ModalRegions,
    which: ModalControl,
    glyph: &'a str,
    label_key: &str,
) -> Element<'a, Message> {
    let focused = regions.focused == Some(which);
    let pressable = button(text(glyph).size(typography::TITLE_MD).center())
        .width(Length::Fixed(sizing::LIGHTBOX_CONTROL))
        .height(Length::Fixed(sizing::LIGHTBOX_CONTROL))
        .on_press(Message::Control(which))
        .style(styles::button::lightbox_control(focused));

    let label = container(text(i18n.tr(label_key)).size(typography::CAPTION))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge);

    tooltip(pressable, label, tooltip::Position::Bottom).into()
}
