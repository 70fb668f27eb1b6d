// SPDX-License-Identifier: MPL-2.0
//! Gallery page state: catalog, category filter and open requests.

use crate::catalog::{Catalog, CategoryFilter, GalleryItem};
use crate::i18n::fluent::I18n;
use crate::ui::state::ImageRef;

/// Messages emitted by gallery widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SelectCategory(CategoryFilter),
    /// The `image`-th thumbnail of catalog item `item` was clicked.
    OpenItem { item: usize, image: usize },
    OpenReview(usize),
    ToggleTheme,
}

/// Side effects the application should perform after a gallery message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    OpenLightbox {
        images: Vec<ImageRef>,
        start_index: usize,
        price_label: Option<String>,
    },
    ToggleTheme,
}

#[derive(Debug, Default)]
pub struct State {
    catalog: Catalog,
    filter: CategoryFilter,
    /// i18n key of the catalog load failure, if any.
    load_error: Option<&'static str>,
}

impl State {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    /// Empty gallery explaining why nothing could be loaded.
    #[must_use]
    pub fn failed(error_key: &'static str) -> Self {
        Self {
            load_error: Some(error_key),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&'static str> {
        self.load_error
    }

    /// Items visible under the current filter.
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &GalleryItem)> + '_ {
        self.catalog.filtered(&self.filter)
    }

    pub fn handle_message(&mut self, message: Message, i18n: &I18n) -> Effect {
        match message {
            Message::SelectCategory(filter) => {
                tracing::debug!(?filter, "category selected");
                self.filter = filter;
                Effect::None
            }
            Message::OpenItem { item, image } => match self.catalog.items.get(item) {
                Some(entry) => Effect::OpenLightbox {
                    images: entry.images.clone(),
                    start_index: image,
                    price_label: entry
                        .price
                        .as_deref()
                        .map(|price| i18n.tr_with_args("gallery-price", &[("price", price)])),
                },
                None => {
                    tracing::warn!(item, "gallery item no longer exists");
                    Effect::None
                }
            },
            Message::OpenReview(index) => match self.catalog.reviews.get(index) {
                Some(review) => Effect::OpenLightbox {
                    images: vec![review.image.clone()],
                    start_index: 0,
                    price_label: None,
                },
                None => {
                    tracing::warn!(index, "review image no longer exists");
                    Effect::None
                }
            },
            Message::ToggleTheme => Effect::ToggleTheme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn gallery() -> State {
        let catalog = Catalog::parse(
            r#"
[[items]]
title = "Tote"
images = ["a.jpg", "b.jpg", "c.jpg"]
price = "35 €"
category = "bags"

[[items]]
title = "Ring"
images = ["ring.jpg"]
category = "jewelry"

[[reviews]]
image = "review.jpg"
"#,
            None,
        )
        .expect("valid catalog");
        State::new(catalog)
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".into()), &Config::default())
    }

    #[test]
    fn opening_item_passes_set_index_and_localized_price() {
        let mut state = gallery();
        let effect = state.handle_message(Message::OpenItem { item: 0, image: 2 }, &english());
        assert_eq!(
            effect,
            Effect::OpenLightbox {
                images: vec!["a.jpg".into(), "b.jpg".into(), "c.jpg".into()],
                start_index: 2,
                price_label: Some("Price: 35 €".to_string()),
            }
        );
    }

    #[test]
    fn item_without_price_opens_without_label() {
        let mut state = gallery();
        let effect = state.handle_message(Message::OpenItem { item: 1, image: 0 }, &english());
        assert!(matches!(
            effect,
            Effect::OpenLightbox {
                price_label: None,
                ..
            }
        ));
    }

    #[test]
    fn review_opens_alone_without_price() {
        let mut state = gallery();
        let effect = state.handle_message(Message::OpenReview(0), &english());
        assert_eq!(
            effect,
            Effect::OpenLightbox {
                images: vec!["review.jpg".into()],
                start_index: 0,
                price_label: None,
            }
        );
    }

    #[test]
    fn unknown_item_is_ignored() {
        let mut state = gallery();
        let effect = state.handle_message(Message::OpenItem { item: 9, image: 0 }, &english());
        assert_eq!(effect, Effect::None);
        assert_eq!(state.handle_message(Message::OpenReview(4), &english()), Effect::None);
    }

    #[test]
    fn category_filter_limits_visible_items() {
        let mut state = gallery();
        state.handle_message(
            Message::SelectCategory(CategoryFilter::Category("jewelry".into())),
            &english(),
        );
        let titles: Vec<_> = state.visible_items().map(|(_, i)| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Ring"]);

        state.handle_message(Message::SelectCategory(CategoryFilter::All), &english());
        assert_eq!(state.visible_items().count(), 2);
    }

    #[test]
    fn failed_gallery_keeps_error_key() {
        let state = State::failed("error-catalog-empty");
        assert_eq!(state.load_error(), Some("error-catalog-empty"));
        assert!(state.catalog().is_empty());
    }
}
