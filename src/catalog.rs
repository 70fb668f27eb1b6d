// SPDX-License-Identifier: MPL-2.0
//! Gallery catalog: creation items and customer review photos.
//!
//! The catalog is a TOML file:
//!
//! ```toml
//! [[items]]
//! title = "Linen tote bag"
//! images = ["bags/tote-front.jpg", "bags/tote-back.jpg"]
//! price = "35 €"
//! category = "bags"
//!
//! [[reviews]]
//! image = "reviews/anna.jpg"
//! caption = "Perfect gift!"
//! ```
//!
//! Relative image paths resolve against the catalog's directory. URLs and
//! absolute paths are kept as-is.

use crate::error::{CatalogError, Error, Result};
use crate::ui::state::ImageRef;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default catalog file name, looked up in the config directory.
pub const CATALOG_FILE: &str = "catalog.toml";

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    items: Vec<RawItem>,
    #[serde(default)]
    reviews: Vec<RawReview>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    title: String,
    #[serde(default)]
    images: Vec<String>,
    #[serde(default)]
    price: Option<String>,
    #[serde(default)]
    category: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawReview {
    image: String,
    #[serde(default)]
    caption: Option<String>,
}

/// A creation shown in the gallery grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub title: String,
    /// Never empty.
    pub images: Vec<ImageRef>,
    pub price: Option<String>,
    pub category: Option<String>,
}

/// A single customer photo, opened alone in the lightbox.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewImage {
    pub image: ImageRef,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    pub items: Vec<GalleryItem>,
    pub reviews: Vec<ReviewImage>,
}

/// Which items the gallery grid shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    #[must_use]
    pub fn matches(&self, item: &GalleryItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(wanted) => item.category.as_deref() == Some(wanted.as_str()),
        }
    }
}

impl Catalog {
    /// Reads and parses a catalog file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, path.parent())
    }

    /// Parses catalog TOML. `base_dir` anchors relative image paths.
    pub fn parse(content: &str, base_dir: Option<&Path>) -> Result<Self> {
        let file: CatalogFile = toml::from_str(content)
            .map_err(|err| Error::Catalog(CatalogError::Malformed(err.to_string())))?;

        let items: Vec<GalleryItem> = file
            .items
            .into_iter()
            .filter_map(|raw| {
                let images: Vec<ImageRef> = raw
                    .images
                    .iter()
                    .map(|image| image.trim())
                    .filter(|image| !image.is_empty())
                    .map(|image| resolve_image(image, base_dir))
                    .collect();
                if images.is_empty() {
                    tracing::warn!(title = %raw.title, "skipping catalog item without images");
                    return None;
                }
                Some(GalleryItem {
                    title: raw.title,
                    images,
                    price: non_blank(raw.price),
                    category: non_blank(raw.category),
                })
            })
            .collect();

        let reviews: Vec<ReviewImage> = file
            .reviews
            .into_iter()
            .filter(|raw| !raw.image.trim().is_empty())
            .map(|raw| ReviewImage {
                image: resolve_image(raw.image.trim(), base_dir),
                caption: non_blank(raw.caption),
            })
            .collect();

        if items.is_empty() && reviews.is_empty() {
            return Err(CatalogError::Empty.into());
        }

        tracing::debug!(
            items = items.len(),
            reviews = reviews.len(),
            "catalog loaded"
        );
        Ok(Self { items, reviews })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.reviews.is_empty()
    }

    /// Distinct categories in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for category in self.items.iter().filter_map(|item| item.category.as_deref()) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Items matching `filter`, with their index in [`Catalog::items`].
    pub fn filtered<'a>(
        &'a self,
        filter: &'a CategoryFilter,
    ) -> impl Iterator<Item = (usize, &'a GalleryItem)> + 'a {
        self.items
            .iter()
            .enumerate()
            .filter(move |(_, item)| filter.matches(item))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn resolve_image(source: &str, base_dir: Option<&Path>) -> ImageRef {
    if source.contains("://") {
        return ImageRef::new(source);
    }
    let path = Path::new(source);
    match base_dir {
        Some(base) if path.is_relative() => {
            ImageRef::new(base.join(path).to_string_lossy().into_owned())
        }
        _ => ImageRef::new(source),
    }
}
