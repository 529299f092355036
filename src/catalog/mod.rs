// SPDX-License-Identifier: MPL-2.0
//! Photo catalog supplied to the gallery at startup.
//!
//! A [`Catalog`] is an ordered list of [`Category`] records, each holding an
//! ordered list of [`Photo`] records. Order is meaningful everywhere: it is
//! both the display order of the gallery and the navigation order of the
//! lightbox. The catalog is read once and never mutated afterwards.
//!
//! Catalogs are written in TOML:
//!
//! ```toml
//! [[category]]
//! name = "Paris"
//! title = "Paris"
//!
//! [[category.photos]]
//! source = "images/Paris/IMG_6108.jpg"
//! label = "Paris"
//! ```
//!
//! Photo sources are opaque strings and are passed through untouched.

pub mod flatten;

pub use flatten::{build, FlattenedSequence, GlobalIndex, PlannedItem, RenderPlan, Section};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Catalog shipped with the application, used when no catalog file is given.
const BUILTIN_CATALOG: &str = include_str!("../../assets/catalog.toml");

/// A single photo: where to find it and what to call it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Opaque locator (usually a path relative to the catalog file).
    pub source: String,
    /// Display text, also used as the image description.
    pub label: String,
}

impl Photo {
    pub fn new(source: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            label: label.into(),
        }
    }
}

/// A named group of photos rendered as one titled gallery section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Internal identifier.
    pub name: String,
    /// Section heading.
    pub title: String,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Category {
    pub fn new(name: impl Into<String>, title: impl Into<String>, photos: Vec<Photo>) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            photos,
        }
    }
}

/// Ordered set of categories.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default, rename = "category")]
    categories: Vec<Category>,
}

impl Catalog {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Parses the catalog embedded in the binary.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Catalog`] if the embedded TOML is malformed.
    pub fn builtin() -> Result<Self> {
        parse(BUILTIN_CATALOG)
    }

    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Total number of photos across all categories.
    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.categories.iter().map(|c| c.photos.len()).sum()
    }
}

/// Parses a catalog from TOML text.
///
/// # Errors
///
/// Returns [`Error::Catalog`] when the text is not a valid catalog.
pub fn parse(content: &str) -> Result<Catalog> {
    toml::from_str(content).map_err(|err| Error::Catalog(err.to_string()))
}

/// Reads and parses a catalog file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, or [`Error::Catalog`] if
/// its contents are not a valid catalog.
pub fn load_from_path(path: &Path) -> Result<Catalog> {
    let content = fs::read_to_string(path)?;
    let catalog = parse(&content)?;
    log::info!(
        "loaded catalog {} ({} categories, {} photos)",
        path.display(),
        catalog.categories.len(),
        catalog.photo_count()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().expect("builtin catalog should parse");
        let titles: Vec<&str> = catalog
            .categories()
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, ["Thailand & Cambodge", "Vanoise", "Paris"]);
        assert_eq!(catalog.photo_count(), 12);
    }

    #[test]
    fn parse_keeps_category_and_photo_order() {
        let catalog = parse(
            r#"
            [[category]]
            name = "b"
            title = "B"
            [[category.photos]]
            source = "b/2.jpg"
            label = "two"
            [[category.photos]]
            source = "b/1.jpg"
            label = "one"

            [[category]]
            name = "a"
            title = "A"
            "#,
        )
        .expect("catalog should parse");

        assert_eq!(catalog.categories()[0].name, "b");
        assert_eq!(catalog.categories()[0].photos[0].source, "b/2.jpg");
        assert_eq!(catalog.categories()[0].photos[1].source, "b/1.jpg");
        assert!(catalog.categories()[1].photos.is_empty());
    }

    #[test]
    fn parse_empty_text_yields_empty_catalog() {
        let catalog = parse("").expect("empty catalog should parse");
        assert!(catalog.categories().is_empty());
        assert_eq!(catalog.photo_count(), 0);
    }

    #[test]
    fn parse_missing_title_is_catalog_error() {
        let err = parse("[[category]]\nname = \"x\"\n").unwrap_err();
        assert!(matches!(err, Error::Catalog(_)));
    }

    #[test]
    fn sources_are_not_validated() {
        let catalog = parse(
            "[[category]]\nname = \"x\"\ntitle = \"X\"\n[[category.photos]]\nsource = \"::not a path::\"\nlabel = \"\"\n",
        )
        .expect("any source string is accepted");
        assert_eq!(catalog.categories()[0].photos[0].source, "::not a path::");
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("catalog.toml");
        fs::write(
            &path,
            "[[category]]\nname = \"p\"\ntitle = \"P\"\n[[category.photos]]\nsource = \"p.jpg\"\nlabel = \"P\"\n",
        )
        .expect("failed to write catalog");

        let catalog = load_from_path(&path).expect("catalog should load");
        assert_eq!(catalog.photo_count(), 1);
    }

    #[test]
    fn load_from_missing_path_is_io_error() {
        let dir = tempdir().expect("failed to create temp dir");
        let err = load_from_path(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
