// SPDX-License-Identifier: MPL-2.0
//! Flattening of a catalog into a render plan and a navigable sequence.
//!
//! [`build`] walks the catalog once, category by category and photo by photo,
//! and produces two views of the same data:
//!
//! - a [`RenderPlan`]: one [`Section`] per category, each item tagged with its
//!   [`GlobalIndex`];
//! - a [`FlattenedSequence`]: every photo in traversal order, used by the
//!   lightbox for bounds and lookups.
//!
//! For every planned item, `sequence.get(item.index)` is that item's photo.
//! Both values are built once and never re-flattened.

use super::{Catalog, Photo};

/// Position of a photo in the [`FlattenedSequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GlobalIndex(usize);

impl GlobalIndex {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn value(self) -> usize {
        self.0
    }
}

impl From<usize> for GlobalIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// A grid item: a photo and where it lives in the flattened sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedItem {
    pub photo: Photo,
    pub index: GlobalIndex,
}

/// A titled gallery section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: String,
    pub title: String,
    pub items: Vec<PlannedItem>,
}

/// Ordered sections ready to be materialized by a renderer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderPlan {
    sections: Vec<Section>,
    photo_count: usize,
}

impl RenderPlan {
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Number of photos across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.photo_count
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photo_count == 0
    }

    /// Global index of the first slot of a section.
    ///
    /// An empty section starts where the next photo would go.
    #[must_use]
    pub fn section_start(&self, section: usize) -> Option<GlobalIndex> {
        let preceding = self.sections.get(..section)?;
        self.sections.get(section)?;
        Some(GlobalIndex(preceding.iter().map(|s| s.items.len()).sum()))
    }

    /// Relative vertical position of a section, in `0.0..=1.0`.
    ///
    /// Approximates where the section sits in the scrolled gallery by the
    /// share of photos that come before it.
    #[must_use]
    pub fn section_offset(&self, section: usize) -> Option<f32> {
        let start = self.section_start(section)?;
        if self.photo_count == 0 {
            return Some(0.0);
        }
        #[allow(clippy::cast_precision_loss)]
        let offset = start.value() as f32 / self.photo_count as f32;
        Some(offset.clamp(0.0, 1.0))
    }
}

/// Every photo of the catalog in category-then-photo order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FlattenedSequence {
    photos: Vec<Photo>,
}

impl FlattenedSequence {
    #[must_use]
    pub fn get(&self, index: GlobalIndex) -> Option<&Photo> {
        self.photos.get(index.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Photo> {
        self.photos.iter()
    }
}

/// Builds the render plan and flattened sequence for a catalog.
///
/// A single running counter starting at zero tags each photo, so indices are
/// unique, contiguous and increase in traversal order. An empty catalog
/// yields an empty plan and an empty sequence.
#[must_use]
pub fn build(catalog: &Catalog) -> (RenderPlan, FlattenedSequence) {
    let mut photos = Vec::with_capacity(catalog.photo_count());
    let mut sections = Vec::with_capacity(catalog.categories().len());
    let mut next_index = 0;

    for category in catalog.categories() {
        let mut items = Vec::with_capacity(category.photos.len());
        for photo in &category.photos {
            items.push(PlannedItem {
                photo: photo.clone(),
                index: GlobalIndex(next_index),
            });
            photos.push(photo.clone());
            next_index += 1;
        }
        sections.push(Section {
            name: category.name.clone(),
            title: category.title.clone(),
            items,
        });
    }

    let plan = RenderPlan {
        sections,
        photo_count: next_index,
    };
    (plan, FlattenedSequence { photos })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn category(name: &str, count: usize) -> Category {
        let photos = (0..count)
            .map(|i| Photo::new(format!("{name}/{i}.jpg"), name))
            .collect();
        Category::new(name, name.to_uppercase(), photos)
    }

    #[test]
    fn empty_catalog_yields_empty_outputs() {
        let (plan, sequence) = build(&Catalog::default());
        assert!(plan.sections().is_empty());
        assert!(plan.is_empty());
        assert!(sequence.is_empty());
        assert_eq!(plan.section_start(0), None);
    }

    #[test]
    fn sequence_is_concatenation_in_catalog_order() {
        let catalog = Catalog::new(vec![category("a", 2), category("b", 0), category("c", 3)]);
        let (_, sequence) = build(&catalog);

        let expected: Vec<&Photo> = catalog
            .categories()
            .iter()
            .flat_map(|c| c.photos.iter())
            .collect();
        let actual: Vec<&Photo> = sequence.iter().collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn global_indices_are_contiguous_from_zero() {
        let catalog = Catalog::new(vec![category("a", 3), category("b", 1), category("c", 4)]);
        let (plan, _) = build(&catalog);

        let indices: Vec<usize> = plan
            .sections()
            .iter()
            .flat_map(|s| s.items.iter())
            .map(|item| item.index.value())
            .collect();
        assert_eq!(indices, (0..8).collect::<Vec<_>>());
        assert_eq!(plan.len(), 8);
    }

    #[test]
    fn every_item_maps_back_to_its_photo() {
        let catalog = Catalog::new(vec![category("x", 2), category("y", 5)]);
        let (plan, sequence) = build(&catalog);

        for item in plan.sections().iter().flat_map(|s| s.items.iter()) {
            assert_eq!(sequence.get(item.index), Some(&item.photo));
        }
    }

    #[test]
    fn sections_keep_titles_and_empty_categories() {
        let catalog = Catalog::new(vec![category("a", 1), category("empty", 0)]);
        let (plan, _) = build(&catalog);

        assert_eq!(plan.sections().len(), 2);
        assert_eq!(plan.sections()[0].title, "A");
        assert_eq!(plan.sections()[1].name, "empty");
        assert!(plan.sections()[1].items.is_empty());
    }

    #[test]
    fn two_plus_one_scenario_indexes_last_photo_at_two() {
        let catalog = Catalog::new(vec![category("cat_a", 2), category("cat_b", 1)]);
        let (plan, sequence) = build(&catalog);

        assert_eq!(sequence.len(), 3);
        assert_eq!(plan.sections()[1].items[0].index, GlobalIndex::new(2));
    }

    #[test]
    fn section_start_and_offset_follow_preceding_photos() {
        let catalog = Catalog::new(vec![category("a", 2), category("b", 0), category("c", 2)]);
        let (plan, _) = build(&catalog);

        assert_eq!(plan.section_start(0), Some(GlobalIndex::new(0)));
        assert_eq!(plan.section_start(1), Some(GlobalIndex::new(2)));
        assert_eq!(plan.section_start(2), Some(GlobalIndex::new(2)));
        assert_eq!(plan.section_start(3), None);

        assert_eq!(plan.section_offset(0), Some(0.0));
        assert_eq!(plan.section_offset(2), Some(0.5));
        assert_eq!(plan.section_offset(7), None);
    }

    #[test]
    fn out_of_range_lookup_returns_none() {
        let (_, sequence) = build(&Catalog::new(vec![category("a", 1)]));
        assert!(sequence.get(GlobalIndex::new(1)).is_none());
    }
}
