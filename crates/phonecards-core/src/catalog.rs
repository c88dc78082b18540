//! The catalog: an ordered mapping from category to gallery, plus listings.
//!
//! Every gallery operation is addressed by category slug. Unknown slugs are
//! errors; empty galleries turn open/navigation into no-ops.

use crate::error::{CatalogError, CatalogResult};
use crate::gallery::{Gallery, GalleryState};
use crate::marketplace::{default_listings, Listing};
use crate::types::{Category, ImageRef};

#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    galleries: Vec<Gallery>,
    listings: Vec<Listing>,
}

impl Catalog {
    /// Build a catalog, rejecting empty or duplicate category slugs.
    pub fn new(galleries: Vec<Gallery>, listings: Vec<Listing>) -> CatalogResult<Self> {
        let mut seen = std::collections::HashSet::new();
        for gallery in &galleries {
            let slug = &gallery.category().slug;
            if slug.trim().is_empty() {
                return Err(CatalogError::InvalidManifest(
                    "category slug must not be empty".to_string(),
                ));
            }
            if !seen.insert(slug.clone()) {
                return Err(CatalogError::DuplicateCategory(slug.clone()));
            }
        }
        Ok(Self {
            galleries,
            listings,
        })
    }

    /// Default categories with no images and the default listings.
    pub fn empty_defaults() -> Self {
        Self {
            galleries: Category::defaults()
                .into_iter()
                .map(|c| Gallery::new(c, Vec::new()))
                .collect(),
            listings: default_listings(),
        }
    }

    pub fn galleries(&self) -> &[Gallery] {
        &self.galleries
    }

    pub fn categories(&self) -> impl Iterator<Item = &Category> {
        self.galleries.iter().map(|g| g.category())
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Total number of images across all categories.
    pub fn image_count(&self) -> usize {
        self.galleries.iter().map(|g| g.len()).sum()
    }

    pub fn gallery(&self, slug: &str) -> CatalogResult<&Gallery> {
        self.galleries
            .iter()
            .find(|g| g.category().slug == slug)
            .ok_or_else(|| CatalogError::UnknownCategory(slug.to_string()))
    }

    fn gallery_mut(&mut self, slug: &str) -> CatalogResult<&mut Gallery> {
        self.galleries
            .iter_mut()
            .find(|g| g.category().slug == slug)
            .ok_or_else(|| CatalogError::UnknownCategory(slug.to_string()))
    }

    pub fn state(&self, slug: &str) -> CatalogResult<GalleryState> {
        Ok(self.gallery(slug)?.state())
    }

    /// Open the category's viewer at `index` (clamped). Empty categories stay closed.
    pub fn open(&mut self, slug: &str, index: usize) -> CatalogResult<GalleryState> {
        let gallery = self.gallery_mut(slug)?;
        if gallery.open(index) {
            tracing::debug!(category = slug, index = gallery.state().current_index, "Opened viewer");
        }
        Ok(gallery.state())
    }

    /// Reopen the category's viewer at its last viewed position.
    pub fn resume(&mut self, slug: &str) -> CatalogResult<GalleryState> {
        let gallery = self.gallery_mut(slug)?;
        gallery.resume();
        Ok(gallery.state())
    }

    pub fn close(&mut self, slug: &str) -> CatalogResult<GalleryState> {
        let gallery = self.gallery_mut(slug)?;
        gallery.close();
        Ok(gallery.state())
    }

    pub fn next(&mut self, slug: &str) -> CatalogResult<GalleryState> {
        let gallery = self.gallery_mut(slug)?;
        gallery.next();
        Ok(gallery.state())
    }

    pub fn previous(&mut self, slug: &str) -> CatalogResult<GalleryState> {
        let gallery = self.gallery_mut(slug)?;
        gallery.previous();
        Ok(gallery.state())
    }

    /// Image under the category's cursor.
    pub fn current(&self, slug: &str) -> CatalogResult<Option<&ImageRef>> {
        Ok(self.gallery(slug)?.current())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_country_catalog() -> Catalog {
        let france = Gallery::new(
            Category::france(),
            vec![ImageRef::new("A"), ImageRef::new("B"), ImageRef::new("C")],
        );
        let usa = Gallery::new(Category::usa(), vec![ImageRef::new("U")]);
        let japan = Gallery::new(Category::japan(), Vec::new());
        Catalog::new(vec![france, usa, japan], Vec::new()).unwrap()
    }

    #[test]
    fn test_france_scenario() {
        let mut catalog = three_country_catalog();

        let state = catalog.open("france", 2).unwrap();
        assert_eq!(state, GalleryState { is_open: true, current_index: 2 });

        assert_eq!(catalog.next("france").unwrap().current_index, 0);
        assert_eq!(catalog.current("france").unwrap().unwrap().src, "A");

        assert_eq!(catalog.previous("france").unwrap().current_index, 2);

        let state = catalog.close("france").unwrap();
        assert_eq!(state, GalleryState { is_open: false, current_index: 2 });
    }

    #[test]
    fn test_categories_are_independent() {
        let mut catalog = three_country_catalog();
        catalog.open("france", 1).unwrap();
        assert!(!catalog.state("usa").unwrap().is_open);
        assert_eq!(catalog.state("usa").unwrap().current_index, 0);
    }

    #[test]
    fn test_empty_category_never_opens() {
        let mut catalog = three_country_catalog();
        let state = catalog.open("japan", 0).unwrap();
        assert!(!state.is_open);
        assert!(!catalog.resume("japan").unwrap().is_open);
        assert_eq!(catalog.next("japan").unwrap(), GalleryState::default());
    }

    #[test]
    fn test_unknown_category() {
        let mut catalog = three_country_catalog();
        let err = catalog.open("belgium", 0).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownCategory(ref s) if s == "belgium"));
    }

    #[test]
    fn test_duplicate_slug_rejected() {
        let a = Gallery::new(Category::france(), Vec::new());
        let b = Gallery::new(Category::new("france", "France bis"), Vec::new());
        let err = Catalog::new(vec![a, b], Vec::new()).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory(_)));
    }

    #[test]
    fn test_empty_slug_rejected() {
        let a = Gallery::new(Category::new(" ", "Blank"), Vec::new());
        assert!(Catalog::new(vec![a], Vec::new()).is_err());
    }

    #[test]
    fn test_empty_defaults() {
        let catalog = Catalog::default();
        assert_eq!(catalog.categories().count(), 3);
        assert_eq!(catalog.image_count(), 0);
        assert_eq!(catalog.listings().len(), 3);
    }
}
