//! Catalog manifest: the explicit list of image references per category.
//!
//! ## Format
//!
//! ```json
//! {
//!   "categories": [
//!     { "slug": "france", "label": "France", "images": ["france/a.jpg", {"src": "france/b.jpg", "title": "1995"}] },
//!     { "slug": "usa", "label": "USA", "dir": "usa" }
//!   ],
//!   "listings": [ { "id": 1, "image": "/images/card1.jpg", "title": "Carte France 1995", "price_eur": 15 } ]
//! }
//! ```
//!
//! Relative paths are resolved against the manifest's own directory. A
//! category may list images explicitly, point at a directory to scan, or
//! both (explicit images first).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::assets::scan_dir;
use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::gallery::Gallery;
use crate::marketplace::Listing;
use crate::types::{is_inline_src, Category, ImageRef};

/// One image entry: a bare path/URL or an object with a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImageEntry {
    Src(String),
    Detailed(ImageRef),
}

impl ImageEntry {
    fn into_ref(self) -> ImageRef {
        match self {
            ImageEntry::Src(src) => ImageRef::new(src),
            ImageEntry::Detailed(image) => image,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub slug: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ImageEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub categories: Vec<CategoryEntry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub listings: Vec<Listing>,
}

impl Manifest {
    pub fn from_json(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> CatalogResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let manifest = Self::from_json(&json)?;
        tracing::info!(
            path = %path.display(),
            categories = manifest.categories.len(),
            "Loaded catalog manifest"
        );
        Ok(manifest)
    }

    /// Manifest for the default categories, each scanning `dir/<slug>`.
    pub fn from_assets_dir(dir: &Path) -> Self {
        Self {
            categories: Category::defaults()
                .into_iter()
                .map(|c| CategoryEntry {
                    dir: Some(dir.join(&c.slug)),
                    slug: c.slug,
                    label: c.label,
                    images: Vec::new(),
                })
                .collect(),
            listings: Vec::new(),
        }
    }

    /// Manifest listing every image of a resolved catalog explicitly.
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            categories: catalog
                .galleries()
                .iter()
                .map(|g| CategoryEntry {
                    slug: g.category().slug.clone(),
                    label: g.category().label.clone(),
                    images: g
                        .images()
                        .iter()
                        .map(|img| match img.title {
                            Some(_) => ImageEntry::Detailed(img.clone()),
                            None => ImageEntry::Src(img.src.clone()),
                        })
                        .collect(),
                    dir: None,
                })
                .collect(),
            listings: catalog.listings().to_vec(),
        }
    }

    /// Resolve paths against `base` and scan directories into a catalog.
    pub fn resolve(self, base: &Path) -> CatalogResult<Catalog> {
        let mut galleries = Vec::with_capacity(self.categories.len());
        for entry in self.categories {
            if entry.label.trim().is_empty() {
                return Err(CatalogError::InvalidManifest(format!(
                    "category '{}' has an empty label",
                    entry.slug
                )));
            }

            let mut images: Vec<ImageRef> = entry
                .images
                .into_iter()
                .map(|e| resolve_ref(e.into_ref(), base))
                .collect();
            if let Some(dir) = entry.dir {
                images.extend(scan_dir(&base.join(dir))?);
            }

            tracing::debug!(category = %entry.slug, count = images.len(), "Resolved category");
            galleries.push(Gallery::new(Category::new(entry.slug, entry.label), images));
        }

        let listings = self
            .listings
            .into_iter()
            .map(|mut listing| {
                listing.image = resolve_src(listing.image, base);
                listing
            })
            .collect();
        Catalog::new(galleries, listings)
    }

    pub fn to_json_pretty(&self) -> CatalogResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn save(&self, path: &Path) -> CatalogResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_json_pretty()?)?;
        Ok(())
    }
}

/// Load a manifest file and resolve it relative to its own directory.
pub fn load_catalog(path: &Path) -> CatalogResult<Catalog> {
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Manifest::load(path)?.resolve(base)
}

fn resolve_ref(mut image: ImageRef, base: &Path) -> ImageRef {
    image.src = resolve_src(image.src, base);
    image
}

fn resolve_src(src: String, base: &Path) -> String {
    if is_inline_src(&src) || Path::new(&src).is_absolute() {
        return src;
    }
    base.join(&src).to_string_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_mixed_entries() {
        let json = r#"{
            "categories": [
                { "slug": "france", "label": "France",
                  "images": ["a.jpg", {"src": "b.jpg", "title": "Cinquante unités"}] }
            ]
        }"#;
        let manifest = Manifest::from_json(json).unwrap();
        let cat = &manifest.categories[0];
        assert_eq!(cat.images[0], ImageEntry::Src("a.jpg".to_string()));
        assert_eq!(
            cat.images[1],
            ImageEntry::Detailed(ImageRef::new("b.jpg").with_title("Cinquante unités"))
        );
        assert!(manifest.listings.is_empty());
    }

    #[test]
    fn test_resolve_relative_and_inline() {
        let json = r#"{
            "categories": [
                { "slug": "usa", "label": "USA",
                  "images": ["usa/a.png", "https://example.org/b.png", "/abs/c.png"] }
            ]
        }"#;
        let catalog = Manifest::from_json(json)
            .unwrap()
            .resolve(Path::new("/srv/cards"))
            .unwrap();
        let srcs: Vec<_> = catalog
            .gallery("usa")
            .unwrap()
            .images()
            .iter()
            .map(|i| i.src.clone())
            .collect();
        assert_eq!(
            srcs,
            vec![
                Path::new("/srv/cards").join("usa/a.png").to_string_lossy().into_owned(),
                "https://example.org/b.png".to_string(),
                "/abs/c.png".to_string(),
            ]
        );
    }

    #[test]
    fn test_explicit_images_come_before_scanned() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("japan")).unwrap();
        std::fs::write(dir.path().join("japan/ntt.png"), b"x").unwrap();

        let json = r#"{
            "categories": [
                { "slug": "japan", "label": "Japan", "images": ["first.jpg"], "dir": "japan" }
            ]
        }"#;
        let catalog = Manifest::from_json(json).unwrap().resolve(dir.path()).unwrap();
        let names: Vec<_> = catalog
            .gallery("japan")
            .unwrap()
            .images()
            .iter()
            .map(|i| i.display_name())
            .collect();
        assert_eq!(names, vec!["first", "ntt"]);
    }

    #[test]
    fn test_duplicate_slug_is_error() {
        let json = r#"{
            "categories": [
                { "slug": "usa", "label": "USA" },
                { "slug": "usa", "label": "Again" }
            ]
        }"#;
        let err = Manifest::from_json(json).unwrap().resolve(Path::new(".")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateCategory(_)));
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = Manifest::from_json("{ not json").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn test_from_assets_dir_uses_default_categories() {
        let manifest = Manifest::from_assets_dir(Path::new("assets"));
        let slugs: Vec<_> = manifest.categories.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["france", "usa", "japan"]);
        assert_eq!(
            manifest.categories[0].dir.as_deref(),
            Some(Path::new("assets").join("france").as_path())
        );
    }

    #[test]
    fn test_save_then_load_catalog() {
        let dir = TempDir::new().unwrap();
        let json = r#"{
            "categories": [ { "slug": "france", "label": "France", "images": ["a.jpg"] } ],
            "listings": [ { "id": 7, "image": "x.jpg", "title": "Rare", "price_eur": 90 } ]
        }"#;
        let path = dir.path().join("nested/manifest.json");
        Manifest::from_json(json).unwrap().save(&path).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.listings()[0].price_eur, 90);
        let src = &catalog.gallery("france").unwrap().images()[0].src;
        assert!(src.ends_with("a.jpg"));
        assert!(src.starts_with(&*dir.path().join("nested").to_string_lossy()));
    }

    #[test]
    fn test_listing_images_resolve_against_manifest_dir() {
        let dir = TempDir::new().unwrap();
        let json = r#"{
            "categories": [ { "slug": "france", "label": "France", "images": ["a.jpg"] } ],
            "listings": [
                { "id": 1, "image": "images/card1.jpg", "title": "Carte France 1995", "price_eur": 15 },
                { "id": 2, "image": "https://example.org/card2.jpg", "title": "Carte USA 2001", "price_eur": 20 },
                { "id": 3, "image": "/abs/card3.jpg", "title": "Carte Japon 1998", "price_eur": 25 }
            ]
        }"#;
        let path = dir.path().join("manifest.json");
        std::fs::write(&path, json).unwrap();

        let catalog = load_catalog(&path).unwrap();
        let images: Vec<_> = catalog.listings().iter().map(|l| l.image.as_str()).collect();
        assert_eq!(
            images,
            vec![
                &*dir.path().join("images/card1.jpg").to_string_lossy(),
                "https://example.org/card2.jpg",
                "/abs/card3.jpg",
            ]
        );
    }
}
