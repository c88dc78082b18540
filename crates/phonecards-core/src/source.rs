//! Where the catalog comes from at startup.
//!
//! Resolution order: an explicit manifest, then the manifest in the data
//! directory if one exists, then a scan of the assets directory with the
//! default categories and listings.

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::CatalogResult;
use crate::manifest::{load_catalog, Manifest};
use crate::marketplace::default_listings;

/// File name of the manifest kept in the data directory.
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Manifest(PathBuf),
    AssetsDir(PathBuf),
}

impl CatalogSource {
    pub fn select(manifest: Option<PathBuf>, data_dir: &Path, assets_dir: PathBuf) -> Self {
        if let Some(path) = manifest {
            return CatalogSource::Manifest(path);
        }
        let stored = data_dir.join(MANIFEST_FILE);
        if stored.is_file() {
            return CatalogSource::Manifest(stored);
        }
        CatalogSource::AssetsDir(assets_dir)
    }

    pub fn load(&self) -> CatalogResult<Catalog> {
        match self {
            CatalogSource::Manifest(path) => load_catalog(path),
            CatalogSource::AssetsDir(dir) => {
                let mut manifest = Manifest::from_assets_dir(dir);
                manifest.listings = default_listings();
                manifest.resolve(Path::new(""))
            }
        }
    }

    pub fn describe(&self) -> String {
        match self {
            CatalogSource::Manifest(path) => format!("manifest {}", path.display()),
            CatalogSource::AssetsDir(dir) => format!("assets directory {}", dir.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_manifest_wins() {
        let data = TempDir::new().unwrap();
        std::fs::write(data.path().join(MANIFEST_FILE), "{}").unwrap();
        let source = CatalogSource::select(
            Some(PathBuf::from("mine.json")),
            data.path(),
            PathBuf::from("assets"),
        );
        assert_eq!(source, CatalogSource::Manifest(PathBuf::from("mine.json")));
    }

    #[test]
    fn test_stored_manifest_before_assets() {
        let data = TempDir::new().unwrap();
        std::fs::write(data.path().join(MANIFEST_FILE), "{}").unwrap();
        let source = CatalogSource::select(None, data.path(), PathBuf::from("assets"));
        assert_eq!(source, CatalogSource::Manifest(data.path().join(MANIFEST_FILE)));
    }

    #[test]
    fn test_assets_dir_fallback_loads_defaults() {
        let data = TempDir::new().unwrap();
        let assets = TempDir::new().unwrap();
        std::fs::create_dir(assets.path().join("usa")).unwrap();
        std::fs::write(assets.path().join("usa/att.png"), b"x").unwrap();

        let source = CatalogSource::select(None, data.path(), assets.path().to_path_buf());
        let catalog = source.load().unwrap();

        assert_eq!(catalog.categories().count(), 3);
        assert_eq!(catalog.gallery("usa").unwrap().len(), 1);
        assert!(catalog.gallery("france").unwrap().is_empty());
        assert_eq!(catalog.listings().len(), 3);
    }
}
