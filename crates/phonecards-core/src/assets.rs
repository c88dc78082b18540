//! Asset directory scanning.
//!
//! Produces the ordered image set for one category from a directory of
//! card images. Only direct children with an image extension are kept,
//! ordered by file name.

use std::path::Path;

use crate::error::CatalogResult;
use crate::types::{has_image_extension, ImageRef};

/// Scan `dir` for card images.
///
/// A missing directory is an empty category, not an error.
pub fn scan_dir(dir: &Path) -> CatalogResult<Vec<ImageRef>> {
    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "Asset directory not found, category will be empty");
        return Ok(Vec::new());
    }

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_image_extension(&path) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    tracing::debug!(dir = %dir.display(), count = paths.len(), "Scanned asset directory");

    Ok(paths
        .into_iter()
        .map(|p| ImageRef::new(p.to_string_lossy().into_owned()))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = TempDir::new().unwrap();
        for name in ["b.png", "a.JPG", "c.svg", "notes.txt", "d.jpeg"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        std::fs::create_dir(dir.path().join("nested.png")).unwrap();

        let images = scan_dir(dir.path()).unwrap();
        let names: Vec<_> = images.iter().map(|i| i.display_name()).collect();
        assert_eq!(names, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_missing_dir_is_empty() {
        let dir = TempDir::new().unwrap();
        let images = scan_dir(&dir.path().join("nope")).unwrap();
        assert!(images.is_empty());
    }
}
