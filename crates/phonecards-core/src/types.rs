//! Core types: categories and image references.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// A phone-card origin grouping (France, USA, Japan, ...).
///
/// Categories are data: the slug identifies the category inside a catalog
/// and the label is what the UI shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub label: String,
}

impl Category {
    pub fn new(slug: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            label: label.into(),
        }
    }

    pub fn france() -> Self {
        Self::new("france", "France")
    }

    pub fn usa() -> Self {
        Self::new("usa", "USA")
    }

    pub fn japan() -> Self {
        Self::new("japan", "Japan")
    }

    /// The default category set, in display order.
    pub fn defaults() -> Vec<Category> {
        vec![Self::france(), Self::usa(), Self::japan()]
    }
}

/// Extensions accepted when scanning asset directories.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg"];

/// An opaque reference to one image (file path, http(s) URL or data URI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub src: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// True when the reference can be handed to the renderer as-is.
    pub fn is_inline(&self) -> bool {
        is_inline_src(&self.src)
    }

    /// Title if set, otherwise the file stem of `src`.
    pub fn display_name(&self) -> String {
        if let Some(title) = &self.title {
            return title.clone();
        }
        if self.src.starts_with("data:") {
            return "inline image".to_string();
        }
        Path::new(&self.src)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.src)
            .to_string()
    }

    /// MIME type guessed from the file extension.
    pub fn mime_type(&self) -> &'static str {
        let ext = Path::new(&self.src)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("svg") => "image/svg+xml",
            Some("webp") => "image/webp",
            _ => "application/octet-stream",
        }
    }
}

/// Whether `src` is a data URI or remote URL rather than a local path.
pub fn is_inline_src(src: &str) -> bool {
    src.starts_with("data:") || src.starts_with("http://") || src.starts_with("https://")
}

/// Whether a path carries one of the accepted image extensions.
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            let e = e.to_ascii_lowercase();
            IMAGE_EXTENSIONS.contains(&e.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let cats = Category::defaults();
        let slugs: Vec<_> = cats.iter().map(|c| c.slug.as_str()).collect();
        assert_eq!(slugs, vec!["france", "usa", "japan"]);
        assert_eq!(cats[1].label, "USA");
    }

    #[test]
    fn test_display_name_prefers_title() {
        let img = ImageRef::new("cards/france/telecarte_50.jpg");
        assert_eq!(img.display_name(), "telecarte_50");

        let titled = img.with_title("Télécarte 50 unités");
        assert_eq!(titled.display_name(), "Télécarte 50 unités");
    }

    #[test]
    fn test_inline_refs() {
        assert!(ImageRef::new("data:image/png;base64,AAAA").is_inline());
        assert!(ImageRef::new("https://example.org/a.png").is_inline());
        assert!(!ImageRef::new("/home/me/cards/a.png").is_inline());
    }

    #[test]
    fn test_mime_type() {
        assert_eq!(ImageRef::new("a.PNG").mime_type(), "image/png");
        assert_eq!(ImageRef::new("a.jpeg").mime_type(), "image/jpeg");
        assert_eq!(ImageRef::new("a.svg").mime_type(), "image/svg+xml");
        assert_eq!(ImageRef::new("a").mime_type(), "application/octet-stream");
    }

    #[test]
    fn test_image_extension_filter() {
        assert!(has_image_extension(Path::new("x/card.JPG")));
        assert!(has_image_extension(Path::new("card.svg")));
        assert!(!has_image_extension(Path::new("notes.txt")));
        assert!(!has_image_extension(Path::new("README")));
    }
}
