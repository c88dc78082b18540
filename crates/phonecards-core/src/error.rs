//! Error types for the phone card catalog

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// No category with this slug exists in the catalog
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Two categories share the same slug
    #[error("Duplicate category: {0}")]
    DuplicateCategory(String),

    /// Manifest content is structurally valid JSON but semantically wrong
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// Extraction settings that cannot be applied
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type alias using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
