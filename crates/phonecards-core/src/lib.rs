//! Phone Card Catalog Core Library
//!
//! Collectible phone cards grouped by country, browsed through per-category
//! galleries with a lightbox carousel.
//!
//! ## Overview
//!
//! - [`Catalog`]: ordered mapping from [`Category`] to [`Gallery`], plus the
//!   marketplace [`Listing`]s.
//! - [`Gallery`]: one category's image set and its [`GalleryState`]
//!   (open flag + cursor) with wraparound navigation.
//! - [`Manifest`]: JSON description of the catalog, resolved once at startup.
//! - [`extract`]: splits a photo of several cards into one image per card.
//!
//! ## Quick Start
//!
//! ```ignore
//! use phonecards_core::load_catalog;
//!
//! let mut catalog = load_catalog("cards/manifest.json".as_ref())?;
//! catalog.open("france", 2)?;
//! catalog.next("france")?;
//! println!("{:?}", catalog.current("france")?);
//! ```

pub mod assets;
pub mod catalog;
pub mod error;
pub mod extract;
pub mod gallery;
pub mod manifest;
pub mod marketplace;
pub mod source;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use gallery::{Gallery, GalleryState};
pub use manifest::{load_catalog, CategoryEntry, ImageEntry, Manifest};
pub use marketplace::{default_listings, Listing};
pub use source::CatalogSource;
pub use types::*;
