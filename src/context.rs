//! Catalog context provider.
//!
//! The catalog (image sets plus per-category viewer state) is created once
//! by the `App` component and shared with every page through a signal.
//!
//! ## Usage
//!
//! ```ignore
//! let mut catalog = use_catalog();
//!
//! // Read
//! let state = catalog.read().state("france");
//!
//! // Mutate
//! let _ = catalog.write().next("france");
//! ```

use dioxus::prelude::*;
use phonecards_core::{Catalog, CatalogSource};

/// Get the catalog source resolved from command line args.
pub fn get_catalog_source() -> CatalogSource {
    crate::get_catalog_source()
}

/// Hook to access the catalog from context.
pub fn use_catalog() -> Signal<Catalog> {
    use_context::<Signal<Catalog>>()
}
