use dioxus::prelude::*;
use phonecards_core::Catalog;

use crate::context::get_catalog_source;
use crate::pages::{Collection, Marketplace};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Collection: one table and carousel per country
/// - `/marketplace` - Cards offered for sale
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Collection {},
    #[route("/marketplace")]
    Marketplace {},
}

/// Load the catalog once at mount, falling back to empty default categories.
fn load_catalog() -> Catalog {
    let source = get_catalog_source();
    match source.load() {
        Ok(catalog) => {
            tracing::info!(
                categories = catalog.galleries().len(),
                images = catalog.image_count(),
                "Catalog loaded from {}",
                source.describe()
            );
            catalog
        }
        Err(e) => {
            tracing::error!("Failed to load catalog from {}: {}", source.describe(), e);
            Catalog::default()
        }
    }
}

/// Root application component.
///
/// Provides global styles, the catalog context, and routing.
#[component]
pub fn App() -> Element {
    let catalog: Signal<Catalog> = use_signal(load_catalog);

    // Provide catalog context to all child components
    use_context_provider(|| catalog);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
