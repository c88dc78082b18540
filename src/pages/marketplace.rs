//! Marketplace page - cards offered for sale.

use dioxus::prelude::*;

use crate::components::{ListingCard, NavHeader, NavLocation, SiteFooter};
use crate::context::use_catalog;

#[component]
pub fn Marketplace() -> Element {
    let catalog = use_catalog();
    let listings = catalog.read().listings().to_vec();

    let on_buy = move |id: u32| {
        // No checkout yet: record the intent only
        tracing::info!(listing = id, "Buy requested");
    };

    rsx! {
        NavHeader { current: NavLocation::Marketplace }

        main { class: "page marketplace",
            h2 { class: "section-header", "Phone card marketplace" }

            if listings.is_empty() {
                p { class: "empty-state", "No cards for sale right now." }
            }

            div { class: "listing-grid fade-in",
                for listing in listings {
                    ListingCard { key: "{listing.id}", listing: listing.clone(), on_buy }
                }
            }
        }

        SiteFooter {}
    }
}
