//! Collection page - one gallery table per country.

use dioxus::prelude::*;

use crate::components::{GalleryTable, NavHeader, NavLocation, SiteFooter};
use crate::context::use_catalog;

#[component]
pub fn Collection() -> Element {
    let catalog = use_catalog();

    let categories: Vec<(String, String, usize)> = catalog
        .read()
        .galleries()
        .iter()
        .map(|g| (g.category().slug.clone(), g.category().label.clone(), g.len()))
        .collect();
    let total = catalog.read().image_count();

    rsx! {
        NavHeader { current: NavLocation::Collection }

        main { class: "page collection",
            p { class: "page-intro",
                "{total} cards across {categories.len()} countries. Click a row to open the viewer."
            }

            div { class: "category-summary",
                for (slug, label, count) in categories.iter() {
                    span { key: "{slug}", class: "category-chip", "{label} · {count}" }
                }
            }

            for (slug, _, _) in categories.iter() {
                GalleryTable { key: "{slug}", slug: slug.clone() }
            }
        }

        SiteFooter {}
    }
}
