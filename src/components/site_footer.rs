//! Site footer.

use chrono::Datelike;
use dioxus::prelude::*;

#[component]
pub fn SiteFooter() -> Element {
    let year = chrono::Local::now().year();

    rsx! {
        footer { class: "site-footer",
            p { "© {year} Phone Card Catalog" }
            p { class: "site-footer__note", "Images belong to their respective collectors." }
        }
    }
}
