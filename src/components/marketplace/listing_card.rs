//! Listing Card Component
//!
//! One marketplace entry: card image, title, price and a buy button.

use dioxus::prelude::*;
use phonecards_core::{ImageRef, Listing};

use crate::components::CardImage;

#[component]
pub fn ListingCard(
    listing: Listing,
    /// Buy handler (receives listing ID)
    on_buy: EventHandler<u32>,
) -> Element {
    let image = ImageRef::new(listing.image.clone()).with_title(listing.title.clone());
    let id = listing.id;

    rsx! {
        div { class: "listing-card",
            CardImage { image, class: "listing-card__img".to_string() }
            div { class: "listing-card__content",
                h3 { class: "listing-card__title", "{listing.title}" }
                p { class: "listing-card__price", "{listing.price_label()}" }
                button {
                    class: "btn-primary listing-card__buy",
                    onclick: move |_| on_buy.call(id),
                    "Buy"
                }
            }
        }
    }
}
