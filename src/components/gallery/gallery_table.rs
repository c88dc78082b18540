//! Gallery Table Component
//!
//! One table per category: a row per card, clicking a row opens the
//! carousel at that card.

use dioxus::prelude::*;

use super::CarouselModal;
use crate::components::CardImage;
use crate::context::use_catalog;

/// Thumbnail table for one category, with its carousel modal
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     GalleryTable { slug: "france".to_string() }
/// }
/// ```
#[component]
pub fn GalleryTable(
    /// Category slug
    slug: String,
) -> Element {
    let mut catalog = use_catalog();

    let snapshot = catalog
        .read()
        .gallery(&slug)
        .map(|g| (g.category().label.clone(), g.images().to_vec(), g.state()));
    let (label, images, state) = match snapshot {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("{}", e);
            return VNode::empty();
        }
    };
    let count = images.len();
    let has_images = count > 0;
    let slideshow_title = if state.current_index > 0 {
        format!("Resume at card {}", state.current_index + 1)
    } else {
        "Open viewer".to_string()
    };

    let resume_slug = slug.clone();
    let resume = move |_| {
        if let Err(e) = catalog.write().resume(&resume_slug) {
            tracing::error!("{}", e);
        }
    };

    rsx! {
        section { class: "gallery-section", id: "{slug}",
            div { class: "gallery-section__header",
                h2 { class: "gallery-section__title", "{label}" }
                span { class: "gallery-section__count", "{count} cards" }
                button {
                    class: "btn-secondary",
                    disabled: !has_images,
                    title: "{slideshow_title}",
                    onclick: resume,
                    "Slideshow"
                }
            }

            table { class: "gallery-table",
                thead {
                    tr {
                        th { "#" }
                        th { "Card" }
                        th { "Name" }
                        th { "" }
                    }
                }
                tbody {
                    if !has_images {
                        tr { class: "gallery-table__empty",
                            td { colspan: "4", "No cards in this category yet" }
                        }
                    }
                    for (index, image) in images.into_iter().enumerate() {
                        {
                            let row_slug = slug.clone();
                            let button_slug = slug.clone();
                            let name = image.display_name();
                            let number = index + 1;
                            rsx! {
                                tr {
                                    key: "{index}",
                                    class: "gallery-table__row",
                                    onclick: move |_| {
                                        if let Err(e) = catalog.write().open(&row_slug, index) {
                                            tracing::error!("{}", e);
                                        }
                                    },

                                    td { class: "gallery-table__index", "{number}" }
                                    td {
                                        CardImage {
                                            image: image.clone(),
                                            class: "gallery-table__thumb".to_string(),
                                        }
                                    }
                                    td { class: "gallery-table__name", "{name}" }
                                    td {
                                        button {
                                            class: "btn-primary",
                                            onclick: move |e: MouseEvent| {
                                                e.stop_propagation();
                                                if let Err(e) = catalog.write().open(&button_slug, index) {
                                                    tracing::error!("{}", e);
                                                }
                                            },
                                            "View"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            if state.is_open {
                CarouselModal { slug: slug.clone() }
            }
        }
    }
}
