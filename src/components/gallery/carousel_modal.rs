//! Carousel Modal Component
//!
//! Lightbox over one category: the card under the cursor with previous,
//! next and close controls. Arrow keys navigate, Escape closes.

use dioxus::prelude::*;
use phonecards_core::Catalog;

use crate::components::CardImage;
use crate::context::use_catalog;

/// What a control or key press asks the viewer to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerAction {
    Next,
    Previous,
    Close,
}

impl ViewerAction {
    /// Arrow keys navigate, Escape closes, anything else is ignored.
    pub fn from_key(key: &Key) -> Option<Self> {
        match key {
            Key::ArrowRight => Some(Self::Next),
            Key::ArrowLeft => Some(Self::Previous),
            Key::Escape => Some(Self::Close),
            _ => None,
        }
    }

    /// Apply to the category's viewer, logging a failed lookup.
    pub fn apply(self, catalog: &mut Catalog, slug: &str) {
        let result = match self {
            Self::Next => catalog.next(slug),
            Self::Previous => catalog.previous(slug),
            Self::Close => catalog.close(slug),
        };
        if let Err(e) = result {
            tracing::error!("{}", e);
        }
    }
}

/// Modal image viewer for one category
///
/// Renders nothing while the category's viewer is closed.
#[component]
pub fn CarouselModal(
    /// Category slug
    slug: String,
) -> Element {
    let mut catalog = use_catalog();

    let (label, current, state, count) = {
        let guard = catalog.read();
        let Ok(gallery) = guard.gallery(&slug) else {
            return VNode::empty();
        };
        (
            gallery.category().label.clone(),
            gallery.current().cloned(),
            gallery.state(),
            gallery.len(),
        )
    };

    let Some(image) = current else {
        return VNode::empty();
    };
    if !state.is_open {
        return VNode::empty();
    }

    let name = image.display_name();
    let position = state.current_index + 1;

    let close_slug = slug.clone();
    let close = move |_| ViewerAction::Close.apply(&mut catalog.write(), &close_slug);
    let prev_slug = slug.clone();
    let previous = move |e: MouseEvent| {
        e.stop_propagation();
        ViewerAction::Previous.apply(&mut catalog.write(), &prev_slug);
    };
    let next_slug = slug.clone();
    let next = move |e: MouseEvent| {
        e.stop_propagation();
        ViewerAction::Next.apply(&mut catalog.write(), &next_slug);
    };
    let key_slug = slug.clone();
    let on_keydown = move |evt: KeyboardEvent| {
        if let Some(action) = ViewerAction::from_key(&evt.key()) {
            action.apply(&mut catalog.write(), &key_slug);
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            tabindex: "0",
            // Focus on every mount so the keys work each time the viewer opens
            onmounted: move |e: MountedEvent| async move {
                if let Err(err) = e.set_focus(true).await {
                    tracing::warn!("Failed to focus carousel: {:?}", err);
                }
            },
            onclick: close,
            onkeydown: on_keydown,

            div {
                class: "carousel-modal",
                onclick: move |e| e.stop_propagation(),

                button {
                    class: "modal-close-btn",
                    title: "Close (Esc)",
                    onclick: move |_| ViewerAction::Close.apply(&mut catalog.write(), &slug),
                    "×"
                }

                h2 { class: "modal-title", "{label}" }

                div { class: "carousel",
                    button {
                        class: "carousel__nav carousel__nav--prev",
                        title: "Previous (←)",
                        onclick: previous,
                        "‹"
                    }

                    // Keyed by index so the frame remounts and the fade-in replays on every move
                    for index in std::iter::once(state.current_index) {
                        div { key: "{index}", class: "carousel__frame fade-in",
                            CardImage {
                                image: image.clone(),
                                class: "carousel__img".to_string(),
                            }
                        }
                    }

                    button {
                        class: "carousel__nav carousel__nav--next",
                        title: "Next (→)",
                        onclick: next,
                        "›"
                    }
                }

                div { class: "carousel__caption",
                    span { class: "carousel__name", "{name}" }
                    span { class: "carousel__position", "{position} / {count}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use phonecards_core::{Category, Gallery, ImageRef};

    fn france(n: usize) -> Catalog {
        let images = (0..n).map(|i| ImageRef::new(format!("fr_{i}.jpg"))).collect();
        Catalog::new(vec![Gallery::new(Category::france(), images)], Vec::new()).unwrap()
    }

    #[test]
    fn keys_map_to_actions() {
        assert_eq!(ViewerAction::from_key(&Key::ArrowRight), Some(ViewerAction::Next));
        assert_eq!(ViewerAction::from_key(&Key::ArrowLeft), Some(ViewerAction::Previous));
        assert_eq!(ViewerAction::from_key(&Key::Escape), Some(ViewerAction::Close));
        assert_eq!(ViewerAction::from_key(&Key::Enter), None);
        assert_eq!(ViewerAction::from_key(&Key::Character("a".to_string())), None);
    }

    #[test]
    fn actions_drive_the_viewer() {
        let mut catalog = france(3);
        catalog.open("france", 0).unwrap();

        ViewerAction::Previous.apply(&mut catalog, "france");
        assert_eq!(catalog.state("france").unwrap().current_index, 2);
        ViewerAction::Next.apply(&mut catalog, "france");
        assert_eq!(catalog.state("france").unwrap().current_index, 0);
        ViewerAction::Close.apply(&mut catalog, "france");
        assert!(!catalog.state("france").unwrap().is_open);

        // Unknown category is logged, not a panic
        ViewerAction::Next.apply(&mut catalog, "atlantis");
    }
}
