//! Navigation Header Component
//!
//! Site title, tagline and links between the collection and the marketplace.

use dioxus::prelude::*;

use crate::app::Route;

/// Navigation location within the application
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum NavLocation {
    Collection,
    Marketplace,
}

impl NavLocation {
    pub const ALL: [NavLocation; 2] = [NavLocation::Collection, NavLocation::Marketplace];

    /// Get the display name for this location
    pub fn display_name(&self) -> &'static str {
        match self {
            NavLocation::Collection => "Collection",
            NavLocation::Marketplace => "Marketplace",
        }
    }

    /// Get the route for this location
    pub fn route(&self) -> Route {
        match self {
            NavLocation::Collection => Route::Collection {},
            NavLocation::Marketplace => Route::Marketplace {},
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct NavHeaderProps {
    /// Current location in the app
    pub current: NavLocation,
}

/// Navigation Header component
#[component]
pub fn NavHeader(props: NavHeaderProps) -> Element {
    rsx! {
        header { class: "nav-header",
            div { class: "nav-header-inner",
                div { class: "nav-title",
                    h1 { class: "app-title", "Phone Card Catalog" }
                    p { class: "tagline", "Télécartes from France, the USA and Japan" }
                }

                nav { class: "nav-links",
                    for location in NavLocation::ALL {
                        Link {
                            to: location.route(),
                            class: if location == props.current { "nav-link active" } else { "nav-link" },
                            "{location.display_name()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_map_to_distinct_routes() {
        assert!(NavLocation::Collection.route() != NavLocation::Marketplace.route());
        assert_eq!(NavLocation::Marketplace.display_name(), "Marketplace");
    }
}
