//! UI Components for the Phone Card Catalog.

mod card_image;
pub mod gallery;
pub mod marketplace;
mod nav_header;
mod site_footer;

pub use card_image::CardImage;
pub use gallery::{CarouselModal, GalleryTable};
pub use marketplace::ListingCard;
pub use nav_header::{NavHeader, NavLocation};
pub use site_footer::SiteFooter;
