//! Page components for the Phone Card Catalog.

mod collection;
mod marketplace;

pub use collection::Collection;
pub use marketplace::Marketplace;
