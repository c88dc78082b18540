//! Marketplace components.

mod listing_card;

pub use listing_card::ListingCard;
