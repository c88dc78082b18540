//! Marketplace listings: cards offered for sale.

use serde::{Deserialize, Serialize};

/// One card offered on the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: u32,
    pub image: String,
    pub title: String,
    /// Asking price in whole euros
    pub price_eur: u32,
}

impl Listing {
    pub fn price_label(&self) -> String {
        format!("{} €", self.price_eur)
    }
}

/// Listings shown when no manifest provides any.
///
/// Their images are inline SVG placeholders so the marketplace renders
/// without any files on disk.
pub fn default_listings() -> Vec<Listing> {
    [
        (1, "Carte France 1995", 15, "#1f4e9c"),
        (2, "Carte USA 2001", 20, "#b22234"),
        (3, "Carte Japon 1998", 25, "#bc002d"),
    ]
    .into_iter()
    .map(|(id, title, price_eur, color)| Listing {
        id,
        image: placeholder_image(title, color),
        title: title.to_string(),
        price_eur,
    })
    .collect()
}

/// Card-shaped SVG data URI with `label` centred on a `color` background.
pub fn placeholder_image(label: &str, color: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='300' height='190' viewBox='0 0 300 190'>\
         <rect width='300' height='190' rx='14' fill='{color}'/>\
         <rect x='24' y='70' width='44' height='34' rx='5' fill='#d4af37'/>\
         <text x='150' y='160' font-family='sans-serif' font-size='20' fill='#ffffff' \
         text-anchor='middle'>{}</text></svg>",
        escape_xml(label)
    );
    format!("data:image/svg+xml;utf8,{}", encode_uri_component(&svg))
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('\'', "&apos;")
}

fn encode_uri_component(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for byte in text.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'\'' | b'/' | b'=' | b':' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_listings_has_three() {
        let listings = default_listings();
        assert_eq!(listings.len(), 3);
        assert_eq!(listings[0].price_label(), "15 €");
        assert!(listings.iter().all(|l| !l.title.is_empty()));
    }

    #[test]
    fn default_listing_images_are_inline() {
        for listing in default_listings() {
            assert!(crate::types::is_inline_src(&listing.image), "{}", listing.image);
            assert!(listing.image.starts_with("data:image/svg+xml;utf8,%3Csvg"));
            assert!(!listing.image.contains('#'));
            assert!(!listing.image.contains(' '));
        }
    }

    #[test]
    fn placeholder_escapes_label() {
        let uri = placeholder_image("A&B <1>", "#000000");
        assert!(uri.contains("A%26amp%3BB%20%26lt%3B1%26gt%3B"));
        assert!(uri.contains("%23000000"));
    }
}
