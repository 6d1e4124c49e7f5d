//! # Domain Model: Products and Prices
//!
//! A [`Product`] is one card on the storefront: an image handle, a title and a price.
//! Products have no identifier of their own. Their identity is their position in the
//! ordered product sequence, so removing a card shifts every later card down by one.
//!
//! ## Image Handles
//!
//! `image` is opaque. It is either a path/URL (the built-in cards use `/images/cardN.png`)
//! or an inline `data:` URL produced by [`crate::image`]. Nothing here validates it.
//!
//! ## Price Text
//!
//! Prices travel through the UI as raw text. Two conversions live here:
//!
//! - [`price_text`]: the editable raw form (`10`, `12.5`), used to seed the price-edit buffer.
//! - [`format_price`]: the display form with exactly two fraction digits (`10.00`).
//!
//! Parsing goes through [`parse_price`], which accepts any finite decimal after trimming.
//!
//! ## Persisted Form
//!
//! The product sequence is stored as a JSON array of `{image, title, price}` objects.
//! Field names are part of the storage format and must not be renamed.

use serde::{Deserialize, Serialize};

/// Message shown on the card when no message has been saved.
pub const DEFAULT_MESSAGE: &str = "Share a cute thought for your day!";

/// Initial price text of the add-product form.
pub const DEFAULT_NEW_PRICE: &str = "10";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub image: String,
    pub title: String,
    pub price: f64,
}

impl Product {
    pub fn new(image: impl Into<String>, title: impl Into<String>, price: f64) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            price,
        }
    }

    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

/// The cards shown when nothing usable has been persisted yet.
pub fn default_products() -> Vec<Product> {
    vec![
        Product::new("/images/card1.png", "Bunny's Milk", 10.0),
        Product::new("/images/card2.png", "Pikachu Pouch", 10.0),
        Product::new("/images/card3.png", "Palestine Watermelon", 10.0),
    ]
}

/// Parses user-entered price text. Surrounding whitespace is ignored; anything that is
/// not a finite number yields `None`.
pub fn parse_price(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// Display form with two fraction digits. Exact halfway values round away from zero
/// (`0.125` → `0.13`), the way browsers render `toFixed(2)`.
pub fn format_price(price: f64) -> String {
    let magnitude = price.abs();
    // Only odd multiples of 1/8 sit exactly halfway between two cents.
    let halfway = (magnitude * 8.0).fract() == 0.0 && (magnitude * 4.0).fract() != 0.0;
    if halfway {
        let rounded = (magnitude * 100.0).ceil() / 100.0;
        format!("{:.2}", rounded.copysign(price))
    } else {
        format!("{:.2}", price)
    }
}

/// Raw editable text for a price: the shortest decimal rendering, without a forced
/// fraction (`10`, not `10.0`).
pub fn price_text(price: f64) -> String {
    price.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_products() {
        let products = default_products();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].title, "Bunny's Milk");
        assert_eq!(products[2].image, "/images/card3.png");
        assert!(products.iter().all(|p| p.price == 10.0));
    }

    #[test]
    fn test_parse_price_accepts_decimals() {
        assert_eq!(parse_price("12.5"), Some(12.5));
        assert_eq!(parse_price(" 7 "), Some(7.0));
        assert_eq!(parse_price("0"), Some(0.0));
        assert_eq!(parse_price(".5"), Some(0.5));
    }

    #[test]
    fn test_parse_price_rejects_garbage() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("   "), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_format_price_two_digits() {
        assert_eq!(format_price(10.0), "10.00");
        assert_eq!(format_price(12.5), "12.50");
        assert_eq!(Product::new("x", "y", 3.999).formatted_price(), "4.00");
    }

    #[test]
    fn test_format_price_halfway_rounds_up() {
        assert_eq!(format_price(0.125), "0.13");
        assert_eq!(format_price(2.625), "2.63");
        assert_eq!(format_price(0.375), "0.38");
        assert_eq!(format_price(-0.125), "-0.13");
        assert_eq!(format_price(2.5), "2.50");
        // 1.005 is stored just below the halfway point
        assert_eq!(format_price(1.005), "1.00");
    }

    #[test]
    fn test_price_text_is_shortest_form() {
        assert_eq!(price_text(10.0), "10");
        assert_eq!(price_text(12.5), "12.5");
    }

    #[test]
    fn test_persisted_field_names() {
        let json = serde_json::to_value(Product::new("/a.png", "Hat", 12.5)).unwrap();
        assert_eq!(json["image"], "/a.png");
        assert_eq!(json["title"], "Hat");
        assert_eq!(json["price"], 12.5);
    }

    #[test]
    fn test_decodes_integer_prices() {
        let parsed: Vec<Product> =
            serde_json::from_str(r#"[{"image":"i","title":"t","price":10}]"#).unwrap();
        assert_eq!(parsed[0].price, 10.0);
    }
}
