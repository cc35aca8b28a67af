//! Data model for scraped products.

use serde::Serialize;

/// One product listing scraped from a category page.
///
/// Field order is the CSV column order; [`Product::FIELD_NAMES`] and the
/// serde-derived serialization both follow it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    /// Untruncated product title (from the title attribute, not display text)
    pub title: String,
    /// Trimmed description text
    pub description: String,
    /// Price with the currency symbol stripped
    pub price: f64,
    /// Number of filled star icons on the card (0-5 in practice)
    pub rating: u32,
    /// Leading integer of the review-count text
    pub num_of_reviews: u32,
}

impl Product {
    /// CSV header names, in declaration order.
    pub const FIELD_NAMES: [&'static str; 5] =
        ["title", "description", "price", "rating", "num_of_reviews"];
}
