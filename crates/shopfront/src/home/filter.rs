//! Product filter criteria and the pure filtering pipeline.
//!
//! Filtering is stateless over its product input: it returns a fresh
//! list and keeps survivors in source order. The same criteria applied
//! twice produce the same result.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::catalog::Product;

/// Lower bound of the price slider.
pub const PRICE_RANGE_MIN: f64 = 0.0;
/// Upper bound of the price slider.
pub const PRICE_RANGE_MAX: f64 = 1000.0;
/// Slider step size.
pub const PRICE_RANGE_STEP: f64 = 10.0;

/// User-adjustable filter criteria for the product grid.
///
/// A `price_range` of zero means "no price filter"; any positive value
/// caps the grid at that price. `search_text` is matched as a
/// case-insensitive substring of the product name, and turns the text
/// filter off when it trims to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    pub price_range: f64,
    pub search_text: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_range: PRICE_RANGE_MIN,
            search_text: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Applies the price filter, then the name filter.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let by_price = filter_by_price(products, self.price_range);
        filter_by_name(&by_price, &self.search_text)
    }
}

/// Keeps products priced at or below `max_price`. A non-positive
/// `max_price` disables the filter and returns the input unchanged.
pub fn filter_by_price(products: &[Product], max_price: f64) -> Vec<Product> {
    if max_price <= 0.0 {
        return products.to_vec();
    }
    products
        .iter()
        .filter(|product| product.price <= max_price)
        .cloned()
        .collect()
}

/// Keeps products whose name contains `query` case-insensitively.
/// A query that trims to empty disables the filter; any other query
/// is matched as typed, whitespace included.
pub fn filter_by_name(products: &[Product], query: &str) -> Vec<Product> {
    if query.trim().is_empty() {
        return products.to_vec();
    }
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| product.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
