//! Upstream store API integration.
//!
//! This module implements the category- and product-listing collaborators
//! against the store's REST API. The wire format (response envelopes and
//! record field names) is owned here and never leaks into the core.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::config::ShopfrontConfig;
use crate::error::{CoreError, CoreResult};

use super::types::{Category, Product};
use super::{CategoryApi, ProductApi};

const CATEGORIES_PATH: &str = "api/category/all-category";
const PRODUCTS_PATH: &str = "api/product/all-product";

/// HTTP client for the upstream store catalog.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    api_base_url: String,
}

impl HttpCatalog {
    /// Creates a client with default transport settings (no timeout).
    pub fn new(api_base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base_url: api_base_url.into(),
        }
    }

    /// Creates a client from configuration, honoring the optional
    /// request timeout.
    pub fn from_config(config: &ShopfrontConfig) -> CoreResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().map_err(|error| {
            CoreError::Internal(format!("failed to build HTTP client: {error}"))
        })?;
        Ok(Self {
            client,
            api_base_url: config.api_base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl CategoryApi for HttpCatalog {
    async fn fetch_categories(&self) -> CoreResult<Vec<Category>> {
        let response = self
            .client
            .get(self.endpoint(CATEGORIES_PATH))
            .send()
            .await
            .map_err(|error| CoreError::CategoryFetch(error.to_string()))?
            .error_for_status()
            .map_err(|error| CoreError::CategoryFetch(error.to_string()))?;
        let envelope: CategoriesEnvelope = response
            .json()
            .await
            .map_err(|error| CoreError::CategoryFetch(error.to_string()))?;
        Ok(envelope
            .categories
            .into_iter()
            .map(Category::from)
            .collect())
    }
}

#[async_trait]
impl ProductApi for HttpCatalog {
    async fn fetch_all_products(&self) -> CoreResult<Vec<Product>> {
        let response = self
            .client
            .get(self.endpoint(PRODUCTS_PATH))
            .send()
            .await
            .map_err(|error| CoreError::ProductFetch(error.to_string()))?
            .error_for_status()
            .map_err(|error| CoreError::ProductFetch(error.to_string()))?;
        let envelope: ProductsEnvelope = response
            .json()
            .await
            .map_err(|error| CoreError::ProductFetch(error.to_string()))?;
        Ok(envelope.products.into_iter().map(Product::from).collect())
    }
}

#[derive(Debug, Deserialize)]
struct CategoriesEnvelope {
    #[serde(rename = "Categories", default)]
    categories: Vec<CategoryRecord>,
}

#[derive(Debug, Deserialize)]
struct CategoryRecord {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "cName")]
    name: String,
    #[serde(rename = "cImage", default)]
    image: String,
}

impl From<CategoryRecord> for Category {
    fn from(record: CategoryRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            image: record.image,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ProductsEnvelope {
    #[serde(rename = "Products", default)]
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    #[serde(rename = "_id")]
    id: String,
    #[serde(rename = "pName")]
    name: String,
    #[serde(rename = "pPrice", deserialize_with = "wire_price")]
    price: f64,
}

impl From<ProductRecord> for Product {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            price: record.price,
        }
    }
}

/// The upstream store persists prices as either numbers or numeric
/// strings. Both decode to a number; anything else is a wire error.
fn wire_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WirePrice {
        Number(f64),
        Text(String),
    }

    match WirePrice::deserialize(deserializer)? {
        WirePrice::Number(value) => Ok(value),
        WirePrice::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("price is not numeric: {text:?}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_envelope_decodes_store_records() {
        let body = r#"{
            "Categories": [
                { "_id": "c-1", "cName": "Shoes", "cImage": "shoes.jpg" },
                { "_id": "c-2", "cName": "Shirts", "cImage": "shirts.jpg" }
            ]
        }"#;
        let envelope: CategoriesEnvelope = serde_json::from_str(body).expect("decode");
        let categories: Vec<Category> =
            envelope.categories.into_iter().map(Category::from).collect();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].id, "c-1");
        assert_eq!(categories[0].name, "Shoes");
        assert_eq!(categories[1].image, "shirts.jpg");
    }

    #[test]
    fn missing_envelope_key_decodes_as_empty() {
        let envelope: CategoriesEnvelope = serde_json::from_str("{}").expect("decode");
        assert!(envelope.categories.is_empty());
        let envelope: ProductsEnvelope = serde_json::from_str("{}").expect("decode");
        assert!(envelope.products.is_empty());
    }

    #[test]
    fn product_price_accepts_number_and_numeric_string() {
        let body = r#"{
            "Products": [
                { "_id": "p-1", "pName": "Shoe", "pPrice": 50 },
                { "_id": "p-2", "pName": "Shirt", "pPrice": "20.5" },
                { "_id": "p-3", "pName": "Shorts", "pPrice": " 80 " }
            ]
        }"#;
        let envelope: ProductsEnvelope = serde_json::from_str(body).expect("decode");
        let prices: Vec<f64> = envelope.products.iter().map(|p| p.price).collect();
        assert_eq!(prices, vec![50.0, 20.5, 80.0]);
    }

    #[test]
    fn product_price_rejects_non_numeric_string() {
        let body = r#"{
            "Products": [
                { "_id": "p-1", "pName": "Shoe", "pPrice": "call us" }
            ]
        }"#;
        let result = serde_json::from_str::<ProductsEnvelope>(body);
        assert!(result.is_err());
    }

    #[test]
    fn endpoint_joins_base_without_double_slash() {
        let catalog = HttpCatalog::new("http://localhost:8000/");
        assert_eq!(
            catalog.endpoint(CATEGORIES_PATH),
            "http://localhost:8000/api/category/all-category"
        );
        let catalog = HttpCatalog::new("http://localhost:8000");
        assert_eq!(
            catalog.endpoint(PRODUCTS_PATH),
            "http://localhost:8000/api/product/all-product"
        );
    }
}
