pub mod http;
pub mod types;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::CoreResult;

pub use http::HttpCatalog;
pub use types::{category_image_url, Category, Product};

/// Category-listing collaborator.
///
/// One call per widget lifetime, at initialization. Implementations own
/// their wire format; the core only sees the decoded collection.
#[async_trait]
pub trait CategoryApi: Send + Sync {
    async fn fetch_categories(&self) -> CoreResult<Vec<Category>>;
}

/// Product-listing collaborator.
///
/// Called on every search trigger; always returns the full, unfiltered
/// collection. Filtering happens in the core.
#[async_trait]
pub trait ProductApi: Send + Sync {
    async fn fetch_all_products(&self) -> CoreResult<Vec<Product>>;
}

pub type SharedCategoryApi = Arc<dyn CategoryApi>;
pub type SharedProductApi = Arc<dyn ProductApi>;
