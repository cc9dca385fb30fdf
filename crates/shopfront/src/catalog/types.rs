use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A product grouping shown on the home panel.
///
/// Replaced wholesale on each category fetch; never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Opaque identifier assigned by the upstream store.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Image file reference, resolved against the asset base URL.
    pub image: String,
}

/// A sellable item returned by the product-listing collaborator.
///
/// Fetched fresh on every search trigger; never cached across triggers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier assigned by the upstream store.
    pub id: String,
    /// Display name, matched case-insensitively by the text filter.
    pub name: String,
    /// Unit price. Always numeric after deserialization, even when the
    /// upstream store persisted it as a numeric string.
    pub price: f64,
}

/// Composes the public URL for a category image.
///
/// Category images live under `uploads/categories/` on the asset host;
/// the image reference is a single path segment and is percent-encoded
/// as such.
pub fn category_image_url(asset_base_url: &str, image: &str) -> String {
    format!(
        "{}/uploads/categories/{}",
        asset_base_url.trim_end_matches('/'),
        urlencoding::encode(image)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_url_joins_base_and_reference() {
        let url = category_image_url("http://localhost:8000", "shoes.jpg");
        assert_eq!(url, "http://localhost:8000/uploads/categories/shoes.jpg");
    }

    #[test]
    fn image_url_tolerates_trailing_slash_on_base() {
        let url = category_image_url("http://localhost:8000/", "shoes.jpg");
        assert_eq!(url, "http://localhost:8000/uploads/categories/shoes.jpg");
    }

    #[test]
    fn image_url_encodes_reference_as_one_segment() {
        let url = category_image_url("http://assets.example", "summer sale.png");
        assert_eq!(
            url,
            "http://assets.example/uploads/categories/summer%20sale.png"
        );
        let url = category_image_url("http://assets.example", "a/b.png");
        assert_eq!(url, "http://assets.example/uploads/categories/a%2Fb.png");
    }

    #[test]
    fn product_serializes_camel_case() {
        let product = Product {
            id: "p-1".to_string(),
            name: "Shoe".to_string(),
            price: 50.0,
        };
        let json = serde_json::to_value(&product).expect("serialize");
        assert_eq!(json["id"], "p-1");
        assert_eq!(json["name"], "Shoe");
        assert_eq!(json["price"], 50.0);
    }
}
