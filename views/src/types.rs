//! Data types consumed by the storefront views.
//!
//! These types are read-only display data. They're designed to be:
//!
//! - **Serializable** - catalogs load straight from JSON via serde
//! - **Clone-friendly** - components take owned props without borrowing issues
//! - **Default-able** - build partial fixtures with `..Default::default()`
//!
//! # Example
//!
//! ```rust
//! use storefront_views::types::Product;
//!
//! let product = Product {
//!     slug: "polo-sporting-stretch-shirt".into(),
//!     name: "Polo Sporting Stretch Shirt".into(),
//!     brand: "Polo".into(),
//!     images: vec!["/images/sample-products/p1-1.jpg".into()],
//!     price: 59.99,
//!     rating: 4.5,
//!     stock: 5,
//!     ..Default::default()
//! };
//!
//! assert!(product.is_available());
//! assert_eq!(product.href(), "/product/polo-sporting-stretch-shirt");
//! ```

use serde::{Deserialize, Serialize};

/// A catalog item rendered by [`crate::components::ProductCard`].
///
/// Nothing here is validated: a negative price or an empty image list is
/// rendered as-is.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier, used for routing and as the list key
    pub slug: String,
    /// Display title
    pub name: String,
    /// Brand label shown above the name
    pub brand: String,
    /// Description text
    #[serde(default)]
    pub description: String,
    /// Image URLs; the first one is the card thumbnail
    #[serde(default)]
    pub images: Vec<String>,
    /// Price in US dollars
    pub price: f64,
    /// Rating score, displayed verbatim
    pub rating: f64,
    /// Units in stock
    pub stock: i64,
}

impl Product {
    /// Whether the product can be bought right now (`stock > 0`).
    pub fn is_available(&self) -> bool {
        self.stock > 0
    }

    /// Detail route for this product.
    pub fn href(&self) -> String {
        format!("/product/{}", self.slug)
    }

    /// Thumbnail URL, or an empty string when the product has no images.
    pub fn thumbnail(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }
}

/// Process-wide constants every page shell needs.
///
/// Kept out of the components themselves so rendering stays a pure function
/// of its inputs (the footer year in particular).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    /// Application name shown in the header, footer and `<title>`
    pub app_name: String,
    /// Meta description
    pub app_description: String,
    /// Path of the logo image
    pub logo_src: String,
    /// Year printed in the footer copyright line
    pub year: i32,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.into(),
            app_description: DEFAULT_APP_DESCRIPTION.into(),
            logo_src: DEFAULT_LOGO_SRC.into(),
            year: 2025,
        }
    }
}

/// Default application name.
pub const DEFAULT_APP_NAME: &str = "Prostore";
/// Default meta description.
pub const DEFAULT_APP_DESCRIPTION: &str = "A modern ecommerce store";
/// Default logo path, served by the host.
pub const DEFAULT_LOGO_SRC: &str = "/images/logo.svg";
/// Heading used for the home page product list.
pub const DEFAULT_HOME_TITLE: &str = "New Arrivals";

/// Options for the home page product list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomeOptions {
    /// Heading rendered above the grid
    pub title: Option<String>,
    /// Render at most this many products
    pub limit: Option<usize>,
}

impl Default for HomeOptions {
    fn default() -> Self {
        Self {
            title: Some(DEFAULT_HOME_TITLE.into()),
            limit: None,
        }
    }
}

/// The prefix of `products` a list view renders.
///
/// `None` renders everything; `Some(k)` renders the first `k` items, or all
/// of them when there are fewer than `k`.
pub fn visible_products(products: &[Product], limit: Option<usize>) -> &[Product] {
    match limit {
        Some(limit) => &products[..limit.min(products.len())],
        None => products,
    }
}
