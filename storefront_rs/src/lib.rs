//! # storefront
//!
//! Static site builder for the storefront views.
//!
//! Loads the product catalog and an optional `storefront.toml`, then renders
//! the pages from [`storefront_views`] to HTML files:
//!
//! - `index.html` - the catalog as a "New Arrivals" product list
//! - `404.html` - the not-found page
//!
//! ```bash
//! storefront build --out dist
//! storefront build --catalog products.json --limit 8 --title "Featured"
//! storefront render not-found > 404.html
//! storefront catalog
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod site;

pub use catalog::{CatalogError, load_catalog};
pub use config::StorefrontConfig;
pub use site::{Overrides, Page, Site, SiteError};
