//! # storefront-views
//!
//! Leptos SSR view components for a static e-commerce storefront.
//!
//! Every component renders straight to an HTML string with
//! [Leptos](https://leptos.dev/) server-side rendering. There is no reactive
//! runtime and no hydration. The pages are pure functions of the catalog and
//! the [`SiteInfo`](types::SiteInfo) constants.
//!
//! ## Quick Start
//!
//! ```rust
//! use storefront_views::{render_home, types::{HomeOptions, Product, SiteInfo}};
//!
//! let products = vec![Product {
//!     slug: "polo-sporting-stretch-shirt".into(),
//!     name: "Polo Sporting Stretch Shirt".into(),
//!     brand: "Polo".into(),
//!     images: vec!["/images/sample-products/p1-1.jpg".into()],
//!     price: 59.99,
//!     rating: 4.5,
//!     stock: 5,
//!     ..Default::default()
//! }];
//!
//! let html = render_home(&SiteInfo::default(), &products, &HomeOptions::default());
//! assert!(html.contains("$59.99"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Product, SiteInfo and list options
//! - [`format`] - USD price and rating formatting
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS and the inline page script
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <ProductList data=products title=None limit=None /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod format;
pub mod styles;
pub mod types;

use components::{BareDocument, HomePage, NotFoundPage, StorefrontDocument, page_title};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{HomeOptions, Product, SiteInfo};

/// Render the home page: the catalog as a product list inside the
/// storefront layout.
///
/// Returns a complete HTML document, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use storefront_views::{render_home, types::{HomeOptions, SiteInfo}};
///
/// let html = render_home(&SiteInfo::default(), &[], &HomeOptions::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// assert!(html.contains("No products found"));
/// ```
pub fn render_home(site: &SiteInfo, products: &[Product], options: &HomeOptions) -> String {
    // children are boxed as 'static, so hand them owned data
    let products = products.to_vec();
    let options = options.clone();
    let doc = view! {
        <StorefrontDocument site=site.clone() title=page_title(site, "")>
            <HomePage products=products options=options />
        </StorefrontDocument>
    };

    with_doctype(doc.to_html())
}

/// Render the not-found page. It has no header or footer.
///
/// Returns a complete HTML document, including `<!DOCTYPE html>`.
pub fn render_not_found(site: &SiteInfo) -> String {
    let page_site = site.clone();
    let doc = view! {
        <BareDocument site=site.clone() title=page_title(site, "Not Found")>
            <NotFoundPage site=page_site />
        </BareDocument>
    };

    with_doctype(doc.to_html())
}

// Leptos doesn't emit a DOCTYPE, so we add it
fn with_doctype(html: String) -> String {
    format!("<!DOCTYPE html>\n{}", html)
}
