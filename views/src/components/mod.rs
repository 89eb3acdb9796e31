//! Leptos UI components for the storefront pages.
//!
//! Each component is a `#[component]` function and a pure function of its
//! props. There is no reactive state and no hydration.
//!
//! # Component Hierarchy
//!
//! ```text
//! StorefrontDocument
//! ├── Header
//! │   └── Menu
//! │       ├── MenuLinks (desktop nav)
//! │       │   └── ModeToggle
//! │       └── Sheet (mobile nav)
//! │           └── MenuLinks
//! ├── HomePage
//! │   └── ProductList
//! │       └── ProductCard (per product)
//! └── Footer
//!
//! BareDocument
//! └── NotFoundPage
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_home`] and
//! [`crate::render_not_found`], but can be used directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use storefront_views::components::ProductList;
//!
//! view! {
//!     <ProductList data=products title=Some("Featured".to_string()) limit=Some(4) />
//! }
//! ```

mod document;
mod footer;
mod header;
mod icons;
mod menu;
mod mode_toggle;
mod pages;
mod product_card;
mod product_list;

pub use document::{BareDocument, StorefrontDocument, page_title};
pub use footer::Footer;
pub use header::Header;
pub use icons::*;
pub use menu::{CART_ROUTE, Menu, SIGN_IN_ROUTE};
pub use mode_toggle::ModeToggle;
pub use pages::{HomePage, NotFoundPage};
pub use product_card::{OUT_OF_STOCK, ProductCard};
pub use product_list::{NO_PRODUCTS, ProductList};
