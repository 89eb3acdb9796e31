//! Titled product grid with an empty-state fallback.

use leptos::prelude::*;

use super::ProductCard;
use crate::types::{Product, visible_products};

/// Message rendered when the catalog is empty.
pub const NO_PRODUCTS: &str = "No products found";

/// Grid of [`ProductCard`]s, optionally capped at `limit` items.
///
/// The emptiness check looks at `data` itself, not the truncated prefix, so
/// `limit=Some(0)` over a non-empty catalog renders an empty grid rather than
/// the fallback message.
#[component]
pub fn ProductList(
    data: Vec<Product>,
    /// Heading rendered above the grid
    title: Option<String>,
    /// Render at most this many products
    limit: Option<usize>,
) -> impl IntoView {
    let body = if data.is_empty() {
        view! { <p class="empty-state">{NO_PRODUCTS}</p> }.into_any()
    } else {
        let cards = visible_products(&data, limit)
            .iter()
            .cloned()
            .map(|product| view! { <ProductCard product=product /> })
            .collect::<Vec<_>>();
        view! { <div class="product-grid">{cards}</div> }.into_any()
    };

    view! {
        <section class="product-list">
            <h2 class="list-title">{title}</h2>
            {body}
        </section>
    }
}
