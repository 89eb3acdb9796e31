//! Card for a single catalog product.

use leptos::prelude::*;

use crate::format::{format_rating, format_usd};
use crate::types::Product;

/// Label shown instead of the price when nothing is in stock.
pub const OUT_OF_STOCK: &str = "Out of Stock";

/// One product: thumbnail, brand, name, description, rating and price.
///
/// The thumbnail and the name both link to `/product/{slug}`. When
/// `stock <= 0` the price is replaced by [`OUT_OF_STOCK`]. Nothing is
/// validated, so a product without images renders a broken image.
#[component]
pub fn ProductCard(product: Product) -> impl IntoView {
    let href = product.href();
    let thumbnail = product.thumbnail().to_string();
    let rating = format_rating(product.rating);

    let availability = if product.is_available() {
        view! { <p class="price">{format_usd(product.price)}</p> }.into_any()
    } else {
        view! { <p class="price text-destructive">{OUT_OF_STOCK}</p> }.into_any()
    };

    view! {
        <article class="product-card" data-key=product.slug>
            <div class="card-header">
                <a href=href.clone()>
                    <img src=thumbnail alt=product.name.clone() width="300" height="300" />
                </a>
            </div>
            <div class="card-content">
                <div class="brand-label">{product.brand}</div>
                <a href=href>
                    <h2 class="product-name">{product.name}</h2>
                </a>
                <p class="description">{product.description}</p>
                <div class="flex-between card-footer">
                    <p class="rating">{rating}</p>
                    {availability}
                </div>
            </div>
        </article>
    }
}
