//! Page bodies: the home product list and the not-found message.

use leptos::prelude::*;

use super::ProductList;
use crate::types::{HomeOptions, Product, SiteInfo};

/// Home page content: the catalog as a "New Arrivals" style list.
#[component]
pub fn HomePage(products: Vec<Product>, options: HomeOptions) -> impl IntoView {
    view! {
        <ProductList data=products title=options.title limit=options.limit />
    }
}

/// Not-found page content.
///
/// The button carries `data-href="/"`; the page script turns a click into a
/// full-page navigation back to the root.
#[component]
pub fn NotFoundPage(site: SiteInfo) -> impl IntoView {
    let logo_alt = format!("{} logo", site.app_name);

    view! {
        <div class="not-found">
            <img src=site.logo_src width="48" height="48" alt=logo_alt />
            <div class="not-found-panel">
                <h1 class="not-found-title">"Not Found"</h1>
                <p class="text-destructive">"Could not find requested resource"</p>
                <button type="button" class="btn btn-outline" data-href="/">
                    "Back to home"
                </button>
            </div>
        </div>
    }
}
