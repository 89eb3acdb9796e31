//! Header navigation: inline links on wide screens, a collapsible sheet on
//! narrow ones.

use leptos::prelude::*;

use super::{ICON_ELLIPSIS_VERTICAL, ICON_SHOPPING_CART, ICON_USER, Icon, ModeToggle};

/// Route of the cart page.
pub const CART_ROUTE: &str = "/cart";
/// Route of the sign-in page.
pub const SIGN_IN_ROUTE: &str = "/sign-in";

/// Theme toggle, cart link and sign-in link.
///
/// Rendered twice by [`Menu`], once per layout.
#[component]
fn MenuLinks() -> impl IntoView {
    view! {
        <ModeToggle />
        <a href=CART_ROUTE class="btn btn-ghost">
            <Icon path=ICON_SHOPPING_CART size="20" />
            "Cart"
        </a>
        <a href=SIGN_IN_ROUTE class="btn btn-primary">
            <Icon path=ICON_USER size="20" />
            "Sign In"
        </a>
    }
}

/// Right-hand side of the header.
#[component]
pub fn Menu() -> impl IntoView {
    view! {
        <div class="menu">
            <nav class="menu-desktop">
                <MenuLinks />
            </nav>
            <nav class="menu-mobile">
                <details class="sheet">
                    <summary class="sheet-trigger" aria-label="Open menu">
                        <Icon path=ICON_ELLIPSIS_VERTICAL />
                    </summary>
                    <div class="sheet-content">
                        <h2 class="sheet-title">"Menu"</h2>
                        <MenuLinks />
                    </div>
                </details>
            </nav>
        </div>
    }
}
