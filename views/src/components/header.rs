//! Site header with logo, application name and menu.

use leptos::prelude::*;

use super::Menu;
use crate::types::SiteInfo;

/// Top bar shown on every storefront page.
#[component]
pub fn Header(site: SiteInfo) -> impl IntoView {
    let logo_alt = format!("{} logo", site.app_name);

    view! {
        <header class="site-header">
            <div class="wrapper flex-between">
                <a href="/" class="brand">
                    <img src=site.logo_src width="48" height="48" alt=logo_alt />
                    <span class="brand-name">{site.app_name}</span>
                </a>
                <Menu />
            </div>
        </header>
    }
}
