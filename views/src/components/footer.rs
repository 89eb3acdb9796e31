//! Site footer with the copyright line.

use leptos::prelude::*;

use crate::types::SiteInfo;

/// Copyright bar at the bottom of every storefront page.
#[component]
pub fn Footer(site: SiteInfo) -> impl IntoView {
    let copyright = format!("© {} {}. All Rights reserved.", site.year, site.app_name);

    view! {
        <footer class="site-footer">
            <div class="footer-copyright">{copyright}</div>
        </footer>
    }
}
