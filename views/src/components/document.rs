//! Root document components - complete HTML pages.
//!
//! [`StorefrontDocument`] wraps content in the storefront layout (header,
//! main, footer). [`BareDocument`] is used for pages that live outside that
//! layout, such as the not-found page.

use leptos::prelude::*;

use super::{Footer, Header};
use crate::styles::{CSP, PAGE_SCRIPT, STOREFRONT_CSS};
use crate::types::SiteInfo;

/// `<head>` shared by every page.
#[component]
fn DocumentHead(site: SiteInfo, title: String) -> impl IntoView {
    view! {
        <head>
            <meta charset="UTF-8" />
            <meta name="viewport" content="width=device-width, initial-scale=1" />
            <meta http-equiv="Content-Security-Policy" content=CSP />
            <meta name="description" content=site.app_description />
            <title>{title}</title>
            <style>{STOREFRONT_CSS}</style>
        </head>
    }
}

/// A page inside the storefront layout.
#[component]
pub fn StorefrontDocument(site: SiteInfo, title: String, children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <DocumentHead site=site.clone() title=title />
            <body>
                <Header site=site.clone() />
                <main class="site-main wrapper">{children()}</main>
                <Footer site=site />
                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}

/// A page without header or footer.
#[component]
pub fn BareDocument(site: SiteInfo, title: String, children: Children) -> impl IntoView {
    view! {
        <html lang="en">
            <DocumentHead site=site title=title />
            <body>
                {children()}
                <script>{PAGE_SCRIPT}</script>
            </body>
        </html>
    }
}

/// `"{page} | {app}"`, or just the app name when `page` is empty.
pub fn page_title(site: &SiteInfo, page: &str) -> String {
    if page.is_empty() {
        site.app_name.clone()
    } else {
        format!("{} | {}", page, site.app_name)
    }
}
