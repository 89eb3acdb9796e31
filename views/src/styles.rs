//! CSS and the inline page script for the storefront.
//!
//! # Customization
//!
//! ```rust
//! use storefront_views::styles::STOREFRONT_CSS;
//!
//! let my_css = ".product-card { border-radius: 0; }";
//! let combined = format!("{}\n{}", STOREFRONT_CSS, my_css);
//! ```

/// Complete stylesheet, inlined into every page's `<head>`.
///
/// Light theme by default; the `dark` class on `<html>` (or the OS
/// preference when no class is set) switches the palette.
pub const STOREFRONT_CSS: &str = r#"
:root {
    --background: #ffffff;
    --foreground: #0a0a0a;
    --muted: #737373;
    --border: #e5e5e5;
    --card: #ffffff;
    --primary: #171717;
    --primary-foreground: #fafafa;
    --accent: #f5f5f5;
    --destructive: #dc2626;
    --radius: 8px;
    --wrapper-max: 1400px;
    --font-sans: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif;
}

html.dark {
    --background: #0a0a0a;
    --foreground: #fafafa;
    --muted: #a3a3a3;
    --border: #262626;
    --card: #0a0a0a;
    --primary: #fafafa;
    --primary-foreground: #171717;
    --accent: #262626;
    --destructive: #ef4444;
}

@media (prefers-color-scheme: dark) {
    html:not(.light) {
        --background: #0a0a0a;
        --foreground: #fafafa;
        --muted: #a3a3a3;
        --border: #262626;
        --card: #0a0a0a;
        --primary: #fafafa;
        --primary-foreground: #171717;
        --accent: #262626;
        --destructive: #ef4444;
    }
}

* {
    box-sizing: border-box;
}

body {
    font-family: var(--font-sans);
    background: var(--background);
    color: var(--foreground);
    line-height: 1.5;
    margin: 0;
    min-height: 100vh;
    display: flex;
    flex-direction: column;
}

a {
    color: inherit;
    text-decoration: none;
}

img {
    max-width: 100%;
    height: auto;
}

.sr-only {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
}

/* Layout */
.wrapper {
    max-width: var(--wrapper-max);
    margin: 0 auto;
    padding: 20px;
    width: 100%;
}

.flex-between {
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.site-main {
    flex: 1;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 8px 16px;
    border-radius: var(--radius);
    border: 1px solid transparent;
    font: inherit;
    font-size: 14px;
    font-weight: 500;
    cursor: pointer;
    background: transparent;
    color: inherit;
}

.btn-ghost:hover {
    background: var(--accent);
}

.btn-primary {
    background: var(--primary);
    color: var(--primary-foreground);
}

.btn-outline {
    border-color: var(--border);
    margin-top: 16px;
    margin-left: 8px;
}

.icon {
    flex-shrink: 0;
}

/* Header */
.site-header {
    border-bottom: 1px solid var(--border);
    width: 100%;
}

.brand {
    display: flex;
    align-items: center;
}

.brand-name {
    margin-left: 12px;
    font-weight: 700;
    font-size: 24px;
    display: none;
}

.menu {
    display: flex;
    justify-content: flex-end;
    gap: 12px;
}

.menu-desktop {
    display: none;
    gap: 4px;
    width: 100%;
    max-width: 320px;
}

.menu-mobile {
    display: block;
}

/* Sheet (mobile menu) */
.sheet summary {
    list-style: none;
    cursor: pointer;
}

.sheet summary::-webkit-details-marker {
    display: none;
}

.sheet-content {
    position: fixed;
    top: 0;
    right: 0;
    height: 100vh;
    width: 75%;
    max-width: 320px;
    padding: 24px;
    background: var(--background);
    border-left: 1px solid var(--border);
    display: flex;
    flex-direction: column;
    align-items: flex-start;
    gap: 8px;
    z-index: 50;
}

.sheet-title {
    font-size: 18px;
    margin: 0 0 8px;
}

/* Theme toggle */
.theme-icon-dark {
    display: none;
}

html.dark .theme-icon-light {
    display: none;
}

html.dark .theme-icon-dark {
    display: inline;
}

/* Product list */
.product-list {
    margin: 40px 0;
}

.list-title {
    margin: 0 0 16px;
    font-weight: 700;
}

.product-grid {
    display: grid;
    gap: 16px;
    grid-template-columns: repeat(1, minmax(0, 1fr));
}

/* Product card */
.product-card {
    width: 100%;
    max-width: 384px;
    border: 1px solid var(--border);
    border-radius: var(--radius);
    background: var(--card);
    overflow: hidden;
}

.card-header {
    display: flex;
    justify-content: center;
}

.card-content {
    display: grid;
    gap: 16px;
    padding: 16px;
}

.brand-label {
    font-size: 12px;
}

.product-name {
    font-size: 14px;
    font-weight: 500;
    margin: 0;
}

.description {
    font-size: 14px;
    margin: 0;
}

.card-footer {
    gap: 16px;
}

.rating,
.price {
    font-weight: 700;
    margin: 0;
}

.text-destructive {
    color: var(--destructive);
}

/* Footer */
.site-footer {
    border-top: 1px solid var(--border);
}

.footer-copyright {
    display: flex;
    justify-content: center;
    padding: 20px;
    font-size: 14px;
    letter-spacing: 0.1em;
}

/* Not found */
.not-found {
    display: flex;
    flex-direction: column;
    justify-content: center;
    align-items: center;
    min-height: 100vh;
}

.not-found-panel {
    padding: 24px;
    border-radius: var(--radius);
    width: 33%;
    min-width: 280px;
    text-align: center;
    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1);
}

.not-found-title {
    margin: 0 0 16px;
    font-size: 30px;
    font-weight: 700;
}

.empty-state {
    color: var(--muted);
}

@media (min-width: 640px) {
    .product-grid {
        grid-template-columns: repeat(2, minmax(0, 1fr));
    }
}

@media (min-width: 768px) {
    .menu-desktop {
        display: flex;
    }

    .menu-mobile {
        display: none;
    }

    .product-grid {
        grid-template-columns: repeat(3, minmax(0, 1fr));
    }
}

@media (min-width: 1024px) {
    .brand-name {
        display: block;
    }

    .product-grid {
        grid-template-columns: repeat(4, minmax(0, 1fr));
    }
}
"#;

/// Theme toggle and `data-href` navigation.
///
/// Written without angle brackets or ampersands so it can be inlined as-is.
pub const PAGE_SCRIPT: &str = r#"
(function () {
  var root = document.documentElement;
  var stored = localStorage.getItem('storefront-theme');
  if (stored === 'dark' || stored === 'light') {
    root.classList.add(stored);
  }

  function prefersDark() {
    if (root.classList.contains('dark')) { return true; }
    if (root.classList.contains('light')) { return false; }
    return window.matchMedia('(prefers-color-scheme: dark)').matches;
  }

  document.querySelectorAll('[data-role="theme-toggle"]').forEach(function (btn) {
    btn.addEventListener('click', function () {
      var next = prefersDark() ? 'light' : 'dark';
      root.classList.remove('dark', 'light');
      root.classList.add(next);
      localStorage.setItem('storefront-theme', next);
    });
  });

  document.querySelectorAll('button[data-href]').forEach(function (btn) {
    btn.addEventListener('click', function () {
      window.location.href = btn.dataset.href;
    });
  });
})();
"#;

/// Content Security Policy for the rendered pages.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: https:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none';";
