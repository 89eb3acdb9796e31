//! Static site generation: render the storefront pages and write them out.

use std::path::{Path, PathBuf};

use chrono::Datelike;
use storefront_views::types::{HomeOptions, Product, SiteInfo};
use storefront_views::{render_home, render_not_found};
use thiserror::Error;
use tracing::{debug, info};

use crate::catalog::{CatalogError, load_catalog};
use crate::config::StorefrontConfig;

/// File name of the rendered home page.
pub const HOME_FILE: &str = "index.html";
/// File name of the rendered not-found page.
pub const NOT_FOUND_FILE: &str = "404.html";

/// Errors raised while building the site.
#[derive(Debug, Error)]
pub enum SiteError {
    /// The output directory could not be created
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A page could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog could not be loaded
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// A page the builder knows how to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// Product list of the whole catalog
    Home,
    /// Static "Not Found" message
    NotFound,
}

impl Page {
    /// Every page, in build order.
    pub const ALL: [Page; 2] = [Page::Home, Page::NotFound];

    /// Output file name of this page.
    pub fn file_name(self) -> &'static str {
        match self {
            Page::Home => HOME_FILE,
            Page::NotFound => NOT_FOUND_FILE,
        }
    }
}

/// Everything a render needs, with config file and CLI flags already merged.
#[derive(Clone, Debug, PartialEq)]
pub struct Site {
    pub info: SiteInfo,
    pub home: HomeOptions,
    pub products: Vec<Product>,
}

/// Command-line values that take precedence over the config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub catalog: Option<PathBuf>,
    pub title: Option<String>,
    pub limit: Option<usize>,
}

impl Site {
    /// Merge config and overrides, then load the catalog.
    pub fn load(config: &StorefrontConfig, overrides: &Overrides) -> Result<Self, SiteError> {
        let catalog = overrides.catalog.as_ref().or(config.build.catalog.as_ref());
        let products = load_catalog(catalog.map(PathBuf::as_path))?;

        let home = HomeOptions {
            title: Some(
                overrides
                    .title
                    .clone()
                    .unwrap_or_else(|| config.home.title.clone()),
            ),
            limit: overrides.limit.or(config.home.limit),
        };

        Ok(Self {
            info: Self::info_from_config(config),
            home,
            products,
        })
    }

    /// Site constants from config, stamped with the current year.
    pub fn info_from_config(config: &StorefrontConfig) -> SiteInfo {
        SiteInfo {
            app_name: config.app_name.clone(),
            app_description: config.app_description.clone(),
            logo_src: config.logo_src.clone(),
            year: chrono::Local::now().year(),
        }
    }

    /// Render one page to a complete HTML document.
    pub fn render(&self, page: Page) -> String {
        match page {
            Page::Home => render_home(&self.info, &self.products, &self.home),
            Page::NotFound => render_not_found(&self.info),
        }
    }

    /// Render every page into `out_dir`, creating it if needed.
    ///
    /// Returns the written paths in build order.
    pub fn build(&self, out_dir: &Path) -> Result<Vec<PathBuf>, SiteError> {
        std::fs::create_dir_all(out_dir).map_err(|source| SiteError::CreateDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        info!(
            out_dir = %out_dir.display(),
            products = self.products.len(),
            "building storefront"
        );

        let mut written = Vec::with_capacity(Page::ALL.len());
        for page in Page::ALL {
            let path = out_dir.join(page.file_name());
            let html = self.render(page);
            std::fs::write(&path, &html).map_err(|source| SiteError::Write {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = html.len(), "wrote page");
            written.push(path);
        }
        Ok(written)
    }
}
