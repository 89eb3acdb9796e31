//! Command-line interface for the storefront builder.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use storefront_views::format::format_usd;
use tracing::info;

use crate::config::{CONFIG_FILE, StorefrontConfig};
use crate::site::{Overrides, Page, Site};

#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Render the storefront pages to static HTML")]
#[command(version)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write index.html and 404.html to the output directory
    Build {
        #[command(flatten)]
        source: SourceArgs,
        /// Output directory (default: build.out_dir from config, else ./dist)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Print one page to stdout
    Render {
        /// Page to render
        #[arg(value_enum)]
        page: PageArg,
        #[command(flatten)]
        source: SourceArgs,
    },
    /// List the catalog: slug, price and stock
    Catalog {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where the site data comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Config file (default: ./storefront.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Catalog JSON (default: build.catalog from config, else bundled sample data)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
    /// Heading of the home page product list
    #[arg(long)]
    pub title: Option<String>,
    /// Render at most this many products on the home page
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageArg {
    Home,
    NotFound,
}

impl From<PageArg> for Page {
    fn from(arg: PageArg) -> Self {
        match arg {
            PageArg::Home => Page::Home,
            PageArg::NotFound => Page::NotFound,
        }
    }
}

impl SourceArgs {
    fn config(&self) -> StorefrontConfig {
        match &self.config {
            Some(path) => StorefrontConfig::load_from_path(path),
            None => StorefrontConfig::load_from_path(&PathBuf::from(CONFIG_FILE)),
        }
    }

    fn overrides(&self) -> Overrides {
        Overrides {
            catalog: self.catalog.clone(),
            title: self.title.clone(),
            limit: self.limit,
        }
    }

    fn load(&self) -> Result<(StorefrontConfig, Site)> {
        let config = self.config();
        let site = Site::load(&config, &self.overrides()).context("Failed to load site data")?;
        Ok((config, site))
    }
}

/// Execute a parsed command, writing user-facing output to `out`.
pub fn run(command: Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Build { source, out: dir } => {
            let (config, site) = source.load()?;
            let dir = dir.unwrap_or(config.build.out_dir);
            let written = site
                .build(&dir)
                .with_context(|| format!("Failed to build site into {}", dir.display()))?;
            for path in &written {
                writeln!(out, "{}", path.display())?;
            }
            info!("Built {} pages", written.len());
        }
        Command::Render { page, source } => {
            let (_, site) = source.load()?;
            writeln!(out, "{}", site.render(page.into()))?;
        }
        Command::Catalog { source } => {
            let (_, site) = source.load()?;
            for product in &site.products {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    product.slug,
                    format_usd(product.price),
                    product.stock
                )?;
            }
        }
    }
    Ok(())
}
