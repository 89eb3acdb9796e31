//! Configuration file support for the storefront builder.
//!
//! Loads optional `storefront.toml` from the project root.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use storefront_views::types::{
    DEFAULT_APP_DESCRIPTION, DEFAULT_APP_NAME, DEFAULT_HOME_TITLE, DEFAULT_LOGO_SRC,
};
use tracing::warn;

/// Name of the config file looked up in the project root.
pub const CONFIG_FILE: &str = "storefront.toml";

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Application name shown in the header, footer and page titles
    pub app_name: String,
    /// Meta description
    pub app_description: String,
    /// Logo image path, served by the host
    pub logo_src: String,
    pub home: HomeConfig,
    pub build: BuildConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.into(),
            app_description: DEFAULT_APP_DESCRIPTION.into(),
            logo_src: DEFAULT_LOGO_SRC.into(),
            home: HomeConfig::default(),
            build: BuildConfig::default(),
        }
    }
}

/// Home page product list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HomeConfig {
    /// Heading above the product grid
    pub title: String,
    /// Render at most this many products
    pub limit: Option<usize>,
}

impl Default for HomeConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_HOME_TITLE.into(),
            limit: None,
        }
    }
}

/// Output settings for `storefront build`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Directory the pages are written to
    pub out_dir: PathBuf,
    /// Catalog JSON; the bundled sample data when unset
    pub catalog: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("dist"),
            catalog: None,
        }
    }
}

impl StorefrontConfig {
    /// Load config from `storefront.toml` in the given root directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        Self::load_from_path(&root.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    ///
    /// Relative `build.catalog` and `build.out_dir` paths are resolved
    /// against the config file's directory.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let config: Self = match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    return Self::default();
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match path.parent() {
            Some(base) => config.relative_to(base),
            None => config,
        }
    }

    fn relative_to(mut self, base: &Path) -> Self {
        if self.build.out_dir.is_relative() {
            self.build.out_dir = base.join(&self.build.out_dir);
        }
        if let Some(catalog) = self.build.catalog.as_mut() {
            if catalog.is_relative() {
                *catalog = base.join(&*catalog);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.app_name, "Prostore");
        assert_eq!(config.home.title, "New Arrivals");
        assert_eq!(config.home.limit, None);
        assert_eq!(config.build.out_dir, PathBuf::from("dist"));
        assert!(config.build.catalog.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = StorefrontConfig::load(temp.path());
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
app_name = "Corner Shop"

[home]
title = "Featured"
limit = 4

[build]
out_dir = "public"
catalog = "data/catalog.json"
"#
        )
        .expect("write config");

        let config = StorefrontConfig::load(temp.path());
        assert_eq!(config.app_name, "Corner Shop");
        // untouched keys keep their defaults
        assert_eq!(config.app_description, DEFAULT_APP_DESCRIPTION);
        assert_eq!(config.home.title, "Featured");
        assert_eq!(config.home.limit, Some(4));
        assert_eq!(config.build.out_dir, temp.path().join("public"));
        assert_eq!(
            config.build.catalog,
            Some(temp.path().join("data/catalog.json"))
        );
    }

    #[test]
    fn test_absolute_paths_are_kept() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("elsewhere");
        let config_path = temp.path().join(CONFIG_FILE);
        std::fs::write(
            &config_path,
            format!("[build]\nout_dir = {:?}\n", out.display().to_string()),
        )
        .expect("write config");

        let config = StorefrontConfig::load_from_path(&config_path);
        assert_eq!(config.build.out_dir, out);
    }

    #[test]
    fn test_invalid_config_falls_back_to_default() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "app_name = [").expect("write config");

        let config = StorefrontConfig::load(temp.path());
        assert_eq!(config, StorefrontConfig::default());
    }
}
