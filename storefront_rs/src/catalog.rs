//! Product catalog loading.
//!
//! A catalog is JSON, either `{ "products": [...] }` or a bare array of
//! products. Records are taken as-is: order is preserved and nothing beyond
//! the JSON shape is checked.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use storefront_views::types::Product;
use thiserror::Error;
use tracing::debug;

/// Sample catalog shipped with the binary, used when no catalog is given.
const SAMPLE_DATA: &str = include_str!("../data/sample-data.json");

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The catalog is not valid product JSON
    #[error("failed to parse catalog {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Wrapped { products: Vec<Product> },
    Bare(Vec<Product>),
}

impl From<CatalogFile> for Vec<Product> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Wrapped { products } => products,
            CatalogFile::Bare(products) => products,
        }
    }
}

/// Load the catalog at `path`, or the bundled sample data when `path` is `None`.
pub fn load_catalog(path: Option<&Path>) -> Result<Vec<Product>, CatalogError> {
    match path {
        Some(path) => load_catalog_file(path),
        None => Ok(sample_catalog()),
    }
}

/// Read and parse a catalog file.
pub fn load_catalog_file(path: &Path) -> Result<Vec<Product>, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let products = parse_catalog(&content, path)?;
    debug!(path = %path.display(), count = products.len(), "loaded catalog");
    Ok(products)
}

/// Parse catalog JSON. `origin` only labels errors.
pub fn parse_catalog(json: &str, origin: &Path) -> Result<Vec<Product>, CatalogError> {
    serde_json::from_str::<CatalogFile>(json)
        .map(Vec::from)
        .map_err(|source| CatalogError::Parse {
            path: origin.to_path_buf(),
            source,
        })
}

/// The bundled sample catalog.
pub fn sample_catalog() -> Vec<Product> {
    // bundled data is checked by the tests below
    parse_catalog(SAMPLE_DATA, Path::new("<sample-data>")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    const TWO_PRODUCTS: &str = r#"[
        {"slug": "b", "name": "B", "brand": "X", "price": 2.5, "rating": 4, "stock": 1},
        {"slug": "a", "name": "A", "brand": "Y", "price": 1, "rating": 3.5, "stock": 0}
    ]"#;

    #[test]
    fn sample_catalog_has_five_products() {
        let products = parse_catalog(SAMPLE_DATA, Path::new("sample")).expect("sample parses");
        assert_eq!(products.len(), 5);
        assert_eq!(products, sample_catalog());
        assert!(products.iter().any(|p| !p.is_available()));
        assert!(products.iter().all(|p| !p.images.is_empty()));
    }

    #[test]
    fn no_path_uses_sample_catalog() {
        let products = load_catalog(None).expect("sample catalog");
        assert_eq!(products[0].slug, "polo-sporting-stretch-shirt");
    }

    #[test]
    fn parses_bare_array_preserving_order() {
        let products = parse_catalog(TWO_PRODUCTS, Path::new("inline")).expect("valid");
        let slugs: Vec<&str> = products.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a"]);
        assert!(products[1].description.is_empty());
    }

    #[test]
    fn parses_wrapped_products() {
        let json = format!(r#"{{"products": {}}}"#, TWO_PRODUCTS);
        let products = parse_catalog(&json, Path::new("inline")).expect("valid");
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn loads_catalog_file() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("catalog.json");
        let mut file = std::fs::File::create(&path).expect("create catalog");
        write!(file, "{}", TWO_PRODUCTS).expect("write catalog");

        let products = load_catalog(Some(path.as_path())).expect("loads");
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn missing_file_is_read_error() {
        let temp = TempDir::new().expect("temp dir");
        let missing = temp.path().join("nope.json");
        let err = load_catalog(Some(missing.as_path())).unwrap_err();
        assert!(matches!(err, CatalogError::Read { .. }));
        assert!(err.to_string().contains("nope.json"));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_catalog("{\"products\": 3}", Path::new("bad.json")).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
        assert!(err.to_string().contains("bad.json"));
    }
}
