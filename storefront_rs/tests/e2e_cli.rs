//! End-to-end CLI tests for the storefront builder.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command pointing to the storefront binary
fn storefront() -> Command {
    cargo_bin_cmd!("storefront")
}

const CATALOG: &str = r#"{
    "products": [
        {"slug": "first", "name": "First Shirt", "brand": "Polo", "description": "One",
         "images": ["/images/first.jpg"], "price": 49.9, "rating": 4.5, "stock": 3},
        {"slug": "second", "name": "Second Shirt", "brand": "Polo", "description": "Two",
         "images": ["/images/second.jpg"], "price": 100, "rating": 4, "stock": 0}
    ]
}"#;

// ============================================
// Basic CLI Tests
// ============================================

mod cli_basics {
    use super::*;

    #[test]
    fn shows_help() {
        storefront()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("build"))
            .stdout(predicate::str::contains("render"));
    }

    #[test]
    fn shows_version() {
        storefront()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}

// ============================================
// Build Tests
// ============================================

mod build {
    use super::*;

    #[test]
    fn writes_home_and_not_found() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("dist");

        storefront()
            .current_dir(temp.path())
            .args(["build", "--out"])
            .arg(&out)
            .assert()
            .success()
            .stdout(predicate::str::contains("index.html"))
            .stdout(predicate::str::contains("404.html"));

        let home = std::fs::read_to_string(out.join("index.html")).expect("home written");
        assert!(home.contains("New Arrivals"));
        assert_eq!(home.matches(r#"class="product-card""#).count(), 5);

        let not_found = std::fs::read_to_string(out.join("404.html")).expect("404 written");
        assert!(not_found.contains("Could not find requested resource"));
    }

    #[test]
    fn uses_catalog_and_limit() {
        let temp = TempDir::new().expect("temp dir");
        let catalog = temp.path().join("catalog.json");
        std::fs::write(&catalog, CATALOG).expect("write catalog");
        let out = temp.path().join("dist");

        storefront()
            .current_dir(temp.path())
            .args(["build", "--limit", "1", "--catalog"])
            .arg(&catalog)
            .arg("--out")
            .arg(&out)
            .assert()
            .success();

        let home = std::fs::read_to_string(out.join("index.html")).expect("home written");
        assert!(home.contains(r#"data-key="first""#));
        assert!(!home.contains(r#"data-key="second""#));
        assert!(home.contains("$49.90"));
    }

    #[test]
    fn applies_config_file() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(
            temp.path().join("storefront.toml"),
            "app_name = \"Corner Shop\"\n\n[home]\ntitle = \"Featured\"\n",
        )
        .expect("write config");

        storefront()
            .current_dir(temp.path())
            .arg("build")
            .assert()
            .success();

        let home =
            std::fs::read_to_string(temp.path().join("dist").join("index.html")).expect("home");
        assert!(home.contains("Corner Shop"));
        assert!(home.contains("Featured"));
        assert!(!home.contains("New Arrivals"));
    }

    #[test]
    fn fails_on_missing_catalog() {
        let temp = TempDir::new().expect("temp dir");

        storefront()
            .current_dir(temp.path())
            .args(["build", "--catalog", "missing.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing.json"));
    }

    #[test]
    fn fails_on_malformed_catalog() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("bad.json"), "{ not json").expect("write catalog");

        storefront()
            .current_dir(temp.path())
            .args(["build", "--catalog", "bad.json"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("bad.json"));
    }
}

// ============================================
// Render / Catalog Tests
// ============================================

mod render {
    use super::*;

    #[test]
    fn renders_home_to_stdout() {
        let temp = TempDir::new().expect("temp dir");
        let catalog = temp.path().join("catalog.json");
        std::fs::write(&catalog, CATALOG).expect("write catalog");

        storefront()
            .current_dir(temp.path())
            .args(["render", "home", "--catalog"])
            .arg(&catalog)
            .assert()
            .success()
            .stdout(predicate::str::starts_with("<!DOCTYPE html>"))
            .stdout(predicate::str::contains("$49.90"))
            .stdout(predicate::str::contains("Out of Stock"))
            .stdout(predicate::str::contains("$100.00").not());
    }

    #[test]
    fn renders_empty_catalog_fallback() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join("empty.json"), "[]").expect("write catalog");

        storefront()
            .current_dir(temp.path())
            .args(["render", "home", "--catalog", "empty.json"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No products found"));
    }

    #[test]
    fn lists_catalog() {
        let temp = TempDir::new().expect("temp dir");

        storefront()
            .current_dir(temp.path())
            .arg("catalog")
            .assert()
            .success()
            .stdout(predicate::str::contains("polo-sporting-stretch-shirt\t$59.99\t5"));
    }
}
