//! Tests for loading and validating title catalogs from TOML files.

use std::fs;
use tempfile::TempDir;

use rand::SeedableRng;
use rand::rngs::StdRng;
use shrugman::Catalog;
use strictly_shrugman::GuessEngine;

/// Writes a catalog file into the temp dir and returns its path.
fn write_catalog(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("catalog.toml");
    fs::write(&path, content).expect("Failed to write TOML");
    path
}

#[test]
fn test_load_custom_catalog() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_catalog(
        &dir,
        r#"
[[categories]]
name = "Board Games"
titles = ["Catan", "Ticket to Ride"]

[[categories]]
name = "Planets"
titles = ["Mercury", "Venus", "Earth"]
"#,
    );

    let catalog = Catalog::load(Some(&path)).expect("Load failed");
    assert_eq!(catalog.names(), ["Board Games", "Planets"]);
    assert_eq!(catalog.get(1).map(|c| c.titles().len()), Some(3));
}

#[test]
fn test_load_without_path_is_builtin() {
    let catalog = Catalog::load(None).expect("Load failed");
    assert_eq!(
        catalog.names(),
        ["Movies", "Books", "Fictional Characters", "TV Shows", "Songs"]
    );
}

#[test]
fn test_missing_file_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = Catalog::from_file(dir.path().join("nope.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read catalog file"));
}

#[test]
fn test_malformed_toml_is_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_catalog(&dir, "this is not valid toml !!!@@@");
    let err = Catalog::from_file(path).unwrap_err();
    assert!(err.message.contains("Failed to parse catalog"));
}

#[test]
fn test_unplayable_title_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_catalog(
        &dir,
        r#"
[[categories]]
name = "Numbers"
titles = ["1984", "Catch-22"]
"#,
    );
    let err = Catalog::from_file(path).unwrap_err();
    assert!(err.message.contains("Numbers"));
}

#[test]
fn test_empty_category_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_catalog(
        &dir,
        r#"
[[categories]]
name = "Nothing"
titles = []
"#,
    );
    assert!(Catalog::from_file(path).is_err());
}

#[test]
fn test_duplicate_names_rejected() {
    let result = Catalog::from_toml_str(
        r#"
[[categories]]
name = "Songs"
titles = ["Yesterday"]

[[categories]]
name = "songs"
titles = ["Imagine"]
"#,
    );
    assert!(result.is_err());
}

#[test]
fn test_find_ignores_case() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.find("tv shows"), Some(3));
    assert_eq!(catalog.find("  MOVIES "), Some(0));
    assert_eq!(catalog.find("Podcasts"), None);
}

#[test]
fn test_every_builtin_title_is_playable() {
    let catalog = Catalog::builtin();
    for category in catalog.categories() {
        assert!(!category.titles().is_empty(), "{} is empty", category.name());
        for title in category.titles() {
            assert!(GuessEngine::new(title).is_ok(), "unplayable title {:?}", title);
        }
    }
}

#[test]
fn test_choose_title_comes_from_category() {
    let catalog = Catalog::builtin();
    let books = catalog.get(1).expect("Books category");
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let title = books.choose_title(&mut rng).expect("Choose failed");
        assert!(books.titles().iter().any(|t| t == title));
    }
}
