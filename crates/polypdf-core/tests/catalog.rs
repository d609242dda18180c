use std::fs;

use polypdf_core::catalog::Catalog;
use polypdf_core::error::CatalogError;

#[test]
fn loads_one_set_per_json_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), r#"{"title": "Hello", "footer": "Bye"}"#).unwrap();
    fs::write(dir.path().join("fr.json"), r#"{"title": "Bonjour", "footer": "Au revoir"}"#)
        .unwrap();

    let catalog = Catalog::load(dir.path()).unwrap();

    assert_eq!(catalog.locales(), vec!["en", "fr"]);
    assert_eq!(catalog.get("fr").unwrap()["title"], "Bonjour");
    assert_eq!(catalog.get("en").unwrap().len(), 2);
}

#[test]
fn ignores_other_extensions_and_directories() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), r#"{"title": "Hello"}"#).unwrap();
    fs::write(dir.path().join("README.md"), "not a locale").unwrap();
    fs::write(dir.path().join("de.json.bak"), "{").unwrap();
    fs::create_dir(dir.path().join("nested.json")).unwrap();

    let catalog = Catalog::load(dir.path()).unwrap();

    assert_eq!(catalog.locales(), vec!["en"]);
}

#[test]
fn missing_directory_yields_empty_catalog() {
    let dir = tempfile::tempdir().unwrap();

    let catalog = Catalog::load(&dir.path().join("does-not-exist")).unwrap();

    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
}

#[test]
fn malformed_file_fails_and_names_the_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), r#"{"title": "Hello"}"#).unwrap();
    fs::write(dir.path().join("es.json"), r#"{"title": "Hola""#).unwrap();

    let err = Catalog::load(dir.path()).unwrap_err();

    match &err {
        CatalogError::Malformed { path, .. } => assert!(path.ends_with("es.json")),
        other => panic!("expected Malformed, got {other:?}"),
    }
    assert!(err.to_string().contains("es.json"));
}

#[test]
fn non_utf8_file_fails_with_read_error_naming_the_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), [0xff, 0xfe, 0x7b, 0x7d]).unwrap();

    let err = Catalog::load(dir.path()).unwrap_err();

    match &err {
        CatalogError::ReadFile { path, source } => {
            assert!(path.ends_with("en.json"));
            assert_eq!(source.kind(), std::io::ErrorKind::InvalidData);
        }
        other => panic!("expected ReadFile, got {other:?}"),
    }
    assert!(err.to_string().contains("en.json"));
}

#[test]
fn directory_path_that_is_a_file_fails_with_read_dir() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("languages");
    fs::write(&file, "not a directory").unwrap();

    let err = Catalog::load(&file).unwrap_err();

    match &err {
        CatalogError::ReadDir { path, .. } => assert_eq!(path, &file),
        other => panic!("expected ReadDir, got {other:?}"),
    }
}

#[test]
fn files_with_unusable_locale_names_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), r#"{"title": "Hello"}"#).unwrap();
    fs::write(dir.path().join("pt-BR.json"), r#"{"title": "Olá"}"#).unwrap();
    fs::write(dir.path().join("fr\u{7}.json"), r#"{"title": "Bonjour"}"#).unwrap();
    fs::write(dir.path().join("de fr.json"), r#"{"title": "Hallo"}"#).unwrap();
    fs::write(dir.path().join(".json"), r#"{"title": "?"}"#).unwrap();

    let catalog = Catalog::load(dir.path()).unwrap();

    assert_eq!(catalog.locales(), vec!["en", "pt-BR"]);
}

#[test]
fn nested_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("en.json"), r#"{"title": {"text": "Hello"}}"#).unwrap();

    let err = Catalog::load(dir.path()).unwrap_err();

    assert!(matches!(err, CatalogError::Malformed { .. }));
}

#[test]
fn from_sets_exposes_read_only_accessors() {
    let catalog = Catalog::from_sets([
        ("en", [("title".to_string(), "Hello".to_string())].into()),
        ("fr", [("title".to_string(), "Bonjour".to_string())].into()),
    ]);

    assert!(catalog.contains("en"));
    assert!(!catalog.contains("de"));
    assert_eq!(catalog.get("en").unwrap()["title"], "Hello");
    assert!(catalog.get("de").is_none());
}
