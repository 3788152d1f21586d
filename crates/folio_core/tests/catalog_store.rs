use folio_core::{
    CatalogError, CatalogStore, ProjectCategory, ProjectRecord, ProjectValidationError,
    StaticCatalog,
};
use std::io::Write;

const SCENARIO_JSON: &str = r#"[
    {"id": 1, "category": "web", "title": "One", "description": "first"},
    {"id": 2, "category": "design", "title": "Two", "description": "second"},
    {"id": 3, "category": "web", "title": "Three", "description": "third"}
]"#;

#[test]
fn all_preserves_source_order_across_calls() {
    let catalog = StaticCatalog::from_json_str(SCENARIO_JSON).unwrap();

    let first = catalog.all().iter().map(|r| r.id).collect::<Vec<_>>();
    let second = catalog.all().iter().map(|r| r.id).collect::<Vec<_>>();
    assert_eq!(first, vec![1, 2, 3]);
    assert_eq!(first, second);
}

#[test]
fn get_by_id_returns_record_or_absent() {
    let catalog = StaticCatalog::from_json_str(SCENARIO_JSON).unwrap();

    let found = catalog.get_by_id(2).unwrap();
    assert_eq!(found.title, "Two");
    assert_eq!(found.category, ProjectCategory::Design);

    for missing in [0, 4, 99, -1, i64::MAX] {
        assert!(catalog.get_by_id(missing).is_none(), "id {missing}");
    }
}

#[test]
fn missing_sequences_default_to_empty() {
    let catalog = StaticCatalog::from_json_str(SCENARIO_JSON).unwrap();
    let record = catalog.get_by_id(1).unwrap();
    assert!(record.tags.is_empty());
    assert!(record.features.is_empty());
    assert_eq!(record.live_url, "");
}

#[test]
fn record_wire_names_follow_data_source() {
    let json = r#"[{
        "id": 8,
        "category": "web",
        "title": "Shop",
        "description": "store",
        "long_description": "long store",
        "image": "/shop.png",
        "liveUrl": "https://shop.example.com",
        "githubUrl": "https://github.com/example/shop",
        "tags": ["Rust", "Axum"],
        "features": ["Cart", "Checkout"]
    }]"#;
    let catalog = StaticCatalog::from_json_str(json).unwrap();
    let record = catalog.get_by_id(8).unwrap();
    assert_eq!(record.live_url, "https://shop.example.com");
    assert_eq!(record.github_url, "https://github.com/example/shop");
    assert_eq!(record.long_description, "long store");
    assert_eq!(record.features, vec!["Cart", "Checkout"]);

    let value = serde_json::to_value(record).unwrap();
    assert_eq!(value["liveUrl"], "https://shop.example.com");
    assert_eq!(value["category"], "web");
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = StaticCatalog::new(vec![
        ProjectRecord::new(5, ProjectCategory::Web, "A", "a"),
        ProjectRecord::new(5, ProjectCategory::Design, "B", "b"),
    ])
    .unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId(5)));
}

#[test]
fn unknown_category_fails_to_parse() {
    let err = StaticCatalog::from_json_str(
        r#"[{"id": 1, "category": "mobile", "title": "X", "description": "x"}]"#,
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::Parse(_)));
}

#[test]
fn invalid_record_is_rejected() {
    let err = StaticCatalog::new(vec![ProjectRecord::new(
        1,
        ProjectCategory::Web,
        "",
        "untitled",
    )])
    .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidRecord(_)));
}

#[test]
fn negative_id_is_rejected() {
    let err = StaticCatalog::from_json_str(
        r#"[{"id": -1, "category": "web", "title": "X", "description": "x"}]"#,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        CatalogError::InvalidRecord(ProjectValidationError::NegativeId(-1))
    ));
}

#[test]
fn from_json_file_loads_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SCENARIO_JSON.as_bytes()).unwrap();

    let catalog = StaticCatalog::from_json_file(file.path()).unwrap();
    assert_eq!(catalog.len(), 3);
}

#[test]
fn from_json_file_reports_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = StaticCatalog::from_json_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io(_)));
}
