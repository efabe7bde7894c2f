//! Error reporting through the public API.

use slotwire::{
    BuilderConfig, Error, IdBuilder, Namespace, Wildcard, WildcardFlags, build_child_id, host,
    wiring,
};

#[test]
fn test_invalid_wildcard_combination_lists_flags() {
    let ns = Namespace::from_path("/app/grid.rs").unwrap();
    let flags = WildcardFlags {
        all: true,
        matching: false,
        all_smaller: true,
    };
    let err = wiring::child_input(&ns, "cell", "value", flags).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Only one of all, match, or all_smaller can be set (got ALL, ALLSMALLER)"
    );
    assert!(err.is_recoverable());
}

#[test]
fn test_builder_checks_flags_first() {
    let builder = IdBuilder::new();
    let flags = WildcardFlags {
        all: true,
        matching: true,
        all_smaller: false,
    };
    assert!(matches!(
        builder.child_state("cell", "value", flags),
        Err(Error::InvalidWildcardCombination { .. })
    ));
}

#[test]
fn test_empty_namespace_is_not_recoverable() {
    let err = Namespace::new("").unwrap_err();
    assert!(matches!(err, Error::EmptyNamespace { .. }));
    assert!(!err.is_recoverable());
}

#[test]
fn test_unknown_wildcard_in_json() {
    let raw = r#"{"path":"/app_grid","child":"cell","id":["SOME"]}"#;
    let err = host::parse_dom_id(raw).unwrap_err();
    assert!(err.to_string().contains("Unknown wildcard tag: SOME"));
}

#[test]
fn test_dom_id_of_pattern() {
    let ns = Namespace::from_path("/app/grid.rs").unwrap();
    let pattern = build_child_id(&ns, "cell", Some(Wildcard::All.into()));
    let err = host::dom_id(&pattern).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot render a DOM id for wildcard selector ALL"
    );
}

#[test]
fn test_config_errors() {
    let err = BuilderConfig::from_toml_str("source_root = \"relative/dir\"").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));

    let err = BuilderConfig::from_toml_str("first_id = \"zero\"").unwrap_err();
    assert!(matches!(err, Error::Toml(_)));
}

#[test]
fn test_config_file_drives_builder() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slotwire.toml");
    std::fs::write(&path, "source_root = \"/srv/site\"\nfirst_id = 5\n").unwrap();

    let builder = IdBuilder::from_config(BuilderConfig::load(&path).unwrap());
    assert_eq!(builder.new_identity(None).as_str(), "5");
    assert!(
        builder
            .definition_path()
            .unwrap()
            .as_str()
            .starts_with("/srv/site/")
    );
}
