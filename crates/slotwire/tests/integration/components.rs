//! Identifiers built by component definitions living in different files.

use slotwire::{
    namespace, BuilderConfig, Component, IdBuilder, IdentityAllocator, Namespace, ParentSelector,
    Wildcard,
};

use crate::common::app_counter::AppCounter;
use crate::common::counter::Counter;
use crate::common::init_tracing;
use crate::common::toggle::Toggle;

#[test]
fn test_counter_instances_share_path_not_id() {
    init_tracing();
    let ids = IdentityAllocator::new();
    let first = Counter::new(&ids);
    let second = Counter::new(&ids);

    let a = first.child_id("button");
    let b = second.child_id("button");

    assert_ne!(a, b);
    assert_eq!(a.path, b.path);
    assert_eq!(a.child, b.child);
    assert_eq!(a.id, ParentSelector::Concrete("0".into()));
    assert_eq!(b.id, ParentSelector::Concrete("1".into()));
}

#[test]
fn test_counter_namespace_is_its_file() {
    let ids = IdentityAllocator::new();
    let counter = Counter::new(&ids);
    let path = counter.child_id("count").path;
    assert!(
        path.as_str().ends_with("common/counter_rs"),
        "unexpected namespace {path}"
    );
}

#[test]
fn test_counter_and_toggle_buttons_do_not_collide() {
    let builder = IdBuilder::new();
    let toggle = Toggle::new(&builder).unwrap();
    let counter = Counter::with_id(builder.allocator(), toggle.id.as_str());

    let counter_button = counter.child_id("button");
    assert_eq!(counter_button.id, toggle.button.id);
    assert_eq!(counter_button.child, toggle.button.child);
    assert_ne!(counter_button.path, toggle.button.path);
    assert_ne!(counter_button, toggle.button);
}

#[test]
fn test_builder_namespace_comes_from_defining_file() {
    let builder = IdBuilder::new();
    let toggle = Toggle::new(&builder).unwrap();
    assert!(
        toggle.button.path.as_str().ends_with("common/toggle_rs"),
        "unexpected namespace {}",
        toggle.button.path
    );

    let here = builder.definition_path().unwrap();
    assert_ne!(here, toggle.button.path);
}

#[test]
fn test_toggle_summary_matches_all_instances() {
    let builder = IdBuilder::new();
    let wiring = Toggle::summary_wiring(&builder).unwrap();
    let child = wiring.id.as_child().unwrap();
    assert_eq!(child.id.as_wildcard(), Some(Wildcard::All));
    assert_eq!(child.path, Toggle::new(&builder).unwrap().button.path);
}

#[test]
fn test_app_counter_end_to_end() {
    let ids = IdentityAllocator::new();
    let first = AppCounter { id: ids.allocate() };
    let second = AppCounter { id: ids.allocate() };

    let a = slotwire::host::to_value(&first.child_id("button")).unwrap();
    let b = slotwire::host::to_value(&second.child_id("button")).unwrap();

    assert_eq!(
        a,
        serde_json::json!({"path": "/app_counter", "child": "button", "id": "0"})
    );
    assert_eq!(
        b,
        serde_json::json!({"path": "/app_counter", "child": "button", "id": "1"})
    );
    assert_ne!(a, b);
}

#[test]
fn test_explicit_id_leaves_counter_alone() {
    let ids = IdentityAllocator::new();
    let named = Counter::with_id(&ids, "foo");
    let next = Counter::new(&ids);
    assert_eq!(named.component_id().as_str(), "foo");
    assert_eq!(next.component_id().as_str(), "0");
}

#[test]
fn test_increment_wiring_matches_same_instance() {
    let (output, input) = Counter::increment_wiring().unwrap();
    let output_id = output.id.as_child().unwrap();
    let input_id = input.id.as_child().unwrap();
    assert_eq!(output_id.id, ParentSelector::Wildcard(Wildcard::Match));
    assert_eq!(input_id.id, ParentSelector::Wildcard(Wildcard::Match));
    assert_eq!(output_id.path, input_id.path);
}

#[test]
fn test_namespace_entry_points_agree_for_one_file() {
    let config = BuilderConfig::from_toml_str("source_root = \"/srv/app\"").unwrap();
    let builder = IdBuilder::from_config(config);

    let concrete = builder
        .child_id("button", Some(builder.new_identity(None).into()))
        .unwrap();
    let from_caller = Namespace::caller(builder.config()).unwrap();
    let from_macro = namespace!(builder.config());

    assert_eq!(concrete.path, from_caller);
    assert_eq!(concrete.path, from_macro);
    assert!(!concrete.path.as_str().contains('.'));

    let plain = IdBuilder::default();
    assert_eq!(plain.definition_path().unwrap(), namespace!());
    assert_eq!(Namespace::caller(plain.config()).unwrap(), namespace!());
}
