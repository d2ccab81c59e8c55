//! Path semantics of ConfigTree

use rstest::rstest;

use cfgtree::domain::{ConfigTree, PlainMap, PlainValue, Scalar, Value};

// ============================================================
// set / get / has / remove
// ============================================================

#[rstest]
#[case("port", Value::from(25565))]
#[case("server.port", Value::from(25565))]
#[case("a.b.c.d", Value::from("deep"))]
#[case("flags.enabled", Value::from(true))]
#[case("ratios.half", Value::from(0.5))]
#[case("names", Value::from(vec!["a", "b"]))]
fn given_value_when_set_then_get_returns_it(#[case] path: &str, #[case] value: Value) {
    let mut root = ConfigTree::new();

    root.set(path, value.clone());

    assert_eq!(root.get(path), Some(&value));
    assert!(root.has(path));
}

#[rstest]
#[case("port")]
#[case("server.port")]
#[case("never.existed.key")]
fn given_absent_value_when_set_then_has_is_false(#[case] path: &str) {
    let mut root = ConfigTree::new();
    root.set(path, 1);

    root.set_value(path, None);

    assert!(!root.has(path));
    assert_eq!(root.peek(path), None);
}

#[test]
fn given_server_port_example_when_queried_then_matches() {
    let mut root = ConfigTree::new();

    root.set("server.port", 25565);

    assert_eq!(root.get("server.port"), Some(&Value::from(25565)));
    assert!(root.has("server"));
    assert!(!root.has("server.host"));

    let mut server = PlainMap::new();
    server.insert("port".into(), PlainValue::Scalar(Scalar::Integer(25565)));
    let mut expected = PlainMap::new();
    expected.insert("server".into(), PlainValue::Mapping(server));
    assert_eq!(root.values(true), expected);
}

#[test]
fn given_existing_value_when_set_again_then_overwritten_not_merged() {
    let mut root = ConfigTree::new();

    root.set("a.b", 1);
    root.set("a.b", 2);

    assert_eq!(root.get_int("a.b"), Some(2));
    assert_eq!(root.get_section("a").map(ConfigTree::len), Some(1));
}

#[test]
fn given_section_when_overwritten_by_scalar_then_subtree_dropped() {
    let mut root = ConfigTree::new();
    root.set("db.url", "postgres://");

    root.set("db", "disabled");

    assert_eq!(root.get_string("db"), Some("disabled"));
    assert!(!root.has("db.url"));
}

#[test]
fn given_remove_when_called_then_same_as_set_absent() {
    let mut root = ConfigTree::new();
    root.set("a.b", 1);
    root.set("a.c", 2);

    root.remove("a.b");

    assert!(!root.has("a.b"));
    assert!(root.has("a.c"));
}

#[test]
fn given_missing_parents_when_removing_then_parents_materialized() {
    let mut root = ConfigTree::new();

    root.remove("x.y.z");

    assert!(root.has("x.y"));
    assert!(!root.has("x.y.z"));
}

// ============================================================
// Mutating reads vs pure reads
// ============================================================

#[test]
fn given_missing_path_when_get_then_intermediates_materialized() {
    let mut root = ConfigTree::new();

    assert_eq!(root.get("a.b.c"), None);

    assert!(root.has("a"));
    assert!(root.has("a.b"));
    assert!(!root.has("a.b.c"));
}

#[test]
fn given_missing_path_when_has_or_peek_then_tree_unchanged() {
    let mut root = ConfigTree::new();
    root.set("keep", 1);
    let before = root.clone();

    assert!(!root.has("a.b.c"));
    assert_eq!(root.peek("a.b.c"), None);

    assert_eq!(root, before);
}

#[test]
fn given_scalar_intermediate_when_has_then_false_without_error() {
    let mut root = ConfigTree::new();
    root.set("a", 1);

    assert!(!root.has("a.b"));
    assert_eq!(root.peek("a"), Some(&Value::from(1)));
}

#[test]
fn given_existing_sibling_when_get_then_existing_section_not_overwritten() {
    let mut root = ConfigTree::new();
    root.set("a.b.keep", true);

    root.get("a.b.other");
    root.create("a.b");

    assert_eq!(root.get_bool("a.b.keep"), Some(true));
}

// ============================================================
// create
// ============================================================

#[test]
fn given_two_creates_when_sharing_prefix_then_single_intermediate() {
    let mut root = ConfigTree::new();

    root.create("a.b.c");
    root.create("a.b.d");

    assert_eq!(root.len(), 1);
    let b = root.get_section("a.b").unwrap();
    assert_eq!(b.keys().collect::<Vec<_>>(), vec!["c", "d"]);
    assert!(b.iter().all(|(_, v)| v.is_section()));
}

#[test]
fn given_created_section_when_mutated_then_visible_through_root() {
    let mut root = ConfigTree::new();

    let limits = root.create("server.limits");
    limits.set("players", 20);
    limits.set("view.distance", 10);

    assert_eq!(root.get_int("server.limits.players"), Some(20));
    assert_eq!(root.get_int("server.limits.view.distance"), Some(10));
    let view = root.get_section("server.limits.view").unwrap();
    assert_eq!(view.full_path(), "server.limits.view");
}

// ============================================================
// values(deep)
// ============================================================

#[test]
fn given_tree_from_sets_when_deep_values_then_nested_and_ordered() {
    let mut root = ConfigTree::new();
    root.set("z", 1);
    root.set("m.second", 2);
    root.set("m.first", 3);
    root.set("a", "last");

    let values = root.values(true);

    assert_eq!(values.keys().collect::<Vec<_>>(), vec!["z", "m", "a"]);
    let m = values["m"].as_mapping().unwrap();
    assert_eq!(m.keys().collect::<Vec<_>>(), vec!["second", "first"]);
    assert_eq!(m["first"], PlainValue::Scalar(Scalar::Integer(3)));
}

#[test]
fn given_nested_tree_when_shallow_values_then_sections_are_empty_placeholders() {
    let mut root = ConfigTree::new();
    root.set("server.port", 25565);
    root.set("server.limits.players", 20);
    root.set("motd", "hi");

    let values = root.values(false);

    assert_eq!(values["server"], PlainValue::Mapping(PlainMap::new()));
    assert_eq!(values["motd"], PlainValue::Scalar(Scalar::from("hi")));
}

#[test]
fn given_subsection_when_values_then_relative_to_that_section() {
    let mut root = ConfigTree::new();
    root.set("server.port", 25565);
    root.set("server.limits.players", 20);

    let server = root.get_section("server").unwrap();
    let values = server.values(true);

    assert_eq!(values.keys().collect::<Vec<_>>(), vec!["port", "limits"]);
}

// ============================================================
// from_map / raw_map
// ============================================================

#[test]
fn given_flat_entries_when_from_map_then_installed_without_path_parsing() {
    let mut child = ConfigTree::new();
    child.set("port", 25565);

    let mut root = ConfigTree::from_map(vec![
        ("server", Value::from(child)),
        ("a.b", Value::from(1)),
    ]);

    assert_eq!(root.keys().collect::<Vec<_>>(), vec!["server", "a.b"]);
    assert_eq!(root.get_int("server.port"), Some(25565));
    assert_eq!(root.get_section("server").unwrap().full_path(), "server");
    assert!(!root.has("a.b"));
    assert_eq!(root.raw_map().get("a.b"), Some(&Value::from(1)));
}

#[test]
fn given_pairs_when_collected_then_same_as_from_map() {
    let root: ConfigTree = vec![("x", Value::from(1)), ("y", Value::from(2))]
        .into_iter()
        .collect();

    assert_eq!(root.raw_map().len(), 2);
    assert!(root.has("y"));
}

// ============================================================
// Empty segments (leading, trailing, doubled dots)
// ============================================================

#[test]
fn given_doubled_dot_when_set_then_empty_named_intermediate_created() {
    let mut root = ConfigTree::new();

    root.set("a..b", 1);

    assert!(root.has("a."));
    let empty = root.get_section("a.").unwrap();
    assert_eq!(empty.full_path(), "a.");
    assert_eq!(root.get_int("a..b"), Some(1));
}

#[test]
fn given_trailing_dot_when_set_then_empty_terminal_key() {
    let mut root = ConfigTree::new();

    root.set("a.", "x");

    let a = root.get_section("a").unwrap();
    assert_eq!(a.keys().collect::<Vec<_>>(), vec![""]);
}

#[test]
fn given_leading_dot_when_set_then_empty_root_key() {
    let mut root = ConfigTree::new();

    root.set(".a", true);

    assert_eq!(root.keys().collect::<Vec<_>>(), vec![""]);
    assert_eq!(root.get_bool(".a"), Some(true));
}

#[test]
fn given_empty_path_when_set_then_empty_key_at_root() {
    let mut root = ConfigTree::new();

    root.set("", 7);

    assert!(root.has(""));
    assert_eq!(root.get_int(""), Some(7));
}
