mod common;

use common::{child_names, find, parse, write_tree_file, PROJECT_TREE};
use tree2fs::json::parse_tree_json;
use tree2fs::{load_tree, InputFormat, NodeKind, ParseErrorKind, ParseOptions};

const PROJECT_JSON: &str = r#"{
  "project/": {
    "README.md": null,
    "src": { "main.py": null, "utils.py": null },
    "tests": ["test_main.py"]
  }
}"#;

#[test]
fn test_json_matches_equivalent_text() {
    let from_json = parse_tree_json(PROJECT_JSON).unwrap();
    let from_text = parse(PROJECT_TREE).unwrap();
    assert_eq!(from_json, from_text);
}

#[test]
fn test_json_preserves_member_order() {
    let parsed = parse_tree_json(r#"{ "r": { "z": null, "a": null, "m": null } }"#).unwrap();
    assert_eq!(child_names(&parsed.root), vec!["z", "a", "m"]);
}

#[test]
fn test_entry_array_variant() {
    let parsed = parse_tree_json(
        r#"[
            { "name": "web", "children": [
                { "name": "index.html", "type": "file" },
                { "name": "static", "type": "dir" }
            ] }
        ]"#,
    )
    .unwrap();
    assert_eq!(parsed.root_name, "web");
    assert_eq!(find(&parsed.root, "index.html").unwrap().kind, NodeKind::File);
    assert_eq!(find(&parsed.root, "static").unwrap().kind, NodeKind::Directory);
}

#[test]
fn test_json_multi_root() {
    let parsed = parse_tree_json(r#"["a/", "b.txt"]"#).unwrap();
    assert_eq!(parsed.root_name, "");
    assert_eq!(child_names(&parsed.root), vec!["a", "b.txt"]);
}

#[test]
fn test_json_errors() {
    let err = parse_tree_json(r#"{ "a": true }"#).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::JsonShape { .. }));

    let err = parse_tree_json(r#"{ "": null }"#).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptyName);

    let err = parse_tree_json("{ \"a\": ").unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::Json { .. }));
}

#[test]
fn test_load_tree_dispatches_by_format() {
    let (_tmp, json_path) = write_tree_file("layout.json", PROJECT_JSON);
    let parsed = load_tree(&json_path, InputFormat::Json, &ParseOptions::default()).unwrap();
    assert_eq!(parsed.root_name, "project");

    let (_tmp2, txt_path) = write_tree_file("tree.txt", PROJECT_TREE);
    let parsed = load_tree(&txt_path, InputFormat::Text, &ParseOptions::default()).unwrap();
    assert_eq!(parsed.root_name, "project");
}

#[test]
fn test_load_tree_keeps_parse_error() {
    let (_tmp, path) = write_tree_file("bad.txt", "a/\n        b.txt\n");
    let err = load_tree(&path, InputFormat::Text, &ParseOptions::default()).unwrap_err();
    let parse_err = err
        .downcast_ref::<tree2fs::TreeParseError>()
        .expect("parse error should survive context");
    assert_eq!(parse_err.line, Some(2));
}
