mod common;

use common::{parse, PROJECT_TREE};
use tree2fs::tree::{parse_tree_text, render_tree, GlyphStyle};
use tree2fs::{Node, ParseOptions};

fn round_trip(input: &str, style: GlyphStyle) {
    let first = parse(input).unwrap();
    let rendered = render_tree(&first.root, style);
    let second = parse(&rendered)
        .unwrap_or_else(|e| panic!("re-parse failed: {e}\n{rendered}"));
    assert_eq!(first, second, "round trip changed the tree:\n{rendered}");
}

#[test]
fn test_render_matches_canonical_text() {
    let parsed = parse(PROJECT_TREE).unwrap();
    assert_eq!(render_tree(&parsed.root, GlyphStyle::Unicode), PROJECT_TREE);
}

#[test]
fn test_round_trip_unicode() {
    round_trip(PROJECT_TREE, GlyphStyle::Unicode);
}

#[test]
fn test_round_trip_to_ascii() {
    round_trip(PROJECT_TREE, GlyphStyle::Ascii);
}

#[test]
fn test_round_trip_from_plain_indentation() {
    round_trip("site/\n    a/\n        b/\n            c.txt\n    d.txt\n", GlyphStyle::Unicode);
}

#[test]
fn test_round_trip_multi_root() {
    round_trip("a/\n    x.txt\nb/\nc.txt\n", GlyphStyle::Unicode);
}

#[test]
fn test_round_trip_synthetic_root_with_single_child() {
    let root = Node::dir("", vec![Node::dir("only", vec![Node::file("f")])]);
    let rendered = render_tree(&root, GlyphStyle::Unicode);
    let parsed = parse(&rendered).unwrap();
    assert_eq!(parsed.root, root);
    assert_eq!(parsed.root_name, "");
}

#[test]
fn test_round_trip_empty_directories() {
    round_trip("r/\n├── empty/\n└── full/\n    └── f\n", GlyphStyle::Ascii);
}

#[test]
fn test_round_trip_deep_nesting() {
    let mut input = String::from("d0/\n");
    for depth in 1..40 {
        input.push_str(&"    ".repeat(depth - 1));
        input.push_str(&format!("└── d{depth}/\n"));
    }
    round_trip(&input, GlyphStyle::Unicode);
    let parsed = parse(&input).unwrap();
    assert_eq!(parsed.root.walk().count(), 40);
}

#[test]
fn test_hash_names_round_trip() {
    let root = Node::dir("#build", vec![Node::file("#notes"), Node::file("x")]);
    let rendered = render_tree(&root, GlyphStyle::Unicode);

    // Below the root the connector keeps '#' out of comment position.
    let parsed = parse(&rendered).unwrap();
    assert!(parsed.root.is_synthetic());
    assert_eq!(parsed.root.children, root.children);

    let options = ParseOptions {
        comments: false,
        ..ParseOptions::default()
    };
    let parsed = parse_tree_text(&rendered, &options).unwrap();
    assert_eq!(parsed.root, root);
}
