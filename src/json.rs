//! JSON layout backend.
//!
//! Accepted shapes:
//!
//! ```json
//! { "project/": { "README.md": null, "src": { "main.rs": "" }, "empty/": {} } }
//! { "project": ["README.md", "src/", { "docs": ["index.md"] }] }
//! [ { "name": "project", "type": "dir", "children": [ { "name": "a.txt" } ] } ]
//! ```

use serde_json::{Map, Value};

use crate::error::{ParseErrorKind, TreeParseError};
use crate::tree::normalize::{normalize_name, resolve_kind};
use crate::tree::{Node, NodeKind, ParsedTree};

/// Parse a JSON layout into the shared tree model.
pub fn parse_tree_json(input: &str) -> Result<ParsedTree, TreeParseError> {
    let value: Value = serde_json::from_str(input).map_err(|e| TreeParseError {
        kind: ParseErrorKind::Json {
            message: e.to_string(),
        },
        line: (e.line() > 0).then_some(e.line()),
        text: None,
    })?;

    let mut top = match &value {
        Value::Object(members) => object_children(members)?,
        Value::Array(items) => array_children(items)?,
        other => {
            return Err(shape_error(format!(
                "top level must be an object or array, found {}",
                type_name(other)
            )))
        }
    };

    if top.is_empty() {
        return Err(TreeParseError::new(ParseErrorKind::NoEntries));
    }
    if top.len() == 1 {
        if let Some(root) = top.pop() {
            let root_name = root.name.clone();
            return Ok(ParsedTree { root, root_name });
        }
    }
    Ok(ParsedTree {
        root: Node::dir(String::new(), top),
        root_name: String::new(),
    })
}

/// Each member of an object is one entry, keyed by its name.
fn object_children(members: &Map<String, Value>) -> Result<Vec<Node>, TreeParseError> {
    members
        .iter()
        .map(|(key, value)| member_node(key, value))
        .collect()
}

fn member_node(key: &str, value: &Value) -> Result<Node, TreeParseError> {
    let normalized = normalize_name(key).map_err(|kind| TreeParseError::new(kind).with_text(key))?;
    let (children, container) = match value {
        Value::Null | Value::String(_) => (Vec::new(), false),
        Value::Object(members) => (object_children(members)?, !members.is_empty()),
        Value::Array(items) => (array_children(items)?, true),
        other => {
            return Err(shape_error(format!(
                "value of '{key}' must be null, a string, an object or an array, found {}",
                type_name(other)
            ))
            .with_text(key))
        }
    };
    Ok(Node {
        kind: resolve_kind(normalized.marked_dir || container, !children.is_empty()),
        name: normalized.name,
        children,
    })
}

/// Array items are name strings, objects of named members, or entry objects.
fn array_children(items: &[Value]) -> Result<Vec<Node>, TreeParseError> {
    let mut nodes = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::String(name) => nodes.push(member_node(name, &Value::Null)?),
            Value::Object(members) if is_entry(members) => nodes.push(entry_node(members)?),
            Value::Object(members) => nodes.extend(object_children(members)?),
            other => {
                return Err(shape_error(format!(
                    "array items must be strings or objects, found {}",
                    type_name(other)
                )))
            }
        }
    }
    Ok(nodes)
}

fn is_entry(members: &Map<String, Value>) -> bool {
    matches!(members.get("name"), Some(Value::String(_)))
        && members
            .keys()
            .all(|k| matches!(k.as_str(), "name" | "type" | "children"))
}

/// `{ "name": ..., "type": "file" | "dir" | "directory", "children": [...] }`
fn entry_node(members: &Map<String, Value>) -> Result<Node, TreeParseError> {
    let raw_name = members.get("name").and_then(Value::as_str).unwrap_or_default();
    let normalized =
        normalize_name(raw_name).map_err(|kind| TreeParseError::new(kind).with_text(raw_name))?;

    let declared = match members.get("type") {
        None | Some(Value::Null) => None,
        Some(Value::String(t)) => match t.as_str() {
            "file" => Some(NodeKind::File),
            "dir" | "directory" => Some(NodeKind::Directory),
            other => {
                return Err(shape_error(format!("unknown entry type '{other}'")).with_text(raw_name))
            }
        },
        Some(other) => {
            return Err(shape_error(format!(
                "entry type must be a string, found {}",
                type_name(other)
            ))
            .with_text(raw_name))
        }
    };

    let children = match members.get("children") {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => Some(array_children(items)?),
        Some(Value::Object(map)) => Some(object_children(map)?),
        Some(other) => {
            return Err(shape_error(format!(
                "children must be an array or object, found {}",
                type_name(other)
            ))
            .with_text(raw_name))
        }
    };

    if declared == Some(NodeKind::File) && children.as_ref().is_some_and(|c| !c.is_empty()) {
        return Err(shape_error("a file entry cannot have children".to_string()).with_text(raw_name));
    }

    let marked_dir =
        normalized.marked_dir || declared == Some(NodeKind::Directory) || children.is_some();
    let children = children.unwrap_or_default();
    Ok(Node {
        kind: resolve_kind(marked_dir, !children.is_empty()),
        name: normalized.name,
        children,
    })
}

fn shape_error(message: String) -> TreeParseError {
    TreeParseError::new(ParseErrorKind::JsonShape { message })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(node: &Node) -> Vec<&str> {
        node.children.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn nested_objects() {
        let parsed = parse_tree_json(
            r#"{ "project/": { "README.md": null, "src": { "main.rs": "" }, "empty/": {}, "LICENSE": {} } }"#,
        )
        .unwrap();
        assert_eq!(parsed.root_name, "project");
        let root = &parsed.root;
        assert_eq!(names(root), vec!["README.md", "src", "empty", "LICENSE"]);
        assert_eq!(root.children[0].kind, NodeKind::File);
        assert_eq!(root.children[1].kind, NodeKind::Directory);
        assert_eq!(root.children[2].kind, NodeKind::Directory);
        assert_eq!(root.children[3].kind, NodeKind::File);
    }

    #[test]
    fn arrays_of_names() {
        let parsed = parse_tree_json(r#"{ "app": ["main.rs", "assets/", { "docs": ["index.md"] }] }"#)
            .unwrap();
        let root = &parsed.root;
        assert!(root.is_dir());
        assert_eq!(names(root), vec!["main.rs", "assets", "docs"]);
        assert!(root.children[1].is_dir());
        assert_eq!(names(&root.children[2]), vec!["index.md"]);
    }

    #[test]
    fn entry_objects() {
        let parsed = parse_tree_json(
            r#"[{ "name": "pkg", "type": "dir", "children": [
                    { "name": "lib.rs" },
                    { "name": "bin", "type": "directory" }
               ] }]"#,
        )
        .unwrap();
        assert_eq!(parsed.root_name, "pkg");
        assert_eq!(names(&parsed.root), vec!["lib.rs", "bin"]);
        assert!(parsed.root.children[1].is_dir());
        assert!(parsed.root.children[1].children.is_empty());
    }

    #[test]
    fn several_top_level_members_get_a_synthetic_root() {
        let parsed = parse_tree_json(r#"{ "a/": {}, "b.txt": null }"#).unwrap();
        assert_eq!(parsed.root_name, "");
        assert!(parsed.root.is_synthetic());
        assert_eq!(names(&parsed.root), vec!["a", "b.txt"]);
    }

    #[test]
    fn syntax_error_carries_line() {
        let err = parse_tree_json("{\n  \"a\": nul\n}").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::Json { .. }));
        assert_eq!(err.line, Some(2));
    }

    #[test]
    fn nested_path_key_is_rejected() {
        let err = parse_tree_json(r#"{ "src/main.rs": null }"#).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::NestedPath { .. }));
        assert_eq!(err.text.as_deref(), Some("src/main.rs"));
    }

    #[test]
    fn scalar_values_are_rejected() {
        let err = parse_tree_json(r#"{ "a": 3 }"#).unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::JsonShape { .. }));
        let err = parse_tree_json("42").unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::JsonShape { .. }));
    }

    #[test]
    fn file_entry_with_children_is_rejected() {
        let err = parse_tree_json(r#"[{ "name": "x", "type": "file", "children": ["y"] }]"#)
            .unwrap_err();
        assert!(matches!(err.kind, ParseErrorKind::JsonShape { .. }));
    }

    #[test]
    fn empty_document_has_no_entries() {
        let err = parse_tree_json("{}").unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::NoEntries);
    }
}
