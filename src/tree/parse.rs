//! Indentation-stack tree builder.
//!
//! Every line is attached to the nearest preceding line that is exactly one
//! level shallower. Open ancestors live on an explicit stack of
//! `(depth, arena index)` pairs, so no recursion is involved and the arena
//! owns every node until the finished tree is assembled.

use super::classify::{classify, indent_unit, is_comment, ClassifiedLine};
use super::normalize::{normalize_name, resolve_kind, NormalizedName};
use super::{Node, ParseOptions, ParsedTree};
use crate::error::{ParseErrorKind, TreeParseError};

/// A node whose children are still being discovered.
struct Pending {
    /// `None` for a synthetic root.
    name: Option<NormalizedName>,
    children: Vec<usize>,
}

/// Parse tree-diagram text into a normalized tree.
///
/// Blank lines (and `#` comment lines when enabled) are ignored. Columns are
/// measured from the first line, so a uniformly indented diagram parses the
/// same as one at the left margin. A single depth-0 first line becomes the
/// root; otherwise the top-level lines are gathered under a synthetic root
/// with an empty name. The first offending line in input order is reported.
pub fn parse_tree_text(input: &str, options: &ParseOptions) -> Result<ParsedTree, TreeParseError> {
    let lines: Vec<Result<ClassifiedLine<'_>, TreeParseError>> = input
        .lines()
        .enumerate()
        .filter(|(_, raw)| !raw.trim().is_empty())
        .filter(|(_, raw)| !(options.comments && is_comment(raw)))
        .map(|(idx, raw)| classify(idx + 1, raw, options))
        .collect();

    let first = match lines.first() {
        Some(Ok(line)) => line,
        Some(Err(e)) => return Err(e.clone()),
        None => return Err(TreeParseError::new(ParseErrorKind::NoEntries)),
    };
    let origin = first.indent.column();
    let unit = indent_unit(lines.iter().filter_map(|line| line.as_ref().ok()), options);
    let first_depth = first.depth(unit, origin)?;

    // Lines that fail are reported when the main loop reaches them.
    let top_level = lines
        .iter()
        .filter_map(|line| line.as_ref().ok())
        .filter(|line| line.depth(unit, origin).is_ok_and(|d| d == 0))
        .count();
    let single_root = first_depth == 0 && top_level == 1;

    let mut arena: Vec<Pending> = Vec::with_capacity(lines.len() + 1);
    let mut stack: Vec<(isize, usize)> = Vec::new();
    let mut entries = lines.into_iter();

    if single_root {
        if let Some(line) = entries.next() {
            let line = line?;
            arena.push(Pending {
                name: Some(normalized(&line)?),
                children: Vec::new(),
            });
        }
        stack.push((0, 0));
    } else {
        arena.push(Pending {
            name: None,
            children: Vec::new(),
        });
        stack.push((first_depth as isize - 1, 0));
    }

    for line in entries {
        let line = line?;
        let depth = line.depth(unit, origin)? as isize;
        let name = normalized(&line)?;

        while stack.last().is_some_and(|&(open, _)| open >= depth) {
            stack.pop();
        }
        let Some(&(parent_depth, parent)) = stack.last() else {
            return Err(line.error(ParseErrorKind::AboveRoot));
        };
        if depth > parent_depth + 1 {
            return Err(line.error(ParseErrorKind::IndentationJump {
                from: parent_depth.max(0) as usize,
                to: depth as usize,
            }));
        }

        let idx = arena.len();
        arena.push(Pending {
            name: Some(name),
            children: Vec::new(),
        });
        arena[parent].children.push(idx);
        stack.push((depth, idx));
    }

    Ok(assemble(arena))
}

fn normalized(line: &ClassifiedLine<'_>) -> Result<NormalizedName, TreeParseError> {
    normalize_name(line.name).map_err(|kind| line.error(kind))
}

/// Build owned nodes from the leaves up. Children always have larger indices
/// than their parent, so a single reverse sweep sees every child before its
/// parent.
fn assemble(mut arena: Vec<Pending>) -> ParsedTree {
    let mut built: Vec<Option<Node>> = Vec::with_capacity(arena.len());
    built.resize_with(arena.len(), || None);

    for (idx, pending) in arena.iter_mut().enumerate().rev() {
        let children: Vec<Node> = pending
            .children
            .iter()
            .filter_map(|&child| built[child].take())
            .collect();
        let node = match pending.name.take() {
            Some(normalized) => Node {
                kind: resolve_kind(normalized.marked_dir, !children.is_empty()),
                name: normalized.name,
                children,
            },
            None => Node::dir(String::new(), children),
        };
        built[idx] = Some(node);
    }

    let root = built
        .into_iter()
        .next()
        .flatten()
        .unwrap_or_else(|| Node::dir(String::new(), Vec::new()));
    let root_name = root.name.clone();
    ParsedTree { root, root_name }
}
