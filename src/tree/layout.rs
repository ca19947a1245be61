//! Serialize a tree back into diagram text.

use super::Node;

/// Glyph set used when drawing connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GlyphStyle {
    #[default]
    Unicode,
    Ascii,
}

struct Glyphs {
    tee: &'static str,
    corner: &'static str,
    rail: &'static str,
    blank: &'static str,
}

impl GlyphStyle {
    fn glyphs(self) -> Glyphs {
        match self {
            GlyphStyle::Unicode => Glyphs {
                tee: "\u{251c}\u{2500}\u{2500} ",    // ├──
                corner: "\u{2514}\u{2500}\u{2500} ", // └──
                rail: "\u{2502}   ",                 // │
                blank: "    ",
            },
            GlyphStyle::Ascii => Glyphs {
                tee: "|-- ",
                corner: "`-- ",
                rail: "|   ",
                blank: "    ",
            },
        }
    }
}

/// Render `root` as tree text, one entry per line, directories suffixed with `/`.
///
/// A synthetic root has no line of its own; its children are drawn with
/// connectors at the left margin, which parses back to a synthetic root.
///
/// Names below the root sit after a connector and always read back intact. A
/// root line starting with `#` reads back as a comment unless the text is
/// parsed with comments disabled.
pub fn render_tree(root: &Node, style: GlyphStyle) -> String {
    let glyphs = style.glyphs();
    let mut out = String::new();

    // ancestor_is_last[d] = true means the open ancestor at depth d+1 was the
    // last of its siblings, so no rail continues below it.
    let mut ancestor_is_last: Vec<bool> = Vec::new();

    for entry in root.walk() {
        if entry.depth == 0 {
            if !root.is_synthetic() {
                out.push_str(&display_name(entry.node));
                out.push('\n');
            }
            continue;
        }

        ancestor_is_last.truncate(entry.depth - 1);
        for &last in &ancestor_is_last {
            out.push_str(if last { glyphs.blank } else { glyphs.rail });
        }
        out.push_str(if entry.is_last {
            glyphs.corner
        } else {
            glyphs.tee
        });
        out.push_str(&display_name(entry.node));
        out.push('\n');

        ancestor_is_last.push(entry.is_last);
    }

    out
}

fn display_name(node: &Node) -> String {
    if node.is_dir() {
        format!("{}/", node.name)
    } else {
        node.name.clone()
    }
}
