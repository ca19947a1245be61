//! Line classification: split one raw line into its indentation and name.

use super::ParseOptions;
use crate::error::{ParseErrorKind, TreeParseError};

/// Glyphs that open a branch connector when followed by dashes.
const BRANCH_HEADS: &[char] = &['├', '└', '┣', '┗', '╰', '|', '`', '+'];
/// Vertical continuation lines of open ancestors.
const RAILS: &[char] = &['│', '┃', '|'];
const DASHES: &[char] = &['─', '━', '-'];

/// Indentation of a line, measured in display columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Indent {
    /// Whitespace and rails only; the name starts at `column`.
    Plain { column: usize },
    /// A branch connector starts at `column` and is `segment` columns wide
    /// (head, dashes, and one separating space whether or not it is present).
    Branch { column: usize, segment: usize },
}

impl Indent {
    pub(crate) fn column(self) -> usize {
        match self {
            Indent::Plain { column } | Indent::Branch { column, .. } => column,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassifiedLine<'a> {
    /// 1-based line number in the input.
    pub number: usize,
    pub raw: &'a str,
    pub indent: Indent,
    /// Name remnant, still carrying any trailing directory marker.
    pub name: &'a str,
}

impl ClassifiedLine<'_> {
    /// Nesting level of this line for the given indentation unit, with columns
    /// counted from `origin` (the column of the first line).
    pub(crate) fn depth(&self, unit: usize, origin: usize) -> Result<usize, TreeParseError> {
        let Some(width) = self.indent.column().checked_sub(origin) else {
            return Err(self.error(ParseErrorKind::AboveRoot));
        };
        // The connector sits one level above the name it introduces.
        let offset = match self.indent {
            Indent::Plain { .. } => 0,
            Indent::Branch { .. } => 1,
        };
        if width % unit != 0 {
            return Err(self.error(ParseErrorKind::Misaligned { width, unit }));
        }
        Ok(width / unit + offset)
    }

    pub(crate) fn error(&self, kind: ParseErrorKind) -> TreeParseError {
        TreeParseError::at_line(kind, self.number, self.raw)
    }
}

/// Strip connector glyphs from `raw` and measure what was stripped.
pub(crate) fn classify<'a>(
    number: usize,
    raw: &'a str,
    options: &ParseOptions,
) -> Result<ClassifiedLine<'a>, TreeParseError> {
    let line = raw.trim_end();
    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let malformed = || TreeParseError::at_line(ParseErrorKind::MalformedConnector, number, raw);

    let mut column = 0;
    let mut i = 0;
    let mut branch = None;
    while let Some(&(_, ch)) = chars.get(i) {
        if ch == '\t' {
            column += options.indent_width;
            i += 1;
            continue;
        }
        if is_blank(ch) {
            column += 1;
            i += 1;
            continue;
        }
        let dashes = chars[i + 1..]
            .iter()
            .take_while(|(_, c)| DASHES.contains(c))
            .count();
        if dashes > 0 && BRANCH_HEADS.contains(&ch) {
            i += 1 + dashes;
            let gap = chars[i..]
                .iter()
                .take_while(|(_, c)| is_blank(*c) || *c == '\t')
                .count();
            i += gap;
            branch = Some(Indent::Branch {
                column,
                segment: dashes + 2,
            });
            break;
        }
        if RAILS.contains(&ch) && rail_continues(chars.get(i + 1).map(|&(_, c)| c)) {
            column += 1;
            i += 1;
            continue;
        }
        if is_box_drawing(ch) {
            return Err(malformed());
        }
        // Anything else (including a lone ASCII ` or +) starts the name.
        break;
    }

    let start = chars.get(i).map_or(line.len(), |&(idx, _)| idx);
    let mut name = &line[start..];
    if options.comments {
        name = strip_comment(name);
    }
    if name.is_empty() {
        return Err(TreeParseError::at_line(ParseErrorKind::EmptyName, number, raw));
    }
    if name.starts_with(is_box_drawing) {
        return Err(malformed());
    }

    Ok(ClassifiedLine {
        number,
        raw,
        indent: branch.unwrap_or(Indent::Plain { column }),
        name,
    })
}

/// A rail is indentation only when followed by whitespace, another connector,
/// or the end of the line; `|notes` is a name.
fn rail_continues(next: Option<char>) -> bool {
    next.map_or(true, |c| {
        is_blank(c) || c == '\t' || RAILS.contains(&c) || BRANCH_HEADS.contains(&c)
    })
}

/// Columns per nesting level: the narrowest branch connector in the document,
/// or the configured plain-indentation width when there are no connectors.
pub(crate) fn indent_unit<'a, 'b: 'a>(
    lines: impl IntoIterator<Item = &'a ClassifiedLine<'b>>,
    options: &ParseOptions,
) -> usize {
    lines
        .into_iter()
        .filter_map(|line| match line.indent {
            Indent::Branch { segment, .. } => Some(segment),
            Indent::Plain { .. } => None,
        })
        .min()
        .unwrap_or(options.indent_width)
        .max(1)
}

/// Whether a line is a full-line `#` comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Drop a trailing remark introduced by whitespace followed by `#`.
fn strip_comment(name: &str) -> &str {
    name.match_indices('#')
        .find(|&(idx, _)| idx > 0 && name[..idx].ends_with(char::is_whitespace))
        .map_or(name, |(idx, _)| name[..idx].trim_end())
}

fn is_blank(ch: char) -> bool {
    ch == ' ' || ch == '\u{a0}'
}

fn is_box_drawing(ch: char) -> bool {
    ('\u{2500}'..='\u{257f}').contains(&ch)
}
