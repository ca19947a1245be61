//! Console output: dry-run plans and build summaries.

use std::borrow::Cow;
use std::io::{self, Write};
use std::path::Path;

use crate::builder::{Action, BuildSummary};

/// Escape characters in a name that would drive the terminal instead of being
/// printed: control characters and bidi overrides that reorder a path on screen.
pub fn sanitize_terminal_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(needs_escape) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        if needs_escape(c) {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

fn needs_escape(c: char) -> bool {
    c.is_control() || matches!(c, '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}')
}

/// One line describing an action, with paths shown relative to `base`.
pub fn action_line(action: &Action, base: &Path, dry_run: bool) -> String {
    let (verb, path, suffix) = match action {
        Action::CreateDir(p) if dry_run => ("would create", p, "/"),
        Action::CreateDir(p) => ("created", p, "/"),
        Action::CreateFile(p) if dry_run => ("would create", p, ""),
        Action::CreateFile(p) => ("created", p, ""),
        Action::ReuseDir(p) => ("exists", p, "/"),
        Action::SkipFile(p) => ("skipped", p, ""),
    };
    let shown = path.strip_prefix(base).unwrap_or(path);
    format!(
        "{verb:>12}  {}{suffix}",
        sanitize_terminal_text(&shown.to_string_lossy())
    )
}

/// Write every action of `summary`, one per line.
pub fn write_plan<W: Write>(w: &mut W, summary: &BuildSummary, base: &Path) -> io::Result<()> {
    for action in &summary.actions {
        writeln!(w, "{}", action_line(action, base, summary.dry_run))?;
    }
    Ok(())
}

/// Write the closing counts of a build.
pub fn write_summary<W: Write>(w: &mut W, summary: &BuildSummary) -> io::Result<()> {
    let created = if summary.dry_run {
        "to create"
    } else {
        "created"
    };
    writeln!(w, "Summary:")?;
    writeln!(w, "  directories {created}: {}", summary.dirs_created())?;
    writeln!(w, "  files {created}: {}", summary.files_created())?;
    if summary.dirs_reused() > 0 {
        writeln!(w, "  existing directories: {}", summary.dirs_reused())?;
    }
    if summary.files_skipped() > 0 {
        writeln!(w, "  existing files skipped: {}", summary.files_skipped())?;
    }
    Ok(())
}
