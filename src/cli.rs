use clap::Parser;
use std::path::PathBuf;

use crate::tree::{InputFormat, ParseOptions, DEFAULT_INDENT_WIDTH};

const AFTER_HELP: &str = "\
Examples:
  tree2fs tree.txt                    # Create structure from tree.txt
  tree2fs tree.txt --dry-run          # Preview what would be created
  tree2fs tree.txt --base-dir /tmp    # Create in /tmp
  tree2fs tree.txt --no-skip-root     # Always create the root folder
  tree2fs layout.json                 # JSON layouts are detected by extension

Tree file format:
  project/
  ├── README.md
  ├── src/
  │   ├── main.py
  │   └── utils.py
  └── tests/
      └── test_main.py";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "tree2fs",
    version,
    about = "Convert tree-formatted text into filesystem structures",
    after_help = AFTER_HELP
)]
pub struct Args {
    /// Path to the tree file
    pub tree_file: PathBuf,

    /// Input file format (default: inferred from the file extension)
    #[arg(short = 'f', long = "format", value_enum)]
    pub format: Option<InputFormat>,

    /// Base directory to create the structure in
    #[arg(long = "base-dir", default_value = ".")]
    pub base_dir: PathBuf,

    /// Show what would be created without creating anything
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Print detailed information (repeat for more)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only print errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Do not skip the root folder even if already inside it
    #[arg(long = "no-skip-root")]
    pub no_skip_root: bool,

    /// Columns per level for plain-space indentation (minimum 1)
    #[arg(
        long = "indent-width",
        env = "TREE2FS_INDENT_WIDTH",
        default_value_t = DEFAULT_INDENT_WIDTH
    )]
    pub indent_width: usize,

    /// Treat '#' as part of names instead of starting a comment
    #[arg(long = "no-comments")]
    pub no_comments: bool,

    /// Use ASCII connectors in the verbose tree preview
    #[arg(long = "ascii")]
    pub ascii: bool,
}

impl Args {
    /// Enforce invariants after parsing.
    pub fn validated(mut self) -> Self {
        if self.indent_width == 0 {
            self.indent_width = 1;
        }
        if self.quiet {
            self.verbose = 0;
        }
        self
    }

    /// Explicit `--format`, or a guess from the tree file's extension.
    pub fn input_format(&self) -> InputFormat {
        self.format
            .unwrap_or_else(|| InputFormat::from_path(&self.tree_file))
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            indent_width: self.indent_width,
            comments: !self.no_comments,
        }
    }
}
