#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use tree2fs::builder::{BuildConfig, FilesystemBuilder};
use tree2fs::cli::Args;
use tree2fs::render;
use tree2fs::tree::{self, base_dir_name, should_skip_root, GlyphStyle};

fn main() {
    let args = Args::parse().validated();
    init_tracing(log_level(args.verbose, args.quiet));

    if let Err(e) = ctrlc::set_handler(|| {
        eprintln!("\ntree2fs: interrupted by user");
        std::process::exit(130);
    }) {
        debug!("failed to install Ctrl-C handler: {e}");
    }

    if let Err(e) = run_app(&args) {
        eprintln!("tree2fs: {e:#}");
        std::process::exit(1);
    }
}

fn run_app(args: &Args) -> Result<()> {
    let format = args.input_format();
    let options = args.parse_options();
    debug!(?format, ?options, "parsing {}", args.tree_file.display());

    let parsed = tree::load_tree(&args.tree_file, format, &options)?;
    let (dirs, files) = parsed.root.counts();
    info!("parsed {dirs} directories and {files} files");

    let base_path = resolve_base_dir(&args.base_dir)?;

    // Skip-root only makes sense for a named directory root.
    let skip_root = !args.no_skip_root
        && parsed.root.is_dir()
        && base_dir_name(&base_path).is_some_and(|name| should_skip_root(&parsed.root_name, &name));
    if skip_root {
        info!("skipping root folder '{}' (already in it)", parsed.root_name);
    }

    let mut stdout = io::stdout().lock();
    if args.verbose > 0 {
        let style = if args.ascii {
            GlyphStyle::Ascii
        } else {
            GlyphStyle::Unicode
        };
        for line in tree::render_tree(&parsed.root, style).lines() {
            writeln!(stdout, "{}", render::sanitize_terminal_text(line))?;
        }
        writeln!(stdout)?;
    }

    info!("building structure in {}", base_path.display());
    let mut builder = FilesystemBuilder::new(BuildConfig {
        base_dir: base_path.clone(),
        dry_run: args.dry_run,
    });
    builder.build(&parsed.root, skip_root)?;
    let summary = builder.into_summary();

    if !args.quiet {
        if args.dry_run {
            render::write_plan(&mut stdout, &summary, &base_path)?;
            writeln!(stdout)?;
        }
        render::write_summary(&mut stdout, &summary)?;
        if !args.dry_run {
            writeln!(stdout, "\nStructure created successfully.")?;
        }
    }
    Ok(())
}

/// `.` (the default) means the current working directory.
fn resolve_base_dir(base_dir: &Path) -> Result<PathBuf> {
    if base_dir.as_os_str().is_empty() || base_dir == Path::new(".") {
        std::env::current_dir().context("failed to resolve current directory")
    } else {
        Ok(base_dir.to_path_buf())
    }
}

fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the level picked from `-v`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
