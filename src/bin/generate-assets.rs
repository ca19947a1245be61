#![forbid(unsafe_code)]
//! Writes release assets: shell completions, the man page, and sample inputs.
//!
//! Usage: `generate-assets [OUT_DIR]` (default `dist`).

use anyhow::Context;
use clap::{CommandFactory, ValueEnum};
use clap_complete::{generate_to, Shell};
use clap_mangen::Man;
use std::fs;
use std::path::{Path, PathBuf};
use tree2fs::cli::Args;
use tree2fs::tree::{render_tree, GlyphStyle};
use tree2fs::Node;

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("dist"));

    write_completions(&out_dir.join("completions"))?;
    write_man_page(&out_dir.join("man"))?;
    write_samples(&out_dir.join("samples"))?;

    eprintln!("generated assets under {}", out_dir.display());
    Ok(())
}

fn write_completions(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("{}: create failed", dir.display()))?;
    for shell in Shell::value_variants() {
        let mut cmd = Args::command();
        generate_to(*shell, &mut cmd, "tree2fs", dir)
            .with_context(|| format!("{shell} completions"))?;
    }
    Ok(())
}

fn write_man_page(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("{}: create failed", dir.display()))?;
    let mut buffer = Vec::new();
    Man::new(Args::command()).render(&mut buffer)?;
    fs::write(dir.join("tree2fs.1"), buffer)?;
    Ok(())
}

/// The same layout in every supported input style.
fn write_samples(dir: &Path) -> anyhow::Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("{}: create failed", dir.display()))?;
    let sample = Node::dir(
        "project",
        vec![
            Node::file("README.md"),
            Node::dir("src", vec![Node::file("main.py"), Node::file("utils.py")]),
            Node::dir("tests", vec![Node::file("test_main.py")]),
        ],
    );
    fs::write(dir.join("tree.txt"), render_tree(&sample, GlyphStyle::Unicode))?;
    fs::write(dir.join("tree-ascii.txt"), render_tree(&sample, GlyphStyle::Ascii))?;
    fs::write(
        dir.join("tree.json"),
        "{\n  \"project/\": {\n    \"README.md\": null,\n    \"src\": [\"main.py\", \"utils.py\"],\n    \"tests\": [\"test_main.py\"]\n  }\n}\n",
    )?;
    Ok(())
}
