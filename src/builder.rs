//! Filesystem materialization of a parsed tree.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::BuildError;
use crate::tree::Node;

/// Where and how to materialize a tree.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Directory the tree is created in.
    pub base_dir: PathBuf,
    /// Report what would happen without touching the filesystem.
    pub dry_run: bool,
}

/// One step taken (or planned, in dry-run mode) by the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    CreateDir(PathBuf),
    CreateFile(PathBuf),
    /// Directory already present; its contents are merged into.
    ReuseDir(PathBuf),
    /// File already present; left untouched.
    SkipFile(PathBuf),
}

/// Outcome of a build, in the order actions were taken.
#[derive(Debug, Clone, Default)]
pub struct BuildSummary {
    pub dry_run: bool,
    pub actions: Vec<Action>,
}

impl BuildSummary {
    pub fn dirs_created(&self) -> usize {
        self.count(|a| matches!(a, Action::CreateDir(_)))
    }

    pub fn files_created(&self) -> usize {
        self.count(|a| matches!(a, Action::CreateFile(_)))
    }

    pub fn dirs_reused(&self) -> usize {
        self.count(|a| matches!(a, Action::ReuseDir(_)))
    }

    pub fn files_skipped(&self) -> usize {
        self.count(|a| matches!(a, Action::SkipFile(_)))
    }

    fn count(&self, pred: impl Fn(&Action) -> bool) -> usize {
        self.actions.iter().filter(|a| pred(*a)).count()
    }
}

/// Creates directories and empty files for a [`Node`] tree.
pub struct FilesystemBuilder {
    config: BuildConfig,
    summary: BuildSummary,
}

impl FilesystemBuilder {
    pub fn new(config: BuildConfig) -> Self {
        let summary = BuildSummary {
            dry_run: config.dry_run,
            actions: Vec::new(),
        };
        Self { config, summary }
    }

    /// Materialize `root` under the base directory.
    ///
    /// With `skip_root` (or a synthetic root) the root's children are created
    /// directly in the base directory. Parents are always handled before their
    /// children because the traversal is pre-order.
    pub fn build(&mut self, root: &Node, skip_root: bool) -> Result<(), BuildError> {
        let flatten = skip_root || root.is_synthetic();
        let base = self.config.base_dir.clone();

        if !self.config.dry_run {
            fs::create_dir_all(&base).map_err(|source| BuildError::Io {
                path: base.clone(),
                source,
            })?;
        }

        let mut segments: Vec<&str> = Vec::new();
        for entry in root.walk() {
            let level = if flatten {
                if entry.depth == 0 {
                    continue;
                }
                entry.depth - 1
            } else {
                entry.depth
            };
            segments.truncate(level);
            segments.push(&entry.node.name);

            let path = segments.iter().fold(base.clone(), |path, seg| path.join(seg));
            if entry.node.is_dir() {
                self.ensure_dir(&path)?;
            } else {
                self.ensure_file(&path)?;
            }
        }

        debug!(
            actions = self.summary.actions.len(),
            dry_run = self.config.dry_run,
            "build finished"
        );
        Ok(())
    }

    pub fn summary(&self) -> &BuildSummary {
        &self.summary
    }

    pub fn into_summary(self) -> BuildSummary {
        self.summary
    }

    fn ensure_dir(&mut self, path: &Path) -> Result<(), BuildError> {
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.is_dir() => {
                debug!("directory exists: {}", path.display());
                self.summary.actions.push(Action::ReuseDir(path.to_path_buf()));
                Ok(())
            }
            Ok(_) => Err(BuildError::NotADirectory {
                path: path.to_path_buf(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if !self.config.dry_run {
                    fs::create_dir(path).map_err(|source| BuildError::Io {
                        path: path.to_path_buf(),
                        source,
                    })?;
                    info!("created directory {}", path.display());
                }
                self.summary.actions.push(Action::CreateDir(path.to_path_buf()));
                Ok(())
            }
            Err(source) => Err(BuildError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    fn ensure_file(&mut self, path: &Path) -> Result<(), BuildError> {
        match fs::symlink_metadata(path) {
            Ok(meta) if meta.is_file() => {
                debug!("file exists, skipping: {}", path.display());
                self.summary.actions.push(Action::SkipFile(path.to_path_buf()));
                Ok(())
            }
            Ok(_) => Err(BuildError::NotAFile {
                path: path.to_path_buf(),
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                if !self.config.dry_run {
                    OpenOptions::new()
                        .write(true)
                        .create_new(true)
                        .open(path)
                        .map_err(|source| BuildError::Io {
                            path: path.to_path_buf(),
                            source,
                        })?;
                    info!("created file {}", path.display());
                }
                self.summary.actions.push(Action::CreateFile(path.to_path_buf()));
                Ok(())
            }
            Err(source) => Err(BuildError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
