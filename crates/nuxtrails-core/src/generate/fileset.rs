//! Generated file sets and flushing

use crate::workspace::Workspace;
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;
use tokio::fs;

/// One stage's output: workspace-relative paths and their literal content
///
/// Built in memory first, then flushed in one pass. Flushing always
/// overwrites; there is no existing-file check in the cascade.
#[derive(Debug, Default)]
pub struct GeneratedFileSet {
    files: Vec<(PathBuf, String)>,
}

impl GeneratedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the set, path relative to the workspace root
    pub fn add(&mut self, relative: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.push((relative.into(), content.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Relative paths in insertion order
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter().map(|(path, _)| path)
    }

    /// Content for one relative path, if present
    pub fn content(&self, relative: impl Into<PathBuf>) -> Option<&str> {
        let relative = relative.into();
        self.files
            .iter()
            .find(|(path, _)| *path == relative)
            .map(|(_, content)| content.as_str())
    }

    /// Write every file under the workspace root, creating parent
    /// directories as needed. Returns the absolute paths written, for
    /// compensation on downstream failure.
    ///
    /// A flush is all-or-nothing: when a write fails, files this flush
    /// already wrote are removed before the error returns, so a failing
    /// stage never leaves part of its output behind.
    pub async fn flush(&self, ws: &Workspace) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.files.len());

        for (relative, content) in &self.files {
            let target = ws.join(relative);
            if let Some(parent) = target.parent() {
                if let Err(e) = fs::create_dir_all(parent).await {
                    discard(&written).await;
                    return Err(e).with_context(|| {
                        format!("failed to create directory: {}", parent.display())
                    });
                }
            }
            if let Err(e) = fs::write(&target, content).await {
                discard(&written).await;
                return Err(e)
                    .with_context(|| format!("failed to write file: {}", target.display()));
            }
            written.push(target);
        }

        Ok(written)
    }
}

/// Best-effort removal of files a failed flush already wrote
async fn discard(written: &[PathBuf]) {
    for path in written {
        if let Err(e) = fs::remove_file(path).await {
            eprintln!(
                "{} could not remove {}: {}",
                "Warning:".yellow(),
                path.display(),
                e
            );
        }
    }
}
