//! Local template copy.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::{debug, info};
use walkdir::WalkDir;

use rov_core::{
    application::{ApplicationError, ports::TemplateFetcher},
    error::{Context, RovError, RovResult},
};

/// Version-control metadata that never belongs in a new project.
const SKIPPED_DIRS: &[&str] = &[".git"];

/// Copies a template from a directory on disk.
#[derive(Debug, Clone)]
pub struct DirectoryFetcher {
    source: PathBuf,
}

impl DirectoryFetcher {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

fn failed(source: &Path, reason: impl Into<String>) -> RovError {
    ApplicationError::FetchFailed {
        source_desc: source.display().to_string(),
        reason: reason.into(),
    }
    .into()
}

/// Copy regular files and directories below `source` into `destination`.
/// Symlinks are skipped.
fn copy_tree(source: &Path, destination: &Path) -> RovResult<usize> {
    if !source.is_dir() {
        return Err(failed(source, "template directory does not exist"));
    }

    std::fs::create_dir_all(destination)
        .map_err(|e| failed(source, format!("failed to create destination: {e}")))?;

    let walker = WalkDir::new(source)
        .min_depth(1)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| {
            !(e.file_type().is_dir()
                && e.file_name()
                    .to_str()
                    .is_some_and(|name| SKIPPED_DIRS.contains(&name)))
        });

    let mut files = 0;
    for entry in walker {
        let entry = entry.map_err(|e| failed(source, format!("directory walk error: {e}")))?;
        let relative = entry.path().strip_prefix(source).map_err(|_| {
            failed(
                source,
                format!("failed to relativise '{}'", entry.path().display()),
            )
        })?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            std::fs::create_dir_all(&target)
                .map_err(|e| failed(source, format!("failed to create '{}': {e}", target.display())))?;
        } else if entry.file_type().is_file() {
            std::fs::copy(entry.path(), &target)
                .map_err(|e| failed(source, format!("failed to copy '{}': {e}", relative.display())))?;
            files += 1;
        } else {
            debug!(path = %entry.path().display(), "skipping non-regular template entry");
        }
    }

    if files == 0 {
        return Err(failed(source, "template directory contains no files"));
    }
    Ok(files)
}

#[async_trait]
impl TemplateFetcher for DirectoryFetcher {
    fn describe(&self) -> String {
        format!("dir:{}", self.source.display())
    }

    async fn fetch(&self, destination: &Path) -> RovResult<()> {
        let source = self.source.clone();
        let dest = destination.to_path_buf();

        let files = tokio::task::spawn_blocking(move || copy_tree(&source, &dest))
            .await
            .context("Copy task failed")??;

        info!(files, destination = %destination.display(), "template copied");
        Ok(())
    }
}
