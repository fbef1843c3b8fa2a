//! Propagates the project name into the freshly fetched template.
//!
//! Two manifests get their `name` set to the literal project name; every
//! `.rs` file below the project root gets the placeholder token replaced by
//! the name's identifier form.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, trace};

use crate::{
    application::{
        ApplicationError,
        ports::{EntryKind, Filesystem},
    },
    domain::{
        Destination, DomainError, ProjectName, RewriteSummary,
        manifest,
        template::{BUILD_MANIFEST, PACKAGE_MANIFEST, is_source_file},
    },
    error::{RovError, RovResult},
};

pub struct IdentifierRewriter<'a> {
    filesystem: &'a dyn Filesystem,
    name: &'a ProjectName,
    identifier: String,
}

impl<'a> IdentifierRewriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, name: &'a ProjectName) -> Self {
        Self {
            filesystem,
            name,
            identifier: name.identifier(),
        }
    }

    /// Rewrite manifests and sources under `destination`.
    #[instrument(skip_all, fields(project = %self.name))]
    pub fn rewrite(&self, destination: &Destination) -> RovResult<RewriteSummary> {
        let package_manifest_updated = self.rewrite_package_manifest(destination)?;
        let build_manifest_updated = self.rewrite_build_manifest(destination)?;
        let sources_rewritten = self.rewrite_sources(destination.root())?;

        debug!(
            package_manifest_updated,
            build_manifest_updated, sources_rewritten, "Identifiers rewritten"
        );

        Ok(RewriteSummary {
            package_manifest_updated,
            build_manifest_updated,
            sources_rewritten,
        })
    }

    fn rewrite_package_manifest(&self, destination: &Destination) -> RovResult<bool> {
        let path = destination.file(PACKAGE_MANIFEST);
        if !self.filesystem.is_file(&path) {
            return Ok(false);
        }

        let contents = self.read(&path)?;
        let updated = manifest::set_package_name(&contents, self.name.as_str())
            .map_err(|e| rewrite_failed(&path, e))?;
        self.write(&path, &updated)?;
        Ok(true)
    }

    fn rewrite_build_manifest(&self, destination: &Destination) -> RovResult<bool> {
        let path = destination.file(BUILD_MANIFEST);
        if !self.filesystem.is_file(&path) {
            return Ok(false);
        }

        let contents = self.read(&path)?;
        match manifest::set_crate_name(&contents, self.name.as_str()) {
            Some(updated) => {
                self.write(&path, &updated)?;
                Ok(true)
            }
            None => {
                debug!(path = %path.display(), "No name line in build manifest");
                Ok(false)
            }
        }
    }

    /// Walk the tree with an explicit stack; order does not matter because
    /// every replacement is local to one file.
    fn rewrite_sources(&self, root: &Path) -> RovResult<usize> {
        let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];
        let mut rewritten = 0;

        while let Some(dir) = pending.pop() {
            let entries = self
                .filesystem
                .read_dir(&dir)
                .map_err(|e| rewrite_failed(&dir, e))?;

            for entry in entries {
                match entry.kind {
                    EntryKind::Directory => pending.push(entry.path),
                    EntryKind::File if entry.file_name().is_some_and(is_source_file) => {
                        if self.rewrite_source(&entry.path)? {
                            rewritten += 1;
                        }
                    }
                    EntryKind::File | EntryKind::Other => {}
                }
            }
        }

        Ok(rewritten)
    }

    fn rewrite_source(&self, path: &Path) -> RovResult<bool> {
        let contents = self.read(path)?;
        match manifest::replace_placeholder(&contents, &self.identifier) {
            Some(updated) => {
                trace!(path = %path.display(), "Placeholder replaced");
                self.write(path, &updated)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn read(&self, path: &Path) -> RovResult<String> {
        self.filesystem
            .read_to_string(path)
            .map_err(|e| rewrite_failed(path, e))
    }

    fn write(&self, path: &Path, contents: &str) -> RovResult<()> {
        self.filesystem
            .write_file(path, contents)
            .map_err(|e| rewrite_failed(path, e))
    }
}

fn rewrite_failed(path: &Path, cause: impl Into<RovError>) -> RovError {
    let reason = match cause.into() {
        RovError::Application(ApplicationError::FilesystemError { reason, .. }) => reason,
        RovError::Domain(DomainError::InvalidManifest { reason, .. }) => reason,
        other => other.to_string(),
    };
    ApplicationError::RewriteFailed {
        path: path.to_path_buf(),
        reason,
    }
    .into()
}
