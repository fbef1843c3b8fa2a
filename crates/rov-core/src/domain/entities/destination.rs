use std::path::{Path, PathBuf};

use crate::domain::value_objects::ProjectName;

/// The directory a project is written into: `<cwd>/<name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    root: PathBuf,
}

impl Destination {
    pub fn resolve(cwd: impl AsRef<Path>, name: &ProjectName) -> Self {
        Self {
            root: cwd.as_ref().join(name.as_str()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of a file directly under the project root.
    pub fn file(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }
}
