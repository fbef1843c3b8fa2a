use std::path::PathBuf;

use crate::domain::value_objects::ProjectName;

/// What the identifier rewriter touched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub package_manifest_updated: bool,
    pub build_manifest_updated: bool,
    /// Source files that contained the placeholder and were rewritten.
    pub sources_rewritten: usize,
}

/// Result of the compile check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    Built,
    /// The build failed; the project is still usable.
    Failed(String),
}

impl BuildStatus {
    pub fn is_built(&self) -> bool {
        matches!(self, Self::Built)
    }
}

/// Summary of a successful scaffold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project: ProjectName,
    pub destination: PathBuf,
    pub rewrite: RewriteSummary,
    pub build: BuildStatus,
}
