//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the external
//! collaborators reached through ports. Name validation errors are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Destination directory is already present.
    #[error("Directory '{}' already exists", path.display())]
    DirectoryExists { path: PathBuf },

    /// Template could not be downloaded or unpacked.
    #[error("Failed to download template from {source_desc}: {reason}")]
    FetchFailed { source_desc: String, reason: String },

    /// Manifest or source file could not be rewritten.
    #[error("Failed to update {}: {reason}", path.display())]
    RewriteFailed { path: PathBuf, reason: String },

    /// The package manager settings file could not be written.
    #[error("Failed to write {}: {reason}", path.display())]
    EnvWriteFailed { path: PathBuf, reason: String },

    /// Dependency install exited non-zero or could not start.
    #[error("Dependency install failed (`{command}`): {reason}")]
    DependencyInstallFailed { command: String, reason: String },

    /// Compile check failed. Never fatal; carried as a warning.
    #[error("Build failed (`{command}`): {reason}")]
    BuildFailed { command: String, reason: String },

    /// A filesystem port operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// An external program could not be started.
    #[error("Could not run `{program}`: {reason}")]
    CommandSpawnFailed { program: String, reason: String },

    /// The name prompt was aborted or its input could not be read.
    #[error("Could not read the project name: {reason}")]
    PromptFailed { reason: String },

    /// Adapter state lock was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DirectoryExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing directory first".into(),
            ],
            Self::FetchFailed { .. } => vec![
                "Check your internet connection".into(),
                "Make sure github.com is reachable from this machine".into(),
            ],
            Self::RewriteFailed { path, .. } => vec![
                format!("Could not update: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::EnvWriteFailed { path, .. } | Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::DependencyInstallFailed { command, .. } => vec![
                "Make sure Node.js and npm are installed and in your PATH".into(),
                format!("Try running `{}` yourself to see the full output", command),
            ],
            Self::BuildFailed { .. } => vec![
                "The project has been created; fix the build errors later".into(),
                "Run `cargo build` inside the project directory".into(),
            ],
            Self::CommandSpawnFailed { program, .. } => vec![
                format!("Ensure `{}` is installed and in your PATH", program),
            ],
            Self::PromptFailed { .. } => vec![
                "Pass the name as an argument: create-rust-on-vercel <project-name>".into(),
            ],
            Self::LockPoisoned => vec!["This is a bug; please report it".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::DirectoryExists { .. } | Self::PromptFailed { .. } => ErrorCategory::Validation,
            Self::FetchFailed { .. }
            | Self::DependencyInstallFailed { .. }
            | Self::BuildFailed { .. }
            | Self::CommandSpawnFailed { .. } => ErrorCategory::External,
            Self::RewriteFailed { .. }
            | Self::EnvWriteFailed { .. }
            | Self::FilesystemError { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
