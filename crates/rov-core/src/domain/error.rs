// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (they travel inside step outcomes)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Project name is required")]
    MissingName,

    #[error("Invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    #[error("{file} is not a valid manifest: {reason}")]
    InvalidManifest { file: String, reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingName => vec![
                "Pass the project name as an argument".into(),
                "Example: create-rust-on-vercel my-rust-app".into(),
            ],
            Self::InvalidName { name, .. } => vec![
                format!("'{}' cannot be used as a directory name here", name),
                "Use a plain name without path separators".into(),
                "Examples: my-app, my_app, api2".into(),
            ],
            Self::InvalidManifest { file, .. } => vec![
                format!("The template's {} could not be parsed", file),
                "The template may have changed; please report this issue".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingName | Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::InvalidManifest { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
