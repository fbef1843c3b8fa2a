//! Application layer.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, IdentifierRewriter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Outcomes**: How a step ended (success, tolerated, fatal)
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! text-rewriting rules itself. Those live in `crate::domain::manifest`.

pub mod error;
pub mod outcome;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{IdentifierRewriter, NameSource, ScaffoldService, resolve_name};

// Re-export port traits (for adapter implementation)
pub use ports::{CommandRunner, Filesystem, NamePrompt, ProgressReporter, TemplateFetcher};

pub use error::ApplicationError;
pub use outcome::StepOutcome;
