//! Core domain layer.
//!
//! Pure logic only: project names, the destination path, the template's
//! fixed identifiers, manifest text rewriting and the scaffold lifecycle.
//! All I/O goes through the ports in `crate::application::ports`.
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or process calls
//! - **Immutable values**: Everything is Clone + PartialEq

pub mod entities;
pub mod error;
pub mod manifest;
pub mod phase;
pub mod value_objects;

pub use entities::{
    BuildStatus, Destination, RewriteSummary, ScaffoldReport, TemplateLocation, Toolchain,
    template,
};
pub use error::{DomainError, ErrorCategory};
pub use phase::{Phase, Step};
pub use value_objects::{CommandSpec, ProjectName};
