//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use case "scaffold a project".

pub mod identifier_rewriter;
pub mod name_resolver;
pub mod scaffold_service;

pub use identifier_rewriter::IdentifierRewriter;
pub use name_resolver::{DEFAULT_NAME, NAME_QUESTION, NameSource, resolve_name};
pub use scaffold_service::ScaffoldService;
