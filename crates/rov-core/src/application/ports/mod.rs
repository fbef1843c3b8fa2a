//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `rov-adapters` and the CLI
//! implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateFetcher`: Template retrieval
//!   - `CommandRunner`: External programs (package manager, compiler)
//!   - `NamePrompt`: Interactive project name question
//!   - `ProgressReporter`: Step progress display

pub mod output;

pub use output::{
    CommandOutput, CommandRunner, DirEntry, EntryKind, Filesystem, NamePrompt,
    ProgressReporter, SilentReporter, TemplateFetcher,
};
