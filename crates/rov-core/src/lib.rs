//! rov-core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for
//! `create-rust-on-vercel`, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      rov-cli (create-rust-on-vercel)    │
//! │   (prompt, reporter, config, exit code) │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │  (ScaffoldService, IdentifierRewriter)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │ (Fetcher, Filesystem, Runner, Reporter) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     rov-adapters (Infrastructure)       │
//! │ (GithubTarballFetcher, LocalFilesystem, │
//! │          TokioCommandRunner)            │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rov_core::prelude::*;
//!
//! let service = ScaffoldService::new(fetcher, filesystem, runner);
//! let report = service
//!     .scaffold(NameSource::Argument("my-app".into()), &prompt, cwd, &SilentReporter)
//!     .await?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        NameSource, ScaffoldService, StepOutcome,
        ports::{
            CommandOutput, CommandRunner, DirEntry, EntryKind, Filesystem, NamePrompt,
            ProgressReporter, SilentReporter, TemplateFetcher,
        },
    };
    pub use crate::domain::{
        BuildStatus, CommandSpec, Destination, Phase, ProjectName, ScaffoldReport, Step,
        TemplateLocation, Toolchain,
    };
    pub use crate::error::{RovError, RovResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
