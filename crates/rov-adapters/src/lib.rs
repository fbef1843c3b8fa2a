//! Infrastructure adapters for create-rust-on-vercel.
//!
//! This crate implements the ports defined in `rov_core::application::ports`.
//! It contains all network, filesystem and process I/O.

pub mod fetcher;
pub mod filesystem;
pub mod process;

// Re-export commonly used adapters
pub use fetcher::{DirectoryFetcher, GithubTarballFetcher};
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use process::TokioCommandRunner;
