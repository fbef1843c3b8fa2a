//! Template fetchers.
//!
//! Both fetchers populate a destination directory that does not exist yet.
//! The remote one downloads a gzip tarball and strips its top-level folder;
//! the local one copies a directory tree (useful offline and in tests).

mod archive;
mod directory;
mod github;

pub use archive::{ArchiveError, unpack_stripped};
pub use directory::DirectoryFetcher;
pub use github::GithubTarballFetcher;
