//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `rov-adapters` crate provides the implementations; the CLI provides
//! the prompt and the reporter.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::{CommandSpec, Step};
use crate::error::RovResult;

/// What kind of node a directory listing returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    /// Symlinks and anything else; never followed or rewritten.
    Other,
}

/// One child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file_name(&self) -> Option<&str> {
        self.path.file_name().and_then(|n| n.to_str())
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `rov_adapters::filesystem::LocalFilesystem` (production)
/// - `rov_adapters::filesystem::MemoryFilesystem` (testing)
pub trait Filesystem: Send + Sync {
    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> RovResult<String>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> RovResult<()>;

    /// List the direct children of a directory.
    fn read_dir(&self, path: &Path) -> RovResult<Vec<DirEntry>>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is a regular file.
    fn is_file(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> RovResult<()>;
}

/// Port for retrieving the template into a destination directory.
///
/// Implemented by:
/// - `rov_adapters::fetcher::GithubTarballFetcher` (remote archive)
/// - `rov_adapters::fetcher::DirectoryFetcher` (local copy)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TemplateFetcher: Send + Sync {
    /// Human-readable description of where the template comes from.
    fn describe(&self) -> String;

    /// Populate `destination` with the template's files.
    ///
    /// The destination does not exist yet; the fetcher creates it.
    async fn fetch(&self, destination: &Path) -> RovResult<()>;
}

/// Captured result of an external program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub success: bool,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Short description of why the command failed, for error messages.
    pub fn failure_detail(&self) -> String {
        let status = match self.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_owned(),
        };
        let tail = self
            .stderr
            .lines()
            .rev()
            .find(|l| !l.trim().is_empty())
            .map(str::trim);
        match tail {
            Some(line) => format!("{status}: {line}"),
            None => status,
        }
    }
}

/// Port for running external programs.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` with `cwd` as its working directory and wait for it.
    ///
    /// Returns `Err` only if the program could not be started; a non-zero
    /// exit is reported through [`CommandOutput::success`].
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> RovResult<CommandOutput>;
}

/// Port for asking the user for the project name.
pub trait NamePrompt {
    fn ask(&self, question: &str, default: &str) -> RovResult<String>;
}

/// Port for progress reporting around each step.
pub trait ProgressReporter: Send + Sync {
    /// The project directory is known and free; called once, before any step.
    fn destination_resolved(&self, _destination: &Path) {}

    fn step_started(&self, step: Step);

    fn step_succeeded(&self, step: Step);

    fn step_failed(&self, step: Step, detail: &str);

    /// A non-fatal problem the user should know about.
    fn warn(&self, step: Step, detail: &str);
}

/// Reporter that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn step_started(&self, _step: Step) {}
    fn step_succeeded(&self, _step: Step) {}
    fn step_failed(&self, _step: Step, _detail: &str) {}
    fn warn(&self, _step: Step, _detail: &str) {}
}
