//! Scaffold lifecycle.
//!
//! ```text
//! Idle → ResolvingName → GuardingDestination → Fetching → Rewriting
//!      → WritingEnv → InstallingDeps → Building → Done
//! ```
//!
//! Any phase can move to `Failed`. From `Fetching` onwards a partial
//! project directory may exist, so failing there requires cleanup.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    Idle,
    ResolvingName,
    GuardingDestination,
    Fetching,
    Rewriting,
    WritingEnv,
    InstallingDeps,
    Building,
    Done,
    Failed,
}

impl Phase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::ResolvingName => "resolving-name",
            Self::GuardingDestination => "guarding-destination",
            Self::Fetching => "fetching",
            Self::Rewriting => "rewriting",
            Self::WritingEnv => "writing-env",
            Self::InstallingDeps => "installing-deps",
            Self::Building => "building",
            Self::Done => "done",
            Self::Failed => "failed",
        }
    }

    /// Whether failing while in this phase leaves a directory to remove.
    pub const fn requires_cleanup(self) -> bool {
        matches!(
            self,
            Self::Fetching | Self::Rewriting | Self::WritingEnv | Self::InstallingDeps | Self::Building
        )
    }

    /// The phase that normally follows this one.
    pub const fn next(self) -> Self {
        match self {
            Self::Idle => Self::ResolvingName,
            Self::ResolvingName => Self::GuardingDestination,
            Self::GuardingDestination => Self::Fetching,
            Self::Fetching => Self::Rewriting,
            Self::Rewriting => Self::WritingEnv,
            Self::WritingEnv => Self::InstallingDeps,
            Self::InstallingDeps => Self::Building,
            Self::Building => Self::Done,
            Self::Done => Self::Done,
            Self::Failed => Self::Failed,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The work steps that run once the destination is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    Fetch,
    Rewrite,
    WriteEnv,
    Install,
    Build,
}

impl Step {
    /// Steps in execution order.
    pub const ALL: [Step; 5] = [
        Step::Fetch,
        Step::Rewrite,
        Step::WriteEnv,
        Step::Install,
        Step::Build,
    ];

    pub const fn phase(self) -> Phase {
        match self {
            Self::Fetch => Phase::Fetching,
            Self::Rewrite => Phase::Rewriting,
            Self::WriteEnv => Phase::WritingEnv,
            Self::Install => Phase::InstallingDeps,
            Self::Build => Phase::Building,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fetch => "fetch",
            Self::Rewrite => "rewrite",
            Self::WriteEnv => "write-env",
            Self::Install => "install",
            Self::Build => "build",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
