use crate::domain::value_objects::CommandSpec;

/// The two external commands run inside a freshly scaffolded project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// Dependency install; failure aborts the scaffold.
    pub install: CommandSpec,
    /// Compile check; failure is reported and tolerated.
    pub build: CommandSpec,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            install: CommandSpec::new("npm", ["install", "--silent", "--no-audit", "--no-fund"]),
            build: CommandSpec::new("cargo", ["build"]),
        }
    }
}
