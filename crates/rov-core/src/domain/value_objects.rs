//! Domain value objects: ProjectName, CommandSpec.
//!
//! Pure value types with equality-by-value and no identity. Parsing is the
//! only place validation happens; once a `ProjectName` exists it is valid.

use crate::domain::error::DomainError;
use std::fmt;
use std::str::FromStr;

// ── ProjectName ───────────────────────────────────────────────────────────────

/// The name of the project being scaffolded.
///
/// Used verbatim as the destination directory and manifest name, and in its
/// [`identifier`](Self::identifier) form inside Rust sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Parse a user-supplied name.
    ///
    /// Surrounding whitespace is trimmed. The result must be non-empty and
    /// must stay inside the working directory when joined onto it.
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, DomainError> {
        let name = raw.as_ref().trim();

        if name.is_empty() {
            return Err(DomainError::MissingName);
        }
        if name == "." || name == ".." {
            return Err(DomainError::InvalidName {
                name: name.into(),
                reason: "name cannot refer to the current or parent directory".into(),
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidName {
                name: name.into(),
                reason: "name cannot contain path separators".into(),
            });
        }

        Ok(Self(name.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name as a Rust identifier: every `-` becomes `_`.
    pub fn identifier(&self) -> String {
        self.0.replace('-', "_")
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ── CommandSpec ───────────────────────────────────────────────────────────────

/// An external program invocation: program name plus arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
