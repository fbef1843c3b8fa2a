//! Project name resolution: explicit argument or interactive prompt.
//!
//! Runs before anything touches the filesystem, so everything downstream
//! depends only on the resolved [`ProjectName`].

use tracing::debug;

use crate::{
    application::ports::NamePrompt,
    domain::ProjectName,
    error::RovResult,
};

pub const NAME_QUESTION: &str = "What is the name of your project?";
pub const DEFAULT_NAME: &str = "my-rust-app";

/// Where the project name comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameSource {
    Argument(String),
    Prompt,
}

impl NameSource {
    /// An absent argument means "ask".
    pub fn from_argument(argument: Option<String>) -> Self {
        argument.map_or(Self::Prompt, Self::Argument)
    }
}

/// Resolve the project name from `source`, asking `prompt` if needed.
pub fn resolve_name(source: NameSource, prompt: &dyn NamePrompt) -> RovResult<ProjectName> {
    let raw = match source {
        NameSource::Argument(name) => name,
        NameSource::Prompt => {
            debug!("No project name argument, prompting");
            prompt.ask(NAME_QUESTION, DEFAULT_NAME)?
        }
    };

    Ok(ProjectName::parse(raw)?)
}
