//! Step outcomes.
//!
//! Steps do not return `Result`: the orchestrator needs to tell a tolerated
//! failure (the compile check) from one that aborts and rolls back.

use crate::error::RovError;

#[derive(Debug, Clone)]
pub enum StepOutcome<T = ()> {
    Success(T),
    /// The step failed but the scaffold carries on.
    RecoverableFailure(String),
    /// The step failed and the scaffold must abort.
    FatalFailure(RovError),
}

impl<T> StepOutcome<T> {
    /// Every error from a strict step is fatal.
    pub fn strict(result: Result<T, RovError>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(e) => Self::FatalFailure(e),
        }
    }
}
