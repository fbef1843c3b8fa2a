//! External program execution.

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, trace};

use rov_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner},
    },
    domain::CommandSpec,
    error::RovResult,
};

/// Runs programs with `tokio::process`, capturing stdout and stderr.
///
/// Output is never streamed to the terminal; callers decide what to show.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioCommandRunner;

impl TokioCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for TokioCommandRunner {
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> RovResult<CommandOutput> {
        debug!(command = %command, cwd = %cwd.display(), "running command");

        let output = Command::new(&command.program)
            .args(&command.args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ApplicationError::CommandSpawnFailed {
                program: command.program.clone(),
                reason: e.to_string(),
            })?;

        let result = CommandOutput {
            success: output.status.success(),
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        trace!(stdout = %result.stdout, stderr = %result.stderr, "command output");
        debug!(command = %command, success = result.success, code = ?result.code, "command finished");
        Ok(result)
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use rov_core::error::RovError;
    use tempfile::TempDir;

    fn sh(script: &str) -> CommandSpec {
        CommandSpec::new("sh", vec!["-c".to_string(), script.to_string()])
    }

    #[tokio::test]
    async fn captures_output_and_status() {
        let dir = TempDir::new().unwrap();
        let out = TokioCommandRunner::new()
            .run(&sh("echo hello; echo oops >&2; exit 3"), dir.path())
            .await
            .unwrap();

        assert!(!out.success);
        assert_eq!(out.code, Some(3));
        assert_eq!(out.stdout.trim(), "hello");
        assert_eq!(out.failure_detail(), "exit status 3: oops");
    }

    #[tokio::test]
    async fn runs_in_the_given_directory() {
        let dir = TempDir::new().unwrap();
        let out = TokioCommandRunner::new()
            .run(&sh("touch marker"), dir.path())
            .await
            .unwrap();

        assert!(out.success);
        assert!(dir.path().join("marker").exists());
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_failure() {
        let dir = TempDir::new().unwrap();
        let err = TokioCommandRunner::new()
            .run(
                &CommandSpec::new("definitely-not-a-real-program-rov", Vec::<String>::new()),
                dir.path(),
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RovError::Application(ApplicationError::CommandSpawnFailed { .. })
        ));
    }
}
