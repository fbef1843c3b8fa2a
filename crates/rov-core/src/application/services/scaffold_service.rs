//! Scaffold Service - main application orchestrator.
//!
//! This service drives the whole workflow through its phases:
//! 1. Resolve the project name (argument or prompt)
//! 2. Guard the destination directory
//! 3. Fetch the template
//! 4. Rewrite identifiers
//! 5. Write the package manager settings file
//! 6. Install dependencies (fatal on failure)
//! 7. Build (tolerated on failure)
//!
//! Once fetching has started, any fatal failure removes the destination.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        outcome::StepOutcome,
        ports::{CommandRunner, Filesystem, NamePrompt, ProgressReporter, TemplateFetcher},
        services::{
            identifier_rewriter::IdentifierRewriter,
            name_resolver::{NameSource, resolve_name},
        },
    },
    domain::{
        BuildStatus, Destination, Phase, ProjectName, RewriteSummary, ScaffoldReport, Step,
        Toolchain,
        template::{ENV_FILE, ENV_FILE_CONTENTS},
    },
    error::{RovError, RovResult},
};

/// State carried from one step to the next.
struct Run<'a> {
    name: &'a ProjectName,
    destination: Destination,
    rewrite: RewriteSummary,
    build: BuildStatus,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    fetcher: Box<dyn TemplateFetcher>,
    filesystem: Box<dyn Filesystem>,
    runner: Box<dyn CommandRunner>,
    toolchain: Toolchain,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters and the
    /// default `npm` / `cargo` toolchain.
    pub fn new(
        fetcher: Box<dyn TemplateFetcher>,
        filesystem: Box<dyn Filesystem>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            fetcher,
            filesystem,
            runner,
            toolchain: Toolchain::default(),
        }
    }

    /// Replace the install/build commands.
    pub fn with_toolchain(mut self, toolchain: Toolchain) -> Self {
        self.toolchain = toolchain;
        self
    }

    /// Scaffold a new project below `cwd`.
    #[instrument(skip_all, fields(cwd = %cwd.as_ref().display()))]
    pub async fn scaffold(
        &self,
        source: NameSource,
        prompt: &dyn NamePrompt,
        cwd: impl AsRef<Path>,
        reporter: &dyn ProgressReporter,
    ) -> RovResult<ScaffoldReport> {
        let mut phase = advance(Phase::Idle);
        let name = match resolve_name(source, prompt) {
            Ok(name) => name,
            Err(e) => return Err(self.fail(phase, None, e)),
        };
        info!(project = %name, "Project name resolved");

        phase = advance(phase);
        let destination = Destination::resolve(cwd, &name);
        if let Err(e) = self.guard(&destination) {
            return Err(self.fail(phase, Some(&destination), e));
        }
        reporter.destination_resolved(destination.root());

        let mut run = Run {
            name: &name,
            destination,
            rewrite: RewriteSummary::default(),
            build: BuildStatus::Built,
        };

        for step in Step::ALL {
            phase = advance(phase);
            debug_assert_eq!(phase, step.phase());
            reporter.step_started(step);

            match self.run_step(step, &mut run).await {
                StepOutcome::Success(()) => reporter.step_succeeded(step),
                StepOutcome::RecoverableFailure(detail) => {
                    warn!(%step, %detail, "Step failed, continuing");
                    reporter.warn(step, &detail);
                }
                StepOutcome::FatalFailure(e) => {
                    reporter.step_failed(step, &e.to_string());
                    return Err(self.fail(phase, Some(&run.destination), e));
                }
            }
        }

        advance(phase);
        info!(project = %name, "Scaffold completed");

        Ok(ScaffoldReport {
            destination: run.destination.root().to_path_buf(),
            rewrite: run.rewrite,
            build: run.build,
            project: name,
        })
    }

    // -------------------------------------------------------------------------
    // Steps
    // -------------------------------------------------------------------------

    async fn run_step(&self, step: Step, run: &mut Run<'_>) -> StepOutcome {
        match step {
            Step::Fetch => StepOutcome::strict(self.fetch(&run.destination).await),
            Step::Rewrite => {
                let rewriter = IdentifierRewriter::new(self.filesystem.as_ref(), run.name);
                match rewriter.rewrite(&run.destination) {
                    Ok(summary) => {
                        run.rewrite = summary;
                        StepOutcome::Success(())
                    }
                    Err(e) => StepOutcome::FatalFailure(e),
                }
            }
            Step::WriteEnv => StepOutcome::strict(self.write_env(&run.destination)),
            Step::Install => StepOutcome::strict(self.install(&run.destination).await),
            Step::Build => match self.build(&run.destination).await {
                Ok(()) => StepOutcome::Success(()),
                Err(e) => {
                    let detail = e.to_string();
                    run.build = BuildStatus::Failed(detail.clone());
                    StepOutcome::RecoverableFailure(detail)
                }
            },
        }
    }

    fn guard(&self, destination: &Destination) -> RovResult<()> {
        if self.filesystem.exists(destination.root()) {
            return Err(ApplicationError::DirectoryExists {
                path: destination.root().to_path_buf(),
            }
            .into());
        }
        Ok(())
    }

    async fn fetch(&self, destination: &Destination) -> RovResult<()> {
        let root = destination.root();
        debug!(source = %self.fetcher.describe(), "Fetching template");

        self.fetcher.fetch(root).await.map_err(|e| match e {
            RovError::Application(ApplicationError::FetchFailed { .. }) => e,
            other => ApplicationError::FetchFailed {
                source_desc: self.fetcher.describe(),
                reason: other.to_string(),
            }
            .into(),
        })?;

        if !self.filesystem.exists(root) {
            return Err(ApplicationError::FetchFailed {
                source_desc: self.fetcher.describe(),
                reason: "template produced no files".into(),
            }
            .into());
        }
        Ok(())
    }

    fn write_env(&self, destination: &Destination) -> RovResult<()> {
        let path = destination.file(ENV_FILE);
        self.filesystem
            .write_file(&path, ENV_FILE_CONTENTS)
            .map_err(|e| {
                ApplicationError::EnvWriteFailed {
                    path: path.clone(),
                    reason: e.to_string(),
                }
                .into()
            })
    }

    async fn install(&self, destination: &Destination) -> RovResult<()> {
        let command = &self.toolchain.install;
        let failed = |reason: String| -> RovError {
            ApplicationError::DependencyInstallFailed {
                command: command.to_string(),
                reason,
            }
            .into()
        };

        let output = self
            .runner
            .run(command, destination.root())
            .await
            .map_err(|e| failed(e.to_string()))?;
        if !output.success {
            return Err(failed(output.failure_detail()));
        }
        Ok(())
    }

    async fn build(&self, destination: &Destination) -> RovResult<()> {
        let command = &self.toolchain.build;
        let failed = |reason: String| -> RovError {
            ApplicationError::BuildFailed {
                command: command.to_string(),
                reason,
            }
            .into()
        };

        let output = self
            .runner
            .run(command, destination.root())
            .await
            .map_err(|e| failed(e.to_string()))?;
        if !output.success {
            return Err(failed(output.failure_detail()));
        }
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Failure handling
    // -------------------------------------------------------------------------

    /// Enter `Failed`, cleaning up if a partial project may exist.
    fn fail(&self, phase: Phase, destination: Option<&Destination>, error: RovError) -> RovError {
        transition(phase, Phase::Failed);
        if let Some(destination) = destination.filter(|_| phase.requires_cleanup()) {
            self.rollback(destination.root());
        }
        error
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if !self.filesystem.exists(root) {
            return;
        }
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(
                error = %e,
                path = %root.display(),
                "Rollback failed"
            );
        } else {
            info!(path = %root.display(), "Rollback successful");
        }
    }
}

fn advance(from: Phase) -> Phase {
    transition(from, from.next())
}

fn transition(from: Phase, to: Phase) -> Phase {
    debug!(%from, %to, "Phase transition");
    to
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::application::ports::output::{MockCommandRunner, MockTemplateFetcher};
    use crate::application::ports::{CommandOutput, DirEntry, SilentReporter};
    use crate::domain::CommandSpec;

    // Minimal filesystem: records which paths exist, no contents.
    #[derive(Default)]
    struct PathsOnly {
        existing: Mutex<Vec<std::path::PathBuf>>,
        removed: Mutex<Vec<std::path::PathBuf>>,
    }

    impl PathsOnly {
        fn with(paths: &[&str]) -> Self {
            let fs = Self::default();
            fs.existing
                .lock()
                .unwrap()
                .extend(paths.iter().map(std::path::PathBuf::from));
            fs
        }
    }

    impl Filesystem for PathsOnly {
        fn read_to_string(&self, path: &Path) -> RovResult<String> {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "no contents".into(),
            }
            .into())
        }
        fn write_file(&self, path: &Path, _content: &str) -> RovResult<()> {
            self.existing.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
        fn read_dir(&self, _path: &Path) -> RovResult<Vec<DirEntry>> {
            Ok(Vec::new())
        }
        fn exists(&self, path: &Path) -> bool {
            self.existing.lock().unwrap().iter().any(|p| p == path)
        }
        fn is_file(&self, _path: &Path) -> bool {
            false
        }
        fn remove_dir_all(&self, path: &Path) -> RovResult<()> {
            self.existing.lock().unwrap().retain(|p| !p.starts_with(path));
            self.removed.lock().unwrap().push(path.to_path_buf());
            Ok(())
        }
    }

    struct NoPrompt;

    impl NamePrompt for NoPrompt {
        fn ask(&self, _question: &str, _default: &str) -> RovResult<String> {
            panic!("prompt must not be used when a name argument is given");
        }
    }

    fn exit(code: i32) -> CommandOutput {
        CommandOutput {
            success: code == 0,
            code: Some(code),
            stdout: String::new(),
            stderr: if code == 0 { String::new() } else { "boom".into() },
        }
    }

    fn fetcher_ok() -> MockTemplateFetcher {
        let mut fetcher = MockTemplateFetcher::new();
        fetcher.expect_describe().return_const("test-template".to_string());
        fetcher.expect_fetch().times(1).returning(|_| Ok(()));
        fetcher
    }

    /// Runner whose install/build exit with the given codes.
    fn runner(install: i32, build: i32) -> MockCommandRunner {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .withf(|cmd: &CommandSpec, _| cmd.program == "npm")
            .returning(move |_, _| Ok(exit(install)));
        runner
            .expect_run()
            .withf(|cmd: &CommandSpec, _| cmd.program == "cargo")
            .returning(move |_, _| Ok(exit(build)));
        runner
    }

    fn service(fetcher: MockTemplateFetcher, fs: PathsOnly, runner: MockCommandRunner) -> ScaffoldService {
        ScaffoldService::new(Box::new(fetcher), Box::new(fs), Box::new(runner))
    }

    #[tokio::test]
    async fn existing_directory_is_rejected_and_left_alone() {
        let fs = PathsOnly::with(&["/work/my-app"]);
        let mut fetcher = MockTemplateFetcher::new();
        fetcher.expect_fetch().never();
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let svc = service(fetcher, fs, runner);
        let err = svc
            .scaffold(
                NameSource::Argument("my-app".into()),
                &NoPrompt,
                "/work",
                &SilentReporter,
            )
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            RovError::Application(ApplicationError::DirectoryExists { .. })
        ));
    }

    #[tokio::test]
    async fn missing_name_fails_before_fetching() {
        let mut fetcher = MockTemplateFetcher::new();
        fetcher.expect_fetch().never();
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let svc = service(fetcher, PathsOnly::default(), runner);
        let err = svc
            .scaffold(
                NameSource::Argument("  ".into()),
                &NoPrompt,
                "/work",
                &SilentReporter,
            )
            .await
            .unwrap_err();
        assert!(err.is_missing_name());
    }

    #[tokio::test]
    async fn fetch_without_files_is_fetch_failure() {
        // Fetch "succeeds" but nothing appears at the destination.
        let svc = service(fetcher_ok(), PathsOnly::default(), MockCommandRunner::new());
        let err = svc
            .scaffold(
                NameSource::Argument("my-app".into()),
                &NoPrompt,
                "/work",
                &SilentReporter,
            )
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            RovError::Application(ApplicationError::FetchFailed { .. })
        ));
    }

    #[tokio::test]
    async fn transport_errors_are_wrapped_as_fetch_failures() {
        let mut fetcher = MockTemplateFetcher::new();
        fetcher.expect_describe().return_const("remote".to_string());
        fetcher.expect_fetch().returning(|_| {
            Err(RovError::Internal {
                message: "socket closed".into(),
            })
        });

        let svc = service(fetcher, PathsOnly::default(), MockCommandRunner::new());
        let err = svc
            .scaffold(
                NameSource::Argument("my-app".into()),
                &NoPrompt,
                "/work",
                &SilentReporter,
            )
            .await
            .unwrap_err();

        match err {
            RovError::Application(ApplicationError::FetchFailed { source_desc, reason }) => {
                assert_eq!(source_desc, "remote");
                assert!(reason.contains("socket closed"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Runs a scaffold whose fetch "creates" the destination, returning the
    /// result and every path that was removed.
    async fn scaffold_with(
        install: i32,
        build: i32,
    ) -> (RovResult<ScaffoldReport>, Vec<std::path::PathBuf>) {
        let fs = std::sync::Arc::new(PathsOnly::default());
        let svc = ScaffoldService::new(
            Box::new(fetcher_ok()),
            Box::new(SharedFs {
                inner: fs.clone(),
                seed_on_first_exists_miss: Mutex::new(Some("/work/my-app".into())),
            }),
            Box::new(runner(install, build)),
        );

        let result = svc
            .scaffold(
                NameSource::Argument("my-app".into()),
                &NoPrompt,
                "/work",
                &SilentReporter,
            )
            .await;
        let removed = fs.removed.lock().unwrap().clone();
        (result, removed)
    }

    /// Wraps `PathsOnly`; the first `exists` miss (the guard) seeds the
    /// destination, standing in for the files a real fetch would write.
    struct SharedFs {
        inner: std::sync::Arc<PathsOnly>,
        seed_on_first_exists_miss: Mutex<Option<std::path::PathBuf>>,
    }

    impl Filesystem for SharedFs {
        fn read_to_string(&self, path: &Path) -> RovResult<String> {
            self.inner.read_to_string(path)
        }
        fn write_file(&self, path: &Path, content: &str) -> RovResult<()> {
            self.inner.write_file(path, content)
        }
        fn read_dir(&self, path: &Path) -> RovResult<Vec<DirEntry>> {
            self.inner.read_dir(path)
        }
        fn exists(&self, path: &Path) -> bool {
            let found = self.inner.exists(path);
            if !found {
                if let Some(seed) = self.seed_on_first_exists_miss.lock().unwrap().take() {
                    self.inner.existing.lock().unwrap().push(seed);
                }
            }
            found
        }
        fn is_file(&self, path: &Path) -> bool {
            self.inner.is_file(path)
        }
        fn remove_dir_all(&self, path: &Path) -> RovResult<()> {
            self.inner.remove_dir_all(path)
        }
    }

    #[tokio::test]
    async fn install_failure_is_fatal_and_cleans_up() {
        let (result, removed) = scaffold_with(1, 0).await;
        let err = result.unwrap_err();
        assert!(matches!(
            err,
            RovError::Application(ApplicationError::DependencyInstallFailed { .. })
        ));
        assert_eq!(removed, vec![std::path::PathBuf::from("/work/my-app")]);
    }

    #[tokio::test]
    async fn build_failure_is_tolerated() {
        let (result, removed) = scaffold_with(0, 101).await;
        let report = result.unwrap();
        assert!(removed.is_empty());
        match report.build {
            BuildStatus::Failed(detail) => assert!(detail.contains("exit status 101")),
            BuildStatus::Built => panic!("build should be reported as failed"),
        }
        assert_eq!(report.destination, std::path::PathBuf::from("/work/my-app"));
    }

    #[tokio::test]
    async fn clean_run_reports_built() {
        let (result, removed) = scaffold_with(0, 0).await;
        let report = result.unwrap();
        assert!(report.build.is_built());
        assert!(removed.is_empty());
        assert_eq!(report.project.as_str(), "my-app");
    }
}
