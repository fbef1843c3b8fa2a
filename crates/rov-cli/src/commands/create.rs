//! Implementation of the scaffold command.
//!
//! Responsibility: wire adapters from the configuration, run the core
//! scaffold service, and display results.  No business logic lives here.

use rov_adapters::{DirectoryFetcher, GithubTarballFetcher, LocalFilesystem, TokioCommandRunner};
use rov_core::{
    application::{NameSource, ScaffoldService, ports::TemplateFetcher},
    domain::ScaffoldReport,
};
use tracing::{info, instrument};

use crate::{
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
    prompt::TerminalPrompt,
    reporter::TerminalReporter,
};

/// Execute the scaffold.
///
/// Dispatch sequence:
/// 1. Build adapters (remote or local template) from the configuration
/// 2. Run `ScaffoldService` below the current directory
/// 3. Print next-steps guidance
#[instrument(skip_all)]
pub async fn execute(
    project_name: Option<String>,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<()> {
    let service = build_service(config)?;
    let cwd = std::env::current_dir()
        .with_cli_context(|| "failed to determine the current directory")?;

    let report = {
        let reporter = TerminalReporter::new(output);
        service
            .scaffold(
                NameSource::from_argument(project_name),
                &TerminalPrompt::new(),
                &cwd,
                &reporter,
            )
            .await?
    };

    info!(
        project = %report.project,
        built = report.build.is_built(),
        "Project ready"
    );
    print_summary(&report, output)
}

fn build_service(config: &AppConfig) -> CliResult<ScaffoldService> {
    let fetcher: Box<dyn TemplateFetcher> = match config.local_template() {
        Some(path) => Box::new(DirectoryFetcher::new(path)),
        None => Box::new(GithubTarballFetcher::new(config.template_location())?),
    };
    info!(template = %fetcher.describe(), "Template source selected");

    Ok(ScaffoldService::new(
        fetcher,
        Box::new(LocalFilesystem::new()),
        Box::new(TokioCommandRunner::new()),
    )
    .with_toolchain(config.toolchain()))
}

fn print_summary(report: &ScaffoldReport, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.success("🎉 Your Rust-on-Vercel app is ready!")?;
    output.print("")?;
    output.header("📂 Next steps:")?;
    output.command(&format!("cd {}", report.project))?;
    output.command("vercel dev")?;
    output.print("")?;
    output.print("🚀 Happy coding!")?;
    Ok(())
}
