//! Terminal progress reporting for the scaffold steps.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use rov_core::{application::ports::ProgressReporter, domain::Step};

use crate::output::OutputManager;

const TICK_CHARS: &str = "⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏";

/// Text shown while a step runs. The fetch names the project directory
/// once it is known.
fn running_message(step: Step, destination: Option<&Path>) -> Cow<'static, str> {
    match (step, destination) {
        (Step::Fetch, Some(path)) => {
            format!("📥 Creating a new Rust app in {}...", path.display()).into()
        }
        (Step::Fetch, None) => "📥 Downloading template...".into(),
        (Step::Rewrite, _) => "📝 Updating project configuration...".into(),
        (Step::WriteEnv, _) => "Writing .npmrc...".into(),
        (Step::Install, _) => "📦 Installing Node.js dependencies...".into(),
        (Step::Build, _) => "🦀 Building Rust project...".into(),
    }
}

/// Text shown once a step completed.
fn done_message(step: Step) -> &'static str {
    match step {
        Step::Fetch => "Template downloaded",
        Step::Rewrite => "Project configuration updated",
        Step::WriteEnv => "Package manager settings written",
        Step::Install => "Node.js dependencies installed",
        Step::Build => "Rust project built",
    }
}

fn failed_message(step: Step) -> &'static str {
    match step {
        Step::Fetch => "Failed to download template",
        Step::Rewrite => "Failed to update project configuration",
        Step::WriteEnv => "Failed to write package manager settings",
        Step::Install => "Failed to install Node.js dependencies",
        Step::Build => "Rust build failed",
    }
}

/// Shows a spinner per step on a terminal and a status line afterwards.
///
/// Status lines go through [`OutputManager`], so piped output still gets
/// them while spinners are only drawn in human mode.
pub struct TerminalReporter<'a> {
    output: &'a OutputManager,
    destination: Mutex<Option<PathBuf>>,
    spinner: Mutex<Option<ProgressBar>>,
}

impl<'a> TerminalReporter<'a> {
    pub fn new(output: &'a OutputManager) -> Self {
        Self {
            output,
            destination: Mutex::new(None),
            spinner: Mutex::new(None),
        }
    }

    fn message_for(&self, step: Step) -> Cow<'static, str> {
        let destination = self.destination.lock().ok().and_then(|slot| slot.clone());
        running_message(step, destination.as_deref())
    }

    fn start_spinner(&self, msg: Cow<'static, str>) {
        let pb = ProgressBar::new_spinner();
        let template = if self.output.supports_color() {
            "{spinner:.cyan} {msg}"
        } else {
            "{spinner} {msg}"
        };
        if let Ok(style) = ProgressStyle::with_template(template) {
            pb.set_style(style.tick_chars(TICK_CHARS));
        }
        pb.set_message(msg);
        pb.enable_steady_tick(Duration::from_millis(100));
        self.replace_spinner(Some(pb));
    }

    /// Swap the active spinner, clearing the previous one.
    fn replace_spinner(&self, next: Option<ProgressBar>) {
        if let Ok(mut slot) = self.spinner.lock() {
            if let Some(old) = slot.take() {
                old.finish_and_clear();
            }
            *slot = next;
        }
    }

    /// Terminal writes are best-effort; a closed stdout must not abort the run.
    fn emit(&self, result: std::io::Result<()>) {
        if let Err(e) = result {
            debug!(error = %e, "failed to write progress line");
        }
    }
}

impl ProgressReporter for TerminalReporter<'_> {
    fn destination_resolved(&self, destination: &Path) {
        if let Ok(mut slot) = self.destination.lock() {
            *slot = Some(destination.to_path_buf());
        }
    }

    fn step_started(&self, step: Step) {
        let msg = self.message_for(step);
        if self.output.is_interactive() {
            self.start_spinner(msg);
        } else {
            self.emit(self.output.info(&msg));
        }
    }

    fn step_succeeded(&self, step: Step) {
        self.replace_spinner(None);
        self.emit(self.output.success(done_message(step)));
    }

    fn step_failed(&self, step: Step, detail: &str) {
        self.replace_spinner(None);
        debug!(%step, %detail, "step failed");
        self.emit(self.output.error(failed_message(step)));
    }

    fn warn(&self, step: Step, detail: &str) {
        self.replace_spinner(None);
        self.emit(self.output.warning(&format!("{}: {detail}", failed_message(step))));
        if step == Step::Build {
            self.emit(self.output.hint("   Don't worry! You can fix the build errors later."));
            self.emit(self.output.hint(
                "   The project has been created and you can run `cargo build` manually.",
            ));
        }
    }
}

impl Drop for TerminalReporter<'_> {
    fn drop(&mut self) {
        self.replace_spinner(None);
    }
}
