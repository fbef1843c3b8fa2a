//! Diagnostics on stderr.
//!
//! Progress and results go to stdout through the output manager; this
//! subscriber only carries `tracing` events from the workspace crates.
//! Without `RUST_LOG`, dependencies such as `reqwest` stay silent and the
//! workspace level starts at `warn`, rising one step per `-v`. `--quiet`
//! keeps errors only.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, filter::LevelFilter};

use crate::cli::{GlobalArgs, OutputFormat};

/// Crates whose events are shown by default: this binary and the two
/// library crates it drives.
const WORKSPACE_TARGETS: [&str; 3] = [env!("CARGO_CRATE_NAME"), "rov_core", "rov_adapters"];

/// Install the global subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(workspace_directives(verbosity(args))));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(ansi_enabled(args, std::io::stderr().is_terminal()))
        .with_target(args.verbose >= 2)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))
}

fn verbosity(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn workspace_directives(level: LevelFilter) -> String {
    let level = level.to_string().to_ascii_lowercase();
    WORKSPACE_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Colour follows the same switches as stdout output, judged on stderr.
fn ansi_enabled(args: &GlobalArgs, stderr_is_tty: bool) -> bool {
    if args.no_color {
        return false;
    }
    match args.output_format {
        OutputFormat::Plain => false,
        OutputFormat::Human => true,
        OutputFormat::Auto => stderr_is_tty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool, no_color: bool, output_format: OutputFormat) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color,
            config: None,
            output_format,
        }
    }

    #[test]
    fn each_verbose_flag_raises_the_level() {
        let cases = [
            (0, LevelFilter::WARN),
            (1, LevelFilter::INFO),
            (2, LevelFilter::DEBUG),
            (3, LevelFilter::TRACE),
            (10, LevelFilter::TRACE),
        ];
        for (verbose, expected) in cases {
            let got = verbosity(&args(verbose, false, false, OutputFormat::Auto));
            assert_eq!(got, expected, "-v x{verbose}");
        }
    }

    #[test]
    fn quiet_wins_over_verbose() {
        let got = verbosity(&args(3, true, false, OutputFormat::Auto));
        assert_eq!(got, LevelFilter::ERROR);
    }

    #[test]
    fn directives_name_the_binary_and_libraries() {
        assert_eq!(
            workspace_directives(LevelFilter::DEBUG),
            "create_rust_on_vercel=debug,rov_core=debug,rov_adapters=debug"
        );
        assert!(!workspace_directives(LevelFilter::WARN).contains("reqwest"));
    }

    #[test]
    fn plain_and_no_color_disable_ansi() {
        assert!(!ansi_enabled(&args(0, false, false, OutputFormat::Plain), true));
        assert!(!ansi_enabled(&args(0, false, true, OutputFormat::Human), true));
    }

    #[test]
    fn auto_follows_the_terminal() {
        assert!(ansi_enabled(&args(0, false, false, OutputFormat::Auto), true));
        assert!(!ansi_enabled(&args(0, false, false, OutputFormat::Auto), false));
        assert!(ansi_enabled(&args(0, false, false, OutputFormat::Human), false));
    }
}
