//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and value enums.  No business logic lives here.

use clap::Parser;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "create-rust-on-vercel",
    bin_name = "create-rust-on-vercel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold a Rust project ready to deploy on Vercel",
    long_about = "Downloads the Rust-on-Vercel template into ./<project-name>, \
                  renames it after your project, installs its npm dependencies \
                  and runs a first cargo build.",
    after_help = "EXAMPLES:\n\
        \x20 create-rust-on-vercel my-app\n\
        \x20 create-rust-on-vercel            # asks for a name\n\
        \x20 create-rust-on-vercel -v api     # show progress logs",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Name of the directory to create.  Asked interactively when omitted.
    #[arg(value_name = "PROJECT_NAME", help = "Project name (prompted if omitted)")]
    pub project_name: Option<String>,
}

// ── tests ─────────────────────────────────────────────────────────────────────
