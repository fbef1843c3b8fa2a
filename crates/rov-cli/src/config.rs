//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate only sees the [`Toolchain`] and
//! [`TemplateLocation`] derived from it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (`--no-color`, handled at the call-site)
//! 2. Environment variables: `CREATE_ROV_<SECTION>__<KEY>`,
//!    e.g. `CREATE_ROV_TEMPLATE__LOCAL_PATH=../template`
//! 3. Config file (`--config`, or `config.toml` in the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use rov_core::domain::{
    CommandSpec, TemplateLocation, Toolchain,
    template::{TEMPLATE_REFERENCE, TEMPLATE_REPOSITORY},
};

const ENV_PREFIX: &str = "CREATE_ROV";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the template comes from.
    pub template: TemplateConfig,
    /// Programs run inside the new project.
    pub toolchain: ToolchainConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// GitHub `owner/name`.
    pub repository: String,
    /// Branch, tag or commit.
    pub reference: String,
    /// Copy this directory instead of downloading.
    pub local_path: Option<PathBuf>,
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            repository: TEMPLATE_REPOSITORY.into(),
            reference: TEMPLATE_REFERENCE.into(),
            local_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolchainConfig {
    pub package_manager: String,
    pub install_args: Vec<String>,
    pub compiler: String,
    pub build_args: Vec<String>,
}

impl Default for ToolchainConfig {
    fn default() -> Self {
        let Toolchain { install, build } = Toolchain::default();
        Self {
            package_manager: install.program,
            install_args: install.args,
            compiler: build.program,
            build_args: build.args,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration from the file and the environment over defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path.as_path()).required(true),
            None => File::from(Self::config_path().as_path())
                .format(FileFormat::Toml)
                .required(false),
        };

        Self::build(file, Environment::with_prefix(ENV_PREFIX))
    }

    fn build(
        file: File<config::FileSourceFile, FileFormat>,
        env: Environment,
    ) -> anyhow::Result<Self> {
        let env = env
            .prefix_separator("_")
            .separator("__")
            .list_separator(" ")
            .with_list_parse_key("toolchain.install_args")
            .with_list_parse_key("toolchain.build_args");

        Config::builder()
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.create-rust-on-vercel.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "create-rust-on-vercel", "create-rust-on-vercel")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".create-rust-on-vercel.toml"))
    }

    pub fn template_location(&self) -> TemplateLocation {
        TemplateLocation::new(&self.template.repository, &self.template.reference)
    }

    pub fn local_template(&self) -> Option<&Path> {
        self.template.local_path.as_deref()
    }

    pub fn toolchain(&self) -> Toolchain {
        let tc = &self.toolchain;
        Toolchain {
            install: CommandSpec::new(&tc.package_manager, &tc.install_args),
            build: CommandSpec::new(&tc.compiler, &tc.build_args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: config::Map<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Environment::with_prefix(ENV_PREFIX).source(Some(map))
    }

    fn no_file() -> File<config::FileSourceFile, FileFormat> {
        File::new("/nonexistent/create-rust-on-vercel.toml", FileFormat::Toml).required(false)
    }

    #[test]
    fn defaults_match_reference_template() {
        let cfg = AppConfig::default();
        assert_eq!(
            cfg.template_location().tarball_url(),
            "https://codeload.github.com/peterkyle01/rust-on-vercel-template/tar.gz/HEAD"
        );
        assert_eq!(cfg.toolchain(), Toolchain::default());
        assert!(cfg.local_template().is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn load_without_sources_returns_defaults() {
        let cfg = AppConfig::build(no_file(), env(&[])).unwrap();
        assert_eq!(cfg.template.repository, TEMPLATE_REPOSITORY);
        assert_eq!(cfg.toolchain.compiler, "cargo");
    }

    #[test]
    fn environment_overrides_nested_keys() {
        let cfg = AppConfig::build(
            no_file(),
            env(&[
                ("CREATE_ROV_TEMPLATE__LOCAL_PATH", "/tmp/tpl"),
                ("CREATE_ROV_TOOLCHAIN__PACKAGE_MANAGER", "pnpm"),
                ("CREATE_ROV_TOOLCHAIN__BUILD_ARGS", "build --release"),
            ]),
        )
        .unwrap();

        assert_eq!(cfg.local_template(), Some(Path::new("/tmp/tpl")));
        let tc = cfg.toolchain();
        assert_eq!(tc.install.program, "pnpm");
        assert_eq!(tc.build.to_string(), "cargo build --release");
    }

    #[test]
    fn file_values_are_read() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[template]\nreference = \"v2\"\n\n[output]\nno_color = true\n",
        )
        .unwrap();

        let cfg = AppConfig::build(File::from(path.as_path()), env(&[])).unwrap();
        assert_eq!(cfg.template.reference, "v2");
        assert_eq!(cfg.template.repository, TEMPLATE_REPOSITORY);
        assert!(cfg.output.no_color);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let missing = PathBuf::from("/nonexistent/rov.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_not_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
