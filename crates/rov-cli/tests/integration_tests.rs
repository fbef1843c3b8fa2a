//! End-to-end runs of the binary against a local template.
//!
//! The template comes from a temporary directory and the package manager
//! and compiler are replaced by `true` / `false`, so no network or Node.js
//! toolchain is needed.

#![cfg(unix)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const CARGO_TOML: &str = "[package]\nname = \"rust_on_vercel_template\"\nversion = \"0.1.0\"\n";
const PACKAGE_JSON: &str = "{\n  \"name\": \"rust-on-vercel-template\",\n  \"private\": true\n}\n";
const HANDLER_RS: &str = "use rust_on_vercel_template::handler;\n";

struct Fixture {
    template: TempDir,
    work: TempDir,
    config: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let template = TempDir::new().unwrap();
        fs::create_dir_all(template.path().join("api")).unwrap();
        fs::create_dir_all(template.path().join("lib/rust")).unwrap();
        fs::write(template.path().join("Cargo.toml"), CARGO_TOML).unwrap();
        fs::write(template.path().join("package.json"), PACKAGE_JSON).unwrap();
        fs::write(template.path().join("api/index.rs"), HANDLER_RS).unwrap();
        fs::write(
            template.path().join("lib/rust/lib.rs"),
            "pub mod rust_on_vercel_template {}\n",
        )
        .unwrap();

        let work = TempDir::new().unwrap();
        let config = work.path().join("rov.toml");
        fs::write(&config, "").unwrap();

        Self {
            template,
            work,
            config,
        }
    }

    fn project(&self, name: &str) -> PathBuf {
        self.work.path().join(name)
    }

    /// Binary configured with the local template and the given stand-ins.
    fn cmd(&self, package_manager: &str, compiler: &str) -> Command {
        let mut cmd = Command::cargo_bin("create-rust-on-vercel").unwrap();
        cmd.current_dir(self.work.path())
            .env_remove("RUST_LOG")
            .env("CREATE_ROV_TEMPLATE__LOCAL_PATH", self.template.path())
            .env("CREATE_ROV_TOOLCHAIN__PACKAGE_MANAGER", package_manager)
            .env("CREATE_ROV_TOOLCHAIN__COMPILER", compiler)
            .arg("--no-color")
            .arg("--config")
            .arg(&self.config);
        cmd
    }
}

fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path).unwrap()
}

#[test]
fn creates_and_renames_project() {
    let fx = Fixture::new();

    fx.cmd("true", "true")
        .arg("my-app")
        .assert()
        .success()
        .stdout(predicate::str::contains("Creating a new Rust app in"))
        .stdout(predicate::str::contains("Template downloaded"))
        .stdout(predicate::str::contains("cd my-app"))
        .stdout(predicate::str::contains("vercel dev"));

    let root = fx.project("my-app");
    assert!(read(root.join("Cargo.toml")).contains("name = \"my-app\""));
    assert!(read(root.join("package.json")).contains("\"name\": \"my-app\""));
    assert_eq!(read(root.join("api/index.rs")), "use my_app::handler;\n");
    assert_eq!(read(root.join("lib/rust/lib.rs")), "pub mod my_app {}\n");
    assert_eq!(
        read(root.join(".npmrc")),
        "audit=false\nfund=false\nloglevel=silent\n"
    );
}

#[test]
fn install_failure_exits_one_and_cleans_up() {
    let fx = Fixture::new();

    fx.cmd("false", "true")
        .arg("my-app")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Failed to install Node.js dependencies"))
        .stderr(predicate::str::contains("Dependency install failed"));

    assert!(!fx.project("my-app").exists());
}

#[test]
fn build_failure_is_only_a_warning() {
    let fx = Fixture::new();

    fx.cmd("true", "false")
        .arg("my-app")
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust build failed"))
        .stdout(predicate::str::contains("`cargo build` manually"))
        .stdout(predicate::str::contains("cd my-app"));

    assert!(fx.project("my-app").join("Cargo.toml").is_file());
}

#[test]
fn existing_directory_is_refused_and_untouched() {
    let fx = Fixture::new();
    let existing = fx.project("my-app");
    fs::create_dir_all(&existing).unwrap();
    fs::write(existing.join("notes.txt"), "keep me").unwrap();

    fx.cmd("true", "true")
        .arg("my-app")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(read(existing.join("notes.txt")), "keep me");
    assert!(!existing.join("Cargo.toml").exists());
}

#[test]
fn second_run_with_same_name_fails() {
    let fx = Fixture::new();

    fx.cmd("true", "true").arg("api").assert().success();
    fx.cmd("true", "true")
        .arg("api")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Directory"))
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn empty_argument_is_a_missing_name() {
    let fx = Fixture::new();

    fx.cmd("true", "true")
        .arg("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project name is required"));
}

#[test]
fn name_with_separator_is_rejected() {
    let fx = Fixture::new();

    fx.cmd("true", "true")
        .arg("nested/app")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(!fx.project("nested").exists());
}

#[test]
fn prompt_default_is_used_on_blank_answer() {
    let fx = Fixture::new();

    fx.cmd("true", "true")
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("What is the name of your project?"));

    assert!(fx.project("my-rust-app").join("Cargo.toml").is_file());
}

#[test]
fn prompt_answer_names_the_project() {
    let fx = Fixture::new();

    fx.cmd("true", "true")
        .write_stdin("edge-fn\n")
        .assert()
        .success();

    assert_eq!(
        read(fx.project("edge-fn").join("api/index.rs")),
        "use edge_fn::handler;\n"
    );
}

#[test]
fn closed_stdin_is_a_missing_name() {
    let fx = Fixture::new();

    fx.cmd("true", "true")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Project name is required"));
}

#[test]
fn missing_template_directory_fails_without_leftovers() {
    let fx = Fixture::new();

    fx.cmd("true", "true")
        .env("CREATE_ROV_TEMPLATE__LOCAL_PATH", fx.work.path().join("nope"))
        .arg("my-app")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to download template"));

    assert!(!fx.project("my-app").exists());
}

#[test]
fn quiet_mode_prints_nothing_on_success() {
    let fx = Fixture::new();

    fx.cmd("true", "true")
        .args(["--quiet", "my-app"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
