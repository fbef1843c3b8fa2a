//! The reference template and the identifiers baked into it.
//!
//! The template is a fixed, externally hosted project. Everything the
//! rewriter needs to know about it lives here so that no file name or token
//! is spelled out twice.

/// GitHub `owner/name` of the reference template.
pub const TEMPLATE_REPOSITORY: &str = "peterkyle01/rust-on-vercel-template";

/// Git reference to download. `HEAD` resolves to the default branch.
pub const TEMPLATE_REFERENCE: &str = "HEAD";

/// Identifier used by the template's Rust sources for its own crate.
pub const PLACEHOLDER_TOKEN: &str = "rust_on_vercel_template";

/// Structured manifest whose `name` field is set to the project name.
pub const PACKAGE_MANIFEST: &str = "package.json";

/// Build descriptor whose first `name = "..."` line is rewritten.
pub const BUILD_MANIFEST: &str = "Cargo.toml";

/// Source files ending in this suffix get the placeholder replaced.
pub const SOURCE_SUFFIX: &str = ".rs";

/// Package manager settings written into every new project.
pub const ENV_FILE: &str = ".npmrc";
pub const ENV_FILE_CONTENTS: &str = "audit=false\nfund=false\nloglevel=silent\n";

/// Where to fetch the template from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLocation {
    pub repository: String,
    pub reference: String,
}

impl TemplateLocation {
    pub fn new(repository: impl Into<String>, reference: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
            reference: reference.into(),
        }
    }

    /// Tarball URL served by GitHub's codeload host.
    pub fn tarball_url(&self) -> String {
        format!(
            "https://codeload.github.com/{}/tar.gz/{}",
            self.repository, self.reference
        )
    }
}

impl Default for TemplateLocation {
    fn default() -> Self {
        Self::new(TEMPLATE_REPOSITORY, TEMPLATE_REFERENCE)
    }
}

impl std::fmt::Display for TemplateLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.repository, self.reference)
    }
}

/// Whether a file name carries the recognised source suffix.
pub fn is_source_file(file_name: &str) -> bool {
    file_name.ends_with(SOURCE_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_location_points_at_reference_template() {
        let loc = TemplateLocation::default();
        assert_eq!(
            loc.tarball_url(),
            "https://codeload.github.com/peterkyle01/rust-on-vercel-template/tar.gz/HEAD"
        );
    }

    #[test]
    fn source_suffix_matching_is_exact() {
        assert!(is_source_file("lib.rs"));
        assert!(is_source_file("handler.test.rs"));
        assert!(!is_source_file("lib.rs.bak"));
        assert!(!is_source_file("README.md"));
        assert!(!is_source_file("lib.RS"));
    }

    #[test]
    fn env_contents_disable_audit_fund_and_logging() {
        let lines: Vec<&str> = ENV_FILE_CONTENTS.lines().collect();
        assert_eq!(lines, ["audit=false", "fund=false", "loglevel=silent"]);
    }
}
