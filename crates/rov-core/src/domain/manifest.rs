//! Pure text transformations applied to the template's files.
//!
//! Nothing here touches the filesystem; the identifier rewriter reads the
//! files through the `Filesystem` port and hands the contents to these
//! functions.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use crate::domain::{
    entities::template::{PACKAGE_MANIFEST, PLACEHOLDER_TOKEN},
    error::DomainError,
};

/// First `name = "..."` line of a build descriptor. Group 1 is the
/// indentation, which is kept.
static NAME_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^([ \t]*)name[ \t]*=[ \t]*".*""#).expect("name line pattern is valid")
});

/// Set the top-level `name` of a `package.json` document.
///
/// Key order is preserved and the output is indented with two spaces and
/// terminated by a newline.
pub fn set_package_name(contents: &str, name: &str) -> Result<String, DomainError> {
    let invalid = |reason: String| DomainError::InvalidManifest {
        file: PACKAGE_MANIFEST.into(),
        reason,
    };

    let mut doc: Value = serde_json::from_str(contents).map_err(|e| invalid(e.to_string()))?;
    let object = doc
        .as_object_mut()
        .ok_or_else(|| invalid("top-level value is not an object".into()))?;
    object.insert("name".into(), Value::String(name.into()));

    let mut out = serde_json::to_string_pretty(&doc).map_err(|e| invalid(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

/// Rewrite the first `name = "..."` line of a build descriptor.
///
/// Returns `None` when no line matches; the caller leaves the file alone.
pub fn set_crate_name(contents: &str, name: &str) -> Option<String> {
    let caps = NAME_LINE.captures(contents)?;
    let line = caps.get(0)?;
    let indent = caps.get(1).map_or("", |m| m.as_str());

    let mut out = String::with_capacity(contents.len() + name.len());
    out.push_str(&contents[..line.start()]);
    out.push_str(indent);
    out.push_str("name = \"");
    out.push_str(name);
    out.push('"');
    out.push_str(&contents[line.end()..]);
    Some(out)
}

/// Replace every occurrence of the placeholder token with `identifier`.
///
/// Matching is literal and case-sensitive. Returns `None` if the token does
/// not occur.
pub fn replace_placeholder(contents: &str, identifier: &str) -> Option<String> {
    contents
        .contains(PLACEHOLDER_TOKEN)
        .then(|| contents.replace(PLACEHOLDER_TOKEN, identifier))
}
