//! Component identifier and tag derivation from source paths.

use regex::Regex;
use std::sync::LazyLock;

/// Name derived from a component source path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedName {
    /// PascalCase identifier (e.g., "MyGreeting")
    pub identifier: String,

    /// Original file stem, used as the element tag (e.g., "my-greeting")
    pub tag: String,
}

static SOURCE_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/([^/]+)\.webc$").expect("Invalid source name regex"));

/// Derive identifier and tag from the last path segment before `.webc`.
///
/// Returns `None` when the path does not match; callers substitute the
/// fallback identifier and skip tag-based wiring.
pub fn derive(path: &str) -> Option<DerivedName> {
    let caps = SOURCE_NAME_RE.captures(path)?;
    let segment = caps.get(1)?.as_str();

    Some(DerivedName {
        identifier: to_pascal_case(segment),
        tag: segment.to_string(),
    })
}

/// Convert kebab-case to PascalCase.
pub fn to_pascal_case(s: &str) -> String {
    s.split('-').map(capitalize).collect()
}

/// Uppercase the first ASCII character and lowercase the rest.
fn capitalize(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(c) => c.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase(),
        None => String::new(),
    }
}
