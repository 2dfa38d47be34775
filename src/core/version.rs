//! Semantic-version tokens found in index lines.

use std::cmp::Ordering;
use std::sync::LazyLock;

use regex::Regex;
use semver::Version;

use crate::{DocsError, DocsResult};

/// SemVer 2.0 grammar, unanchored so it can find a token anywhere in a line.
static VERSION_TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?",
    )
    .expect("version token pattern is valid")
});

/// Parse the release version supplied by the caller.
pub fn parse_release_version(input: &str) -> DocsResult<Version> {
    Version::parse(input.trim()).map_err(|source| DocsError::InvalidVersion {
        input: input.to_string(),
        source,
    })
}

/// Extract the first version token of a line.
///
/// Returns `None` when the line has no version-shaped token, or when the token
/// cannot be represented (e.g. a component overflowing `u64`).
pub fn extract_version(line: &str) -> Option<Version> {
    let token = VERSION_TOKEN_RE.find(line)?;
    Version::parse(token.as_str()).ok()
}

/// Compare by SemVer precedence. Build metadata does not take part.
pub fn cmp_precedence(a: &Version, b: &Version) -> Ordering {
    (a.major, a.minor, a.patch, &a.pre).cmp(&(b.major, b.minor, b.patch, &b.pre))
}
