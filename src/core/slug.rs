//! Reference slugs derived from release versions.

use std::fmt;

use semver::Version;

/// Prefix shared by every release-notes document name.
pub const DOCUMENT_PREFIX: &str = "release-notes-";

/// Link- and filename-safe identifier for one release.
///
/// `1.2.3` becomes slug `1-2-3` and document name `release-notes-1-2-3`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseSlug {
    slug: String,
}

impl ReleaseSlug {
    pub fn new(version: &str) -> Self {
        ReleaseSlug { slug: version.replace('.', "-") }
    }

    pub fn from_version(version: &Version) -> Self {
        Self::new(&version.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.slug
    }

    /// Base name of the notes document, also the relref link target.
    pub fn document_name(&self) -> String {
        format!("{DOCUMENT_PREFIX}{}", self.slug)
    }

    pub fn file_name(&self) -> String {
        format!("{}.md", self.document_name())
    }

    /// The document name as it appears quoted inside an entry line.
    pub fn quoted_reference(&self) -> String {
        format!("\"{}\"", self.document_name())
    }
}

impl fmt::Display for ReleaseSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug)
    }
}
