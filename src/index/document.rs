//! Line model of the release-notes index document.

use semver::Version;

use crate::core::ReleaseSlug;

/// The index as content lines plus an explicit trailing terminator.
///
/// `"a\nb\n"` parses to lines `["a", "b"]` with `trailing_newline = true`,
/// so "append at the end" always lands before the final newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexDocument {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl IndexDocument {
    /// Split on `\n`, dropping a `\r` directly before it.
    pub fn parse(text: &str) -> Self {
        let mut lines: Vec<String> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        // split always yields at least one element; an empty last one is the terminator
        let trailing_newline = lines.last().is_some_and(|l| l.is_empty());
        if trailing_newline {
            lines.pop();
        }
        IndexDocument { lines, trailing_newline }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn trailing_newline(&self) -> bool {
        self.trailing_newline
    }

    /// Insert a line before content line `at` (`at == len()` appends).
    pub fn insert(&mut self, at: usize, line: String) {
        self.lines.insert(at.min(self.lines.len()), line);
    }

    /// Join with bare `\n`, restoring the terminator if the source had one.
    pub fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.trailing_newline {
            out.push('\n');
        }
        out
    }
}

/// Markdown list item referencing one release's notes document.
pub fn entry_line(version: &Version, slug: &ReleaseSlug) -> String {
    format!(
        "- [Release notes for {version}]({{{{< relref \"{}\" >}}}})",
        slug.document_name()
    )
}
