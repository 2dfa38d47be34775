//! Verification of the newest-first ordering of an index document.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::core::{DOCUMENT_PREFIX, cmp_precedence, extract_version};

use super::document::IndexDocument;

static REFERENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r#""({}[^"]+)""#, regex::escape(DOCUMENT_PREFIX)))
        .expect("reference pattern is valid")
});

/// A place where the index breaks its ordering or uniqueness invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderViolation {
    /// `line` (1-based) is not strictly older than the entry at `previous_line`.
    OutOfOrder {
        previous_line: usize,
        previous: String,
        line: usize,
        version: String,
    },
    /// The same document is referenced on more than one line.
    DuplicateReference {
        document: String,
        lines: Vec<usize>,
    },
}

impl fmt::Display for OrderViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderViolation::OutOfOrder { previous_line, previous, line, version } => write!(
                f,
                "line {line}: {version} should be listed before {previous} (line {previous_line})"
            ),
            OrderViolation::DuplicateReference { document, lines } => {
                let lines: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
                write!(f, "\"{document}\" referenced on lines {}", lines.join(", "))
            }
        }
    }
}

/// Check that entry versions read top to bottom are strictly descending and
/// that no document is referenced twice.
pub fn check_order(text: &str) -> Vec<OrderViolation> {
    let document = IndexDocument::parse(text);
    let mut violations = Vec::new();
    let mut previous: Option<(usize, semver::Version)> = None;
    let mut references: HashMap<String, Vec<usize>> = HashMap::new();
    let mut reference_order: Vec<String> = Vec::new();

    for (idx, line) in document.lines().iter().enumerate() {
        let line_no = idx + 1;

        for caps in REFERENCE_RE.captures_iter(line) {
            let name = caps[1].to_string();
            let seen = references.entry(name.clone()).or_default();
            if seen.is_empty() {
                reference_order.push(name);
            }
            if seen.last() != Some(&line_no) {
                seen.push(line_no);
            }
        }

        let Some(version) = extract_version(line) else {
            continue;
        };
        if let Some((prev_line, prev)) = &previous {
            if cmp_precedence(&version, prev) != Ordering::Less {
                violations.push(OrderViolation::OutOfOrder {
                    previous_line: *prev_line,
                    previous: prev.to_string(),
                    line: line_no,
                    version: version.to_string(),
                });
            }
        }
        previous = Some((line_no, version));
    }

    for name in reference_order {
        if let Some(lines) = references.remove(&name) {
            if lines.len() > 1 {
                violations.push(OrderViolation::DuplicateReference { document: name, lines });
            }
        }
    }

    violations
}
