//! Ordered, idempotent insertion of release entries into the index.
//!
//! The index is kept newest first. A new entry goes directly above the first
//! line whose version token is older than the release being added; lines
//! without a token (headings, prose, blanks) never stop the scan.

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use semver::Version;
use tracing::{debug, info};

use crate::core::{ReleaseSlug, cmp_precedence, extract_version};
use crate::{DocsError, DocsResult, IndexStatus};

use super::document::{IndexDocument, entry_line};

/// Outcome of planning an index update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexUpdate {
    /// The document already references this release; nothing to write.
    AlreadyPresent,
    /// The new document text, with the entry at content line `line` (0-based).
    Inserted { text: String, line: usize },
}

impl IndexUpdate {
    pub fn status(&self) -> IndexStatus {
        match self {
            IndexUpdate::AlreadyPresent => IndexStatus::AlreadyPresent,
            IndexUpdate::Inserted { .. } => IndexStatus::Inserted,
        }
    }

    /// 1-based line number of the inserted entry.
    pub fn inserted_at_line(&self) -> Option<usize> {
        match self {
            IndexUpdate::AlreadyPresent => None,
            IndexUpdate::Inserted { line, .. } => Some(line + 1),
        }
    }
}

/// Index of the first line whose version is strictly older than `version`,
/// or the number of content lines when there is none.
pub fn find_insertion_point(document: &IndexDocument, version: &Version) -> usize {
    document
        .lines()
        .iter()
        .position(|line| {
            extract_version(line)
                .is_some_and(|existing| cmp_precedence(&existing, version) == Ordering::Less)
        })
        .unwrap_or(document.len())
}

/// Compute the updated index text without touching the filesystem.
pub fn plan_index_update(text: &str, version: &Version, slug: &ReleaseSlug) -> IndexUpdate {
    if text.contains(&slug.quoted_reference()) {
        return IndexUpdate::AlreadyPresent;
    }

    let mut document = IndexDocument::parse(text);
    let line = find_insertion_point(&document, version);
    document.insert(line, entry_line(version, slug));

    IndexUpdate::Inserted { text: document.render(), line }
}

/// Read the index at `path`, plan the update and, unless `dry_run`, write it back.
pub fn update_index_file(
    path: &Path,
    version: &Version,
    slug: &ReleaseSlug,
    dry_run: bool,
) -> DocsResult<IndexUpdate> {
    let text = fs::read_to_string(path).map_err(|e| DocsError::io("read index", path, e))?;
    let update = plan_index_update(&text, version, slug);

    match &update {
        IndexUpdate::AlreadyPresent => {
            info!(document = %slug.document_name(), "index already references release");
        }
        IndexUpdate::Inserted { text, line } => {
            debug!(line = line + 1, "computed insertion point");
            if dry_run {
                info!(path = %path.display(), "dry run, index not written");
            } else {
                fs::write(path, text).map_err(|e| DocsError::io("write index", path, e))?;
                info!(path = %path.display(), line = line + 1, "added release to index");
            }
        }
    }

    Ok(update)
}
