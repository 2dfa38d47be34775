//! Writes release-notes documents into the docs tree.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::ReleaseSlug;
use crate::{DocsError, DocsResult};

use super::template::render_notes_document;

/// Emits one notes document per release into a fixed directory.
#[derive(Debug, Clone)]
pub struct NotesEmitter {
    notes_dir: PathBuf,
}

impl NotesEmitter {
    /// The directory must already exist; it is not created.
    pub fn new(notes_dir: impl AsRef<Path>) -> Self {
        NotesEmitter { notes_dir: notes_dir.as_ref().to_path_buf() }
    }

    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Path the document for `slug` is written to.
    pub fn document_path(&self, slug: &ReleaseSlug) -> PathBuf {
        self.notes_dir.join(slug.file_name())
    }

    /// Write (or overwrite) the notes document for `slug`.
    pub fn emit(&self, slug: &ReleaseSlug, title: &str, body: &str) -> DocsResult<PathBuf> {
        let path = self.document_path(slug);
        let content = render_notes_document(title, body);
        fs::write(&path, content).map_err(|e| DocsError::io("write notes document", &path, e))?;
        info!(path = %path.display(), "wrote release notes");
        Ok(path)
    }
}
