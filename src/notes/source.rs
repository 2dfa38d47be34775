//! Where the rendered title and body come from.

use std::io::Read;
use std::path::PathBuf;

use crate::{DocsError, DocsResult};

/// Supplies an already-rendered title and notes body for one release.
pub trait NotesSource {
    fn title(&self) -> DocsResult<String>;
    fn body(&self) -> DocsResult<String>;
}

/// Title and body held in memory.
#[derive(Debug, Clone)]
pub struct RenderedNotes {
    pub title: String,
    pub body: String,
}

impl NotesSource for RenderedNotes {
    fn title(&self) -> DocsResult<String> {
        Ok(self.title.clone())
    }

    fn body(&self) -> DocsResult<String> {
        Ok(self.body.clone())
    }
}

/// Title given directly, body read from a file or stdin (`-`).
#[derive(Debug, Clone)]
pub struct FileNotes {
    pub title: String,
    pub body_path: PathBuf,
}

impl FileNotes {
    pub fn new(title: impl Into<String>, body_path: impl Into<PathBuf>) -> Self {
        FileNotes { title: title.into(), body_path: body_path.into() }
    }

    fn reads_stdin(&self) -> bool {
        self.body_path.as_os_str() == "-"
    }
}

impl NotesSource for FileNotes {
    fn title(&self) -> DocsResult<String> {
        Ok(self.title.clone())
    }

    fn body(&self) -> DocsResult<String> {
        if self.reads_stdin() {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .map_err(|e| DocsError::Message(format!("failed to read notes body from stdin: {e}")))?;
            return Ok(body);
        }
        std::fs::read_to_string(&self.body_path)
            .map_err(|e| DocsError::io("read notes body", &self.body_path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_notes_reads_body() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("body.md");
        std::fs::write(&path, "### Bug fixes\n").unwrap();

        let notes = FileNotes::new("Release notes for 3.1.0", &path);
        assert_eq!(notes.title().unwrap(), "Release notes for 3.1.0");
        assert_eq!(notes.body().unwrap(), "### Bug fixes\n");
    }

    #[test]
    fn test_file_notes_missing_body() {
        let dir = tempfile::tempdir().unwrap();
        let notes = FileNotes::new("t", dir.path().join("nope.md"));
        let err = notes.body().unwrap_err();
        assert!(err.to_string().contains("read notes body"));
    }

    #[test]
    fn test_dash_means_stdin() {
        assert!(FileNotes::new("t", "-").reads_stdin());
        assert!(!FileNotes::new("t", "./-notes.md").reads_stdin());
    }
}
