//! CLI command handler for `write`.
//!
//! Writes the release-notes document for one release, then adds the release
//! to the index.

use std::path::PathBuf;

use tracing::info;

use crate::config::DocsConfig;
use crate::core::{ReleaseSlug, parse_release_version};
use crate::index::{IndexUpdate, update_index_file};
use crate::notes::{NotesEmitter, NotesSource};
use crate::{DocsResult, UpdateReport, write_report_json};

/// Run the `write` command.
///
/// The notes document is written before the index is touched. If the index
/// step fails the notes file stays in place; running again completes the
/// index without duplicating its entry.
pub fn run(
    release: &str,
    notes: &dyn NotesSource,
    config: &DocsConfig,
    dry_run: bool,
    json: Option<PathBuf>,
) -> DocsResult<UpdateReport> {
    let version = parse_release_version(release)?;
    let slug = ReleaseSlug::from_version(&version);
    let emitter = NotesEmitter::new(&config.docs_dir);
    let index_path = config.index_path();

    let title = notes.title()?;
    let body = notes.body()?;
    info!(version = %version, title = %title, "writing release notes");

    let notes_path = if dry_run {
        let path = emitter.document_path(&slug);
        info!(path = %path.display(), "dry run, notes document not written");
        path
    } else {
        emitter.emit(&slug, &title, &body)?
    };

    let update = update_index_file(&index_path, &version, &slug, dry_run)?;
    if dry_run {
        if let IndexUpdate::Inserted { text, .. } = &update {
            print!("{text}");
        }
    }

    let report = UpdateReport {
        version: version.to_string(),
        document_name: slug.document_name(),
        notes_path: Some(notes_path),
        index_path,
        index_status: update.status(),
        inserted_at_line: update.inserted_at_line(),
        dry_run,
    };

    if let Some(path) = json {
        write_report_json(&report, &path)?;
        info!(path = %path.display(), "wrote report");
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IndexStatus;
    use crate::notes::RenderedNotes;
    use tempfile::TempDir;

    const INDEX: &str = "# Release notes\n\n- [Release notes for 1.0.0]({{< relref \"release-notes-1-0-0\" >}})\n";

    fn setup() -> (TempDir, DocsConfig) {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("_index.md"), INDEX).unwrap();
        let config = DocsConfig::default().with_overrides(Some(temp.path().to_path_buf()), None);
        (temp, config)
    }

    fn notes() -> RenderedNotes {
        RenderedNotes { title: "Release notes for 1.1.0".to_string(), body: "* fix".to_string() }
    }

    #[test]
    fn test_write_creates_notes_and_updates_index() {
        let (temp, config) = setup();

        let report = run("1.1.0", &notes(), &config, false, None).unwrap();

        assert_eq!(report.index_status, IndexStatus::Inserted);
        assert_eq!(report.inserted_at_line, Some(3));
        assert!(temp.path().join("release-notes-1-1-0.md").exists());
        let index = std::fs::read_to_string(temp.path().join("_index.md")).unwrap();
        assert!(index.contains("\"release-notes-1-1-0\""));
    }

    #[test]
    fn test_rerun_rewrites_notes_but_not_index() {
        let (temp, config) = setup();
        run("1.1.0", &notes(), &config, false, None).unwrap();
        let index_after_first = std::fs::read_to_string(temp.path().join("_index.md")).unwrap();

        let changed = RenderedNotes { title: "Retitled".to_string(), body: "* fix".to_string() };
        let report = run("1.1.0", &changed, &config, false, None).unwrap();

        assert_eq!(report.index_status, IndexStatus::AlreadyPresent);
        assert_eq!(
            std::fs::read_to_string(temp.path().join("_index.md")).unwrap(),
            index_after_first
        );
        let notes_doc = std::fs::read_to_string(temp.path().join("release-notes-1-1-0.md")).unwrap();
        assert!(notes_doc.contains("title = \"Retitled\""));
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let (temp, config) = setup();

        let report = run("2.0.0", &notes(), &config, true, None).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.index_status, IndexStatus::Inserted);
        assert!(!temp.path().join("release-notes-2-0-0.md").exists());
        assert_eq!(std::fs::read_to_string(temp.path().join("_index.md")).unwrap(), INDEX);
    }

    #[test]
    fn test_invalid_version_writes_nothing() {
        let (temp, config) = setup();

        let result = run("1.1", &notes(), &config, false, None);

        assert!(result.is_err());
        assert!(!temp.path().join("release-notes-1-1.md").exists());
    }

    #[test]
    fn test_missing_index_leaves_notes_written() {
        let temp = TempDir::new().unwrap();
        let config = DocsConfig::default().with_overrides(Some(temp.path().to_path_buf()), None);

        let result = run("1.1.0", &notes(), &config, false, None);

        assert!(result.unwrap_err().to_string().contains("read index"));
        assert!(temp.path().join("release-notes-1-1-0.md").exists());
    }

    #[test]
    fn test_json_report_written() {
        let (temp, config) = setup();
        let json_path = temp.path().join("report.json");

        run("0.9.0", &notes(), &config, false, Some(json_path.clone())).unwrap();

        let report: UpdateReport =
            serde_json::from_str(&std::fs::read_to_string(json_path).unwrap()).unwrap();
        assert_eq!(report.document_name, "release-notes-0-9-0");
        assert_eq!(report.inserted_at_line, Some(4));
    }
}
