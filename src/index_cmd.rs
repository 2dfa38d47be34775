//! CLI command handler for `index`: add a release to the index only.

use std::path::PathBuf;

use tracing::info;

use crate::config::DocsConfig;
use crate::core::{ReleaseSlug, parse_release_version};
use crate::index::{IndexUpdate, update_index_file};
use crate::{DocsResult, UpdateReport, write_report_json};

pub fn run(
    release: &str,
    config: &DocsConfig,
    dry_run: bool,
    json: Option<PathBuf>,
) -> DocsResult<UpdateReport> {
    let version = parse_release_version(release)?;
    let slug = ReleaseSlug::from_version(&version);
    let index_path = config.index_path();
    info!(version = %version, index = %index_path.display(), "updating index");

    let update = update_index_file(&index_path, &version, &slug, dry_run)?;
    if dry_run {
        if let IndexUpdate::Inserted { text, .. } = &update {
            print!("{text}");
        }
    }

    let report = UpdateReport {
        version: version.to_string(),
        document_name: slug.document_name(),
        notes_path: None,
        index_path,
        index_status: update.status(),
        inserted_at_line: update.inserted_at_line(),
        dry_run,
    };

    if let Some(path) = json {
        write_report_json(&report, &path)?;
    }

    Ok(report)
}
