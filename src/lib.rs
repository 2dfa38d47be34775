pub mod check_cmd;
pub mod config;
pub mod core;
pub mod index;
pub mod index_cmd;
pub mod notes;
pub mod write_cmd;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocsError {
    #[error("{0}")]
    Message(String),
    #[error("failed to {action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid release version `{input}`: {source}")]
    InvalidVersion {
        input: String,
        #[source]
        source: semver::Error,
    },
    #[error("config error: {0}")]
    Config(String),
}

impl DocsError {
    pub fn io(action: &'static str, path: &Path, source: std::io::Error) -> Self {
        DocsError::Io { action, path: path.to_path_buf(), source }
    }
}

pub type DocsResult<T> = Result<T, DocsError>;

/// Whether the index gained an entry during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexStatus {
    Inserted,
    AlreadyPresent,
}

/// Machine-readable summary of one `write` or `index` run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UpdateReport {
    pub version: String,
    pub document_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes_path: Option<PathBuf>,
    pub index_path: PathBuf,
    pub index_status: IndexStatus,
    /// 1-based line number of the new entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inserted_at_line: Option<usize>,
    pub dry_run: bool,
}

// Shared helpers
pub fn write_report_json(report: &UpdateReport, path: &Path) -> DocsResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)
                .map_err(|e| DocsError::Message(format!("failed to create directory: {e}")))?;
        }
    }
    let json = serde_json::to_vec_pretty(report)
        .map_err(|e| DocsError::Message(format!("failed to serialize report: {e}")))?;
    std::fs::write(path, json).map_err(|e| DocsError::io("write report", path, e))
}
