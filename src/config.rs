use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{DocsError, DocsResult};

pub const DEFAULT_CONFIG_FILE: &str = "changelog-docs.toml";
pub const DEFAULT_DOCS_DIR: &str = "docs/sources/release-notes";
pub const DEFAULT_INDEX_FILE: &str = "_index.md";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    /// Directory the release-notes documents are written to
    #[serde(default = "default_docs_dir")]
    pub docs_dir: PathBuf,
    /// Index document, relative to `docs_dir` unless absolute
    #[serde(default = "default_index_file")]
    pub index_file: PathBuf,
}

fn default_docs_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DOCS_DIR)
}

fn default_index_file() -> PathBuf {
    PathBuf::from(DEFAULT_INDEX_FILE)
}

impl Default for DocsConfig {
    fn default() -> Self {
        DocsConfig { docs_dir: default_docs_dir(), index_file: default_index_file() }
    }
}

impl DocsConfig {
    pub fn index_path(&self) -> PathBuf {
        self.docs_dir.join(&self.index_file)
    }

    /// Apply command-line overrides. An explicit index path is used as given.
    pub fn with_overrides(mut self, docs_dir: Option<PathBuf>, index: Option<PathBuf>) -> Self {
        if let Some(dir) = docs_dir {
            self.docs_dir = dir;
        }
        if let Some(index) = index {
            self.index_file = if index.is_absolute() {
                index
            } else {
                std::env::current_dir().map(|cwd| cwd.join(&index)).unwrap_or(index)
            };
        }
        self
    }
}

pub fn load_config(path: &Path) -> DocsResult<DocsConfig> {
    let s = std::fs::read_to_string(path)
        .map_err(|e| DocsError::Config(format!("{}: {e}", path.display())))?;
    toml::from_str(&s).map_err(|e| DocsError::Config(format!("{}: {e}", path.display())))
}

/// Load `explicit` if given, else `changelog-docs.toml` in the working
/// directory when present, else defaults.
pub fn resolve_config(explicit: Option<&Path>) -> DocsResult<DocsConfig> {
    match explicit {
        Some(path) => load_config(path),
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                load_config(default_path)
            } else {
                Ok(DocsConfig::default())
            }
        }
    }
}
