//! CLI command handler for `check`.

use tracing::{info, warn};

use crate::config::DocsConfig;
use crate::index::check_order;
use crate::{DocsError, DocsResult};

/// Verify the index is newest first with one line per release.
///
/// Each violation is printed; any violation makes the command fail.
pub fn run(config: &DocsConfig) -> DocsResult<()> {
    let index_path = config.index_path();
    let text = std::fs::read_to_string(&index_path)
        .map_err(|e| DocsError::io("read index", &index_path, e))?;

    let violations = check_order(&text);
    if violations.is_empty() {
        info!(index = %index_path.display(), "index order ok");
        return Ok(());
    }

    for v in &violations {
        warn!("{v}");
        eprintln!("{}: {v}", index_path.display());
    }
    Err(DocsError::Message(format!(
        "{} problem(s) found in {}",
        violations.len(),
        index_path.display()
    )))
}
