//! Core types shared by the notes emitter and the index updater.

pub mod slug;
pub mod version;

// Re-export key types for convenience
pub use slug::{DOCUMENT_PREFIX, ReleaseSlug};
pub use version::{cmp_precedence, extract_version, parse_release_version};
