//! Release-notes documents.
//!
//! One markdown file per release, made of a TOML front-matter block, an
//! auto-generated marker and the rendered notes body.

pub mod emit;
pub mod source;
pub mod template;

pub use emit::NotesEmitter;
pub use source::{FileNotes, NotesSource, RenderedNotes};
pub use template::{AUTO_GENERATED_MARKER, render_notes_document};
