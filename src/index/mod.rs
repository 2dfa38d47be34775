//! The release-notes index document.
//!
//! A hand-maintained markdown page listing every release newest first. This
//! module only ever inserts lines into it; everything it does not add is
//! preserved as-is.

pub mod document;
pub mod order;
pub mod update;

pub use document::{IndexDocument, entry_line};
pub use order::{OrderViolation, check_order};
pub use update::{IndexUpdate, find_insertion_point, plan_index_update, update_index_file};
