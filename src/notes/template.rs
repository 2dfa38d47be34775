//! Front-matter template for release-notes documents.

/// Marker placed between the front matter and the body.
pub const AUTO_GENERATED_MARKER: &str = "<!-- Auto generated by update changelog github action -->";

/// Render a full notes document.
///
/// The title is substituted literally; quotes inside it are not escaped.
pub fn render_notes_document(title: &str, body: &str) -> String {
    format!(
        "+++\ntitle = \"{title}\"\nhide_menu = true\n+++\n\n{AUTO_GENERATED_MARKER}\n\n{body}\n"
    )
}
