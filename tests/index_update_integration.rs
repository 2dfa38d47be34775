//! Integration tests for index updates against a realistic docs index.

use changelog_docs::core::{ReleaseSlug, extract_version};
use changelog_docs::index::{IndexUpdate, check_order, update_index_file};
use changelog_docs::IndexStatus;
use semver::Version;

const BEFORE: &str = include_str!("fixtures/index_before.md");
const AFTER_1_5_0: &str = include_str!("fixtures/index_after_1_5_0.md");

fn add(path: &std::path::Path, release: &str) -> IndexUpdate {
    let version = Version::parse(release).unwrap();
    update_index_file(path, &version, &ReleaseSlug::from_version(&version), false)
        .expect("index update should succeed")
}

fn write_index(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("_index.md");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

fn entry_versions(text: &str) -> Vec<String> {
    text.lines().filter_map(extract_version).map(|v| v.to_string()).collect()
}

#[test]
fn test_insert_matches_fixture() {
    let (_dir, path) = write_index(BEFORE);

    let update = add(&path, "1.5.0");

    assert_eq!(update.status(), IndexStatus::Inserted);
    assert_eq!(update.inserted_at_line(), Some(12));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), AFTER_1_5_0);
}

#[test]
fn test_second_run_is_noop() {
    let (_dir, path) = write_index(AFTER_1_5_0);

    let update = add(&path, "1.5.0");

    assert_eq!(update, IndexUpdate::AlreadyPresent);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), AFTER_1_5_0);
}

#[test]
fn test_headers_and_prose_untouched() {
    let (_dir, path) = write_index(BEFORE);

    add(&path, "3.0.0");
    add(&path, "0.5.0");

    let after = std::fs::read_to_string(&path).unwrap();
    let before_lines: Vec<&str> = BEFORE.lines().collect();
    let after_lines: Vec<&str> = after.lines().collect();
    // everything above the first entry is unchanged
    assert_eq!(before_lines[..10], after_lines[..10]);
    assert_eq!(entry_versions(&after), ["3.0.0", "2.0.0", "1.0.0", "0.5.0"]);
    assert!(after.ends_with("\"release-notes-0-5-0\" >}})\n"));
}

#[test]
fn test_many_releases_stay_descending() {
    let (_dir, path) = write_index(BEFORE);

    for release in ["1.1.0", "2.1.0-beta.1", "2.1.0", "0.0.1", "1.10.0", "1.9.3", "2.1.0-alpha"] {
        add(&path, release);
    }

    let after = std::fs::read_to_string(&path).unwrap();
    assert!(check_order(&after).is_empty(), "{:?}", check_order(&after));
    assert_eq!(
        entry_versions(&after),
        ["2.1.0", "2.1.0-beta.1", "2.1.0-alpha", "2.0.0", "1.10.0", "1.9.3", "1.1.0", "1.0.0", "0.0.1"]
    );
}

#[test]
fn test_crlf_index_is_normalized_on_insert_only() {
    let crlf = BEFORE.replace('\n', "\r\n");
    let (_dir, path) = write_index(&crlf);

    // already present: file left byte-for-byte
    add(&path, "2.0.0");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), crlf);

    add(&path, "1.5.0");
    assert_eq!(std::fs::read_to_string(&path).unwrap(), AFTER_1_5_0);
}
