//! Storage lifecycle tests for the document buffer
//!
//! These exercise the real filesystem through scratch directories: binding,
//! round trips, and the guarantee that failed operations leave the buffer
//! untouched.

use std::fs;
use std::path::MAIN_SEPARATOR;

use kaatib_doc::{Document, DocumentError};

#[test]
fn write_then_read_round_trips_byte_for_byte() {
    let dir = tempfile::tempdir().expect("tempdir");
    let text = "line one\nline two\nوثيقة قصيرة\n";

    let mut doc = Document::from_text(text);
    doc.write(Some(dir.path())).expect("write");
    assert!(!doc.is_modified());

    // Dirty the buffer, then restore it from the bound folder
    doc.set_contents("scratch");
    assert!(doc.is_modified());

    doc.read(None).expect("read from stored folder");
    assert_eq!(doc.contents(), text);
    assert!(!doc.is_modified());
}

#[test]
fn write_binds_the_resolved_folder_with_trailing_separator() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut doc = Document::from_text("content");
    assert!(doc.file_folder().is_none());

    doc.write(Some(dir.path())).expect("write");
    let folder = doc.file_folder().expect("bound after write");
    assert!(folder.ends_with(MAIN_SEPARATOR));
    assert!(folder.starts_with(&dir.path().to_string_lossy().into_owned()));

    let on_disk = fs::read_to_string(dir.path().join(doc.file_name())).expect("file exists");
    assert_eq!(on_disk, "content");
}

#[test]
fn from_file_adopts_identity_and_clears_dirty_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("notes.txt");
    fs::write(&path, "saved text").expect("seed file");

    let doc = Document::from_file(&path).expect("from_file");
    assert_eq!(doc.contents(), "saved text");
    assert_eq!(doc.file_name(), "notes.txt");
    assert!(!doc.is_modified());

    let folder = doc.file_folder().expect("bound");
    assert!(folder.ends_with(MAIN_SEPARATOR));
    assert!(folder.starts_with(&dir.path().to_string_lossy().into_owned()));
}

#[test]
fn from_file_on_missing_path_fails_with_io() {
    let dir = tempfile::tempdir().expect("tempdir");
    let result = Document::from_file(&dir.path().join("missing.txt"));
    assert!(matches!(result, Err(DocumentError::Io(_))));
}

#[test]
fn from_file_on_invalid_utf8_fails_with_io() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("binary.bin");
    fs::write(&path, [0xFF, 0xFE, 0x00]).expect("seed file");

    let result = Document::from_file(&path);
    assert!(matches!(result, Err(DocumentError::Io(_))));
}

#[test]
fn failed_read_leaves_contents_and_binding_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut doc = Document::from_text("unsaved work");
    let err = doc.read(Some(dir.path())).expect_err("no such file");
    assert!(matches!(err, DocumentError::Io(_)));

    assert_eq!(doc.contents(), "unsaved work");
    assert!(doc.file_folder().is_none());
    assert!(doc.is_modified());
}

#[test]
fn failed_write_leaves_binding_and_dirty_flag_untouched() {
    let dir = tempfile::tempdir().expect("tempdir");
    let missing = dir.path().join("no-such-subdir");

    let mut doc = Document::from_text("unsaved work");
    let err = doc.write(Some(&missing)).expect_err("folder does not exist");
    assert!(matches!(err, DocumentError::Io(_)));

    assert!(doc.file_folder().is_none());
    assert!(doc.is_modified());
}

#[test]
fn low_level_read_does_not_touch_identity_or_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("other.txt");
    fs::write(&path, "other contents").expect("seed file");

    let mut doc = Document::from_text("draft");
    let name_before = doc.file_name().to_string();

    doc.read_contents_from_file(&path).expect("read");
    assert_eq!(doc.contents(), "other contents");
    assert_eq!(doc.file_name(), name_before);
    assert!(doc.file_folder().is_none());
    assert!(doc.is_modified());
}

#[test]
fn low_level_write_does_not_clear_dirty_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("export.txt");

    let doc = Document::from_text("export me");
    doc.write_contents_to_file(&path).expect("write");
    assert!(doc.is_modified());
    assert_eq!(fs::read_to_string(&path).expect("file exists"), "export me");
}

#[test]
fn explicit_folder_takes_precedence_over_stored_folder() {
    let first = tempfile::tempdir().expect("tempdir");
    let second = tempfile::tempdir().expect("tempdir");

    let mut doc = Document::from_text("v1");
    doc.write(Some(first.path())).expect("write to first");

    doc.set_contents("v2");
    doc.write(Some(second.path())).expect("write to second");

    // Rebound to the second folder; first copy still holds v1
    let folder = doc.file_folder().expect("bound");
    assert!(folder.starts_with(&second.path().to_string_lossy().into_owned()));
    let first_copy = fs::read_to_string(first.path().join(doc.file_name())).expect("first copy");
    assert_eq!(first_copy, "v1");
    let second_copy = fs::read_to_string(second.path().join(doc.file_name())).expect("second copy");
    assert_eq!(second_copy, "v2");
}
