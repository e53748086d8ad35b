//! Tests for the filesystem utilities
//!
//! These tests verify:
//! - Directory listing distinguishes absent from empty
//! - Scoped reads surface missing files as NotFound
//! - Scoped writes create parents, replace atomically and clean up on failure

use std::fs;
use std::io::{self, Read, Write};

use jsonstore::fsutil::{self, DirEntryInfo};
use tempfile::TempDir;

// =============================================================================
// read_dir Tests
// =============================================================================

#[test]
fn test_read_dir_missing_directory() {
    let temp_dir = TempDir::new().unwrap();

    let listing = fsutil::read_dir(&temp_dir.path().join("absent")).unwrap();

    assert!(listing.is_none());
}

#[test]
fn test_read_dir_empty_directory() {
    let temp_dir = TempDir::new().unwrap();

    let listing = fsutil::read_dir(temp_dir.path()).unwrap();

    assert_eq!(listing, Some(vec![]));
}

#[test]
fn test_read_dir_reports_directories() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("file.json"), "{}").unwrap();
    fs::create_dir(temp_dir.path().join("dir.json")).unwrap();

    let mut listing = fsutil::read_dir(temp_dir.path()).unwrap().unwrap();
    listing.sort_by(|a, b| a.name.cmp(&b.name));

    assert_eq!(
        listing,
        vec![
            DirEntryInfo {
                name: "dir.json".into(),
                is_dir: true,
            },
            DirEntryInfo {
                name: "file.json".into(),
                is_dir: false,
            },
        ]
    );
}

#[test]
fn test_read_dir_on_file_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("plain");
    fs::write(&file, "x").unwrap();

    assert!(fsutil::read_dir(&file).is_err());
}

#[test]
fn test_strip_extension() {
    let info = |name: &str| DirEntryInfo {
        name: name.into(),
        is_dir: false,
    };

    assert_eq!(info("a.json").strip_extension("json"), Some("a"));
    assert_eq!(info("a.b.json").strip_extension("json"), Some("a.b"));
    assert_eq!(info(".json").strip_extension("json"), Some(""));
    assert_eq!(info("ajson").strip_extension("json"), None);
    assert_eq!(info("a.json.tmp").strip_extension("json"), None);
    assert_eq!(info("a.JSON").strip_extension("json"), None);
}

// =============================================================================
// read_file_with Tests
// =============================================================================

#[test]
fn test_read_file_with_contents() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("data");
    fs::write(&path, "hello").unwrap();

    let contents = fsutil::read_file_with(&path, |reader| {
        let mut s = String::new();
        reader.read_to_string(&mut s)?;
        Ok::<_, io::Error>(s)
    })
    .unwrap();

    assert_eq!(contents, "hello");
}

#[test]
fn test_read_file_with_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut called = false;

    let err = fsutil::read_file_with(&temp_dir.path().join("absent"), |_| {
        called = true;
        Ok::<_, io::Error>(())
    })
    .unwrap_err();

    assert_eq!(err.kind(), io::ErrorKind::NotFound);
    assert!(!called);
}

// =============================================================================
// write_file_with Tests
// =============================================================================

#[test]
fn test_write_file_with_creates_parents() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("x").join("y").join("out.json");

    fsutil::write_file_with(&path, false, |w| w.write_all(b"data")).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "data");
}

#[test]
fn test_write_file_with_replaces_existing() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");
    fs::write(&path, "a much longer original body").unwrap();

    fsutil::write_file_with(&path, true, |w| w.write_all(b"short")).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "short");
}

#[test]
fn test_write_file_with_failure_keeps_original() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.json");
    fs::write(&path, "original").unwrap();

    let result = fsutil::write_file_with(&path, false, |w| {
        w.write_all(b"half written")?;
        Err(io::Error::new(io::ErrorKind::Other, "encoder failed"))
    });

    assert!(result.is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "original");

    // The temp file went away with the failed write
    let names: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, vec![std::ffi::OsString::from("out.json")]);
}

#[test]
fn test_write_file_with_leaves_no_sibling_files() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("out.tmp");
    let neighbour = temp_dir.path().join("out.tmp.tmp");
    fs::write(&neighbour, "keep me").unwrap();

    fsutil::write_file_with(&path, false, |w| w.write_all(b"new")).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    assert_eq!(fs::read_to_string(&neighbour).unwrap(), "keep me");
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 2);
}

// =============================================================================
// exists / remove_file Tests
// =============================================================================

#[test]
fn test_exists_and_remove() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("f");

    assert!(!fsutil::exists(&path).unwrap());
    fs::write(&path, "x").unwrap();
    assert!(fsutil::exists(&path).unwrap());

    fsutil::remove_file(&path).unwrap();
    assert!(!fsutil::exists(&path).unwrap());
    assert_eq!(
        fsutil::remove_file(&path).unwrap_err().kind(),
        io::ErrorKind::NotFound
    );
}
