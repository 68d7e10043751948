// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;

#[cfg(test)]
use pretty_assertions::assert_eq;
use srcgen::error::Error;
use srcgen::formatter::Formatter;

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn sample() -> Formatter {
    let mut fmt = Formatter::new();
    fmt.doc_comment("\n    Generated.\n");
    fmt.indented_with(Some("fn f() {"), Some("}"), |fmt| fmt.line("g();"));
    fmt
}

#[test]
fn test_update_file_in_directory() -> Result<(), Error> {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    sample().update_file("gen.rs", Some(dir.path()))?;
    assert_eq!(
        fs::read_to_string(dir.path().join("gen.rs")).unwrap(),
        "/// Generated.\nfn f() {\n    g();\n}\n"
    );
    Ok(())
}

#[test]
fn test_update_file_replaces_content() -> Result<(), Error> {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gen.rs");
    fs::write(&path, "old content that is considerably longer than the new one\n").unwrap();

    let mut fmt = Formatter::new();
    fmt.line("new");
    fmt.update_file(&path, None)?;
    assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    Ok(())
}

#[test]
fn test_update_file_empty_directory_means_none() -> Result<(), Error> {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gen.rs");
    sample().update_file(&path, Some(Path::new("")))?;
    assert!(path.is_file());
    Ok(())
}

#[test]
fn test_update_file_empty_buffer_writes_empty_file() -> Result<(), Error> {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    Formatter::new().update_file("empty.rs", Some(dir.path()))?;
    assert_eq!(fs::read(dir.path().join("empty.rs")).unwrap(), b"");
    Ok(())
}

#[test]
fn test_update_file_missing_directory() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("does").join("not").join("exist");
    let err = sample()
        .update_file("gen.rs", Some(missing.as_path()))
        .unwrap_err();
    let Error::FailedToWriteFile(path, source) = err;
    assert_eq!(path, missing.join("gen.rs"));
    assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
}
