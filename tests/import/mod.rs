//! # Reading problem files from disk
//!
//! Problem files are written to a temporary directory, read back and solved.
use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Write a problem file into a fresh temporary directory.
///
/// # Arguments
///
/// * `name`: File name, including the extension.
/// * `contents`: Text to write.
///
/// # Return value
///
/// The directory, which is removed when dropped, and the path of the file.
fn write_problem_file(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join(name);
    fs::write(&path, contents).unwrap();

    (directory, path)
}
