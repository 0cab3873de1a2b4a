//! Test utilities for namegen
//!
//! This crate provides shared testing utilities used across the namegen workspace.

pub mod env;
pub mod fixtures;
pub mod mock;

pub use env::{ENV_LOCK, with_env_var};
pub use fixtures::{SAMPLE_REALM, SAMPLE_TEMPLATE, SAMPLE_WORD_TABLE, write_sample_project};
pub use mock::get_shared_mock_server;

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// All test files land in one gitignored location that is easy to clean up
/// manually if a test aborts.
///
/// # Panics
///
/// Panics if the current directory is unknown or a directory cannot be created.
///
/// # Examples
///
/// ```rust
/// use namegen_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("names.tsv");
/// std::fs::write(&file_path, "Name\r\nAda\r\n").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
