//! Shared test utilities for the routegen test suite.
//!
//! Provides temp-project builders so tests can assemble a pages tree in a
//! couple of lines.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = page_project();
//! write_page(tmp.path(), "blog/post.tsx");
//! add_layouts(tmp.path());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create an empty project: a temp directory containing `src/pages`.
pub fn page_project() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("src/pages")).unwrap();
    tmp
}

/// Create a page file at `src/pages/<rel>`, creating parent directories.
/// Content is a placeholder component; only the path matters to the
/// pipeline.
pub fn write_page(project_root: &Path, rel: &str) -> PathBuf {
    let path = project_root.join("src/pages").join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "export default () => null;\n").unwrap();
    path
}

/// Create the `src/layouts` directory that triggers global layout wrapping.
pub fn add_layouts(project_root: &Path) {
    fs::create_dir_all(project_root.join("src/layouts")).unwrap();
}
