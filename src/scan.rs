//! Page file discovery.
//!
//! Stage 1 of the routegen pipeline. Walks the pages directory depth-first
//! and collects every source file eligible to become a route, in the order
//! the filesystem enumerates entries. That order flows unchanged through the
//! rest of the pipeline, so it determines the final route order.
//!
//! ## Eligibility
//!
//! A file qualifies as a page iff:
//!
//! - its extension is one of `.js`, `.jsx`, `.ts`, `.tsx`;
//! - it is not a TypeScript declaration file (`*.d.ts`);
//! - no folder between the pages root and the file is named like an entry
//!   in the exclude set (whole-segment match — `components/` is excluded by
//!   default, `my-components/` is not).
//!
//! ## Dialect Probe
//!
//! The walk also records whether any `.ts`/`.tsx` file exists under the
//! pages root. The probe runs before the declaration-file and exclusion
//! filters, so a typed file that never becomes a route still switches the
//! generated output to the TypeScript dialect. The probe result lives on the
//! per-run [`PageScan`], never on shared state, so consecutive runs cannot
//! leak the flag into each other.
//!
//! ## Missing Root
//!
//! A project without a pages directory scans to an empty result, not an
//! error — the pipeline still emits (near-)empty artifacts.

use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Extensions of the page-source family, in both dialects.
pub const PAGE_EXTENSIONS: &[&str] = &["js", "jsx", "ts", "tsx"];

const TYPED_EXTENSIONS: &[&str] = &["ts", "tsx"];

/// Result of one discovery pass over the pages directory.
#[derive(Debug, Default)]
pub struct PageScan {
    /// Absolute paths of qualifying page files, in walk order.
    pub files: Vec<PathBuf>,
    /// True if any `.ts`/`.tsx` file was observed during the walk.
    pub uses_typescript: bool,
}

/// Discover page files under `pages_root`.
pub fn scan(pages_root: &Path, exclude_folders: &[String]) -> Result<PageScan, ScanError> {
    let mut result = PageScan::default();
    if !pages_root.is_dir() {
        return Ok(result);
    }

    for entry in WalkDir::new(pages_root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_page_extension(path) {
            continue;
        }
        // Probe before filtering: an excluded or declaration-only typed file
        // still selects the TypeScript output dialect.
        if has_typed_extension(path) {
            result.uses_typescript = true;
        }
        if is_declaration_file(path) {
            continue;
        }
        if is_excluded(path, pages_root, exclude_folders) {
            continue;
        }
        result.files.push(path.to_path_buf());
    }

    Ok(result)
}

fn has_page_extension(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext.as_str()))
}

fn has_typed_extension(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| TYPED_EXTENSIONS.contains(&ext.as_str()))
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_lowercase())
}

fn is_declaration_file(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(".d.ts"))
        .unwrap_or(false)
}

/// True if any directory segment between the pages root and the file is
/// named exactly like an exclude entry.
fn is_excluded(path: &Path, pages_root: &Path, exclude_folders: &[String]) -> bool {
    let rel = path.strip_prefix(pages_root).unwrap_or(path);
    let Some(dirs) = rel.parent() else {
        return false;
    };
    dirs.components().any(|component| {
        let name = component.as_os_str().to_string_lossy();
        exclude_folders.iter().any(|excluded| excluded.as_str() == &*name)
    })
}
