//! Idempotent file emission.
//!
//! Stage 5 of the routegen pipeline. Generation runs before every
//! compilation pass of the host build tool, so writing unconditionally
//! would touch the output files' timestamps on every pass and retrigger the
//! watcher in a loop. The writer therefore compares the proposed content
//! against what is already on disk and skips byte-identical writes.
//!
//! The one exception is the first write of a generator instance's lifetime,
//! which is unconditional: stale output from a previous process must not
//! suppress the initial write of this one.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What the writer did for one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteOutcome {
    /// Content was written (new file, changed content, or forced).
    Written,
    /// Identical content already on disk; no write performed.
    Unchanged,
}

/// A generated file and what happened to it.
#[derive(Debug, Clone)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Write `content` to `dir/filename`, creating `dir` as needed.
///
/// With `force` set the write is unconditional. Otherwise an existing file
/// with byte-identical content is left untouched.
pub fn write_generated(
    dir: &Path,
    filename: &str,
    content: &str,
    force: bool,
) -> Result<GeneratedFile, EmitError> {
    fs::create_dir_all(dir)?;
    let path = dir.join(filename);

    if !force && path.exists() {
        let existing = fs::read(&path)?;
        if existing == content.as_bytes() {
            return Ok(GeneratedFile {
                path,
                outcome: WriteOutcome::Unchanged,
            });
        }
    }

    fs::write(&path, content)?;
    Ok(GeneratedFile {
        path,
        outcome: WriteOutcome::Written,
    })
}
