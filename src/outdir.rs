//! Destination directory bookkeeping.
//!
//! One directory per run, named after the subject's hostname. Conflict
//! handling is the only fatal path in the whole system: an existing
//! directory without `--overwrite` aborts the run before any extraction.

use crate::Result;
use crate::runlog::RunLog;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The output path is already occupied and overwriting was not requested.
#[derive(Debug, Error)]
#[error("target directory '{}' exists already", .path.display())]
pub struct DirectoryConflict {
    pub path: PathBuf,
}

/// Resolve and create the per-subject output directory under `base`.
///
/// An existing directory is deleted first when `overwrite` is set, and
/// fatal otherwise. Runs once, before any plugin invocation.
pub fn create_destination_directory(
    base: &Path,
    hostname: &str,
    overwrite: bool,
    log: &mut dyn RunLog,
) -> Result<PathBuf> {
    log.info(&format!(
        "found image with hostname '{hostname}'; creating target directory for it"
    ));

    let dst = base.join(hostname);
    if dst.exists() {
        if overwrite {
            log.info(&format!(
                "target directory '{}' exists already, deleting it",
                dst.display()
            ));
            fs::remove_dir_all(&dst)
                .with_context(|| format!("delete {}", dst.display()))?;
        } else {
            log.error(&format!(
                "target directory '{}' exists already, exiting",
                dst.display()
            ));
            return Err(DirectoryConflict { path: dst }.into());
        }
    }

    fs::create_dir_all(&dst).with_context(|| format!("create {}", dst.display()))?;
    Ok(dst)
}
