/// Collision-avoiding reservation of stage output directories.
///
/// The existence check and the creation are not atomic: two processes racing
/// on the same desired name can both observe "does not exist" and one of the
/// two `create_dir` calls will fail. This is a known limitation, accepted
/// because every pipeline stage runs as a single sequential process.
use std::fs;
use std::path::{Path, PathBuf};

use crate::pipeline::PipelineError;

/// Reserve and create a directory named `desired` under `parent`.
///
/// If `parent/desired` already exists as a directory, `desired_1`,
/// `desired_2`, … are tried in order until an unused name is found. When a
/// suffix was needed, a warning naming the substituted path goes to stderr.
///
/// # Errors
///
/// Returns `PipelineError::CreateDir` if the final candidate cannot be
/// created (permissions, missing parent, or a lost creation race).
pub fn reserve_dir(desired: &str, parent: &Path) -> Result<PathBuf, PipelineError> {
    let requested = parent.join(desired);
    let mut candidate = requested.clone();
    let mut suffix = 0u32;
    while candidate.is_dir() {
        suffix += 1;
        candidate = parent.join(format!("{desired}_{suffix}"));
    }
    if suffix > 0 {
        eprintln!("warning: '{}' already exists", requested.display());
        eprintln!("'{}' was generated instead", candidate.display());
    }
    fs::create_dir(&candidate).map_err(|source| PipelineError::CreateDir {
        path: candidate.clone(),
        source,
    })?;
    Ok(candidate)
}

/// Reserve and create a directory as [`reserve_dir`], then compute one
/// `prefix + ext` path per prefix inside it, order preserved.
///
/// The files themselves are not created. An empty prefix list yields an
/// empty vector with the directory still created.
///
/// # Errors
///
/// Same as [`reserve_dir`].
pub fn reserve_dir_with_files(
    desired: &str,
    parent: &Path,
    prefixes: &[String],
    ext: &str,
) -> Result<(PathBuf, Vec<PathBuf>), PipelineError> {
    let dir = reserve_dir(desired, parent)?;
    let files = prefixes
        .iter()
        .map(|prefix| dir.join(format!("{prefix}{ext}")))
        .collect();
    Ok((dir, files))
}
