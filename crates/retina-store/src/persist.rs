//! Flat-file persistence for explicit export actions.
//!
//! These CSV files are the only state that outlives the process.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::info;

use crate::error::StoreError;
use crate::store::{EVALUATIONS_FILE_NAME, ExportBundle, METRICS_FILE_NAME};

/// Paths written by [`persist_exports`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedExports {
    pub metrics_path: PathBuf,
    pub evaluations_path: PathBuf,
}

/// Write both CSV exports into `dir`, creating it if needed.
///
/// Each file is written to its own temporary sibling and renamed into place,
/// so a reader never sees a half-written export and concurrent calls on the
/// same directory do not collide.
pub fn persist_exports(dir: &Path, bundle: &ExportBundle) -> Result<PersistedExports, StoreError> {
    std::fs::create_dir_all(dir).map_err(|source| io_error(dir, source))?;

    let metrics_path = dir.join(METRICS_FILE_NAME);
    let evaluations_path = dir.join(EVALUATIONS_FILE_NAME);

    write_atomic(dir, &metrics_path, &bundle.metrics_csv)?;
    write_atomic(dir, &evaluations_path, &bundle.evaluations_csv)?;

    info!(
        dir = %dir.display(),
        metrics_bytes = bundle.metrics_csv.len(),
        evaluations_bytes = bundle.evaluations_csv.len(),
        "exports saved"
    );

    Ok(PersistedExports {
        metrics_path,
        evaluations_path,
    })
}

fn write_atomic(dir: &Path, path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    // A uniquely named sibling per write, so overlapping exports never share
    // a temp file.
    let mut tmp = NamedTempFile::new_in(dir).map_err(|source| io_error(dir, source))?;
    tmp.write_all(bytes)
        .map_err(|source| io_error(tmp.path(), source))?;
    tmp.persist(path)
        .map_err(|e| io_error(path, e.error))?;
    Ok(())
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.display().to_string(),
        source,
    }
}
