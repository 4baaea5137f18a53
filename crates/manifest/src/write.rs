//! Persisting manifests to the output directory.

use crate::error::{ErrorKind, Result};
use crate::manifest::Manifest;
use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::instrument;

/// Whether a write created a new manifest or replaced an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
}

/// Where a manifest ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub outcome: WriteOutcome,
}

/// Writes the manifest to `<dir>/<YYYYMM>.json`, creating `dir` if needed.
///
/// An existing manifest for the same month is replaced wholesale, never
/// merged; re-running with a fuller snapshot is how a month gets updated.
/// The file is truncated then written, so a crash part way through can leave
/// it incomplete.
#[instrument(skip_all, fields(dir = %dir.as_ref().display(), year_month = %manifest.year_month()))]
pub fn write_manifest(manifest: &Manifest, dir: impl AsRef<Path>) -> Result<Written> {
    let dir = dir.as_ref();
    create_dir_all(dir).map_err(|e| map_io_error(e, dir))?;
    let path = dir.join(manifest.file_name());
    let outcome = match path.is_file() {
        true => WriteOutcome::Overwritten,
        false => WriteOutcome::Created,
    };
    let file = File::create(&path).map_err(|e| map_io_error(e, &path))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, manifest).map_err(|e| map_io_error(e.into(), &path))?;
    writer.flush().map_err(|e| map_io_error(e, &path))?;
    tracing::debug!(path = %path.display(), ?outcome, "manifest written");
    Ok(Written { path, outcome })
}

fn map_io_error(e: std::io::Error, path: &Path) -> ErrorKind {
    match e.kind() {
        std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied(path.to_path_buf()),
        std::io::ErrorKind::AlreadyExists
        | std::io::ErrorKind::NotADirectory
        | std::io::ErrorKind::IsADirectory => ErrorKind::PathCollision(path.to_path_buf()),
        _ => ErrorKind::Io {
            path: path.to_path_buf(),
            source: e,
        },
    }
}
