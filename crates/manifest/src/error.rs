//! Manifest Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use std::io::Error as IoError;
use std::path::PathBuf;

/// A manifest error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for manifest operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// Grouping never settled on a year and month, so there is nothing to
    /// name the manifest after.
    #[display("could not determine the year and month of the photos")]
    MissingYearMonth,
    /// The base URL template does not compile, or failed to render.
    #[display("invalid base URL template: {_0}")]
    Template(#[error(not(source))] String),
    /// Access to the output location was denied.
    #[display("permission denied: {}", _0.display())]
    PermissionDenied(#[error(not(source))] PathBuf),
    /// Something other than a directory sits where the output directory
    /// should be, or a directory sits where the manifest file should be.
    #[display("path is in the way: {}", _0.display())]
    PathCollision(#[error(not(source))] PathBuf),
    /// Underlying I/O error while writing the manifest.
    #[display("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: IoError,
    },
}
