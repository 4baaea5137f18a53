//! Extraction Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// An extraction error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The configured tree label selector is not valid CSS.
    #[display("invalid label selector '{selector}': {reason}")]
    InvalidSelector {
        /// The selector as configured.
        selector: String,
        /// Why the selector parser rejected it.
        reason: String,
    },
    /// Every strategy came back empty handed.
    #[display("no image filenames found in markup")]
    NoFilenames,
}
