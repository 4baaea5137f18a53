//! Run Error Types
//!
//! Every failure is terminal for the run; these map straight to the exit
//! code and the message shown to the operator.

use derive_more::{Display, Error};
use std::path::PathBuf;

pub type Error = exn::Exn<ErrorKind>;
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    #[display("input file does not exist: {}", _0.display())]
    InputNotFound(#[error(not(source))] PathBuf),
    #[display("could not read input file: {}", _0.display())]
    ReadInput(#[error(not(source))] PathBuf),
    #[display("no image filenames found in the input")]
    NoFilenames,
    #[display("no filename contains a recognisable date")]
    NoDateInfo,
    #[display("could not determine the year and month of the photos")]
    MissingYearMonth,
    #[display("failed to save manifest: {_0}")]
    Write(#[error(not(source))] String),
    #[display("configuration error: {_0}")]
    Config(#[error(not(source))] String),
}

impl ErrorKind {
    /// Process exit code for this failure. `2` is left to argument parsing.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ReadInput(_) => 1,
            Self::InputNotFound(_) => 3,
            Self::NoFilenames => 4,
            Self::NoDateInfo => 5,
            Self::MissingYearMonth => 6,
            Self::Write(_) => 7,
            Self::Config(_) => 8,
        }
    }

    /// What the operator can do about it, if there is anything useful to say.
    pub fn hints(&self) -> &'static [&'static str] {
        match self {
            Self::NoFilenames => &[
                "make sure you copied the outerHTML of the <li> element that contains the images",
                "make sure every day folder was expanded before copying",
            ],
            Self::NoDateInfo => &["filenames must contain a date, e.g. 20251003 131748.jpg or 2025-10-03.jpg"],
            _ => &[],
        }
    }
}

/// Raises `kind` over `err`, carrying the underlying message along so the
/// operator sees why without digging through the error tree.
pub(crate) fn raise_with<E>(err: exn::Exn<E>, kind: impl FnOnce(String) -> ErrorKind) -> Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    let reason = (*err).to_string();
    err.raise(kind(reason))
}
