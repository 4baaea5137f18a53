//! Monthly photo manifests.
//!
//! Buckets dated image filenames by day of month ([`group_by_day`]), turns the
//! buckets into a [`Manifest`] for the gallery front-end, and writes it to
//! `<dir>/<YYYYMM>.json` ([`write_manifest`]).

pub mod error;
mod group;
mod manifest;
mod template;
mod write;

pub use crate::group::{CrossMonth, Grouping, group_by_day};
pub use crate::manifest::Manifest;
pub use crate::template::UrlTemplate;
pub use crate::write::{WriteOutcome, Written, write_manifest};

/// Owner of the image repository the gallery reads from.
pub const DEFAULT_USER_ID: &str = "modem-56k";
/// Template for the directory holding each day's photos; see [`UrlTemplate`].
pub const DEFAULT_BASE_URL: &str = "https://raw.githubusercontent.com/{user_id}/img/main/{year}/{month}/{day}/";
/// Directory manifests are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "data";
