//! Image filename and capture date extraction.
//!
//! Takes a snapshot of a web file browser's directory tree (the outer HTML of
//! the tree's `<li>` element, as copied from the browser developer tools) and
//! recovers the image filenames listed in it, along with the capture date each
//! filename carries.

mod consts;
mod date;
pub mod error;
mod strategy;

pub use crate::consts::{DEFAULT_LABEL_SELECTOR, IMAGE_EXTENSIONS};
pub use crate::date::{DateKey, YearMonth, parse_date};
pub use crate::strategy::{Extraction, Extractor, PatternStrategy, Strategy, TreeStrategy, is_image_filename};
