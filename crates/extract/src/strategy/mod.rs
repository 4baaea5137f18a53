//! Filename extraction strategies for file-tree HTML snapshots.

mod pattern;
mod tree;

pub use self::pattern::PatternStrategy;
pub use self::tree::TreeStrategy;
use crate::consts::IMAGE_EXTENSIONS;
use crate::error::{ErrorKind, Result};
use std::fmt::Debug;
use tracing::instrument;

/// One way of recovering image filenames from markup.
///
/// Strategies never fail outright: markup they can't make sense of simply
/// yields no filenames, and the [`Extractor`] moves on to the next one.
pub trait Strategy: Debug {
    /// Short name used when reporting which strategy produced a result.
    fn name(&self) -> &'static str;
    /// Returns filenames in order of appearance, duplicates included.
    fn extract(&self, markup: &str) -> Vec<String>;
}

/// The filenames recovered from a snapshot, and the strategy that found them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub filenames: Vec<String>,
    pub strategy: &'static str,
}
impl Extraction {
    pub fn len(&self) -> usize {
        self.filenames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filenames.is_empty()
    }
}

/// Runs a chain of [`Strategy`] implementations in order, keeping the first
/// non-empty result.
#[derive(Debug)]
pub struct Extractor {
    strategies: Vec<Box<dyn Strategy>>,
}
impl Extractor {
    pub fn new(strategies: Vec<Box<dyn Strategy>>) -> Self {
        Self { strategies }
    }

    /// The usual chain, document tree first and pattern matching as the
    /// fallback, reading tree labels with a custom CSS selector.
    pub fn with_label_selector(css: &str) -> Result<Self> {
        Ok(Self::new(vec![Box::new(TreeStrategy::new(css)?), Box::new(PatternStrategy)]))
    }

    /// Extracts image filenames from the markup.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::NoFilenames`] if no strategy found anything.
    #[instrument(skip_all, fields(markup_size = markup.len()))]
    pub fn extract(&self, markup: &str) -> Result<Extraction> {
        for strategy in &self.strategies {
            let filenames = strategy.extract(markup);
            if !filenames.is_empty() {
                tracing::debug!(strategy = strategy.name(), count = filenames.len(), "extracted filenames");
                return Ok(Extraction {
                    filenames,
                    strategy: strategy.name(),
                });
            }
            tracing::info!(strategy = strategy.name(), "strategy found no filenames");
        }
        exn::bail!(ErrorKind::NoFilenames);
    }

    /// Same as [`extract`](Self::extract), but accepts raw bytes instead of
    /// requiring the snapshot to be valid UTF-8. Invalid byte sequences are
    /// replaced with U+FFFD.
    pub fn extract_bytes(&self, markup: impl AsRef<[u8]>) -> Result<Extraction> {
        self.extract(&String::from_utf8_lossy(markup.as_ref()))
    }
}
impl Default for Extractor {
    fn default() -> Self {
        Self::new(vec![Box::new(TreeStrategy::default()), Box::new(PatternStrategy)])
    }
}

/// Returns `true` if the name has a recognised image extension (any case).
///
/// ```rust
/// use folio_extract::is_image_filename;
/// assert!(is_image_filename("20251003 131748.JPG"));
/// assert!(!is_image_filename("jpg"));
/// assert!(!is_image_filename("notes.txt"));
/// ```
pub fn is_image_filename(name: &str) -> bool {
    if !name.contains('.') {
        return false;
    }
    let lower = name.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .any(|ext| lower.strip_suffix(ext).is_some_and(|stem| stem.ends_with('.')))
}
