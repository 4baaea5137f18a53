use super::{Strategy, is_image_filename};
use crate::consts::DEFAULT_LABEL_SELECTOR;
use crate::error::{ErrorKind, Result};
use scraper::{Html, Selector};
use tracing::instrument;

/// Parses the markup into a document tree and reads the text of every
/// file-tree label element.
#[derive(Debug, Clone)]
pub struct TreeStrategy {
    selector: Selector,
}
impl TreeStrategy {
    /// Builds a strategy for a custom label selector.
    pub fn new(css: &str) -> Result<Self> {
        let selector = match Selector::parse(css) {
            Ok(selector) => selector,
            Err(e) => exn::bail!(ErrorKind::InvalidSelector {
                selector: css.to_string(),
                reason: e.to_string(),
            }),
        };
        Ok(Self { selector })
    }
}
impl Default for TreeStrategy {
    fn default() -> Self {
        Self {
            selector: Selector::parse(DEFAULT_LABEL_SELECTOR).unwrap(),
        }
    }
}
impl Strategy for TreeStrategy {
    fn name(&self) -> &'static str {
        "tree"
    }

    #[instrument(level = "debug", skip_all, fields(markup_size = markup.len()))]
    fn extract(&self, markup: &str) -> Vec<String> {
        let document = Html::parse_fragment(markup);
        let mut filenames = Vec::new();
        for element in document.select(&self.selector) {
            let text = element.text().collect::<String>();
            let text = text.trim();
            if is_image_filename(text) {
                filenames.push(text.to_string());
            } else {
                tracing::trace!(label = text, "skipping non-image tree label");
            }
        }
        filenames
    }
}
