use super::Strategy;
use crate::consts;
use regex::Regex;
use tracing::instrument;

/// Strips the markup down to text and pattern-matches dated image filenames.
///
/// Tries the strict `YYYYMMDD HHMMSS.ext` form first. Only when that finds
/// nothing does it fall back to any `YYYY[-_]MM[-_]DD...ext` looking text,
/// which is far more prone to picking up junk.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternStrategy;
impl PatternStrategy {
    fn text(markup: &str) -> String {
        let text = consts::TAG_REGEX.replace_all(markup, "\n");
        consts::BLANK_LINES_REGEX.replace_all(&text, "\n").into_owned()
    }

    fn matches(regex: &Regex, text: &str) -> Vec<String> {
        regex.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }
}
impl Strategy for PatternStrategy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    #[instrument(level = "debug", skip_all, fields(markup_size = markup.len()))]
    fn extract(&self, markup: &str) -> Vec<String> {
        let text = Self::text(markup);
        let strict = Self::matches(&consts::TIMESTAMPED_FILENAME_REGEX, &text);
        if !strict.is_empty() {
            return strict;
        }
        tracing::debug!("no timestamped filenames, trying loose date pattern");
        Self::matches(&consts::LOOSE_FILENAME_REGEX, &text)
    }
}
