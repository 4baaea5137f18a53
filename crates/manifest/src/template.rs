//! Base URL templating for resolving photo locations.
//!
//! A manifest's `base_url` is a template that the gallery front-end fills in
//! per photo. Placeholders use single braces, in the style of the front-end:
//!
//! | Variable  | Description                     |
//! |-----------|---------------------------------|
//! | `user_id` | Owner of the image repository   |
//! | `year`    | Four digit year                 |
//! | `month`   | Two digit month                 |
//! | `day`     | Two digit day of month          |
//!
//! # Example
//!
//! ```
//! use folio_manifest::UrlTemplate;
//!
//! let template: UrlTemplate = "https://example.com/{user_id}/{year}/{month}/{day}/".parse().unwrap();
//! let url = template.render("me", "2025", "10", "03").unwrap();
//! assert_eq!(url, "https://example.com/me/2025/10/03/");
//! ```

use crate::error::{Error, ErrorKind, Result};
use exn::ResultExt;
use std::str::FromStr;
use tracing::instrument;
use upon::{Engine, Syntax, Template};

/// A compiled base URL template.
///
/// Constructed via [`FromStr`], which compiles the template eagerly so that
/// syntax errors surface before anything is written to disk.
pub struct UrlTemplate {
    engine: Engine<'static>,
    template: Template<'static>,
    source: String,
}
impl FromStr for UrlTemplate {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // Expressions only: URLs have no use for blocks or comments.
        let engine = Engine::with_syntax(Syntax::builder().expr("{", "}").build());
        let template = engine.compile(s.to_string()).or_raise(|| ErrorKind::Template(s.to_string()))?;
        Ok(Self {
            engine,
            template,
            source: s.to_string(),
        })
    }
}
impl UrlTemplate {
    /// Renders the template for one day of a month.
    #[instrument(level = "trace", skip(self), fields(template = self.source.as_str()))]
    pub fn render(&self, user_id: &str, year: &str, month: &str, day: &str) -> Result<String> {
        self.template
            .render(
                &self.engine,
                upon::value! {
                    user_id: user_id,
                    year: year,
                    month: month,
                    day: day,
                },
            )
            .to_string()
            .or_raise(|| ErrorKind::Template(self.source.clone()))
    }
}
