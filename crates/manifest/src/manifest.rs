use crate::error::{ErrorKind, Result};
use crate::group::Grouping;
use crate::template::UrlTemplate;
use exn::OptionExt;
use folio_extract::YearMonth;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::instrument;

/// One month of photos, grouped by day.
///
/// Serializes to the shape the gallery front-end expects, with fields in
/// declaration order and `photos` keyed by ascending day:
///
/// ```json
/// {
///   "user_id": "modem-56k",
///   "year": "2025",
///   "month": "10",
///   "base_url": "https://raw.githubusercontent.com/{user_id}/img/main/{year}/{month}/{day}/",
///   "photos": { "03": ["20251003 131748.jpg"] }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub user_id: String,
    pub year: String,
    pub month: String,
    pub base_url: String,
    pub photos: BTreeMap<String, Vec<String>>,
}
impl Manifest {
    /// Builds the manifest for a grouping, sorting each day's filenames.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::MissingYearMonth`] if the grouping has no year-month.
    /// - [`ErrorKind::Template`] if `base_url` does not compile, or names a
    ///   placeholder other than `user_id`, `year`, `month` and `day`.
    #[instrument(skip(grouping), fields(days = grouping.day_count()))]
    pub fn build(grouping: Grouping, user_id: &str, base_url: &str) -> Result<Self> {
        let YearMonth { year, month } = grouping.year_month.ok_or_raise(|| ErrorKind::MissingYearMonth)?;
        // Fail on a broken template now, rather than after the file is written.
        let template: UrlTemplate = base_url.parse()?;
        template.render(user_id, &year, &month, "01")?;
        let photos = grouping
            .days
            .into_iter()
            .map(|(day, mut filenames)| {
                filenames.sort();
                (day, filenames)
            })
            .collect();
        Ok(Self {
            user_id: user_id.to_string(),
            year,
            month,
            base_url: base_url.to_string(),
            photos,
        })
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::new(self.year.as_str(), self.month.as_str())
    }

    /// Name of the file this manifest is stored as: `YYYYMM.json`.
    pub fn file_name(&self) -> String {
        format!("{}.json", self.year_month().compact())
    }

    pub fn day_count(&self) -> usize {
        self.photos.len()
    }

    pub fn photo_count(&self) -> usize {
        self.photos.values().map(Vec::len).sum()
    }

    /// Resolves `base_url` for the given day.
    pub fn day_url(&self, day: &str) -> Result<String> {
        let template: UrlTemplate = self.base_url.parse()?;
        template.render(&self.user_id, &self.year, &self.month, day)
    }

    /// The full URL of the first photo of the first day, handy for checking
    /// the manifest resolves to something real. `None` for an empty manifest.
    pub fn example_url(&self) -> Result<Option<String>> {
        let Some((day, photo)) = self.photos.iter().find_map(|(day, photos)| photos.first().map(|p| (day, p))) else {
            return Ok(None);
        };
        Ok(Some(format!("{}{photo}", self.day_url(day)?)))
    }

    /// Pretty JSON with two-space indentation, non-ASCII left as-is.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
