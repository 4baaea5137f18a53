//! Capture dates embedded in image filenames.

use crate::consts;
use regex::Regex;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::instrument;

/// A capture date as it appears in a filename.
///
/// Components are kept as the digit strings found in the filename, so a
/// month of `13` survives untouched. Calendar validity is the operator's
/// problem, not ours.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateKey {
    /// Four digit year
    pub year: String,
    /// Two digit month
    pub month: String,
    /// Two digit day of month
    pub day: String,
}
impl DateKey {
    pub fn new(year: impl Into<String>, month: impl Into<String>, day: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
            day: day.into(),
        }
    }

    pub fn year_month(&self) -> YearMonth {
        YearMonth::new(self.year.as_str(), self.month.as_str())
    }

    /// The day-bucket key: the day of month, zero-padded to two digits.
    pub fn day_key(&self) -> String {
        format!("{:0>2}", self.day)
    }
}
impl Display for DateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}-{}", self.year, self.month, self.day)
    }
}

/// The (year, month) pair a manifest covers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: String,
    pub month: String,
}
impl YearMonth {
    pub fn new(year: impl Into<String>, month: impl Into<String>) -> Self {
        Self {
            year: year.into(),
            month: month.into(),
        }
    }

    /// Compact `YYYYMM` form, used to name manifest files.
    pub fn compact(&self) -> String {
        format!("{}{}", self.year, self.month)
    }
}
impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}-{}", self.year, self.month)
    }
}
impl From<(&str, &str)> for YearMonth {
    fn from((year, month): (&str, &str)) -> Self {
        Self::new(year, month)
    }
}

/// Extracts the capture date from a filename.
///
/// Looks for the first run of eight digits (`YYYYMMDD`), and only when there
/// is none, the first `YYYY-MM-DD` (or `_`-delimited) run. Only the first
/// match counts; anything later in the filename is ignored.
///
/// # Examples
///
/// ```rust
/// use folio_extract::{DateKey, parse_date};
/// assert_eq!(parse_date("20251003 131748.jpg"), Some(DateKey::new("2025", "10", "03")));
/// assert_eq!(parse_date("IMG_2025-10-03.png"), Some(DateKey::new("2025", "10", "03")));
/// assert_eq!(parse_date("holiday.jpg"), None);
/// ```
#[instrument(level = "trace")]
pub fn parse_date(filename: &str) -> Option<DateKey> {
    [&*consts::COMPACT_DATE_REGEX, &*consts::DELIMITED_DATE_REGEX]
        .into_iter()
        .find_map(|regex| first_match(regex, filename))
}

fn first_match(regex: &Regex, filename: &str) -> Option<DateKey> {
    let captures = regex.captures(filename)?;
    Some(DateKey::new(
        captures.get(1)?.as_str(),
        captures.get(2)?.as_str(),
        captures.get(3)?.as_str(),
    ))
}
