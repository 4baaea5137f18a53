//! Bucketing filenames by the day of month they were captured.

use folio_extract::{YearMonth, parse_date};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::instrument;

/// A file dated outside the month the run settled on.
///
/// Non-fatal: the file is still filed under its own day of month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossMonth {
    pub filename: String,
    /// The year-month parsed from the file itself
    pub found: YearMonth,
    /// The canonical year-month of the run
    pub expected: YearMonth,
}
impl Display for CrossMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} is from {}, not {}", self.filename, self.found, self.expected)
    }
}

/// Filenames bucketed by two-digit day of month.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grouping {
    /// Day key to filenames, in the order they were given
    pub days: BTreeMap<String, Vec<String>>,
    /// Year-month of the first file with a date; `None` if nothing had one
    pub year_month: Option<YearMonth>,
    pub warnings: Vec<CrossMonth>,
    /// Number of filenames without a recognisable date
    pub skipped: usize,
}
impl Grouping {
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }

    pub fn photo_count(&self) -> usize {
        self.days.values().map(Vec::len).sum()
    }
}

/// Groups filenames by the day of month in their embedded date.
///
/// The first filename with a date fixes the canonical year-month of the run.
/// Later files from any other month raise a [`CrossMonth`] warning but are
/// still bucketed by their own day, so a `2025-11-03` file shares the `"03"`
/// bucket with `2025-10-03` files. Filenames without a date are skipped.
///
/// # Examples
///
/// ```rust
/// use folio_manifest::group_by_day;
/// let grouping = group_by_day(["20251003 131748.jpg", "20251005 090000.png", "cat.jpg"]);
/// assert_eq!(grouping.day_count(), 2);
/// assert_eq!(grouping.skipped, 1);
/// ```
#[instrument(skip_all)]
pub fn group_by_day<I, S>(filenames: I) -> Grouping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut grouping = Grouping::default();
    for filename in filenames {
        let filename = filename.as_ref();
        let Some(date) = parse_date(filename) else {
            tracing::debug!(filename, "no date in filename, skipping");
            grouping.skipped += 1;
            continue;
        };
        let found = date.year_month();
        let expected = grouping.year_month.get_or_insert_with(|| found.clone());
        if *expected != found {
            tracing::warn!(filename, found = %found, expected = %expected, "file from a different month");
            grouping.warnings.push(CrossMonth {
                filename: filename.to_string(),
                found,
                expected: expected.clone(),
            });
        }
        grouping.days.entry(date.day_key()).or_default().push(filename.to_string());
    }
    tracing::debug!(days = grouping.day_count(), photos = grouping.photo_count(), "grouped filenames by day");
    grouping
}
