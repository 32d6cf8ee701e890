//! Calendar helpers: water years, per-year grouping, and biofix lookup.
use crate::runs::detect_runs;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// The kind of year to group a series by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YearKind {
    /// January 1 through December 31.
    Calendar,
    /// October 1 through September 30, labeled by the year it ends in.
    Water,
}

impl YearKind {
    /// Year label of a date.
    #[inline]
    pub fn year_of(self, date: NaiveDate) -> i32 {
        match self {
            YearKind::Calendar => date.year(),
            YearKind::Water => water_year(date),
        }
    }
}

/// The water year a date falls in.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::water_year;
/// use chrono::NaiveDate;
///
/// assert_eq!(water_year(NaiveDate::from_ymd(2022, 9, 30)), 2022);
/// assert_eq!(water_year(NaiveDate::from_ymd(2022, 10, 1)), 2023);
/// ```
#[inline]
pub fn water_year(date: NaiveDate) -> i32 {
    if date.month() >= 10 {
        date.year() + 1
    } else {
        date.year()
    }
}

/// Zero based day within the water year, October 1 is day 0.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::day_of_water_year;
/// use chrono::NaiveDate;
///
/// assert_eq!(day_of_water_year(NaiveDate::from_ymd(2022, 10, 1)), 0);
/// assert_eq!(day_of_water_year(NaiveDate::from_ymd(2023, 1, 1)), 92);
/// assert_eq!(day_of_water_year(NaiveDate::from_ymd(2023, 9, 30)), 364);
/// ```
pub fn day_of_water_year(date: NaiveDate) -> u32 {
    let start = NaiveDate::from_ymd(water_year(date) - 1, 10, 1);
    (date - start).num_days() as u32
}

/// Split a sorted list of dates into contiguous groups sharing a year label. Each group is the
/// year label and the index range it covers.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::{year_groups, YearKind};
/// use chrono::NaiveDate;
///
/// let dates = [
///     NaiveDate::from_ymd(2021, 9, 30),
///     NaiveDate::from_ymd(2021, 10, 1),
///     NaiveDate::from_ymd(2022, 1, 1),
/// ];
///
/// assert_eq!(year_groups(&dates, YearKind::Water), vec![(2021, 0..1), (2022, 1..3)]);
/// assert_eq!(year_groups(&dates, YearKind::Calendar), vec![(2021, 0..2), (2022, 2..3)]);
/// ```
pub fn year_groups(dates: &[NaiveDate], kind: YearKind) -> Vec<(i32, Range<usize>)> {
    detect_runs(dates.iter().map(|&d| kind.year_of(d)))
        .into_iter()
        .map(|run| (run.value, run.range()))
        .collect()
}

/// Index of the first date on or after the biofix (given as month and day) within `range`, using
/// the year of the first date in the range. `None` if the range starts after the biofix, so only
/// part of the season is present, if it ends before the biofix, or if the biofix is not a valid
/// date in that year.
pub fn biofix_index(
    dates: &[NaiveDate],
    range: Range<usize>,
    month: u32,
    day: u32,
) -> Option<usize> {
    let first = dates.get(range.start)?;
    let biofix = NaiveDate::from_ymd_opt(first.year(), month, day)?;
    if *first > biofix {
        return None;
    }

    dates
        .get(range.clone())?
        .iter()
        .position(|&d| d >= biofix)
        .map(|i| i + range.start)
}
