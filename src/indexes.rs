//! Climate indexes computed from a daily series: hot and frost day counts, heatwaves, frost dates,
//! degree day event dates, and simple totals.

use crate::{
    accumulate::first_crossing_optioned,
    calendar::{biofix_index, year_groups, YearKind},
    classify::{classify_profile, Comparator},
    config::Thresholds,
    degree_days::degree_day_profile,
    error::{AnalysisError, Result},
    runs::spells,
    series::{DailyRow, DailySeries},
};
use chrono::{Datelike, NaiveDate};
use itertools::izip;
use metfor::{Celsius, Mm, Quantity};
use optional::Optioned;
use tracing::{debug, warn};

/// A run of consecutive days meeting a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spell {
    /// First day of the spell.
    pub start: NaiveDate,
    /// Last day of the spell (inclusive).
    pub end: NaiveDate,
    /// Number of days in the spell.
    pub length: usize,
}

/// Number of days with a maximum temperature above `threshold`. Missing days are not counted.
#[inline]
pub fn hot_days(series: &DailySeries, threshold: Celsius) -> Result<usize> {
    count_days(
        series.checked(series.max_temperature_profile())?,
        Comparator::Above,
        threshold,
    )
}

/// Number of days with a minimum temperature at or below `threshold`. Missing days are not
/// counted.
#[inline]
pub fn frost_days(series: &DailySeries, threshold: Celsius) -> Result<usize> {
    count_days(
        series.checked(series.min_temperature_profile())?,
        Comparator::AtOrBelow,
        threshold,
    )
}

fn count_days(profile: &[Optioned<Celsius>], cmp: Comparator, threshold: Celsius) -> Result<usize> {
    Ok(classify_profile(profile, cmp, threshold)
        .into_iter()
        .filter(|flag| *flag == Some(true))
        .count())
}

/// Find heatwaves, runs of at least `min_length` consecutive days with a maximum temperature above
/// `threshold`. A missing day ends a heatwave.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::heatwaves;
/// use chrono::NaiveDate;
/// use metfor::Celsius;
/// # use agclimate_analysis::doctest::make_test_series;
///
/// // Max temperatures: 36.0, 37.0, 38.5, 39.0, 40.0, 36.5, 38.2, 39.1
/// let series = make_test_series();
/// let waves = heatwaves(&series, Celsius(38.0), 3).unwrap();
///
/// assert_eq!(waves.len(), 1);
/// assert_eq!(waves[0].start, NaiveDate::from_ymd(2021, 6, 30));
/// assert_eq!(waves[0].end, NaiveDate::from_ymd(2021, 7, 2));
/// assert_eq!(waves[0].length, 3);
/// ```
pub fn heatwaves(
    series: &DailySeries,
    threshold: Celsius,
    min_length: usize,
) -> Result<Vec<Spell>> {
    if min_length == 0 {
        return Err(AnalysisError::InvalidInput);
    }

    let tmax = series.checked(series.max_temperature_profile())?;
    let dates = series.dates();

    let flags = classify_profile(tmax, Comparator::Above, threshold)
        .into_iter()
        .map(|flag| flag.unwrap_or(false));

    let waves: Vec<Spell> = spells(flags, min_length)
        .into_iter()
        .map(|run| Spell {
            start: dates[run.start],
            end: dates[run.end() - 1],
            length: run.length,
        })
        .collect();

    debug!(count = waves.len(), min_length, "heatwaves found");

    Ok(waves)
}

/// Frost dates for one calendar year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrostDates {
    /// The calendar year.
    pub year: i32,
    /// The last day before July 1 with frost.
    pub last_spring_frost: Option<DailyRow>,
    /// The first day on or after July 1 with frost.
    pub first_fall_frost: Option<DailyRow>,
}

impl FrostDates {
    /// Number of days strictly between the last spring frost and the first fall frost.
    #[inline]
    pub fn growing_season_length(&self) -> Option<i64> {
        let spring = self.last_spring_frost?.date;
        let fall = self.first_fall_frost?.date;

        Some((fall - spring).num_days() - 1)
    }
}

/// Last spring and first fall frost for every calendar year in the series. Spring is January 1
/// through June 30.
pub fn frost_dates(series: &DailySeries, threshold: Celsius) -> Result<Vec<FrostDates>> {
    let tmin = series.checked(series.min_temperature_profile())?;
    let dates = series.dates();

    let result = year_groups(dates, YearKind::Calendar)
        .into_iter()
        .map(|(year, range)| {
            let frost_idxs = izip!(range.clone(), &dates[range.clone()], &tmin[range])
                // Remove days with missing data
                .filter(|(_, _, t)| t.is_some())
                // Keep the frosty ones
                .filter(|(_, _, t)| t.unpack() <= threshold)
                .map(|(i, d, _)| (i, d.month() < 7));

            let (mut last_spring, mut first_fall) = (None, None);
            for (i, is_spring) in frost_idxs {
                if is_spring {
                    last_spring = Some(i);
                } else if first_fall.is_none() {
                    first_fall = Some(i);
                }
            }

            FrostDates {
                year,
                last_spring_frost: last_spring.and_then(|i| series.daily_row(i)),
                first_fall_frost: first_fall.and_then(|i| series.daily_row(i)),
            }
        })
        .collect();

    Ok(result)
}

/// Frost-free days between the last spring frost and first fall frost of `year`. `None` if the
/// year is not in the series or either frost date was not observed.
pub fn growing_season_length(
    series: &DailySeries,
    year: i32,
    threshold: Celsius,
) -> Result<Option<i64>> {
    Ok(frost_dates(series, threshold)?
        .into_iter()
        .find(|fd| fd.year == year)
        .and_then(|fd| fd.growing_season_length()))
}

/// For each calendar year, the date accumulated degree days since the biofix first reach the
/// configured target. A year whose data starts after the biofix, or never reaches the target,
/// maps to `None`.
///
/// A missing temperature between the biofix and the crossing date leaves that year's date unknown,
/// so it also maps to `None`. Other years are unaffected.
pub fn degree_day_dates(
    series: &DailySeries,
    thresholds: &Thresholds,
) -> Result<Vec<(i32, Option<NaiveDate>)>> {
    let (lower, upper) = thresholds.degree_day_range();
    let profile = degree_day_profile(series, lower, upper, thresholds.degree_day_method)?;
    let dates = series.dates();
    let target = thresholds.degree_day_target_c();

    year_groups(dates, YearKind::Calendar)
        .into_iter()
        .map(|(year, range)| {
            let start = match biofix_index(
                dates,
                range.clone(),
                thresholds.biofix_month,
                thresholds.biofix_day,
            ) {
                Some(start) => start,
                None => return Ok((year, None)),
            };

            match first_crossing_optioned(&profile[range.clone()], target, start - range.start) {
                Ok(crossing) => Ok((year, crossing.map(|c| dates[c.index + range.start]))),
                Err(AnalysisError::MissingValue) => {
                    warn!(year, "missing temperature before degree day target was reached");
                    Ok((year, None))
                }
                Err(err) => Err(err),
            }
        })
        .collect()
}

/// Trailing mean over `window` days. A value is missing until a full window is available, and
/// whenever the window contains a missing day.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::rolling_mean;
/// use optional::{none, some};
///
/// let vals = [some(1.0), some(2.0), some(3.0), none(), some(5.0), some(6.0)];
/// let means = rolling_mean(&vals, 2).unwrap();
///
/// assert!(means[0].is_none());
/// assert_eq!(means[1].unwrap(), 1.5);
/// assert_eq!(means[2].unwrap(), 2.5);
/// assert!(means[3].is_none());
/// assert!(means[4].is_none());
/// assert_eq!(means[5].unwrap(), 5.5);
/// ```
pub fn rolling_mean(values: &[Optioned<f64>], window: usize) -> Result<Vec<Optioned<f64>>> {
    if window == 0 {
        return Err(AnalysisError::InvalidInput);
    }

    let mut result: Vec<Optioned<f64>> = vec![optional::none(); values.len().min(window - 1)];

    result.extend(values.windows(window).map(|win| {
        win.iter()
            .map(|v| v.into_option())
            .sum::<Option<f64>>()
            .map(|sum| sum / window as f64)
            .map_or_else(optional::none, optional::some)
    }));

    Ok(result)
}

/// Total precipitation over the series, ignoring missing days.
#[inline]
pub fn total_precipitation(series: &DailySeries) -> Result<Mm> {
    total(series.checked(series.precipitation_profile())?)
}

/// Total reference evapotranspiration over the series, ignoring missing days.
#[inline]
pub fn total_reference_et(series: &DailySeries) -> Result<Mm> {
    total(series.checked(series.reference_et_profile())?)
}

fn total(profile: &[Optioned<Mm>]) -> Result<Mm> {
    let sum = profile
        .iter()
        .filter_map(|v| v.into_option())
        .map(|v| v.unpack())
        .sum();

    Ok(Mm(sum))
}
