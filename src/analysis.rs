//! Data type and methods for building and describing an analysis.
//!
//! Not every possible analysis is in this data.
use crate::{
    config::Thresholds,
    error::Result,
    indexes::{
        degree_day_dates, frost_dates, frost_days, heatwaves, hot_days, total_precipitation,
        total_reference_et, FrostDates, Spell,
    },
    keys::SeriesIndex,
    series::DailySeries,
};
use chrono::NaiveDate;
use metfor::Quantity;
use tracing::debug;

/// Convenient package for commonly requested summary values of a daily series.
#[derive(Debug, Clone)]
pub struct Analysis {
    // Series used to make the analysis
    series: DailySeries,

    // Day counts
    hot_days: Option<f64>,
    frost_days: Option<f64>,
    heatwaves: Option<f64>,
    longest_heatwave: Option<f64>,

    // Totals
    total_precipitation: Option<f64>,
    total_reference_et: Option<f64>,

    // Detailed results
    heatwave_spells: Vec<Spell>,
    frost_dates: Vec<FrostDates>,
    degree_day_dates: Vec<(i32, Option<NaiveDate>)>,
}

impl Analysis {
    /// Create a new `Analysis`.
    pub fn new(series: DailySeries) -> Self {
        Analysis {
            series,
            hot_days: None,
            frost_days: None,
            heatwaves: None,
            longest_heatwave: None,

            total_precipitation: None,
            total_reference_et: None,

            heatwave_spells: vec![],
            frost_dates: vec![],
            degree_day_dates: vec![],
        }
    }

    /// Set a value in the analysis
    pub fn with_index<T>(self, var: SeriesIndex, value: T) -> Self
    where
        Option<f64>: From<T>,
    {
        use self::SeriesIndex::*;

        let opt = Option::from(value);

        match var {
            HotDays => Analysis {
                hot_days: opt,
                ..self
            },
            FrostDays => Analysis {
                frost_days: opt,
                ..self
            },
            Heatwaves => Analysis {
                heatwaves: opt,
                ..self
            },
            LongestHeatwave => Analysis {
                longest_heatwave: opt,
                ..self
            },
            TotalPrecipitation => Analysis {
                total_precipitation: opt,
                ..self
            },
            TotalReferenceEt => Analysis {
                total_reference_et: opt,
                ..self
            },
        }
    }

    /// Method to retrieve value from analysis.
    pub fn get_index(&self, var: SeriesIndex) -> Option<f64> {
        use self::SeriesIndex::*;

        match var {
            HotDays => self.hot_days,
            FrostDays => self.frost_days,
            Heatwaves => self.heatwaves,
            LongestHeatwave => self.longest_heatwave,
            TotalPrecipitation => self.total_precipitation,
            TotalReferenceEt => self.total_reference_et,
        }
    }

    /// Get the heatwaves found by the analysis.
    #[inline]
    pub fn heatwave_spells(&self) -> &[Spell] {
        &self.heatwave_spells
    }

    /// Get the frost dates by year.
    #[inline]
    pub fn frost_dates(&self) -> &[FrostDates] {
        &self.frost_dates
    }

    /// Get the dates the degree day target was reached, by year.
    #[inline]
    pub fn degree_day_dates(&self) -> &[(i32, Option<NaiveDate>)] {
        &self.degree_day_dates
    }

    /// Get a reference to the series.
    #[inline]
    pub fn series(&self) -> &DailySeries {
        &self.series
    }

    /// Fill in every index that can be computed from the series. An index that fails, e.g. for a
    /// missing profile, is left empty without affecting the others. Only bad thresholds or a
    /// malformed series are errors.
    pub fn fill_in_missing_analysis(mut self, thresholds: &Thresholds) -> Result<Self> {
        thresholds.check()?;
        self.series.validate()?;

        debug!(
            days = self.series.len(),
            source = ?self.series.source_description(),
            "filling in analysis"
        );

        let series = &self.series;

        self.hot_days = self
            .hot_days
            .or_else(|| hot_days(series, thresholds.hot_day_max()).ok().map(|n| n as f64));
        self.frost_days = self
            .frost_days
            .or_else(|| frost_days(series, thresholds.frost_min()).ok().map(|n| n as f64));

        if let Ok(spells) = heatwaves(
            series,
            thresholds.hot_day_max(),
            thresholds.heatwave_min_days,
        ) {
            let longest = spells.iter().map(|s| s.length).max().unwrap_or(0);

            self.heatwaves = self.heatwaves.or(Some(spells.len() as f64));
            self.longest_heatwave = self.longest_heatwave.or(Some(longest as f64));
            self.heatwave_spells = spells;
        }

        self.total_precipitation = self
            .total_precipitation
            .or_else(|| total_precipitation(series).ok().map(|v| v.unpack()));
        self.total_reference_et = self
            .total_reference_et
            .or_else(|| total_reference_et(series).ok().map(|v| v.unpack()));

        if let Ok(fd) = frost_dates(series, thresholds.frost_min()) {
            self.frost_dates = fd;
        }

        match degree_day_dates(series, thresholds) {
            Ok(dd) => self.degree_day_dates = dd,
            Err(err) => debug!(%err, "skipping degree day dates"),
        }

        Ok(self)
    }
}

/// Build a complete analysis of a series with the given thresholds.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::{analyze, SeriesIndex, Thresholds};
/// # use agclimate_analysis::doctest::make_test_series;
///
/// // Max temperatures (C): 36.0, 37.0, 38.5, 39.0, 40.0, 36.5, 38.2, 39.1
/// let anal = analyze(make_test_series(), &Thresholds::default()).unwrap();
///
/// assert_eq!(anal.get_index(SeriesIndex::HotDays), Some(5.0));
/// assert_eq!(anal.get_index(SeriesIndex::Heatwaves), Some(1.0));
/// assert_eq!(anal.get_index(SeriesIndex::LongestHeatwave), Some(3.0));
/// assert_eq!(anal.get_index(SeriesIndex::FrostDays), Some(0.0));
/// assert_eq!(anal.get_index(SeriesIndex::TotalReferenceEt), None); // No ETo profile
/// ```
pub fn analyze(series: DailySeries, thresholds: &Thresholds) -> Result<Analysis> {
    Analysis::new(series).fill_in_missing_analysis(thresholds)
}
