//! Data type and methods to store a daily weather series.

use crate::{
    error::{AnalysisError, Result},
    keys::Variable,
};
use chrono::NaiveDate;
use itertools::Itertools;
use metfor::{Celsius, Mm, Quantity};
use optional::Optioned;
use tracing::warn;

pub use self::{daily_row::DailyRow, station_info::StationInfo};

/// A single dated value from a time series, with an optional category label.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation<T> {
    /// Calendar date of the value.
    pub date: NaiveDate,
    /// The observed value.
    pub value: T,
    /// Optional category, e.g. "hot" or the name of the source network.
    pub label: Option<String>,
}

impl<T> Observation<T> {
    /// Create an unlabeled observation.
    #[inline]
    pub fn new(date: NaiveDate, value: T) -> Self {
        Observation {
            date,
            value,
            label: None,
        }
    }

    /// Builder method to attach a label.
    #[inline]
    pub fn with_label<S>(self, label: S) -> Self
    where
        Option<String>: From<S>,
    {
        Observation {
            label: Option::from(label),
            ..self
        }
    }

    /// Check that a slice of observations is strictly increasing in date.
    pub fn check_order(obs: &[Observation<T>]) -> Result<()> {
        check_dates(obs.iter().map(|o| o.date))
    }
}

/// Check that dates are strictly increasing, which also rules out duplicates.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::{check_date_order, AnalysisError};
/// use chrono::NaiveDate;
///
/// let d = |day| NaiveDate::from_ymd(2021, 7, day);
///
/// assert!(check_date_order(&[d(1), d(2), d(4)]).is_ok());
/// assert!(check_date_order(&[]).is_ok());
/// assert_eq!(
///     check_date_order(&[d(1), d(2), d(2)]),
///     Err(AnalysisError::InvalidInputOrder { index: 2 })
/// );
/// ```
pub fn check_date_order(dates: &[NaiveDate]) -> Result<()> {
    check_dates(dates.iter().copied())
}

fn check_dates<I: Iterator<Item = NaiveDate>>(dates: I) -> Result<()> {
    match dates.tuple_windows().position(|(d0, d1)| d1 <= d0) {
        Some(i) => Err(AnalysisError::InvalidInputOrder { index: i + 1 }),
        None => Ok(()),
    }
}

/// All the variables stored in the series.
///
/// The daily variables are stored in parallel vectors indexed like `dates`. If a series lacks a
/// certain variable, e.g. reference evapotranspiration from a gridded product, that whole vector
/// has length 0 instead of being full of missing values.
#[derive(Clone, Debug, Default)]
pub struct DailySeries {
    // Description of the source of the series.
    source: Option<String>,

    // Station info
    station: StationInfo,

    // Strictly increasing
    dates: Vec<NaiveDate>,

    // Profiles
    max_temperature: Vec<Optioned<Celsius>>,
    min_temperature: Vec<Optioned<Celsius>>,
    precipitation: Vec<Optioned<Mm>>,
    reference_et: Vec<Optioned<Mm>>,
}

macro_rules! make_profile_setter {
    ($(#[$attr:meta])* => $name:ident, $inner_type:ty, $unit_trait:path, $p_var:ident) => {
        $(#[$attr])*
        pub fn $name<T>(self, profile: Vec<Optioned<T>>) -> Self
        where
            T: optional::Noned + Copy + $unit_trait,
            $inner_type: From<T>,
        {
            let profile = profile
                .into_iter()
                .map(|val| val.map_t(<$inner_type>::from))
                .collect();
            Self { $p_var: profile, ..self }
        }
    };
}

impl DailySeries {
    /// Create a new series over the given dates. The dates must be strictly increasing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use agclimate_analysis::{AnalysisError, DailySeries};
    /// use chrono::NaiveDate;
    ///
    /// let dates = vec![NaiveDate::from_ymd(2021, 7, 1), NaiveDate::from_ymd(2021, 7, 2)];
    /// let series = DailySeries::new(dates).unwrap();
    /// assert_eq!(series.len(), 2);
    ///
    /// let dates = vec![NaiveDate::from_ymd(2021, 7, 2), NaiveDate::from_ymd(2021, 7, 1)];
    /// assert_eq!(
    ///     DailySeries::new(dates).unwrap_err(),
    ///     AnalysisError::InvalidInputOrder { index: 1 }
    /// );
    /// ```
    pub fn new(dates: Vec<NaiveDate>) -> Result<Self> {
        if let Err(err) = check_date_order(&dates) {
            warn!(%err, "rejecting daily series");
            return Err(err);
        }

        Ok(DailySeries {
            dates,
            ..DailySeries::default()
        })
    }

    /// Add a source description to this series.
    #[inline]
    pub fn with_source_description<S>(mut self, desc: S) -> Self
    where
        Option<String>: From<S>,
    {
        self.source = Option::from(desc);
        self
    }

    /// Retrieve a source description for this series.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use agclimate_analysis::doctest::make_test_series;
    ///
    /// let series = make_test_series().with_source_description("CIMIS daily".to_owned());
    /// assert_eq!(series.source_description().unwrap(), "CIMIS daily");
    ///
    /// let series = series.with_source_description(None);
    /// assert!(series.source_description().is_none());
    /// ```
    #[inline]
    pub fn source_description(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Builder function for setting the station info.
    #[inline]
    pub fn with_station_info(mut self, new_value: StationInfo) -> Self {
        self.station = new_value;
        self
    }

    /// Get the station info
    #[inline]
    pub fn station_info(&self) -> &StationInfo {
        &self.station
    }

    /// Number of days in the series.
    #[inline]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True if the series holds no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Get the dates.
    #[inline]
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    make_profile_setter!(
        /// Builder method for the daily maximum temperature profile. Any temperature unit from
        /// `metfor` is accepted and stored as Celsius.
        ///
        /// # Examples
        /// ```rust
        /// use agclimate_analysis::DailySeries;
        /// use chrono::NaiveDate;
        /// use metfor::Celsius;
        /// use optional::{none, some};
        ///
        /// let dates = vec![NaiveDate::from_ymd(2021, 7, 1), NaiveDate::from_ymd(2021, 7, 2)];
        /// let series = DailySeries::new(dates)
        ///     .unwrap()
        ///     .with_max_temperature_profile(vec![some(Celsius(35.0)), none()]);
        ///
        /// assert_eq!(series.max_temperature_profile()[0].unwrap(), Celsius(35.0));
        /// assert!(series.max_temperature_profile()[1].is_none());
        /// ```
        => with_max_temperature_profile, Celsius, metfor::Temperature, max_temperature
    );

    /// Get the daily maximum temperature profile.
    ///
    /// Uninitialized profiles just return an empty slice.
    #[inline]
    pub fn max_temperature_profile(&self) -> &[Optioned<Celsius>] {
        &self.max_temperature
    }

    make_profile_setter!(
        /// Builder method for the daily minimum temperature profile.
        ///
        /// See `with_max_temperature_profile` for an example of usage.
        => with_min_temperature_profile, Celsius, metfor::Temperature, min_temperature
    );

    /// Get the daily minimum temperature profile.
    #[inline]
    pub fn min_temperature_profile(&self) -> &[Optioned<Celsius>] {
        &self.min_temperature
    }

    make_profile_setter!(
        /// Builder method for the daily precipitation profile.
        => with_precipitation_profile, Mm, metfor::Length, precipitation
    );

    /// Get the daily precipitation profile.
    #[inline]
    pub fn precipitation_profile(&self) -> &[Optioned<Mm>] {
        &self.precipitation
    }

    make_profile_setter!(
        /// Builder method for the daily reference evapotranspiration (ETo) profile.
        => with_reference_et_profile, Mm, metfor::Length, reference_et
    );

    /// Get the daily reference evapotranspiration profile.
    #[inline]
    pub fn reference_et_profile(&self) -> &[Optioned<Mm>] {
        &self.reference_et
    }

    /// Check the whole series: dates strictly increasing and every present profile as long as
    /// the dates.
    pub fn validate(&self) -> Result<()> {
        check_date_order(&self.dates)?;

        let n = self.dates.len();
        let lengths = [
            self.max_temperature.len(),
            self.min_temperature.len(),
            self.precipitation.len(),
            self.reference_et.len(),
        ];

        if lengths.iter().any(|&len| len != 0 && len != n) {
            warn!(days = n, ?lengths, "profile length does not match dates");
            return Err(AnalysisError::InvalidInput);
        }

        Ok(())
    }

    /// Check a profile of this series before analysis. A profile of the wrong length is invalid,
    /// an empty one (in a non-empty series) is missing.
    pub(crate) fn checked<'a, T>(&self, profile: &'a [T]) -> Result<&'a [T]> {
        if profile.len() == self.dates.len() {
            Ok(profile)
        } else if profile.is_empty() {
            Err(AnalysisError::MissingProfile)
        } else {
            Err(AnalysisError::InvalidInput)
        }
    }

    /// Get one variable as a plain list of observations, values unpacked to `f64` in the stored
    /// units.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use agclimate_analysis::{AnalysisError, Variable};
    /// # use agclimate_analysis::doctest::make_test_series;
    ///
    /// let series = make_test_series();
    /// let obs = series.observations(Variable::MaxTemperature).unwrap();
    /// assert_eq!(obs.len(), series.len());
    /// assert_eq!(obs[0].date, series.dates()[0]);
    ///
    /// assert_eq!(
    ///     series.observations(Variable::ReferenceEt).unwrap_err(),
    ///     AnalysisError::MissingProfile
    /// );
    /// ```
    pub fn observations(&self, var: Variable) -> Result<Vec<Observation<Optioned<f64>>>> {
        fn pair<Q>(dates: &[NaiveDate], vals: &[Optioned<Q>]) -> Vec<Observation<Optioned<f64>>>
        where
            Q: Quantity + optional::Noned + Copy,
        {
            dates
                .iter()
                .zip(vals)
                .map(|(&date, val)| Observation::new(date, val.map_t(|q| q.unpack())))
                .collect()
        }

        let obs = match var {
            Variable::MaxTemperature => pair(&self.dates, self.checked(&self.max_temperature)?),
            Variable::MinTemperature => pair(&self.dates, self.checked(&self.min_temperature)?),
            Variable::Precipitation => pair(&self.dates, self.checked(&self.precipitation)?),
            Variable::ReferenceEt => pair(&self.dates, self.checked(&self.reference_et)?),
        };

        Ok(obs)
    }

    /// Get an iterator over the days of the series.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use agclimate_analysis::doctest::make_test_series;
    ///
    /// let series = make_test_series();
    /// let rows: Vec<_> = series.rows().collect();
    ///
    /// assert_eq!(rows.len(), series.len());
    /// assert!(rows[0].reference_et.is_none()); // The test series has no ETo profile.
    /// ```
    #[inline]
    pub fn rows<'a>(&'a self) -> impl Iterator<Item = DailyRow> + 'a {
        (0..self.dates.len()).filter_map(move |i| self.daily_row(i))
    }

    /// Get a row of data values from this series.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::NaiveDate;
    /// use metfor::Celsius;
    /// # use agclimate_analysis::doctest::make_test_series;
    ///
    /// let series = make_test_series();
    ///
    /// let row = series.daily_row(0).unwrap();
    /// assert_eq!(row.date, NaiveDate::from_ymd(2021, 6, 28));
    /// assert_eq!(row.max_temperature.unwrap(), Celsius(36.0));
    ///
    /// assert!(series.daily_row(100).is_none()); // There weren't that many days!
    /// ```
    #[inline]
    pub fn daily_row(&self, idx: usize) -> Option<DailyRow> {
        macro_rules! copy_from {
            ($profile:ident, $idx:ident) => {
                self.$profile
                    .get($idx)
                    .copied()
                    .unwrap_or_else(optional::none)
            };
        }

        let date = *self.dates.get(idx)?;

        Some(DailyRow {
            date,
            max_temperature: copy_from!(max_temperature, idx),
            min_temperature: copy_from!(min_temperature, idx),
            precipitation: copy_from!(precipitation, idx),
            reference_et: copy_from!(reference_et, idx),
        })
    }
}

// FIXME: only configure for test and doc tests.
#[doc(hidden)]
pub mod doctest {
    use super::*;

    pub fn make_test_series() -> super::DailySeries {
        use optional::some;

        let dates = (0..8)
            .map(|d| NaiveDate::from_ymd(2021, 6, 28) + chrono::Duration::days(d))
            .collect();
        let tmax = [36.0, 37.0, 38.5, 39.0, 40.0, 36.5, 38.2, 39.1]
            .iter()
            .map(|&t| some(Celsius(t)))
            .collect();
        let tmin = [14.0, 15.0, 16.0, 17.5, 18.0, 15.0, 16.0, 16.5]
            .iter()
            .map(|&t| some(Celsius(t)))
            .collect();
        let precip = vec![some(Mm(0.0)); 8];

        DailySeries {
            dates,
            ..DailySeries::default()
        }
        .with_max_temperature_profile(tmax)
        .with_min_temperature_profile(tmin)
        .with_precipitation_profile(precip)
    }
}


mod daily_row;
mod station_info;
