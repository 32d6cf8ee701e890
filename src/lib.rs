#![warn(missing_docs)]
/*!
Functions and data types for computing agroclimate metrics from daily weather series, such as
station downloads from CIMIS or gridded data from Cal-Adapt/gridMET.

The core is a small set of pure functions over ordered sequences:

 - [`detect_runs`] splits a sequence into maximal runs of equal values, and [`filter_runs`] picks
   out the interesting ones, e.g. runs of hot days at least three days long.
 - [`first_crossing`] finds the first position where a running sum reaches a target, e.g. the
   date accumulated degree days since a biofix reach an event threshold.
 - [`classify`] turns values into the boolean flags both of the above consume.

On top of these the [`DailySeries`] type stores a station's daily profiles, and the functions in
the indexes and analysis modules compute hot day counts, heatwaves, frost dates, degree day event
dates, and totals from it. Fetching the data, unit conversion tables, and plotting are left to
the caller; units are carried with the `metfor` crate's types.
*/

//
// API
//
pub use crate::{
    accumulate::{
        first_crossing, first_crossing_optioned, first_crossing_per_group, running_sum, Crossing,
    },
    analysis::{analyze, Analysis},
    calendar::{biofix_index, day_of_water_year, water_year, year_groups, YearKind},
    classify::{classify, classify_all, classify_profile, Comparator},
    config::Thresholds,
    degree_days::{degree_day_profile, degree_days, DegreeDayMethod},
    error::{AnalysisError, Result},
    indexes::{
        degree_day_dates, frost_dates, frost_days, growing_season_length, heatwaves, hot_days,
        rolling_mean, total_precipitation, total_reference_et, FrostDates, Spell,
    },
    keys::{SeriesIndex, Variable},
    runs::{detect_runs, detect_runs_by, expand_runs, filter_runs, spells, Run},
    series::{check_date_order, DailyRow, DailySeries, Observation, StationInfo},
};

#[doc(hidden)]
pub use crate::series::doctest;

//
// Internal use only
//

// Modules
mod accumulate;
mod analysis;
mod calendar;
mod classify;
mod config;
mod degree_days;
mod error;
mod indexes;
mod keys;
mod runs;
mod series;
