//! Daily degree days from minimum and maximum temperature, with horizontal cutoffs at the lower
//! and upper developmental thresholds.
//!
//! # References
//!
//! Zalom FG, Goodell PB, Wilson LT, Barnett WW, Bentley WJ. Degree-days: the calculation and use
//! of heat units in pest management. University of California, Division of Agriculture and
//! Natural Resources Leaflet 21373. 1983.
use crate::{
    error::{AnalysisError, Result},
    series::DailySeries,
};
use itertools::izip;
use metfor::{Celsius, Quantity};
use optional::Optioned;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};
use tracing::debug;

/// Method used to estimate the area under the daily temperature curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeDayMethod {
    /// Mean of the cutoff adjusted min and max minus the lower threshold.
    Average,
    /// Single sine curve through min and max.
    SingleSine,
}

/// Degree days for a single day. All temperatures must be in the same units, and so is the
/// result (degree days C or F).
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::{degree_days, DegreeDayMethod};
///
/// // Entirely between the thresholds, both methods agree.
/// assert_eq!(degree_days(60.0, 80.0, 50.0, 88.0, DegreeDayMethod::Average), 20.0);
/// assert_eq!(degree_days(60.0, 80.0, 50.0, 88.0, DegreeDayMethod::SingleSine), 20.0);
///
/// // Too cold all day.
/// assert_eq!(degree_days(30.0, 45.0, 50.0, 88.0, DegreeDayMethod::SingleSine), 0.0);
/// ```
pub fn degree_days(tmin: f64, tmax: f64, lower: f64, upper: f64, method: DegreeDayMethod) -> f64 {
    debug_assert!(lower < upper);

    let (tmin, tmax) = if tmin > tmax { (tmax, tmin) } else { (tmin, tmax) };

    match method {
        DegreeDayMethod::Average => average(tmin, tmax, lower, upper),
        DegreeDayMethod::SingleSine => single_sine(tmin, tmax, lower, upper),
    }
}

fn average(tmin: f64, tmax: f64, lower: f64, upper: f64) -> f64 {
    if tmax <= lower {
        return 0.0;
    }

    let tmax = tmax.min(upper);
    let tmin = tmin.max(lower).min(upper);

    ((tmax + tmin) / 2.0 - lower).max(0.0)
}

fn single_sine(tmin: f64, tmax: f64, lower: f64, upper: f64) -> f64 {
    if tmax <= lower {
        return 0.0;
    }
    if tmin >= upper {
        return upper - lower;
    }

    let mean = (tmax + tmin) / 2.0;
    let amp = (tmax - tmin) / 2.0;

    match (tmin < lower, tmax > upper) {
        // Entirely between the thresholds
        (false, false) => mean - lower,
        // Intercepted by the lower threshold only
        (true, false) => {
            let theta1 = ((lower - mean) / amp).asin();
            ((mean - lower) * (FRAC_PI_2 - theta1) + amp * theta1.cos()) / PI
        }
        // Intercepted by the upper threshold only
        (false, true) => {
            let theta2 = ((upper - mean) / amp).asin();
            ((mean - lower) * (theta2 + FRAC_PI_2) + (upper - lower) * (FRAC_PI_2 - theta2)
                - amp * theta2.cos())
                / PI
        }
        // Intercepted by both thresholds
        (true, true) => {
            let theta1 = ((lower - mean) / amp).asin();
            let theta2 = ((upper - mean) / amp).asin();
            ((mean - lower) * (theta2 - theta1)
                + amp * (theta1.cos() - theta2.cos())
                + (upper - lower) * (FRAC_PI_2 - theta2))
                / PI
        }
    }
}

/// Daily degree days (C) for a whole series. Days missing either temperature are missing.
pub fn degree_day_profile(
    series: &DailySeries,
    lower: Celsius,
    upper: Celsius,
    method: DegreeDayMethod,
) -> Result<Vec<Optioned<f64>>> {
    if lower >= upper {
        return Err(AnalysisError::InvalidInput);
    }

    let tmin = series.checked(series.min_temperature_profile())?;
    let tmax = series.checked(series.max_temperature_profile())?;

    debug!(days = series.len(), ?method, "computing degree day profile");

    let profile = izip!(tmin, tmax)
        .map(|(tn, tx)| match (tn.into_option(), tx.into_option()) {
            (Some(tn), Some(tx)) => optional::some(degree_days(
                tn.unpack(),
                tx.unpack(),
                lower.unpack(),
                upper.unpack(),
                method,
            )),
            _ => optional::none(),
        })
        .collect();

    Ok(profile)
}
