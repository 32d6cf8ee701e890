//! Thresholds used by the summary analysis, loadable from TOML.
//!
//! Station networks in California publish in Fahrenheit, and the workshop thresholds are quoted
//! that way, so temperatures here are in degrees F and converted to Celsius on access. Every field
//! has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! hot_day_max_f = 100.4
//! frost_min_f = 32.0
//! heatwave_min_days = 3
//!
//! degree_day_lower_f = 50.0
//! degree_day_upper_f = 88.0
//! degree_day_method = "single_sine"
//! degree_day_target = 1000.0
//!
//! biofix_month = 1
//! biofix_day = 1
//! ```
use crate::{
    degree_days::DegreeDayMethod,
    error::{AnalysisError, Result},
};
use chrono::NaiveDate;
use metfor::{Celsius, Fahrenheit};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Thresholds for the summary indexes.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    /// A day is hot when its maximum temperature is above this (F).
    pub hot_day_max_f: f64,
    /// A day has frost when its minimum temperature is at or below this (F).
    pub frost_min_f: f64,
    /// Minimum number of consecutive hot days that make a heatwave.
    pub heatwave_min_days: usize,
    /// Lower developmental threshold for degree days (F).
    pub degree_day_lower_f: f64,
    /// Upper developmental threshold for degree days (F).
    pub degree_day_upper_f: f64,
    /// How daily degree days are estimated.
    pub degree_day_method: DegreeDayMethod,
    /// Accumulated degree days (F) marking the event of interest.
    pub degree_day_target: f64,
    /// Month of the biofix, where accumulation starts each year.
    pub biofix_month: u32,
    /// Day of month of the biofix.
    pub biofix_day: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            hot_day_max_f: 100.4,
            frost_min_f: 32.0,
            heatwave_min_days: 3,
            degree_day_lower_f: 50.0,
            degree_day_upper_f: 88.0,
            degree_day_method: DegreeDayMethod::SingleSine,
            degree_day_target: 1000.0,
            biofix_month: 1,
            biofix_day: 1,
        }
    }
}

impl Thresholds {
    /// Parse and check thresholds from a TOML document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use agclimate_analysis::{DegreeDayMethod, Thresholds};
    ///
    /// let cfg = Thresholds::from_toml_str("heatwave_min_days = 5\ndegree_day_method = \"average\"")
    ///     .unwrap();
    /// assert_eq!(cfg.heatwave_min_days, 5);
    /// assert_eq!(cfg.degree_day_method, DegreeDayMethod::Average);
    /// assert_eq!(cfg.frost_min_f, 32.0);
    ///
    /// assert!(Thresholds::from_toml_str("no_such_field = 1").is_err());
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let cfg: Thresholds = toml::from_str(text)?;
        cfg.check()?;
        Ok(cfg)
    }

    /// Read thresholds from a TOML file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading thresholds");

        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Reject configurations that cannot produce meaningful results.
    pub fn check(&self) -> Result<()> {
        let finite = [
            self.hot_day_max_f,
            self.frost_min_f,
            self.degree_day_lower_f,
            self.degree_day_upper_f,
            self.degree_day_target,
        ]
        .iter()
        .all(|v| v.is_finite());

        if !finite {
            return Err(AnalysisError::Config("thresholds must be finite".to_owned()));
        }
        if self.heatwave_min_days == 0 {
            return Err(AnalysisError::Config(
                "heatwave_min_days must be at least 1".to_owned(),
            ));
        }
        if self.degree_day_lower_f >= self.degree_day_upper_f {
            return Err(AnalysisError::Config(
                "degree_day_lower_f must be below degree_day_upper_f".to_owned(),
            ));
        }
        // 2000 is a leap year, so February 29 is accepted.
        if NaiveDate::from_ymd_opt(2000, self.biofix_month, self.biofix_day).is_none() {
            return Err(AnalysisError::Config("invalid biofix date".to_owned()));
        }

        Ok(())
    }

    /// Hot day threshold in Celsius.
    #[inline]
    pub fn hot_day_max(&self) -> Celsius {
        Celsius::from(Fahrenheit(self.hot_day_max_f))
    }

    /// Frost threshold in Celsius.
    #[inline]
    pub fn frost_min(&self) -> Celsius {
        Celsius::from(Fahrenheit(self.frost_min_f))
    }

    /// Lower and upper degree day thresholds in Celsius.
    #[inline]
    pub fn degree_day_range(&self) -> (Celsius, Celsius) {
        (
            Celsius::from(Fahrenheit(self.degree_day_lower_f)),
            Celsius::from(Fahrenheit(self.degree_day_upper_f)),
        )
    }

    /// The degree day target converted from F to C degree days.
    #[inline]
    pub fn degree_day_target_c(&self) -> f64 {
        self.degree_day_target * 5.0 / 9.0
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use metfor::Quantity;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = Thresholds::from_toml_str("").unwrap();
        assert_eq!(cfg, Thresholds::default());
        assert!((cfg.hot_day_max().unpack() - 38.0).abs() < 1.0e-9);
        assert!(cfg.frost_min().unpack().abs() < 1.0e-9);
        assert!((cfg.degree_day_target_c() - 555.555_555).abs() < 1.0e-3);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            Thresholds::from_toml_str("heatwave_min_days = 0"),
            Err(AnalysisError::Config(_))
        ));
        assert!(matches!(
            Thresholds::from_toml_str("degree_day_lower_f = 90.0"),
            Err(AnalysisError::Config(_))
        ));
        assert!(matches!(
            Thresholds::from_toml_str("biofix_month = 13"),
            Err(AnalysisError::Config(_))
        ));
        assert!(matches!(
            Thresholds::from_toml_str("biofix_month = 2\nbiofix_day = 31"),
            Err(AnalysisError::Config(_))
        ));
        assert!(matches!(
            Thresholds::from_toml_str("biofix_month = 4\nbiofix_day = 31"),
            Err(AnalysisError::Config(_))
        ));
        assert!(Thresholds::from_toml_str("biofix_month = 2\nbiofix_day = 29").is_ok());
        assert!(matches!(
            Thresholds::from_toml_str("degree_day_method = \"triangle\""),
            Err(AnalysisError::Config(_))
        ));
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "frost_min_f = 28.0").unwrap();

        let cfg = Thresholds::from_path(file.path()).unwrap();
        assert_eq!(cfg.frost_min_f, 28.0);

        assert!(matches!(
            Thresholds::from_path("/no/such/thresholds.toml"),
            Err(AnalysisError::Config(_))
        ));
    }
}
