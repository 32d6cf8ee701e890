//! Enums used as keys for selecting variables and indexes.
use strum_macros::{Display, EnumIter, EnumString};

/// Daily variables stored in a `DailySeries`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString)]
pub enum Variable {
    /// Daily maximum temperature (C)
    MaxTemperature,
    /// Daily minimum temperature (C)
    MinTemperature,
    /// Daily precipitation (mm)
    Precipitation,
    /// Daily reference evapotranspiration (mm)
    ReferenceEt,
}

/// Summary indexes calculated for a whole series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString)]
pub enum SeriesIndex {
    /// Number of days with a maximum temperature above the hot day threshold.
    HotDays,
    /// Number of days with a minimum temperature at or below the frost threshold.
    FrostDays,
    /// Number of heatwaves, runs of hot days at least the minimum heatwave length.
    Heatwaves,
    /// Length in days of the longest heatwave.
    LongestHeatwave,
    /// Total precipitation (mm)
    TotalPrecipitation,
    /// Total reference evapotranspiration (mm)
    TotalReferenceEt,
}
