use chrono::NaiveDate;
use metfor::{Celsius, Mm};
use optional::Optioned;

/// A copy of one day of the series data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DailyRow {
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Daily maximum temperature in C
    pub max_temperature: Optioned<Celsius>,
    /// Daily minimum temperature in C
    pub min_temperature: Optioned<Celsius>,
    /// Daily precipitation in mm
    pub precipitation: Optioned<Mm>,
    /// Daily reference evapotranspiration in mm
    pub reference_et: Optioned<Mm>,
}
