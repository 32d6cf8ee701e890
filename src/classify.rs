//! Turn values into threshold flags, the input to run detection and day counts.
use optional::Optioned;
use strum_macros::{Display, EnumIter, EnumString};

/// How a value is compared against a threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Comparator {
    /// value > threshold
    Above,
    /// value >= threshold
    AtOrAbove,
    /// value < threshold
    Below,
    /// value <= threshold
    AtOrBelow,
}

/// Compare one value against a threshold.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::{classify, Comparator};
/// use metfor::Fahrenheit;
///
/// // Is this day's max temperature above 100.4F?
/// assert!(classify(Fahrenheit(101.0), Comparator::Above, Fahrenheit(100.4)));
/// // Is this day's min temperature at or below freezing?
/// assert!(classify(32.0, Comparator::AtOrBelow, 32.0));
/// assert!(!classify(32.0, Comparator::Below, 32.0));
/// ```
#[inline]
pub fn classify<T: PartialOrd>(value: T, comparator: Comparator, threshold: T) -> bool {
    match comparator {
        Comparator::Above => value > threshold,
        Comparator::AtOrAbove => value >= threshold,
        Comparator::Below => value < threshold,
        Comparator::AtOrBelow => value <= threshold,
    }
}

/// Classify every value of a slice.
pub fn classify_all<T>(values: &[T], comparator: Comparator, threshold: T) -> Vec<bool>
where
    T: PartialOrd + Copy,
{
    values
        .iter()
        .map(|&v| classify(v, comparator, threshold))
        .collect()
}

/// Classify a profile with missing values. Missing days stay missing rather than being counted as
/// failing the test.
pub fn classify_profile<T>(
    values: &[Optioned<T>],
    comparator: Comparator,
    threshold: T,
) -> Vec<Option<bool>>
where
    T: PartialOrd + Copy + optional::Noned,
{
    values
        .iter()
        .map(|v| v.map(|v| classify(v, comparator, threshold)))
        .collect()
}
