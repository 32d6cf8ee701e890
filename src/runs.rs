//! Run-length detection over ordered sequences.
//!
//! A run is a maximal stretch of consecutive equal values. The runs returned here always
//! partition the input: their lengths sum to the input length and no two neighbors share a value.
//! Counting heatwaves is then a matter of filtering the runs of `true` "hot day" flags by length.

use std::ops::Range;

/// A maximal run of equal values within a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run<T> {
    /// The value repeated through the run.
    pub value: T,
    /// Index of the first element of the run in the source sequence.
    pub start: usize,
    /// Number of elements in the run, always at least 1.
    pub length: usize,
}

impl<T> Run<T> {
    /// One past the last index of the run.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    /// The index range covered by this run in the source sequence.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

/// Find the maximal runs of equal values in a sequence.
///
/// Raw floating point values do not implement `Eq`, so grouping them requires picking a
/// tolerance with [`detect_runs_by`] or quantizing them first.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::{detect_runs, Run};
///
/// let hot = [false, false, true, true, true, false, true, true];
/// let runs = detect_runs(hot.iter().copied());
///
/// assert_eq!(
///     runs,
///     vec![
///         Run { value: false, start: 0, length: 2 },
///         Run { value: true, start: 2, length: 3 },
///         Run { value: false, start: 5, length: 1 },
///         Run { value: true, start: 6, length: 2 },
///     ]
/// );
///
/// assert!(detect_runs(Vec::<bool>::new()).is_empty());
/// ```
pub fn detect_runs<T, I>(seq: I) -> Vec<Run<T>>
where
    I: IntoIterator<Item = T>,
    T: Eq,
{
    detect_runs_by(seq, |a, b| a == b)
}

/// Find the maximal runs in a sequence using a caller supplied equality.
///
/// Each element is compared with the value that opened the current run.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::detect_runs_by;
///
/// let vals = [1.0, 1.0001, 2.0, 2.0];
/// let runs = detect_runs_by(vals.iter().copied(), |a: &f64, b: &f64| (a - b).abs() < 0.01);
///
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].length, 2);
/// assert_eq!(runs[1].start, 2);
/// ```
pub fn detect_runs_by<T, I, F>(seq: I, mut eq: F) -> Vec<Run<T>>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> bool,
{
    let mut runs: Vec<Run<T>> = Vec::new();

    for (i, val) in seq.into_iter().enumerate() {
        match runs.last_mut() {
            Some(current) if eq(&current.value, &val) => current.length += 1,
            _ => runs.push(Run {
                value: val,
                start: i,
                length: 1,
            }),
        }
    }

    runs
}

/// Keep only the runs that satisfy a predicate over the run value and length. Order is preserved.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::{detect_runs, filter_runs, Run};
///
/// let hot = [false, false, true, true, true, false, true, true];
/// let runs = detect_runs(hot.iter().copied());
/// let heatwaves = filter_runs(&runs, |&hot, length| hot && length >= 3);
///
/// assert_eq!(heatwaves, vec![Run { value: true, start: 2, length: 3 }]);
/// ```
pub fn filter_runs<T, P>(runs: &[Run<T>], mut predicate: P) -> Vec<Run<T>>
where
    T: Clone,
    P: FnMut(&T, usize) -> bool,
{
    runs.iter()
        .filter(|run| predicate(&run.value, run.length))
        .cloned()
        .collect()
}

/// Rebuild the original sequence from its runs.
pub fn expand_runs<T: Clone>(runs: &[Run<T>]) -> Vec<T> {
    runs.iter()
        .flat_map(|run| std::iter::repeat(run.value.clone()).take(run.length))
        .collect()
}

/// Runs of `true` flags at least `min_length` long, e.g. heatwaves from a hot day sequence.
pub fn spells<I>(flags: I, min_length: usize) -> Vec<Run<bool>>
where
    I: IntoIterator<Item = bool>,
{
    let runs = detect_runs(flags);
    filter_runs(&runs, |&flag, length| flag && length >= min_length)
}
