//! Running sums and the search for the first position where a running sum reaches a target.
//!
//! This answers questions like "on what date do degree days accumulated since the biofix reach
//! 1000?". To find the first date a quantity falls *below* a threshold, flip the sign of the
//! increments and the target.
use crate::error::{AnalysisError, Result};
use optional::Optioned;
use std::ops::Range;
use tracing::trace;

/// Where a running sum first reached its target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Crossing {
    /// Index in the source sequence of the increment that completed the crossing.
    pub index: usize,
    /// Running sum at `index`, always `>=` the target.
    pub accumulated: f64,
}

/// Find the first index at which the running sum of `increments`, starting at `start_index`
/// (inclusive), is greater than or equal to `target`.
///
/// Returns `Ok(None)` when the target is never reached, including for an empty sequence or when
/// `start_index` equals the sequence length.
///
/// # Errors
///
/// * `StartOutOfRange` if `start_index` is greater than the length of `increments`.
/// * `InvalidInput` if the target is NaN.
/// * `NotANumber` at the first NaN increment that is part of the scan.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::{first_crossing, Crossing};
///
/// let found = first_crossing(&[5.0, -3.0, 10.0], 7.0, 0).unwrap();
/// assert_eq!(found, Some(Crossing { index: 2, accumulated: 12.0 }));
///
/// let found = first_crossing(&[20.0, 30.0, 25.0, 26.0], 100.0, 0).unwrap();
/// assert_eq!(found, Some(Crossing { index: 3, accumulated: 101.0 }));
///
/// // Never reached is not an error, and never a sentinel index.
/// assert_eq!(first_crossing(&[0.0; 5], 1.0, 0).unwrap(), None);
/// ```
pub fn first_crossing(
    increments: &[f64],
    target: f64,
    start_index: usize,
) -> Result<Option<Crossing>> {
    check_start(increments.len(), start_index)?;

    let scan = increments
        .iter()
        .enumerate()
        .skip(start_index)
        .map(|(index, &inc)| Ok((index, inc)));

    scan_for_target(scan, target)
}

/// Same as `first_crossing`, but for a profile with missing values. A missing increment before the
/// crossing is found is `MissingValue`; gaps after it are never looked at.
pub fn first_crossing_optioned(
    increments: &[Optioned<f64>],
    target: f64,
    start_index: usize,
) -> Result<Option<Crossing>> {
    check_start(increments.len(), start_index)?;

    let scan = increments
        .iter()
        .enumerate()
        .skip(start_index)
        .map(|(index, inc)| {
            inc.into_option()
                .map(|inc| (index, inc))
                .ok_or(AnalysisError::MissingValue)
        });

    scan_for_target(scan, target)
}

fn scan_for_target<I>(scan: I, target: f64) -> Result<Option<Crossing>>
where
    I: Iterator<Item = Result<(usize, f64)>>,
{
    if target.is_nan() {
        return Err(AnalysisError::InvalidInput);
    }

    let mut sum = 0.0;
    for pair in scan {
        let (index, inc) = pair?;
        if inc.is_nan() {
            return Err(AnalysisError::NotANumber { index });
        }

        sum += inc;
        if sum >= target {
            trace!(index, sum, target, "running sum reached target");
            return Ok(Some(Crossing {
                index,
                accumulated: sum,
            }));
        }
    }

    Ok(None)
}

/// Apply `first_crossing` independently within each group of indexes, e.g. one range per year.
///
/// Each group is searched from its own first index, so accumulation restarts at every group.
/// Groups must lie within the sequence.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::first_crossing_per_group;
///
/// let incs = [4.0, 4.0, 4.0, 1.0, 1.0, 1.0];
/// let found = first_crossing_per_group(&incs, &[0..3, 3..6], 5.0).unwrap();
///
/// assert_eq!(found[0].map(|c| c.index), Some(1));
/// assert_eq!(found[1], None);
/// ```
pub fn first_crossing_per_group(
    increments: &[f64],
    groups: &[Range<usize>],
    target: f64,
) -> Result<Vec<Option<Crossing>>> {
    groups
        .iter()
        .map(|group| {
            let slice = increments
                .get(group.clone())
                .ok_or(AnalysisError::InvalidInput)?;

            first_crossing(slice, target, 0).map(|opt| {
                opt.map(|c| Crossing {
                    index: c.index + group.start,
                    ..c
                })
            })
        })
        .collect()
}

/// The running sum of `increments` beginning at `start_index`. The output has one value per
/// element from `start_index` on.
///
/// # Examples
///
/// ```rust
/// use agclimate_analysis::running_sum;
///
/// assert_eq!(running_sum(&[1.0, 2.0, 3.0, 4.0], 1).unwrap(), vec![2.0, 5.0, 9.0]);
/// assert!(running_sum(&[], 0).unwrap().is_empty());
/// ```
pub fn running_sum(increments: &[f64], start_index: usize) -> Result<Vec<f64>> {
    check_start(increments.len(), start_index)?;

    increments
        .iter()
        .enumerate()
        .skip(start_index)
        .scan(0.0, |sum, (index, &inc)| {
            if inc.is_nan() {
                Some(Err(AnalysisError::NotANumber { index }))
            } else {
                *sum += inc;
                Some(Ok(*sum))
            }
        })
        .collect()
}

#[inline]
fn check_start(len: usize, start: usize) -> Result<()> {
    if start > len {
        Err(AnalysisError::StartOutOfRange { start, len })
    } else {
        Ok(())
    }
}
