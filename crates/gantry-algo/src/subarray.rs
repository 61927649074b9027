// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Closest Subarray Sum
//!
//! Exhaustive search for the contiguous subarray whose sum lies closest to
//! a target value. The scan maintains a running sum per start index and
//! visits all `O(N²)` windows in `O(1)` extra space.
//!
//! ## Tie-breaking
//!
//! Improvement uses a strict `<` comparison on the absolute gap
//! `|target − sum|`, so among equally close windows the first one visited
//! wins: the earlier start index, and for the same start the earlier end
//! index.
//!
//! ## Overflow posture
//!
//! Running sums and gap computations use saturating arithmetic. Inputs
//! whose window sums exceed the value type's range clamp at the type
//! bounds instead of wrapping or panicking; pick a wider integer type if
//! exact sums near the bounds matter.

use gantry_core::num::SeriesNumeric;

/// The error type for the closest-sum scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosestSumError {
    /// The input sequence was empty, so no subarray exists.
    EmptyInput,
}

impl std::fmt::Display for ClosestSumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => {
                write!(f, "cannot search an empty sequence for a closest subarray sum")
            }
        }
    }
}

impl std::error::Error for ClosestSumError {}

/// The winning window of a closest-sum scan.
///
/// Carries the sum of the closest-matching contiguous subarray together
/// with its closed-open index window `[start, end)` into the scanned
/// slice, so callers can recover the elements and not just the objective.
///
/// # Examples
///
/// ```rust
/// # use gantry_algo::subarray::closest_subarray_sum;
///
/// let values = [1i64, 4, 3, 5, 2];
/// let hit = closest_subarray_sum(&values, 13).unwrap();
///
/// assert_eq!(hit.sum(), 13);
/// assert_eq!(values[hit.range()].iter().sum::<i64>(), 13);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosestSum<T> {
    sum: T,
    start: usize,
    end: usize,
}

impl<T> ClosestSum<T>
where
    T: SeriesNumeric,
{
    /// Returns the sum of the winning subarray.
    #[inline]
    pub const fn sum(&self) -> T {
        self.sum
    }

    /// Returns the inclusive start index of the winning window.
    #[inline]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive end index of the winning window.
    #[inline]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Returns the number of elements in the winning window.
    ///
    /// Always at least 1; empty windows are never candidates.
    #[inline]
    pub const fn window_len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the winning window as an index range suitable for slicing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gantry_algo::subarray::closest_subarray_sum;
    ///
    /// let values = [-1i32, -2, -3];
    /// let hit = closest_subarray_sum(&values, 0).unwrap();
    /// assert_eq!(&values[hit.range()], &[-1]);
    /// ```
    #[inline]
    pub const fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl<T> std::fmt::Display for ClosestSum<T>
where
    T: SeriesNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ClosestSum(sum={}, window=[{}, {}))", self.sum, self.start, self.end)
    }
}

/// Absolute gap `|target - sum|`, saturating at the type bounds.
#[inline]
fn absolute_gap<T>(target: T, sum: T) -> T
where
    T: SeriesNumeric,
{
    if sum >= target {
        sum.saturating_sub(target)
    } else {
        target.saturating_sub(sum)
    }
}

/// Finds the contiguous subarray of `values` whose sum is closest to
/// `target`.
///
/// Every contiguous window of `values` is considered; the result carries
/// the sum with the minimal absolute gap to `target` along with the window
/// that produced it. Among equally close windows the first one in scan
/// order wins (earlier start index, then earlier end index).
///
/// Runs in `O(N²)` time and `O(1)` extra space.
///
/// # Errors
///
/// Returns [`ClosestSumError::EmptyInput`] if `values` is empty. There is
/// deliberately no sentinel value: a `-1` answer is a legitimate sum.
///
/// # Examples
///
/// ```rust
/// # use gantry_algo::subarray::{closest_subarray_sum, ClosestSumError};
///
/// let hit = closest_subarray_sum(&[1i64, 4, 3, 5, 2], 13).unwrap();
/// assert_eq!(hit.sum(), 13);
///
/// let hit = closest_subarray_sum(&[-1i64, -2, -3], 0).unwrap();
/// assert_eq!(hit.sum(), -1);
///
/// let err = closest_subarray_sum::<i64>(&[], 5).unwrap_err();
/// assert_eq!(err, ClosestSumError::EmptyInput);
/// ```
pub fn closest_subarray_sum<T>(values: &[T], target: T) -> Result<ClosestSum<T>, ClosestSumError>
where
    T: SeriesNumeric,
{
    let first = *values.first().ok_or(ClosestSumError::EmptyInput)?;

    // The single-element window [0, 1) is the first candidate in scan
    // order; seeding it keeps the strict `<` improvement rule first-found.
    let mut best = ClosestSum {
        sum: first,
        start: 0,
        end: 1,
    };
    let mut best_gap = absolute_gap(target, first);

    for start in 0..values.len() {
        let mut sum = T::zero();
        for (end, &value) in values.iter().enumerate().skip(start) {
            sum = sum.saturating_add(value);
            let gap = absolute_gap(target, sum);
            if gap < best_gap {
                best_gap = gap;
                best = ClosestSum {
                    sum,
                    start,
                    end: end + 1,
                };
            }
        }
    }

    Ok(best)
}
