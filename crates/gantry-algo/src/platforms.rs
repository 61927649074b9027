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

//! # Minimum Platforms
//!
//! Peak interval-overlap counting over a timetable of paired arrival and
//! departure times. Interval `i` is `[arrivals[i], departures[i]]`, and
//! the peak number of simultaneously active intervals equals the minimum
//! number of platforms needed to host the timetable without conflict.
//!
//! ## Algorithm
//!
//! A sweep-line over `2N` `TimelineEvent`s sorted by the two-key order
//! from `gantry_core::event`: time ascending, arrivals before departures
//! at equal timestamps. An arrival at time `T` therefore counts as
//! overlapping with a departure at the same instant. The sweep accumulates
//! event deltas and tracks the running maximum.
//!
//! `O(N log N)` time for the sort, `O(N)` space for the event list.

use gantry_core::{
    event::{EventKind, TimelineEvent},
    num::SeriesNumeric,
};

/// The error type for timetable analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlatformsError {
    /// The arrival and departure sequences have different lengths, so the
    /// pairing into intervals is undefined.
    LengthMismatch {
        /// Number of arrival times supplied.
        arrivals: usize,
        /// Number of departure times supplied.
        departures: usize,
    },
}

impl std::fmt::Display for PlatformsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch {
                arrivals,
                departures,
            } => write!(
                f,
                "arrival and departure sequences must have equal length: got {} arrivals and {} departures",
                arrivals, departures
            ),
        }
    }
}

impl std::error::Error for PlatformsError {}

/// The occupancy summary of a timetable sweep.
///
/// Carries the peak platform count together with the earliest instant at
/// which that peak is first reached. `peak_time` is `None` exactly when
/// the timetable is empty.
///
/// # Examples
///
/// ```rust
/// # use gantry_algo::platforms::platform_demand;
///
/// let demand = platform_demand(&[900i32, 940, 950], &[910, 1200, 1120]).unwrap();
/// assert_eq!(demand.platforms(), 2);
/// assert_eq!(demand.peak_time(), Some(950));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformDemand<T> {
    platforms: usize,
    peak_time: Option<T>,
}

impl<T> PlatformDemand<T>
where
    T: SeriesNumeric,
{
    /// Returns the peak number of simultaneously occupied platforms.
    #[inline]
    pub const fn platforms(&self) -> usize {
        self.platforms
    }

    /// Returns the earliest instant at which the peak is first reached,
    /// or `None` for an empty timetable.
    #[inline]
    pub const fn peak_time(&self) -> Option<T> {
        self.peak_time
    }
}

impl<T> std::fmt::Display for PlatformDemand<T>
where
    T: SeriesNumeric,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.peak_time {
            Some(t) => write!(f, "PlatformDemand(platforms={}, peak_time={})", self.platforms, t),
            None => write!(f, "PlatformDemand(platforms={})", self.platforms),
        }
    }
}

/// Computes the full occupancy summary of a timetable.
///
/// Builds one arrival and one departure event per interval, sorts them by
/// the explicit two-key order, and sweeps. The peak of the running counter
/// is the minimum platform count; the instant that first attains it is
/// reported alongside.
///
/// # Errors
///
/// Returns [`PlatformsError::LengthMismatch`] if the two sequences differ
/// in length.
///
/// # Examples
///
/// ```rust
/// # use gantry_algo::platforms::platform_demand;
///
/// let arrivals = [900i32, 940, 950, 1100, 1500, 1800];
/// let departures = [910, 1200, 1120, 1130, 1900, 2000];
///
/// let demand = platform_demand(&arrivals, &departures).unwrap();
/// assert_eq!(demand.platforms(), 3);
/// ```
pub fn platform_demand<T>(
    arrivals: &[T],
    departures: &[T],
) -> Result<PlatformDemand<T>, PlatformsError>
where
    T: SeriesNumeric,
{
    if arrivals.len() != departures.len() {
        return Err(PlatformsError::LengthMismatch {
            arrivals: arrivals.len(),
            departures: departures.len(),
        });
    }

    let mut events = Vec::with_capacity(arrivals.len() * 2);
    events.extend(arrivals.iter().map(|&t| TimelineEvent::arrival(t)));
    events.extend(departures.iter().map(|&t| TimelineEvent::departure(t)));
    events.sort_unstable();

    // The counter is signed: a timetable is allowed to list a departure
    // earlier than every arrival, which dips the count below zero.
    let mut current: isize = 0;
    let mut peak: isize = 0;
    let mut peak_time = None;

    for event in &events {
        current += event.delta();
        if matches!(event.kind(), EventKind::Arrival) && current > peak {
            peak = current;
            peak_time = Some(event.time());
        }
    }

    Ok(PlatformDemand {
        platforms: peak as usize,
        peak_time,
    })
}

/// Computes the minimum number of platforms needed to host a timetable
/// without conflict.
///
/// This is the peak of [`platform_demand`]; see there for the sweep
/// semantics. The result is non-negative and never exceeds the number of
/// intervals. An empty timetable needs no platforms.
///
/// # Errors
///
/// Returns [`PlatformsError::LengthMismatch`] if the two sequences differ
/// in length.
///
/// # Examples
///
/// ```rust
/// # use gantry_algo::platforms::{min_platforms, PlatformsError};
///
/// let arrivals = [900i32, 940, 950, 1100, 1500, 1800];
/// let departures = [910, 1200, 1120, 1130, 1900, 2000];
/// assert_eq!(min_platforms(&arrivals, &departures), Ok(3));
///
/// assert_eq!(min_platforms::<i32>(&[], &[]), Ok(0));
///
/// let err = min_platforms(&[100i32], &[]).unwrap_err();
/// assert_eq!(
///     err,
///     PlatformsError::LengthMismatch { arrivals: 1, departures: 0 }
/// );
/// ```
#[inline]
pub fn min_platforms<T>(arrivals: &[T], departures: &[T]) -> Result<usize, PlatformsError>
where
    T: SeriesNumeric,
{
    platform_demand(arrivals, departures).map(|demand| demand.platforms())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Independent reference for well-formed timetables: the peak is
    /// attained at some arrival instant, counting intervals that contain
    /// it with inclusive endpoints.
    fn reference_peak(arrivals: &[i64], departures: &[i64]) -> usize {
        arrivals
            .iter()
            .map(|&t| {
                (0..arrivals.len())
                    .filter(|&i| arrivals[i] <= t && t <= departures[i])
                    .count()
            })
            .max()
            .unwrap_or(0)
    }

    #[test]
    fn test_classic_timetable() {
        let arrivals = [900i64, 940, 950, 1100, 1500, 1800];
        let departures = [910, 1200, 1120, 1130, 1900, 2000];
        assert_eq!(min_platforms(&arrivals, &departures), Ok(3));
    }

    #[test]
    fn test_empty_timetable() {
        assert_eq!(min_platforms::<i64>(&[], &[]), Ok(0));
        let demand = platform_demand::<i64>(&[], &[]).unwrap();
        assert_eq!(demand.platforms(), 0);
        assert_eq!(demand.peak_time(), None);
    }

    #[test]
    fn test_single_interval() {
        assert_eq!(min_platforms(&[100i64], &[200]), Ok(1));
    }

    #[test]
    fn test_length_mismatch() {
        let err = min_platforms(&[1i64, 2], &[3]).unwrap_err();
        assert_eq!(
            err,
            PlatformsError::LengthMismatch {
                arrivals: 2,
                departures: 1
            }
        );
        assert_eq!(
            err.to_string(),
            "arrival and departure sequences must have equal length: got 2 arrivals and 1 departures"
        );
    }

    #[test]
    fn test_arrival_overlaps_departure_at_same_instant() {
        // The second train arrives exactly when the first departs; the
        // tie-break counts them as overlapping.
        assert_eq!(min_platforms(&[1i64, 2], &[2, 3]), Ok(2));
    }

    #[test]
    fn test_disjoint_intervals_need_one_platform() {
        assert_eq!(min_platforms(&[0i64, 10, 20], &[5, 15, 25]), Ok(1));
    }

    #[test]
    fn test_fully_nested_intervals() {
        assert_eq!(min_platforms(&[0i64, 1, 2], &[10, 9, 8]), Ok(3));
    }

    #[test]
    fn test_negative_timestamps() {
        assert_eq!(min_platforms(&[-10i64, -5], &[-6, 0]), Ok(1));
        assert_eq!(min_platforms(&[-10i64, -8], &[-6, 0]), Ok(2));
    }

    #[test]
    fn test_departure_before_every_arrival_does_not_panic() {
        // Degenerate input: the departure at 1 precedes the arrival at 5.
        // The counter dips below zero and recovers; only the genuinely
        // overlapping interval [6, 7] contributes to the peak.
        assert_eq!(min_platforms(&[5i64, 6], &[1, 7]), Ok(1));
    }

    #[test]
    fn test_peak_time_is_earliest() {
        let demand = platform_demand(&[0i64, 1, 10, 11], &[2, 3, 12, 13]).unwrap();
        // The peak of 2 is reached at t=1 and again at t=11; the earlier
        // instant is reported.
        assert_eq!(demand.platforms(), 2);
        assert_eq!(demand.peak_time(), Some(1));
    }

    #[test]
    fn test_matches_reference_randomized() {
        let mut rng = StdRng::seed_from_u64(0x9A4F);
        for _ in 0..200 {
            let len = rng.random_range(0..=32);
            let arrivals: Vec<i64> = (0..len).map(|_| rng.random_range(-100..=100)).collect();
            let departures: Vec<i64> = arrivals
                .iter()
                .map(|&a| a + rng.random_range(0..=40))
                .collect();

            let peak = min_platforms(&arrivals, &departures).unwrap();
            assert_eq!(
                peak,
                reference_peak(&arrivals, &departures),
                "arrivals={arrivals:?} departures={departures:?}"
            );
            assert!(peak <= len);
            if len > 0 {
                assert!(peak >= 1);
            }
        }
    }
}
