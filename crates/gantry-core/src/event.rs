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

//! # Sweep-Line Events
//!
//! Event primitives for interval-overlap sweeps. A `TimelineEvent<T>` marks
//! the instant at which an interval opens (`Arrival`) or closes
//! (`Departure`); sorting a batch of events and accumulating their deltas
//! yields the occupancy profile of the underlying intervals.
//!
//! ## Ordering contract
//!
//! The total order on events is an explicit two-key sort:
//!
//! 1. Timestamp, ascending.
//! 2. At equal timestamps, `Arrival` before `Departure`.
//!
//! The second key encodes the overlap semantics: an arrival at time `T`
//! counts as overlapping with a departure at the same instant. Consumers
//! must not re-derive this rule with ad-hoc comparators.

use num_traits::PrimInt;
use std::cmp::Ordering;

/// The kind of a sweep-line event.
///
/// `Arrival` opens an interval, `Departure` closes one. The ordering on
/// kinds places `Arrival` strictly before `Departure`, which is the
/// tie-break applied at equal timestamps.
///
/// # Examples
///
/// ```rust
/// # use gantry_core::event::EventKind;
///
/// assert!(EventKind::Arrival < EventKind::Departure);
/// assert_eq!(EventKind::Arrival.delta(), 1);
/// assert_eq!(EventKind::Departure.delta(), -1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum EventKind {
    /// An interval opens at the event's timestamp.
    Arrival,
    /// An interval closes at the event's timestamp.
    Departure,
}

impl EventKind {
    /// Returns the sweep counter increment for this kind: `+1` for an
    /// arrival, `-1` for a departure.
    #[inline]
    pub const fn delta(self) -> isize {
        match self {
            EventKind::Arrival => 1,
            EventKind::Departure => -1,
        }
    }

    /// Secondary sort key. Arrivals rank before departures.
    #[inline]
    const fn sort_rank(self) -> u8 {
        match self {
            EventKind::Arrival => 0,
            EventKind::Departure => 1,
        }
    }
}

impl Ord for EventKind {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_rank().cmp(&other.sort_rank())
    }
}

impl PartialOrd for EventKind {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::Arrival => write!(f, "Arrival"),
            EventKind::Departure => write!(f, "Departure"),
        }
    }
}

/// A single sweep-line event: a timestamp tagged with an `EventKind`.
///
/// Events implement the two-key total order described in the module
/// documentation, so a plain `sort_unstable` on a `Vec<TimelineEvent<T>>`
/// produces exactly the processing order a sweep requires.
///
/// # Examples
///
/// ```rust
/// # use gantry_core::event::{EventKind, TimelineEvent};
///
/// let mut events = vec![
///     TimelineEvent::departure(10),
///     TimelineEvent::arrival(10),
///     TimelineEvent::arrival(5),
/// ];
/// events.sort_unstable();
///
/// assert_eq!(events[0], TimelineEvent::arrival(5));
/// // Tie at t=10: the arrival sorts first.
/// assert_eq!(events[1].kind(), EventKind::Arrival);
/// assert_eq!(events[2].kind(), EventKind::Departure);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimelineEvent<T>
where
    T: PrimInt,
{
    time: T,
    kind: EventKind,
}

impl<T> TimelineEvent<T>
where
    T: PrimInt,
{
    /// Creates a new event from a timestamp and a kind.
    #[inline]
    pub const fn new(time: T, kind: EventKind) -> Self {
        Self { time, kind }
    }

    /// Creates an arrival event at `time`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gantry_core::event::{EventKind, TimelineEvent};
    ///
    /// let e = TimelineEvent::arrival(7);
    /// assert_eq!(e.time(), 7);
    /// assert_eq!(e.kind(), EventKind::Arrival);
    /// ```
    #[inline]
    pub const fn arrival(time: T) -> Self {
        Self::new(time, EventKind::Arrival)
    }

    /// Creates a departure event at `time`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gantry_core::event::{EventKind, TimelineEvent};
    ///
    /// let e = TimelineEvent::departure(7);
    /// assert_eq!(e.time(), 7);
    /// assert_eq!(e.kind(), EventKind::Departure);
    /// ```
    #[inline]
    pub const fn departure(time: T) -> Self {
        Self::new(time, EventKind::Departure)
    }

    /// Returns the event's timestamp.
    #[inline]
    pub const fn time(&self) -> T {
        self.time
    }

    /// Returns the event's kind.
    #[inline]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    /// Returns the sweep counter increment contributed by this event.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use gantry_core::event::TimelineEvent;
    ///
    /// assert_eq!(TimelineEvent::arrival(3).delta(), 1);
    /// assert_eq!(TimelineEvent::departure(3).delta(), -1);
    /// ```
    #[inline]
    pub const fn delta(&self) -> isize {
        self.kind.delta()
    }
}

impl<T> Ord for TimelineEvent<T>
where
    T: PrimInt,
{
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.time.cmp(&other.time).then(self.kind.cmp(&other.kind))
    }
}

impl<T> PartialOrd for TimelineEvent<T>
where
    T: PrimInt,
{
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> std::fmt::Debug for TimelineEvent<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimelineEvent")
            .field("time", &self.time)
            .field("kind", &self.kind)
            .finish()
    }
}

impl<T> std::fmt::Display for TimelineEvent<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.kind, self.time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ordering() {
        assert!(EventKind::Arrival < EventKind::Departure);
        assert_eq!(EventKind::Arrival.cmp(&EventKind::Arrival), Ordering::Equal);
        assert_eq!(
            EventKind::Departure.cmp(&EventKind::Arrival),
            Ordering::Greater
        );
    }

    #[test]
    fn test_deltas() {
        assert_eq!(EventKind::Arrival.delta(), 1);
        assert_eq!(EventKind::Departure.delta(), -1);
        assert_eq!(TimelineEvent::arrival(0i32).delta(), 1);
        assert_eq!(TimelineEvent::departure(0i32).delta(), -1);
    }

    #[test]
    fn test_event_ordering_by_time() {
        let early = TimelineEvent::departure(1i64);
        let late = TimelineEvent::arrival(2i64);
        // Time dominates kind.
        assert!(early < late);
    }

    #[test]
    fn test_event_ordering_tie_break() {
        let arrival = TimelineEvent::arrival(10i64);
        let departure = TimelineEvent::departure(10i64);
        assert!(arrival < departure);
        assert!(departure > arrival);
    }

    #[test]
    fn test_sort_produces_processing_order() {
        let mut events = vec![
            TimelineEvent::departure(5i32),
            TimelineEvent::arrival(5i32),
            TimelineEvent::departure(-3i32),
            TimelineEvent::arrival(-3i32),
            TimelineEvent::arrival(0i32),
        ];
        events.sort_unstable();

        assert_eq!(
            events,
            vec![
                TimelineEvent::arrival(-3i32),
                TimelineEvent::departure(-3i32),
                TimelineEvent::arrival(0i32),
                TimelineEvent::arrival(5i32),
                TimelineEvent::departure(5i32),
            ]
        );
    }

    #[test]
    fn test_negative_timestamps() {
        let a = TimelineEvent::arrival(-10i64);
        let b = TimelineEvent::arrival(-5i64);
        assert!(a < b);
    }

    #[test]
    fn test_display_debug() {
        let e = TimelineEvent::arrival(42i32);
        assert_eq!(format!("{}", e), "Arrival@42");
        assert_eq!(
            format!("{:?}", e),
            "TimelineEvent { time: 42, kind: Arrival }"
        );
    }
}
