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

//! # Series Numeric Trait
//!
//! Unified numeric bounds for the analysis algorithms. `SeriesNumeric`
//! specifies the integer capabilities required by timetable and sequence
//! scans: intrinsic traits (`PrimInt`, `Signed`), formatting for error
//! reporting, and thread-safety markers.
//!
//! ## Motivation
//!
//! The analysis routines should remain generic over integer types while
//! retaining predictable arithmetic semantics. Timestamps and sequence
//! values may legitimately be negative, so `Signed` is part of the
//! contract rather than an afterthought. Collecting the bounds into a
//! single alias keeps generic signatures readable.
//!
//! ## Highlights
//!
//! - Requires `PrimInt + Signed` for numeric fundamentals, which brings
//!   checked and saturating arithmetic along for free.
//! - `Debug + Display` so values can appear in error payloads and logs.
//! - `Send + Sync` so disjoint inputs can be analyzed from multiple
//!   threads without further bounds at the call site.

use num_traits::{PrimInt, Signed};

/// A trait alias for integer types accepted by the analysis algorithms.
///
/// These are usually the signed integer types `i8`, `i16`, `i32`, `i64`,
/// `i128` and `isize`. The blanket implementation covers any type that
/// satisfies the bounds.
///
/// # Examples
///
/// ```rust
/// # use gantry_core::num::SeriesNumeric;
///
/// fn midpoint<T: SeriesNumeric>(a: T, b: T) -> T {
///     a + (b - a) / (T::one() + T::one())
/// }
///
/// assert_eq!(midpoint(10i64, 20i64), 15);
/// ```
pub trait SeriesNumeric:
    PrimInt + Signed + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> SeriesNumeric for T where
    T: PrimInt + Signed + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}
