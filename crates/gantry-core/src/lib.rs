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

//! # Gantry Core
//!
//! Shared primitives for the Gantry timetable analysis crates. This crate
//! consolidates the numeric bounds and sweep-line building blocks that the
//! algorithm crates build upon, keeping them small, well-specified, and
//! reusable.
//!
//! ## Modules
//!
//! - `event`: Sweep-line event primitives. `TimelineEvent<T>` pairs a
//!   timestamp with an `EventKind` (arrival or departure) and carries an
//!   explicit two-key total order: time ascending, arrivals before
//!   departures at equal timestamps.
//! - `num`: The `SeriesNumeric` trait alias collecting the integer bounds
//!   required by the analysis algorithms (`PrimInt`, `Signed`, formatting,
//!   thread-safety).
//!
//! ## Purpose
//!
//! Interval-overlap counting lives or dies by its event ordering contract.
//! Encoding that contract once, in the type system, keeps every consumer
//! honest and makes the tie-break rule testable in isolation.
//!
//! Refer to each module for detailed APIs and examples.

pub mod event;
pub mod num;
