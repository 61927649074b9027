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

//! # Gantry Algorithms
//!
//! Analysis algorithms over integer timetables and sequences. Each routine
//! is a pure, deterministic function: no shared state, no I/O, safe to call
//! from any number of threads on disjoint inputs.
//!
//! ## Modules
//!
//! - `platforms`: Peak interval-overlap counting via a sweep-line over
//!   sorted arrival/departure events. Answers the classic question of how
//!   many platforms a station needs to host a timetable without conflict.
//! - `subarray`: Exhaustive scan for the contiguous subarray whose sum is
//!   closest to a target value, reporting both the sum and the winning
//!   window.
//!
//! ## Error handling
//!
//! Precondition violations surface as typed errors (`PlatformsError`,
//! `ClosestSumError`) rather than sentinel values; a returned value is
//! always a genuine result.

pub mod platforms;
pub mod subarray;
