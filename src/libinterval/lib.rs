// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! This library provides intervals over any totally ordered type, with open, closed and infinite bounds, and the set algebra over them: intersection, union, complement and normalization of collections of intervals. Time windows, numeric ranges or version ranges can then be manipulated as first-class values.
//!
//! * [bound](bound/index.html): endpoints of an interval and their (non-standard) comparison.
//! * [interval](interval/index.html): a single interval and the pairwise operations.
//! * [intervals](intervals/index.html): flatten, union, intersection and complement of collections of intervals.
//! * [interval_set](interval_set/index.html): a set of intervals always kept in canonical form.
//!
//! The set operations are exposed through the traits of the `gcollections` library (`Intersection`, `Union`, `Complement`, ...), so `gcollections::ops::*` must be in scope.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::*;
//! use interval_algebra::{Interval, intervals};
//!
//! let a = Interval::closed(1, 5).unwrap();
//! let b = Interval::open(4, 7).unwrap();
//! assert_eq!(a.intersection(&b).to_string(), "(4, 5]");
//!
//! let flat = intervals::flatten(vec![
//!   Interval::closed(1, 3).unwrap(),
//!   Interval::open(4, 7).unwrap(),
//!   Interval::closed(5, 8).unwrap()]);
//! assert_eq!(flat, vec![Interval::closed(1, 3).unwrap(), Interval::open_closed(4, 8).unwrap()]);
//! ```
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)
//!

pub mod bound;
pub mod error;
pub mod interval;
pub mod interval_set;
pub mod intervals;
pub mod ops;

pub use crate::bound::{Bound, BoundKind, BoundOrdering};
pub use crate::error::{ErrorKind, IntervalError};
pub use crate::interval::Interval;
pub use crate::interval_set::IntervalSet;
pub use crate::ops::{Hull, Successor, Whole};
