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

//! Set operations over collections of intervals.
//!
//! Every function returns a canonical list: no empty interval, no two intervals overlapping or touching on an open and a closed bound, sorted by lower bound. Inputs can be in any order and overlap freely.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::{Interval, intervals};
//!
//! let a = vec![Interval::open(0, 10).unwrap(), Interval::closed(20, 30).unwrap()];
//! let c: Vec<String> = intervals::complement(a).iter().map(|i| i.to_string()).collect();
//! assert_eq!(c, vec!["(-∞, 0]", "[10, 20)", "(30, ∞)"]);
//! ```

use crate::bound::Bound;
use crate::interval::Interval;
use crate::ops::{Hull, Successor, Whole};
use bit_set::BitSet;
use gcollections::ops::*;
use log::trace;
use std::cmp::Ordering;

/// Merges intervals that overlap or touch (`[0, 5)` and `[5, 10]`) and sorts the result by lower bound.
pub fn flatten<T, I>(intervals: I) -> Vec<Interval<T>> where
 T: Successor,
 I: IntoIterator<Item=Interval<T>>
{
  let mut pending: Vec<Interval<T>> = intervals.into_iter()
    .filter(|i| !i.is_empty())
    .collect();
  let input_len = pending.len();
  let mut passes = 0;
  loop {
    passes += 1;
    let merged = merge_pass(&pending);
    let stable = merged.len() == pending.len();
    pending = merged;
    if stable {
      break;
    }
  }
  pending.sort_by(cmp_lower);
  trace!("flatten: {} intervals merged into {} in {} passes", input_len, pending.len(), passes);
  pending
}

// Joins each interval with every later one it overlaps or touches on an open and a closed bound. Absorbed intervals are tracked by index so value-equal intervals stay distinct.
fn merge_pass<T: Successor>(intervals: &[Interval<T>]) -> Vec<Interval<T>> {
  let mut absorbed = BitSet::with_capacity(intervals.len());
  let mut merged = Vec::with_capacity(intervals.len());
  for (i, interval) in intervals.iter().enumerate() {
    if absorbed.contains(i) {
      continue;
    }
    let mut current = interval.clone();
    for (j, other) in intervals.iter().enumerate().skip(i + 1) {
      if absorbed.contains(j) {
        continue;
      }
      if current.joinable(other) {
        current = current.hull(other);
        absorbed.insert(j);
      }
    }
    merged.push(current);
  }
  merged
}

fn cmp_lower<T: Ord>(a: &Interval<T>, b: &Interval<T>) -> Ordering {
  match (a.lower(), b.lower()) {
    (Ok(l), Ok(r)) => l.cmp_as_lower(r),
    _ => Ordering::Equal
  }
}

/// Union of all the collections.
pub fn union<T, C, I>(collections: C) -> Vec<Interval<T>> where
 T: Successor,
 C: IntoIterator<Item=I>,
 I: IntoIterator<Item=Interval<T>>
{
  flatten(collections.into_iter().flatten())
}

/// Intersection of all the collections, empty if there is none.
pub fn intersection<T, C, I>(collections: C) -> Vec<Interval<T>> where
 T: Successor,
 C: IntoIterator<Item=I>,
 I: IntoIterator<Item=Interval<T>>
{
  let mut collections = collections.into_iter().map(|c| flatten(c));
  match collections.next() {
    None => vec![],
    Some(first) => collections.fold(first, |acc, next| {
      let res = cross_intersection(&acc, &next);
      trace!("intersection: {} x {} intervals give {}", acc.len(), next.len(), res.len());
      res
    })
  }
}

fn cross_intersection<T: Successor>(a: &[Interval<T>], b: &[Interval<T>]) -> Vec<Interval<T>> {
  flatten(a.iter()
    .flat_map(|i| b.iter().map(move |j| i.intersection(j)))
    .filter(|i| !i.is_empty()))
}

/// Everything not covered by `intervals`, relative to `(-∞, ∞)`.
pub fn complement<T, I>(intervals: I) -> Vec<Interval<T>> where
 T: Successor,
 I: IntoIterator<Item=Interval<T>>
{
  let flat = flatten(intervals);
  trace!("complement of {} intervals", flat.len());
  if flat.is_empty() {
    vec![Interval::whole()]
  }
  else {
    intersection(flat.into_iter().map(invert))
  }
}

// Complement of a single non-empty interval: zero, one or two intervals.
fn invert<T: Successor>(interval: Interval<T>) -> Vec<Interval<T>> {
  match interval.into_bounds() {
    None => vec![Interval::whole()],
    Some((lower, upper)) => {
      let mut res = Vec::with_capacity(2);
      if lower.is_finite() {
        res.push(Interval::bounded(Bound::negative_infinite(), lower.flip()));
      }
      if upper.is_finite() {
        res.push(Interval::bounded(upper.flip(), Bound::positive_infinite()));
      }
      res
    }
  }
}
