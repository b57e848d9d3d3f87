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

//! Generic interval set.
//!
//! It stores intervals in a sorted vector. The main advantage over a single [interval](../interval/index.html) is the exact representation of sets with "holes". For example `[1, 2] ∪ (5, 6]` is stored as `{[1, 2], (5, 6]}`. The list is kept canonical (see [intervals](../intervals/index.html)) after every operation: overlapping intervals, and intervals touching on an open and a closed bound, are merged.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::*;
//! use interval_algebra::{Interval, IntervalSet};
//!
//! let a: IntervalSet<i32> = vec![Interval::closed(1, 3).unwrap(), Interval::closed(7, 9).unwrap()].into_iter().collect();
//! let b = IntervalSet::from(Interval::closed(2, 8).unwrap());
//! assert_eq!(a.union(&b).to_string(), "{[1, 9]}");
//! assert_eq!(a.intersection(&b).to_string(), "{[2, 3], [7, 8]}");
//! assert_eq!(a.difference(&b).to_string(), "{[1, 2), (8, 9]}");
//! assert!(a.contains(&8) && !a.contains(&5));
//! ```

use crate::interval::Interval;
use crate::intervals;
use crate::ops::{Successor, Hull, Whole};
use gcollections::kind::*;
use gcollections::ops::*;
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;

#[derive(Debug, Clone)]
pub struct IntervalSet<T> {
  intervals: Vec<Interval<T>>
}

impl<T: Successor> IntervalSet<T>
{
  pub fn new<I>(intervals: I) -> IntervalSet<T> where
   I: IntoIterator<Item=Interval<T>>
  {
    IntervalSet {
      intervals: intervals::flatten(intervals)
    }
  }
}

impl<T> IntervalSet<T>
{
  pub fn interval_count(&self) -> usize {
    self.intervals.len()
  }

  pub fn intervals(&self) -> &[Interval<T>] {
    &self.intervals
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Interval<T>> {
    self.intervals.iter()
  }

  pub fn into_intervals(self) -> Vec<Interval<T>> {
    self.intervals
  }
}

impl<T: Ord + Clone> IntervalSet<T>
{
  /// Smallest interval covering the whole set.
  pub fn span(&self) -> Interval<T> {
    match (self.intervals.first(), self.intervals.last()) {
      (Some(front), Some(back)) => front.hull(back),
      _ => Interval::empty()
    }
  }
}

impl<T> Collection for IntervalSet<T>
{
  type Item = T;
}

impl<T> Empty for IntervalSet<T>
{
  fn empty() -> IntervalSet<T> {
    IntervalSet { intervals: vec![] }
  }
}

impl<T> Whole for IntervalSet<T>
{
  fn whole() -> IntervalSet<T> {
    IntervalSet { intervals: vec![Interval::whole()] }
  }
}

impl<T> IsEmpty for IntervalSet<T>
{
  fn is_empty(&self) -> bool {
    self.intervals.is_empty()
  }
}

impl<T: Ord> Contains for IntervalSet<T>
{
  fn contains(&self, value: &T) -> bool {
    use crate::bound::BoundOrdering::*;
    let mut left = 0;
    let mut right = self.intervals.len();
    while left < right {
      let mid_idx = (left + right) / 2;
      let mid = &self.intervals[mid_idx];
      if mid.contains(value) {
        return true;
      }
      let before = match mid.lower() {
        Ok(lower) => matches!(lower.compare_value(value), Greater | Unordered),
        Err(_) => false
      };
      if before {
        right = mid_idx;
      }
      else {
        left = mid_idx + 1;
      }
    }
    false
  }
}

impl<T: Successor> Union for IntervalSet<T>
{
  type Output = IntervalSet<T>;

  fn union(&self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
    IntervalSet {
      intervals: intervals::union(vec![self.iter().cloned(), rhs.iter().cloned()])
    }
  }
}

impl<T: Successor> Intersection for IntervalSet<T>
{
  type Output = IntervalSet<T>;

  fn intersection(&self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
    IntervalSet {
      intervals: intervals::intersection(vec![self.iter().cloned(), rhs.iter().cloned()])
    }
  }
}

impl<T: Successor> Complement for IntervalSet<T>
{
  fn complement(&self) -> IntervalSet<T> {
    IntervalSet {
      intervals: intervals::complement(self.iter().cloned())
    }
  }
}

impl<T: Successor> Difference for IntervalSet<T>
{
  type Output = IntervalSet<T>;

  fn difference(&self, rhs: &IntervalSet<T>) -> IntervalSet<T> {
    self.intersection(&rhs.complement())
  }
}

impl<T: Successor> Overlap for IntervalSet<T>
{
  fn overlap(&self, rhs: &IntervalSet<T>) -> bool {
    !self.intersection(rhs).is_empty()
  }
}

impl<T: Successor> From<Interval<T>> for IntervalSet<T>
{
  fn from(interval: Interval<T>) -> IntervalSet<T> {
    IntervalSet::new(vec![interval])
  }
}

impl<T: Successor> FromIterator<Interval<T>> for IntervalSet<T>
{
  fn from_iter<I>(iterable: I) -> IntervalSet<T> where
   I: IntoIterator<Item=Interval<T>>
  {
    IntervalSet::new(iterable)
  }
}

impl<T: Successor> Extend<Interval<T>> for IntervalSet<T>
{
  fn extend<I>(&mut self, iterable: I) where
   I: IntoIterator<Item=Interval<T>>
  {
    let current = std::mem::take(&mut self.intervals);
    self.intervals = intervals::flatten(current.into_iter().chain(iterable));
  }
}

impl<T> IntoIterator for IntervalSet<T>
{
  type Item = Interval<T>;
  type IntoIter = std::vec::IntoIter<Interval<T>>;

  fn into_iter(self) -> Self::IntoIter {
    self.intervals.into_iter()
  }
}

impl<'a, T> IntoIterator for &'a IntervalSet<T>
{
  type Item = &'a Interval<T>;
  type IntoIter = std::slice::Iter<'a, Interval<T>>;

  fn into_iter(self) -> Self::IntoIter {
    self.intervals.iter()
  }
}

impl<T: PartialEq> PartialEq for IntervalSet<T>
{
  fn eq(&self, other: &IntervalSet<T>) -> bool {
    self.intervals == other.intervals
  }
}

impl<T: Display> Display for IntervalSet<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    write!(formatter, "{{")?;
    for (i, interval) in self.intervals.iter().enumerate() {
      if i > 0 {
        write!(formatter, ", ")?;
      }
      write!(formatter, "{}", interval)?;
    }
    write!(formatter, "}}")
  }
}

impl<T: Serialize> Serialize for IntervalSet<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    serializer.collect_seq(&self.intervals)
  }
}

impl<'de, T> Deserialize<'de> for IntervalSet<T> where
 T: Deserialize<'de> + Successor
{
  fn deserialize<D>(deserializer: D) -> Result<IntervalSet<T>, D::Error> where
   D: Deserializer<'de>
  {
    let intervals = Vec::<Interval<T>>::deserialize(deserializer)?;
    Ok(IntervalSet::new(intervals))
  }
}
