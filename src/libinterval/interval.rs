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

//! Intervals with open, closed or infinite bounds.
//!
//! An interval is either empty or made of a lower and an upper [bound](../bound/index.html). Bounds are validated when the interval is built: the lower bound cannot be positive infinity, the upper bound cannot be negative infinity and the lower value cannot exceed the upper value. An interval such as `(5, 5]` with equal values and an open side contains nothing and is built as the empty interval.
//!
//! The set operations come from the `gcollections` traits. The union of two intervals is only an interval when they overlap or touch; otherwise it is empty and the collection-level [union](../intervals/fn.union.html) must be used.
//!
//! # Examples
//!
//! ```rust
//! use gcollections::ops::*;
//! use interval_algebra::Interval;
//!
//! let a = Interval::closed(1, 5).unwrap();
//! let b = Interval::open(4, 7).unwrap();
//! assert_eq!(a.intersection(&b), Interval::open_closed(4, 5).unwrap());
//! assert_eq!(a.union(&b).to_string(), "[1, 7)");
//!
//! let c = Interval::closed(10, 12).unwrap();
//! assert!(a.union(&c).is_empty());
//! ```

use crate::bound::Bound;
use crate::error::IntervalError;
use crate::ops::{Successor, Hull, Whole};
use gcollections::kind::*;
use gcollections::ops::*;
use serde::de;
use serde::{Serialize, Serializer, Deserialize, Deserializer};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

#[derive(Debug, Clone)]
pub struct Interval<T> {
  bounds: Option<(Bound<T>, Bound<T>)>
}

impl<T> Interval<T>
{
  // Precondition: the bounds are ordered and do not describe an empty interval.
  pub(crate) fn bounded(lower: Bound<T>, upper: Bound<T>) -> Interval<T> {
    Interval { bounds: Some((lower, upper)) }
  }

  /// `[value, ∞)`
  pub fn at_least(value: T) -> Interval<T> {
    Interval::bounded(Bound::closed(value), Bound::positive_infinite())
  }

  /// `(value, ∞)`
  pub fn greater_than(value: T) -> Interval<T> {
    Interval::bounded(Bound::open(value), Bound::positive_infinite())
  }

  /// `(-∞, value]`
  pub fn at_most(value: T) -> Interval<T> {
    Interval::bounded(Bound::negative_infinite(), Bound::closed(value))
  }

  /// `(-∞, value)`
  pub fn less_than(value: T) -> Interval<T> {
    Interval::bounded(Bound::negative_infinite(), Bound::open(value))
  }

  pub fn lower(&self) -> Result<&Bound<T>, IntervalError> {
    self.bounds().map(|(l, _)| l).ok_or(IntervalError::EmptyIntervalBounds)
  }

  pub fn upper(&self) -> Result<&Bound<T>, IntervalError> {
    self.bounds().map(|(_, u)| u).ok_or(IntervalError::EmptyIntervalBounds)
  }

  /// Both bounds, `None` for the empty interval.
  pub fn bounds(&self) -> Option<(&Bound<T>, &Bound<T>)> {
    self.bounds.as_ref().map(|(l, u)| (l, u))
  }

  pub fn into_bounds(self) -> Option<(Bound<T>, Bound<T>)> {
    self.bounds
  }
}

impl<T: Ord> Interval<T>
{
  /// Builds the interval between `lower` and `upper`.
  ///
  /// Equal values with at least one open side give the empty interval.
  pub fn from_bounds(lower: Bound<T>, upper: Bound<T>) -> Result<Interval<T>, IntervalError> {
    match (&lower, &upper) {
      (Bound::PositiveInfinite, _) => Err(IntervalError::LowerBoundPositiveInfinite),
      (_, Bound::NegativeInfinite) => Err(IntervalError::UpperBoundNegativeInfinite),
      _ => Interval::ordered(lower, upper).ok_or(IntervalError::InvertedBounds)
    }
  }

  pub fn open(lower: T, upper: T) -> Result<Interval<T>, IntervalError> {
    Interval::from_bounds(Bound::open(lower), Bound::open(upper))
  }

  pub fn closed(lower: T, upper: T) -> Result<Interval<T>, IntervalError> {
    Interval::from_bounds(Bound::closed(lower), Bound::closed(upper))
  }

  pub fn open_closed(lower: T, upper: T) -> Result<Interval<T>, IntervalError> {
    Interval::from_bounds(Bound::open(lower), Bound::closed(upper))
  }

  pub fn closed_open(lower: T, upper: T) -> Result<Interval<T>, IntervalError> {
    Interval::from_bounds(Bound::closed(lower), Bound::open(upper))
  }

  // Precondition: `lower` is not positive infinity and `upper` is not negative infinity.
  fn ordered(lower: Bound<T>, upper: Bound<T>) -> Option<Interval<T>> {
    let order = match (lower.value(), upper.value()) {
      (Some(l), Some(u)) => l.cmp(u),
      _ => Ordering::Less
    };
    match order {
      Ordering::Greater => None,
      Ordering::Equal if !(lower.is_closed() && upper.is_closed()) => Some(Interval::empty()),
      _ => Some(Interval::bounded(lower, upper))
    }
  }

  // Same as `ordered` but crossed bounds give the empty interval.
  fn ordered_or_empty(lower: Bound<T>, upper: Bound<T>) -> Interval<T> {
    Interval::ordered(lower, upper).unwrap_or_else(Interval::empty)
  }
}

// When two bounds are open and closed on the same value, each of these functions picks the one giving the smaller or larger set; otherwise they behave as `Bound::min` and `Bound::max`.

fn lower_min<'a, T: Ord>(l: &'a Bound<T>, r: &'a Bound<T>) -> &'a Bound<T> {
  if l.is_ambiguous_with(r) {
    if l.is_closed() { l } else { r }
  }
  else if l.less_eq(r) { l } else { r }
}

fn upper_min<'a, T: Ord>(l: &'a Bound<T>, r: &'a Bound<T>) -> &'a Bound<T> {
  if l.is_ambiguous_with(r) {
    if l.is_open() { l } else { r }
  }
  else if l.less_eq(r) { l } else { r }
}

fn lower_max<'a, T: Ord>(l: &'a Bound<T>, r: &'a Bound<T>) -> &'a Bound<T> {
  if l.is_ambiguous_with(r) {
    if l.is_open() { l } else { r }
  }
  else if l.greater_eq(r) { l } else { r }
}

fn upper_max<'a, T: Ord>(l: &'a Bound<T>, r: &'a Bound<T>) -> &'a Bound<T> {
  if l.is_ambiguous_with(r) {
    if l.is_closed() { l } else { r }
  }
  else if l.greater_eq(r) { l } else { r }
}

// An upper bound followed by a lower bound on the same value, exactly one of them open.
fn touches<T: PartialEq>(upper: &Bound<T>, lower: &Bound<T>) -> bool {
  match (upper, lower) {
    (Bound::Open(u), Bound::Closed(l))
  | (Bound::Closed(u), Bound::Open(l)) => u == l,
    _ => false
  }
}

// Two closed bounds on consecutive values of a discrete domain.
fn succeeds<T: Successor>(upper: &Bound<T>, lower: &Bound<T>) -> bool {
  match (upper, lower) {
    (Bound::Closed(u), Bound::Closed(l)) => u.successor().as_ref() == Some(l),
    _ => false
  }
}

impl<T: Ord + Clone> Interval<T>
{
  // Upper bound of the left interval and lower bound of the right one, when both are non-empty and disjoint.
  fn facing<'a>(&'a self, other: &'a Interval<T>) -> Option<(&'a Bound<T>, &'a Bound<T>)> {
    match (self.bounds(), other.bounds()) {
      (Some(a), Some(b)) if !self.overlap(other) => {
        let (left, right) =
          if a.0.cmp_as_lower(b.0) == Ordering::Greater { (b, a) }
          else { (a, b) };
        Some((left.1, right.0))
      }
      _ => None
    }
  }

  /// `true` if the intervals overlap or touch on an open and a closed bound, i.e. their union is an interval regardless of the domain.
  pub(crate) fn joinable(&self, other: &Interval<T>) -> bool {
    self.overlap(other)
    || self.facing(other).map_or(false, |(u, l)| touches(u, l))
  }
}

impl<T: Successor> Interval<T>
{
  /// `true` if both intervals are non-empty, disjoint, and their union is an interval.
  ///
  /// Over a discrete domain (see [`Successor`](../ops/trait.Successor.html)) `[1, 3]` and `[4, 6]` are adjacent.
  pub fn is_adjacent_to(&self, other: &Interval<T>) -> bool {
    self.facing(other).map_or(false, |(u, l)| touches(u, l) || succeeds(u, l))
  }
}

impl<T> Collection for Interval<T>
{
  type Item = T;
}

impl<T> Empty for Interval<T>
{
  fn empty() -> Interval<T> {
    Interval { bounds: None }
  }
}

impl<T> IsEmpty for Interval<T>
{
  fn is_empty(&self) -> bool {
    self.bounds.is_none()
  }
}

impl<T> Whole for Interval<T>
{
  fn whole() -> Interval<T> {
    Interval::bounded(Bound::negative_infinite(), Bound::positive_infinite())
  }
}

impl<T: Clone> Singleton for Interval<T>
{
  fn singleton(value: T) -> Interval<T> {
    Interval::bounded(Bound::closed(value.clone()), Bound::closed(value))
  }
}

impl<T: Ord> Contains for Interval<T>
{
  fn contains(&self, value: &T) -> bool {
    use crate::bound::BoundOrdering::*;
    match self.bounds() {
      None => false,
      Some((l, u)) =>
        matches!(l.compare_value(value), Less | Equal)
        && matches!(u.compare_value(value), Greater | Equal)
    }
  }
}

impl<T: Ord + Clone> Intersection for Interval<T>
{
  type Output = Interval<T>;

  fn intersection(&self, rhs: &Interval<T>) -> Interval<T> {
    match (self.bounds(), rhs.bounds()) {
      (Some((al, au)), Some((bl, bu))) =>
        Interval::ordered_or_empty(
          lower_max(al, bl).clone(),
          upper_min(au, bu).clone()),
      _ => Interval::empty()
    }
  }
}

impl<T: Ord + Clone> Overlap for Interval<T>
{
  fn overlap(&self, rhs: &Interval<T>) -> bool {
    !self.intersection(rhs).is_empty()
  }
}

impl<T: Successor> Union for Interval<T>
{
  type Output = Interval<T>;

  /// The smallest interval covering both operands if they overlap or are adjacent, the empty interval otherwise.
  fn union(&self, rhs: &Interval<T>) -> Interval<T> {
    match (self.bounds(), rhs.bounds()) {
      (None, _) => rhs.clone(),
      (_, None) => self.clone(),
      (Some((al, au)), Some((bl, bu))) => {
        if !self.overlap(rhs) && !self.is_adjacent_to(rhs) {
          Interval::empty()
        }
        else {
          Interval::ordered_or_empty(
            lower_min(al, bl).clone(),
            upper_max(au, bu).clone())
        }
      }
    }
  }
}

impl<T: Ord + Clone> Hull for Interval<T>
{
  type Output = Interval<T>;

  fn hull(&self, rhs: &Interval<T>) -> Interval<T> {
    match (self.bounds(), rhs.bounds()) {
      (None, _) => rhs.clone(),
      (_, None) => self.clone(),
      (Some((al, au)), Some((bl, bu))) =>
        Interval::ordered_or_empty(
          lower_min(al, bl).clone(),
          upper_max(au, bu).clone())
    }
  }
}

/// Empty intervals are all equal, other intervals are equal when both bounds are (infinite bounds are never equal).
impl<T: PartialEq> PartialEq for Interval<T>
{
  fn eq(&self, other: &Interval<T>) -> bool {
    match (&self.bounds, &other.bounds) {
      (None, None) => true,
      (Some((al, au)), Some((bl, bu))) => al == bl && au == bu,
      _ => false
    }
  }
}

impl<T: Display> Display for Interval<T>
{
  fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
    match &self.bounds {
      None => write!(formatter, "∅"),
      Some((lower, upper)) => {
        match lower {
          Bound::Open(v) => write!(formatter, "({}", v)?,
          Bound::Closed(v) => write!(formatter, "[{}", v)?,
          _ => write!(formatter, "(-∞")?
        }
        write!(formatter, ", ")?;
        match upper {
          Bound::Open(v) => write!(formatter, "{})", v),
          Bound::Closed(v) => write!(formatter, "{}]", v),
          _ => write!(formatter, "∞)")
        }
      }
    }
  }
}

impl<T: Serialize> Serialize for Interval<T>
{
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
   S: Serializer
  {
    match &self.bounds {
      None => serializer.serialize_none(),
      Some(bounds) => serializer.serialize_some(bounds)
    }
  }
}

impl<'de, T> Deserialize<'de> for Interval<T> where
 T: Deserialize<'de> + Ord
{
  fn deserialize<D>(deserializer: D) -> Result<Interval<T>, D::Error> where
   D: Deserializer<'de>
  {
    match Option::<(Bound<T>, Bound<T>)>::deserialize(deserializer)? {
      None => Ok(Interval::empty()),
      Some((lower, upper)) => Interval::from_bounds(lower, upper).map_err(de::Error::custom)
    }
  }
}
