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

//! Endpoints of an interval.
//!
//! A bound is open, closed, negative infinity or positive infinity. Bounds are compared with a four-valued relation: two bounds are `Less`, `Equal`, `Greater` or `Unordered`. The relation is `Unordered` in two situations:
//!
//! * an open and a closed bound on the same value, e.g. `(5` and `[5`,
//! * two infinities of the same sign.
//!
//! The boolean relations (`less`, `less_eq`, `greater`, `greater_eq`) resolve the unordered case as follows:
//!
//! | left  | right | `less` | `less_eq` | `greater` | `greater_eq` | `==`  |
//! |-------|-------|--------|-----------|-----------|--------------|-------|
//! | `(5`  | `[5`  | true   | true      | true      | true         | false |
//! | `-∞`  | `-∞`  | false  | true      | false     | true         | false |
//! | `+∞`  | `+∞`  | false  | true      | false     | true         | false |
//!
//! Since `<` and `>` can hold together, `Bound` does not implement `PartialOrd`. Equality is structural but infinite bounds are never equal to anything, themselves included.
//!
//! # Examples
//!
//! ```rust
//! use interval_algebra::Bound;
//!
//! let open = Bound::open(5);
//! let closed = Bound::closed(5);
//! assert!(open.less(&closed) && open.greater(&closed));
//! assert!(open != closed);
//! assert!(Bound::closed(5) == closed);
//! ```

use crate::error::IntervalError;
use serde::{Serialize, Deserialize};
use std::cmp::Ordering;
use trilean::SKleene;

/// The four shapes of a bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
  Open,
  Closed,
  NegativeInfinite,
  PositiveInfinite
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Bound<T> {
  /// Excludes its value.
  Open(T),
  /// Includes its value.
  Closed(T),
  NegativeInfinite,
  PositiveInfinite
}

/// Outcome of comparing two bounds, or a bound and a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundOrdering {
  Less,
  Equal,
  Greater,
  /// Open and closed bounds on the same value, or two infinities of the same sign.
  Unordered
}

impl BoundOrdering
{
  fn from_values(ordering: Ordering) -> BoundOrdering {
    match ordering {
      Ordering::Less => BoundOrdering::Less,
      Ordering::Equal => BoundOrdering::Equal,
      Ordering::Greater => BoundOrdering::Greater,
    }
  }

  /// `Unknown` when the comparison is unordered.
  pub fn is_lt(self) -> SKleene {
    match self {
      BoundOrdering::Less => SKleene::True,
      BoundOrdering::Unordered => SKleene::Unknown,
      _ => SKleene::False
    }
  }

  pub fn is_gt(self) -> SKleene {
    self.reverse().is_lt()
  }

  pub fn is_eq(self) -> SKleene {
    match self {
      BoundOrdering::Equal => SKleene::True,
      BoundOrdering::Unordered => SKleene::Unknown,
      _ => SKleene::False
    }
  }

  pub fn reverse(self) -> BoundOrdering {
    match self {
      BoundOrdering::Less => BoundOrdering::Greater,
      BoundOrdering::Greater => BoundOrdering::Less,
      other => other
    }
  }
}

impl<T> Bound<T>
{
  pub fn open(value: T) -> Bound<T> {
    Bound::Open(value)
  }

  pub fn closed(value: T) -> Bound<T> {
    Bound::Closed(value)
  }

  pub fn negative_infinite() -> Bound<T> {
    Bound::NegativeInfinite
  }

  pub fn positive_infinite() -> Bound<T> {
    Bound::PositiveInfinite
  }

  /// Builds a bound from its kind and an optional value.
  ///
  /// Open and closed bounds need a value, infinite bounds must not have one.
  pub fn from_parts(kind: BoundKind, value: Option<T>) -> Result<Bound<T>, IntervalError> {
    match (kind, value) {
      (BoundKind::Open, Some(v)) => Ok(Bound::Open(v)),
      (BoundKind::Closed, Some(v)) => Ok(Bound::Closed(v)),
      (BoundKind::Open, None)
    | (BoundKind::Closed, None) => Err(IntervalError::MissingBoundValue),
      (BoundKind::NegativeInfinite, None) => Ok(Bound::NegativeInfinite),
      (BoundKind::PositiveInfinite, None) => Ok(Bound::PositiveInfinite),
      (_, Some(_)) => Err(IntervalError::UnexpectedBoundValue)
    }
  }

  pub fn kind(&self) -> BoundKind {
    match self {
      Bound::Open(_) => BoundKind::Open,
      Bound::Closed(_) => BoundKind::Closed,
      Bound::NegativeInfinite => BoundKind::NegativeInfinite,
      Bound::PositiveInfinite => BoundKind::PositiveInfinite
    }
  }

  pub fn is_open(&self) -> bool {
    self.kind() == BoundKind::Open
  }

  pub fn is_closed(&self) -> bool {
    self.kind() == BoundKind::Closed
  }

  pub fn is_infinite(&self) -> bool {
    !self.is_finite()
  }

  pub fn is_finite(&self) -> bool {
    self.value().is_some()
  }

  pub fn value(&self) -> Option<&T> {
    match self {
      Bound::Open(v) | Bound::Closed(v) => Some(v),
      _ => None
    }
  }

  /// The value of a finite bound, an error for infinite bounds.
  pub fn try_value(&self) -> Result<&T, IntervalError> {
    self.value().ok_or(IntervalError::InfiniteBoundValue)
  }

  /// Swaps open and closed, leaves infinite bounds untouched.
  pub fn flip(self) -> Bound<T> {
    match self {
      Bound::Open(v) => Bound::Closed(v),
      Bound::Closed(v) => Bound::Open(v),
      infinite => infinite
    }
  }

  fn same_infinity(&self, other: &Bound<T>) -> bool {
    match (self, other) {
      (Bound::NegativeInfinite, Bound::NegativeInfinite)
    | (Bound::PositiveInfinite, Bound::PositiveInfinite) => true,
      _ => false
    }
  }
}

// An unknown strict comparison holds, except between two identical infinities.
fn strict(answer: SKleene, same_infinity: bool) -> bool {
  match answer {
    SKleene::True => true,
    SKleene::False => false,
    SKleene::Unknown => !same_infinity
  }
}

// `a <= b` fails only when `a > b` certainly holds.
fn loose(converse: SKleene) -> bool {
  match converse {
    SKleene::True => false,
    _ => true
  }
}

impl<T: Ord> Bound<T>
{
  pub fn compare(&self, other: &Bound<T>) -> BoundOrdering {
    use self::Bound::*;
    match (self, other) {
      (NegativeInfinite, NegativeInfinite)
    | (PositiveInfinite, PositiveInfinite) => BoundOrdering::Unordered,
      (NegativeInfinite, _)
    | (_, PositiveInfinite) => BoundOrdering::Less,
      (PositiveInfinite, _)
    | (_, NegativeInfinite) => BoundOrdering::Greater,
      (Open(l), Open(r))
    | (Closed(l), Closed(r)) => BoundOrdering::from_values(l.cmp(r)),
      (Open(l), Closed(r))
    | (Closed(l), Open(r)) =>
        match l.cmp(r) {
          Ordering::Equal => BoundOrdering::Unordered,
          o => BoundOrdering::from_values(o)
        }
    }
  }

  /// Compares with `value` as if it were the closed bound `[value`.
  pub fn compare_value(&self, value: &T) -> BoundOrdering {
    match self {
      Bound::NegativeInfinite => BoundOrdering::Less,
      Bound::PositiveInfinite => BoundOrdering::Greater,
      Bound::Closed(v) => BoundOrdering::from_values(v.cmp(value)),
      Bound::Open(v) =>
        match v.cmp(value) {
          Ordering::Equal => BoundOrdering::Unordered,
          o => BoundOrdering::from_values(o)
        }
    }
  }

  pub fn less(&self, other: &Bound<T>) -> bool {
    strict(self.compare(other).is_lt(), self.same_infinity(other))
  }

  pub fn less_eq(&self, other: &Bound<T>) -> bool {
    loose(self.compare(other).is_gt())
  }

  pub fn greater(&self, other: &Bound<T>) -> bool {
    strict(self.compare(other).is_gt(), self.same_infinity(other))
  }

  pub fn greater_eq(&self, other: &Bound<T>) -> bool {
    loose(self.compare(other).is_lt())
  }

  pub fn less_than_value(&self, value: &T) -> bool {
    strict(self.compare_value(value).is_lt(), false)
  }

  pub fn less_eq_value(&self, value: &T) -> bool {
    loose(self.compare_value(value).is_gt())
  }

  pub fn greater_than_value(&self, value: &T) -> bool {
    strict(self.compare_value(value).is_gt(), false)
  }

  pub fn greater_eq_value(&self, value: &T) -> bool {
    loose(self.compare_value(value).is_lt())
  }

  /// Only a closed bound on `value` is equal to `value`.
  pub fn eq_value(&self, value: &T) -> bool {
    match self {
      Bound::Closed(v) => v == value,
      _ => false
    }
  }

  /// `a` if `a <= b`, `b` otherwise.
  pub fn min(a: Bound<T>, b: Bound<T>) -> Bound<T> {
    if a.less_eq(&b) { a } else { b }
  }

  /// `a` if `a >= b`, `b` otherwise.
  pub fn max(a: Bound<T>, b: Bound<T>) -> Bound<T> {
    if a.greater_eq(&b) { a } else { b }
  }

  /// Total order on bounds used as lower bounds: at the same value `[v` starts before `(v`.
  pub(crate) fn cmp_as_lower(&self, other: &Bound<T>) -> Ordering {
    match self.compare(other) {
      BoundOrdering::Less => Ordering::Less,
      BoundOrdering::Greater => Ordering::Greater,
      BoundOrdering::Equal => Ordering::Equal,
      BoundOrdering::Unordered =>
        match (self.kind(), other.kind()) {
          (BoundKind::Closed, BoundKind::Open) => Ordering::Less,
          (BoundKind::Open, BoundKind::Closed) => Ordering::Greater,
          _ => Ordering::Equal
        }
    }
  }

  /// Open against closed on the same value, the only unordered case between finite bounds.
  pub(crate) fn is_ambiguous_with(&self, other: &Bound<T>) -> bool {
    self.compare(other) == BoundOrdering::Unordered && !self.same_infinity(other)
  }
}

impl<T: PartialEq> PartialEq for Bound<T>
{
  fn eq(&self, other: &Bound<T>) -> bool {
    match (self, other) {
      (Bound::Open(l), Bound::Open(r))
    | (Bound::Closed(l), Bound::Closed(r)) => l == r,
      _ => false
    }
  }
}

#[allow(non_upper_case_globals)]
#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_tokens, assert_ser_tokens, Token};

  fn ninf() -> Bound<i32> { Bound::negative_infinite() }
  fn pinf() -> Bound<i32> { Bound::positive_infinite() }

  #[test]
  fn bound_truth_table() {
    // (id, left, right, <, <=, >, >=, ==)
    let cases = vec![
      (1, Bound::open(1), Bound::open(2), true, true, false, false, false),
      (2, Bound::open(5), Bound::open(5), false, true, false, true, true),
      (3, Bound::open(3), Bound::open(2), false, false, true, true, false),
      (4, Bound::open(1), Bound::closed(2), true, true, false, false, false),
      (5, Bound::open(5), Bound::closed(5), true, true, true, true, false),
      (6, Bound::open(3), Bound::closed(2), false, false, true, true, false),
      (7, Bound::closed(1), Bound::open(2), true, true, false, false, false),
      (8, Bound::closed(5), Bound::open(5), true, true, true, true, false),
      (9, Bound::closed(3), Bound::open(2), false, false, true, true, false),
      (10, Bound::closed(1), Bound::closed(2), true, true, false, false, false),
      (11, Bound::closed(5), Bound::closed(5), false, true, false, true, true),
      (12, Bound::closed(3), Bound::closed(2), false, false, true, true, false),
      (13, Bound::open(i32::min_value()), ninf(), false, false, true, true, false),
      (14, Bound::closed(i32::min_value()), ninf(), false, false, true, true, false),
      (15, Bound::open(i32::max_value()), pinf(), true, true, false, false, false),
      (16, Bound::closed(i32::max_value()), pinf(), true, true, false, false, false),
      (17, ninf(), Bound::open(0), true, true, false, false, false),
      (18, ninf(), Bound::closed(i32::min_value()), true, true, false, false, false),
      (19, pinf(), Bound::open(0), false, false, true, true, false),
      (20, pinf(), Bound::closed(i32::max_value()), false, false, true, true, false),
      (21, ninf(), ninf(), false, true, false, true, false),
      (22, ninf(), pinf(), true, true, false, false, false),
      (23, pinf(), ninf(), false, false, true, true, false),
      (24, pinf(), pinf(), false, true, false, true, false),
    ];

    for (id, l, r, lt, le, gt, ge, eq) in cases {
      assert_eq!(l.less(&r), lt, "test #{} of <", id);
      assert_eq!(l.less_eq(&r), le, "test #{} of <=", id);
      assert_eq!(l.greater(&r), gt, "test #{} of >", id);
      assert_eq!(l.greater_eq(&r), ge, "test #{} of >=", id);
      assert_eq!(l == r, eq, "test #{} of ==", id);
      assert_eq!(l != r, !eq, "test #{} of !=", id);
    }
  }

  #[test]
  fn bound_value_truth_table() {
    // (id, bound, value, <, <=, >, >=, ==)
    let cases = vec![
      (1, Bound::open(3), 5, true, true, false, false, false),
      (2, Bound::open(5), 5, true, true, true, true, false),
      (3, Bound::open(7), 5, false, false, true, true, false),
      (4, Bound::closed(3), 5, true, true, false, false, false),
      (5, Bound::closed(5), 5, false, true, false, true, true),
      (6, Bound::closed(7), 5, false, false, true, true, false),
      (7, ninf(), i32::min_value(), true, true, false, false, false),
      (8, ninf(), 0, true, true, false, false, false),
      (9, ninf(), i32::max_value(), true, true, false, false, false),
      (10, pinf(), i32::min_value(), false, false, true, true, false),
      (11, pinf(), 0, false, false, true, true, false),
      (12, pinf(), i32::max_value(), false, false, true, true, false),
    ];

    for (id, b, v, lt, le, gt, ge, eq) in cases {
      assert_eq!(b.less_than_value(&v), lt, "test #{} of <", id);
      assert_eq!(b.less_eq_value(&v), le, "test #{} of <=", id);
      assert_eq!(b.greater_than_value(&v), gt, "test #{} of >", id);
      assert_eq!(b.greater_eq_value(&v), ge, "test #{} of >=", id);
      assert_eq!(b.eq_value(&v), eq, "test #{} of ==", id);
    }
  }

  #[test]
  fn compare() {
    assert_eq!(Bound::closed(1).compare(&Bound::open(2)), BoundOrdering::Less);
    assert_eq!(Bound::open(2).compare(&Bound::open(2)), BoundOrdering::Equal);
    assert_eq!(Bound::open(2).compare(&Bound::closed(2)), BoundOrdering::Unordered);
    assert_eq!(ninf().compare(&ninf()), BoundOrdering::Unordered);
    assert_eq!(pinf().compare(&Bound::closed(i32::max_value())), BoundOrdering::Greater);
    assert_eq!(Bound::open(3).compare_value(&3), BoundOrdering::Unordered);
    assert_eq!(Bound::closed(3).compare_value(&3), BoundOrdering::Equal);
    assert_eq!(ninf().compare_value(&i32::min_value()), BoundOrdering::Less);
  }

  #[test]
  fn kleene_views() {
    assert!(matches!(BoundOrdering::Less.is_lt(), SKleene::True));
    assert!(matches!(BoundOrdering::Less.is_gt(), SKleene::False));
    assert!(matches!(BoundOrdering::Unordered.is_lt(), SKleene::Unknown));
    assert!(matches!(BoundOrdering::Unordered.is_gt(), SKleene::Unknown));
    assert!(matches!(BoundOrdering::Unordered.is_eq(), SKleene::Unknown));
    assert!(matches!(BoundOrdering::Equal.is_eq(), SKleene::True));
    assert!(matches!(BoundOrdering::Greater.is_eq(), SKleene::False));
  }

  #[test]
  fn min_max() {
    assert_eq!(Bound::min(Bound::closed(1), Bound::open(3)), Bound::closed(1));
    assert_eq!(Bound::max(Bound::closed(1), Bound::open(3)), Bound::open(3));
    // Ties are decided by operand order.
    assert_eq!(Bound::min(Bound::open(5), Bound::closed(5)), Bound::open(5));
    assert_eq!(Bound::min(Bound::closed(5), Bound::open(5)), Bound::closed(5));
    assert_eq!(Bound::max(Bound::open(5), Bound::closed(5)), Bound::open(5));
    assert_eq!(Bound::min(Bound::closed(0), ninf()).kind(), BoundKind::NegativeInfinite);
    assert_eq!(Bound::max(Bound::closed(0), pinf()).kind(), BoundKind::PositiveInfinite);
  }

  #[test]
  fn infinite_bounds_are_never_equal() {
    assert!(ninf() != ninf());
    assert!(pinf() != pinf());
    assert!(ninf() != pinf());
  }

  #[test]
  fn from_parts() {
    assert_eq!(Bound::from_parts(BoundKind::Open, Some(1)), Ok(Bound::open(1)));
    assert_eq!(Bound::from_parts(BoundKind::Closed, Some(1)), Ok(Bound::closed(1)));
    assert_eq!(Bound::<i32>::from_parts(BoundKind::Open, None), Err(IntervalError::MissingBoundValue));
    assert_eq!(Bound::<i32>::from_parts(BoundKind::Closed, None), Err(IntervalError::MissingBoundValue));
    assert_eq!(Bound::from_parts(BoundKind::PositiveInfinite, Some(1)), Err(IntervalError::UnexpectedBoundValue));
    let b = Bound::<i32>::from_parts(BoundKind::NegativeInfinite, None);
    assert_eq!(b.map(|b| b.kind()), Ok(BoundKind::NegativeInfinite));
  }

  #[test]
  fn value_access() {
    assert_eq!(Bound::open(4).try_value(), Ok(&4));
    assert_eq!(Bound::closed(4).value(), Some(&4));
    assert_eq!(ninf().try_value(), Err(IntervalError::InfiniteBoundValue));
    assert_eq!(pinf().value(), None);
    assert!(ninf().is_infinite() && !ninf().is_finite());
    assert!(Bound::open(0).is_open() && Bound::closed(0).is_closed());
  }

  #[test]
  fn flip() {
    assert_eq!(Bound::open(3).flip(), Bound::closed(3));
    assert_eq!(Bound::closed(3).flip(), Bound::open(3));
    assert_eq!(ninf().flip().kind(), BoundKind::NegativeInfinite);
  }

  #[test]
  fn cmp_as_lower() {
    assert_eq!(Bound::closed(5).cmp_as_lower(&Bound::open(5)), Ordering::Less);
    assert_eq!(Bound::open(5).cmp_as_lower(&Bound::closed(5)), Ordering::Greater);
    assert_eq!(ninf().cmp_as_lower(&ninf()), Ordering::Equal);
    assert_eq!(Bound::open(4).cmp_as_lower(&Bound::closed(5)), Ordering::Less);
  }

  #[test]
  fn test_ser_de_bound() {
    assert_tokens(&Bound::closed(1i32), &[
      Token::NewtypeVariant { name: "Bound", variant: "Closed" },
      Token::I32(1)
    ]);
    assert_tokens(&Bound::open(2i32), &[
      Token::NewtypeVariant { name: "Bound", variant: "Open" },
      Token::I32(2)
    ]);
    assert_ser_tokens(&ninf(), &[
      Token::UnitVariant { name: "Bound", variant: "NegativeInfinite" }
    ]);
  }
}
