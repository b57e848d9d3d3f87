// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Properties of the value types intervals are built over.

use num_integer::Integer;
use num_traits::CheckedAdd;
use std::time::{Duration, Instant, SystemTime};

/// Smallest value covering both operands.
pub trait Hull<RHS = Self>
{
  type Output;
  fn hull(&self, rhs: &RHS) -> Self::Output;
}

/// The value covering the whole domain.
pub trait Whole
{
  fn whole() -> Self;
}

/// Values that can be the boundaries of an interval.
///
/// The only thing an interval needs to know about its domain, apart from the total order, is whether it is discrete. In a discrete domain two closed intervals `[a, b]` and `[c, d]` with `c` the successor of `b` are adjacent (`[1, 3]` and `[4, 6]` over integers) and get merged. The default implementation describes a continuous domain, so a custom type only has to write `impl Successor for MyType {}` to be usable.
pub trait Successor : Ord + Clone
{
  /// The value immediately following `self`, or `None` if the domain is continuous or `self` is the last value.
  fn successor(&self) -> Option<Self> {
    None
  }
}

fn next_integer<T: Integer + CheckedAdd>(x: &T) -> Option<T> {
  x.checked_add(&T::one())
}

macro_rules! discrete_successor_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Successor for $t
    {
      fn successor(&self) -> Option<$t> {
        next_integer(self)
      }
    }
  )*}
}

macro_rules! continuous_successor_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Successor for $t {}
  )*}
}

discrete_successor_impl!(i8,i16,i32,i64,i128,isize,u8,u16,u32,u64,u128,usize);
continuous_successor_impl!(char,bool,String,Duration,Instant,SystemTime);

impl<'a> Successor for &'a str {}
