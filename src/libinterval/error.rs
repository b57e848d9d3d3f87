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

//! Errors raised when a bound or an interval contract is violated.

use thiserror::Error;

/// Category of an [`IntervalError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
  /// A constructor received arguments that cannot describe a bound or an interval.
  InvalidArgument,
  /// An accessor was called on a value that does not carry what was asked for.
  InvalidOperation,
}

/// Error type of every fallible operation of this crate.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntervalError {
  /// An open or closed bound was built without a value.
  #[error("open and closed bounds require a value")]
  MissingBoundValue,
  /// An infinite bound was built with a value.
  #[error("infinite bounds cannot carry a value")]
  UnexpectedBoundValue,
  /// The lower bound of an interval is positive infinity.
  #[error("the lower bound of an interval cannot be positive infinity")]
  LowerBoundPositiveInfinite,
  /// The upper bound of an interval is negative infinity.
  #[error("the upper bound of an interval cannot be negative infinity")]
  UpperBoundNegativeInfinite,
  /// The lower bound value is greater than the upper bound value.
  #[error("the lower bound of an interval is greater than its upper bound")]
  InvertedBounds,
  /// The value of an infinite bound was requested.
  #[error("an infinite bound has no value")]
  InfiniteBoundValue,
  /// A bound of the empty interval was requested.
  #[error("the empty interval has no bounds")]
  EmptyIntervalBounds,
}

impl IntervalError
{
  pub fn kind(&self) -> ErrorKind {
    use self::IntervalError::*;
    match self {
      MissingBoundValue
    | UnexpectedBoundValue
    | LowerBoundPositiveInfinite
    | UpperBoundNegativeInfinite
    | InvertedBounds => ErrorKind::InvalidArgument,
      InfiniteBoundValue
    | EmptyIntervalBounds => ErrorKind::InvalidOperation,
    }
  }
}
