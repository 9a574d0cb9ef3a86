// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#![deny(
  clippy::expect_used,
  clippy::panic,
  clippy::todo,
  clippy::unimplemented,
  clippy::unreachable,
  clippy::unwrap_used
)]

#[cfg(test)]
#[path = "./lib_test.rs"]
mod tests;

pub mod compare;

use std::fmt::Debug;

//
// IntBackedEnum
//

/// A closed set of named cases, each backed by a non-negative integer value.
///
/// `cases()` returns every case in declaration order. That order is load bearing: bitmask
/// decoding and the comparison helpers both iterate it. Implement the trait through
/// `int_backed_enum!` rather than by hand so the case list and the per-case match arms cannot
/// drift apart.
pub trait IntBackedEnum: Copy + PartialEq + Debug + 'static {
  /// Every case of the set, in declaration order.
  fn cases() -> &'static [Self];

  /// The backed integer value of this case.
  fn value(self) -> u64;

  /// The stable identifier of this case.
  fn name(self) -> &'static str;
}

/// Defines a fieldless enum together with its `IntBackedEnum` impl.
///
/// Backed values are not required to be distinct or single-bit; a set whose values overlap is
/// legal but decodes ambiguously (a case whose bits are covered by a wider combination reads as
/// present).
#[macro_export]
macro_rules! int_backed_enum {
  (
    $(#[$meta:meta])*
    $vis:vis enum $name:ident {
      $($case:ident = $value:expr),+ $(,)?
    }
  ) => {
    $(#[$meta])*
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    $vis enum $name {
      $($case,)+
    }

    impl $crate::IntBackedEnum for $name {
      fn cases() -> &'static [Self] {
        &[$(Self::$case,)+]
      }

      fn value(self) -> u64 {
        match self {
          $(Self::$case => $value,)+
        }
      }

      fn name(self) -> &'static str {
        match self {
          $(Self::$case => stringify!($case),)+
        }
      }
    }
  };
}
