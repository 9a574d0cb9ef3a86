// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

//! Conversion between collections of enum cases and integer bitmasks, meant to sit behind a
//! persistence layer's attribute casting hooks (one integer column per attribute).
//!
//! Two surfaces:
//! - [`BitmaskCodec`] for enum sets known at compile time (`bd_enum::IntBackedEnum`).
//! - [`Codec`] plus [`Registry`] for enum sets named by external configuration, where membership
//!   and input shape have to be checked at runtime.

#![deny(
  clippy::expect_used,
  clippy::panic,
  clippy::todo,
  clippy::unimplemented,
  clippy::unreachable,
  clippy::unwrap_used
)]

pub mod codec;
pub mod descriptor;
pub mod dynamic;

pub use codec::BitmaskCodec;
pub use descriptor::{Case, CaseDescriptor, CaseValue, EnumSet, EnumSetDescriptor, Registry};
pub use dynamic::{Codec, Value};

//
// Error
//

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
  /// The named descriptor does not resolve to a closed set of named integer constants.
  /// Configuration-time only; never raised per value.
  #[error("'{0}' is not a closed integer-backed enum set: {1}")]
  InvalidEnumerator(String, String),

  /// An encode input contained a case handle minted from a different enum set.
  #[error("case '{case}' does not belong to enum set '{set}'")]
  ForeignEnumerator { set: String, case: String },

  /// The hook was handed a value of the wrong shape.
  #[error("invalid input: expected {expected}, got {got}")]
  InvalidInput {
    expected: &'static str,
    got: &'static str,
  },

  /// Null reached a write hook running under non-nullable configuration.
  #[error("null is not allowed for a non-nullable bitmask attribute")]
  NullNotAllowed,
}

pub type Result<T> = std::result::Result<T, Error>;
