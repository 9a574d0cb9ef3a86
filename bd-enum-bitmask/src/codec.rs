// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./codec_test.rs"]
mod tests;

use crate::{Error, Result};
use bd_enum::IntBackedEnum;
use std::marker::PhantomData;

//
// BitmaskCodec
//

/// Stateless bitmask codec for a statically typed enum set.
///
/// Construct one instance per (enum set, nullability) pair and reuse it; instances are `Copy`,
/// hold no state, and are safe to share across threads. The type system already guarantees every
/// input case belongs to `E`, so the only runtime failure left is null under non-nullable
/// configuration.
#[derive(Clone, Copy, Debug)]
pub struct BitmaskCodec<E> {
  nullable: bool,
  _type: PhantomData<E>,
}

impl<E: IntBackedEnum> Default for BitmaskCodec<E> {
  fn default() -> Self {
    Self::new()
  }
}

impl<E: IntBackedEnum> BitmaskCodec<E> {
  /// A non-nullable codec: an absent stored value reads as the empty set, and writing null is an
  /// error.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      nullable: false,
      _type: PhantomData,
    }
  }

  /// A nullable codec: null round-trips as null on both hooks.
  #[must_use]
  pub const fn nullable() -> Self {
    Self {
      nullable: true,
      _type: PhantomData,
    }
  }

  /// Bitwise OR of the backed values. Order-independent; the empty collection encodes to 0.
  #[must_use]
  pub fn encode(&self, cases: &[E]) -> u64 {
    cases.iter().fold(0, |mask, case| mask | case.value())
  }

  /// Nullable-aware write hook: the host hands the in-memory collection (or its absence), this
  /// returns the scalar to persist.
  pub fn encode_opt(&self, cases: Option<&[E]>) -> Result<Option<u64>> {
    match cases {
      Some(cases) => Ok(Some(self.encode(cases))),
      None if self.nullable => Ok(None),
      None => Err(Error::NullNotAllowed),
    }
  }

  /// Cases whose bit pattern is fully present in `mask`, in declaration order.
  ///
  /// A case whose bits are covered by a wider combination decodes as present even if it was
  /// never encoded. Callers that need exact round trips must give every case a distinct bit.
  #[must_use]
  pub fn decode(&self, mask: u64) -> Vec<E> {
    let decoded: Vec<E> = E::cases()
      .iter()
      .copied()
      .filter(|case| mask & case.value() == case.value())
      .collect();

    let residual = decoded.iter().fold(mask, |rest, case| rest & !case.value());
    if residual != 0 {
      log::warn!("bitmask {mask:#x} carries bits {residual:#x} not covered by any case");
    }

    decoded
  }

  /// Nullable-aware read hook: the host hands the raw stored scalar (or its absence), this
  /// returns the domain collection. Under non-nullable configuration an absent value reads as
  /// the empty set.
  #[must_use]
  pub fn decode_opt(&self, mask: Option<u64>) -> Option<Vec<E>> {
    match mask {
      Some(mask) => Some(self.decode(mask)),
      None if self.nullable => None,
      None => Some(Vec::new()),
    }
  }
}
