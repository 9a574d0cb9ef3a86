// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#[cfg(test)]
#[path = "./dynamic_test.rs"]
mod tests;

use crate::descriptor::{Case, EnumSet};
use crate::{Error, Result};

//
// Value
//

/// What a host persistence layer hands the casting hooks: the raw stored scalar on read, the
/// in-memory domain value on write. `Text` exists because a stored column can hold the wrong
/// scalar kind; the hooks reject it rather than coercing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
  Null,
  Integer(i64),
  Text(String),
  Cases(Vec<Case>),
}

impl Value {
  const fn kind(&self) -> &'static str {
    match self {
      Self::Null => "null",
      Self::Integer(_) => "an integer",
      Self::Text(_) => "text",
      Self::Cases(_) => "a case collection",
    }
  }
}

//
// Codec
//

/// Bitmask codec bound to one validated enum set.
///
/// Immutable; construct one instance per (set, nullability) pair at configuration time, usually
/// through [`crate::Registry`], and reuse it for every value. Both hooks are total: they either
/// return a fully formed result or fail before producing any output.
#[derive(Clone, Debug)]
pub struct Codec {
  set: EnumSet,
  nullable: bool,
}

impl Codec {
  #[must_use]
  pub const fn new(set: EnumSet) -> Self {
    Self {
      set,
      nullable: false,
    }
  }

  #[must_use]
  pub const fn nullable(set: EnumSet) -> Self {
    Self {
      set,
      nullable: true,
    }
  }

  #[must_use]
  pub fn set(&self) -> &EnumSet {
    &self.set
  }

  /// Write hook: domain value in, stored scalar out.
  ///
  /// `Cases` ORs the member values (empty collection encodes to 0), `Null` maps to a null
  /// bitmask only under nullable configuration, and any scalar is the wrong shape where a
  /// collection is required.
  pub fn encode(&self, value: &Value) -> Result<Option<u64>> {
    match value {
      Value::Null if self.nullable => Ok(None),
      Value::Null => Err(Error::NullNotAllowed),
      Value::Cases(cases) => {
        let mut mask = 0;
        for case in cases {
          if !self.set.contains(case) {
            return Err(Error::ForeignEnumerator {
              set: self.set.name().to_string(),
              case: case.name().to_string(),
            });
          }
          mask |= case.value();
        }
        Ok(Some(mask))
      },
      other => Err(Error::InvalidInput {
        expected: "a collection of enum cases",
        got: other.kind(),
      }),
    }
  }

  /// Read hook: stored scalar in, domain value out.
  ///
  /// Under non-nullable configuration an absent stored value reads as the empty set. Matching
  /// cases come back in the set's declaration order.
  pub fn decode(&self, value: &Value) -> Result<Option<Vec<Case>>> {
    match value {
      Value::Null if self.nullable => Ok(None),
      Value::Null => Ok(Some(Vec::new())),
      Value::Integer(raw) => {
        let mask = u64::try_from(*raw).map_err(|_| Error::InvalidInput {
          expected: "a non-negative integer bitmask",
          got: "a negative integer",
        })?;
        Ok(Some(self.matching(mask)))
      },
      other => Err(Error::InvalidInput {
        expected: "an integer bitmask",
        got: other.kind(),
      }),
    }
  }

  fn matching(&self, mask: u64) -> Vec<Case> {
    let decoded: Vec<Case> = self
      .set
      .cases()
      .iter()
      .filter(|case| mask & case.value() == case.value())
      .cloned()
      .collect();

    let residual = decoded
      .iter()
      .fold(mask, |rest, case| rest & !case.value());
    if residual != 0 {
      log::warn!(
        "bitmask {mask:#x} for set '{}' carries bits {residual:#x} not covered by any case",
        self.set.name()
      );
    }

    decoded
  }
}
