// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

//! The dynamic configuration boundary: enum sets named and populated by external configuration
//! rather than a Rust type. Descriptors deserialize from config, validate once into immutable
//! [`EnumSet`]s, and a [`Registry`] resolves the set identifier an attribute is bound to.

#[cfg(test)]
#[path = "./descriptor_test.rs"]
mod tests;

use crate::dynamic::Codec;
use crate::{Error, Result};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

//
// CaseValue
//

/// The backing value of one case as it appears in configuration. String backing is
/// representable so that a misconfigured set fails validation with a precise error instead of
/// failing deserialization.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(untagged)]
pub enum CaseValue {
  Integer(u64),
  String(String),
}

//
// CaseDescriptor
//

#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct CaseDescriptor {
  pub name: String,
  pub value: CaseValue,
}

//
// EnumSetDescriptor
//

/// An enum set as named by external configuration, prior to validation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct EnumSetDescriptor {
  pub name: String,
  pub cases: Vec<CaseDescriptor>,
}

impl EnumSetDescriptor {
  /// Convenience constructor for integer-backed sets declared in code.
  #[must_use]
  pub fn new(name: &str, cases: &[(&str, u64)]) -> Self {
    Self {
      name: name.to_string(),
      cases: cases
        .iter()
        .map(|(name, value)| CaseDescriptor {
          name: (*name).to_string(),
          value: CaseValue::Integer(*value),
        })
        .collect(),
    }
  }

  /// Checks that the descriptor resolves to a closed set of named integer constants: at least
  /// one case, every case integer-backed, no duplicate case names. Pure; run once per codec
  /// configuration, not per value.
  ///
  /// Value overlap between cases is deliberately not rejected; overlapping sets decode
  /// ambiguously (a narrower case is implied by a wider one) but remain legal.
  pub fn validate(self) -> Result<EnumSet> {
    if self.cases.is_empty() {
      return Err(Error::InvalidEnumerator(
        self.name,
        "set has no cases".to_string(),
      ));
    }

    let set_name: Arc<str> = self.name.into();
    let mut seen = HashSet::new();
    let mut cases = Vec::with_capacity(self.cases.len());

    for case in self.cases {
      let CaseValue::Integer(value) = case.value else {
        return Err(Error::InvalidEnumerator(
          set_name.to_string(),
          format!("case '{}' is not integer-backed", case.name),
        ));
      };

      if !seen.insert(case.name.clone()) {
        return Err(Error::InvalidEnumerator(
          set_name.to_string(),
          format!("duplicate case '{}'", case.name),
        ));
      }

      cases.push(Case {
        set: set_name.clone(),
        name: case.name.into(),
        value,
      });
    }

    Ok(EnumSet {
      name: set_name,
      cases,
    })
  }
}

//
// Case
//

/// Handle to one validated case. Carries its owning set's identifier so a codec can reject
/// handles minted from a different set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case {
  set: Arc<str>,
  name: Arc<str>,
  value: u64,
}

impl Case {
  #[must_use]
  pub fn set(&self) -> &str {
    &self.set
  }

  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  #[must_use]
  pub const fn value(&self) -> u64 {
    self.value
  }
}

//
// EnumSet
//

/// A validated, immutable enum set. Cases keep the descriptor's declaration order.
#[derive(Clone, Debug)]
pub struct EnumSet {
  name: Arc<str>,
  cases: Vec<Case>,
}

impl EnumSet {
  #[must_use]
  pub fn name(&self) -> &str {
    &self.name
  }

  #[must_use]
  pub fn cases(&self) -> &[Case] {
    &self.cases
  }

  /// Handle to the named case, or `None` if the set has no such case.
  #[must_use]
  pub fn case(&self, name: &str) -> Option<Case> {
    self.cases.iter().find(|case| &*case.name == name).cloned()
  }

  /// Whether `case` is one of this set's cases. Identity is (set identifier, case name, value):
  /// a handle from a same-named set with a different value is still foreign.
  #[must_use]
  pub(crate) fn contains(&self, case: &Case) -> bool {
    case.set == self.name && self.cases.iter().any(|own| own == case)
  }
}

//
// Registry
//

/// Validated enum sets addressable by name. This is the codec's configuration surface: the host
/// names the set an attribute binds to once, at registration, and resolves a codec from it.
#[derive(Debug, Default)]
pub struct Registry {
  sets: HashMap<String, EnumSet>,
}

impl Registry {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Validates and registers a descriptor. A set registered under an already-used name replaces
  /// the previous one.
  pub fn register(&mut self, descriptor: EnumSetDescriptor) -> Result<()> {
    let set = descriptor.validate()?;
    self.sets.insert(set.name().to_string(), set);
    Ok(())
  }

  pub fn get(&self, name: &str) -> Result<&EnumSet> {
    self.sets.get(name).ok_or_else(|| {
      Error::InvalidEnumerator(name.to_string(), "no such set is registered".to_string())
    })
  }

  /// A non-nullable codec bound to the named set.
  pub fn codec(&self, name: &str) -> Result<Codec> {
    Ok(Codec::new(self.get(name)?.clone()))
  }

  /// A nullable codec bound to the named set.
  pub fn nullable_codec(&self, name: &str) -> Result<Codec> {
    Ok(Codec::nullable(self.get(name)?.clone()))
  }
}
