// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

//! Per-case context stacks behind an explicit store handle. Each enum case keys its own stack of
//! values; callers push to the back or the front and read the whole stack. Context is
//! best-effort state: storage failures are logged and degrade to no-ops and empty reads rather
//! than propagating.

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

use bd_enum::IntBackedEnum;
use parking_lot::Mutex;
use std::collections::HashMap;

//
// ContextStorage
//

/// Pluggable backing store for context stacks. Stacks are read and written whole; the store does
/// not interpret them.
pub trait ContextStorage<V>: Send + Sync {
  fn get_stack(&self, key: &str) -> anyhow::Result<Vec<V>>;
  fn set_stack(&self, key: &str, values: Vec<V>) -> anyhow::Result<()>;
}

//
// MemoryStorage
//

/// In-memory storage, suitable as the default backend and for tests.
pub struct MemoryStorage<V> {
  stacks: Mutex<HashMap<String, Vec<V>>>,
}

impl<V> Default for MemoryStorage<V> {
  fn default() -> Self {
    Self {
      stacks: Mutex::new(HashMap::new()),
    }
  }
}

impl<V: Clone + Send> ContextStorage<V> for MemoryStorage<V> {
  fn get_stack(&self, key: &str) -> anyhow::Result<Vec<V>> {
    Ok(self.stacks.lock().get(key).cloned().unwrap_or_default())
  }

  fn set_stack(&self, key: &str, values: Vec<V>) -> anyhow::Result<()> {
    self.stacks.lock().insert(key.to_string(), values);
    Ok(())
  }
}

//
// ContextStore
//

/// Explicit handle to a context store, keyed by enum case.
///
/// Stacks are keyed by the case's backed value, so two cases from different enum types that
/// share a backed value share a stack; keep one store per enum type if that matters.
pub struct ContextStore<V> {
  storage: Box<dyn ContextStorage<V> + Send + Sync>,
}

impl<V: Clone + Send + 'static> Default for ContextStore<V> {
  fn default() -> Self {
    Self::in_memory()
  }
}

impl<V: Clone> ContextStore<V> {
  #[must_use]
  pub fn new(storage: Box<dyn ContextStorage<V> + Send + Sync>) -> Self {
    Self { storage }
  }

  /// A store backed by [`MemoryStorage`].
  #[must_use]
  pub fn in_memory() -> Self
  where
    V: Send + 'static,
  {
    Self::new(Box::new(MemoryStorage::default()))
  }

  /// Appends `value` to the back of `case`'s stack.
  pub fn push<E: IntBackedEnum>(&self, case: E, value: V) {
    self.update(case, |stack| stack.push(value));
  }

  /// Prepends `value` to the front of `case`'s stack.
  pub fn unshift<E: IntBackedEnum>(&self, case: E, value: V) {
    self.update(case, |stack| stack.insert(0, value));
  }

  /// The current stack for `case`; empty when nothing has been pushed or the storage read
  /// failed.
  #[must_use]
  pub fn get<E: IntBackedEnum>(&self, case: E) -> Vec<V> {
    let key = Self::key(case);
    match self.storage.get_stack(&key) {
      Ok(stack) => stack,
      Err(e) => {
        log::warn!("failed to read context stack for key {key:?}: {e:?}");
        Vec::new()
      },
    }
  }

  fn update<E: IntBackedEnum>(&self, case: E, mutate: impl FnOnce(&mut Vec<V>)) {
    let key = Self::key(case);

    let mut stack = match self.storage.get_stack(&key) {
      Ok(stack) => stack,
      Err(e) => {
        log::warn!("failed to read context stack for key {key:?}: {e:?}");
        return;
      },
    };

    mutate(&mut stack);

    if let Err(e) = self.storage.set_stack(&key, stack) {
      log::warn!("failed to write context stack for key {key:?}: {e:?}");
    }
  }

  fn key<E: IntBackedEnum>(case: E) -> String {
    case.value().to_string()
  }
}
