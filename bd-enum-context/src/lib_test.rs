// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

#![allow(
  clippy::expect_used,
  clippy::panic,
  clippy::todo,
  clippy::unimplemented,
  clippy::unreachable,
  clippy::unwrap_used
)]

use crate::{ContextStorage, ContextStore};
use pretty_assertions::assert_eq;

bd_enum::int_backed_enum! {
  enum Channel {
    Audit = 1,
    Debug = 2,
  }
}

#[test]
fn push_appends_in_order() {
  let store = ContextStore::in_memory();

  store.push(Channel::Audit, "first");
  store.push(Channel::Audit, "second");

  assert_eq!(vec!["first", "second"], store.get(Channel::Audit));
}

#[test]
fn unshift_prepends() {
  let store = ContextStore::in_memory();

  store.push(Channel::Audit, "second");
  store.unshift(Channel::Audit, "first");

  assert_eq!(vec!["first", "second"], store.get(Channel::Audit));
}

#[test]
fn cases_keep_separate_stacks() {
  let store = ContextStore::in_memory();

  store.push(Channel::Audit, "audit");
  store.push(Channel::Debug, "debug");

  assert_eq!(vec!["audit"], store.get(Channel::Audit));
  assert_eq!(vec!["debug"], store.get(Channel::Debug));
}

#[test]
fn untouched_case_reads_empty() {
  let store = ContextStore::<String>::in_memory();

  assert!(store.get(Channel::Debug).is_empty());
}

//
// FailingStorage
//

struct FailingStorage;

impl ContextStorage<String> for FailingStorage {
  fn get_stack(&self, _key: &str) -> anyhow::Result<Vec<String>> {
    anyhow::bail!("storage offline")
  }

  fn set_stack(&self, _key: &str, _values: Vec<String>) -> anyhow::Result<()> {
    anyhow::bail!("storage offline")
  }
}

#[test]
fn storage_failures_degrade_to_empty_reads_and_noop_writes() {
  let store = ContextStore::new(Box::new(FailingStorage));

  store.push(Channel::Audit, "lost".to_string());
  assert!(store.get(Channel::Audit).is_empty());
}
