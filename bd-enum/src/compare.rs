// shared-core - bitdrift's common client/server libraries
// Copyright Bitdrift, Inc. All rights reserved.
//
// Use of this source code is governed by a source available license that can be found in the
// LICENSE file or at:
// https://polyformproject.org/wp-content/uploads/2020/06/PolyForm-Shield-1.0.0.txt

//! Comparisons of one case against an explicit list of cases, by backed value. The list is an
//! argument rather than implicitly `E::cases()` so callers can compare within any ordered
//! subset; pass `E::cases()` to compare against the whole set.

#[cfg(test)]
#[path = "./compare_test.rs"]
mod tests;

use crate::IntBackedEnum;
use itertools::Itertools as _;

/// Cases from `cases` whose backed value equals `case`'s, in input order. Includes `case` itself
/// when it appears in the list.
#[must_use]
pub fn eq<E: IntBackedEnum>(case: E, cases: &[E]) -> Vec<E> {
  matching(cases, |value| value == case.value())
}

/// Cases from `cases` whose backed value is strictly greater than `case`'s, in input order.
#[must_use]
pub fn gt<E: IntBackedEnum>(case: E, cases: &[E]) -> Vec<E> {
  matching(cases, |value| value > case.value())
}

/// Cases from `cases` whose backed value is greater than or equal to `case`'s, in input order.
#[must_use]
pub fn gte<E: IntBackedEnum>(case: E, cases: &[E]) -> Vec<E> {
  matching(cases, |value| value >= case.value())
}

/// Cases from `cases` whose backed value is strictly less than `case`'s, in input order.
#[must_use]
pub fn lt<E: IntBackedEnum>(case: E, cases: &[E]) -> Vec<E> {
  matching(cases, |value| value < case.value())
}

/// Cases from `cases` whose backed value is less than or equal to `case`'s, in input order.
#[must_use]
pub fn lte<E: IntBackedEnum>(case: E, cases: &[E]) -> Vec<E> {
  matching(cases, |value| value <= case.value())
}

fn matching<E: IntBackedEnum>(cases: &[E], predicate: impl Fn(u64) -> bool) -> Vec<E> {
  cases
    .iter()
    .copied()
    .filter(|case| predicate(case.value()))
    .collect_vec()
}
