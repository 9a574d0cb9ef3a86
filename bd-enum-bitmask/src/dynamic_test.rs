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

use crate::{Codec, EnumSet, EnumSetDescriptor, Error, Value};
use assert_matches::assert_matches;
use pretty_assertions::assert_eq;

fn permissions() -> EnumSet {
  EnumSetDescriptor::new(
    "permissions",
    &[("READ", 1), ("WRITE", 2), ("DELETE", 4), ("ADMIN", 8)],
  )
  .validate()
  .unwrap()
}

fn cases(set: &EnumSet, names: &[&str]) -> Value {
  Value::Cases(names.iter().map(|name| set.case(name).unwrap()).collect())
}

#[test]
fn write_hook_encodes_the_concrete_scenario() {
  let set = permissions();
  let codec = Codec::new(set.clone());

  assert_eq!(Ok(Some(3)), codec.encode(&cases(&set, &["READ", "WRITE"])));
  assert_eq!(Ok(Some(0)), codec.encode(&cases(&set, &[])));
}

#[test]
fn read_hook_decodes_in_declaration_order() {
  let codec = Codec::new(permissions());

  let decoded = codec.decode(&Value::Integer(7)).unwrap().unwrap();
  assert_eq!(
    vec!["READ", "WRITE", "DELETE"],
    decoded.iter().map(crate::Case::name).collect::<Vec<_>>()
  );

  assert_eq!(Ok(Some(vec![])), codec.decode(&Value::Integer(0)));
}

#[test]
fn foreign_case_handles_are_rejected() {
  let other = EnumSetDescriptor::new("roles", &[("READ", 1)])
    .validate()
    .unwrap();
  let codec = Codec::new(permissions());

  // Same case name and value, minted from a different set.
  assert_matches!(
    codec.encode(&cases(&other, &["READ"])),
    Err(Error::ForeignEnumerator { set, case }) if set == "permissions" && case == "READ"
  );
}

#[test]
fn scalars_are_the_wrong_shape_for_the_write_hook() {
  let codec = Codec::new(permissions());

  assert_matches!(
    codec.encode(&Value::Integer(3)),
    Err(Error::InvalidInput { got: "an integer", .. })
  );
  assert_matches!(
    codec.encode(&Value::Text("READ".to_string())),
    Err(Error::InvalidInput { got: "text", .. })
  );
}

#[test]
fn non_integers_are_the_wrong_shape_for_the_read_hook() {
  let set = permissions();
  let codec = Codec::new(set.clone());

  assert_matches!(
    codec.decode(&Value::Text("3".to_string())),
    Err(Error::InvalidInput { got: "text", .. })
  );
  assert_matches!(
    codec.decode(&cases(&set, &["READ"])),
    Err(Error::InvalidInput { got: "a case collection", .. })
  );
  assert_matches!(
    codec.decode(&Value::Integer(-3)),
    Err(Error::InvalidInput { got: "a negative integer", .. })
  );
}

#[test]
fn nullable_codec_round_trips_null() {
  let codec = Codec::nullable(permissions());

  assert_eq!(Ok(None), codec.encode(&Value::Null));
  assert_eq!(Ok(None), codec.decode(&Value::Null));
}

#[test]
fn non_nullable_codec_rejects_null_writes_and_reads_absent_as_empty() {
  let codec = Codec::new(permissions());

  assert_matches!(codec.encode(&Value::Null), Err(Error::NullNotAllowed));
  assert_eq!(Ok(Some(vec![])), codec.decode(&Value::Null));
}

#[test]
fn overlapping_bits_imply_the_narrower_case() {
  // Pins the documented ambiguity: decoding B's mask also yields A.
  let set = EnumSetDescriptor::new("overlap", &[("A", 1), ("B", 3)])
    .validate()
    .unwrap();
  let codec = Codec::new(set.clone());

  assert_eq!(Ok(Some(3)), codec.encode(&cases(&set, &["B"])));

  let decoded = codec.decode(&Value::Integer(3)).unwrap().unwrap();
  assert_eq!(
    vec!["A", "B"],
    decoded.iter().map(crate::Case::name).collect::<Vec<_>>()
  );
}

#[test]
fn round_trip_through_both_hooks() {
  let set = permissions();
  let codec = Codec::new(set.clone());

  let stored = codec
    .encode(&cases(&set, &["ADMIN", "READ"]))
    .unwrap()
    .unwrap();
  #[allow(clippy::cast_possible_wrap)]
  let decoded = codec
    .decode(&Value::Integer(stored as i64))
    .unwrap()
    .unwrap();

  assert_eq!(
    vec!["READ", "ADMIN"],
    decoded.iter().map(crate::Case::name).collect::<Vec<_>>()
  );
}
