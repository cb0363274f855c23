// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use assert_matches::assert_matches;
use sc_views::{
    memory::MemoryHost, Immutable, KeyTable, Mutable, ScHost as _, ScMapRef, ViewError,
};

const KEY_MAP: [&str; 2] = ["alpha", "beta"];

#[test_log::test]
fn fields_resolve_through_the_key_table() -> Result<(), ViewError> {
    let host = MemoryHost::new_for_testing();
    let keys = KeyTable::resolve(&host, &KEY_MAP)?;
    let map = ScMapRef::new(&host, &keys, host.new_map()?);

    map.int64::<Mutable>(0)?.set_value(11)?;
    map.int64::<Mutable>(1)?.set_value(-22)?;

    assert_eq!(map.int64::<Immutable>(0)?.value()?, 11);
    assert_eq!(map.int64::<Immutable>(1)?.value()?, -22);
    assert_eq!(map.int64::<Immutable>(0)?.key_id(), host.key_id("alpha")?);
    Ok(())
}

#[test_log::test]
fn handles_to_different_maps_do_not_interfere() -> Result<(), ViewError> {
    let host = MemoryHost::new_for_testing();
    let keys = KeyTable::resolve(&host, &KEY_MAP)?;
    let first = ScMapRef::new(&host, &keys, host.new_map()?);
    let second = ScMapRef::new(&host, &keys, host.new_map()?);
    assert_ne!(first.id(), second.id());
    assert_eq!(first.int64::<Immutable>(0)?.map_id(), first.id());

    first.int64::<Mutable>(0)?.set_value(5)?;
    assert_eq!(second.int64::<Immutable>(0)?.value()?, 0);
    assert!(!second.int64::<Immutable>(0)?.exists()?);
    Ok(())
}

#[test_log::test]
fn field_index_outside_the_table() -> Result<(), ViewError> {
    let host = MemoryHost::new_for_testing();
    let keys = KeyTable::resolve(&host, &KEY_MAP)?;
    let map = ScMapRef::new(&host, &keys, host.new_map()?);
    assert_matches!(
        map.int64::<Immutable>(KEY_MAP.len()),
        Err(ViewError::UnknownKeyIndex(2))
    );
    Ok(())
}

#[test_log::test]
fn host_errors_name_the_backend() -> Result<(), ViewError> {
    let host = MemoryHost::new_for_testing();
    let keys = KeyTable::resolve(&host, &KEY_MAP)?;
    let missing = ScMapRef::new(&host, &keys, sc_views::ScMapId(99));
    assert_matches!(
        missing.int64::<Immutable>(0)?.value(),
        Err(ViewError::HostError { backend: "memory", .. })
    );
    Ok(())
}
