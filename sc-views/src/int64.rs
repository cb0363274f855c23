// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, marker::PhantomData};

use crate::{
    host::{KeyId, ScHost, ScMapId},
    ViewError,
};

mod private {
    pub trait Sealed {}
}

/// The access mode of a view.
pub trait Access: private::Sealed {
    /// Whether views in this mode can write.
    const WRITABLE: bool;
}

/// Read-only access.
#[derive(Clone, Copy, Debug)]
pub enum Immutable {}

/// Read-write access.
#[derive(Clone, Copy, Debug)]
pub enum Mutable {}

impl private::Sealed for Immutable {}
impl private::Sealed for Mutable {}

impl Access for Immutable {
    const WRITABLE: bool = false;
}

impl Access for Mutable {
    const WRITABLE: bool = true;
}

/// A view of a 64-bit signed integer stored under one key of a host map.
///
/// A missing key reads as `0`.
pub struct ScInt64<'a, H, A> {
    host: &'a H,
    map: ScMapId,
    key: KeyId,
    _access: PhantomData<A>,
}

/// A read-only [`ScInt64`].
pub type ScImmutableInt64<'a, H> = ScInt64<'a, H, Immutable>;

/// A read-write [`ScInt64`].
pub type ScMutableInt64<'a, H> = ScInt64<'a, H, Mutable>;

impl<H, A> Clone for ScInt64<'_, H, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, A> Copy for ScInt64<'_, H, A> {}

impl<H, A: Access> fmt::Debug for ScInt64<'_, H, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScInt64")
            .field("map", &self.map)
            .field("key", &self.key)
            .field("writable", &A::WRITABLE)
            .finish()
    }
}

impl<'a, H: ScHost, A: Access> ScInt64<'a, H, A> {
    /// Creates a view of `key` in `map`.
    pub fn new(host: &'a H, map: ScMapId, key: KeyId) -> Self {
        ScInt64 {
            host,
            map,
            key,
            _access: PhantomData,
        }
    }

    /// The map this view reads from.
    pub fn map_id(&self) -> ScMapId {
        self.map
    }

    /// The key this view is bound to.
    pub fn key_id(&self) -> KeyId {
        self.key
    }

    /// Tests whether a value is stored.
    pub fn exists(&self) -> Result<bool, ViewError> {
        Ok(self.host.contains_key(self.map, self.key)?)
    }

    /// Reads the value, or `0` if none is stored.
    pub fn value(&self) -> Result<i64, ViewError> {
        match self.host.read_value_bytes(self.map, self.key)? {
            Some(bytes) => Ok(bcs::from_bytes(&bytes)?),
            None => Ok(0),
        }
    }
}

impl<'a, H: ScHost> ScInt64<'a, H, Mutable> {
    /// Stores `value`.
    pub fn set_value(&self, value: i64) -> Result<(), ViewError> {
        let bytes = bcs::to_bytes(&value)?;
        Ok(self.host.write_value_bytes(self.map, self.key, &bytes)?)
    }

    /// Removes the stored value. Reading afterwards returns `0`.
    pub fn delete(&self) -> Result<(), ViewError> {
        Ok(self.host.delete_key(self.map, self.key)?)
    }

    /// Returns a read-only view of the same value.
    pub fn as_immutable(&self) -> ScImmutableInt64<'a, H> {
        ScInt64::new(self.host, self.map, self.key)
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::{ScImmutableInt64, ScMutableInt64};
    use crate::{host::ScHost as _, memory::MemoryHost, ViewError};

    #[test_log::test]
    fn missing_value_reads_as_zero() -> Result<(), ViewError> {
        let host = MemoryHost::new_for_testing();
        let map = host.new_map()?;
        let key = host.key_id("counter")?;
        let view = ScImmutableInt64::new(&host, map, key);
        assert!(!view.exists()?);
        assert_eq!(view.value()?, 0);
        Ok(())
    }

    #[test_log::test]
    fn delete_removes_value() -> Result<(), ViewError> {
        let host = MemoryHost::new_for_testing();
        let map = host.new_map()?;
        let key = host.key_id("counter")?;
        let view = ScMutableInt64::new(&host, map, key);
        view.set_value(i64::MIN)?;
        assert!(view.exists()?);
        assert_eq!(view.as_immutable().value()?, i64::MIN);
        view.delete()?;
        assert!(!view.exists()?);
        assert_eq!(view.value()?, 0);
        Ok(())
    }

    #[test_log::test]
    fn value_is_stored_as_little_endian() -> Result<(), ViewError> {
        let host = MemoryHost::new_for_testing();
        let map = host.new_map()?;
        let key = host.key_id("counter")?;
        ScMutableInt64::new(&host, map, key).set_value(0x0102)?;
        assert_eq!(
            host.read_value_bytes(map, key)?,
            Some(vec![2, 1, 0, 0, 0, 0, 0, 0])
        );
        Ok(())
    }

    #[test_log::test]
    fn corrupt_bytes_are_a_serialization_error() -> Result<(), ViewError> {
        let host = MemoryHost::new_for_testing();
        let map = host.new_map()?;
        let key = host.key_id("counter")?;
        host.write_value_bytes(map, key, &[1, 2, 3])?;
        let view = ScImmutableInt64::new(&host, map, key);
        assert_matches!(view.value(), Err(ViewError::Serialization(_)));
        Ok(())
    }
}
