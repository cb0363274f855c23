// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::{
    host::{ScHost, ScMapId},
    int64::{Access, ScInt64},
    keys::KeyTable,
    ViewError,
};

/// A handle to a host map, together with the key table used to address its fields.
///
/// The handle borrows both the host and the key table and owns nothing. It is `Copy`, so
/// generated accessors can be created and passed around freely.
pub struct ScMapRef<'a, H> {
    host: &'a H,
    keys: &'a KeyTable,
    id: ScMapId,
}

impl<H> Clone for ScMapRef<'_, H> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H> Copy for ScMapRef<'_, H> {}

impl<H> fmt::Debug for ScMapRef<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScMapRef").field("id", &self.id).finish()
    }
}

impl<'a, H: ScHost> ScMapRef<'a, H> {
    /// Creates a handle to the map `id` of `host`.
    pub fn new(host: &'a H, keys: &'a KeyTable, id: ScMapId) -> Self {
        ScMapRef { host, keys, id }
    }

    /// The id of the map.
    pub fn id(&self) -> ScMapId {
        self.id
    }

    /// Returns the 64-bit integer view of the field at position `index` of the key table.
    ///
    /// This is the field resolution shared by all generated accessors, whatever their
    /// access mode.
    pub fn int64<A: Access>(&self, index: usize) -> Result<ScInt64<'a, H, A>, ViewError> {
        let key = self.keys.get(index)?;
        Ok(ScInt64::new(self.host, self.id, key))
    }
}
