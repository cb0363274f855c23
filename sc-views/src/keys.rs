// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use tracing::trace;

use crate::{
    host::{KeyId, ScHost},
    ViewError,
};

/// The key ids of a generated key name table, in the same order as the names.
///
/// Generated code declares the names as a constant array and addresses each field by its
/// position in that array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyTable {
    ids: Vec<KeyId>,
}

impl KeyTable {
    /// Resolves every name of `names` through the host.
    pub fn resolve<H: ScHost>(host: &H, names: &[&str]) -> Result<Self, ViewError> {
        let mut ids = Vec::with_capacity(names.len());
        for name in names {
            let id = host.key_id(name)?;
            trace!(name = *name, %id, "resolved key");
            ids.push(id);
        }
        Ok(KeyTable { ids })
    }

    /// Returns the key id at position `index`.
    pub fn get(&self, index: usize) -> Result<KeyId, ViewError> {
        self.ids
            .get(index)
            .copied()
            .ok_or(ViewError::UnknownKeyIndex(index))
    }

    /// The number of keys.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the table has no keys.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::KeyTable;
    use crate::{memory::MemoryHost, ViewError};

    #[test_log::test]
    fn resolution_keeps_name_order() -> Result<(), ViewError> {
        let host = MemoryHost::new_for_testing();
        let table = KeyTable::resolve(&host, &["b", "a", "b"])?;
        assert_eq!(table.len(), 3);
        assert_ne!(table.get(0)?, table.get(1)?);
        assert_eq!(table.get(0)?, table.get(2)?);
        Ok(())
    }

    #[test_log::test]
    fn index_out_of_table() -> Result<(), ViewError> {
        let host = MemoryHost::new_for_testing();
        let table = KeyTable::resolve(&host, &["only"])?;
        assert_matches!(table.get(1), Err(ViewError::UnknownKeyIndex(1)));
        Ok(())
    }
}
