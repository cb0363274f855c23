// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Debug, Display};

use serde::{Deserialize, Serialize};

use crate::ViewError;

/// The id of a map owned by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScMapId(pub u32);

impl Display for ScMapId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "map#{}", self.0)
    }
}

/// The id the host assigned to a key name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct KeyId(pub u32);

impl Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "key#{}", self.0)
    }
}

/// The error type of a host.
pub trait HostError:
    std::error::Error + From<bcs::Error> + Debug + Send + Sync + 'static
{
    /// The name of the backend.
    const BACKEND: &'static str;
}

impl<E: HostError> From<E> for ViewError {
    fn from(error: E) -> Self {
        Self::HostError {
            backend: E::BACKEND,
            error: Box::new(error),
        }
    }
}

/// The functions a contract may call on its host to access maps.
///
/// All operations take `&self`: the host owns the maps and is responsible for
/// serializing access to them.
pub trait ScHost {
    /// The error type of the host.
    type Error: HostError;

    /// Returns the id of the key with the given name. The same name always yields the
    /// same id.
    fn key_id(&self, name: &str) -> Result<KeyId, Self::Error>;

    /// Creates a new empty map.
    fn new_map(&self) -> Result<ScMapId, Self::Error>;

    /// Reads the bytes stored under `key` in `map`, if any.
    fn read_value_bytes(&self, map: ScMapId, key: KeyId) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Tests whether `key` is present in `map`.
    fn contains_key(&self, map: ScMapId, key: KeyId) -> Result<bool, Self::Error>;

    /// Stores `value` under `key` in `map`.
    fn write_value_bytes(
        &self,
        map: ScMapId,
        key: KeyId,
        value: &[u8],
    ) -> Result<(), Self::Error>;

    /// Removes `key` from `map`. Removing an absent key is not an error.
    fn delete_key(&self, map: ScMapId, key: KeyId) -> Result<(), Self::Error>;
}
