// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Implements [`crate::host::ScHost`] in memory.

use std::{
    collections::BTreeMap,
    sync::{Arc, RwLock},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::host::{HostError, KeyId, ScHost, ScMapId};

/// The default maximal size of a stored value.
const DEFAULT_MAX_VALUE_SIZE: usize = 64 * 1024;

/// The initial configuration of a [`MemoryHost`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct MemoryHostConfig {
    /// The maximal size in bytes of a value written to a map.
    pub max_value_size: usize,
}

impl Default for MemoryHostConfig {
    fn default() -> Self {
        MemoryHostConfig {
            max_value_size: DEFAULT_MAX_VALUE_SIZE,
        }
    }
}

/// The values of one map.
type MemoryMap = BTreeMap<KeyId, Vec<u8>>;

/// The maps and the interned key names.
#[derive(Default)]
struct MemoryHostState {
    maps: BTreeMap<ScMapId, MemoryMap>,
    key_ids: BTreeMap<String, KeyId>,
    next_key_id: u32,
    next_map_id: u32,
}

/// A host whose maps live in memory.
///
/// Clones share the same maps.
#[derive(Clone, Default)]
pub struct MemoryHost {
    state: Arc<RwLock<MemoryHostState>>,
    config: MemoryHostConfig,
}

/// The error type for [`MemoryHost`].
#[derive(Error, Debug)]
pub enum MemoryHostError {
    /// The map does not exist.
    #[error("the map {0} does not exist")]
    MapNotFound(ScMapId),

    /// The value is larger than the configured limit.
    #[error("the value has {size} bytes, more than the limit of {max}")]
    ValueTooLarge {
        /// The size of the rejected value.
        size: usize,
        /// The configured limit.
        max: usize,
    },

    /// No map or key id is left to assign.
    #[error("the host has no {0} ids left")]
    IdsExhausted(&'static str),

    /// Serialization error with BCS.
    #[error(transparent)]
    BcsError(#[from] bcs::Error),
}

impl HostError for MemoryHostError {
    const BACKEND: &'static str = "memory";
}

impl MemoryHost {
    /// Creates an empty host.
    pub fn new(config: MemoryHostConfig) -> Self {
        MemoryHost {
            state: Arc::default(),
            config,
        }
    }

    /// Creates an empty host with the default configuration.
    pub fn new_for_testing() -> Self {
        Self::new(MemoryHostConfig::default())
    }

    /// The configuration of the host.
    pub fn config(&self) -> &MemoryHostConfig {
        &self.config
    }
}

impl ScHost for MemoryHost {
    type Error = MemoryHostError;

    fn key_id(&self, name: &str) -> Result<KeyId, MemoryHostError> {
        let mut state = self
            .state
            .write()
            .expect("MemoryHost lock should not be poisoned");
        if let Some(id) = state.key_ids.get(name) {
            return Ok(*id);
        }
        let id = KeyId(state.next_key_id);
        state.next_key_id = id
            .0
            .checked_add(1)
            .ok_or(MemoryHostError::IdsExhausted("key"))?;
        state.key_ids.insert(name.to_string(), id);
        Ok(id)
    }

    fn new_map(&self) -> Result<ScMapId, MemoryHostError> {
        let mut state = self
            .state
            .write()
            .expect("MemoryHost lock should not be poisoned");
        let id = ScMapId(state.next_map_id);
        state.next_map_id = id
            .0
            .checked_add(1)
            .ok_or(MemoryHostError::IdsExhausted("map"))?;
        state.maps.insert(id, MemoryMap::new());
        debug!(%id, "created map");
        Ok(id)
    }

    fn read_value_bytes(
        &self,
        map: ScMapId,
        key: KeyId,
    ) -> Result<Option<Vec<u8>>, MemoryHostError> {
        let state = self
            .state
            .read()
            .expect("MemoryHost lock should not be poisoned");
        let values = state
            .maps
            .get(&map)
            .ok_or(MemoryHostError::MapNotFound(map))?;
        Ok(values.get(&key).cloned())
    }

    fn contains_key(&self, map: ScMapId, key: KeyId) -> Result<bool, MemoryHostError> {
        let state = self
            .state
            .read()
            .expect("MemoryHost lock should not be poisoned");
        let values = state
            .maps
            .get(&map)
            .ok_or(MemoryHostError::MapNotFound(map))?;
        Ok(values.contains_key(&key))
    }

    fn write_value_bytes(
        &self,
        map: ScMapId,
        key: KeyId,
        value: &[u8],
    ) -> Result<(), MemoryHostError> {
        if value.len() > self.config.max_value_size {
            return Err(MemoryHostError::ValueTooLarge {
                size: value.len(),
                max: self.config.max_value_size,
            });
        }
        let mut state = self
            .state
            .write()
            .expect("MemoryHost lock should not be poisoned");
        let values = state
            .maps
            .get_mut(&map)
            .ok_or(MemoryHostError::MapNotFound(map))?;
        values.insert(key, value.to_vec());
        Ok(())
    }

    fn delete_key(&self, map: ScMapId, key: KeyId) -> Result<(), MemoryHostError> {
        let mut state = self
            .state
            .write()
            .expect("MemoryHost lock should not be poisoned");
        let values = state
            .maps
            .get_mut(&map)
            .ok_or(MemoryHostError::MapNotFound(map))?;
        values.remove(&key);
        Ok(())
    }
}
