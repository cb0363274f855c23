// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

// (Re-)generated by the schema tool from the `inccounter` schema.

use sc_views::{Immutable, Mutable, ScHost, ScImmutableInt64, ScMapRef, ScMutableInt64, ViewError};

use crate::keys::{IDX_STATE_COUNTER, IDX_STATE_NUM_REPEATS};

/// Read-only access to the contract state.
pub struct ImmutableIncCounterState<'a, H> {
    pub map: ScMapRef<'a, H>,
}

impl<'a, H: ScHost> ImmutableIncCounterState<'a, H> {
    pub fn counter(&self) -> Result<ScImmutableInt64<'a, H>, ViewError> {
        self.map.int64::<Immutable>(IDX_STATE_COUNTER)
    }

    pub fn num_repeats(&self) -> Result<ScImmutableInt64<'a, H>, ViewError> {
        self.map.int64::<Immutable>(IDX_STATE_NUM_REPEATS)
    }
}

/// Read-write access to the contract state.
pub struct MutableIncCounterState<'a, H> {
    pub map: ScMapRef<'a, H>,
}

impl<'a, H: ScHost> MutableIncCounterState<'a, H> {
    pub fn as_immutable(&self) -> ImmutableIncCounterState<'a, H> {
        ImmutableIncCounterState { map: self.map }
    }

    pub fn counter(&self) -> Result<ScMutableInt64<'a, H>, ViewError> {
        self.map.int64::<Mutable>(IDX_STATE_COUNTER)
    }

    pub fn num_repeats(&self) -> Result<ScMutableInt64<'a, H>, ViewError> {
        self.map.int64::<Mutable>(IDX_STATE_NUM_REPEATS)
    }
}
