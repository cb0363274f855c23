// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

// (Re-)generated by the schema tool from the `inccounter` schema.

use sc_views::{Immutable, ScHost, ScImmutableInt64, ScMapRef, ViewError};

use crate::keys::{IDX_PARAM_COUNTER, IDX_PARAM_NUM_REPEATS};

pub struct ImmutableInitParams<'a, H> {
    pub map: ScMapRef<'a, H>,
}

impl<'a, H: ScHost> ImmutableInitParams<'a, H> {
    pub fn counter(&self) -> Result<ScImmutableInt64<'a, H>, ViewError> {
        self.map.int64::<Immutable>(IDX_PARAM_COUNTER)
    }
}

pub struct ImmutableRepeatManyParams<'a, H> {
    pub map: ScMapRef<'a, H>,
}

impl<'a, H: ScHost> ImmutableRepeatManyParams<'a, H> {
    pub fn num_repeats(&self) -> Result<ScImmutableInt64<'a, H>, ViewError> {
        self.map.int64::<Immutable>(IDX_PARAM_NUM_REPEATS)
    }
}
