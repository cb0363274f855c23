// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

// (Re-)generated by the schema tool from the `inccounter` schema.

use sc_views::{Mutable, ScHost, ScMapRef, ScMutableInt64, ViewError};

use crate::keys::IDX_RESULT_COUNTER;

pub struct MutableGetCounterResults<'a, H> {
    pub map: ScMapRef<'a, H>,
}

impl<'a, H: ScHost> MutableGetCounterResults<'a, H> {
    pub fn counter(&self) -> Result<ScMutableInt64<'a, H>, ViewError> {
        self.map.int64::<Mutable>(IDX_RESULT_COUNTER)
    }
}
