// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

// (Re-)generated by the schema tool from the `inccounter` schema.

pub const IDX_PARAM_COUNTER: usize = 0;
pub const IDX_PARAM_NUM_REPEATS: usize = 1;
pub const IDX_RESULT_COUNTER: usize = 2;
pub const IDX_STATE_COUNTER: usize = 3;
pub const IDX_STATE_NUM_REPEATS: usize = 4;

pub const KEY_MAP_LEN: usize = 5;

pub const KEY_MAP: [&str; KEY_MAP_LEN] = [
    PARAM_COUNTER,
    PARAM_NUM_REPEATS,
    RESULT_COUNTER,
    STATE_COUNTER,
    STATE_NUM_REPEATS,
];

pub const PARAM_COUNTER: &str = "counter";
pub const PARAM_NUM_REPEATS: &str = "numRepeats";

pub const RESULT_COUNTER: &str = "counter";

pub const STATE_COUNTER: &str = "counter";
pub const STATE_NUM_REPEATS: &str = "numRepeats";
