// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use sc_views::ScHost;
use tracing::debug;

use crate::{
    Error, ExecutionOutcome, Function, GetCounterContext, IncrementContext, InitContext,
    RepeatManyContext,
};

pub fn func_init<H: ScHost>(f: &InitContext<'_, H>) -> Result<ExecutionOutcome, Error> {
    let param = f.params.counter()?;
    if param.exists()? {
        f.state.counter()?.set_value(param.value()?)?;
    }
    Ok(ExecutionOutcome::default())
}

pub fn func_increment<H: ScHost>(f: &IncrementContext<'_, H>) -> Result<ExecutionOutcome, Error> {
    let counter = f.state.counter()?;
    counter.set_value(counter.value()?.wrapping_add(1))?;
    Ok(ExecutionOutcome::default())
}

pub fn func_repeat_many<H: ScHost>(
    f: &RepeatManyContext<'_, H>,
) -> Result<ExecutionOutcome, Error> {
    let counter = f.state.counter()?;
    counter.set_value(counter.value()?.wrapping_add(1))?;

    let state_repeats = f.state.num_repeats()?;
    let mut repeats = f.params.num_repeats()?.value()?;
    if repeats == 0 {
        repeats = state_repeats.value()?;
    }
    if repeats <= 0 {
        return Ok(ExecutionOutcome::default());
    }
    state_repeats.set_value(repeats - 1)?;
    debug!(remaining = repeats - 1, "posting repeatMany again");
    Ok(ExecutionOutcome {
        posted: vec![Function::RepeatMany],
    })
}

pub fn view_get_counter<H: ScHost>(
    f: &GetCounterContext<'_, H>,
) -> Result<ExecutionOutcome, Error> {
    f.results.counter()?.set_value(f.state.counter()?.value()?)?;
    Ok(ExecutionOutcome::default())
}
