// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

/*! Bindings and functions of the increment counter contract.

The `keys`, `params`, `results` and `state` modules are generated from the contract schema.
The functions in `contract` only talk to the host through them. */

pub mod contract;
pub mod keys;
pub mod params;
pub mod results;
pub mod state;

use sc_views::{KeyTable, ScHost, ScMapId, ScMapRef, ViewError};
use thiserror::Error;
use tracing::debug;

use self::{
    params::{ImmutableInitParams, ImmutableRepeatManyParams},
    results::MutableGetCounterResults,
    state::{ImmutableIncCounterState, MutableIncCounterState},
};

/// The functions and views exported by the contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Init,
    Increment,
    RepeatMany,
    GetCounter,
}

impl Function {
    /// Every exported function, in schema order.
    pub const ALL: [Function; 4] = [
        Function::Init,
        Function::Increment,
        Function::RepeatMany,
        Function::GetCounter,
    ];

    /// Looks up a function by its schema name.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|function| function.name() == name)
            .ok_or_else(|| Error::UnknownFunction(name.to_string()))
    }

    /// The schema name of the function.
    pub fn name(&self) -> &'static str {
        match self {
            Function::Init => "init",
            Function::Increment => "increment",
            Function::RepeatMany => "repeatMany",
            Function::GetCounter => "getCounter",
        }
    }

    /// Whether this is a view, which may not modify the state.
    pub fn is_view(&self) -> bool {
        matches!(self, Function::GetCounter)
    }
}

/// What a function asks the host to do once it returns.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Functions of this contract to be called again in a later request.
    pub posted: Vec<Function>,
}

/// The maps a function call operates on.
pub struct ScFuncContext<'a, H> {
    host: &'a H,
    keys: &'a KeyTable,
    state: ScMapId,
    params: ScMapId,
    results: ScMapId,
}

impl<'a, H: ScHost> ScFuncContext<'a, H> {
    /// Creates a context over the given maps of `host`, addressed through `keys`.
    pub fn new(
        host: &'a H,
        keys: &'a KeyTable,
        state: ScMapId,
        params: ScMapId,
        results: ScMapId,
    ) -> Self {
        ScFuncContext {
            host,
            keys,
            state,
            params,
            results,
        }
    }

    /// Resolves the contract's key names on `host`.
    pub fn key_table(host: &H) -> Result<KeyTable, ViewError> {
        KeyTable::resolve(host, &keys::KEY_MAP)
    }

    /// The contract state.
    pub fn state(&self) -> ScMapRef<'a, H> {
        ScMapRef::new(self.host, self.keys, self.state)
    }

    /// The parameters of the call.
    pub fn params(&self) -> ScMapRef<'a, H> {
        ScMapRef::new(self.host, self.keys, self.params)
    }

    /// The results of the call, filled in by views.
    pub fn results(&self) -> ScMapRef<'a, H> {
        ScMapRef::new(self.host, self.keys, self.results)
    }
}

/// The accessors available to `init`.
pub struct InitContext<'a, H> {
    pub params: ImmutableInitParams<'a, H>,
    pub state: MutableIncCounterState<'a, H>,
}

/// The accessors available to `increment`.
pub struct IncrementContext<'a, H> {
    pub state: MutableIncCounterState<'a, H>,
}

/// The accessors available to `repeatMany`.
pub struct RepeatManyContext<'a, H> {
    pub params: ImmutableRepeatManyParams<'a, H>,
    pub state: MutableIncCounterState<'a, H>,
}

/// The accessors available to the `getCounter` view. The state is read-only.
pub struct GetCounterContext<'a, H> {
    pub results: MutableGetCounterResults<'a, H>,
    pub state: ImmutableIncCounterState<'a, H>,
}

/// Runs `function` against the maps of `ctx`.
pub fn call<H: ScHost>(
    ctx: &ScFuncContext<'_, H>,
    function: Function,
) -> Result<ExecutionOutcome, Error> {
    debug!(function = function.name(), "calling");
    let outcome = match function {
        Function::Init => {
            let f = InitContext {
                params: ImmutableInitParams { map: ctx.params() },
                state: MutableIncCounterState { map: ctx.state() },
            };
            contract::func_init(&f)?
        }
        Function::Increment => {
            let f = IncrementContext {
                state: MutableIncCounterState { map: ctx.state() },
            };
            contract::func_increment(&f)?
        }
        Function::RepeatMany => {
            let f = RepeatManyContext {
                params: ImmutableRepeatManyParams { map: ctx.params() },
                state: MutableIncCounterState { map: ctx.state() },
            };
            contract::func_repeat_many(&f)?
        }
        Function::GetCounter => {
            let f = GetCounterContext {
                results: MutableGetCounterResults { map: ctx.results() },
                state: ImmutableIncCounterState { map: ctx.state() },
            };
            contract::view_get_counter(&f)?
        }
    };
    debug!(function = function.name(), posted = outcome.posted.len(), "done");
    Ok(outcome)
}

/// An error that can occur during the contract execution.
#[derive(Debug, Error)]
pub enum Error {
    /// No function with this name is exported.
    #[error("unknown function {0:?}")]
    UnknownFunction(String),

    /// Failed to access a map of the host.
    #[error(transparent)]
    View(#[from] ViewError),
}
