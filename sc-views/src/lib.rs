// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! This crate maps the fields of a smart contract onto the key-value maps owned by its
//! host. The central notion is a typed view such as [`int64::ScInt64`], which is bound to
//! one key of one map and reads or writes it through the host.
//!
//! The crate provides:
//! * An abstraction of the host: [`host::ScHost`] gives access to maps identified by an
//!   [`host::ScMapId`] and keys identified by a [`host::KeyId`].
//! * The [`keys::KeyTable`], which resolves the key names generated from a schema into key
//!   ids once, so that generated accessors can address fields by a constant index.
//! * Views parameterized by an access mode ([`int64::Immutable`] or [`int64::Mutable`]).
//! * An in-memory host, [`memory::MemoryHost`], for tests and embedders.
//!
//! Views hold no state of their own: every read and write goes to the host.

#![deny(missing_docs)]

/// The host abstraction: map ids, key ids and the [`host::ScHost`] trait.
pub mod host;

/// Resolution of generated key names into key ids.
pub mod keys;

/// The map handle given to generated accessors.
pub mod map;

/// The 64-bit integer view.
pub mod int64;

/// An in-memory implementation of [`host::ScHost`].
pub mod memory;

use thiserror::Error;

pub use crate::{
    host::{HostError, KeyId, ScHost, ScMapId},
    int64::{Immutable, Mutable, ScImmutableInt64, ScInt64, ScMutableInt64},
    keys::KeyTable,
    map::ScMapRef,
};

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum ViewError {
    /// An error occurred in the host.
    #[error("host error in {backend}: {error}")]
    HostError {
        /// The name of the host backend that produced the error.
        backend: &'static str,
        /// The inner error.
        #[source]
        error: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The stored bytes could not be decoded as the expected type.
    #[error("failed to serialize or deserialize a value")]
    Serialization(#[from] bcs::Error),

    /// A generated field index points outside of the key table.
    #[error("field index {0} is not in the key table")]
    UnknownKeyIndex(usize),
}
