// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

use std::{
    error::Error as StdError,
    fmt::{self, Debug, Display, Formatter},
    io,
    path::PathBuf,
};
use thiserror::Error;

/// Errors that can occur while loading or running a module.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// The module file could not be read.
    #[error("Failed to read Wasm module from {path:?}")]
    Read {
        /// The file that was requested.
        path: PathBuf,
        /// Why reading it failed.
        #[source]
        source: io::Error,
    },

    /// The engine rejected its configuration.
    #[error("Failed to configure the Wasm engine")]
    Engine(#[source] wasmtime::Error),

    /// The bytes are not a valid Wasm module.
    #[error("Failed to compile Wasm module")]
    Compile(#[source] wasmtime::Error),

    /// The character import could not be defined.
    #[error("Failed to link the character import")]
    Link(#[source] wasmtime::Error),

    /// The module could not be instantiated, usually because of an unresolved import.
    #[error("Failed to instantiate Wasm module")]
    Instantiate(#[source] wasmtime::Error),

    /// The configured entry point is not an exported function.
    #[error("Wasm module has no exported function named {0:?}")]
    MissingEntrypoint(String),

    /// The configured entry point has parameters other than C's `(argc, argv)`.
    #[error(
        "Entry point {name:?} expects {count} parameters, \
         but must take none or C's `(argc, argv)`"
    )]
    EntrypointTakesParameters {
        /// The name of the exported function.
        name: String,
        /// How many parameters it declares.
        count: usize,
    },

    /// The module used up its fuel budget.
    #[error("Wasm module ran out of fuel")]
    OutOfFuel,

    /// The module trapped while running.
    #[error("Wasm module trapped while running")]
    Trap(#[source] wasmtime::Error),
}

/// A run that failed after the module was handed its emitter.
///
/// The emitter is given back so that characters received before the failure aren't lost.
pub struct RunFailure<E> {
    /// What went wrong.
    pub error: RunnerError,
    /// The emitter, with everything it received before the failure.
    pub emitter: E,
    /// How many times the character import was called before the failure.
    pub emitted: usize,
}

impl<E> From<RunFailure<E>> for RunnerError {
    fn from(failure: RunFailure<E>) -> Self {
        failure.error
    }
}

impl<E> Debug for RunFailure<E> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RunFailure")
            .field("error", &self.error)
            .field("emitted", &self.emitted)
            .finish_non_exhaustive()
    }
}

impl<E> Display for RunFailure<E> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{} after {} characters were emitted",
            self.error, self.emitted
        )
    }
}

impl<E> StdError for RunFailure<E> {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.error)
    }
}
