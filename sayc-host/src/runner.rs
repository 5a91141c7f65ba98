// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Compiling a module once and running its entry point with a character sink.

use crate::{ModuleSummary, RunFailure, RunnerConfig, RunnerError};
use sayc_guest::CharacterEmitter;
use std::{
    fmt::{self, Debug, Formatter},
    path::Path,
};
use tracing::{debug, instrument, trace};
use wasmtime::{Caller, Config, Engine, Linker, Module, Store, Trap, Val, ValType};

/// A compiled module ready to be run any number of times.
///
/// Every run gets its own store and instance, so nothing a run does is visible to the next one.
pub struct SampleRunner {
    engine: Engine,
    module: Module,
    config: RunnerConfig,
}

/// What happened during one run.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RunReport {
    /// How many times the character import was called.
    pub emitted: usize,
    /// The first `i32` result of the entry point, if it returns one.
    pub returned: Option<i32>,
    /// Fuel used by the run, when metering is enabled.
    pub fuel_consumed: Option<u64>,
}

/// A finished run, handing the emitter back to the caller.
#[derive(Debug)]
pub struct RunOutcome<E> {
    /// What happened during the run.
    pub report: RunReport,
    /// The emitter, with everything it received.
    pub emitter: E,
}

/// The data attached to each run's store.
struct HostState<E> {
    emitter: E,
    emitted: usize,
}

impl SampleRunner {
    /// Compiles a module from `bytes`, in either the binary or the text format.
    pub fn from_bytes(bytes: impl AsRef<[u8]>, config: RunnerConfig) -> Result<Self, RunnerError> {
        let engine = Self::engine(&config)?;
        let module = Module::new(&engine, bytes).map_err(RunnerError::Compile)?;

        Ok(SampleRunner {
            engine,
            module,
            config,
        })
    }

    /// Reads and compiles the module stored at `path`.
    pub fn from_file(path: impl AsRef<Path>, config: RunnerConfig) -> Result<Self, RunnerError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| RunnerError::Read {
            path: path.to_owned(),
            source,
        })?;

        debug!(path = %path.display(), size = bytes.len(), "Loaded Wasm module");
        Self::from_bytes(bytes, config)
    }

    fn engine(config: &RunnerConfig) -> Result<Engine, RunnerError> {
        let mut engine_config = Config::new();
        engine_config.consume_fuel(config.fuel.is_some());

        Engine::new(&engine_config).map_err(RunnerError::Engine)
    }

    /// Returns the configuration used for every run.
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Describes the imports and exports of the compiled module.
    pub fn summary(&self) -> ModuleSummary {
        ModuleSummary::new(&self.module)
    }

    /// Instantiates the module with the character import bound to `emitter` and calls the entry
    /// point.
    ///
    /// The entry point either takes no parameters or has the shape of C's `main(argc, argv)`,
    /// which Wasm toolchains give to an exported `main`. The latter is called as
    /// `main(0, NULL)`. On failure the emitter is handed back inside the [`RunFailure`].
    #[instrument(skip_all, fields(entrypoint = %self.config.entrypoint))]
    pub fn run<E>(&self, emitter: E) -> Result<RunOutcome<E>, RunFailure<E>>
    where
        E: CharacterEmitter + Send + 'static,
    {
        let mut store = Store::new(&self.engine, HostState { emitter, emitted: 0 });
        let result = self.execute(&mut store);
        let HostState { emitter, emitted } = store.into_data();

        match result {
            Ok((returned, fuel_consumed)) => {
                let report = RunReport {
                    emitted,
                    returned,
                    fuel_consumed,
                };

                debug!(?report, "Run finished");
                Ok(RunOutcome { report, emitter })
            }
            Err(error) => {
                debug!(%error, emitted, "Run failed");
                Err(RunFailure {
                    error,
                    emitter,
                    emitted,
                })
            }
        }
    }

    /// Links, instantiates and calls the entry point inside `store`, returning the entry point's
    /// first `i32` result and the fuel that was used.
    fn execute<E>(
        &self,
        store: &mut Store<HostState<E>>,
    ) -> Result<(Option<i32>, Option<u64>), RunnerError>
    where
        E: CharacterEmitter + Send + 'static,
    {
        if let Some(fuel) = self.config.fuel {
            store.set_fuel(fuel).map_err(RunnerError::Engine)?;
        }

        let mut linker = Linker::new(&self.engine);
        linker
            .func_wrap(
                &self.config.import_module,
                &self.config.import_name,
                |mut caller: Caller<'_, HostState<E>>, character: i32| {
                    // Only the low byte is meaningful, C sign extends `char` arguments.
                    let character = character as u8;
                    trace!(character, "Emitting");
                    let state = caller.data_mut();
                    state.emitter.emit(character);
                    state.emitted += 1;
                },
            )
            .map_err(RunnerError::Link)?;

        let instance = linker
            .instantiate(&mut *store, &self.module)
            .map_err(|error| Self::classify_trap(error, RunnerError::Instantiate))?;

        let entrypoint = &self.config.entrypoint;
        let function = instance
            .get_func(&mut *store, entrypoint)
            .ok_or_else(|| RunnerError::MissingEntrypoint(entrypoint.clone()))?;
        let signature = function.ty(&*store);

        let parameters = signature.params().collect::<Vec<_>>();
        let arguments = match parameters.as_slice() {
            [] => vec![],
            [ValType::I32, ValType::I32] => {
                debug!("Calling entry point as C's `main(argc, argv)`");
                vec![Val::I32(0), Val::I32(0)]
            }
            _ => {
                return Err(RunnerError::EntrypointTakesParameters {
                    name: entrypoint.clone(),
                    count: parameters.len(),
                })
            }
        };

        let mut results = vec![Val::I32(0); signature.results().len()];
        function
            .call(&mut *store, &arguments, &mut results)
            .map_err(|error| Self::classify_trap(error, RunnerError::Trap))?;

        let fuel_consumed = match self.config.fuel {
            Some(budget) => {
                let remaining = store.get_fuel().map_err(RunnerError::Engine)?;
                Some(budget.saturating_sub(remaining))
            }
            None => None,
        };

        Ok((results.first().and_then(Val::i32), fuel_consumed))
    }

    /// Maps a failure to [`RunnerError::OutOfFuel`] if it was caused by fuel exhaustion.
    fn classify_trap(
        error: wasmtime::Error,
        otherwise: impl FnOnce(wasmtime::Error) -> RunnerError,
    ) -> RunnerError {
        match error.downcast_ref::<Trap>() {
            Some(Trap::OutOfFuel) => RunnerError::OutOfFuel,
            _ => otherwise(error),
        }
    }
}

impl Debug for SampleRunner {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SampleRunner")
            .field("module", &self.module.name())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
