// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Runs a module's entry point, printing the characters it sends through its character import.

use anyhow::{Context as _, Result};
use clap::Parser;
use sayc_host::{RunnerConfig, SampleRunner, StdoutEmitter};
use std::path::PathBuf;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

/// Run a Wasm module that prints through a single-character host import.
#[derive(Debug, Parser)]
#[command(name = "sayc-runner", version, about)]
struct Options {
    /// The module to run, in the binary or the text format.
    module: PathBuf,

    /// The exported zero-argument function to call.
    #[arg(long, env = "SAYC_ENTRYPOINT", default_value = RunnerConfig::DEFAULT_ENTRYPOINT)]
    entrypoint: String,

    /// The module namespace of the character import.
    #[arg(long, env = "SAYC_IMPORT_MODULE", default_value = RunnerConfig::DEFAULT_IMPORT_MODULE)]
    import_module: String,

    /// The name of the character import.
    #[arg(long, env = "SAYC_IMPORT_NAME", default_value = RunnerConfig::DEFAULT_IMPORT_NAME)]
    import_name: String,

    /// Fuel available to each run. Runs are unmetered if omitted.
    #[arg(long, env = "SAYC_FUEL")]
    fuel: Option<u64>,

    /// How many times to run the entry point, each time in a fresh instance.
    #[arg(long, default_value_t = 1)]
    repeat: usize,

    /// Print the module's imports and exports instead of running it.
    #[arg(long)]
    inspect: bool,
}

impl Options {
    fn config(&self) -> RunnerConfig {
        RunnerConfig {
            entrypoint: self.entrypoint.clone(),
            import_module: self.import_module.clone(),
            import_name: self.import_name.clone(),
            fuel: self.fuel,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = Options::parse();
    let runner = SampleRunner::from_file(&options.module, options.config())
        .with_context(|| format!("Failed to load {}", options.module.display()))?;

    if options.inspect {
        print!("{}", runner.summary());
        return Ok(());
    }

    let config = runner.config();
    if !runner
        .summary()
        .imports_function(&config.import_module, &config.import_name)
    {
        tracing::warn!(
            import_module = %config.import_module,
            import_name = %config.import_name,
            "Module does not import the character function, it will print nothing"
        );
    }

    for iteration in 0..options.repeat {
        let outcome = match runner.run(StdoutEmitter::stdout()) {
            Ok(outcome) => outcome,
            Err(failure) => {
                failure
                    .emitter
                    .finish()
                    .context("Failed to write module output")?;
                return Err(failure.error).with_context(|| format!("Run {iteration} failed"));
            }
        };
        outcome
            .emitter
            .finish()
            .context("Failed to write module output")?;

        tracing::info!(
            iteration,
            emitted = outcome.report.emitted,
            returned = ?outcome.report.returned,
            fuel_consumed = ?outcome.report.fuel_consumed,
            "Module finished"
        );
    }

    Ok(())
}
