// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! How a module is linked and invoked.

/// Names and limits used when running a module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunnerConfig {
    /// The exported zero-argument function to call.
    pub entrypoint: String,
    /// The module namespace of the character import.
    pub import_module: String,
    /// The name of the character import inside `import_module`.
    pub import_name: String,
    /// Optional fuel budget for each run. `None` disables metering.
    pub fuel: Option<u64>,
}

impl RunnerConfig {
    /// The export called when nothing else is configured.
    pub const DEFAULT_ENTRYPOINT: &'static str = "main";
    /// The import namespace C toolchains place undefined functions in.
    pub const DEFAULT_IMPORT_MODULE: &'static str = "env";
    /// The character import of the greeting module.
    pub const DEFAULT_IMPORT_NAME: &'static str = "sayc";

    /// Returns this configuration with a fuel budget for every run.
    pub fn with_fuel(mut self, fuel: u64) -> Self {
        self.fuel = Some(fuel);
        self
    }

    /// Returns this configuration calling `entrypoint` instead.
    pub fn with_entrypoint(mut self, entrypoint: impl Into<String>) -> Self {
        self.entrypoint = entrypoint.into();
        self
    }

    /// Returns this configuration linking the character sink as `module.name`.
    pub fn with_import(mut self, module: impl Into<String>, name: impl Into<String>) -> Self {
        self.import_module = module.into();
        self.import_name = name.into();
        self
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            entrypoint: Self::DEFAULT_ENTRYPOINT.to_owned(),
            import_module: Self::DEFAULT_IMPORT_MODULE.to_owned(),
            import_name: Self::DEFAULT_IMPORT_NAME.to_owned(),
            fuel: None,
        }
    }
}
