// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! A host for modules that print through a single character import.
//!
//! [`SampleRunner`] compiles a module once, binds its `env.sayc` import (or whichever import
//! [`RunnerConfig`] names) to a [`CharacterEmitter`](sayc_guest::CharacterEmitter), and calls
//! its `main` export in a fresh instance on every run.

mod config;
mod emitters;
mod error;
mod runner;
mod summary;

pub use self::{
    config::RunnerConfig,
    emitters::{CallCounter, StdoutEmitter, WriteEmitter},
    error::{RunFailure, RunnerError},
    runner::{RunOutcome, RunReport, SampleRunner},
    summary::{Export, Import, ItemKind, ModuleSummary},
};
