// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Character-by-character output for a minimal Wasm guest.
//!
//! The guest walks a character sequence and hands every character to a
//! [`CharacterEmitter`]. Inside the compiled module the emitter is the host-provided `sayc`
//! import (`HostEmitter`); natively, any closure or buffer can stand in for it, which is
//! how the walker is tested.

#![deny(missing_docs)]

mod emitter;
mod walker;

#[cfg(with_host_imports)]
pub use self::emitter::HostEmitter;
pub use self::{
    emitter::CharacterEmitter,
    walker::{say_something, say_terminated, say_until_sentinel, UnterminatedSequence},
};
use std::ffi::CStr;

/// The sentence printed by the module's `main` entry point.
pub const GREETING: &CStr = c"Hello World (from WASM)\n";
