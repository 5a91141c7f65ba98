// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! The greeting module: exports `main` and prints through the host's `env.sayc` import.
//!
//! Build it with `cargo build --release --target wasm32-unknown-unknown --bin hello`.

#![cfg_attr(target_arch = "wasm32", no_main)]

// The toolchain exports a symbol named `main` in C's `main(argc, argv)` form, forwarding to this
// function. Hosts call it as `main(0, NULL)`.
#[cfg(target_arch = "wasm32")]
#[export_name = "main"]
pub extern "C" fn entrypoint() -> i32 {
    sayc_guest::say_terminated(sayc_guest::GREETING, &mut sayc_guest::HostEmitter);
    0
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use std::io::Write as _;

    let mut output = Vec::new();
    sayc_guest::say_terminated(sayc_guest::GREETING, &mut output);
    std::io::stdout().write_all(&output)
}
