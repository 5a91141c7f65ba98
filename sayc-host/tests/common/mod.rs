// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

#![allow(dead_code)]

//! Hand-written modules with the same shape as the C greeting compiled to Wasm.

use std::fmt::Write as _;

/// Where the string literal is placed in linear memory.
const TEXT_OFFSET: u32 = 1024;

/// What `main` gives back to the host.
#[derive(Clone, Copy, Debug)]
pub enum MainReturns {
    /// `int main` returning zero, discarding the character count.
    Zero,
    /// The result of `say_something`.
    Count,
    /// Nothing at all.
    Nothing,
    /// Takes C's `(argc, argv)` and returns `argc`, the shape toolchains give an exported `main`.
    ArgumentCount,
}

/// Builds a module that stores `text` NUL-terminated in its memory and whose `main` walks it,
/// calling `env.sayc` for each character.
pub fn greeting_module(text: &[u8], returns: MainReturns) -> String {
    custom_greeting_module(text, returns, "env", "sayc", "main")
}

/// Same as [`greeting_module`] with the import and export renamed.
pub fn custom_greeting_module(
    text: &[u8],
    returns: MainReturns,
    import_module: &str,
    import_name: &str,
    entrypoint: &str,
) -> String {
    let (signature, body) = match returns {
        MainReturns::Zero => (
            "(result i32)",
            format!("(drop (call $say_something (i32.const {TEXT_OFFSET}))) (i32.const 0)"),
        ),
        MainReturns::Count => (
            "(result i32)",
            format!("(call $say_something (i32.const {TEXT_OFFSET}))"),
        ),
        MainReturns::Nothing => (
            "",
            format!("(drop (call $say_something (i32.const {TEXT_OFFSET})))"),
        ),
        MainReturns::ArgumentCount => (
            "(param $argc i32) (param $argv i32) (result i32)",
            format!("(drop (call $say_something (i32.const {TEXT_OFFSET}))) (local.get $argc)"),
        ),
    };

    format!(
        r#"
        (module
          (import "{import_module}" "{import_name}" (func $sayc (param i32)))
          (memory (export "memory") 1)
          (data (i32.const {TEXT_OFFSET}) "{data}")

          (func $say_something (param $text i32) (result i32)
            (local $cursor i32)
            (local $character i32)
            (local.set $cursor (local.get $text))
            (block $done
              (loop $next
                (local.set $character (i32.load8_s (local.get $cursor)))
                (br_if $done (i32.eqz (local.get $character)))
                (call $sayc (local.get $character))
                (local.set $cursor (i32.add (local.get $cursor) (i32.const 1)))
                (br $next)))
            (i32.sub (local.get $cursor) (local.get $text)))

          (func (export "{entrypoint}") {signature}
            {body}))
        "#,
        data = escape(text),
    )
}

/// A module whose `main` never returns.
pub fn spinning_module() -> &'static str {
    r#"
    (module
      (import "env" "sayc" (func $sayc (param i32)))
      (func (export "main")
        (loop $forever
          (call $sayc (i32.const 46))
          (br $forever))))
    "#
}

/// A module whose `main` prints one character and then traps.
pub fn trapping_module() -> &'static str {
    r#"
    (module
      (import "env" "sayc" (func $sayc (param i32)))
      (func (export "main")
        (call $sayc (i32.const 33))
        unreachable))
    "#
}

/// Encodes `text` followed by its NUL terminator as a Wat string literal body.
fn escape(text: &[u8]) -> String {
    let mut escaped = String::with_capacity(3 * (text.len() + 1));
    for byte in text.iter().chain(&[0]) {
        write!(escaped, "\\{byte:02x}").expect("Writing to a `String` can't fail");
    }
    escaped
}
