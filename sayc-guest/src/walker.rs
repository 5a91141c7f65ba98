// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Walking a character sequence and emitting each character.

use crate::CharacterEmitter;
use std::ffi::CStr;
use thiserror::Error;

/// Emits every character of `text` in order and returns how many were emitted.
pub fn say_something<E>(text: &[u8], emitter: &mut E) -> usize
where
    E: CharacterEmitter + ?Sized,
{
    for &character in text {
        emitter.emit(character);
    }

    text.len()
}

/// Emits the characters of a NUL-terminated `text`, stopping before the terminator.
///
/// Returns the length of the sequence, which is the number of emitted characters.
pub fn say_terminated<E>(text: &CStr, emitter: &mut E) -> usize
where
    E: CharacterEmitter + ?Sized,
{
    say_something(text.to_bytes(), emitter)
}

/// Emits the characters of `buffer` that come before its first NUL byte.
///
/// The scan never goes past the end of `buffer`. If there is no terminator nothing is emitted
/// and [`UnterminatedSequence`] is returned.
pub fn say_until_sentinel<E>(buffer: &[u8], emitter: &mut E) -> Result<usize, UnterminatedSequence>
where
    E: CharacterEmitter + ?Sized,
{
    let text = CStr::from_bytes_until_nul(buffer).map_err(|_| UnterminatedSequence {
        scanned: buffer.len(),
    })?;

    Ok(say_terminated(text, emitter))
}

/// A character buffer ended before its NUL terminator was found.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("Character sequence is not NUL-terminated after {scanned} bytes")]
pub struct UnterminatedSequence {
    /// How many bytes were inspected.
    pub scanned: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GREETING;
    use assert_matches::assert_matches;
    use test_case::test_case;

    #[test_case(b"Hello World (from WASM)\n", 24; "greeting")]
    #[test_case(b"", 0; "empty sequence")]
    #[test_case(b"!", 1; "single character")]
    #[test_case(b"\x80\xff", 2; "bytes outside ascii")]
    fn emits_each_character_once(text: &[u8], expected_count: usize) {
        let mut emitted = Vec::new();

        let count = say_something(text, &mut emitted);

        assert_eq!(count, expected_count);
        assert_eq!(emitted, text);
    }

    #[test]
    fn greeting_is_emitted_in_order() {
        let mut emitted = Vec::new();

        let count = say_terminated(GREETING, &mut emitted);

        assert_eq!(count, 24);
        assert_eq!(emitted, b"Hello World (from WASM)\n");
    }

    #[test]
    fn repeated_calls_emit_the_same_characters() {
        let mut first = Vec::new();
        let mut second = Vec::new();

        let first_count = say_terminated(GREETING, &mut first);
        let second_count = say_terminated(GREETING, &mut second);

        assert_eq!(first_count, second_count);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_terminated_sequence_emits_nothing() {
        let mut calls = 0;

        let count = say_terminated(c"", &mut |_: u8| calls += 1);

        assert_eq!(count, 0);
        assert_eq!(calls, 0);
    }

    #[test]
    fn works_with_trait_objects() {
        let mut emitted = Vec::new();
        let emitter: &mut dyn CharacterEmitter = &mut emitted;

        assert_eq!(say_something(b"dyn", emitter), 3);
        assert_eq!(emitted, b"dyn");
    }

    #[test_case(b"abc\0", Ok(3), b"abc"; "terminator at the end")]
    #[test_case(b"ab\0cd\0", Ok(2), b"ab"; "stops at the first terminator")]
    #[test_case(b"\0", Ok(0), b""; "only the terminator")]
    fn sentinel_scan(buffer: &[u8], expected: Result<usize, UnterminatedSequence>, output: &[u8]) {
        let mut emitted = Vec::new();

        assert_eq!(say_until_sentinel(buffer, &mut emitted), expected);
        assert_eq!(emitted, output);
    }

    #[test]
    fn unterminated_buffer_is_rejected_without_emitting() {
        let mut emitted = Vec::new();

        assert_matches!(
            say_until_sentinel(b"no terminator", &mut emitted),
            Err(UnterminatedSequence { scanned: 13 })
        );
        assert!(emitted.is_empty());
    }
}
