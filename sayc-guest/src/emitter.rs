// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Sinks that receive one character at a time.

/// A capability that outputs a single character as a side effect.
///
/// What "output" means is up to the implementation: the Wasm host prints it, tests record it.
pub trait CharacterEmitter {
    /// Outputs one `character`.
    fn emit(&mut self, character: u8);
}

impl<F> CharacterEmitter for F
where
    F: FnMut(u8),
{
    fn emit(&mut self, character: u8) {
        self(character)
    }
}

impl CharacterEmitter for Vec<u8> {
    fn emit(&mut self, character: u8) {
        self.push(character);
    }
}

#[cfg(with_host_imports)]
mod host {
    #[link(wasm_import_module = "env")]
    extern "C" {
        fn sayc(character: i32);
    }

    /// The emitter provided by the host through the `env.sayc` import.
    #[derive(Clone, Copy, Debug, Default)]
    pub struct HostEmitter;

    impl super::CharacterEmitter for HostEmitter {
        fn emit(&mut self, character: u8) {
            // Characters are passed the same way C passes a `char`, sign extended.
            let character = character as i8 as i32;
            // SAFETY: `sayc` only takes a scalar and has no memory requirements.
            unsafe { sayc(character) }
        }
    }
}

#[cfg(with_host_imports)]
pub use self::host::HostEmitter;

#[cfg(test)]
mod tests {
    use super::CharacterEmitter;

    #[test]
    fn closures_are_emitters() {
        let mut seen = String::new();
        let mut emitter = |character: u8| seen.push(character as char);

        emitter.emit(b'o');
        emitter.emit(b'k');

        assert_eq!(seen, "ok");
    }

    #[test]
    fn buffers_record_characters_in_order() {
        let mut buffer = Vec::new();

        for character in *b"abc" {
            buffer.emit(character);
        }

        assert_eq!(buffer, b"abc");
    }
}
