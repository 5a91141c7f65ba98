// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Host-side [`CharacterEmitter`]s.

use sayc_guest::CharacterEmitter;
use std::{
    io::{self, BufWriter, Stdout, Write},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
};

/// Counts how many characters were emitted, discarding them.
///
/// Clones share the same count, so a clone can be handed to a run while the original is kept
/// for inspection.
#[derive(Clone, Debug, Default)]
pub struct CallCounter {
    calls: Arc<AtomicUsize>,
}

impl CallCounter {
    /// Returns the number of characters received so far, by this counter and its clones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Acquire)
    }
}

impl CharacterEmitter for CallCounter {
    fn emit(&mut self, _character: u8) {
        self.calls.fetch_add(1, Ordering::AcqRel);
    }
}

/// Writes emitted characters to an [`io::Write`] sink through a buffer.
///
/// Emitting can't fail, so the first write error is kept and returned by
/// [`WriteEmitter::finish`]. Characters emitted after an error are dropped.
#[derive(Debug)]
pub struct WriteEmitter<W: Write> {
    writer: BufWriter<W>,
    error: Option<io::Error>,
}

/// A [`WriteEmitter`] printing to the standard output.
pub type StdoutEmitter = WriteEmitter<Stdout>;

impl StdoutEmitter {
    /// Creates an emitter that prints to the standard output.
    pub fn stdout() -> Self {
        WriteEmitter::new(io::stdout())
    }
}

impl<W: Write> WriteEmitter<W> {
    /// Creates an emitter writing to `writer`.
    pub fn new(writer: W) -> Self {
        WriteEmitter {
            writer: BufWriter::new(writer),
            error: None,
        }
    }

    /// Flushes the buffered characters, reporting the first error that happened while writing.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }

        self.writer.into_inner().map_err(|error| error.into_error())
    }
}

impl<W: Write> CharacterEmitter for WriteEmitter<W> {
    fn emit(&mut self, character: u8) {
        if self.error.is_some() {
            return;
        }

        if let Err(error) = self.writer.write_all(&[character]) {
            tracing::debug!(%error, "Dropping output after a write error");
            self.error = Some(error);
        }
    }
}
