//! A scripted channel for tests.
//!
//! Serves a fixed byte sequence and can be told to deliver it in small chunks, to interleave
//! zero-byte fills, or to fail on a given call. It counts fill and close calls so tests can assert
//! exactly how often the reader touched it.

#![expect(
    clippy::arithmetic_side_effects,
    clippy::indexing_slicing,
    reason = "Okay in tests"
)]

use super::{Channel, Fill};
use crate::error::{Error, Result};
use std::io;

#[derive(Debug, Default)]
pub(crate) struct MockChannel {
    data: Vec<u8>,
    pos: usize,
    chunk: Option<usize>,
    stalling: bool,
    stalled: bool,
    fail_on: Option<usize>,
    fills: usize,
    closes: usize,
    closed: bool,
}

impl MockChannel {
    /// Serves `data`, as much as fits per fill.
    pub(crate) fn new(data: impl Into<Vec<u8>>) -> Self {
        Self {
            data: data.into(),
            ..Self::default()
        }
    }

    /// A channel that is exhausted from the start.
    pub(crate) fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Deliver at most `chunk` bytes per fill.
    pub(crate) fn chunked(mut self, chunk: usize) -> Self {
        self.chunk = Some(chunk);
        self
    }

    /// Answer every other fill with `Filled(0)`, starting with the first.
    pub(crate) fn stalling(mut self) -> Self {
        self.stalling = true;
        self
    }

    /// Fail the fill call with the given zero-based index.
    pub(crate) fn failing_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }

    pub(crate) fn fills(&self) -> usize {
        self.fills
    }

    pub(crate) fn closes(&self) -> usize {
        self.closes
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed
    }
}

impl Channel for MockChannel {
    fn fill(&mut self, region: &mut [u8]) -> Result<Fill> {
        let call = self.fills;
        self.fills += 1;

        if self.closed {
            return Err(Error::Closed);
        }

        if self.fail_on == Some(call) {
            return Err(io::Error::other("injected failure").into());
        }

        if self.stalling && !self.stalled {
            self.stalled = true;
            return Ok(Fill::Filled(0));
        }
        self.stalled = false;

        let remaining = &self.data[self.pos..];
        if remaining.is_empty() {
            return Ok(Fill::Exhausted);
        }

        let n = remaining
            .len()
            .min(region.len())
            .min(self.chunk.unwrap_or(usize::MAX));
        region[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;

        Ok(Fill::Filled(n))
    }

    fn close(&mut self) -> Result<()> {
        self.closes += 1;

        if self.closed {
            return Err(Error::Closed);
        }
        self.closed = true;

        Ok(())
    }
}

/// Routes `log` output through the test harness. Safe to call from every test.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
