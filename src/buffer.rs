//! Fixed-capacity read buffer.
//!
//! [`Buffer`] is the internal storage of [`BufChannelReader`](crate::BufChannelReader). Its
//! capacity is chosen once and never changes; data enters only through [`Buffer::refill`], which
//! discards whatever was there and hands the whole region to a [`Channel`].

use crate::channel::{Channel, Fill};
use crate::error::{Error, Result};
use std::cmp;

/// A fixed-capacity byte buffer with a read cursor.
///
/// # Invariants
///
/// This buffer maintains the invariant `0 <= self.pos <= self.len <= self.buf.len()` at all
/// times. Bytes in `pos..len` are unread; bytes past `len` are stale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Buffer {
    /// Internal buffer storage, sized to the capacity.
    buf: Vec<u8>,
    /// Number of valid bytes from the last refill.
    len: usize,
    /// Number of valid bytes that have been consumed (read position).
    pos: usize,
}

impl Buffer {
    /// Creates an empty buffer holding exactly `capacity` bytes.
    ///
    /// A zero capacity is rejected by the reader before it gets here.
    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0);

        Self {
            buf: vec![0; capacity],
            len: 0,
            pos: 0,
        }
    }

    /// Returns the capacity of the buffer in bytes.
    #[inline]
    pub(crate) fn cap(&self) -> usize {
        self.buf.len()
    }

    /// Returns the number of unread bytes.
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by invariant")]
    #[inline]
    pub(crate) fn available(&self) -> usize {
        self.len - self.pos
    }

    /// Returns `true` when every valid byte has been consumed.
    #[inline]
    pub(crate) fn is_drained(&self) -> bool {
        self.pos >= self.len
    }

    /// Returns the unread bytes.
    #[expect(clippy::indexing_slicing, reason = "Safe by invariant")]
    #[inline]
    pub(crate) fn unread(&self) -> &[u8] {
        &self.buf[self.pos..self.len]
    }

    /// Forgets all data, keeping the allocation.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.pos = 0;
        self.len = 0;
    }

    /// Marks `amt` bytes as consumed, clamped to the valid data.
    #[inline]
    pub(crate) fn consume(&mut self, amt: usize) {
        self.pos = cmp::min(self.pos.saturating_add(amt), self.len);
    }

    /// Consumes and returns the next unread byte, if any.
    #[expect(clippy::arithmetic_side_effects, reason = "Safe by invariant")]
    #[inline]
    pub(crate) fn take_byte(&mut self) -> Option<u8> {
        let byte = *self.unread().first()?;
        self.pos += 1;

        Some(byte)
    }

    /// Copies as many unread bytes as fit into `dest`, consuming them.
    ///
    /// Returns the number of bytes copied, which is `0` only if `dest` is empty or the buffer is
    /// drained.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by invariant"
    )]
    pub(crate) fn copy_to(&mut self, dest: &mut [u8]) -> usize {
        let unread = &self.buf[self.pos..self.len];
        let n = cmp::min(dest.len(), unread.len());

        dest[..n].copy_from_slice(&unread[..n]);
        self.pos += n;

        n
    }

    /// Discards the buffer contents and asks `channel` to fill the full capacity, once.
    ///
    /// On [`Fill::Filled`] the valid region becomes `0..n`, where `n` may be anything up to the
    /// capacity, zero included. On [`Fill::Exhausted`] the buffer is left empty.
    ///
    /// # Errors
    ///
    /// Returns the channel's error unchanged, or [`Error::Overfilled`] if the channel reports more
    /// bytes than the buffer holds. The buffer is left empty either way.
    pub(crate) fn refill<C: Channel + ?Sized>(&mut self, channel: &mut C) -> Result<Fill> {
        debug_assert!(self.is_drained(), "refill would drop unread bytes");

        // Accept new data across the full capacity
        self.clear();

        let fill = channel.fill(&mut self.buf)?;
        match fill {
            Fill::Filled(n) if n > self.buf.len() => {
                return Err(Error::Overfilled {
                    filled: n,
                    capacity: self.buf.len(),
                });
            }
            Fill::Filled(n) => {
                log::trace!("refilled {} of {} bytes", n, self.buf.len());
                self.len = n;
            }
            Fill::Exhausted => {
                log::debug!("channel exhausted");
            }
        }

        Ok(fill)
    }
}
