//! Byte channels: the data sources a [`BufChannelReader`](crate::BufChannelReader) buffers.
//!
//! A [`Channel`] fills caller-supplied regions and, unlike [`std::io::Read`], reports end of data
//! through an explicit [`Fill::Exhausted`] rather than a zero count. A channel may legitimately
//! deliver zero bytes (or fewer than asked for) without being exhausted, as pipes and sockets do.
//!
//! [`ReadChannel`] adapts any [`Read`] implementation, most usefully a [`File`]:
//!
//! ```
//! use buf_channel_reader::channel::{Channel, Fill, ReadChannel};
//! use std::io::Cursor;
//!
//! let mut channel = ReadChannel::new(Cursor::new(b"abc"));
//! let mut region = [0u8; 8];
//!
//! assert_eq!(channel.fill(&mut region).unwrap(), Fill::Filled(3));
//! assert_eq!(&region[..3], b"abc");
//! assert_eq!(channel.fill(&mut region).unwrap(), Fill::Exhausted);
//!
//! channel.close().unwrap();
//! assert!(channel.fill(&mut region).is_err());
//! ```

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Outcome of a single [`Channel::fill`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// The channel placed this many bytes at the start of the region.
    ///
    /// Zero is a valid count and does not imply the channel is exhausted.
    Filled(usize),

    /// The channel has no more data and never will.
    Exhausted,
}

impl Fill {
    /// Returns the byte count, `0` for [`Fill::Exhausted`].
    ///
    /// ```
    /// # use buf_channel_reader::channel::Fill;
    /// assert_eq!(Fill::Filled(42).count(), 42);
    /// assert_eq!(Fill::Exhausted.count(), 0);
    /// ```
    pub const fn count(&self) -> usize {
        match self {
            Self::Filled(n) => *n,
            Self::Exhausted => 0,
        }
    }

    /// Returns `true` for [`Fill::Exhausted`].
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }
}

/// A closable source of bytes with explicit exhaustion signalling.
pub trait Channel {
    /// Reads up to `region.len()` bytes into the start of `region`.
    ///
    /// Implementations must eventually return [`Fill::Exhausted`] once their data runs out
    /// rather than reporting `Filled(0)` forever, and must never report more bytes than
    /// `region.len()`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying source fails or the channel has been closed.
    fn fill(&mut self, region: &mut [u8]) -> Result<Fill>;

    /// Releases the resources held by the channel.
    ///
    /// # Errors
    ///
    /// Returns an error if releasing the resource fails. Closing an already closed channel is an
    /// error as well.
    fn close(&mut self) -> Result<()>;
}

impl<C: Channel + ?Sized> Channel for &mut C {
    #[inline]
    fn fill(&mut self, region: &mut [u8]) -> Result<Fill> {
        (**self).fill(region)
    }

    #[inline]
    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

impl<C: Channel + ?Sized> Channel for Box<C> {
    #[inline]
    fn fill(&mut self, region: &mut [u8]) -> Result<Fill> {
        (**self).fill(region)
    }

    #[inline]
    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// A [`Channel`] over any [`Read`] implementation.
///
/// A `read` returning `Ok(0)` for a non-empty region is taken as exhaustion. Closing drops the
/// inner reader, so for a [`File`] the descriptor is released right away; every later use of the
/// channel fails with [`Error::Closed`].
#[derive(Debug)]
pub struct ReadChannel<R> {
    inner: Option<R>,
}

/// A channel over an open file.
pub type FileChannel = ReadChannel<File>;

impl ReadChannel<File> {
    /// Opens the file at `path` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::trace!("opening channel on {}", path.display());

        Ok(Self::new(File::open(path)?))
    }
}

impl<R> ReadChannel<R> {
    /// Wraps `inner` in an open channel.
    pub fn new(inner: R) -> Self {
        Self { inner: Some(inner) }
    }

    /// Returns `true` once [`close()`](Channel::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.inner.is_none()
    }

    /// Gets a reference to the underlying reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Closed`] if the channel has been closed.
    pub fn get_ref(&self) -> Result<&R> {
        self.inner.as_ref().ok_or(Error::Closed)
    }

    /// Gets a mutable reference to the underlying reader.
    ///
    /// Reading from it directly skips whatever a buffering reader above this channel expects to
    /// see next.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Closed`] if the channel has been closed.
    pub fn get_mut(&mut self) -> Result<&mut R> {
        self.inner.as_mut().ok_or(Error::Closed)
    }

    /// Unwraps the channel, returning the underlying reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Closed`] if the channel has been closed.
    pub fn into_inner(self) -> Result<R> {
        self.inner.ok_or(Error::Closed)
    }
}

impl<R: Read> Channel for ReadChannel<R> {
    fn fill(&mut self, region: &mut [u8]) -> Result<Fill> {
        let inner = self.inner.as_mut().ok_or(Error::Closed)?;

        if region.is_empty() {
            // `Ok(0)` would be indistinguishable from EOF here
            return Ok(Fill::Filled(0));
        }

        loop {
            match inner.read(region) {
                Ok(0) => return Ok(Fill::Exhausted),
                Ok(n) => return Ok(Fill::Filled(n)),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the reader releases whatever it holds
        self.inner.take().map(drop).ok_or(Error::Closed)
    }
}

#[cfg(test)]
pub(crate) mod mock;
