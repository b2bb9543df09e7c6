use crate::buffer::Buffer;
use crate::channel::{Channel, Fill};
use crate::constants::DEFAULT_CAPACITY;
use crate::error::{Error, Result};
use std::fmt;
use std::io::{self, BufRead, Read};

/// Buffers reads from a [`Channel`] behind a fixed-capacity buffer.
///
/// Every read drains what is buffered before asking the channel for more, and each refill hands
/// the channel the whole buffer. End-of-stream is reported as `None` and only once the buffer is
/// empty *and* the channel has signalled [`Fill::Exhausted`].
///
/// The reader takes the channel by value; pass `&mut channel` to keep ownership. Either way the
/// channel must not be read directly while the reader is in use, or buffered bytes and the
/// channel's position fall out of step.
pub struct BufChannelReader<C: ?Sized> {
    buffer: Buffer,
    closed: bool,
    channel: C,
}

impl<C: Channel> BufChannelReader<C> {
    /// Creates a new `BufChannelReader` with a [`DEFAULT_CAPACITY`] buffer.
    ///
    /// No I/O happens until the first read.
    pub fn new(channel: C) -> BufChannelReader<C> {
        BufChannelReader {
            buffer: Buffer::with_capacity(DEFAULT_CAPACITY),
            closed: false,
            channel,
        }
    }

    /// Creates a new `BufChannelReader` with a buffer of exactly `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCapacity`] if `capacity` is `0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use buf_channel_reader::{BufChannelReader, Error};
    /// use buf_channel_reader::channel::ReadChannel;
    /// use std::io::Cursor;
    ///
    /// let reader = BufChannelReader::with_capacity(1024, ReadChannel::new(Cursor::new(b"")));
    /// assert_eq!(reader.unwrap().capacity(), 1024);
    ///
    /// let reader = BufChannelReader::with_capacity(0, ReadChannel::new(Cursor::new(b"")));
    /// assert!(matches!(reader, Err(Error::ZeroCapacity)));
    /// ```
    pub fn with_capacity(capacity: usize, channel: C) -> Result<BufChannelReader<C>> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }

        Ok(BufChannelReader {
            buffer: Buffer::with_capacity(capacity),
            closed: false,
            channel,
        })
    }

    /// Unwraps the reader, returning the channel.
    ///
    /// Any buffered bytes are lost.
    pub fn into_inner(self) -> C {
        self.channel
    }
}

impl<C: ?Sized> BufChannelReader<C> {
    /// Returns the capacity of the internal buffer.
    pub fn capacity(&self) -> usize {
        self.buffer.cap()
    }

    /// Returns the buffered bytes that have not been read yet.
    ///
    /// Unlike [`fill_buf`](BufRead::fill_buf) this never touches the channel.
    pub fn buffer(&self) -> &[u8] {
        self.buffer.unread()
    }

    /// Gets a reference to the underlying channel.
    pub fn get_ref(&self) -> &C {
        &self.channel
    }

    /// Gets a mutable reference to the underlying channel.
    ///
    /// Reading from the channel directly skips whatever is buffered.
    pub fn get_mut(&mut self) -> &mut C {
        &mut self.channel
    }

    /// Returns `true` once [`close()`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            return Err(Error::Closed);
        }

        Ok(())
    }
}

impl<C: Channel + ?Sized> BufChannelReader<C> {
    /// Reads a single byte.
    ///
    /// Returns `Ok(None)` at end-of-stream. Performs at most one channel fill per call.
    ///
    /// # Errors
    ///
    /// - [`Error::Stalled`] if the buffer was empty and the channel delivered zero bytes without
    ///   being exhausted. Nothing was consumed; the call can be retried.
    /// - [`Error::Closed`] after [`close()`](Self::close).
    /// - Any error from the channel.
    ///
    /// # Examples
    ///
    /// ```
    /// use buf_channel_reader::BufChannelReader;
    /// use buf_channel_reader::channel::ReadChannel;
    /// use std::io::Cursor;
    ///
    /// let mut reader = BufChannelReader::new(ReadChannel::new(Cursor::new(b"AB")));
    ///
    /// assert_eq!(reader.read_byte().unwrap(), Some(b'A'));
    /// assert_eq!(reader.read_byte().unwrap(), Some(b'B'));
    /// assert_eq!(reader.read_byte().unwrap(), None);
    /// ```
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        self.ensure_open()?;

        if self.buffer.is_drained() {
            match self.buffer.refill(&mut self.channel)? {
                Fill::Exhausted => return Ok(None),
                Fill::Filled(0) => return Err(Error::Stalled),
                Fill::Filled(_) => {}
            }
        }

        Ok(self.buffer.take_byte())
    }

    /// Reads exactly `len` bytes into the start of `dest`, unless the channel runs out first.
    ///
    /// Drains the buffer and refills it as often as needed, including past fills that deliver
    /// zero bytes. Returns:
    ///
    /// - `Some(len)` when the request was satisfied,
    /// - `Some(n)` with `0 < n < len` when the channel was exhausted partway,
    /// - `None` when the channel was exhausted before a single byte could be delivered.
    ///
    /// A `len` of `0` returns `Some(0)` without touching the channel.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidLength`] if `len` exceeds `dest.len()`.
    /// - [`Error::Closed`] after [`close()`](Self::close).
    /// - Any error from the channel. The whole call is aborted: bytes already copied into `dest`
    ///   are not accounted for.
    ///
    /// # Examples
    ///
    /// ```
    /// use buf_channel_reader::BufChannelReader;
    /// use buf_channel_reader::channel::ReadChannel;
    /// use std::io::Cursor;
    ///
    /// let mut reader = BufChannelReader::new(ReadChannel::new(Cursor::new(b"ABC")));
    /// let mut dest = [0u8; 10];
    ///
    /// assert_eq!(reader.read_bulk(&mut dest, 10).unwrap(), Some(3));
    /// assert_eq!(&dest[..3], b"ABC");
    /// assert_eq!(reader.read_bulk(&mut dest, 10).unwrap(), None);
    /// ```
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::indexing_slicing,
        reason = "Safe by bounds checks"
    )]
    pub fn read_bulk(&mut self, dest: &mut [u8], len: usize) -> Result<Option<usize>> {
        self.ensure_open()?;

        if len > dest.len() {
            return Err(Error::InvalidLength {
                requested: len,
                available: dest.len(),
            });
        }

        let mut total = 0;
        while total < len {
            if self.buffer.is_drained()
                && self.buffer.refill(&mut self.channel)?.is_exhausted()
            {
                // Only report end-of-stream if nothing was delivered
                return Ok((total > 0).then_some(total));
            }

            total += self.buffer.copy_to(&mut dest[total..len]);
        }

        Ok(Some(total))
    }

    /// Closes the underlying channel.
    ///
    /// The reader is marked closed even if the channel fails to close, and every later read
    /// fails with [`Error::Closed`], buffered bytes or not. Closing again calls the channel's
    /// `close` again and reports whatever it returns.
    ///
    /// # Errors
    ///
    /// Returns the channel's close error.
    pub fn close(&mut self) -> Result<()> {
        log::debug!("closing channel with {} unread bytes buffered", self.buffer.available());
        self.closed = true;

        self.channel.close()
    }
}

impl<C: Channel + ?Sized> Read for BufChannelReader<C> {
    /// Fills `buf` completely unless the channel runs out; `Ok(0)` means end-of-stream.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let len = buf.len();

        Ok(self.read_bulk(buf, len)?.unwrap_or(0))
    }
}

impl<C: Channel + ?Sized> BufRead for BufChannelReader<C> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.ensure_open()?;

        // An empty slice means EOF to callers, so zero-byte fills are retried
        while self.buffer.is_drained() {
            if self.buffer.refill(&mut self.channel)?.is_exhausted() {
                break;
            }
        }

        Ok(self.buffer.unread())
    }

    fn consume(&mut self, amt: usize) {
        self.buffer.consume(amt);
    }
}

impl<C: ?Sized + fmt::Debug> fmt::Debug for BufChannelReader<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufChannelReader")
            .field("channel", &&self.channel)
            .field(
                "buffer",
                &format_args!("{}/{}", self.buffer.available(), self.buffer.cap()),
            )
            .field("closed", &self.closed)
            .finish()
    }
}
