//! A buffered reader over byte channels that signal exhaustion explicitly.
//!
//! A [`Channel`](channel::Channel) is a source of bytes, such as an open file, that fills a
//! caller-supplied region and says outright when it has nothing left, instead of overloading a
//! zero count the way [`std::io::Read`] does. [`BufChannelReader`] puts a fixed-capacity buffer in
//! front of one so that single-byte and small reads don't each cost a call into the channel.
//!
//! # Quick start
//!
//! ```
//! use buf_channel_reader::BufChannelReader;
//! use buf_channel_reader::channel::ReadChannel;
//! use std::io::Cursor;
//!
//! let channel = ReadChannel::new(Cursor::new(b"Hello, World!"));
//! let mut reader = BufChannelReader::with_capacity(1024, channel).unwrap();
//!
//! // One byte at a time
//! assert_eq!(reader.read_byte().unwrap(), Some(b'H'));
//!
//! // Or in bulk, which fills the whole request unless the channel runs dry
//! let mut dest = [0u8; 32];
//! assert_eq!(reader.read_bulk(&mut dest, 32).unwrap(), Some(12));
//! assert_eq!(&dest[..12], b"ello, World!");
//!
//! // End-of-stream is `None`, never an error
//! assert_eq!(reader.read_byte().unwrap(), None);
//!
//! // Closing closes the channel
//! reader.close().unwrap();
//! assert!(reader.get_ref().is_closed());
//! ```
//!
//! # Files
//!
//! ```no_run
//! use buf_channel_reader::BufChannelReader;
//! use buf_channel_reader::channel::FileChannel;
//! use std::io::BufRead;
//!
//! # fn main() -> buf_channel_reader::Result<()> {
//! let mut reader = BufChannelReader::new(FileChannel::open("input.txt")?);
//!
//! // `BufChannelReader` is also a regular `BufRead`
//! for line in (&mut reader).lines() {
//!     println!("{}", line?);
//! }
//!
//! reader.close()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Crate organisation
//!
//! - [`BufChannelReader`]: the reader, with [`read_byte`](BufChannelReader::read_byte),
//!   [`read_bulk`](BufChannelReader::read_bulk) and [`close`](BufChannelReader::close), plus
//!   [`Read`](std::io::Read) and [`BufRead`](std::io::BufRead) impls.
//! - [`channel`]: the [`Channel`](channel::Channel) trait and
//!   [`ReadChannel`](channel::ReadChannel), which adapts any `Read` (including
//!   [`File`](std::fs::File)).
//! - [`constants`]: [`DEFAULT_CAPACITY`](constants::DEFAULT_CAPACITY).
//! - [`Error`]: the error type. Exhaustion is not an error.

mod buffer;
pub mod channel;
pub mod constants;
mod error;
mod reader;

pub use error::{Error, Result};
pub use reader::BufChannelReader;
