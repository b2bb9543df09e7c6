//! Error type shared by channels and the reader.
//!
//! End-of-stream is deliberately absent from [`Error`]: exhaustion is an expected outcome and is
//! reported through `Option::None` by the read operations.

use std::io;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The channel's fill or close operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// The channel (or the reader wrapping it) has already been closed.
    #[error("channel is closed")]
    Closed,

    /// A reader was constructed with a zero-sized buffer.
    #[error("buffer capacity must be greater than zero")]
    ZeroCapacity,

    /// A bulk read asked for more bytes than the destination can hold.
    #[error("requested {requested} bytes but the destination only holds {available}")]
    InvalidLength { requested: usize, available: usize },

    /// The channel claimed to have filled more bytes than the region it was given.
    #[error("channel reported {filled} bytes for a region of {capacity}")]
    Overfilled { filled: usize, capacity: usize },

    /// A single-byte read's refill produced no bytes, but the channel is not exhausted.
    ///
    /// The read may be retried.
    #[error("channel delivered no bytes without signalling exhaustion")]
    Stalled,
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        let kind = match err {
            Error::Io(e) => return e,
            Error::Closed => io::ErrorKind::NotConnected,
            Error::ZeroCapacity | Error::InvalidLength { .. } => io::ErrorKind::InvalidInput,
            Error::Overfilled { .. } => io::ErrorKind::InvalidData,
            Error::Stalled => io::ErrorKind::WouldBlock,
        };

        io::Error::new(kind, err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_passes_through() {
        let inner = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: io::Error = Error::from(inner).into();

        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        assert_eq!(err.to_string(), "denied");
    }

    #[test]
    fn test_error_kinds() {
        let kind = |e: Error| io::Error::from(e).kind();

        assert_eq!(kind(Error::Closed), io::ErrorKind::NotConnected);
        assert_eq!(kind(Error::ZeroCapacity), io::ErrorKind::InvalidInput);
        assert_eq!(
            kind(Error::InvalidLength {
                requested: 10,
                available: 5
            }),
            io::ErrorKind::InvalidInput
        );
        assert_eq!(
            kind(Error::Overfilled {
                filled: 9,
                capacity: 8
            }),
            io::ErrorKind::InvalidData
        );
        assert_eq!(kind(Error::Stalled), io::ErrorKind::WouldBlock);
    }

    #[test]
    fn test_display() {
        let err = Error::InvalidLength {
            requested: 10,
            available: 5,
        };

        assert_eq!(
            err.to_string(),
            "requested 10 bytes but the destination only holds 5"
        );
    }
}
