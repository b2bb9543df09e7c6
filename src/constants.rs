//! Buffer size constants.
//!
//! [`DEFAULT_CAPACITY`] is the capacity used by [`BufChannelReader::new`]. Readers built with
//! [`BufChannelReader::with_capacity`] may use any non-zero size.
//!
//! # Invariant
//!
//! - `DEFAULT_CAPACITY` is a power of 2 and a multiple of 1 KiB (1024 bytes)
//!
//! [`BufChannelReader::new`]: crate::BufChannelReader::new
//! [`BufChannelReader::with_capacity`]: crate::BufChannelReader::with_capacity

/// Default buffer capacity (8 KiB).
///
/// The size matches [`std::io::BufReader`]'s internal buffer size, deferring to the standard
/// library authors' knowledge of optimal I/O performance.
pub const DEFAULT_CAPACITY: usize =
    // 2^13 = 8192 = 8 * 1024 = 8 KiB
    1 << 13;
