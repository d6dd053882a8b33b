//! Common Buffer Utilities
//!
//! Error type shared by the fixed size codecs and the padding placement rule.

use std::ops::Range;

use log::debug;

use crate::endian::Endianness;

/// Buffer conversion errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// The minimal encoding is longer than the requested buffer
    #[error("the number is too big for the buffer: needs {required} bytes, {available} available")]
    Overflow {
        /// Length of the minimal encoding
        required: usize,
        /// Requested buffer size
        available: usize,
    },
}

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Index range the significant bytes occupy in a zero padded buffer of `size`.
///
/// Little endian keeps the digits at the front, big endian at the back, so the
/// padding always lands on the most significant side.
pub(crate) fn significant_range(
    len: usize,
    size: usize,
    endianness: Endianness,
) -> BufferResult<Range<usize>> {
    if len > size {
        debug!("rejecting {}-byte value for {}-byte buffer", len, size);
        return Err(BufferError::Overflow {
            required: len,
            available: size,
        });
    }

    Ok(match endianness {
        Endianness::Little => 0..len,
        Endianness::Big => size - len..size,
    })
}
