//! API Facades Layer
//!
//! Entry points for callers that pass byte order as a `big_endian` flag and
//! work with plain `u8` buffers. All facades call the inner layers:
//!
//! - [`decode`] / [`encode_unsized`] / [`encode_sized`] over
//!   `infrastructure_bigint_buffers`
//! - [`powm_corrected`] over `entities_bigint`
//!
//! The element-typed and const generic variants are re-exported for callers
//! that need them.

pub mod bigint_facades;

// Re-export main facade functions
pub use bigint_facades::*;

pub use entities_bigint::{BigNumber, ParseBigNumberError};
pub use infrastructure_bigint_buffers::{
    BigUint8, BufferError, BufferResult, ByteElement, Endianness, LittleUint8, Octet, TaggedByte,
};
