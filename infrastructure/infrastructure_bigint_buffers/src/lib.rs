//! Infrastructure Layer: BigNumber Byte Buffers
//!
//! Converts [`BigNumber`](entities_bigint::BigNumber) values to and from byte
//! buffers holding their unsigned magnitude, in little- or big-endian order.
//!
//! ## Overview
//!
//! - **[`endian`](endian/index.html)**: `Endianness` and the 8-bit element types
//!   a buffer can be made of (`u8`, `Octet`, `LittleUint8`, `BigUint8`).
//! - **[`buffer_codec`](buffer_codec/index.html)**: import from any 8-bit buffer
//!   and minimal-length export.
//! - **[`fixed_codec`](fixed_codec/index.html)**: export into zero padded buffers
//!   of a fixed size, failing with [`BufferError::Overflow`] when the value does
//!   not fit.
//!
//! Only magnitudes are encoded; exporting a negative number yields the bytes of
//! its absolute value.

mod common;

pub mod buffer_codec;
pub mod endian;
pub mod fixed_codec;

pub use buffer_codec::{
    big_endian_buffer, byte_buffer, from_buffer, from_tagged_buffer, little_endian_buffer,
    uint_buffer,
};
pub use common::{BufferError, BufferResult};
pub use endian::{BigUint8, ByteElement, Endianness, LittleUint8, Octet, TaggedByte};
pub use fixed_codec::{
    big_endian_array, big_endian_buffer_sized, byte_array, byte_buffer_sized,
    little_endian_array, little_endian_buffer_sized, uint_array, uint_buffer_sized,
};
