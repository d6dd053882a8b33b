//! Buffer Codec Module
//!
//! Import of any 8-bit buffer into a [`BigNumber`] and minimal-length export of
//! a [`BigNumber`] magnitude.
//!
//! Every export is derived from the same minimal `u8` sequence; the other
//! element types are a relabeling of those bytes.

use entities_bigint::BigNumber;

use crate::endian::{BigUint8, ByteElement, Endianness, LittleUint8, Octet, TaggedByte};

/// Decode an unsigned magnitude buffer
///
/// Works for any 8-bit element type. An empty buffer is zero, and zero
/// padding on the most significant side is ignored. Never fails.
pub fn from_buffer<E: ByteElement>(buffer: &[E], endianness: Endianness) -> BigNumber {
    let bytes: Vec<u8> = buffer.iter().map(|byte| byte.to_u8()).collect();
    match endianness {
        Endianness::Little => BigNumber::from_bytes_le(&bytes),
        Endianness::Big => BigNumber::from_bytes_be(&bytes),
    }
}

/// Decode a buffer of endianness-tagged bytes, in the order the tag implies
pub fn from_tagged_buffer<T: TaggedByte>(buffer: &[T]) -> BigNumber {
    from_buffer(buffer, T::ENDIANNESS)
}

/// Minimal unsigned magnitude bytes of `value`
///
/// Zero encodes to an empty buffer. Negative values encode their absolute value.
pub fn uint_buffer(value: &BigNumber, endianness: Endianness) -> Vec<u8> {
    match endianness {
        Endianness::Little => value.to_bytes_le(),
        Endianness::Big => value.to_bytes_be(),
    }
}

/// [`uint_buffer`] as opaque bytes
pub fn byte_buffer(value: &BigNumber, endianness: Endianness) -> Vec<Octet> {
    relabel(uint_buffer(value, endianness))
}

/// [`uint_buffer`] in little-endian order, tagged [`LittleUint8`]
pub fn little_endian_buffer(value: &BigNumber) -> Vec<LittleUint8> {
    relabel(uint_buffer(value, LittleUint8::ENDIANNESS))
}

/// [`uint_buffer`] in big-endian order, tagged [`BigUint8`]
pub fn big_endian_buffer(value: &BigNumber) -> Vec<BigUint8> {
    relabel(uint_buffer(value, BigUint8::ENDIANNESS))
}

pub(crate) fn relabel<E: ByteElement>(bytes: Vec<u8>) -> Vec<E> {
    bytes.into_iter().map(E::from_u8).collect()
}
