//! Fixed Size Codec Module
//!
//! Exports a [`BigNumber`] magnitude into a zero padded buffer of a fixed size.
//!
//! The size is either a const generic (`*_array` functions, returning `[E; N]`)
//! or a runtime argument (`*_sized` functions, returning a `Vec` of exactly
//! `size` elements). Both place the minimal encoding so that the padding sits
//! on the most significant side:
//!
//! - little endian: digits at `[0, len)`, zeros at `[len, size)`
//! - big endian: zeros at `[0, size - len)`, digits at `[size - len, size)`
//!
//! A padded buffer therefore decodes back to the same value with the same
//! byte order. When the minimal encoding is longer than the buffer the export
//! fails with [`BufferError::Overflow`] before anything is written.

use entities_bigint::BigNumber;
use log::trace;

use crate::buffer_codec::{relabel, uint_buffer};
use crate::common::{significant_range, BufferResult};
use crate::endian::{BigUint8, ByteElement, Endianness, LittleUint8, Octet, TaggedByte};

/// Minimal magnitude of `value` zero padded into `[u8; N]`
pub fn uint_array<const N: usize>(
    value: &BigNumber,
    endianness: Endianness,
) -> BufferResult<[u8; N]> {
    let minimal = uint_buffer(value, endianness);
    let range = significant_range(minimal.len(), N, endianness)?;

    let mut array = [0u8; N];
    array[range].copy_from_slice(&minimal);
    trace!("padded {}-byte value to {} bytes", minimal.len(), N);
    Ok(array)
}

/// [`uint_array`] as opaque bytes
pub fn byte_array<const N: usize>(
    value: &BigNumber,
    endianness: Endianness,
) -> BufferResult<[Octet; N]> {
    Ok(uint_array::<N>(value, endianness)?.map(Octet))
}

/// [`uint_array`] in little-endian order, tagged [`LittleUint8`]
pub fn little_endian_array<const N: usize>(value: &BigNumber) -> BufferResult<[LittleUint8; N]> {
    Ok(uint_array::<N>(value, LittleUint8::ENDIANNESS)?.map(LittleUint8::from_u8))
}

/// [`uint_array`] in big-endian order, tagged [`BigUint8`]
pub fn big_endian_array<const N: usize>(value: &BigNumber) -> BufferResult<[BigUint8; N]> {
    Ok(uint_array::<N>(value, BigUint8::ENDIANNESS)?.map(BigUint8::from_u8))
}

/// Minimal magnitude of `value` zero padded to exactly `size` bytes
pub fn uint_buffer_sized(
    value: &BigNumber,
    size: usize,
    endianness: Endianness,
) -> BufferResult<Vec<u8>> {
    let minimal = uint_buffer(value, endianness);
    let range = significant_range(minimal.len(), size, endianness)?;

    let mut buffer = vec![0u8; size];
    buffer[range].copy_from_slice(&minimal);
    trace!("padded {}-byte value to {} bytes", minimal.len(), size);
    Ok(buffer)
}

/// [`uint_buffer_sized`] as opaque bytes
pub fn byte_buffer_sized(
    value: &BigNumber,
    size: usize,
    endianness: Endianness,
) -> BufferResult<Vec<Octet>> {
    Ok(relabel(uint_buffer_sized(value, size, endianness)?))
}

/// [`uint_buffer_sized`] in little-endian order, tagged [`LittleUint8`]
pub fn little_endian_buffer_sized(
    value: &BigNumber,
    size: usize,
) -> BufferResult<Vec<LittleUint8>> {
    Ok(relabel(uint_buffer_sized(
        value,
        size,
        LittleUint8::ENDIANNESS,
    )?))
}

/// [`uint_buffer_sized`] in big-endian order, tagged [`BigUint8`]
pub fn big_endian_buffer_sized(value: &BigNumber, size: usize) -> BufferResult<Vec<BigUint8>> {
    Ok(relabel(uint_buffer_sized(value, size, BigUint8::ENDIANNESS)?))
}
