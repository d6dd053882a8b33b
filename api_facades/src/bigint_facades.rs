//! BigNumber Facades
//!
//! Flag-based wrappers over the buffer codecs and modular exponentiation.
//! `big_endian == false` selects little-endian order.

use entities_bigint::BigNumber;
use infrastructure_bigint_buffers::{
    from_buffer, uint_buffer, uint_buffer_sized, BufferResult, Endianness,
};

/// Decode an unsigned magnitude buffer; an empty buffer is zero
pub fn decode(buffer: &[u8], big_endian: bool) -> BigNumber {
    from_buffer(buffer, Endianness::from_big_endian_flag(big_endian))
}

/// Minimal unsigned magnitude bytes of `value`; zero encodes to `[]`
pub fn encode_unsized(value: &BigNumber, big_endian: bool) -> Vec<u8> {
    uint_buffer(value, Endianness::from_big_endian_flag(big_endian))
}

/// Magnitude bytes of `value` zero padded to exactly `size` bytes
///
/// Fails with `BufferError::Overflow` when the minimal encoding needs more
/// than `size` bytes.
pub fn encode_sized(value: &BigNumber, size: usize, big_endian: bool) -> BufferResult<Vec<u8>> {
    uint_buffer_sized(value, size, Endianness::from_big_endian_flag(big_endian))
}

/// `a^p mod c` as the canonical residue in `[0, |c|)`
///
/// Returns None if `c` is zero or `p` is negative.
pub fn powm_corrected(a: &BigNumber, p: &BigNumber, c: &BigNumber) -> Option<BigNumber> {
    a.powm(p, c)
}
