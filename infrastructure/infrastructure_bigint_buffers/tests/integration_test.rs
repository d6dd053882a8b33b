//! Integration tests for infrastructure_bigint_buffers crate
//!
//! These tests verify that dynamic and fixed size buffers decode back to the
//! values they were built from, in both byte orders.

use entities_bigint::BigNumber;
use infrastructure_bigint_buffers::*;
use rstest::rstest;

fn sample_values() -> Vec<BigNumber> {
    vec![
        BigNumber::zero(),
        BigNumber::from_u64(1),
        BigNumber::from_u64(0xFF),
        BigNumber::from_u64(0x100),
        BigNumber::from_u64(0xFEED),
        BigNumber::from_u64(u32::MAX as u64),
        BigNumber::from_u64(u64::MAX),
        "340282366920938463463374607431768211457".parse().unwrap(),
        "115792089237316195423570985008687907853269984665640564039457584007908834671663"
            .parse()
            .unwrap(),
    ]
}

#[rstest]
#[case(Endianness::Little)]
#[case(Endianness::Big)]
fn test_unsized_round_trip(#[case] endianness: Endianness) {
    for value in sample_values() {
        let encoded = uint_buffer(&value, endianness);
        assert_eq!(from_buffer(&encoded, endianness), value);

        let octets = byte_buffer(&value, endianness);
        assert_eq!(from_buffer(&octets, endianness), value);
    }
}

#[test]
fn test_tagged_round_trip() {
    for value in sample_values() {
        assert_eq!(from_tagged_buffer(&little_endian_buffer(&value)), value);
        assert_eq!(from_tagged_buffer(&big_endian_buffer(&value)), value);
    }
}

#[test]
fn test_endianness_sensitivity() {
    let value = BigNumber::from_u64(0x0102_0304);
    let little = uint_buffer(&value, Endianness::Little);
    let big = uint_buffer(&value, Endianness::Big);

    assert_ne!(little, big);
    assert_ne!(from_buffer(&little, Endianness::Big), value);
    assert_ne!(from_buffer(&big, Endianness::Little), value);
}

#[test]
fn test_minimal_length() {
    for value in sample_values() {
        let little = uint_buffer(&value, Endianness::Little);
        let big = uint_buffer(&value, Endianness::Big);

        assert_eq!(little.len(), big.len());
        if value.is_zero() {
            assert!(little.is_empty());
        } else {
            assert_ne!(little.last(), Some(&0));
            assert_ne!(big.first(), Some(&0));
        }
    }
}

#[rstest]
#[case(Endianness::Little)]
#[case(Endianness::Big)]
fn test_sized_exact_fit_equals_unsized(#[case] endianness: Endianness) {
    for value in sample_values() {
        let minimal = uint_buffer(&value, endianness);
        let sized = uint_buffer_sized(&value, minimal.len(), endianness).unwrap();
        assert_eq!(sized, minimal);
    }
}

#[rstest]
#[case(Endianness::Little)]
#[case(Endianness::Big)]
fn test_sized_too_small_overflows(#[case] endianness: Endianness) {
    for value in sample_values().into_iter().filter(|v| !v.is_zero()) {
        let len = uint_buffer(&value, endianness).len();
        assert_eq!(
            uint_buffer_sized(&value, len - 1, endianness),
            Err(BufferError::Overflow {
                required: len,
                available: len - 1
            })
        );
    }
}

#[rstest]
#[case(Endianness::Little, 1)]
#[case(Endianness::Big, 1)]
#[case(Endianness::Little, 7)]
#[case(Endianness::Big, 32)]
fn test_sized_padding_round_trip(#[case] endianness: Endianness, #[case] extra: usize) {
    for value in sample_values() {
        let size = uint_buffer(&value, endianness).len() + extra;
        let padded = uint_buffer_sized(&value, size, endianness).unwrap();

        assert_eq!(padded.len(), size);
        assert_eq!(from_buffer(&padded, endianness), value);
    }
}

#[test]
fn test_feed_fixtures() {
    let value = BigNumber::from_u64(0xFEED);

    assert_eq!(uint_buffer(&value, Endianness::Little), hex::decode("edfe").unwrap());
    assert_eq!(uint_buffer(&value, Endianness::Big), hex::decode("feed").unwrap());
    assert!(uint_array::<1>(&value, Endianness::Little).is_err());
    assert_eq!(
        uint_array::<4>(&value, Endianness::Little).unwrap().to_vec(),
        hex::decode("edfe0000").unwrap()
    );
    assert_eq!(
        uint_array::<4>(&value, Endianness::Big).unwrap().to_vec(),
        hex::decode("0000feed").unwrap()
    );
}

#[test]
fn test_secp256k1_prime_as_fixed_width_big_endian() {
    let p: BigNumber =
        "115792089237316195423570985008687907853269984665640564039457584007908834671663"
            .parse()
            .unwrap();

    let encoded = uint_array::<32>(&p, Endianness::Big).unwrap();
    assert_eq!(
        hex::encode(encoded),
        "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"
    );
    assert!(uint_array::<31>(&p, Endianness::Big).is_err());

    let widened = big_endian_array::<33>(&p).unwrap();
    assert_eq!(widened[0].value(), 0);
    assert_eq!(from_tagged_buffer(&widened), p);
}

#[test]
fn test_overflow_is_a_std_error() {
    let err: Box<dyn std::error::Error> =
        Box::new(uint_buffer_sized(&BigNumber::from_u64(0xFEED), 1, Endianness::Big).unwrap_err());
    assert!(err.to_string().contains("too big"));
}
