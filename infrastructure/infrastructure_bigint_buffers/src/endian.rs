//! Byte Order and Byte Element Types
//!
//! A buffer element is anything 8 bits wide that can be read as and built from
//! a `u8`. Four kinds are supported:
//!
//! - `u8`: raw unsigned byte, endianness passed explicitly
//! - [`Octet`]: opaque byte without arithmetic, endianness passed explicitly
//! - [`LittleUint8`]: one-byte integer tagged little-endian
//! - [`BigUint8`]: one-byte integer tagged big-endian
//!
//! A one-byte integer reads the same in either byte order, so the tagged types
//! only carry the order of the *buffer* they belong to. Converting between any
//! of them never changes the byte value.

/// Order of the digits in a magnitude buffer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Endianness {
    /// Least significant byte first
    #[default]
    Little,
    /// Most significant byte first
    Big,
}

impl Endianness {
    /// Map a `big_endian` flag onto a byte order
    pub fn from_big_endian_flag(big_endian: bool) -> Self {
        if big_endian {
            Endianness::Big
        } else {
            Endianness::Little
        }
    }

    /// True for [`Endianness::Big`]
    pub fn is_big(self) -> bool {
        self == Endianness::Big
    }
}

/// An 8-bit buffer element
pub trait ByteElement: Copy {
    /// Wrap a raw byte
    fn from_u8(byte: u8) -> Self;

    /// Unwrap to the raw byte
    fn to_u8(self) -> u8;
}

/// A byte element whose type fixes the buffer's byte order
pub trait TaggedByte: ByteElement {
    /// Byte order implied by the element type
    const ENDIANNESS: Endianness;
}

/// Opaque byte: a value with no numeric meaning of its own
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Octet(pub u8);

/// One-byte unsigned integer from a little-endian buffer
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LittleUint8(u8);

/// One-byte unsigned integer from a big-endian buffer
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BigUint8(u8);

impl LittleUint8 {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl BigUint8 {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl ByteElement for u8 {
    fn from_u8(byte: u8) -> Self {
        byte
    }

    fn to_u8(self) -> u8 {
        self
    }
}

impl ByteElement for Octet {
    fn from_u8(byte: u8) -> Self {
        Octet(byte)
    }

    fn to_u8(self) -> u8 {
        self.0
    }
}

impl ByteElement for LittleUint8 {
    fn from_u8(byte: u8) -> Self {
        LittleUint8(byte)
    }

    fn to_u8(self) -> u8 {
        self.0
    }
}

impl ByteElement for BigUint8 {
    fn from_u8(byte: u8) -> Self {
        BigUint8(byte)
    }

    fn to_u8(self) -> u8 {
        self.0
    }
}

impl TaggedByte for LittleUint8 {
    const ENDIANNESS: Endianness = Endianness::Little;
}

impl TaggedByte for BigUint8 {
    const ENDIANNESS: Endianness = Endianness::Big;
}

impl From<u8> for Octet {
    fn from(byte: u8) -> Self {
        Octet(byte)
    }
}

impl From<Octet> for u8 {
    fn from(octet: Octet) -> Self {
        octet.0
    }
}

impl From<u8> for LittleUint8 {
    fn from(byte: u8) -> Self {
        LittleUint8(byte)
    }
}

impl From<u8> for BigUint8 {
    fn from(byte: u8) -> Self {
        BigUint8(byte)
    }
}
