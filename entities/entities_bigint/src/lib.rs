//! Entities Layer: Big Integers
//!
//! Provides the arbitrary precision integer value used across the workspace:
//! - `BigNumber`, a signed big integer backed by `malachite`
//! - Unsigned magnitude import/export at 8-bit granularity
//! - Modular exponentiation with a canonical non-negative residue
//!
//! Byte buffers built on top of this type live in the infrastructure layer.

pub mod big;
pub mod powm;

pub use big::{BigNumber, ParseBigNumberError};
