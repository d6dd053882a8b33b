//! Modular Exponentiation
//!
//! Signed modular exponentiation over [`BigNumber`].
//!
//! `raw_powm` follows the truncated remainder convention of signed big integer
//! libraries: the residue takes the sign of `base^exponent`, so a negative base
//! with an odd exponent can yield a negative result. `powm` folds that back into
//! the canonical residue in `[0, |modulus|)`, which is what other ecosystems
//! (e.g. Java's `BigInteger::modPow`) return.

use log::trace;
use malachite::base::num::arithmetic::traits::{ModPow, Parity, UnsignedAbs};
use malachite::base::num::basic::traits::One;
use malachite::{Integer, Natural};

use crate::BigNumber;

impl BigNumber {
    /// Signed modular exponentiation: `self^exponent rem modulus`
    ///
    /// The result has the sign of `self^exponent` and magnitude below `|modulus|`.
    ///
    /// Returns None if the modulus is zero or the exponent is negative.
    pub fn raw_powm(&self, exponent: &Self, modulus: &Self) -> Option<Self> {
        if modulus.is_zero() || exponent.is_negative() {
            return None;
        }

        let m = modulus.magnitude();
        if m == Natural::ONE {
            return Some(Self::zero());
        }

        let base = self.magnitude() % &m;
        let e = exponent.as_integer().unsigned_abs();
        let residue = Integer::from(base.mod_pow(&e, &m));

        let negative = self.is_negative() && e.odd();
        Some(Self::from_integer(if negative { -residue } else { residue }))
    }

    /// Modular exponentiation with a canonical non-negative residue
    ///
    /// Computes `raw_powm` and adds `|modulus|` when the raw residue is
    /// negative, so the result always lies in `[0, |modulus|)`.
    ///
    /// Returns None if the modulus is zero or the exponent is negative.
    pub fn powm(&self, exponent: &Self, modulus: &Self) -> Option<Self> {
        let raw = self.raw_powm(exponent, modulus)?;
        if !raw.is_negative() {
            return Some(raw);
        }

        let corrected = raw.plus(&modulus.abs());
        trace!("powm: corrected negative residue {} to {}", raw, corrected);
        Some(corrected)
    }
}
