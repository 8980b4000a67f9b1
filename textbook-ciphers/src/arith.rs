//! Modular arithmetic over `BigUint`

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{CipherError, Result};

/// Computes `base^exp mod modulus` with square-and-multiply.
///
/// A modulus of 1 yields 0. The modulus must not be zero.
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;

    for i in 0..exp.bits() {
        if exp.bit(i) {
            result = (result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
    }

    result
}

/// Computes `value^-1 mod modulus` with the extended Euclidean algorithm.
///
/// For prime moduli every non-zero residue is invertible; primality is not checked.
///
/// # Errors
///
/// [`CipherError::NonInvertibleValue`] when `gcd(value, modulus) != 1`.
pub fn mod_inverse(value: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    let m = BigInt::from_biguint(Sign::Plus, modulus.clone());
    let (mut old_r, mut r) = (BigInt::from_biguint(Sign::Plus, value % modulus), m.clone());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());

    // Invariant: old_r ≡ old_s * value (mod modulus)
    while !r.is_zero() {
        let quotient = &old_r / &r;
        let next_r = &old_r - &quotient * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_s = &old_s - &quotient * &s;
        old_s = std::mem::replace(&mut s, next_s);
    }

    if !old_r.is_one() {
        return Err(CipherError::NonInvertibleValue {
            value: value.clone(),
            modulus: modulus.clone(),
        });
    }

    // mod_floor keeps the representative in 0..modulus
    old_s
        .mod_floor(&m)
        .to_biguint()
        .ok_or_else(|| CipherError::NonInvertibleValue {
            value: value.clone(),
            modulus: modulus.clone(),
        })
}
