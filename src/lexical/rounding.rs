//! Defines rounding schemes for floating-point numbers.

use super::num::Float;

/// Packed IEEE-754 bit pattern produced by the conversion engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Rounded {
    pub bits: u64,
    /// The magnitude was rounded to infinity.
    pub overflow: bool,
}

impl Rounded {
    #[inline]
    pub(crate) fn zero<F: Float>(negative: bool) -> Self {
        Rounded {
            bits: sign_bit::<F>(negative),
            overflow: false,
        }
    }

    #[inline]
    pub(crate) fn infinity<F: Float>(negative: bool) -> Self {
        Rounded {
            bits: F::INFINITY_BITS | sign_bit::<F>(negative),
            overflow: true,
        }
    }
}

#[inline]
fn sign_bit<F: Float>(negative: bool) -> u64 {
    (negative as u64) << (F::BITS - 1)
}

// PACK

/// Pack a biased exponent and a mantissa (hidden bit included) into bits.
///
/// An exponent at the reserved code overflows to infinity.
#[inline]
pub(crate) fn pack<F: Float>(negative: bool, exp: i32, mant: u64) -> Rounded {
    if exp >= F::MAX_EXPONENT {
        return Rounded::infinity::<F>(negative);
    }
    debug_assert!(exp >= 0);
    Rounded {
        bits: (mant & F::MANTISSA_MASK)
            | ((exp as u64) << F::MANTISSA_SIZE)
            | sign_bit::<F>(negative),
        overflow: false,
    }
}

// SHIFT

/// Shift right, reporting whether any non-zero bits were shifted out.
#[inline]
pub(crate) fn shr_sticky(mant: u64, n: u32) -> (u64, bool) {
    if n >= 64 {
        (0, mant != 0)
    } else {
        (mant >> n, mant & ((1 << n) - 1) != 0)
    }
}

// NEAREST ROUNDING

/// Round `mant * 2^exp` to the nearest float, ties to even.
///
/// `truncated` tells that the true value is strictly above `mant * 2^exp`
/// because non-zero bits below `mant` were discarded earlier.
pub(crate) fn round_nearest_tie_even<F: Float>(
    negative: bool,
    mut mant: u64,
    mut exp: i32,
    mut truncated: bool,
) -> Rounded {
    debug_assert!(mant != 0);
    let prec = F::MANTISSA_SIZE as i32;

    // Keep the hidden bit, the mantissa and one round bit.
    let log = (64 - mant.leading_zeros()) as i32 - prec - 2;
    exp += log + F::EXPONENT_BIAS + prec + 1;
    if log > 0 {
        let (m, t) = shr_sticky(mant, log as u32);
        mant = m;
        truncated |= t;
    } else {
        mant <<= -log;
    }

    // Denormal.
    if exp <= 0 {
        let (m, t) = shr_sticky(mant, (1 - exp) as u32);
        mant = m;
        truncated |= t;
        exp = 0;
    }

    let mut round = mant & 1;
    if round != 0 && !truncated {
        round &= mant >> 1;
    }
    mant = (mant + round) >> 1;

    // Rounded up into the smallest normal.
    if exp == 0 && mant >> prec != 0 {
        exp = 1;
    }

    // Rounded up into the next binade.
    let carry = mant >> (prec + 1);
    mant >>= carry;
    exp += carry as i32;

    pack::<F>(negative, exp, mant)
}

// TESTS
// -----
