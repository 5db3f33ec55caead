//! Utilities for Rust numbers.

use super::exponent::{self, Polynomial};
use crate::lib::{fmt, ops};

/// Precalculated values of radix**i for i in range [0, arr.len()-1].
/// Each value can be **exactly** represented as that type.
const F32_POW10: [f32; 11] = [
    1.0,
    10.0,
    100.0,
    1000.0,
    10000.0,
    100000.0,
    1000000.0,
    10000000.0,
    100000000.0,
    1000000000.0,
    10000000000.0,
];

/// Precalculated values of radix**i for i in range [0, arr.len()-1].
/// Each value can be **exactly** represented as that type.
const F64_POW10: [f64; 23] = [
    1.0,
    10.0,
    100.0,
    1000.0,
    10000.0,
    100000.0,
    1000000.0,
    10000000.0,
    100000000.0,
    1000000000.0,
    10000000000.0,
    100000000000.0,
    1000000000000.0,
    10000000000000.0,
    100000000000000.0,
    1000000000000000.0,
    10000000000000000.0,
    100000000000000000.0,
    1000000000000000000.0,
    10000000000000000000.0,
    100000000000000000000.0,
    1000000000000000000000.0,
    10000000000000000000000.0,
];

// WORD

/// Fixed-width unsigned word used by the scanner and the interval engine.
///
/// Every fixed-point quantity of a format lives in one of these: the
/// mantissa accumulator, the fractional constants and the polynomial
/// coefficients.
pub trait Word:
    'static
    + Copy
    + Ord
    + fmt::Debug
    + ops::Add<Output = Self>
    + ops::Mul<Output = Self>
    + ops::BitAnd<Output = Self>
    + ops::BitOr<Output = Self>
    + ops::Not<Output = Self>
    + ops::Shl<u32, Output = Self>
    + ops::Shr<u32, Output = Self>
{
    const BITS: u32;
    const ZERO: Self;
    const ONE: Self;

    /// Truncating conversion from `u64`.
    fn from_u64(x: u64) -> Self;
    fn as_u64(self) -> u64;
    fn leading_zeros(self) -> u32;

    /// Full product, as `(hi, lo)` words.
    fn mul_wide(self, y: Self) -> (Self, Self);

    fn overflowing_add(self, y: Self) -> (Self, bool);
    fn wrapping_add(self, y: Self) -> Self;
    fn wrapping_sub(self, y: Self) -> Self;
    fn wrapping_neg(self) -> Self;
    fn saturating_sub(self, y: Self) -> Self;

    /// High word of the full product.
    #[inline]
    fn mul_hi(self, y: Self) -> Self {
        self.mul_wide(y).0
    }

    /// Shift right, yielding zero once the whole word is shifted out.
    #[inline]
    fn shr_or_zero(self, n: u32) -> Self {
        if n >= Self::BITS {
            Self::ZERO
        } else {
            self >> n
        }
    }
}

macro_rules! word_impl {
    ($($t:ty, $wide:ty);*) => ($(
        impl Word for $t {
            const BITS: u32 = <$t>::BITS;
            const ZERO: $t = 0;
            const ONE: $t = 1;

            #[inline]
            fn from_u64(x: u64) -> $t {
                x as $t
            }

            #[inline]
            fn as_u64(self) -> u64 {
                self as u64
            }

            #[inline]
            fn leading_zeros(self) -> u32 {
                <$t>::leading_zeros(self)
            }

            #[inline]
            fn mul_wide(self, y: $t) -> ($t, $t) {
                let z = self as $wide * y as $wide;
                ((z >> <$t>::BITS) as $t, z as $t)
            }

            #[inline]
            fn overflowing_add(self, y: $t) -> ($t, bool) {
                <$t>::overflowing_add(self, y)
            }

            #[inline]
            fn wrapping_add(self, y: $t) -> $t {
                <$t>::wrapping_add(self, y)
            }

            #[inline]
            fn wrapping_sub(self, y: $t) -> $t {
                <$t>::wrapping_sub(self, y)
            }

            #[inline]
            fn wrapping_neg(self) -> $t {
                <$t>::wrapping_neg(self)
            }

            #[inline]
            fn saturating_sub(self, y: $t) -> $t {
                <$t>::saturating_sub(self, y)
            }
        }
    )*)
}

word_impl! { u32, u64; u64, u128 }

// FLOAT

/// IEEE-754 binary format that literals can be parsed into.
///
/// This trait is sealed and implemented for `f32` and `f64` only. The
/// associated items describe the format to the conversion engine.
///
/// ```
/// fn parse_pair<F: refloat::Float>(a: &str, b: &str) -> refloat::Result<(F, F)> {
///     Ok((refloat::from_str(a)?, refloat::from_str(b)?))
/// }
///
/// assert_eq!(parse_pair::<f32>("1.5", "0x1p-2").unwrap(), (1.5, 0.25));
/// ```
pub trait Float:
    private::Sealed
    + 'static
    + Copy
    + PartialEq
    + fmt::Debug
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::Neg<Output = Self>
{
    /// Accumulator and fixed-point word of the format.
    type Word: Word;

    /// Literal zero.
    const ZERO: Self;

    // LAYOUT

    /// Storage width in bits.
    const BITS: u32;
    /// Size of the significand (mantissa) without hidden bit.
    const MANTISSA_SIZE: u32;
    /// Bias of the exponent.
    const EXPONENT_BIAS: i32;
    /// Biased exponent code reserved for infinity and NaN.
    const MAX_EXPONENT: i32;
    /// Bitmask for the mantissa (fraction), excluding the hidden bit.
    const MANTISSA_MASK: u64;
    /// Positive infinity as bits.
    const INFINITY_BITS: u64;
    /// Canonical quiet NaN as bits.
    const NAN_BITS: u64;

    // SCANNING

    /// Once the mantissa reaches this value, one more decimal digit could
    /// overflow the accumulator.
    const DIGIT_LIMIT: Self::Word;

    /// Maximum number of significant digits that can influence rounding.
    ///
    /// We can exactly represent a float in radix `b` from radix 2 if
    /// `b` is divisible by 2. This is the exact number of digits required
    /// to exactly represent any halfway point between two floats:
    ///
    /// `−emin + p2 + ⌊(emin + 1) log(2, b) − log(1 − 2^(−p2), b)⌋`
    ///
    /// with emin = -126, p2 = 24 for f32 and emin = -1022, p2 = 53 for f64.
    const MAX_DIGITS: usize;

    // APPROXIMATION

    /// Powers of ten that are exactly representable, from 10^0 upwards.
    const POW10: &'static [Self];
    /// Fractional part of log2(5), as two words, most significant first.
    const LOG2_5: [Self::Word; 2];
    /// Approximation of `2^x - 1` on `[0, 0.5]`.
    const EXP_POS: Polynomial<Self::Word>;
    /// Approximation of `2^-x` on `[0, 0.5]`.
    const EXP_NEG: Polynomial<Self::Word>;

    /// Exact conversion of a mantissa below `2^(MANTISSA_SIZE + 1)`.
    fn from_word(w: Self::Word) -> Self;
    fn from_bits(u: u64) -> Self;
    fn to_bits(self) -> u64;
}

// Prevent users from implementing the Float trait.
mod private {
    pub trait Sealed {}
}

impl private::Sealed for f32 {}
impl private::Sealed for f64 {}

impl Float for f32 {
    type Word = u32;

    const ZERO: f32 = 0.0;
    const BITS: u32 = 32;
    const MANTISSA_SIZE: u32 = 23;
    const EXPONENT_BIAS: i32 = 127;
    const MAX_EXPONENT: i32 = 0xFF;
    const MANTISSA_MASK: u64 = 0x007FFFFF;
    const INFINITY_BITS: u64 = 0x7F800000;
    const NAN_BITS: u64 = 0x7FC00000;
    const DIGIT_LIMIT: u32 = 0x19999999;
    const MAX_DIGITS: usize = 114;
    const POW10: &'static [f32] = &F32_POW10;
    const LOG2_5: [u32; 2] = [0x5269e12f, 0x346e2bf9];
    const EXP_POS: Polynomial<u32> = exponent::EXP32_POS;
    const EXP_NEG: Polynomial<u32> = exponent::EXP32_NEG;

    #[inline]
    fn from_word(w: u32) -> f32 {
        w as f32
    }

    #[inline]
    fn from_bits(u: u64) -> f32 {
        f32::from_bits(u as u32)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f32::to_bits(self) as u64
    }
}

impl Float for f64 {
    type Word = u64;

    const ZERO: f64 = 0.0;
    const BITS: u32 = 64;
    const MANTISSA_SIZE: u32 = 52;
    const EXPONENT_BIAS: i32 = 1023;
    const MAX_EXPONENT: i32 = 0x7FF;
    const MANTISSA_MASK: u64 = 0x000FFFFFFFFFFFFF;
    const INFINITY_BITS: u64 = 0x7FF0000000000000;
    const NAN_BITS: u64 = 0x7FF8000000000000;
    const DIGIT_LIMIT: u64 = 0x1999999999999999;
    const MAX_DIGITS: usize = 769;
    const POW10: &'static [f64] = &F64_POW10;
    const LOG2_5: [u64; 2] = [0x5269e12f346e2bf9, 0x24afdbfd36bf6d33];
    const EXP_POS: Polynomial<u64> = exponent::EXP64_POS;
    const EXP_NEG: Polynomial<u64> = exponent::EXP64_NEG;

    #[inline]
    fn from_word(w: u64) -> f64 {
        w as f64
    }

    #[inline]
    fn from_bits(u: u64) -> f64 {
        f64::from_bits(u)
    }

    #[inline]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }
}

// TEST
// ----
