//! Fixed-point approximation of the binary scale of a power of ten.
//!
//! `10^e = 2^e * 5^e` and `5^e = 2^(e * log2(5))`, so a power of ten is a
//! power of two times `2^f` for the fractional part `f` of `e * log2(5)`.
//! The fraction is recovered from a truncated fixed-point constant, and
//! `2^f` from a minimax polynomial. Both steps carry a known error, which
//! is turned into a bracket guaranteed to contain the true coefficient.

use super::num::{Float, Word};

// POLYNOMIALS

/// Remez fit of `2^x - 1` (or `2^-x`) over `[0, 0.5]`, in fixed point.
///
/// Coefficients are scaled by `2^BITS` and listed from the highest degree
/// down to degree one. The constant term is kept separately, already
/// reduced modulo `2^BITS`, since `1.0` itself does not fit in the word.
#[derive(Copy, Clone, Debug)]
pub struct Polynomial<W: 'static> {
    pub(crate) coefficients: &'static [W],
    pub(crate) constant: W,
    /// Evaluate at `-x`.
    pub(crate) negated: bool,
    /// Sup-norm error of the fit and of Horner evaluation, rounded up to
    /// whole units in the last place.
    pub(crate) norm: W,
    /// Maximal change of the function across one unit of its argument,
    /// rounded up. Covers the gap between the two argument candidates.
    pub(crate) diff: W,
}

impl<W: Word> Polynomial<W> {
    /// Horner evaluation in fixed point.
    #[inline]
    pub(crate) fn evaluate(&self, x: W) -> W {
        let mut approx = W::ZERO;
        for &c in self.coefficients {
            let term = c.wrapping_add(approx).mul_hi(x);
            approx = if self.negated {
                term.wrapping_neg()
            } else {
                term
            };
        }
        approx.wrapping_add(self.constant)
    }

    /// Interval around `evaluate(x)` that contains the true function value
    /// for any argument in `[x, x + 1ulp]` (positive branch) or
    /// `[x - 1ulp, x]` (negative branch).
    #[inline]
    pub(crate) fn bracket(&self, x: W) -> (W, W) {
        let e = self.evaluate(x);
        (
            e.saturating_sub(self.norm),
            e.wrapping_add(self.norm).wrapping_add(self.diff),
        )
    }
}

// Sollya: remez(2^x, 10, [0;0.5]), supnorm 2^-64.
pub(crate) const EXP64_POS: Polynomial<u64> = Polynomial {
    coefficients: &[
        0x000000240f7385cf,
        0x000001ae189374a9,
        0x00001630cfccd8b0,
        0x0000ffe3f8fcc2be,
        0x000a1849231599e0,
        0x005761ff8619c241,
        0x0276556df9e057dc,
        0x0e35846b8226d4b6,
        0x3d7f7bff058c732a,
        0xb17217f7d1cf7562,
    ],
    constant: 2,
    negated: false,
    // ceil(~2.27) == 3.
    norm: 3,
    // ceil(~2.74) == 3.
    diff: 3,
};

// Sollya: remez(2^-x, 10, [0;0.5]), supnorm 2^-64.
pub(crate) const EXP64_NEG: Polynomial<u64> = Polynomial {
    coefficients: &[
        0x000000197f9f2cf6,
        0x000001af9dcd1e57,
        0x000016285b20389a,
        0x0000ffe47c526796,
        0x000a1848312c5dfa,
        0x005761ff8c9de4a9,
        0x0276556df56a7024,
        0x0e35846b82328319,
        0x3d7f7bff058a2901,
        0xb17217f7d1cf76a1,
    ],
    constant: 2u64.wrapping_neg(),
    negated: true,
    // ceil(~1.60) == 2.
    norm: 2,
    // ceil(~1.36) == 2.
    diff: 2,
};

// Sollya: remez(2^x, 5, [0;0.5]), supnorm 2^-32.
pub(crate) const EXP32_POS: Polynomial<u32> = Polynomial {
    coefficients: &[0x0068109f, 0x026ca46f, 0x0e3812af, 0x3d7f2e74, 0xb1721b52],
    constant: 7u32.wrapping_neg(),
    negated: false,
    // ceil(~6.00) == 7, one ulp of headroom over the measured norm.
    norm: 7,
    // ceil(~1.94) == 2.
    diff: 2,
};

// Sollya: remez(2^-x, 5, [0;0.5]), supnorm 2^-32.
pub(crate) const EXP32_NEG: Polynomial<u32> = Polynomial {
    coefficients: &[0x004995c4, 0x026ed2ac, 0x0e339a87, 0x3d7f433e, 0xb172158e],
    constant: 5u32.wrapping_neg(),
    negated: true,
    // ceil(~4.24) == 5.
    norm: 5,
    // ceil(~0.72) == 1.
    diff: 1,
};

// NORMALIZE

/// Split `n * frac(log2(5))` into its integer part and a bracketing pair
/// for the fraction, `(nat, lo, lo + 1)`.
#[inline]
pub(crate) fn normalize<F: Float>(n: F::Word) -> (F::Word, F::Word, F::Word) {
    let [c0, c1] = F::LOG2_5;
    let lo = c1.mul_hi(n);
    let (hi, md) = c0.mul_wide(n);
    let (lo, carry) = md.overflowing_add(lo);
    let one = <F::Word as Word>::ONE;
    let nat = if carry { hi.wrapping_add(one) } else { hi };
    (nat, lo, lo.wrapping_add(one))
}

// BRACKET

/// Bound interval for the coefficient of a power of ten.
///
/// `10^e` lies in `[lo, hi] * 2^(exp - BITS)` when `implicit_one` is
/// false, and in `[2^BITS + lo, 2^BITS + hi] * 2^(exp - BITS)` otherwise.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Bracket<W> {
    pub lo: W,
    pub hi: W,
    pub exp: i32,
    pub implicit_one: bool,
}

/// Approximate `10^exp10` for `|exp10|` within the clamped scanner range.
pub(crate) fn power_of_ten<F: Float>(exp10: i32) -> Bracket<F::Word> {
    let abs = exp10.unsigned_abs();
    let (nat, mut lo, mut hi) = normalize::<F>(<F::Word as Word>::from_u64(abs as u64));
    let mut nat = nat.as_u64() as i32;

    // Keep the polynomial argument in [0, 0.5].
    let upper = lo >> (<F::Word as Word>::BITS - 1) == <F::Word as Word>::ONE;
    if upper {
        nat += 1;
        lo = lo.wrapping_neg();
        hi = hi.wrapping_neg();
    }

    let mut exp = exp10 * 3;
    if exp10 > 0 {
        exp += nat;
    } else {
        exp -= nat;
    }

    let (mn, mx) = if lo < hi { (lo, hi) } else { (hi, lo) };
    let implicit_one = upper == (exp10 < 0);
    // Both formats evaluate the decreasing branch at the upper argument
    // candidate; the true value then lies at most `diff` above it.
    let (lo, hi) = if implicit_one {
        F::EXP_POS.bracket(mn)
    } else {
        F::EXP_NEG.bracket(mx)
    };

    Bracket {
        lo,
        hi,
        exp,
        implicit_one,
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_test() {
        assert_eq!(normalize::<f64>(0), (0, 0, 1));
        assert_eq!(
            normalize::<f64>(1),
            (0, 0x5269e12f346e2bf9, 0x5269e12f346e2bfa)
        );
        // 10 * 0.3219... = 3.219...
        assert_eq!(normalize::<f64>(10).0, 3);
        assert_eq!(normalize::<f32>(10).0, 3);
        assert_eq!(normalize::<f32>(348).0, 112);
        assert_eq!(normalize::<f64>(348).0, 112);
    }

    #[test]
    fn polynomial_endpoints_test() {
        // 2^0 - 1 and 2^-0 (which wraps to zero).
        assert_eq!(EXP64_POS.evaluate(0), 2);
        assert_eq!(EXP64_NEG.evaluate(0), u64::MAX - 1);
        assert_eq!(EXP32_POS.evaluate(0), u32::MAX - 6);

        // 2^0.5 - 1 = 0.41421356...
        let half = EXP64_POS.evaluate(1 << 63);
        assert!(half.abs_diff(0x6a09e667f3bcc908) <= 4);
        // 2^-0.5 = 0.70710678...
        let half = EXP64_NEG.evaluate(1 << 63);
        assert!(half.abs_diff(0xb504f333f9de6484) <= 4);
    }

    fn check_power_of_ten<F: Float>(exp10: i32) {
        let bracket = power_of_ten::<F>(exp10);
        let bits = <F::Word as Word>::BITS as i32;
        let lo = bracket.lo.as_u64() as f64;
        let hi = bracket.hi.as_u64() as f64;
        let one = if bracket.implicit_one {
            2f64.powi(bits)
        } else {
            0.0
        };

        assert!(bracket.lo <= bracket.hi, "{}: {:?}", exp10, bracket);
        assert!(
            bracket.hi.as_u64() - bracket.lo.as_u64() <= 16,
            "{}: {:?}",
            exp10,
            bracket
        );

        // log10 of the approximated coefficient must match exp10.
        let scale = (bracket.exp - bits) as f64 * 2f64.log10();
        let low = (one + lo).log10() + scale;
        let high = (one + hi).log10() + scale;
        let e = exp10 as f64;
        assert!((low - e).abs() < 1e-8, "{}: {} {}", exp10, low, high);
        assert!((high - e).abs() < 1e-8, "{}: {} {}", exp10, low, high);
    }

    #[test]
    fn power_of_ten_test() {
        for exp10 in -348..=348 {
            if exp10 != 0 {
                check_power_of_ten::<f64>(exp10);
                check_power_of_ten::<f32>(exp10);
            }
        }
    }

    #[test]
    fn power_of_ten_zero_test() {
        // 10^0 is exactly 2^0 * (1 + 0).
        let bracket = power_of_ten::<f64>(0);
        assert!(bracket.implicit_one);
        assert_eq!(bracket.exp, 0);
        assert_eq!(bracket.lo, 0);
        assert!(bracket.hi <= 8);
    }
}
