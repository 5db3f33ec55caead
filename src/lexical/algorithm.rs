//! Algorithms to efficiently convert decimal literals to floats.

use super::exact::slow_path;
use super::exponent::power_of_ten;
use super::num::*;
use super::rounding::{pack, Rounded};
use super::scan::{Decimal, Result};

// FAST
// ----

/// Convert a mantissa and power of ten that are both exact in `F`.
///
/// A single IEEE multiplication or division then rounds correctly.
pub(crate) fn fast_path<F: Float>(mantissa: F::Word, exponent: i32) -> Option<F> {
    let index = exponent.unsigned_abs() as usize;
    if index >= F::POW10.len() {
        return None;
    }
    if mantissa >> (F::MANTISSA_SIZE + 1) != <F::Word as Word>::ZERO {
        // Would require truncation of the mantissa.
        return None;
    }

    let float = F::from_word(mantissa);
    Some(if exponent >= 0 {
        float * F::POW10[index]
    } else {
        float / F::POW10[index]
    })
}

// MODERATE
// --------

/// Round `mantissa * 10^exponent` from a bracket of the power of ten.
///
/// Both ends of the product interval are rounded; if they disagree, or the
/// interval straddles a halfway point, returns None.
pub(crate) fn moderate_path<F, W>(
    negative: bool,
    mantissa: W,
    exponent: i32,
    truncated: bool,
) -> Option<Rounded>
where
    F: Float<Word = W>,
    W: Word,
{
    debug_assert!(mantissa != W::ZERO);
    let bits = W::BITS;
    let prec = F::MANTISSA_SIZE;
    let power = power_of_ten::<F>(exponent);
    let mut exp = power.exp;

    // Left-justify. Dropped digits could add up to one unit of the
    // mantissa, which widens the upper end.
    let zeros = mantissa.leading_zeros();
    let lom = mantissa << zeros;
    let him = if truncated {
        lom.wrapping_add(W::ONE << zeros)
    } else {
        lom
    };
    exp -= zeros as i32;

    let mut lop = lom.mul_hi(power.lo);
    let mut hip = him.mul_hi(power.hi).wrapping_add(W::ONE);
    if power.implicit_one {
        // Add the `2^BITS * m` term, keeping its carry bit.
        let (los, loc) = lop.overflowing_add(lom);
        let (his, hic) = hip.overflowing_add(him);
        let carry = (loc | hic) as u32;
        lop = los >> carry | W::from_u64(loc as u64) << (bits - 1);
        hip = his >> carry | W::from_u64(hic as u64) << (bits - 1);
        exp += carry as i32;
    }

    // Normalize.
    let flip = ((!lop & !hip) >> (bits - 1)).as_u64() as u32;
    lop = lop << flip;
    hip = hip << flip;
    exp += F::EXPONENT_BIAS + (bits - 1) as i32 - flip as i32;

    // Denormal.
    if exp <= 0 {
        let shift = (1 - exp) as u32;
        lop = lop.shr_or_zero(shift);
        hip = hip.shr_or_zero(shift);
        exp = 0;
    }

    // Round both ends half-up; the bits below the round bit decide later
    // whether that was right.
    let lor = lop << (prec + 1);
    let hir = hip << (prec + 1);
    let mut lo = (lop >> (bits - 1 - prec)).as_u64() + (lor >> (bits - 1)).as_u64();
    let hi = (hip >> (bits - 1 - prec)).as_u64() + (hir >> (bits - 1)).as_u64();

    // Rounded up into the smallest normal.
    if exp == 0 && lo >> prec != 0 {
        exp = 1;
    }

    let carry = lo >> (prec + 1);
    lo >>= carry;
    let hi = hi >> carry;
    exp += carry as i32;

    let half = W::ONE << (bits - 1);
    if (lor <= half && hir > half) || hi != lo {
        return None;
    }
    Some(pack::<F>(negative, exp, lo))
}

// CONVERT
// -------

/// Convert a scanned decimal literal, from the fast path down to the exact
/// fallback. `input` is the whole text the literal was scanned from.
pub(crate) fn to_native<F: Float>(input: &[u8], decimal: &Decimal<F::Word>) -> Result<Rounded> {
    let negative = decimal.negative;
    if decimal.mantissa == <F::Word as Word>::ZERO {
        return Ok(Rounded::zero::<F>(negative));
    }

    if !decimal.truncated {
        if let Some(float) = fast_path::<F>(decimal.mantissa, decimal.exponent) {
            let float = if negative { -float } else { float };
            return Ok(Rounded {
                bits: float.to_bits(),
                overflow: false,
            });
        }
    }

    if let Some(rounded) =
        moderate_path::<F, _>(negative, decimal.mantissa, decimal.exponent, decimal.truncated)
    {
        return Ok(rounded);
    }

    slow_path::<F>(&input[decimal.start..decimal.read], negative)
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::super::scan::{scan, Literal};
    use super::*;
    use std::format;
    use std::string::String;

    fn decimal<F: Float>(input: &str) -> Decimal<F::Word> {
        match scan::<F>(input.as_bytes()) {
            Ok(Literal::Decimal(decimal)) => decimal,
            other => panic!("{:?}: {:?}", input, other),
        }
    }

    fn moderate64(mantissa: u64, exponent: i32, truncated: bool) -> Option<f64> {
        let rounded = moderate_path::<f64, _>(false, mantissa, exponent, truncated)?;
        Some(f64::from_bits(rounded.bits))
    }

    #[test]
    fn fast_path_test() {
        assert_eq!(fast_path::<f64>(123, -2), Some(1.23));
        assert_eq!(fast_path::<f64>(1, 22), Some(1e22));
        assert_eq!(fast_path::<f64>(1, 23), None);
        assert_eq!(fast_path::<f64>((1 << 53) - 1, 0), Some(9007199254740991.0));
        assert_eq!(fast_path::<f64>(1 << 53, 0), None);
        assert_eq!(fast_path::<f32>(1, -10), Some(1e-10));
        assert_eq!(fast_path::<f32>(1, 11), None);
        assert_eq!(fast_path::<f32>(1 << 25, 0), None);
    }

    #[test]
    fn moderate_path_test() {
        assert_eq!(moderate64(1, 0, false), Some(1.0));
        assert_eq!(moderate64(17976931348623157, 292, false), Some(f64::MAX));
        assert_eq!(moderate64(22250738585072014, -324, false), Some(f64::MIN_POSITIVE));
        assert_eq!(moderate64(12345678901234567890, -19, true), Some(1.2345678901234567));

        let rounded = moderate_path::<f64, _>(true, 1, 348, false).unwrap();
        assert!(rounded.overflow);
        assert_eq!(f64::from_bits(rounded.bits), f64::NEG_INFINITY);

        let rounded = moderate_path::<f32, _>(false, 34028236, 31, false).unwrap();
        assert!(rounded.overflow);
    }

    #[test]
    fn moderate_path_halfway_test() {
        // Exact ties need the exact fallback.
        assert_eq!(moderate64(9007199254740993, 0, false), None);
        let halfway = decimal::<f64>("2.4703282292062327208828439643411068618252990130716238221279284125033775363510437593264991818081799618989828234772285886546332835517796989819938739800539093906315035659515570226392290858392449105184435931802849936536152500319370457678249219365623669863658480757001585769269903706311928279558551332927834338409351978015531246597263579574622766465272827220056374006485499977096599470454020828166226237857393450736339007967761930577506740176324673600968951340535537458516661134223766678604162159680461914467291840300530057530849048765391711386591646239524912623653881879636239373280423891018672348497668235089863388587925628302755995657524455507255189313690836254779186948667994968324049705821028513185451396213837722826145437693412532098591327667236328125e-324");
        assert_eq!(
            moderate_path::<f64, _>(false, halfway.mantissa, halfway.exponent, halfway.truncated),
            None
        );
    }

    fn check_agrees<F: Float>(input: &str) {
        let decimal = decimal::<F>(input);
        if decimal.mantissa == <F::Word as Word>::ZERO {
            return;
        }
        if let Some(rounded) =
            moderate_path::<F, _>(false, decimal.mantissa, decimal.exponent, decimal.truncated)
        {
            let exact = slow_path::<F>(&input.as_bytes()[decimal.start..decimal.read], false).unwrap();
            assert_eq!(rounded, exact, "{}", input);
        }
    }

    #[test]
    fn moderate_agrees_with_exact_test() {
        let mut seed = 0x9E3779B97F4A7C15u64;
        for _ in 0..2000 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let digits = (seed % 25) as usize + 1;
            let mantissa: String = format!("{:025}", seed % 10u64.pow(19))
                .chars()
                .take(digits)
                .collect();
            let exponent = (seed >> 40) as i32 % 700 - 350;
            let input = format!("{}e{}", mantissa, exponent);
            check_agrees::<f64>(&input);
            check_agrees::<f32>(&input);
        }
    }

    fn check_fast_agrees<F: Float>(mantissa: u64, exponent: i32) {
        let word = <F::Word as Word>::from_u64(mantissa);
        let float = match fast_path::<F>(word, exponent) {
            Some(float) => float,
            None => panic!("{}e{} not on the fast path", mantissa, exponent),
        };
        let input = format!("{}e{}", mantissa, exponent);
        let exact = slow_path::<F>(input.as_bytes(), false).unwrap();
        assert_eq!(float.to_bits(), exact.bits, "{}", input);
    }

    #[test]
    fn fast_agrees_with_exact_test() {
        let mut seed = 0x2545F4914F6CDD1Du64;
        for _ in 0..2000 {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            let mantissa = (seed >> 11) | 1;
            let exponent = (seed % 45) as i32 - 22;
            check_fast_agrees::<f64>(mantissa, exponent);

            let mantissa = (seed >> 40) | 1;
            let exponent = (seed % 21) as i32 - 10;
            check_fast_agrees::<f32>(mantissa, exponent);
        }
    }

    #[test]
    fn to_native_test() {
        let input = b"-0.0e5";
        let zero = decimal::<f64>("-0.0e5");
        let rounded = to_native::<f64>(input, &zero).unwrap();
        assert_eq!(rounded.bits, (-0.0f64).to_bits());

        let input = "1.00000000000000011102230246251565404236316680908203125";
        let rounded = to_native::<f64>(input.as_bytes(), &decimal::<f64>(input)).unwrap();
        assert_eq!(f64::from_bits(rounded.bits), 1.0);

        let input = "1.00000000000000011102230246251565404236316680908203126";
        let rounded = to_native::<f64>(input.as_bytes(), &decimal::<f64>(input)).unwrap();
        assert_eq!(f64::from_bits(rounded.bits), 1.0000000000000002);
    }
}
