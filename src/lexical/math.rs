//! Building-blocks for arbitrary-precision math.
//!
//! Big integers are stored as little-endian limb buffers, so for
//! `vec![0, 1, 2, 3]`, `3` is the most significant limb. Every operation
//! leaves the buffer normalized: no trailing zero limbs, and zero is the
//! empty buffer.

use super::small_powers::*;
use crate::lib::{cmp, Vec};

// ALIASES
// -------

// A limb is the big-integer analogue of a decimal digit. 64-bit limbs are
// used where the target multiplies 64x64 into 128 bits natively; see
// build.rs.

#[cfg(limb_width_32)]
pub(crate) type Limb = u32;

#[cfg(limb_width_32)]
pub(crate) const POW5_LIMB: &[Limb] = &POW5_32;

#[cfg(limb_width_32)]
pub(crate) const POW10_LIMB: &[Limb] = &POW10_32;

#[cfg(limb_width_32)]
type Wide = u64;

#[cfg(limb_width_64)]
pub(crate) type Limb = u64;

#[cfg(limb_width_64)]
pub(crate) const POW5_LIMB: &[Limb] = &POW5_64;

#[cfg(limb_width_64)]
pub(crate) const POW10_LIMB: &[Limb] = &POW10_64;

#[cfg(limb_width_64)]
type Wide = u128;

const LIMB_BITS: usize = Limb::BITS as usize;

/// Split u64 into limbs, in little-endian order.
#[inline]
#[cfg(limb_width_32)]
fn split_u64(x: u64) -> [Limb; 2] {
    [x as Limb, (x >> 32) as Limb]
}

/// Split u64 into limbs, in little-endian order.
#[inline]
#[cfg(limb_width_64)]
fn split_u64(x: u64) -> [Limb; 1] {
    [x as Limb]
}

// HI64
// ----

/// Check if any limb below the top `rindex` limbs is non-zero.
#[inline]
fn nonzero(x: &[Limb], rindex: usize) -> bool {
    x[..x.len() - rindex].iter().any(|&x| x != 0)
}

/// Shift 64-bit integer to high 64-bits.
#[inline]
fn u64_to_hi64_1(r0: u64) -> (u64, bool) {
    debug_assert!(r0 != 0);
    (r0 << r0.leading_zeros(), false)
}

/// Shift 2 64-bit integers to high 64-bits.
#[inline]
fn u64_to_hi64_2(r0: u64, r1: u64) -> (u64, bool) {
    debug_assert!(r0 != 0);
    let ls = r0.leading_zeros();
    if ls == 0 {
        (r0, r1 != 0)
    } else {
        (r0 << ls | r1 >> (64 - ls), r1 << ls != 0)
    }
}

/// High 64 bits of a normalized buffer, left-aligned, and whether any
/// bit below them is set.
#[cfg(limb_width_32)]
fn hi64(x: &[Limb]) -> (u64, bool) {
    let top = |i: usize| x[x.len() - 1 - i] as u64;
    match x.len() {
        0 => (0, false),
        1 => u64_to_hi64_1(top(0)),
        2 => u64_to_hi64_1(top(0) << 32 | top(1)),
        _ => {
            let (v, n) = u64_to_hi64_2(top(0), top(1) << 32 | top(2));
            (v, n || nonzero(x, 3))
        }
    }
}

/// High 64 bits of a normalized buffer, left-aligned, and whether any
/// bit below them is set.
#[cfg(limb_width_64)]
fn hi64(x: &[Limb]) -> (u64, bool) {
    let top = |i: usize| x[x.len() - 1 - i];
    match x.len() {
        0 => (0, false),
        1 => u64_to_hi64_1(top(0)),
        _ => {
            let (v, n) = u64_to_hi64_2(top(0), top(1));
            (v, n || nonzero(x, 2))
        }
    }
}

// SCALAR
// ------

// Scalar-to-scalar operations, for building-blocks for arbitrary-precision
// operations.

mod scalar {
    use super::*;

    /// AddAssign two limbs, returning if overflow happens.
    #[inline]
    pub fn iadd(x: &mut Limb, y: Limb) -> bool {
        let (v, c) = x.overflowing_add(y);
        *x = v;
        c
    }

    /// SubAssign two limbs, returning if underflow happens.
    #[inline]
    pub fn isub(x: &mut Limb, y: Limb) -> bool {
        let (v, c) = x.overflowing_sub(y);
        *x = v;
        c
    }

    /// MulAssign with carry, returning the high limb.
    ///
    /// `MAX * MAX + MAX` still fits the wide type, so this cannot overflow.
    #[inline]
    pub fn imul(x: &mut Limb, y: Limb, carry: Limb) -> Limb {
        let z = *x as Wide * y as Wide + carry as Wide;
        *x = z as Limb;
        (z >> LIMB_BITS) as Limb
    }
}

// SMALL
// -----

// Large-to-small operations, to modify a big integer from a native scalar.

mod small {
    use super::*;

    /// AddAssign small integer to bigint, starting at limb `xstart`.
    #[inline]
    pub fn iadd_impl(x: &mut Vec<Limb>, y: Limb, xstart: usize) {
        if x.len() <= xstart {
            if y != 0 {
                x.push(y);
            }
            return;
        }

        let mut carry = scalar::iadd(&mut x[xstart], y);
        let mut index = xstart + 1;
        while carry && index < x.len() {
            carry = scalar::iadd(&mut x[index], 1);
            index += 1;
        }
        if carry {
            x.push(1);
        }
    }

    #[inline]
    pub fn iadd(x: &mut Vec<Limb>, y: Limb) {
        iadd_impl(x, y, 0);
    }

    /// SubAssign small integer from bigint, starting at limb `xstart`.
    ///
    /// Does not do overflowing subtraction.
    #[inline]
    pub fn isub_impl(x: &mut Vec<Limb>, y: Limb, xstart: usize) {
        debug_assert!(x.len() > xstart && (x[xstart] >= y || x.len() > xstart + 1));

        let mut carry = scalar::isub(&mut x[xstart], y);
        let mut index = xstart + 1;
        while carry && index < x.len() {
            carry = scalar::isub(&mut x[index], 1);
            index += 1;
        }
        normalize(x);
    }

    /// MulAssign small integer to bigint.
    #[inline]
    pub fn imul(x: &mut Vec<Limb>, y: Limb) {
        let mut carry: Limb = 0;
        for xi in x.iter_mut() {
            carry = scalar::imul(xi, y, carry);
        }
        if carry != 0 {
            x.push(carry);
        }
        if y == 0 {
            normalize(x);
        }
    }

    /// MulAssign by a power of 5, one largest single-limb power at a time.
    pub fn imul_pow5(x: &mut Vec<Limb>, n: u32) {
        let step = POW5_LIMB.len() - 1;
        let power = POW5_LIMB[step];
        let mut n = n as usize;
        while n >= step {
            imul(x, power);
            n -= step;
        }
        imul(x, POW5_LIMB[n]);
    }

    // BIT LENGTH

    /// Number of leading zero bits in the top limb.
    #[inline]
    pub fn leading_zeros(x: &[Limb]) -> usize {
        match x.last() {
            Some(top) => top.leading_zeros() as usize,
            None => 0,
        }
    }

    #[inline]
    pub fn bit_length(x: &[Limb]) -> usize {
        LIMB_BITS * x.len() - leading_zeros(x)
    }

    // SHL

    /// Shift-left bits inside the buffer, for `n < Limb::BITS`.
    #[inline]
    pub fn ishl_bits(x: &mut Vec<Limb>, n: usize) {
        debug_assert!(n < LIMB_BITS);
        if n == 0 {
            return;
        }

        // Each limb takes the bits shifted out of the limb below it.
        let rshift = LIMB_BITS - n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut() {
            let tmp = *xi;
            *xi = tmp << n | prev >> rshift;
            prev = tmp;
        }

        let carry = prev >> rshift;
        if carry != 0 {
            x.push(carry);
        }
    }

    /// Shift-left by `n` whole limbs.
    #[inline]
    pub fn ishl_limbs(x: &mut Vec<Limb>, n: usize) {
        if !x.is_empty() {
            x.resize(x.len() + n, 0);
            x.rotate_right(n);
        }
    }

    #[inline]
    pub fn ishl(x: &mut Vec<Limb>, n: usize) {
        ishl_bits(x, n % LIMB_BITS);
        ishl_limbs(x, n / LIMB_BITS);
    }

    // SHR

    /// Shift-right bits inside the buffer, for `n < Limb::BITS`, returning
    /// if any non-zero bit was shifted out.
    #[inline]
    pub fn ishr_bits(x: &mut Vec<Limb>, n: usize) -> bool {
        debug_assert!(n < LIMB_BITS);
        if n == 0 || x.is_empty() {
            return false;
        }

        // Each limb takes the bits shifted out of the limb above it.
        let lshift = LIMB_BITS - n;
        let mut prev: Limb = 0;
        for xi in x.iter_mut().rev() {
            let tmp = *xi;
            *xi = tmp >> n | prev << lshift;
            prev = tmp;
        }
        normalize(x);
        prev << lshift != 0
    }

    /// Shift-right by `n` whole limbs, returning if any dropped limb was
    /// non-zero.
    #[inline]
    pub fn ishr_limbs(x: &mut Vec<Limb>, n: usize) -> bool {
        if n >= x.len() {
            let nonzero = !x.is_empty();
            x.clear();
            return nonzero;
        }
        let nonzero = x[..n].iter().any(|&xi| xi != 0);
        x.copy_within(n.., 0);
        x.truncate(x.len() - n);
        nonzero
    }

    #[inline]
    pub fn ishr(x: &mut Vec<Limb>, n: usize) -> bool {
        let limbs = ishr_limbs(x, n / LIMB_BITS);
        let bits = ishr_bits(x, n % LIMB_BITS);
        limbs || bits
    }

    // NORMALIZE

    /// Pop any zero limbs from the top.
    #[inline]
    pub fn normalize(x: &mut Vec<Limb>) {
        while x.last() == Some(&0) {
            x.pop();
        }
    }
}

// LARGE
// -----

// Large-to-large operations, to modify a big integer from another.

mod large {
    use super::*;

    /// Compare `x` to `y`, in little-endian order.
    #[inline]
    pub fn compare(x: &[Limb], y: &[Limb]) -> cmp::Ordering {
        x.len()
            .cmp(&y.len())
            .then_with(|| x.iter().rev().cmp(y.iter().rev()))
    }

    #[inline]
    pub fn greater_equal(x: &[Limb], y: &[Limb]) -> bool {
        compare(x, y) != cmp::Ordering::Less
    }

    /// SubAssign bigint from a bigint at least as large.
    pub fn isub(x: &mut Vec<Limb>, y: &[Limb]) {
        debug_assert!(greater_equal(x, y));

        // Only one of the two subtractions per limb can underflow.
        let mut carry = false;
        for (xi, &yi) in x.iter_mut().zip(y) {
            let mut tmp = scalar::isub(xi, yi);
            if carry {
                tmp |= scalar::isub(xi, 1);
            }
            carry = tmp;
        }

        if carry {
            small::isub_impl(x, 1, y.len());
        } else {
            small::normalize(x);
        }
    }
}

// TRAITS
// ------

/// Shared operations for big integers.
///
/// These are deliberately not the standard operator traits: each one is
/// expensive and should be spelled out at the call site.
pub(crate) trait Math: Clone + Sized + Default {
    /// Get access to the underlying data.
    fn data(&self) -> &Vec<Limb>;

    /// Get access to the underlying data.
    fn data_mut(&mut self) -> &mut Vec<Limb>;

    #[inline]
    fn compare(&self, y: &Self) -> cmp::Ordering {
        large::compare(self.data(), y.data())
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.data().is_empty()
    }

    /// Get the high 64-bits, and if any bit below them is set.
    #[inline]
    fn hi64(&self) -> (u64, bool) {
        hi64(self.data())
    }

    #[inline]
    fn bit_length(&self) -> usize {
        small::bit_length(self.data())
    }

    #[inline]
    fn from_u64(x: u64) -> Self {
        let mut v = Self::default();
        v.data_mut().extend_from_slice(&split_u64(x));
        v.normalize();
        v
    }

    #[inline]
    fn normalize(&mut self) {
        small::normalize(self.data_mut());
    }

    #[inline]
    fn iadd_small(&mut self, y: Limb) {
        small::iadd(self.data_mut(), y);
    }

    #[inline]
    fn imul_small(&mut self, y: Limb) {
        small::imul(self.data_mut(), y);
    }

    #[inline]
    fn imul_pow5(&mut self, n: u32) {
        small::imul_pow5(self.data_mut(), n);
    }

    /// Shift-left the entire buffer n bits.
    #[inline]
    fn ishl(&mut self, n: usize) {
        small::ishl(self.data_mut(), n);
    }

    /// Shift-right the entire buffer n bits, returning if any non-zero bit
    /// was shifted out.
    #[inline]
    fn ishr(&mut self, n: usize) -> bool {
        small::ishr(self.data_mut(), n)
    }

    /// Divide in place by `y`, leaving the remainder, for a quotient known
    /// to fit in 64 bits.
    ///
    /// Plain shift-and-subtract: the quotient is found one bit at a time,
    /// from the top.
    fn quorem(&mut self, y: &Self) -> u64 {
        debug_assert!(!y.is_zero());
        let x_bits = self.bit_length();
        let y_bits = y.bit_length();
        if x_bits < y_bits {
            return 0;
        }
        let shift = x_bits - y_bits;
        debug_assert!(shift < 64);

        let mut divisor = y.clone();
        divisor.ishl(shift);
        let mut quotient = 0u64;
        for bit in (0..=shift).rev() {
            if self.compare(&divisor) != cmp::Ordering::Less {
                large::isub(self.data_mut(), divisor.data());
                quotient |= 1 << bit;
            }
            if bit != 0 {
                divisor.ishr(1);
            }
        }
        quotient
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexical::bignum::Bigint;

    #[cfg(limb_width_32)]
    fn from_u32(x: &[u32]) -> Vec<Limb> {
        x.to_vec()
    }

    #[cfg(limb_width_64)]
    fn from_u32(x: &[u32]) -> Vec<Limb> {
        x.chunks(2)
            .map(|xi| match *xi {
                [lo] => lo as u64,
                [lo, hi] => (hi as u64) << 32 | lo as u64,
                _ => unreachable!(),
            })
            .collect()
    }

    fn big(x: &[u32]) -> Bigint {
        Bigint { data: from_u32(x) }
    }

    #[test]
    fn compare_test() {
        assert_eq!(big(&[1]).compare(&big(&[2])), cmp::Ordering::Less);
        assert_eq!(big(&[2]).compare(&big(&[2])), cmp::Ordering::Equal);

        // Longer wins, whatever the limbs.
        assert_eq!(big(&[5, 1]).compare(&big(&[7])), cmp::Ordering::Greater);

        // Most significant limb decides.
        let x = big(&[0, 1, 9]);
        let y = big(&[4294967295, 0, 9]);
        assert_eq!(x.compare(&y), cmp::Ordering::Greater);
        assert_eq!(y.compare(&x), cmp::Ordering::Less);
    }

    #[test]
    fn hi64_test() {
        assert_eq!(Bigint::from_u64(0xA).hi64(), (0xA000000000000000, false));
        assert_eq!(
            Bigint::from_u64(0xA23456789A).hi64(),
            (0xA23456789A000000, false)
        );

        // 2^64 + 1 loses its low bit.
        let x = big(&[1, 0, 1]);
        assert_eq!(x.hi64(), (1 << 63, true));
        let x = big(&[0, 0, 0, 0, 0x80000000]);
        assert_eq!(x.hi64(), (1 << 63, false));
        let x = big(&[1, 0, 0, 0, 0x80000000]);
        assert_eq!(x.hi64(), (1 << 63, true));
    }

    #[test]
    fn bit_length_test() {
        assert_eq!(big(&[0, 0, 0, 1]).bit_length(), 97);
        assert_eq!(big(&[0, 0, 0, 3]).bit_length(), 98);
        assert_eq!(big(&[1 << 31]).bit_length(), 32);
        assert_eq!(Bigint::default().bit_length(), 0);
    }

    #[test]
    fn iadd_small_test() {
        let mut x = big(&[4294967295]);
        x.iadd_small(5);
        assert_eq!(x.data, from_u32(&[4, 1]));

        let mut x = Bigint::from_u64(0xFFFFFFFFFFFFFFFF);
        x.iadd_small(7);
        assert_eq!(x.data, from_u32(&[6, 0, 1]));

        let mut x = Bigint::default();
        x.iadd_small(0);
        assert!(x.is_zero());
    }

    #[test]
    fn imul_small_test() {
        let mut x = big(&[0x33333334]);
        x.imul_small(5);
        assert_eq!(x.data, from_u32(&[4, 1]));

        let mut x = Bigint::from_u64(0x3333333333333334);
        x.imul_small(5);
        assert_eq!(x.data, from_u32(&[4, 0, 1]));
    }

    #[test]
    fn imul_pow5_test() {
        let mut x = Bigint::from_u64(1);
        x.imul_pow5(27);
        assert_eq!(x.data, Bigint::from_u64(7450580596923828125).data);

        // 5^55 = 5^27 * 5^13 * 5^13 * 5^2
        let mut x = Bigint::from_u64(1);
        x.imul_pow5(55);
        let mut y = Bigint::from_u64(7450580596923828125);
        y.imul_small(1220703125);
        y.imul_small(1220703125);
        y.imul_small(25);
        assert_eq!(x.data, y.data);
        assert_eq!(x.bit_length(), 128);
    }

    #[test]
    fn shl_test() {
        let mut x = big(&[0xD2210408]);
        x.ishl(5);
        assert_eq!(x.data, from_u32(&[0x44208100, 0x1A]));
        x.ishl(32);
        assert_eq!(x.data, from_u32(&[0, 0x44208100, 0x1A]));
        x.ishl(27);
        assert_eq!(x.data, from_u32(&[0, 0, 0xD2210408]));

        let mut x = Bigint::default();
        x.ishl(100);
        assert!(x.is_zero());
    }

    #[test]
    fn shr_test() {
        let mut x = big(&[0, 0, 0xD2210408]);
        assert!(!x.ishr(27));
        assert_eq!(x.data, from_u32(&[0, 0x44208100, 0x1A]));
        assert!(!x.ishr(32));
        assert_eq!(x.data, from_u32(&[0x44208100, 0x1A]));
        assert!(x.ishr(10));
        assert_eq!(x.data, from_u32(&[0x06910820]));
        assert!(x.ishr(64));
        assert!(x.is_zero());
    }

    #[test]
    fn isub_test() {
        let mut x = big(&[0, 0, 1]);
        large::isub(&mut x.data, &from_u32(&[1]));
        assert_eq!(x.data, from_u32(&[0xFFFFFFFF, 0xFFFFFFFF]));

        let mut x = big(&[5, 7]);
        large::isub(&mut x.data, &from_u32(&[5, 7]));
        assert!(x.is_zero());
    }

    #[test]
    fn quorem_test() {
        let mut x = Bigint::from_u64(1000);
        assert_eq!(x.quorem(&Bigint::from_u64(7)), 142);
        assert_eq!(x.data, Bigint::from_u64(6).data);

        // (2^63 - 1) * 3 + 2, divided by 3.
        let mut x = Bigint::from_u64(u64::MAX >> 1);
        x.imul_small(3);
        x.iadd_small(2);
        assert_eq!(x.quorem(&Bigint::from_u64(3)), u64::MAX >> 1);
        assert_eq!(x.data, Bigint::from_u64(2).data);

        let mut x = Bigint::from_u64(2);
        assert_eq!(x.quorem(&Bigint::from_u64(3)), 0);
    }
}
