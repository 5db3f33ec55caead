//! Helpers to convert and add digits from characters.

use super::num::Word;

// Convert u8 to digit.
#[inline]
pub(crate) fn to_digit(c: u8) -> Option<u32> {
    (c as char).to_digit(10)
}

// Convert u8 to hexadecimal digit.
#[inline]
pub(crate) fn to_hex_digit(c: u8) -> Option<u32> {
    (c as char).to_digit(16)
}

// Add digit to a mantissa known to be below the accumulation limit.
#[inline]
pub(crate) fn add_digit<W: Word>(value: W, digit: u32) -> W {
    value * W::from_u64(10) + W::from_u64(digit as u64)
}
