#![allow(clippy::float_cmp)]

use refloat::from_str;

#[test]
fn test() {
    // Exponent digits past the saturation bound must not wrap around.
    assert!(from_str::<f64>("1e18446744073709551617").unwrap_err().is_range());
    assert_eq!(from_str::<f64>("1e-18446744073709551617").unwrap(), 0.0);
    assert_eq!(from_str::<f32>("0e99999999999999999999").unwrap(), 0.0);
    assert!(from_str::<f64>("0x1p18446744073709551617").unwrap_err().is_range());
    assert_eq!(from_str::<f64>("-0x1p-18446744073709551617").unwrap().to_bits(), 1 << 63);

    // Many fraction digits offset a large exponent.
    let s = format!("0.{}1e350", "0".repeat(349));
    assert_eq!(from_str::<f64>(&s).unwrap(), 1.0);
}
