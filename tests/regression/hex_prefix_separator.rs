#![allow(clippy::float_cmp)]

use refloat::from_str;

#[test]
fn test() {
    // The only separator that may not sit between two digits.
    assert_eq!(from_str::<f64>("0x_8p-3").unwrap(), 1.0);
    assert_eq!(from_str::<f64>("-0X_1_0P0").unwrap(), -16.0);
    assert!(from_str::<f64>("0x__1p0").unwrap_err().is_syntax());
    assert!(from_str::<f64>("_0x1p0").unwrap_err().is_syntax());
    assert!(from_str::<f64>("0_x1p0").unwrap_err().is_syntax());
    assert!(from_str::<f64>("0x1p_0").unwrap_err().is_syntax());
}
