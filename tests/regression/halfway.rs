#![allow(clippy::float_cmp, clippy::unreadable_literal)]

use refloat::from_str;

#[test]
fn test() {
    // 2^53 + 1 lies exactly between two doubles; the even one wins.
    assert_eq!(from_str::<f64>("9007199254740993").unwrap(), 9007199254740992.0);

    // A single nonzero digit far past the halfway point breaks the tie.
    let s = format!("9007199254740993{}1e-61", "0".repeat(60));
    assert_eq!(from_str::<f64>(&s).unwrap(), 9007199254740994.0);

    // Halfway between 1 and the next double, with both tie outcomes.
    assert_eq!(from_str::<f64>("1.00000000000000011102230246251565404236316680908203125").unwrap(), 1.0);
    assert_eq!(
        from_str::<f64>("1.00000000000000033306690738754696212708950042724609375").unwrap(),
        1.0000000000000004,
    );
}
