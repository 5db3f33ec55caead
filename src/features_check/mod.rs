//! Shows a user-friendly compiler error on incompatible selected features.

compile_error! {
    "refloat requires that either `std` (default) or `alloc` feature is enabled"
}
