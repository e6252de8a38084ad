// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Macros
//!
//! Constructor shorthand for `FixedArray`.

/// Builds a `FixedArray` from a list of values, or from a value and a
/// repeat count, mirroring `[a, b, c]` and `[v; n]`.
///
/// ```rust
/// use fixarray::{FixedArray, fixed};
///
/// let a: FixedArray<i64, 3> = fixed![1, 2, 3];
/// let z: FixedArray<f32, 4> = fixed![0.0; 4];
/// assert_eq!(a.len(), 3);
/// assert_eq!(z.sum(), 0.0);
/// ```
#[macro_export]
macro_rules! fixed {
    ($v:expr; $n:expr) => {
        $crate::FixedArray::new([$v; $n])
    };
    ($($x:expr),* $(,)?) => {
        $crate::FixedArray::new([$($x),*])
    };
}
