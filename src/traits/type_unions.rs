// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Type Unions
//!
//! Marker traits that bound the element universe of `FixedArray`.
//!
//! Each trait extends and constrains the matching *num-traits* trait
//! so generic code can write `fn f<T: Numeric>()` without spelling out
//! the full arithmetic bound set.

use std::fmt::{Debug, Display};

use num_traits::{Float as NumFloat, Num, NumCast, PrimInt, ToPrimitive};

/// Trait for types valid as numerical array elements.
///
/// Useful when specifying `my_fn::<T: Numeric>() {}`.
///
/// Extends and constrains the *num-traits* `Num` implementation to fit the crate's type universe.
pub trait Numeric:
    Num
    + NumCast
    + Copy
    + Default
    + ToPrimitive
    + PartialEq
    + PartialOrd
    + Debug
    + Display
    + 'static
{
}

/// Trait for types valid as float elements.
///
/// Extends and constrains the *num-traits* `Float` implementation to fit the crate's type universe.
pub trait Float: Numeric + NumFloat {}

/// Trait for types valid as integer elements.
///
/// `PrimInt` brings the `Checked*` family, which the checked kernels rely on.
pub trait Integer: Numeric + PrimInt {}

macro_rules! impl_type_unions {
    (float: $($f:ty),*; int: $($(#[$m:meta])* $i:ty),* $(,)?) => {
        $(
            impl Numeric for $f {}
            impl Float for $f {}
        )*
        $(
            $(#[$m])*
            impl Numeric for $i {}
            $(#[$m])*
            impl Integer for $i {}
        )*
    };
}

impl_type_unions!(
    float: f32, f64;
    int:
        i32, i64, u32, u64,
        #[cfg(feature = "extended_numeric_types")] i8,
        #[cfg(feature = "extended_numeric_types")] i16,
        #[cfg(feature = "extended_numeric_types")] u8,
        #[cfg(feature = "extended_numeric_types")] u16,
);

#[cfg(test)]
mod tests {
    use super::*;

    fn zero_of<T: Numeric>() -> T {
        T::zero()
    }

    fn is_nan<T: Float>(v: T) -> bool {
        v.is_nan()
    }

    fn checked_double<T: Integer>(v: T) -> Option<T> {
        v.checked_add(&v)
    }

    #[test]
    fn test_numeric_zero() {
        assert_eq!(zero_of::<i32>(), 0);
        assert_eq!(zero_of::<f64>(), 0.0);
        assert_eq!(zero_of::<u64>(), 0);
    }

    #[test]
    fn test_float_bound() {
        assert!(is_nan(f32::NAN));
        assert!(!is_nan(1.0f64));
    }

    #[test]
    fn test_integer_bound() {
        assert_eq!(checked_double(21i32), Some(42));
        assert_eq!(checked_double(u32::MAX), None);
    }
}
