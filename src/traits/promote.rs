// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Promote Trait Module
//!
//! Resolves the common element type of two numeric types at compile time,
//! and lifts values of either side into it.
//!
//! ## Rules
//! - Identical types stay as they are.
//! - Any float dominates any integer; `f64` dominates `f32`.
//! - Integers of equal signedness widen to the larger type.
//! - Mixed signedness resolves to the signed type when it is strictly wider,
//!   otherwise to the smallest signed type holding both ranges
//!   (`i32 + u32 = i64`). With `u64` no such type exists, so `u64` wins.
//!
//! Lifting is an `as` conversion, so `u64` pairings and `i64 + f32`
//! follow the native cast semantics rather than erroring.
//!
//! ## Mixed-sign `u64`
//! A signed value lifted to `u64` wraps: `-1i32` becomes `u64::MAX`.
//! `[-1i32, 5] + 1u64` therefore overflows, which panics in debug builds
//! and wraps to `[0, 6]` in release. Use the `checked_*` kernels when the
//! signed side may be negative.

use crate::traits::type_unions::Numeric;

/// Resolves the common type of `Self` and `Rhs`.
///
/// The pairing table is closed: combining two element types without an
/// entry is a compile-time error.
pub trait Promote<Rhs: Numeric>: Numeric {
    /// Element type of results combining `Self` and `Rhs`.
    type Output: Numeric;

    /// Lift a left-hand value into the common type.
    fn lift_lhs(self) -> <Self as Promote<Rhs>>::Output;

    /// Lift a right-hand value into the common type.
    fn lift_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// Common element type of `T` and `U`.
pub type CommonType<T, U> = <T as Promote<U>>::Output;

macro_rules! impl_promote {
    (@one $(#[$m:meta])* $lhs:ty, $rhs:ty => $out:ty) => {
        $(#[$m])*
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[inline(always)]
            fn lift_lhs(self) -> $out {
                self as $out
            }

            #[inline(always)]
            fn lift_rhs(rhs: $rhs) -> $out {
                rhs as $out
            }
        }
    };
    (same: $($(#[$m:meta])* $t:ty),* $(,)?) => {
        $( impl_promote!(@one $(#[$m])* $t, $t => $t); )*
    };
    ($($(#[$m:meta])* $a:ty, $b:ty => $out:ty;)*) => {
        $(
            impl_promote!(@one $(#[$m])* $a, $b => $out);
            impl_promote!(@one $(#[$m])* $b, $a => $out);
        )*
    };
}

impl_promote!(same:
    i32, i64, u32, u64, f32, f64,
    #[cfg(feature = "extended_numeric_types")] i8,
    #[cfg(feature = "extended_numeric_types")] i16,
    #[cfg(feature = "extended_numeric_types")] u8,
    #[cfg(feature = "extended_numeric_types")] u16,
);

// Core pairings
impl_promote! {
    i32, i64 => i64;
    u32, u64 => u64;
    f32, f64 => f64;

    i32, u32 => i64;
    i32, u64 => u64;
    i64, u32 => i64;
    i64, u64 => u64;

    i32, f32 => f32;
    i64, f32 => f32;
    u32, f32 => f32;
    u64, f32 => f32;
    i32, f64 => f64;
    i64, f64 => f64;
    u32, f64 => f64;
    u64, f64 => f64;
}

// Extended pairings
impl_promote! {
    #[cfg(feature = "extended_numeric_types")] i8, i16 => i16;
    #[cfg(feature = "extended_numeric_types")] i8, i32 => i32;
    #[cfg(feature = "extended_numeric_types")] i8, i64 => i64;
    #[cfg(feature = "extended_numeric_types")] i16, i32 => i32;
    #[cfg(feature = "extended_numeric_types")] i16, i64 => i64;

    #[cfg(feature = "extended_numeric_types")] u8, u16 => u16;
    #[cfg(feature = "extended_numeric_types")] u8, u32 => u32;
    #[cfg(feature = "extended_numeric_types")] u8, u64 => u64;
    #[cfg(feature = "extended_numeric_types")] u16, u32 => u32;
    #[cfg(feature = "extended_numeric_types")] u16, u64 => u64;

    #[cfg(feature = "extended_numeric_types")] i8, u8 => i16;
    #[cfg(feature = "extended_numeric_types")] i8, u16 => i32;
    #[cfg(feature = "extended_numeric_types")] i8, u32 => i64;
    #[cfg(feature = "extended_numeric_types")] i8, u64 => u64;
    #[cfg(feature = "extended_numeric_types")] i16, u8 => i16;
    #[cfg(feature = "extended_numeric_types")] i16, u16 => i32;
    #[cfg(feature = "extended_numeric_types")] i16, u32 => i64;
    #[cfg(feature = "extended_numeric_types")] i16, u64 => u64;
    #[cfg(feature = "extended_numeric_types")] i32, u8 => i32;
    #[cfg(feature = "extended_numeric_types")] i32, u16 => i32;
    #[cfg(feature = "extended_numeric_types")] i64, u8 => i64;
    #[cfg(feature = "extended_numeric_types")] i64, u16 => i64;

    #[cfg(feature = "extended_numeric_types")] i8, f32 => f32;
    #[cfg(feature = "extended_numeric_types")] i16, f32 => f32;
    #[cfg(feature = "extended_numeric_types")] u8, f32 => f32;
    #[cfg(feature = "extended_numeric_types")] u16, f32 => f32;
    #[cfg(feature = "extended_numeric_types")] i8, f64 => f64;
    #[cfg(feature = "extended_numeric_types")] i16, f64 => f64;
    #[cfg(feature = "extended_numeric_types")] u8, f64 => f64;
    #[cfg(feature = "extended_numeric_types")] u16, f64 => f64;
}
