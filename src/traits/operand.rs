// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operand Trait Module
//!
//! The right-hand side of every arithmetic kernel is an `Operand<N>`:
//! either an array of exactly `N` elements, combined elementwise, or a
//! single scalar, broadcast to every index.
//!
//! Which of the two applies is fixed by the implementing type, so the
//! choice is made during monomorphisation and the per-index loop carries
//! no branch. An array of a different length does not implement
//! `Operand<N>` at all, which turns length mismatches into type errors.

use crate::structs::fixed_array::FixedArray;
use crate::traits::type_unions::Numeric;

/// Right-hand operand of a length-`N` kernel.
pub trait Operand<const N: usize> {
    /// Element type contributed by this operand.
    type Elem: Numeric;

    /// `true` for array operands, `false` for broadcast scalars.
    const IS_ARRAY: bool;

    /// Value this operand contributes at `index`.
    ///
    /// Scalars ignore `index`; arrays require `index < N`.
    fn elem(&self, index: usize) -> Self::Elem;
}

/// Returns whether `R` is combined elementwise (`true`) or broadcast
/// (`false`) against a length-`N` array.
///
/// Resolves at compile time and can be used in `const` contexts.
#[inline]
pub const fn is_fixed_array<R: Operand<N>, const N: usize>() -> bool {
    R::IS_ARRAY
}

/// Array-shaped types with a compile-time length.
pub trait FixedLen {
    /// Number of elements.
    const LEN: usize;
    /// Element type.
    type Element;
}

impl<T, const N: usize> FixedLen for FixedArray<T, N> {
    const LEN: usize = N;
    type Element = T;
}

impl<T, const N: usize> FixedLen for [T; N] {
    const LEN: usize = N;
    type Element = T;
}

impl<U: Numeric, const N: usize> Operand<N> for FixedArray<U, N> {
    type Elem = U;
    const IS_ARRAY: bool = true;

    #[inline(always)]
    fn elem(&self, index: usize) -> U {
        self.data[index]
    }
}

impl<U: Numeric, const N: usize> Operand<N> for [U; N] {
    type Elem = U;
    const IS_ARRAY: bool = true;

    #[inline(always)]
    fn elem(&self, index: usize) -> U {
        self[index]
    }
}

impl<R: Operand<N> + ?Sized, const N: usize> Operand<N> for &R {
    type Elem = R::Elem;
    const IS_ARRAY: bool = R::IS_ARRAY;

    #[inline(always)]
    fn elem(&self, index: usize) -> R::Elem {
        (**self).elem(index)
    }
}

macro_rules! impl_scalar_operand {
    ($($(#[$m:meta])* $t:ty),* $(,)?) => {
        $(
            $(#[$m])*
            impl<const N: usize> Operand<N> for $t {
                type Elem = $t;
                const IS_ARRAY: bool = false;

                #[inline(always)]
                fn elem(&self, _index: usize) -> $t {
                    *self
                }
            }
        )*
    };
}

impl_scalar_operand!(
    i32, i64, u32, u64, f32, f64,
    #[cfg(feature = "extended_numeric_types")] i8,
    #[cfg(feature = "extended_numeric_types")] i16,
    #[cfg(feature = "extended_numeric_types")] u8,
    #[cfg(feature = "extended_numeric_types")] u16,
);
