// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # **FixedArray Module** - *Compile-Time Sized Numeric Array*
//!
//! Stack-allocated numeric array whose length is part of its type.
//!
//! ## Overview
//! - Logical type: `N` values of one element type `T`.
//! - Physical storage: a plain `[T; N]`; no heap allocation, no null mask.
//! - `Copy` whenever `T` is, so arithmetic takes operands by value.
//!
//! ## Features
//! - **Construction** from arrays, slices, `Vec`, closures, or a repeated value.
//! - **Arithmetic** via `+ - * /` and their compound forms, against another
//!   array of the same length or a scalar. See `kernels::arithmetic`.
//! - **Conversion**: infallible promotion to a common type, checked casts.
//!
//! ## Usage Tips
//! Two arrays of different lengths are different types, so mixing them is
//! rejected by the compiler rather than at runtime.

use std::fmt::{Display, Formatter};
use std::ops::{Deref, Index, IndexMut};

use num_traits::NumCast;

use crate::enums::error::FixedArrayError;
use crate::traits::print::MAX_PREVIEW;
use crate::traits::promote::{CommonType, Promote};
use crate::traits::type_unions::Numeric;

/// # FixedArray
///
/// Fixed-length, fixed-type numeric array.
///
/// ## Description
/// - Stores exactly `N` values of `T` inline.
/// - Indices range over `[0, N)`; indexing past the end panics like a slice.
/// - Every arithmetic result is a fresh value; only the compound operators
///   (`+=` etc.) overwrite the receiver.
///
/// ### Fields
/// - `data`: backing array.
///
/// ## Example
/// ```rust
/// use fixarray::{FixedArray, fixed};
///
/// let a: FixedArray<i32, 3> = fixed![1, 2, 3];
/// let b: FixedArray<i32, 3> = fixed![10, 20, 30];
///
/// assert_eq!(a + b, fixed![11, 22, 33]);
/// assert_eq!(a * 2i32, fixed![2, 4, 6]);
///
/// // Integer array with a float scalar promotes to float
/// let halves: FixedArray<f64, 3> = a / 2.0f64;
/// assert_eq!(halves, fixed![0.5, 1.0, 1.5]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const N: usize> {
    /// Backing values.
    pub data: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Wraps an existing array.
    #[inline]
    pub const fn new(data: [T; N]) -> Self {
        Self { data }
    }

    /// Builds an array by calling `f` with each index in order.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self {
            data: std::array::from_fn(f),
        }
    }

    /// Number of elements, always `N`.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` only for `N == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrows the values as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutably borrows the values as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Borrows the backing array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Unwraps the backing array.
    #[inline]
    pub fn into_inner(self) -> [T; N] {
        self.data
    }

    /// Iterator over element references.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterator over mutable element references.
    #[inline]
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Applies `f` to every element, keeping the length.
    #[inline]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> FixedArray<U, N> {
        FixedArray::new(self.data.map(f))
    }
}

impl<T: Copy, const N: usize> FixedArray<T, N> {
    /// Array with every slot set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self {
        Self { data: [value; N] }
    }
}

impl<T: Numeric, const N: usize> FixedArray<T, N> {
    /// Array of `T::zero()`.
    #[inline]
    pub fn zeros() -> Self {
        Self::splat(T::zero())
    }

    /// Array of `T::one()`.
    #[inline]
    pub fn ones() -> Self {
        Self::splat(T::one())
    }

    /// Sum of all elements, in the element type.
    ///
    /// Overflow follows the element type's native behaviour.
    pub fn sum(&self) -> T {
        self.data.iter().fold(T::zero(), |acc, &v| acc + v)
    }

    /// Product of all elements, in the element type.
    pub fn product(&self) -> T {
        self.data.iter().fold(T::one(), |acc, &v| acc * v)
    }

    /// Lifts every element into the common type of `T` and `U`.
    ///
    /// This is the conversion the arithmetic kernels apply to the left-hand
    /// side before combining with a `U` operand.
    #[inline]
    pub fn promote<U: Numeric>(self) -> FixedArray<CommonType<T, U>, N>
    where
        T: Promote<U>,
    {
        self.map(<T as Promote<U>>::lift_lhs)
    }

    /// Converts every element to `U`, failing on the first value `U`
    /// cannot represent.
    ///
    /// Float to integer conversions truncate toward zero; `NaN` and
    /// out-of-range values fail.
    pub fn try_cast<U: Numeric>(self) -> Result<FixedArray<U, N>, FixedArrayError> {
        let mut out = [U::zero(); N];
        for (index, (slot, value)) in out.iter_mut().zip(self.data).enumerate() {
            *slot = <U as NumCast>::from(value).ok_or_else(|| FixedArrayError::CastOverflow {
                index,
                value: value.to_string(),
                target: std::any::type_name::<U>(),
            })?;
        }
        Ok(FixedArray::new(out))
    }
}

impl<T: Default + Copy, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::new(data)
    }
}

impl<T, const N: usize> From<FixedArray<T, N>> for [T; N] {
    #[inline]
    fn from(arr: FixedArray<T, N>) -> Self {
        arr.data
    }
}

impl<T: Copy, const N: usize> TryFrom<&[T]> for FixedArray<T, N> {
    type Error = FixedArrayError;

    fn try_from(slice: &[T]) -> Result<Self, Self::Error> {
        <[T; N]>::try_from(slice)
            .map(Self::new)
            .map_err(|_| FixedArrayError::LengthMismatch {
                expected: N,
                found: slice.len(),
            })
    }
}

impl<T, const N: usize> TryFrom<Vec<T>> for FixedArray<T, N> {
    type Error = FixedArrayError;

    fn try_from(vec: Vec<T>) -> Result<Self, Self::Error> {
        <[T; N]>::try_from(vec)
            .map(Self::new)
            .map_err(|rejected| FixedArrayError::LengthMismatch {
                expected: N,
                found: rejected.len(),
            })
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> IntoIterator for FixedArray<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedArray<T, N> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

impl<T: Display, const N: usize> Display for FixedArray<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "FixedArray [{} values] (dtype: {})",
            N,
            std::any::type_name::<T>()
        )?;

        write!(f, "[")?;

        for (i, val) in self.data.iter().take(MAX_PREVIEW).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", val)?;
        }

        if N > MAX_PREVIEW {
            write!(f, ", … ({} total)", N)?;
        }

        write!(f, "]")
    }
}
