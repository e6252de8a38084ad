// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Elementwise Module
//!
//! Generic binary function application over a `FixedArray` and an
//! `Operand`, which is either a same-length array or a broadcast scalar.
//!
//! All three entry points share one shape: for each index `i` in `[0, N)`
//! the left element and the operand's contribution at `i` are handed to the
//! caller's function. The operand type decides at compile time whether that
//! contribution is `rhs[i]` or the scalar itself.

use crate::enums::error::FixedArrayError;
use crate::structs::fixed_array::FixedArray;
use crate::traits::operand::Operand;
use crate::traits::promote::{CommonType, Promote};

/// Result of combining a `FixedArray<T, N>` with operand `R`.
pub type Combined<T, R, const N: usize> =
    FixedArray<CommonType<T, <R as Operand<N>>::Elem>, N>;

/// Apply a binary function element-wise with broadcasting, over the common
/// type of both sides.
///
/// Each left element and right contribution is lifted into
/// `CommonType<T, R::Elem>` before `op` sees it, so `op` is written once for
/// the promoted type.
///
/// # Example
/// ```rust
/// use fixarray::{FixedArray, kernels::routing::combine};
///
/// let arr = FixedArray::new([1i32, 2, 3]);
///
/// // Array + scalar broadcasts 10 to every index
/// let result = combine(arr, 10i32, |a, b| a + b);
/// assert_eq!(result.data, [11, 12, 13]);
///
/// // Two arrays, i32 and f64 meet in f64
/// let result = combine(arr, [0.5f64, 0.5, 0.5], |a, b| a * b);
/// assert_eq!(result.data, [0.5, 1.0, 1.5]);
/// ```
#[inline]
pub fn combine<T, R, F, const N: usize>(
    lhs: FixedArray<T, N>,
    rhs: R,
    mut op: F,
) -> Combined<T, R, N>
where
    R: Operand<N>,
    T: Promote<R::Elem>,
    F: FnMut(CommonType<T, R::Elem>, CommonType<T, R::Elem>) -> CommonType<T, R::Elem>,
{
    FixedArray::from_fn(|i| {
        op(
            <T as Promote<R::Elem>>::lift_lhs(lhs.data[i]),
            <T as Promote<R::Elem>>::lift_rhs(rhs.elem(i)),
        )
    })
}

/// Apply a binary function element-wise with broadcasting, on the raw
/// element types.
///
/// No promotion takes place; `op` decides the output type.
#[inline]
pub fn combine_with<T, R, O, F, const N: usize>(
    lhs: FixedArray<T, N>,
    rhs: R,
    mut op: F,
) -> FixedArray<O, N>
where
    T: Copy,
    R: Operand<N>,
    F: FnMut(T, R::Elem) -> O,
{
    FixedArray::from_fn(|i| op(lhs.data[i], rhs.elem(i)))
}

/// Fallible form of [`combine`].
///
/// `op` also receives the index, for error reporting. The first error stops
/// the loop and is returned; no partial array escapes.
pub fn try_combine<T, R, F, const N: usize>(
    lhs: FixedArray<T, N>,
    rhs: R,
    mut op: F,
) -> Result<Combined<T, R, N>, FixedArrayError>
where
    R: Operand<N>,
    T: Promote<R::Elem>,
    F: FnMut(
        usize,
        CommonType<T, R::Elem>,
        CommonType<T, R::Elem>,
    ) -> Result<CommonType<T, R::Elem>, FixedArrayError>,
{
    let mut out: [CommonType<T, R::Elem>; N] = [Default::default(); N];
    for (index, slot) in out.iter_mut().enumerate() {
        *slot = op(
            index,
            <T as Promote<R::Elem>>::lift_lhs(lhs.data[index]),
            <T as Promote<R::Elem>>::lift_rhs(rhs.elem(index)),
        )?;
    }
    Ok(FixedArray::new(out))
}
