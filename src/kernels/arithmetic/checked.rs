// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Checked Arithmetic
//!
//! Opt-in counterparts of the arithmetic operators for integer common types,
//! which report overflow and division by zero as `FixedArrayError` instead
//! of deferring to the element type. The infix operators are unaffected.

use num_traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub, Zero};

use crate::enums::error::FixedArrayError;
use crate::enums::operators::ArithmeticOperator;
use crate::kernels::routing::elementwise::{Combined, try_combine};
use crate::structs::fixed_array::FixedArray;
use crate::traits::operand::Operand;
use crate::traits::promote::{CommonType, Promote};
use crate::traits::type_unions::Integer;

/// Element-wise or broadcast `op` with overflow and zero-divisor detection.
///
/// The `Checked*` primitive is chosen once per call; the loop itself
/// only runs that primitive.
pub fn checked_combine<T, R, const N: usize>(
    lhs: FixedArray<T, N>,
    rhs: R,
    op: ArithmeticOperator,
) -> Result<Combined<T, R, N>, FixedArrayError>
where
    R: Operand<N>,
    T: Promote<R::Elem>,
    CommonType<T, R::Elem>: Integer,
{
    match op {
        ArithmeticOperator::Add => try_combine(lhs, rhs, |index, a, b| {
            a.checked_add(&b).ok_or(FixedArrayError::Overflow { index, op })
        }),
        ArithmeticOperator::Subtract => try_combine(lhs, rhs, |index, a, b| {
            a.checked_sub(&b).ok_or(FixedArrayError::Overflow { index, op })
        }),
        ArithmeticOperator::Multiply => try_combine(lhs, rhs, |index, a, b| {
            a.checked_mul(&b).ok_or(FixedArrayError::Overflow { index, op })
        }),
        ArithmeticOperator::Divide => try_combine(lhs, rhs, |index, a, b| {
            if b.is_zero() {
                return Err(FixedArrayError::DivideByZero { index });
            }
            // MIN / -1
            a.checked_div(&b).ok_or(FixedArrayError::Overflow { index, op })
        }),
    }
}

impl<T, const N: usize> FixedArray<T, N>
where
    T: Integer,
{
    /// Checked `self + rhs`.
    pub fn checked_add<R>(self, rhs: R) -> Result<Combined<T, R, N>, FixedArrayError>
    where
        R: Operand<N>,
        T: Promote<R::Elem>,
        CommonType<T, R::Elem>: Integer,
    {
        checked_combine(self, rhs, ArithmeticOperator::Add)
    }

    /// Checked `self - rhs`.
    pub fn checked_sub<R>(self, rhs: R) -> Result<Combined<T, R, N>, FixedArrayError>
    where
        R: Operand<N>,
        T: Promote<R::Elem>,
        CommonType<T, R::Elem>: Integer,
    {
        checked_combine(self, rhs, ArithmeticOperator::Subtract)
    }

    /// Checked `self * rhs`.
    pub fn checked_mul<R>(self, rhs: R) -> Result<Combined<T, R, N>, FixedArrayError>
    where
        R: Operand<N>,
        T: Promote<R::Elem>,
        CommonType<T, R::Elem>: Integer,
    {
        checked_combine(self, rhs, ArithmeticOperator::Multiply)
    }

    /// Checked `self / rhs`.
    ///
    /// Zero divisors report `DivideByZero`; `MIN / -1` reports `Overflow`.
    pub fn checked_div<R>(self, rhs: R) -> Result<Combined<T, R, N>, FixedArrayError>
    where
        R: Operand<N>,
        T: Promote<R::Elem>,
        CommonType<T, R::Elem>: Integer,
    {
        checked_combine(self, rhs, ArithmeticOperator::Divide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_ok_matches_operator() {
        let a = FixedArray::new([1i32, 2, 3]);
        let b = FixedArray::new([10i32, 20, 30]);

        assert_eq!(a.checked_add(b).unwrap(), a + b);
        assert_eq!(a.checked_sub(b).unwrap(), a - b);
        assert_eq!(a.checked_mul(2i32).unwrap(), a * 2i32);
        assert_eq!(b.checked_div(a).unwrap(), b / a);
    }

    #[test]
    fn test_checked_add_overflow() {
        let a = FixedArray::new([1u32, u32::MAX, 3]);

        let err = a.checked_add(1u32).unwrap_err();
        assert_eq!(
            err,
            FixedArrayError::Overflow {
                index: 1,
                op: ArithmeticOperator::Add
            }
        );
    }

    #[test]
    fn test_checked_sub_underflow() {
        let a = FixedArray::new([5u64, 0]);
        let err = a.checked_sub([1u64, 1]).unwrap_err();
        assert_eq!(
            err,
            FixedArrayError::Overflow {
                index: 1,
                op: ArithmeticOperator::Subtract
            }
        );
    }

    #[test]
    fn test_checked_div_by_zero() {
        let a = FixedArray::new([4i64, 8, 12]);
        let err = a.checked_div([2i64, 0, 3]).unwrap_err();
        assert_eq!(err, FixedArrayError::DivideByZero { index: 1 });
    }

    #[test]
    fn test_checked_div_min_by_minus_one() {
        let a = FixedArray::new([i32::MIN]);
        let err = a.checked_div(-1i32).unwrap_err();
        assert_eq!(
            err,
            FixedArrayError::Overflow {
                index: 0,
                op: ArithmeticOperator::Divide
            }
        );
        assert_eq!(ArithmeticOperator::Divide.symbol(), "/");
    }

    #[test]
    fn test_checked_promotes_before_checking() {
        // u32::MAX + 1i32 overflows u32 but fits the i64 common type
        let a = FixedArray::new([u32::MAX]);
        let sum: FixedArray<i64, 1> = a.checked_add(1i32).unwrap();
        assert_eq!(sum.data, [u32::MAX as i64 + 1]);
    }

    #[test]
    fn test_checked_reports_negative_lifted_to_u64() {
        // -1 lifts to u64::MAX, so adding 1 overflows the u64 common type
        let a = FixedArray::new([-1i32, 5]);
        let err = a.checked_add(1u64).unwrap_err();
        assert_eq!(
            err,
            FixedArrayError::Overflow {
                index: 0,
                op: ArithmeticOperator::Add
            }
        );

        let ok: FixedArray<u64, 2> = FixedArray::new([0i32, 5]).checked_add(1u64).unwrap();
        assert_eq!(ok.data, [1, 6]);
    }
}
