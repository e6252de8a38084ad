// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # FixedArray Arithmetic Operators
//!
//! Implementation of standard Rust arithmetic operators (Add, Sub, Mul, Div)
//! and their compound assignment forms for `FixedArray`, with automatic
//! broadcasting of scalar right-hand sides.
//!
//! This enables ergonomic arithmetic operations like:
//! ```rust
//! use fixarray::{FixedArray, fixed};
//!
//! let mut a: FixedArray<i32, 3> = fixed![1, 2, 3];
//! let b: FixedArray<i32, 3> = fixed![10, 20, 30];
//!
//! assert_eq!(a + b, fixed![11, 22, 33]); // element-wise
//! assert_eq!(a * 2i32, fixed![2, 4, 6]); // broadcast
//!
//! a -= b;
//! assert_eq!(a, fixed![-9, -18, -27]);
//! ```
//!
//! ## Semantics
//! - The output element type is the common type of both sides.
//! - Compound forms require that common type to be the left element type,
//!   so `i32 array += f64` does not compile.
//! - Division by zero and overflow behave exactly as the element type does:
//!   integer division by zero panics, integer overflow panics in debug
//!   builds and wraps in release, floats yield `inf` or `NaN`.
//!   Use the checked kernels to catch these instead.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

use crate::kernels::routing::elementwise::{Combined, combine};
use crate::structs::fixed_array::FixedArray;
use crate::traits::operand::Operand;
use crate::traits::promote::Promote;

macro_rules! impl_arithmetic_op {
    ($op_trait:ident, $op_fn:ident, $assign_trait:ident, $assign_fn:ident, $op:tt) => {
        impl<T, R, const N: usize> $op_trait<R> for FixedArray<T, N>
        where
            R: Operand<N>,
            T: Promote<R::Elem>,
        {
            type Output = Combined<T, R, N>;

            #[inline]
            fn $op_fn(self, rhs: R) -> Self::Output {
                combine(self, rhs, |a, b| a $op b)
            }
        }

        impl<'a, T, R, const N: usize> $op_trait<R> for &'a FixedArray<T, N>
        where
            R: Operand<N>,
            T: Promote<R::Elem>,
        {
            type Output = Combined<T, R, N>;

            #[inline]
            fn $op_fn(self, rhs: R) -> Self::Output {
                combine(*self, rhs, |a, b| a $op b)
            }
        }

        impl<T, R, const N: usize> $assign_trait<R> for FixedArray<T, N>
        where
            R: Operand<N>,
            T: Promote<R::Elem, Output = T>,
        {
            #[inline]
            fn $assign_fn(&mut self, rhs: R) {
                *self = combine(*self, rhs, |a, b| a $op b);
            }
        }
    };
}

impl_arithmetic_op!(Add, add, AddAssign, add_assign, +);
impl_arithmetic_op!(Sub, sub, SubAssign, sub_assign, -);
impl_arithmetic_op!(Mul, mul, MulAssign, mul_assign, *);
impl_arithmetic_op!(Div, div, DivAssign, div_assign, /);
