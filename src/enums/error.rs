// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Error Module - Custom *fixarray* Error Type
//!
//! Defines the unified error type for the fallible surfaces of the crate.
//!
//! ## Scope
//! - The arithmetic operators themselves never return errors: length
//!   mismatches and unsupported element pairings are type errors.
//! - Errors only arise when building a `FixedArray` from runtime-sized input,
//!   from the opt-in checked kernels, and from checked numeric casts.

use thiserror::Error;

use crate::enums::operators::ArithmeticOperator;

/// Catch all error type for `fixarray`
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FixedArrayError {
    /// Runtime-sized input does not match the compile-time length.
    #[error("Length mismatch: expected {expected} elements, found {found}.")]
    LengthMismatch { expected: usize, found: usize },

    /// A checked kernel overflowed the common element type.
    #[error("Overflow: {op} overflowed at index {index}.")]
    Overflow {
        index: usize,
        op: ArithmeticOperator,
    },

    /// A checked division hit a zero divisor.
    #[error("Division by zero at index {index}.")]
    DivideByZero { index: usize },

    /// A checked cast could not represent the value in the target type.
    #[error(
        "Cast overflow at index {index}: value '{value}' cannot be represented in type '{target}'."
    )]
    CastOverflow {
        index: usize,
        value: String,
        target: &'static str,
    },
}
