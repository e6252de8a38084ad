// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Routing Module
//!
//! Compile-time routing for the arithmetic kernels: selects elementwise or
//! broadcast application from the operand type and promotes both sides to
//! their common type.

pub mod elementwise;

pub use elementwise::{Combined, combine, combine_with, try_combine};
