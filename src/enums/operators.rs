// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Operators
//!
//! Names the four primitive arithmetic operations the kernels dispatch on.

use std::fmt;

/// Primitive arithmetic operation applied per element.
///
/// The infix operators (`+ - * /`) call their primitive directly; this enum
/// exists for the checked kernels, which select a `Checked*` primitive once
/// per call and report the operation on failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl ArithmeticOperator {
    /// Infix symbol, e.g. `+`.
    pub fn symbol(&self) -> &'static str {
        match self {
            ArithmeticOperator::Add => "+",
            ArithmeticOperator::Subtract => "-",
            ArithmeticOperator::Multiply => "*",
            ArithmeticOperator::Divide => "/",
        }
    }
}

impl fmt::Display for ArithmeticOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArithmeticOperator::Add => "add",
            ArithmeticOperator::Subtract => "subtract",
            ArithmeticOperator::Multiply => "multiply",
            ArithmeticOperator::Divide => "divide",
        };
        f.write_str(name)
    }
}
