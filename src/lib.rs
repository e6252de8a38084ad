//! Copyright © 2025 Peter Garfield Bower. All rights reserved.
//!
//! # fixarray
//!
//! Fixed-length numeric arrays with elementwise and scalar-broadcast
//! arithmetic.
//!
//! - `FixedArray<T, N>` carries its length in its type.
//! - `+ - * /` and `+= -= *= /=` accept another `FixedArray<U, N>`, a
//!   `[U; N]`, or a scalar `U` on the right.
//! - The result element type is the common type of `T` and `U`
//!   (see [`traits::promote`]).
//! - Whether the right side is combined elementwise or broadcast is decided
//!   by its type (see [`traits::operand`]), so there is no runtime branch.
//!
//! ```rust
//! use fixarray::{FixedArray, fixed};
//!
//! let a: FixedArray<i32, 3> = fixed![1, 2, 3];
//! let b: FixedArray<i32, 3> = fixed![10, 20, 30];
//!
//! assert_eq!(a + b, fixed![11, 22, 33]);
//! assert_eq!(a * 2i32, fixed![2, 4, 6]);
//! assert_eq!(a * 0.5f64, fixed![0.5, 1.0, 1.5]);
//! ```

pub mod enums {
    pub mod error;
    pub mod operators;
}

pub mod structs {
    pub mod fixed_array;
}

pub mod traits {
    pub mod operand;
    pub mod print;
    pub mod promote;
    pub mod type_unions;
}

pub mod kernels {
    pub mod arithmetic {
        pub mod checked;
        pub mod types;
    }
    pub mod routing;
}

pub mod macros;

pub use enums::error::FixedArrayError;
pub use enums::operators::ArithmeticOperator;
pub use kernels::arithmetic::checked::checked_combine;
pub use kernels::routing::{Combined, combine, combine_with, try_combine};
pub use structs::fixed_array::FixedArray;
pub use traits::operand::{FixedLen, Operand, is_fixed_array};
pub use traits::print::Print;
pub use traits::promote::{CommonType, Promote};
pub use traits::type_unions::{Float, Integer, Numeric};
