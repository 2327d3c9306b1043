//! `ndfuse-core`: lazy element-wise expressions over N-dimensional arrays.
//!
//! Arithmetic and math functions applied to [`Array`]s (or to other
//! expressions) build a tree of borrowed, statically typed nodes instead of
//! computing anything. Indexing the root evaluates the whole tree for that
//! single element, so a chain such as `sqrt(a) + b` runs as one fused loop
//! with no intermediate buffers.
//!
//! # Design
//!
//! - Every node is a distinct generic type; `eval` resolves statically.
//! - Rank is a compile-time constant. Mixing ranks is a type error.
//! - Nodes borrow their operands, so the borrow checker keeps operands alive
//!   for as long as the tree that uses them.
//! - The left operand decides the shape of a binary node; [`expr::try_zip`]
//!   verifies shapes when the caller wants it checked.

pub mod array;
pub mod dtype;
pub mod error;
pub mod eval;
pub mod expr;
pub mod func;
pub mod index;
pub mod math;
mod ops;

// Re-export key types at crate root for convenience.
pub use array::Array;
pub use dtype::{Float, Integer, Scalar, Signed};
pub use error::{CoreError, Result};
pub use expr::{Binary, Expr, Unary};

/// Items intended for glob-import: `use ndfuse_core::prelude::*;`
pub mod prelude {
    pub use crate::array::Array;
    pub use crate::dtype::{Float, Integer, Scalar, Signed};
    pub use crate::error::{CoreError, Result};
    pub use crate::eval::{for_each, materialize};
    pub use crate::expr::{Binary, Expr, Unary, map, try_zip, zip, zip_default};
    pub use crate::index::{Ax, Const};
    pub use crate::math::*;
}
