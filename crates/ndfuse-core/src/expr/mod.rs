//! The expression protocol and the two composite node kinds.
//!
//! An [`Expr`] represents an N-dimensional array without necessarily storing
//! it. Leaves (such as [`crate::Array`]) own data; [`Unary`] and [`Binary`]
//! nodes borrow their operands and apply a function object at each index.
//! Every node is its own generic instantiation, so `eval` on a composite
//! resolves statically and inlines down to one straight-line computation per
//! element:
//!
//! ```
//! use ndfuse_core::prelude::*;
//!
//! let a = Array::from_vec(vec![1.0_f64, 4.0, 9.0], [3]).unwrap();
//! let b = Array::from_vec(vec![1.0_f64, 1.0, 1.0], [3]).unwrap();
//! let root = sqrt(&a);
//! let sum = &root + &b;
//! assert_eq!(sum.eval([2]), 4.0);
//! assert_eq!(sum.dim(0), 3);
//! ```

mod binary;
mod unary;

pub use binary::{Binary, try_zip, zip, zip_default};
pub use unary::{Unary, map};

use crate::error::Result;
use crate::func::{BinaryFn, CmpEq, CmpGe, CmpGt, CmpLe, CmpLt, CmpNe, UnaryFn};
use crate::index::{Axis, CommonIndex, IndexType, Rank};

/// The multi-index type of expression `E`.
pub type NdIndex<E> = <<E as Expr>::Rank as Rank>::NdIndex<<E as Expr>::Index>;

macro_rules! cmp_method {
    ($(#[$doc:meta])* $method:ident => $functor:ident) => {
        $(#[$doc])*
        #[inline]
        fn $method<'a, R>(&'a self, rhs: &'a R) -> Binary<'a, $functor, Self, R>
        where
            Self: Sized,
            R: Expr<Rank = Self::Rank>,
            Self::Index: CommonIndex<R::Index>,
            $functor: BinaryFn<Self::Value, R::Value>,
        {
            zip(self, rhs, $functor)
        }
    };
}

/// Capability set shared by every expression: leaves and composite nodes.
///
/// # Contract
///
/// - `eval` is pure: equal indices give equal values while leaf storage is
///   unchanged. It must not allocate and its cost must not depend on the
///   shape.
/// - `dim(axis)` reports the extent along `axis` for `axis < RANK`. Nodes
///   forward it to an operand; only leaves know their shape.
/// - Callers only pass indices inside the shape; leaves may panic otherwise.
///   [`crate::eval::checked_eval`] is the bounds-checked entry.
/// - Node implementations override [`Expr::check_shapes`] to recurse into
///   their operands.
pub trait Expr {
    /// Number of axes, fixed at compile time.
    type Rank: Rank;

    /// Element produced at every index.
    type Value;

    /// Integral type of one axis index.
    type Index: IndexType;

    /// The element at `idx`.
    fn eval(&self, idx: NdIndex<Self>) -> Self::Value;

    /// Extent along `axis`.
    fn dim(&self, axis: usize) -> Self::Index;

    /// Extent along an axis given either as a runtime `usize` or as a
    /// compile-time [`crate::index::Ax`] tag.
    #[inline]
    fn dim_of<A: Axis>(&self, axis: A) -> Self::Index {
        self.dim(axis.get())
    }

    /// Check that every binary node in the tree combines operands of equal
    /// shape, failing with [`crate::CoreError::DimensionMismatch`] on the
    /// first disagreement.
    ///
    /// Leaves have nothing to check; nodes recurse into their operands.
    fn check_shapes(&self) -> Result<()> {
        Ok(())
    }

    /// Number of axes.
    #[inline]
    fn rank(&self) -> usize {
        <Self::Rank as Rank>::RANK
    }

    /// All extents, one per axis.
    #[inline]
    fn shape(&self) -> NdIndex<Self> {
        <Self::Rank as Rank>::index_from_fn::<Self::Index, _>(|axis| self.dim(axis))
    }

    /// Same as the free function [`map`].
    #[inline]
    fn map<F>(&self, op: F) -> Unary<'_, F, Self>
    where
        Self: Sized,
        F: UnaryFn<Self::Value>,
    {
        Unary::new(op, self)
    }

    cmp_method!(
        /// Lazy element-wise `<`.
        cmp_lt => CmpLt
    );
    cmp_method!(
        /// Lazy element-wise `>`.
        cmp_gt => CmpGt
    );
    cmp_method!(
        /// Lazy element-wise `<=`.
        cmp_le => CmpLe
    );
    cmp_method!(
        /// Lazy element-wise `>=`.
        cmp_ge => CmpGe
    );
    cmp_method!(
        /// Lazy element-wise `==`.
        cmp_eq => CmpEq
    );
    cmp_method!(
        /// Lazy element-wise `!=`.
        cmp_ne => CmpNe
    );
}
