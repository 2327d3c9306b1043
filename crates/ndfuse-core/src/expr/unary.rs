use core::fmt;

use super::{Expr, NdIndex};
use crate::error::Result;
use crate::func::UnaryFn;

/// Applies `F` to every element of one borrowed operand.
///
/// Rank, index type, and shape are those of the operand; the element type is
/// `F::Output`.
pub struct Unary<'a, F, E> {
    op: F,
    inner: &'a E,
}

impl<'a, F, E> Unary<'a, F, E> {
    /// Wrap `inner` with `op`.
    #[inline]
    pub fn new(op: F, inner: &'a E) -> Self {
        Self { op, inner }
    }

    /// Wrap `inner` with a default-constructed `F`.
    #[inline]
    pub fn from_inner(inner: &'a E) -> Self
    where
        F: Default,
    {
        Self::new(F::default(), inner)
    }

    #[inline]
    pub fn op(&self) -> &F {
        &self.op
    }

    #[inline]
    pub fn inner(&self) -> &'a E {
        self.inner
    }
}

impl<F, E> Expr for Unary<'_, F, E>
where
    E: Expr,
    F: UnaryFn<E::Value>,
{
    type Rank = E::Rank;
    type Value = F::Output;
    type Index = E::Index;

    #[inline]
    fn eval(&self, idx: NdIndex<Self>) -> F::Output {
        self.op.call(self.inner.eval(idx))
    }

    #[inline]
    fn dim(&self, axis: usize) -> E::Index {
        self.inner.dim(axis)
    }

    fn check_shapes(&self) -> Result<()> {
        self.inner.check_shapes()
    }
}

impl<F: Clone, E> Clone for Unary<'_, F, E> {
    fn clone(&self) -> Self {
        Self {
            op: self.op.clone(),
            inner: self.inner,
        }
    }
}

impl<F: Copy, E> Copy for Unary<'_, F, E> {}

impl<F: fmt::Debug, E: fmt::Debug> fmt::Debug for Unary<'_, F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unary")
            .field("op", &self.op)
            .field("inner", self.inner)
            .finish()
    }
}

/// Build a lazy node applying `op` to each element of `expr`.
///
/// Closures need their argument type spelled out, because the compiler only
/// sees the [`UnaryFn`] bound:
///
/// ```
/// use ndfuse_core::prelude::*;
///
/// let a = Array::from_vec(vec![1, 2, 3], [3]).unwrap();
/// let tripled = map(&a, |x: i32| x * 3);
/// assert_eq!(tripled.eval([2]), 9);
/// ```
#[inline]
pub fn map<F, E>(expr: &E, op: F) -> Unary<'_, F, E>
where
    E: Expr,
    F: UnaryFn<E::Value>,
{
    Unary::new(op, expr)
}
