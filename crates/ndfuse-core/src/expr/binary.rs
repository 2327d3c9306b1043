use core::fmt;

use super::{Expr, NdIndex};
use crate::error::{CoreError, Result};
use crate::func::BinaryFn;
use crate::index::{CommonIndex, IndexType, Rank};

/// Applies `F` pairwise to two borrowed operands of equal rank.
///
/// The left operand is authoritative for shape: `dim` never consults the
/// right one, so callers must only combine operands of equal shape (or go
/// through [`try_zip`]). The index type is the promotion of both operands'
/// index types.
pub struct Binary<'a, F, L, R> {
    op: F,
    lhs: &'a L,
    rhs: &'a R,
}

impl<'a, F, L, R> Binary<'a, F, L, R> {
    #[inline]
    pub fn new(op: F, lhs: &'a L, rhs: &'a R) -> Self {
        Self { op, lhs, rhs }
    }

    #[inline]
    pub fn op(&self) -> &F {
        &self.op
    }

    #[inline]
    pub fn lhs(&self) -> &'a L {
        self.lhs
    }

    #[inline]
    pub fn rhs(&self) -> &'a R {
        self.rhs
    }
}

impl<F, L, R> Expr for Binary<'_, F, L, R>
where
    L: Expr,
    R: Expr<Rank = L::Rank>,
    L::Index: CommonIndex<R::Index>,
    F: BinaryFn<L::Value, R::Value>,
{
    type Rank = L::Rank;
    type Value = F::Output;
    type Index = <L::Index as CommonIndex<R::Index>>::Output;

    #[inline]
    fn eval(&self, idx: NdIndex<Self>) -> F::Output {
        let left = self
            .lhs
            .eval(<L::Rank as Rank>::cast_index::<Self::Index, L::Index>(idx));
        let right = self
            .rhs
            .eval(<L::Rank as Rank>::cast_index::<Self::Index, R::Index>(idx));
        self.op.call(left, right)
    }

    #[inline]
    fn dim(&self, axis: usize) -> Self::Index {
        self.lhs.dim(axis).cast()
    }

    fn check_shapes(&self) -> Result<()> {
        self.lhs.check_shapes()?;
        self.rhs.check_shapes()?;
        shapes_agree(self.lhs, self.rhs)
    }
}

impl<F: Clone, L, R> Clone for Binary<'_, F, L, R> {
    fn clone(&self) -> Self {
        Self {
            op: self.op.clone(),
            lhs: self.lhs,
            rhs: self.rhs,
        }
    }
}

impl<F: Copy, L, R> Copy for Binary<'_, F, L, R> {}

impl<F: fmt::Debug, L: fmt::Debug, R: fmt::Debug> fmt::Debug for Binary<'_, F, L, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binary")
            .field("op", &self.op)
            .field("lhs", self.lhs)
            .field("rhs", self.rhs)
            .finish()
    }
}

/// Build a lazy node combining `lhs` and `rhs` element-wise with `op`.
///
/// Shapes are not compared; see [`try_zip`].
///
/// ```
/// use ndfuse_core::prelude::*;
///
/// let a = Array::from_vec(vec![1_i32, 2], [2]).unwrap();
/// let b = Array::from_vec(vec![3_i32, 4], [2]).unwrap();
/// let masked = &a & &b;
/// assert_eq!(masked.eval([1]), 0);
/// ```
///
/// Operands of different rank do not type-check:
///
/// ```compile_fail
/// use ndfuse_core::prelude::*;
///
/// let a = Array::from_vec(vec![1_i32, 2], [2]).unwrap();
/// let b = Array::from_vec(vec![3_i32, 4], [1, 2]).unwrap();
/// let _ = &a + &b;
/// ```
///
/// Neither does an operator the element type lacks, such as `&` on floats:
///
/// ```compile_fail
/// use ndfuse_core::prelude::*;
///
/// let a = Array::from_vec(vec![1.0_f64, 2.0], [2]).unwrap();
/// let b = Array::from_vec(vec![3.0_f64, 4.0], [2]).unwrap();
/// let _ = &a & &b;
/// ```
///
/// A node borrows its operands, so it cannot outlive them:
///
/// ```compile_fail
/// use ndfuse_core::prelude::*;
///
/// let sum = {
///     let a = Array::from_vec(vec![1_i32, 2], [2]).unwrap();
///     let b = Array::from_vec(vec![3_i32, 4], [2]).unwrap();
///     &a + &b
/// };
/// assert_eq!(sum.eval([0]), 4);
/// ```
#[inline]
pub fn zip<'a, F, L, R>(lhs: &'a L, rhs: &'a R, op: F) -> Binary<'a, F, L, R>
where
    L: Expr,
    R: Expr<Rank = L::Rank>,
    L::Index: CommonIndex<R::Index>,
    F: BinaryFn<L::Value, R::Value>,
{
    Binary::new(op, lhs, rhs)
}

/// [`zip`] with a default-constructed function object:
/// `zip_default::<Add, _, _>(&a, &b)`.
#[inline]
pub fn zip_default<'a, F, L, R>(lhs: &'a L, rhs: &'a R) -> Binary<'a, F, L, R>
where
    L: Expr,
    R: Expr<Rank = L::Rank>,
    L::Index: CommonIndex<R::Index>,
    F: BinaryFn<L::Value, R::Value> + Default,
{
    zip(lhs, rhs, F::default())
}

/// [`zip`] that first checks both operands report the same extent on every
/// axis.
pub fn try_zip<'a, F, L, R>(lhs: &'a L, rhs: &'a R, op: F) -> Result<Binary<'a, F, L, R>>
where
    L: Expr,
    R: Expr<Rank = L::Rank>,
    L::Index: CommonIndex<R::Index>,
    F: BinaryFn<L::Value, R::Value>,
{
    if let Err(err) = shapes_agree(lhs, rhs) {
        log::debug!("rejecting element-wise zip: {err}");
        return Err(err);
    }
    Ok(zip(lhs, rhs, op))
}

/// Compare the extents of two operands axis by axis.
fn shapes_agree<L, R>(lhs: &L, rhs: &R) -> Result<()>
where
    L: Expr,
    R: Expr<Rank = L::Rank>,
{
    let rank = <L::Rank as Rank>::RANK;
    if (0..rank).all(|axis| lhs.dim(axis).to_usize() == rhs.dim(axis).to_usize()) {
        return Ok(());
    }
    Err(CoreError::DimensionMismatch {
        expected: (0..rank).map(|axis| lhs.dim(axis).to_usize()).collect(),
        got: (0..rank).map(|axis| rhs.dim(axis).to_usize()).collect(),
    })
}
