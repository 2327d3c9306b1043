//! Reference evaluation driver.
//!
//! Expressions stay lazy until something walks their index space. The
//! helpers here do that walk in row-major order, either visiting every
//! element ([`for_each`]) or collecting them into a fresh [`Array`]
//! ([`materialize`]). [`checked_eval`] and [`checked_dim`] validate their
//! arguments against the root instead of trusting the caller.

use crate::array::Array;
use crate::error::{CoreError, Result};
use crate::expr::Expr;
use crate::index::{Const, IndexType, Indices};

/// The root's extents as `usize`.
fn shape_of<E, const N: usize>(expr: &E) -> [usize; N]
where
    E: Expr<Rank = Const<N>>,
{
    core::array::from_fn(|axis| expr.dim(axis).to_usize())
}

/// Every multi-index of `expr`'s shape in row-major order.
pub fn indices<E, const N: usize>(expr: &E) -> Indices<E::Index, N>
where
    E: Expr<Rank = Const<N>>,
{
    Indices::new(shape_of(expr))
}

/// Call `f(idx, value)` for every element of `expr` in row-major order.
///
/// ```
/// # use ndfuse_core::prelude::*;
/// # use ndfuse_core::eval::for_each;
/// let a = Array::from_vec(vec![1, 2, 3, 4], [2, 2]).unwrap();
/// let mut total = 0;
/// for_each(&(&a * &a), |_, v| total += v);
/// assert_eq!(total, 30);
/// ```
pub fn for_each<E, F, const N: usize>(expr: &E, mut f: F)
where
    E: Expr<Rank = Const<N>>,
    F: FnMut([E::Index; N], E::Value),
{
    for idx in indices(expr) {
        f(idx, expr.eval(idx));
    }
}

/// Evaluate every element of `expr` once and store the results.
///
/// This is the only operation in the crate that allocates for an
/// expression: one buffer, reserved up front.
///
/// ```
/// # use ndfuse_core::prelude::*;
/// # use ndfuse_core::eval::materialize;
/// let a = Array::from_vec(vec![1.0_f64, 4.0, 9.0], [3]).unwrap();
/// let root = sqrt(&a);
/// assert_eq!(materialize(&root).as_slice(), &[1.0, 2.0, 3.0]);
/// ```
pub fn materialize<E, const N: usize>(expr: &E) -> Array<E::Value, N, E::Index>
where
    E: Expr<Rank = Const<N>>,
{
    let shape = shape_of(expr);
    let walker = Indices::<E::Index, N>::new(shape);
    log::debug!(
        "materializing expression of shape {shape:?} ({} elements)",
        walker.len()
    );
    let data: Vec<E::Value> = walker.map(|idx| expr.eval(idx)).collect();
    Array::from_parts(data, shape).with_index_type()
}

/// [`Expr::eval`] that first checks the tree and the index.
///
/// Fails with [`CoreError::DimensionMismatch`] when some binary node combines
/// operands of different shapes (see [`Expr::check_shapes`]), and with
/// [`CoreError::IndexOutOfBounds`] when `idx` lies outside the root's shape.
pub fn checked_eval<E, const N: usize>(expr: &E, idx: [E::Index; N]) -> Result<E::Value>
where
    E: Expr<Rank = Const<N>>,
{
    expr.check_shapes()?;
    let shape = shape_of(expr);
    let in_bounds = idx
        .iter()
        .zip(shape.iter())
        .all(|(i, &extent)| i.to_usize() < extent);
    if !in_bounds {
        return Err(CoreError::IndexOutOfBounds {
            index: idx.iter().map(|i| i.to_usize()).collect(),
            shape: shape.to_vec(),
        });
    }
    Ok(expr.eval(idx))
}

/// [`Expr::dim`] that rejects `axis >= rank` instead of panicking.
pub fn checked_dim<E: Expr>(expr: &E, axis: usize) -> Result<E::Index> {
    let rank = expr.rank();
    if axis >= rank {
        return Err(CoreError::AxisOutOfBounds { axis, rank });
    }
    Ok(expr.dim(axis))
}
