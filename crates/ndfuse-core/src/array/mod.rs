//! Owned N-dimensional leaf storage with static rank.
//!
//! [`Array`] is the terminal [`Expr`]: it stores elements contiguously in
//! row-major (C) order and answers `eval` with a single strided read. Lazy
//! nodes borrow arrays; [`crate::eval::materialize`] turns any expression back
//! into an array.

mod create;
mod display;

use core::marker::PhantomData;

use crate::error::{CoreError, Result};
use crate::expr::Expr;
use crate::index::{Const, IndexType};

/// An N-dimensional array with compile-time rank.
///
/// # Type Parameters
///
/// - `T`: The element type.
/// - `N`: The number of axes.
/// - `I`: The per-axis index type reported through [`Expr`]; defaults to
///   `usize`.
#[derive(Debug, Clone)]
pub struct Array<T, const N: usize, I = usize> {
    data: Vec<T>,
    shape: [usize; N],
    strides: [usize; N],
    _index: PhantomData<I>,
}

impl<T, const N: usize> Array<T, N> {
    /// Wrap row-major `data` as an array of the given shape.
    ///
    /// Fails with [`CoreError::InvalidShape`] unless the extents multiply to
    /// `data.len()`.
    pub fn from_vec(data: Vec<T>, shape: [usize; N]) -> Result<Self> {
        let Some(numel) = shape.iter().try_fold(1_usize, |acc, &d| acc.checked_mul(d)) else {
            return Err(CoreError::InvalidShape {
                shape: shape.to_vec(),
                reason: "element count overflows usize",
            });
        };
        if numel != data.len() {
            return Err(CoreError::InvalidShape {
                shape: shape.to_vec(),
                reason: "shape product does not match data length",
            });
        }
        Ok(Self::from_parts(data, shape))
    }

    /// [`Array::from_vec`] on a copy of `data`.
    pub fn from_slice(data: &[T], shape: [usize; N]) -> Result<Self>
    where
        T: Clone,
    {
        Self::from_vec(data.to_vec(), shape)
    }

    pub(crate) fn from_parts(data: Vec<T>, shape: [usize; N]) -> Self {
        Self {
            data,
            shape,
            strides: compute_strides(&shape),
            _index: PhantomData,
        }
    }
}

impl<T, const N: usize, I: IndexType> Array<T, N, I> {
    /// Extent of every axis.
    #[inline]
    pub fn shape(&self) -> &[usize; N] {
        &self.shape
    }

    /// Row-major strides, in elements.
    #[inline]
    pub fn strides(&self) -> &[usize; N] {
        &self.strides
    }

    #[inline]
    pub fn ndim(&self) -> usize {
        N
    }

    /// Number of stored elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// `true` when some extent is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Storage in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Give up the array and keep its storage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Re-label the per-axis index type used through [`Expr`].
    pub fn with_index_type<J: IndexType>(self) -> Array<T, N, J> {
        Array {
            data: self.data,
            shape: self.shape,
            strides: self.strides,
            _index: PhantomData,
        }
    }

    fn flat_index(&self, index: &[usize; N]) -> Result<usize> {
        let mut flat = 0;
        for (axis, (&idx, &dim)) in index.iter().zip(self.shape.iter()).enumerate() {
            if idx >= dim {
                return Err(CoreError::IndexOutOfBounds {
                    index: index.to_vec(),
                    shape: self.shape.to_vec(),
                });
            }
            flat += idx * self.strides[axis];
        }
        Ok(flat)
    }

    /// Bounds-checked element read.
    pub fn get(&self, index: [usize; N]) -> Result<&T> {
        let flat = self.flat_index(&index)?;
        Ok(&self.data[flat])
    }

    /// Bounds-checked mutable element access.
    pub fn get_mut(&mut self, index: [usize; N]) -> Result<&mut T> {
        let flat = self.flat_index(&index)?;
        Ok(&mut self.data[flat])
    }

    /// Bounds-checked element write.
    pub fn set(&mut self, index: [usize; N], value: T) -> Result<()> {
        let flat = self.flat_index(&index)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Copy, const N: usize, I: IndexType> Expr for Array<T, N, I> {
    type Rank = Const<N>;
    type Value = T;
    type Index = I;

    /// Strided read without bounds validation beyond the slice access.
    #[inline]
    fn eval(&self, idx: [I; N]) -> T {
        let mut flat = 0;
        for axis in 0..N {
            let i = idx[axis].to_usize();
            debug_assert!(
                i < self.shape[axis],
                "index {i} out of bounds for axis {axis} of extent {}",
                self.shape[axis]
            );
            flat += i * self.strides[axis];
        }
        self.data[flat]
    }

    #[inline]
    fn dim(&self, axis: usize) -> I {
        I::from_usize(self.shape[axis])
    }
}

impl<T: PartialEq, const N: usize, I> PartialEq for Array<T, N, I> {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape && self.data == other.data
    }
}

/// Row-major strides for `shape`; the last axis is contiguous.
pub(crate) fn compute_strides<const N: usize>(shape: &[usize; N]) -> [usize; N] {
    let mut strides = [1usize; N];
    for i in (0..N.saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}
