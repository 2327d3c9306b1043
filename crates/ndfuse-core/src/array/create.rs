//! Array creation functions analogous to `np.zeros`, `np.ones`, etc.

use crate::Scalar;

use super::Array;
use crate::index::Indices;

impl<T: Scalar, const N: usize> Array<T, N> {
    /// Create an array filled with zeros.
    ///
    /// ```
    /// # use ndfuse_core::Array;
    /// let t = Array::<f64, 2>::zeros([2, 3]);
    /// assert_eq!(t.shape(), &[2, 3]);
    /// assert!(t.iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(shape: [usize; N]) -> Self {
        Self::full(shape, T::zero())
    }

    /// Create an array filled with ones.
    pub fn ones(shape: [usize; N]) -> Self {
        Self::full(shape, T::one())
    }

    /// Create an array filled with a constant value.
    ///
    /// # Panics
    ///
    /// Panics if the extents multiply past `usize::MAX`.
    pub fn full(shape: [usize; N], value: T) -> Self {
        let numel = shape
            .iter()
            .try_fold(1_usize, |acc, &d| acc.checked_mul(d))
            .unwrap_or_else(|| panic!("element count of {shape:?} overflows usize"));
        Self::from_parts(vec![value; numel], shape)
    }
}

impl<T, const N: usize> Array<T, N> {
    /// Create an array by calling `f` with every multi-index in row-major
    /// order.
    ///
    /// ```
    /// # use ndfuse_core::Array;
    /// let t = Array::from_fn([2, 2], |[r, c]| r * 10 + c);
    /// assert_eq!(t.as_slice(), &[0, 1, 10, 11]);
    /// ```
    pub fn from_fn<F>(shape: [usize; N], f: F) -> Self
    where
        F: FnMut([usize; N]) -> T,
    {
        let data = Indices::<usize, N>::new(shape).map(f).collect();
        Self::from_parts(data, shape)
    }
}

impl<T: Scalar> Array<T, 1> {
    /// Create a 1-D array with values `[0, 1, 2, ..., n-1]`.
    ///
    /// ```
    /// # use ndfuse_core::Array;
    /// let t = Array::<i32, 1>::arange(5);
    /// assert_eq!(t.as_slice(), &[0, 1, 2, 3, 4]);
    /// ```
    pub fn arange(n: usize) -> Self {
        let data: Vec<T> = (0..n).map(T::from_usize).collect();
        Self::from_parts(data, [n])
    }
}
