//! Compile-time rank, per-axis index types, and axis selectors.
//!
//! An expression's multi-index is `[I; N]`, where `N` is carried by the
//! [`Const`] rank marker and `I` is an [`IndexType`]. Binary nodes whose
//! operands use different index types report the promoted type chosen by
//! [`CommonIndex`].

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

// ---------------------------------------------------------------------------
// IndexType
// ---------------------------------------------------------------------------

/// Integral type used for a single axis index or extent.
pub trait IndexType:
    Copy + fmt::Debug + fmt::Display + Eq + Ord + Hash + Send + Sync + 'static
{
    /// Convert from `usize`, wrapping like an `as` cast.
    fn from_usize(v: usize) -> Self;

    /// Convert to `usize`, wrapping like an `as` cast.
    fn to_usize(self) -> usize;

    /// Convert into another index type.
    #[inline]
    fn cast<J: IndexType>(self) -> J {
        J::from_usize(self.to_usize())
    }
}

macro_rules! impl_index_type {
    ($($ty:ty),*) => {
        $(
            impl IndexType for $ty {
                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn from_usize(v: usize) -> Self {
                    v as Self
                }
                #[inline]
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_index_type!(u32, u64, usize, i32, i64, isize);

// ---------------------------------------------------------------------------
// CommonIndex: index type promotion
// ---------------------------------------------------------------------------

/// The promoted index type of a pair of operands.
///
/// Same-signedness pairs promote to the wider type. Mixed pairs promote to
/// the unsigned type unless the signed one is strictly wider.
pub trait CommonIndex<Rhs: IndexType = Self>: IndexType {
    type Output: IndexType;
}

macro_rules! same_index {
    ($($ty:ty),*) => {
        $(
            impl CommonIndex<$ty> for $ty {
                type Output = $ty;
            }
        )*
    };
}

macro_rules! common_index {
    ($($a:ty, $b:ty => $out:ty);* $(;)?) => {
        $(
            impl CommonIndex<$b> for $a {
                type Output = $out;
            }
            impl CommonIndex<$a> for $b {
                type Output = $out;
            }
        )*
    };
}

same_index!(u32, u64, usize, i32, i64, isize);
common_index! {
    u32, u64 => u64;
    u32, usize => usize;
    u64, usize => u64;
    i32, i64 => i64;
    i32, isize => isize;
    i64, isize => i64;
    u32, i32 => u32;
    u32, i64 => i64;
    u32, isize => isize;
    u64, i32 => u64;
    u64, i64 => u64;
    u64, isize => u64;
    usize, i32 => usize;
    usize, i64 => usize;
    usize, isize => usize;
}

// ---------------------------------------------------------------------------
// Rank
// ---------------------------------------------------------------------------

/// Compile-time number of axes, together with the multi-index type it implies.
pub trait Rank: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// Number of axes.
    const RANK: usize;

    /// One index per axis.
    type NdIndex<I: IndexType>: Copy + fmt::Debug + PartialEq + AsRef<[I]> + AsMut<[I]>;

    /// Build a multi-index from a per-axis generator.
    fn index_from_fn<I: IndexType, F: FnMut(usize) -> I>(f: F) -> Self::NdIndex<I>;

    /// Convert every component of a multi-index into another index type.
    #[inline]
    fn cast_index<I: IndexType, J: IndexType>(idx: Self::NdIndex<I>) -> Self::NdIndex<J> {
        Self::index_from_fn::<J, _>(|axis| idx.as_ref()[axis].cast())
    }
}

/// Rank marker for `N` axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Const<const N: usize>;

impl<const N: usize> Rank for Const<N> {
    const RANK: usize = N;

    type NdIndex<I: IndexType> = [I; N];

    #[inline]
    fn index_from_fn<I: IndexType, F: FnMut(usize) -> I>(f: F) -> [I; N] {
        core::array::from_fn(f)
    }

    #[inline]
    fn cast_index<I: IndexType, J: IndexType>(idx: [I; N]) -> [J; N] {
        idx.map(|i| i.cast())
    }
}

// ---------------------------------------------------------------------------
// Axis selectors
// ---------------------------------------------------------------------------

/// Selects one axis, either at runtime (`usize`) or at compile time ([`Ax`]).
pub trait Axis: Copy {
    fn get(self) -> usize;
}

impl Axis for usize {
    #[inline]
    fn get(self) -> usize {
        self
    }
}

/// Compile-time axis tag: `expr.dim_of(Ax::<1>)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ax<const A: usize>;

impl<const A: usize> Axis for Ax<A> {
    #[inline]
    fn get(self) -> usize {
        A
    }
}

// ---------------------------------------------------------------------------
// Indices: row-major walker
// ---------------------------------------------------------------------------

/// Iterator over every multi-index of a shape in row-major (C) order.
///
/// Yields nothing when any extent is zero and a single empty index at rank 0.
#[derive(Debug, Clone)]
pub struct Indices<I, const N: usize> {
    shape: [usize; N],
    next: Option<[usize; N]>,
    _index: PhantomData<I>,
}

impl<I: IndexType, const N: usize> Indices<I, N> {
    /// Walk `shape` in row-major order.
    pub fn new(shape: [usize; N]) -> Self {
        let next = if shape.contains(&0) {
            None
        } else {
            Some([0; N])
        };
        Self {
            shape,
            next,
            _index: PhantomData,
        }
    }

    /// The shape being walked.
    #[inline]
    pub fn shape(&self) -> &[usize; N] {
        &self.shape
    }
}

impl<I: IndexType, const N: usize> Iterator for Indices<I, N> {
    type Item = [I; N];

    fn next(&mut self) -> Option<[I; N]> {
        let current = self.next?;

        // Odometer increment from the last axis.
        let mut advanced = current;
        let mut carried = true;
        for axis in (0..N).rev() {
            advanced[axis] += 1;
            if advanced[axis] < self.shape[axis] {
                carried = false;
                break;
            }
            advanced[axis] = 0;
        }
        self.next = if carried { None } else { Some(advanced) };

        Some(current.map(I::from_usize))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let Some(current) = self.next else {
            return (0, Some(0));
        };
        let total: usize = self.shape.iter().product();
        let mut consumed = 0;
        for (axis, &i) in current.iter().enumerate() {
            consumed = consumed * self.shape[axis] + i;
        }
        let remaining = total - consumed;
        (remaining, Some(remaining))
    }
}

impl<I: IndexType, const N: usize> ExactSizeIterator for Indices<I, N> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn promoted<A: CommonIndex<B>, B: IndexType>() -> &'static str {
        core::any::type_name::<A::Output>()
    }

    #[test]
    fn test_common_index_table() {
        assert_eq!(promoted::<usize, usize>(), "usize");
        assert_eq!(promoted::<u32, u64>(), "u64");
        assert_eq!(promoted::<u64, u32>(), "u64");
        assert_eq!(promoted::<i32, u32>(), "u32");
        assert_eq!(promoted::<u32, i64>(), "i64");
        assert_eq!(promoted::<isize, usize>(), "usize");
    }

    #[test]
    fn test_index_cast() {
        assert_eq!(7_i32.cast::<usize>(), 7);
        assert_eq!(9_usize.cast::<u32>(), 9);
    }

    #[test]
    fn test_const_rank() {
        assert_eq!(<Const<3> as Rank>::RANK, 3);
        let idx = <Const<3> as Rank>::index_from_fn::<usize, _>(|a| a * 2);
        assert_eq!(idx, [0, 2, 4]);
        let cast = <Const<3> as Rank>::cast_index::<usize, i64>(idx);
        assert_eq!(cast, [0_i64, 2, 4]);
    }

    #[test]
    fn test_axis_selectors() {
        assert_eq!(Axis::get(2_usize), 2);
        assert_eq!(Ax::<1>.get(), 1);
    }

    #[test]
    fn test_indices_row_major() {
        let all: Vec<[usize; 2]> = Indices::new([2, 3]).collect();
        assert_eq!(
            all,
            vec![[0, 0], [0, 1], [0, 2], [1, 0], [1, 1], [1, 2]]
        );
    }

    #[test]
    fn test_indices_size_hint() {
        let mut it = Indices::<u32, 2>::new([2, 2]);
        assert_eq!(it.len(), 4);
        it.next();
        assert_eq!(it.len(), 3);
    }

    #[test]
    fn test_indices_empty_and_scalar() {
        assert_eq!(Indices::<usize, 2>::new([3, 0]).count(), 0);
        let scalar: Vec<[usize; 0]> = Indices::new([]).collect();
        assert_eq!(scalar, vec![[]]);
    }
}
