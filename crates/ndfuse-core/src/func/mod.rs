//! The operator catalogue: scalar function objects that expression nodes
//! apply at every index.
//!
//! Each catalogue entry is its own type so the compiler can inline it into the
//! node's `eval`. Most entries are zero-sized; [`Clamp`] and [`Pow`] carry
//! their scalar parameters. The result type of each entry is derived from its
//! input types through the [`UnaryFn`] / [`BinaryFn`] associated `Output`.
//!
//! Plain closures implement both traits as well, which is the escape hatch
//! for operations the catalogue does not name:
//!
//! ```
//! # use ndfuse_core::func::UnaryFn;
//! let double = |x: f64| x * 2.0;
//! assert_eq!(UnaryFn::call(&double, 4.0), 8.0);
//! ```

mod binary;
mod unary;

pub use binary::{
    Add, BitAnd, BitOr, CmpEq, CmpGe, CmpGt, CmpLe, CmpLt, CmpNe, Div, Max, Min, MinMax, Mul,
    Rem, Sub,
};
pub use unary::{
    Abs, Acos, Acosh, Asin, Asinh, Atan, Atanh, Cast, Ceil, Clamp, Conj, Cos, Cosh, Exp, Exp2,
    Floor, Imag, IsFinite, IsInf, IsNan, Log, Log2, Log10, Norm, Pow, Pow2, Real, Sin, Sinh, Sqrt,
    Tan, Tanh, Trunc,
};

/// A scalar function of one argument.
pub trait UnaryFn<T> {
    type Output;

    fn call(&self, value: T) -> Self::Output;
}

/// A scalar function of two arguments.
pub trait BinaryFn<L, R> {
    type Output;

    fn call(&self, left: L, right: R) -> Self::Output;
}

impl<T, O, F> UnaryFn<T> for F
where
    F: Fn(T) -> O,
{
    type Output = O;

    #[inline]
    fn call(&self, value: T) -> O {
        self(value)
    }
}

impl<L, R, O, F> BinaryFn<L, R> for F
where
    F: Fn(L, R) -> O,
{
    type Output = O;

    #[inline]
    fn call(&self, left: L, right: R) -> O {
        self(left, right)
    }
}
