//! Element type traits for array leaves and the operator catalogue.
//!
//! ```text
//! Scalar
//!   ├── Integer          (i8 ..= isize, u8 ..= usize)
//!   └── Signed           (signed integers, floats)
//!         └── Float      (f32, f64)
//! ```
//!
//! The catalogue in [`crate::func`] bounds its scalar routines on these
//! traits, so an expression over `f32`, `f64`, or any primitive integer picks
//! its routine at compile time. Elements outside the hierarchy (`bool`,
//! complex numbers, user types) still work with every entry whose bound they
//! satisfy.

use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

// ---------------------------------------------------------------------------
// Scalar
// ---------------------------------------------------------------------------

/// Numeric element with the four arithmetic operators and a zero and one.
///
/// Integers are first-class: nothing here requires floating point.
pub trait Scalar:
    Copy
    + Default
    + fmt::Debug
    + fmt::Display
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + 'static
{
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// Convert from `usize`, as an `as` cast would.
    fn from_usize(v: usize) -> Self;
}

/// Primitive integers.
pub trait Integer: Scalar {
    /// Raise to a non-negative integer power. Overflow follows the host
    /// arithmetic (panics in debug builds).
    fn pow(self, exp: u32) -> Self;
}

/// Scalars with a sign: signed integers and floats.
pub trait Signed: Scalar + Neg<Output = Self> {
    fn abs(self) -> Self;
}

// ---------------------------------------------------------------------------
// Float
// ---------------------------------------------------------------------------

/// `f32` and `f64`: everything the transcendental catalogue entries call.
///
/// Every method forwards to the inherent method of the same name, so domain
/// errors give whatever the platform gives (NaN, infinities).
pub trait Float: Signed {
    fn sqrt(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn sinh(self) -> Self;
    fn cosh(self) -> Self;
    fn tanh(self) -> Self;
    fn asin(self) -> Self;
    fn acos(self) -> Self;
    fn atan(self) -> Self;
    fn asinh(self) -> Self;
    fn acosh(self) -> Self;
    fn atanh(self) -> Self;
    fn exp(self) -> Self;
    fn exp2(self) -> Self;
    fn ln(self) -> Self;
    fn log2(self) -> Self;
    fn log10(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
    fn trunc(self) -> Self;
    fn powf(self, n: Self) -> Self;
    fn powi(self, n: i32) -> Self;
    fn is_nan(self) -> bool;
    fn is_infinite(self) -> bool;
    fn is_finite(self) -> bool;
}

// ===========================================================================
// Primitive implementations
// ===========================================================================

macro_rules! forward {
    ($ty:ty; $($method:ident($($arg:ident: $arg_ty:ty),*) -> $out:ty),* $(,)?) => {
        $(
            #[inline]
            fn $method(self $(, $arg: $arg_ty)*) -> $out {
                <$ty>::$method(self $(, $arg)*)
            }
        )*
    };
}

macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn zero() -> Self {
                    0.0
                }
                #[inline]
                fn one() -> Self {
                    1.0
                }
                #[inline]
                #[allow(clippy::cast_precision_loss)]
                fn from_usize(v: usize) -> Self {
                    v as Self
                }
            }

            impl Signed for $ty {
                forward!($ty; abs() -> Self);
            }

            impl Float for $ty {
                forward!($ty;
                    sqrt() -> Self, sin() -> Self, cos() -> Self, tan() -> Self,
                    sinh() -> Self, cosh() -> Self, tanh() -> Self,
                    asin() -> Self, acos() -> Self, atan() -> Self,
                    asinh() -> Self, acosh() -> Self, atanh() -> Self,
                    exp() -> Self, exp2() -> Self,
                    ln() -> Self, log2() -> Self, log10() -> Self,
                    floor() -> Self, ceil() -> Self, trunc() -> Self,
                    powf(n: Self) -> Self, powi(n: i32) -> Self,
                    is_nan() -> bool, is_infinite() -> bool, is_finite() -> bool,
                );
            }
        )*
    };
}

impl_float!(f32, f64);

macro_rules! impl_int {
    (@base $ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
            #[inline]
            #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
            fn from_usize(v: usize) -> Self {
                v as Self
            }
        }

        impl Integer for $ty {
            forward!($ty; pow(exp: u32) -> Self);
        }
    };
    (signed: $($ty:ty),*) => {
        $(
            impl_int!(@base $ty);

            impl Signed for $ty {
                forward!($ty; abs() -> Self);
            }
        )*
    };
    (unsigned: $($ty:ty),*) => {
        $(impl_int!(@base $ty);)*
    };
}

impl_int!(signed: i8, i16, i32, i64, isize);
impl_int!(unsigned: u8, u16, u32, u64, usize);
