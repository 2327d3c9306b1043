//! Unary function objects: classifiers, transcendental math, rounding,
//! complex projections, casts, and the parameterised `Clamp` / `Pow`.

use core::fmt;
use core::marker::PhantomData;
use core::ops::Mul;

use num_traits::AsPrimitive;

use super::UnaryFn;
use crate::{Float, Integer, Signed};

// ======================================================================
// Float routines
// ======================================================================

macro_rules! float_functor {
    ($(#[$doc:meta])* $name:ident => $method:ident -> $out:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<T: Float> UnaryFn<T> for $name {
            type Output = $out;

            #[inline]
            fn call(&self, value: T) -> $out {
                Float::$method(value)
            }
        }
    };
    ($(#[$doc:meta])* $name:ident => $method:ident) => {
        float_functor!($(#[$doc])* $name => $method -> T);
    };
}

float_functor!(
    /// `true` where the value is NaN.
    IsNan => is_nan -> bool
);
float_functor!(
    /// `true` where the value is positive or negative infinity.
    IsInf => is_infinite -> bool
);
float_functor!(
    /// `true` where the value is neither NaN nor infinite.
    IsFinite => is_finite -> bool
);

// Integers are always finite.
macro_rules! integer_classifiers {
    ($($ty:ty),*) => {
        $(
            impl UnaryFn<$ty> for IsNan {
                type Output = bool;

                #[inline]
                fn call(&self, _: $ty) -> bool {
                    false
                }
            }

            impl UnaryFn<$ty> for IsInf {
                type Output = bool;

                #[inline]
                fn call(&self, _: $ty) -> bool {
                    false
                }
            }

            impl UnaryFn<$ty> for IsFinite {
                type Output = bool;

                #[inline]
                fn call(&self, _: $ty) -> bool {
                    true
                }
            }
        )*
    };
}

integer_classifiers!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

float_functor!(Sin => sin);
float_functor!(Cos => cos);
float_functor!(Tan => tan);
float_functor!(Sinh => sinh);
float_functor!(Cosh => cosh);
float_functor!(Tanh => tanh);
float_functor!(Asin => asin);
float_functor!(Acos => acos);
float_functor!(Atan => atan);
float_functor!(Asinh => asinh);
float_functor!(Acosh => acosh);
float_functor!(Atanh => atanh);

float_functor!(Exp => exp);
float_functor!(Exp2 => exp2);
float_functor!(
    /// Natural logarithm.
    Log => ln
);
float_functor!(Log2 => log2);
float_functor!(Log10 => log10);

float_functor!(Sqrt => sqrt);
float_functor!(Ceil => ceil);
float_functor!(Floor => floor);
float_functor!(Trunc => trunc);

// ======================================================================
// Absolute value
// ======================================================================

/// Absolute value of signed integers and floats; magnitude of complex values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Abs;

impl<T: Signed> UnaryFn<T> for Abs {
    type Output = T;

    #[inline]
    fn call(&self, value: T) -> T {
        Signed::abs(value)
    }
}

// ======================================================================
// Complex projections (identity-like on the reals)
// ======================================================================

/// Real part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Real;

/// Imaginary part; zero for real inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Imag;

/// Squared magnitude, `re² + im²`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Norm;

/// Complex conjugate; the value itself for real inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Conj;

impl<T: Float> UnaryFn<T> for Real {
    type Output = T;

    #[inline]
    fn call(&self, value: T) -> T {
        value
    }
}

impl<T: Float> UnaryFn<T> for Imag {
    type Output = T;

    #[inline]
    fn call(&self, _value: T) -> T {
        T::zero()
    }
}

impl<T: Float> UnaryFn<T> for Norm {
    type Output = T;

    #[inline]
    fn call(&self, value: T) -> T {
        value * value
    }
}

impl<T: Float> UnaryFn<T> for Conj {
    type Output = T;

    #[inline]
    fn call(&self, value: T) -> T {
        value
    }
}

#[cfg(feature = "complex")]
mod complex {
    use num_complex::Complex;

    use super::*;

    macro_rules! complex_functor {
        ($ty:ty; $($name:ident => $method:ident),* $(,)?) => {
            $(
                impl UnaryFn<Complex<$ty>> for $name {
                    type Output = Complex<$ty>;

                    #[inline]
                    fn call(&self, value: Complex<$ty>) -> Complex<$ty> {
                        value.$method()
                    }
                }
            )*
        };
    }

    macro_rules! impl_complex {
        ($ty:ty) => {
            complex_functor!($ty;
                Sin => sin, Cos => cos, Tan => tan,
                Sinh => sinh, Cosh => cosh, Tanh => tanh,
                Asin => asin, Acos => acos, Atan => atan,
                Asinh => asinh, Acosh => acosh, Atanh => atanh,
                Exp => exp, Log => ln, Sqrt => sqrt, Conj => conj,
            );

            impl UnaryFn<Complex<$ty>> for Real {
                type Output = $ty;

                #[inline]
                fn call(&self, value: Complex<$ty>) -> $ty {
                    value.re
                }
            }

            impl UnaryFn<Complex<$ty>> for Imag {
                type Output = $ty;

                #[inline]
                fn call(&self, value: Complex<$ty>) -> $ty {
                    value.im
                }
            }

            impl UnaryFn<Complex<$ty>> for Norm {
                type Output = $ty;

                #[inline]
                fn call(&self, value: Complex<$ty>) -> $ty {
                    value.norm_sqr()
                }
            }

            impl UnaryFn<Complex<$ty>> for Abs {
                type Output = $ty;

                #[inline]
                fn call(&self, value: Complex<$ty>) -> $ty {
                    value.norm()
                }
            }

            impl UnaryFn<Complex<$ty>> for IsNan {
                type Output = bool;

                #[inline]
                fn call(&self, value: Complex<$ty>) -> bool {
                    value.is_nan()
                }
            }

            impl UnaryFn<Complex<$ty>> for IsInf {
                type Output = bool;

                #[inline]
                fn call(&self, value: Complex<$ty>) -> bool {
                    value.is_infinite()
                }
            }

            impl UnaryFn<Complex<$ty>> for IsFinite {
                type Output = bool;

                #[inline]
                fn call(&self, value: Complex<$ty>) -> bool {
                    value.is_finite()
                }
            }
        };
    }

    impl_complex!(f32);
    impl_complex!(f64);
}

// ======================================================================
// Cast
// ======================================================================

/// Numeric conversion to `To` with `as` semantics (truncating, saturating
/// float-to-int, wrapping int-to-int).
pub struct Cast<To>(PhantomData<fn() -> To>);

impl<To> Cast<To> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<To> Default for Cast<To> {
    fn default() -> Self {
        Self::new()
    }
}

impl<To> Clone for Cast<To> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<To> Copy for Cast<To> {}

impl<To> fmt::Debug for Cast<To> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cast<{}>", core::any::type_name::<To>())
    }
}

impl<Src, To> UnaryFn<Src> for Cast<To>
where
    Src: AsPrimitive<To>,
    To: Copy + 'static,
{
    type Output = To;

    #[inline]
    fn call(&self, value: Src) -> To {
        value.as_()
    }
}

// ======================================================================
// Clamp
// ======================================================================

/// Clamp into `[lo, hi]`: `lo` below the range, `hi` above it, the value
/// itself otherwise. NaN passes through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Clamp<T> {
    lo: T,
    hi: T,
}

impl<T> Clamp<T> {
    pub fn new(lo: T, hi: T) -> Self {
        Self { lo, hi }
    }

    pub fn lo(&self) -> &T {
        &self.lo
    }

    pub fn hi(&self) -> &T {
        &self.hi
    }
}

impl<T: PartialOrd + Copy> UnaryFn<T> for Clamp<T> {
    type Output = T;

    #[inline]
    fn call(&self, value: T) -> T {
        if value < self.lo {
            self.lo
        } else if value > self.hi {
            self.hi
        } else {
            value
        }
    }
}

// ======================================================================
// Powers
// ======================================================================

/// Raise to a fixed exponent.
///
/// The exponent type picks the routine: an exponent of the element's own
/// float type uses `powf`, an `i32` exponent on floats uses `powi`, and a
/// `u32` exponent on integers uses integer exponentiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pow<E> {
    exponent: E,
}

impl<E> Pow<E> {
    pub fn new(exponent: E) -> Self {
        Self { exponent }
    }

    pub fn exponent(&self) -> &E {
        &self.exponent
    }
}

impl<T: Float> UnaryFn<T> for Pow<T> {
    type Output = T;

    #[inline]
    fn call(&self, value: T) -> T {
        value.powf(self.exponent)
    }
}

impl<T: Float> UnaryFn<T> for Pow<i32> {
    type Output = T;

    #[inline]
    fn call(&self, value: T) -> T {
        value.powi(self.exponent)
    }
}

impl<T: Integer> UnaryFn<T> for Pow<u32> {
    type Output = T;

    #[inline]
    fn call(&self, value: T) -> T {
        Integer::pow(value, self.exponent)
    }
}

/// `value * value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pow2;

impl<T> UnaryFn<T> for Pow2
where
    T: Mul<Output = T> + Copy,
{
    type Output = T;

    #[inline]
    fn call(&self, value: T) -> T {
        value * value
    }
}
