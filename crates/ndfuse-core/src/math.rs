//! Named element-wise entry points (ufuncs).
//!
//! Free functions mirroring `NumPy`'s top-level ufuncs (`np.sin`,
//! `np.clip`, `np.minimum`, ...). Each one only builds a lazy node around
//! its operand(s) with the matching [`crate::func`] entry; evaluation happens
//! when the result is indexed.

use crate::expr::{Binary, Expr, Unary, zip};
use crate::func::{self, BinaryFn, Cast, Clamp, Max, Min, MinMax, Pow, UnaryFn};
use crate::index::CommonIndex;

// ======================================================================
// Simple unary functions
// ======================================================================

macro_rules! unary_entry {
    ($($(#[$doc:meta])* $fn_name:ident => $functor:ident;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $fn_name<E>(expr: &E) -> Unary<'_, func::$functor, E>
            where
                E: Expr,
                func::$functor: UnaryFn<E::Value>,
            {
                Unary::new(func::$functor, expr)
            }
        )*
    };
}

unary_entry! {
    /// Element-wise NaN test.
    isnan => IsNan;
    /// Element-wise infinity test.
    isinf => IsInf;
    /// Element-wise finiteness test.
    isfinite => IsFinite;
    /// Element-wise absolute value (magnitude for complex elements).
    abs => Abs;

    /// Element-wise sine.
    sin => Sin;
    /// Element-wise cosine.
    cos => Cos;
    /// Element-wise tangent.
    tan => Tan;
    /// Element-wise hyperbolic sine.
    sinh => Sinh;
    /// Element-wise hyperbolic cosine.
    cosh => Cosh;
    /// Element-wise hyperbolic tangent.
    tanh => Tanh;
    /// Element-wise arcsine.
    asin => Asin;
    /// Element-wise arccosine.
    acos => Acos;
    /// Element-wise arctangent.
    atan => Atan;
    /// Element-wise inverse hyperbolic sine.
    asinh => Asinh;
    /// Element-wise inverse hyperbolic cosine.
    acosh => Acosh;
    /// Element-wise inverse hyperbolic tangent.
    atanh => Atanh;

    /// Element-wise natural exponential.
    exp => Exp;
    /// Element-wise `2^x`.
    exp2 => Exp2;
    /// Element-wise natural logarithm.
    log => Log;
    /// Element-wise base-2 logarithm.
    log2 => Log2;
    /// Element-wise base-10 logarithm.
    log10 => Log10;

    /// Element-wise square root.
    sqrt => Sqrt;
    /// Element-wise ceiling.
    ceil => Ceil;
    /// Element-wise floor.
    floor => Floor;
    /// Element-wise truncation toward zero.
    trunc => Trunc;

    /// Element-wise real part.
    real => Real;
    /// Element-wise imaginary part.
    imag => Imag;
    /// Element-wise squared magnitude.
    norm => Norm;
    /// Element-wise complex conjugate.
    conj => Conj;
    /// Element-wise `x * x`.
    pow2 => Pow2;
}

// ======================================================================
// Parameterised unary functions
// ======================================================================

/// Element-wise conversion to `To`: `cast::<i32, _>(&a)`.
#[inline]
pub fn cast<To, E>(expr: &E) -> Unary<'_, Cast<To>, E>
where
    E: Expr,
    Cast<To>: UnaryFn<E::Value>,
{
    Unary::new(Cast::new(), expr)
}

/// Clamp every element into `[lo, hi]`.
#[inline]
pub fn clamp<E>(expr: &E, lo: E::Value, hi: E::Value) -> Unary<'_, Clamp<E::Value>, E>
where
    E: Expr,
    Clamp<E::Value>: UnaryFn<E::Value>,
{
    Unary::new(Clamp::new(lo, hi), expr)
}

/// Raise every element to `exponent`. See [`Pow`] for the accepted exponent
/// types.
#[inline]
pub fn pow<E, X>(expr: &E, exponent: X) -> Unary<'_, Pow<X>, E>
where
    E: Expr,
    Pow<X>: UnaryFn<E::Value>,
{
    Unary::new(Pow::new(exponent), expr)
}

// ======================================================================
// Binary combiners
// ======================================================================

macro_rules! binary_entry {
    ($($(#[$doc:meta])* $fn_name:ident => $functor:ty;)*) => {
        $(
            $(#[$doc])*
            #[inline]
            pub fn $fn_name<'a, L, R>(lhs: &'a L, rhs: &'a R) -> Binary<'a, $functor, L, R>
            where
                L: Expr,
                R: Expr<Rank = L::Rank>,
                L::Index: CommonIndex<R::Index>,
                $functor: BinaryFn<L::Value, R::Value>,
            {
                zip(lhs, rhs, <$functor>::default())
            }
        )*
    };
}

binary_entry! {
    /// Element-wise minimum; the left element wins ties.
    min => Min;
    /// Element-wise maximum; the left element wins ties.
    max => Max;
    /// Element-wise `(min, max)` pair.
    minmax => MinMax;

    /// Lazy element-wise `<`.
    lt => func::CmpLt;
    /// Lazy element-wise `>`.
    gt => func::CmpGt;
    /// Lazy element-wise `<=`.
    le => func::CmpLe;
    /// Lazy element-wise `>=`.
    ge => func::CmpGe;
    /// Lazy element-wise `==`.
    eq => func::CmpEq;
    /// Lazy element-wise `!=`.
    ne => func::CmpNe;
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::Array;
    use crate::index::Const;

    fn collect<E: Expr<Rank = Const<1>, Index = usize>>(e: &E) -> Vec<E::Value> {
        (0..e.dim(0)).map(|i| e.eval([i])).collect()
    }

    #[test]
    fn test_sqrt_exp_log() {
        let t = Array::from_vec(vec![1.0_f64, 4.0, 9.0], [3]).unwrap();
        let s = sqrt(&t);
        assert_eq!(s.eval([0]), 1.0);
        assert_eq!(s.eval([1]), 2.0);
        assert_eq!(s.eval([2]), 3.0);

        let grown = exp(&t);
        let round_trip = log(&grown);
        assert!((round_trip.eval([2]) - 9.0).abs() < 1e-12);
    }

    #[test]
    fn test_sin_cos_known_values() {
        let t = Array::from_vec(vec![0.0_f64, std::f64::consts::FRAC_PI_2], [2]).unwrap();
        let s = sin(&t);
        assert!(s.eval([0]).abs() < 1e-15);
        assert!((s.eval([1]) - 1.0).abs() < 1e-15);

        let c = cos(&t);
        assert!((c.eval([0]) - 1.0).abs() < 1e-15);
        assert!(c.eval([1]).abs() < 1e-15);
    }

    #[test]
    fn test_hyperbolic_inverse_pairs() {
        let t = Array::from_vec(vec![0.25_f64, 0.5], [2]).unwrap();
        let forward = tanh(&t);
        let back = atanh(&forward);
        assert!((back.eval([0]) - 0.25).abs() < 1e-14);
        let forward = sinh(&t);
        let back = asinh(&forward);
        assert!((back.eval([1]) - 0.5).abs() < 1e-14);
        assert!((cosh(&t).eval([0]) - 0.25_f64.cosh()).abs() < 1e-15);
        assert!((acos(&t).eval([1]) - 0.5_f64.acos()).abs() < 1e-15);
        assert!((asin(&t).eval([1]) - 0.5_f64.asin()).abs() < 1e-15);
        assert!((atan(&t).eval([1]) - 0.5_f64.atan()).abs() < 1e-15);
        assert!((tan(&t).eval([0]) - 0.25_f64.tan()).abs() < 1e-15);
    }

    #[test]
    fn test_acosh_domain_is_host_defined() {
        let t = Array::from_vec(vec![0.5_f64, 1.0], [2]).unwrap();
        let a = acosh(&t);
        assert!(a.eval([0]).is_nan());
        assert_eq!(a.eval([1]), 0.0);
    }

    #[test]
    fn test_log2_log10_exp2() {
        let t = Array::from_vec(vec![1.0_f64, 2.0, 4.0, 8.0], [4]).unwrap();
        let l2 = log2(&t);
        assert_eq!(l2.eval([3]), 3.0);
        assert!((log10(&t).eval([0])).abs() < 1e-15);
        assert!((exp2(&t).eval([2]) - 16.0).abs() < 1e-12);
    }

    #[test]
    fn test_rounding() {
        let t = Array::from_vec(vec![1.3_f64, 2.7, -0.5], [3]).unwrap();
        assert_eq!(floor(&t).eval([2]), -1.0);
        assert_eq!(ceil(&t).eval([0]), 2.0);
        assert_eq!(trunc(&t).eval([1]), 2.0);
    }

    #[test]
    fn test_classifiers() {
        let t = Array::from_vec(vec![1.0_f64, f64::NAN, f64::INFINITY], [3]).unwrap();
        assert!(!isnan(&t).eval([0]));
        assert!(isnan(&t).eval([1]));
        assert!(isinf(&t).eval([2]));
        assert!(isfinite(&t).eval([0]));
        assert!(!isfinite(&t).eval([2]));
    }

    #[test]
    fn test_classifiers_on_integers() {
        let t = Array::from_vec(vec![i64::MIN, 0, i64::MAX], [3]).unwrap();
        assert_eq!(collect(&isnan(&t)), vec![false; 3]);
        assert_eq!(collect(&isinf(&t)), vec![false; 3]);
        assert_eq!(collect(&isfinite(&t)), vec![true; 3]);
    }

    #[test]
    fn test_abs_integer_and_float() {
        let i = Array::from_vec(vec![-3_i32, 4], [2]).unwrap();
        assert_eq!(abs(&i).eval([0]), 3);
        let f = Array::from_vec(vec![-2.5_f64], [1]).unwrap();
        assert_eq!(abs(&f).eval([0]), 2.5);
    }

    #[test]
    fn test_real_projections() {
        let t = Array::from_vec(vec![-3.0_f64], [1]).unwrap();
        assert_eq!(real(&t).eval([0]), -3.0);
        assert_eq!(imag(&t).eval([0]), 0.0);
        assert_eq!(norm(&t).eval([0]), 9.0);
        assert_eq!(conj(&t).eval([0]), -3.0);
    }

    #[cfg(feature = "complex")]
    #[test]
    fn test_complex_projections() {
        use num_complex::Complex;

        let z = Array::from_vec(vec![Complex::new(3.0_f64, 4.0), Complex::new(0.0, -1.0)], [2])
            .unwrap();
        assert_eq!(real(&z).eval([0]), 3.0);
        assert_eq!(imag(&z).eval([1]), -1.0);
        assert_eq!(norm(&z).eval([0]), 25.0);
        assert_eq!(abs(&z).eval([0]), 5.0);
        assert_eq!(conj(&z).eval([1]), Complex::new(0.0, 1.0));
        let e = exp(&z).eval([1]);
        assert!((e.re - 1.0_f64.cos()).abs() < 1e-15);
        assert!((e.im + 1.0_f64.sin()).abs() < 1e-15);
    }

    #[test]
    fn test_cast() {
        let t = Array::from_vec(vec![1.9_f64, -1.9], [2]).unwrap();
        let c = cast::<i32, _>(&t);
        assert_eq!(c.eval([0]), 1);
        assert_eq!(c.eval([1]), -1);
    }

    #[test]
    fn test_clamp() {
        let t = Array::from_vec(vec![-5.0_f64, 0.5, 3.0, 10.0], [4]).unwrap();
        let c = clamp(&t, 0.0, 2.0);
        assert_eq!(collect(&c), vec![0.0, 0.5, 2.0, 2.0]);
    }

    #[test]
    fn test_pow_variants() {
        let f = Array::from_vec(vec![2.0_f64, 3.0], [2]).unwrap();
        assert!((pow(&f, 3.0).eval([0]) - 8.0).abs() < 1e-14);
        assert!((pow(&f, 2_i32).eval([1]) - 9.0).abs() < 1e-14);
        let i = Array::from_vec(vec![2_u64, 3], [2]).unwrap();
        assert_eq!(pow(&i, 4_u32).eval([1]), 81);
        assert_eq!(pow2(&i).eval([0]), 4);
    }

    #[test]
    fn test_min_max_minmax() {
        let a = Array::from_vec(vec![1, 5, 3], [3]).unwrap();
        let b = Array::from_vec(vec![4, 2, 3], [3]).unwrap();
        assert_eq!(min(&a, &b).eval([0]), 1);
        assert_eq!(min(&a, &b).eval([1]), 2);
        assert_eq!(max(&a, &b).eval([0]), 4);
        assert_eq!(max(&a, &b).eval([1]), 5);
        assert_eq!(minmax(&a, &b).eval([1]), (2, 5));
        assert_eq!(minmax(&a, &b).eval([2]), (3, 3));
    }

    #[test]
    fn test_comparison_entries() {
        let a = Array::from_vec(vec![1, 2, 3], [3]).unwrap();
        let b = Array::from_vec(vec![3, 2, 1], [3]).unwrap();
        assert_eq!(collect(&lt(&a, &b)), vec![true, false, false]);
        assert_eq!(collect(&gt(&a, &b)), vec![false, false, true]);
        assert_eq!(collect(&le(&a, &b)), vec![true, true, false]);
        assert_eq!(collect(&ge(&a, &b)), vec![false, true, true]);
        assert_eq!(collect(&eq(&a, &b)), vec![false, true, false]);
        assert_eq!(collect(&ne(&a, &b)), vec![true, false, true]);
    }
}
