//! Property tests for lazy expression nodes.
//!
//! Shape propagation, pointwise agreement with direct scalar evaluation, and
//! the algebraic guarantees of the named entries.

use ndfuse_core::eval::{indices, materialize};
use ndfuse_core::expr::{map, try_zip, zip};
use ndfuse_core::func::{Add, Mul};
use ndfuse_core::math::{abs, clamp, max, min, minmax, pow2, sqrt};
use ndfuse_core::{Array, Expr};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

fn arb_shape() -> impl Strategy<Value = [usize; 2]> {
    (1usize..6, 1usize..6).prop_map(|(r, c)| [r, c])
}

fn arb_array_with_shape(shape: [usize; 2]) -> impl Strategy<Value = Array<i64, 2>> {
    prop::collection::vec(-100i64..100, shape[0] * shape[1])
        .prop_map(move |data| Array::from_vec(data, shape).unwrap())
}

fn arb_array() -> impl Strategy<Value = Array<i64, 2>> {
    arb_shape().prop_flat_map(arb_array_with_shape)
}

fn arb_array_pair() -> impl Strategy<Value = (Array<i64, 2>, Array<i64, 2>)> {
    arb_shape().prop_flat_map(|shape| (arb_array_with_shape(shape), arb_array_with_shape(shape)))
}

fn arb_float_array() -> impl Strategy<Value = Array<f64, 2>> {
    arb_shape().prop_flat_map(|shape| {
        prop::collection::vec(-1.0e3f64..1.0e3, shape[0] * shape[1])
            .prop_map(move |data| Array::from_vec(data, shape).unwrap())
    })
}

/// Replace zeros so the array is safe as a divisor.
fn nonzero(a: &Array<i64, 2>) -> Array<i64, 2> {
    Array::from_fn(*a.shape(), |idx| match a.eval(idx) {
        0 => 1,
        v => v,
    })
}

fn is_bool_expr<E: Expr<Value = bool>>(_: &E) {}

// ============================================================================
// Shape
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Unary nodes report the operand's extents and rank
    #[test]
    fn unary_preserves_shape(a in arb_array()) {
        let tripled = map(&a, |x: i64| x * 3);
        let magnitude = abs(&tripled);
        for axis in 0..2 {
            prop_assert_eq!(tripled.dim(axis), a.dim(axis));
            prop_assert_eq!(magnitude.dim(axis), a.dim(axis));
        }
        prop_assert_eq!(magnitude.rank(), a.rank());
        prop_assert_eq!(magnitude.shape(), *a.shape());
    }

    /// Binary nodes report the left operand's extents, even when the right
    /// operand disagrees
    #[test]
    fn binary_shape_is_left(a in arb_array(), b in arb_array()) {
        let sum = zip(&a, &b, Add);
        for axis in 0..2 {
            prop_assert_eq!(sum.dim(axis), a.dim(axis));
        }
        prop_assert_eq!(sum.rank(), 2);
    }

    /// try_zip accepts exactly the pairs whose shapes agree
    #[test]
    fn try_zip_checks_shapes(a in arb_array(), b in arb_array()) {
        let checked = try_zip(&a, &b, Mul);
        prop_assert_eq!(checked.is_ok(), a.shape() == b.shape());
    }
}

// ============================================================================
// Pointwise evaluation
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// map(e, f).eval(i) == f(e.eval(i))
    #[test]
    fn unary_is_pointwise(a in arb_array(), k in -10i64..10) {
        let f = move |x: i64| x * k - 1;
        let node = map(&a, f);
        for idx in indices(&a) {
            prop_assert_eq!(node.eval(idx), f(a.eval(idx)));
        }
    }

    /// zip(l, r, f).eval(i) == f(l.eval(i), r.eval(i))
    #[test]
    fn binary_is_pointwise((a, b) in arb_array_pair()) {
        let f = |x: i64, y: i64| x * 2 - y;
        let node = zip(&a, &b, f);
        for idx in indices(&a) {
            prop_assert_eq!(node.eval(idx), f(a.eval(idx), b.eval(idx)));
        }
    }

    /// Nested nodes evaluate to the same value as the scalar formula
    #[test]
    fn nested_is_pointwise((a, b) in arb_array_pair()) {
        let sum = &a + &b;
        let prod = &sum * &a;
        let root = abs(&prod);
        for idx in indices(&a) {
            let (x, y) = (a.eval(idx), b.eval(idx));
            prop_assert_eq!(root.eval(idx), ((x + y) * x).abs());
        }
    }

    /// Evaluating twice at the same index gives the same value
    #[test]
    fn evaluation_is_pure(a in arb_float_array()) {
        let magnitude = abs(&a);
        let root = sqrt(&magnitude);
        let shifted = map(&root, |x: f64| x + 0.5);
        for idx in indices(&a) {
            prop_assert_eq!(shifted.eval(idx).to_bits(), shifted.eval(idx).to_bits());
        }
    }

    /// Every infix operator agrees with the host operator
    #[test]
    fn operators_match_host((a, b) in arb_array_pair()) {
        let d = nonzero(&b);
        for idx in indices(&a) {
            let (x, y, z) = (a.eval(idx), b.eval(idx), d.eval(idx));
            prop_assert_eq!((&a + &b).eval(idx), x + y);
            prop_assert_eq!((&a - &b).eval(idx), x - y);
            prop_assert_eq!((&a * &b).eval(idx), x * y);
            prop_assert_eq!((&a / &d).eval(idx), x / z);
            prop_assert_eq!((&a % &d).eval(idx), x % z);
            prop_assert_eq!((&a & &b).eval(idx), x & y);
            prop_assert_eq!((&a | &b).eval(idx), x | y);
        }
    }
}

// ============================================================================
// Named entries
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// clamp lands in [lo, hi] and is the identity exactly inside it
    #[test]
    fn clamp_stays_in_bounds(a in arb_array(), lo in -50i64..0, hi in 0i64..50) {
        let clamped = clamp(&a, lo, hi);
        for idx in indices(&a) {
            let (x, c) = (a.eval(idx), clamped.eval(idx));
            prop_assert!(lo <= c && c <= hi);
            prop_assert_eq!(c == x, lo <= x && x <= hi);
        }
    }

    /// pow2(x) == x * x
    #[test]
    fn pow2_is_square(a in arb_array()) {
        let sq = pow2(&a);
        let prod = &a * &a;
        for idx in indices(&a) {
            prop_assert_eq!(sq.eval(idx), prod.eval(idx));
        }
    }

    /// min and max pick an operand and bracket both
    #[test]
    fn min_max_bracket((a, b) in arb_array_pair()) {
        let lo = min(&a, &b);
        let hi = max(&a, &b);
        let both = minmax(&a, &b);
        for idx in indices(&a) {
            let (x, y) = (a.eval(idx), b.eval(idx));
            prop_assert_eq!(lo.eval(idx), x.min(y));
            prop_assert_eq!(hi.eval(idx), x.max(y));
            prop_assert_eq!(both.eval(idx), (x.min(y), x.max(y)));
        }
    }

    /// Comparisons produce booleans matching the host comparison
    #[test]
    fn comparisons_are_boolean((a, b) in arb_array_pair()) {
        let lt = a.cmp_lt(&b);
        let gt = a.cmp_gt(&b);
        let le = a.cmp_le(&b);
        let ge = a.cmp_ge(&b);
        let eq = a.cmp_eq(&b);
        let ne = a.cmp_ne(&b);
        is_bool_expr(&lt);
        is_bool_expr(&gt);
        is_bool_expr(&le);
        is_bool_expr(&ge);
        is_bool_expr(&eq);
        is_bool_expr(&ne);
        for idx in indices(&a) {
            let (x, y) = (a.eval(idx), b.eval(idx));
            prop_assert_eq!(lt.eval(idx), x < y);
            prop_assert_eq!(gt.eval(idx), x > y);
            prop_assert_eq!(le.eval(idx), x <= y);
            prop_assert_eq!(ge.eval(idx), x >= y);
            prop_assert_eq!(eq.eval(idx), x == y);
            prop_assert_eq!(ne.eval(idx), x != y);
        }
    }

    /// Materializing agrees with element-wise evaluation
    #[test]
    fn materialize_agrees_with_eval((a, b) in arb_array_pair()) {
        let sum = &a + &b;
        let out = materialize(&sum);
        prop_assert_eq!(out.shape(), a.shape());
        for idx in indices(&a) {
            prop_assert_eq!(out.eval(idx), sum.eval(idx));
        }
    }
}
