//! Binary function objects: arithmetic, bitwise, comparison, and min/max.

use core::ops;

use super::BinaryFn;

// ======================================================================
// Arithmetic and bitwise: result type follows the host operator
// ======================================================================

macro_rules! operator_functor {
    ($(#[$doc:meta])* $name:ident => $trait:ident :: $method:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<L, R> BinaryFn<L, R> for $name
        where
            L: ops::$trait<R>,
        {
            type Output = <L as ops::$trait<R>>::Output;

            #[inline]
            fn call(&self, left: L, right: R) -> Self::Output {
                ops::$trait::$method(left, right)
            }
        }
    };
}

operator_functor!(
    /// `left + right`.
    Add => Add::add
);
operator_functor!(
    /// `left - right`.
    Sub => Sub::sub
);
operator_functor!(
    /// `left * right`.
    Mul => Mul::mul
);
operator_functor!(
    /// `left / right`. Integer division by zero panics like the host operator.
    Div => Div::div
);
operator_functor!(
    /// `left % right`.
    Rem => Rem::rem
);
operator_functor!(
    /// `left & right`. Only defined for types with `BitAnd` (integers, `bool`).
    BitAnd => BitAnd::bitand
);
operator_functor!(
    /// `left | right`.
    BitOr => BitOr::bitor
);

// ======================================================================
// Comparisons: always `bool`
// ======================================================================

macro_rules! cmp_functor {
    ($(#[$doc:meta])* $name:ident, $bound:ident, $op:tt) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<L, R> BinaryFn<L, R> for $name
        where
            L: $bound<R>,
        {
            type Output = bool;

            #[inline]
            fn call(&self, left: L, right: R) -> bool {
                left $op right
            }
        }
    };
}

cmp_functor!(
    /// `left < right`.
    CmpLt, PartialOrd, <
);
cmp_functor!(
    /// `left > right`.
    CmpGt, PartialOrd, >
);
cmp_functor!(
    /// `left <= right`.
    CmpLe, PartialOrd, <=
);
cmp_functor!(
    /// `left >= right`.
    CmpGe, PartialOrd, >=
);
cmp_functor!(
    /// `left == right`.
    CmpEq, PartialEq, ==
);
cmp_functor!(
    /// `left != right`.
    CmpNe, PartialEq, !=
);

// ======================================================================
// Min / max
// ======================================================================

/// The lesser operand; the left one on ties or when unordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Min;

impl<T: PartialOrd> BinaryFn<T, T> for Min {
    type Output = T;

    #[inline]
    fn call(&self, left: T, right: T) -> T {
        if right < left { right } else { left }
    }
}

/// The greater operand; the left one on ties or when unordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Max;

impl<T: PartialOrd> BinaryFn<T, T> for Max {
    type Output = T;

    #[inline]
    fn call(&self, left: T, right: T) -> T {
        if left < right { right } else { left }
    }
}

/// `(min, max)` of the two operands. Equal operands come back in their
/// original order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinMax;

impl<T: PartialOrd> BinaryFn<T, T> for MinMax {
    type Output = (T, T);

    #[inline]
    fn call(&self, left: T, right: T) -> (T, T) {
        if right < left {
            (right, left)
        } else {
            (left, right)
        }
    }
}
