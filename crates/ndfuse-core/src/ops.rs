//! Infix operators on expressions.
//!
//! Implements `+ - * / % & |` for references to every expression type in the
//! crate. Each operator builds a lazy [`Binary`] node with the matching
//! catalogue entry; nothing is evaluated until the root is indexed.
//!
//! Comparisons cannot be spelled with `<`, `==`, ... because Rust's
//! comparison traits must return `bool`; use [`Expr::cmp_lt`] and friends.

use core::ops;

use crate::array::Array;
use crate::expr::{Binary, Expr, Unary, zip};
use crate::func::{self, BinaryFn};
use crate::index::CommonIndex;

// ======================================================================
// &Node op &Expr  (element-wise, left operand decides the shape)
// ======================================================================

macro_rules! impl_expr_binop {
    ([$($gen:tt)*] $node:ty) => {
        impl_expr_binop!(@op [$($gen)*] $node, Add, add);
        impl_expr_binop!(@op [$($gen)*] $node, Sub, sub);
        impl_expr_binop!(@op [$($gen)*] $node, Mul, mul);
        impl_expr_binop!(@op [$($gen)*] $node, Div, div);
        impl_expr_binop!(@op [$($gen)*] $node, Rem, rem);
        impl_expr_binop!(@op [$($gen)*] $node, BitAnd, bitand);
        impl_expr_binop!(@op [$($gen)*] $node, BitOr, bitor);
    };
    (@op [$($gen:tt)*] $node:ty, $trait:ident, $method:ident) => {
        impl<'a, $($gen)*, Rhs> ops::$trait<&'a Rhs> for &'a $node
        where
            $node: Expr,
            Rhs: Expr<Rank = <$node as Expr>::Rank>,
            <$node as Expr>::Index: CommonIndex<Rhs::Index>,
            func::$trait: BinaryFn<<$node as Expr>::Value, Rhs::Value>,
        {
            type Output = Binary<'a, func::$trait, $node, Rhs>;

            #[inline]
            fn $method(self, rhs: &'a Rhs) -> Self::Output {
                zip(self, rhs, func::$trait)
            }
        }
    };
}

impl_expr_binop!([T, const N: usize, I] Array<T, N, I>);
impl_expr_binop!(['x, F, E] Unary<'x, F, E>);
impl_expr_binop!(['x, F, L, R] Binary<'x, F, L, R>);
