//! Operator implementations.
//!
//! Every binary operator accepts a fixed-width value or any [`Primitive`] on
//! either side. A native operand is first truncated to the width and
//! signedness of the fixed-width operand with [`Xint::new_masked`], then the
//! operation proceeds as if both operands had the same type.

use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Div,
    DivAssign, Mul, MulAssign, Neg, Not, Rem, RemAssign, Shl, ShlAssign, Shr, ShrAssign, Sub,
    SubAssign,
};

use crate::{Primitive, Xint};

macro_rules! impl_binary_op {
    (
        $trait:ident::$method:ident,
        $assign_trait:ident::$assign_method:ident,
        |$lhs:ident, $rhs:ident| $body:expr
    ) => {
        impl<const N: u32, const SIGNED: bool> $trait for Xint<N, SIGNED> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                let ($lhs, $rhs) = (self, rhs);
                $body
            }
        }

        impl<T: Primitive, const N: u32, const SIGNED: bool> $trait<T> for Xint<N, SIGNED> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.$method(Self::new_masked(rhs))
            }
        }

        impl<const N: u32, const SIGNED: bool> $assign_trait for Xint<N, SIGNED> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = $trait::$method(*self, rhs);
            }
        }

        impl<T: Primitive, const N: u32, const SIGNED: bool> $assign_trait<T>
            for Xint<N, SIGNED>
        {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = $trait::$method(*self, Self::new_masked(rhs));
            }
        }

        impl_binary_op!(@native_lhs $trait::$method;
            i8 i16 i32 i64 isize u8 u16 u32 u64 usize);
    };
    (@native_lhs $trait:ident::$method:ident; $($primitive:ident)*) => {
        $(
            impl<const N: u32, const SIGNED: bool> $trait<Xint<N, SIGNED>> for $primitive {
                type Output = Xint<N, SIGNED>;

                #[inline]
                fn $method(self, rhs: Xint<N, SIGNED>) -> Xint<N, SIGNED> {
                    $trait::$method(Xint::<N, SIGNED>::new_masked(self), rhs)
                }
            }
        )*
    };
}

impl_binary_op!(Add::add, AddAssign::add_assign, |lhs, rhs| lhs.wrapping_add(rhs));
impl_binary_op!(Sub::sub, SubAssign::sub_assign, |lhs, rhs| lhs.wrapping_sub(rhs));
impl_binary_op!(Mul::mul, MulAssign::mul_assign, |lhs, rhs| lhs.wrapping_mul(rhs));
impl_binary_op!(Div::div, DivAssign::div_assign, |lhs, rhs| lhs.wrapping_div(rhs));
impl_binary_op!(Rem::rem, RemAssign::rem_assign, |lhs, rhs| lhs.wrapping_rem(rhs));
// Both operands have clear padding, so the result does too.
impl_binary_op!(BitOr::bitor, BitOrAssign::bitor_assign, |lhs, rhs| Xint(lhs.0 | rhs.0));
impl_binary_op!(BitXor::bitxor, BitXorAssign::bitxor_assign, |lhs, rhs| Xint(lhs.0 ^ rhs.0));
impl_binary_op!(BitAnd::bitand, BitAndAssign::bitand_assign, |lhs, rhs| Xint(lhs.0 & rhs.0));

impl<const N: u32, const SIGNED: bool> Neg for Xint<N, SIGNED> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl<const N: u32, const SIGNED: bool> Not for Xint<N, SIGNED> {
    type Output = Self;

    #[inline]
    fn not(self) -> Self {
        Self(!self.0 & Self::WORD_MASK)
    }
}

macro_rules! impl_shift_op {
    ($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $by:ident) => {
        impl<T: Primitive, const N: u32, const SIGNED: bool> $trait<T> for Xint<N, SIGNED> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: T) -> Self {
                self.$by(rhs.into_i128())
            }
        }

        impl<const M: u32, const RHS_SIGNED: bool, const N: u32, const SIGNED: bool>
            $trait<Xint<M, RHS_SIGNED>> for Xint<N, SIGNED>
        {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Xint<M, RHS_SIGNED>) -> Self {
                self.$by(rhs.to_i128())
            }
        }

        impl<T: Primitive, const N: u32, const SIGNED: bool> $assign_trait<T>
            for Xint<N, SIGNED>
        {
            #[inline]
            fn $assign_method(&mut self, rhs: T) {
                *self = self.$by(rhs.into_i128());
            }
        }

        impl<const M: u32, const RHS_SIGNED: bool, const N: u32, const SIGNED: bool>
            $assign_trait<Xint<M, RHS_SIGNED>> for Xint<N, SIGNED>
        {
            #[inline]
            fn $assign_method(&mut self, rhs: Xint<M, RHS_SIGNED>) {
                *self = self.$by(rhs.to_i128());
            }
        }
    };
}

impl_shift_op!(Shl::shl, ShlAssign::shl_assign, shl_by);
impl_shift_op!(Shr::shr, ShrAssign::shr_assign, shr_by);

impl<const N: u32, const SIGNED: bool> core::iter::Sum for Xint<N, SIGNED> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Xint::wrapping_add)
    }
}

impl<const N: u32, const SIGNED: bool> core::iter::Product for Xint<N, SIGNED> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ONE, Xint::wrapping_mul)
    }
}
