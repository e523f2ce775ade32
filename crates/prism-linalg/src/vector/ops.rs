//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::approx::ApproxEq;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// More general impl than what the derive generates.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for [T; N]
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        *self == other.0
    }
}

impl<T, U, const N: usize> PartialEq<[U]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

// Vector-vector operators are element-wise, vector-scalar operators apply the scalar to every
// element. Both exist for all four arithmetic operators, which rules out the more generic
// `impl<U> Add<U> for Vector<T, N> where T: Add<U>`.
macro_rules! arith {
    ($($op:ident::$method:ident, $op_assign:ident::$method_assign:ident, $sym:tt;)+) => {
        $(
            /// Element-wise operation.
            impl<T, const N: usize> $op<Vector<T, N>> for Vector<T, N>
            where
                T: $op,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l $sym r)
                }
            }

            /// Vector-scalar operation, applied to every element.
            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $method(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem $sym rhs)
                }
            }

            /// Element-wise operation, in place.
            impl<T, const N: usize> $op_assign<Vector<T, N>> for Vector<T, N>
            where
                T: $op_assign,
            {
                #[inline]
                fn $method_assign(&mut self, rhs: Vector<T, N>) {
                    self.0
                        .iter_mut()
                        .zip(rhs.0)
                        .for_each(|(lhs, rhs)| lhs.$method_assign(rhs));
                }
            }

            /// Vector-scalar operation applied to every element, in place.
            impl<T, const N: usize> $op_assign<T> for Vector<T, N>
            where
                T: $op_assign + Copy,
            {
                #[inline]
                fn $method_assign(&mut self, rhs: T) {
                    self.0.iter_mut().for_each(|lhs| lhs.$method_assign(rhs));
                }
            }
        )+
    };
}

arith! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

// Scalar-vector multiplication (`2.0 * v`) can't be implemented generically because of the orphan
// rules, so it is provided for the primitive types.
macro_rules! scalar_lhs_mul {
    ($($types:ty),+) => {
        $(
            impl<const N: usize> Mul<Vector<$types, N>> for $types {
                type Output = Vector<$types, N>;

                #[inline]
                fn mul(self, rhs: Vector<$types, N>) -> Self::Output {
                    rhs * self
                }
            }
        )+
    };
}
scalar_lhs_mul!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);
