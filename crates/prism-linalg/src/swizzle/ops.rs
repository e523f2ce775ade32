//! Arithmetic on swizzle views.
//!
//! Binary operators materialize the view and produce a new [`Vector`]. Compound assignment on a
//! [`SwizzleMut`] computes the same result and assigns it back through the view.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::Vector;

use super::{Pattern, Splat, Swizzle, SwizzleMut};

macro_rules! binary_ops {
    (impl[$($generics:tt)*] $view:ty) => {
        binary_ops!(@op [$($generics)*] $view, Add::add);
        binary_ops!(@op [$($generics)*] $view, Sub::sub);
        binary_ops!(@op [$($generics)*] $view, Mul::mul);
        binary_ops!(@op [$($generics)*] $view, Div::div);

        impl<T, const N: usize, $($generics)*> Neg for $view
        where
            T: Neg + Copy,
        {
            type Output = Vector<T::Output, N>;

            #[inline]
            fn neg(self) -> Self::Output {
                -self.materialize()
            }
        }

        impl<T, U, const N: usize, $($generics)*> PartialEq<Vector<U, N>> for $view
        where
            T: PartialEq<U>,
        {
            fn eq(&self, other: &Vector<U, N>) -> bool {
                self.indices()
                    .into_iter()
                    .zip(other.as_array())
                    .all(|(index, elem)| self.backing()[index] == *elem)
            }
        }
    };
    (@op [$($generics:tt)*] $view:ty, $op:ident::$method:ident) => {
        impl<T, const N: usize, $($generics)*> $op<Vector<T, N>> for $view
        where
            T: $op + Copy,
        {
            type Output = Vector<T::Output, N>;

            #[inline]
            fn $method(self, rhs: Vector<T, N>) -> Self::Output {
                $op::$method(self.materialize(), rhs)
            }
        }

        impl<T, const N: usize, $($generics)*> $op<T> for $view
        where
            T: $op + Copy,
        {
            type Output = Vector<T::Output, N>;

            #[inline]
            fn $method(self, rhs: T) -> Self::Output {
                $op::$method(self.materialize(), rhs)
            }
        }
    };
}

binary_ops!(impl[P: Pattern<N>] Swizzle<'_, T, N, P>);
binary_ops!(impl[P: Pattern<N>] SwizzleMut<'_, T, N, P>);
binary_ops!(impl[const A: usize] Splat<'_, T, N, A>);

macro_rules! compound_ops {
    ($($op:ident::$method:ident, $op_assign:ident::$method_assign:ident;)+) => {
        $(
            impl<T, const N: usize, P: Pattern<N>> $op_assign<Vector<T, N>>
                for SwizzleMut<'_, T, N, P>
            where
                T: $op<Output = T> + Copy,
            {
                fn $method_assign(&mut self, rhs: Vector<T, N>) {
                    let result = $op::$method(self.materialize(), rhs);
                    self.assign(result);
                }
            }

            impl<T, const N: usize, P: Pattern<N>> $op_assign<T> for SwizzleMut<'_, T, N, P>
            where
                T: $op<Output = T> + Copy,
            {
                fn $method_assign(&mut self, rhs: T) {
                    let result = $op::$method(self.materialize(), rhs);
                    self.assign(result);
                }
            }
        )+
    };
}

compound_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vec2f};

    #[test]
    fn binary_with_vector() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.zyx() + vec3(10, 20, 30), vec3(13, 22, 31));
        assert_eq!(v.zyx() - vec3(1, 1, 1), vec3(2, 1, 0));
        assert_eq!(v.yzx() * vec3(2, 2, 2), vec3(4, 6, 2));
        assert_eq!(v.zzy() / vec3(3, 1, 2), vec3(1, 3, 1));
        assert_eq!(v, vec3(1, 2, 3));
    }

    #[test]
    fn binary_with_scalar() {
        let v = vec2(1.0, 4.0);
        assert_eq!(v.yx() + 1.0, vec2(5.0, 2.0));
        assert_eq!(v.yx() - 1.0, vec2(3.0, 0.0));
        assert_eq!(v.yx() * 0.5, vec2(2.0, 0.5));
        assert_eq!(v.yx() / 2.0, vec2(2.0, 0.5));
        assert_eq!(v.yy() * 2.0, vec2(8.0, 8.0));
        assert_eq!(v, vec2(1.0, 4.0));
    }

    #[test]
    fn negation() {
        let v = vec4(1, -2, 3, -4);
        assert_eq!(-v.wzyx(), vec4(4, -3, 2, -1));
        assert_eq!(-v.xxxx(), vec4(-1, -1, -1, -1));
    }

    #[test]
    fn mutable_view_operands() {
        let mut v = vec2(1, 2);
        let sum = v.yx_mut() + vec2(1, 1);
        assert_eq!(sum, vec2(3, 2));
        assert_eq!(v, vec2(1, 2));
    }

    #[test]
    fn compound_writes_through() {
        let mut v = vec3(1, 2, 3);
        let mut view = v.zyx_mut();
        view += vec3(10, 20, 30);
        assert_eq!(v, vec3(31, 22, 13));

        let mut view = v.zyx_mut();
        view -= 1;
        view *= 2;
        view /= vec3(2, 1, 3);
        assert_eq!(v, vec3(20, 42, 12));
    }

    #[test]
    fn compound_on_repeated_index() {
        // The view is materialized once, so `x` is incremented once, not twice.
        let mut v = vec3(1, 2, 3);
        let mut view = v.xxy_mut();
        view += vec3(1, 1, 1);
        assert_eq!(v, vec3(2, 3, 3));

        let mut v = vec3(1, 2, 3);
        let mut view = v.xxy_mut();
        view *= vec3(10, 100, 1000);
        assert_eq!(v, vec3(100, 2000, 3));
    }

    #[test]
    fn compare_with_vector() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.zyx(), vec3(3, 2, 1));
        assert_ne!(v.zyx(), v);
        assert_eq!(v.yyy(), vec3(2, 2, 2));
    }

    #[test]
    fn division_by_zero() {
        let v = vec2(1.0f32, 0.0);
        let q = v.yx() / 0.0;
        assert!(q.x().is_nan());
        assert_eq!(q.y(), f32::INFINITY);
        assert!((Vec2f::ZERO.xx() / 0.0).y().is_nan());
    }
}
