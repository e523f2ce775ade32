//! Named component accessors.
//!
//! Every family (position, color, texture) names the same slots of the backing array, so writing
//! through `r_mut` is visible through `x`, `s` and `[0]`.

use crate::Vector;

macro_rules! components {
    ($dim:literal: $( $index:literal => [$($name:ident / $name_mut:ident),+] ),+ $(,)?) => {
        impl<T: Copy> Vector<T, $dim> {
            $($(
                #[doc = concat!("Returns element ", stringify!($index), ".")]
                #[inline]
                pub fn $name(&self) -> T {
                    self.as_array()[$index]
                }
            )+)+
        }

        impl<T> Vector<T, $dim> {
            $($(
                #[doc = concat!("Returns a mutable reference to element ", stringify!($index), ".")]
                #[inline]
                pub fn $name_mut(&mut self) -> &mut T {
                    &mut self.as_mut_array()[$index]
                }
            )+)+
        }
    };
}

components!(2:
    0 => [x / x_mut, r / r_mut, s / s_mut],
    1 => [y / y_mut, g / g_mut, t / t_mut],
);
components!(3:
    0 => [x / x_mut, r / r_mut, s / s_mut],
    1 => [y / y_mut, g / g_mut, t / t_mut],
    2 => [z / z_mut, b / b_mut, p / p_mut],
);
components!(4:
    0 => [x / x_mut, r / r_mut, s / s_mut],
    1 => [y / y_mut, g / g_mut, t / t_mut],
    2 => [z / z_mut, b / b_mut, p / p_mut],
    3 => [w / w_mut, a / a_mut, q / q_mut],
);

#[cfg(test)]
mod tests {
    use crate::{vec2, vec4, Vec3f, Vec4f};

    #[test]
    fn aliases() {
        assert_eq!(Vec3f::X.x(), 1.0);
        assert_eq!(Vec3f::X.y(), 0.0);
        assert_eq!(Vec3f::Y.g(), 1.0);
        assert_eq!(Vec3f::Z.p(), 1.0);
        assert_eq!(Vec4f::W.w(), 1.0);
        assert_eq!(Vec4f::W.a(), 1.0);
        assert_eq!(Vec4f::W.q(), 1.0);

        let mut v = vec2(0, 1);
        assert_eq!((v.x(), v.y()), (0, 1));
        assert_eq!((v.r(), v.g()), (0, 1));
        assert_eq!((v.s(), v.t()), (0, 1));

        *v.r_mut() = 777;
        assert_eq!((v.x(), v.s(), v[0]), (777, 777, 777));
        assert_eq!(v.y(), 1);

        *v.t_mut() = 9;
        assert_eq!((v.y(), v.g(), v[1]), (9, 9, 9));
        assert_eq!(v, [777, 9]);
    }

    #[test]
    fn index_and_names_agree() {
        let mut color = vec4(0.1, 0.2, 0.3, 1.0);
        color[3] = 0.5;
        *color.b_mut() *= 2.0;
        assert_eq!(color.a(), 0.5);
        assert_eq!(color.z(), 0.6);
        assert_eq!(color.as_array(), &[0.1, 0.2, 0.6, 0.5]);
    }
}
