use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Negation is intentionally not required, so that unsigned integers qualify.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Lossy conversions between a scalar type and the floating-point types that lengths and dot
/// products are reported in.
///
/// All conversions behave like an `as` cast: float-to-integer conversion truncates towards zero
/// and saturates at the integer's bounds, and `NaN` becomes 0.
pub trait Cast: Copy {
    /// Converts `self` to an [`f64`].
    fn to_f64(self) -> f64;
    /// Converts `self` to an [`f32`].
    fn to_f32(self) -> f32;
    /// Converts an [`f64`] to `Self`.
    fn from_f64(value: f64) -> Self;
}

macro_rules! primitives {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }

            impl Cast for $types {
                #[inline]
                fn to_f64(self) -> f64 {
                    self as f64
                }

                #[inline]
                fn to_f32(self) -> f32 {
                    self as f32
                }

                #[inline]
                fn from_f64(value: f64) -> Self {
                    value as Self
                }
            }
        )+
    };
}
primitives!(0, 1: u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
primitives!(0.0, 1.0: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cast_truncates() {
        assert_eq!(i32::from_f64(2.9), 2);
        assert_eq!(i32::from_f64(-2.9), -2);
        assert_eq!(u8::from_f64(-1.0), 0);
        assert_eq!(u8::from_f64(300.0), 255);
        assert_eq!(u16::from_f64(f64::NAN), 0);
    }

    #[test]
    fn cast_floats() {
        assert_eq!(0.1f32.to_f64(), 0.1f32 as f64);
        assert_eq!(f32::from_f64(0.5), 0.5);
        assert_eq!(7u64.to_f32(), 7.0);
    }
}
