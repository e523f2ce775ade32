use std::{array, fmt};

use crate::traits::{Cast, Number, One, Zero};

mod access;
mod ops;

/// A 2-dimensional vector.
pub type Vec2<T> = Vector<T, 2>;
/// A 2-dimensional vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 2-dimensional vector with [`f64`] elements.
pub type Vec2d = Vec2<f64>;
/// A 2-dimensional vector with [`i32`] elements.
pub type Vec2i = Vec2<i32>;
/// A 2-dimensional vector with [`u32`] elements.
pub type Vec2u = Vec2<u32>;
/// A 3-dimensional vector.
pub type Vec3<T> = Vector<T, 3>;
/// A 3-dimensional vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 3-dimensional vector with [`f64`] elements.
pub type Vec3d = Vec3<f64>;
/// A 3-dimensional vector with [`i32`] elements.
pub type Vec3i = Vec3<i32>;
/// A 3-dimensional vector with [`u32`] elements.
pub type Vec3u = Vec3<u32>;
/// A 4-dimensional vector.
pub type Vec4<T> = Vector<T, 4>;
/// A 4-dimensional vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;
/// A 4-dimensional vector with [`f64`] elements.
pub type Vec4d = Vec4<f64>;
/// A 4-dimensional vector with [`i32`] elements.
pub type Vec4i = Vec4<i32>;
/// A 4-dimensional vector with [`u32`] elements.
pub type Vec4u = Vec4<u32>;

/// An `N`-element vector storing elements of type `T`.
///
/// Only 2, 3 and 4 dimensional vectors get named component accessors and swizzles, but the
/// arithmetic and geometric operations are defined for every `N`.
///
/// # Construction
///
/// - [`Vector::ZERO`] (and the [`Default`] impl for numeric types) is a vector of all zeroes.
/// - [`Vector::splat`] broadcasts one value into every element.
/// - [`vec2`], [`vec3`], [`vec4`] (or [`Vector::new`]) take every element explicitly.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Arrays convert into vectors of the same length via [`From`].
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors.
///
/// # Element Access
///
/// A vector is a single array of `N` elements. Every way of accessing it refers to that array:
///
/// - Named accessors in three families: `x`/`y`/`z`/`w` for positions, `r`/`g`/`b`/`a` for
///   colors and `s`/`t`/`p`/`q` for texture coordinates, each with a `_mut` counterpart.
/// - The [`Index`] and [`IndexMut`] impls, just like on arrays.
/// - [`Vector::as_array`], [`Vector::as_slice`] and their `mut` variants.
/// - Swizzle views such as `v.yx()` and `v.yx_mut()`, see [`Swizzle`](crate::Swizzle).
///
/// ```
/// # use prism_linalg::*;
/// let mut v = vec3(1, 2, 3);
/// *v.g_mut() = 20;
/// assert_eq!(v.y(), 20);
/// assert_eq!(v.t(), 20);
/// assert_eq!(v[1], 20);
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// A vector with each element initialized to 0.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let v = Vector::from_fn(|i| i + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    #[inline]
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Merges two [`Vector`]s into one that contains tuples of the original elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let v = vec2(1, 2).zip(vec2('a', 'b'));
    /// assert_eq!(v, vec2((1, 'a'), (2, 'b')));
    /// ```
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut other = other.0.into_iter();
        self.map(|elem| match other.next() {
            Some(o) => (elem, o),
            None => unreachable!("both vectors have `N` elements"),
        })
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.as_mut_array()[1] = 777;
    /// assert_eq!(v, [1, 777, 3]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }
}

/// Geometry.
impl<T: Number + Cast, const N: usize> Vector<T, N> {
    /// Returns the squared length of this [`Vector`], computed in the element type.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// assert_eq!(vec2(4, 0).length2(), 16);
    /// ```
    pub fn length2(&self) -> T {
        self.0.iter().fold(T::ZERO, |acc, &elem| acc + elem * elem)
    }

    /// Returns the Euclidean length of this [`Vector`] as an [`f64`].
    ///
    /// The sum of squares is computed in the element type, then widened before taking the square
    /// root. The zero vector has a length of exactly 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// assert_eq!(vec2(3, 4).length(), 5.0);
    /// assert_eq!(Vec3f::ZERO.length(), 0.0);
    /// ```
    pub fn length(&self) -> f64 {
        self.length2().to_f64().sqrt()
    }

    /// Returns the Euclidean length of this [`Vector`] as an [`f32`].
    pub fn lengthf(&self) -> f32 {
        self.length2().to_f32().sqrt()
    }

    /// Divides every element by the vector's [`length`][Self::length], in place.
    ///
    /// A vector of length zero is left unchanged. For integer element types, the quotients are
    /// truncated towards zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let mut v = vec3(0.0, 0.0, 4.0);
    /// v.normalize();
    /// assert_eq!(v, Vec3d::Z);
    ///
    /// let mut zero = Vec3d::ZERO;
    /// zero.normalize();
    /// assert_eq!(zero, Vec3d::ZERO);
    /// ```
    pub fn normalize(&mut self) {
        *self = self.normalized();
    }

    /// Returns this vector divided by its [`length`][Self::length].
    ///
    /// The zero vector is returned unchanged instead of dividing by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// assert_eq!(vec2(0.0, -2.5).normalized(), vec2(0.0, -1.0));
    /// assert_eq!(Vec2f::ZERO.normalized(), Vec2f::ZERO);
    /// ```
    pub fn normalized(self) -> Self {
        let len = self.length();
        if len == 0.0 {
            return self;
        }
        self.map(|elem| T::from_f64(elem.to_f64() / len))
    }

    /// Computes the dot product between `self` and `other`, as an [`f64`].
    ///
    /// Products are summed in the element type and the sum is widened afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4, -2, -1);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> f64 {
        self.sum_of_products(other).to_f64()
    }

    /// Computes the dot product between `self` and `other`, as an [`f32`].
    pub fn dotf(self, other: Self) -> f32 {
        self.sum_of_products(other).to_f32()
    }

    fn sum_of_products(self, other: Self) -> T {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(T::ZERO, |acc, (a, b)| acc + a * b)
    }

    /// Reflects `self` off a surface with the given `normal`, in place.
    ///
    /// See [`Vector::reflected`].
    pub fn reflect(&mut self, normal: Self) {
        *self = self.reflected(normal);
    }

    /// Returns `self` reflected off a surface with the given `normal`.
    ///
    /// Computes `self - normal * 2 * dot(self, normal)`. `normal` is expected to have unit
    /// length; it is not normalized here.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let falling = vec3(1.0, -1.0, 0.0);
    /// assert_eq!(falling.reflected(Vec3f::Y), vec3(1.0, 1.0, 0.0));
    /// ```
    pub fn reflected(self, normal: Self) -> Self {
        let scale = T::from_f64(2.0 * self.dot(normal));
        self - normal * scale
    }
}

impl<T: Number> Vector<T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs and follows the right-hand rule: swapping the
    /// operands inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
    /// assert_eq!(Vec3f::Y.cross(Vec3f::X), -Vec3f::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl<T> Vector<T, 2> {
    /// Creates a 2-dimensional vector from its elements.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self([x, y])
    }
}

impl<T> Vector<T, 3> {
    /// Creates a 3-dimensional vector from its elements.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self([x, y, z])
    }
}

impl<T> Vector<T, 4> {
    /// Creates a 4-dimensional vector from its elements.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self([x, y, z, w])
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            elem.fmt(f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsRef<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T; N] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T, const N: usize> AsMut<[T; N]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}

/// Computes the dot product of `a` and `b` as an [`f64`]. Same as [`Vector::dot`].
pub fn dot<T: Number + Cast, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> f64 {
    a.dot(b)
}

/// Computes the dot product of `a` and `b` as an [`f32`]. Same as [`Vector::dotf`].
pub fn dotf<T: Number + Cast, const N: usize>(a: Vector<T, N>, b: Vector<T, N>) -> f32 {
    a.dotf(b)
}

/// Computes the cross product of `a` and `b`. Same as [`Vector::cross`].
pub fn cross<T: Number>(a: Vec3<T>, b: Vec3<T>) -> Vec3<T> {
    a.cross(b)
}

/// Reflects `v` off a surface with the unit-length `normal`. Same as [`Vector::reflected`].
///
/// # Examples
///
/// ```
/// # use prism_linalg::*;
/// assert_eq!(reflect(vec2(1.0, -1.0), vec2(0.0, 1.0)), vec2(1.0, 1.0));
/// ```
pub fn reflect<T: Number + Cast, const N: usize>(v: Vector<T, N>, normal: Vector<T, N>) -> Vector<T, N> {
    v.reflected(normal)
}

/// Computes the 4-dimensional cross product of three vectors.
///
/// The result is orthogonal to `a`, `b` and `c`. Its elements are the cofactors of the last row
/// when expanding the determinant of the 4x4 matrix with rows `a`, `b`, `c`, and the basis
/// vectors, so that `cross4(X, Y, Z) == W`. If the inputs are linearly dependent, the result is
/// the zero vector.
///
/// # Examples
///
/// ```
/// # use prism_linalg::*;
/// assert_eq!(cross4(Vec4i::X, Vec4i::Y, Vec4i::Z), Vec4i::W);
/// assert_eq!(cross4(Vec4i::Y, Vec4i::Z, Vec4i::W), -Vec4i::X);
/// ```
pub fn cross4<T: Number>(a: Vec4<T>, b: Vec4<T>, c: Vec4<T>) -> Vec4<T> {
    // 3x3 determinant of `a`, `b`, `c` restricted to the columns `i`, `j`, `k`.
    let minor = |i: usize, j: usize, k: usize| {
        a[i] * (b[j] * c[k] - b[k] * c[j]) - a[j] * (b[i] * c[k] - b[k] * c[i])
            + a[k] * (b[i] * c[j] - b[j] * c[i])
    };

    // Cofactor signs for the last row of a 4x4 matrix are `-, +, -, +`. Subtracting from zero
    // keeps the `Neg` bound off the element type.
    vec4(
        T::ZERO - minor(1, 2, 3),
        minor(0, 2, 3),
        T::ZERO - minor(0, 1, 3),
        minor(0, 1, 2),
    )
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn construction() {
        assert_eq!(Vec3i::default(), vec3(0, 0, 0));
        assert_eq!(Vec3i::ZERO, Vec3i::default());
        assert_eq!(Vec4f::splat(0.5), vec4(0.5, 0.5, 0.5, 0.5));
        assert_eq!(Vec2::new(1u8, 2), vec2(1, 2));
        assert_eq!(Vec3::new(1, 2, 3), [1, 2, 3]);
        assert_eq!(Vec4::new(1, 2, 3, 4), Vector::from([1, 2, 3, 4]));
    }

    #[test]
    fn fmt() {
        assert_eq!(format!("{}", Vec4f::W), "(0, 0, 0, 1)");
        assert_eq!(format!("{:?}", Vec4f::W), "(0.0, 0.0, 0.0, 1.0)");
        assert_eq!(format!("{:.1}", vec2(1.0, 2.34)), "(1.0, 2.3)");
    }

    #[test]
    fn length() {
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        assert_eq!(vec2(3.0f32, 4.0).lengthf(), 5.0);
        assert_eq!(vec4(1, 1, 1, 1).length(), 2.0);
        assert_eq!(Vec4d::ZERO.length(), 0.0);
        assert_eq!(Vec2u::ZERO.lengthf(), 0.0);

        let v = vec3(
            10.677350318091823091823,
            20.277350318812388123222,
            30.977350318999999999999,
        );
        assert_approx_eq!(v.length(), 38.532752024130666).ulps(4);
    }

    #[test]
    fn normalize() {
        let mut v = vec3(30.0, 50.0, 100.0);
        v.normalize();
        assert_approx_eq!(v.length(), 1.0).ulps(4);

        let mut zero = Vec2f::ZERO;
        zero.normalize();
        assert_eq!(zero, Vec2f::ZERO);
        assert_eq!(Vec4d::ZERO.normalized(), Vec4d::ZERO);

        // Integer components are truncated.
        assert_eq!(vec2(3, 4).normalized(), vec2(0, 0));
        assert_eq!(vec2(0, 7).normalized(), vec2(0, 1));

        assert_approx_eq!(vec4(1.0f32, 2.0, 3.0, 4.0).normalized().lengthf(), 1.0).abs(1e-6);
    }

    #[test]
    fn dot() {
        assert_eq!(vec3(1, 3, -5).dot(vec3(4, -2, -1)), 3.0);
        assert_eq!(vec3(1, 3, -5).dotf(vec3(1, 3, -5)), 35.0);
        assert_eq!(super::dot(Vec2f::X, Vec2f::Y), 0.0);
        assert_eq!(super::dotf(Vec4f::W, Vec4f::W), 1.0);
    }

    #[test]
    fn cross() {
        assert_eq!(Vec3f::X.cross(Vec3f::Y), Vec3f::Z);
        assert_eq!(Vec3f::Y.cross(Vec3f::Z), Vec3f::X);
        assert_eq!(Vec3f::Z.cross(Vec3f::X), Vec3f::Y);
        assert_eq!(super::cross(vec3(1, 2, 3), vec3(4, 5, 6)), vec3(-3, 6, -3));
        assert_eq!(vec3(2, 0, 0).cross(vec3(4, 0, 0)), Vec3i::ZERO);
    }

    #[test]
    fn cross4() {
        let a = vec4(1, 2, 3, 4);
        let b = vec4(-2, 0, 5, 1);
        let c = vec4(3, -1, 0, 2);
        let n = super::cross4(a, b, c);
        assert_ne!(n, Vec4i::ZERO);
        assert_eq!(n.dot(a), 0.0);
        assert_eq!(n.dot(b), 0.0);
        assert_eq!(n.dot(c), 0.0);

        // Swapping two inputs flips the sign.
        assert_eq!(super::cross4(b, a, c), -n);
        assert_eq!(super::cross4(a, a, c), Vec4i::ZERO);
    }

    #[test]
    fn reflect() {
        assert_eq!(super::reflect(vec2(1.0, -1.0), vec2(0.0, 1.0)), vec2(1.0, 1.0));
        assert_eq!(super::reflect(vec3(1.0, -2.0, 3.0), Vec3d::Y), vec3(1.0, 2.0, 3.0));

        let mut v = vec3(0.0, 0.0, -5.0);
        v.reflect(Vec3f::Z);
        assert_eq!(v, vec3(0.0, 0.0, 5.0));

        // Grazing the surface leaves the vector alone.
        assert_eq!(Vec3f::X.reflected(Vec3f::Y), Vec3f::X);
    }

    #[test]
    fn pod_layout() {
        let vertices = [vec4(1.0f32, 2.0, 3.0, 4.0), vec4(5.0, 6.0, 7.0, 8.0)];
        let floats: &[f32] = bytemuck::cast_slice(&vertices);
        assert_eq!(floats, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);

        let v: &Vec3i = bytemuck::cast_ref(&[1i32, 2, 3]);
        assert_eq!(*v, vec3(1, 2, 3));
        assert_eq!(bytemuck::bytes_of(&Vec2::<u8>::new(7, 9)), &[7u8, 9]);
    }
}
