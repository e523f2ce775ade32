//! Swizzle views.
//!
//! A swizzle reinterprets the elements of a [`Vector`] through a fixed index pattern. Calling
//! `v.zyx()` does not copy anything: it returns a [`Swizzle`] borrowing `v`, whose element `i` is
//! element `INDICES[i]` of `v`. `v.zyx_mut()` returns a [`SwizzleMut`] that additionally writes
//! through to `v`. Patterns that repeat a single index (`v.xx()`, `v.zzz()`) return a read-only
//! [`Splat`] instead.
//!
//! Accessors exist for every index tuple of the vector's own length, in the `xyzw`, `rgba` and
//! `stpq` naming families.
//!
//! ```
//! # use prism_linalg::*;
//! let mut v = vec3(1, 2, 3);
//! assert_eq!(v.zyx().materialize(), vec3(3, 2, 1));
//! assert_eq!(v.bgr() + 10, vec3(13, 12, 11));
//!
//! v.zxy_mut().assign(vec3(30, 10, 20));
//! assert_eq!(v, vec3(10, 20, 30));
//!
//! assert_eq!(v.sss().materialize(), vec3(10, 10, 10));
//! ```
//!
//! # Repeated indices
//!
//! A pattern may name the same element more than once (`v.xxy_mut()`). [`SwizzleMut::assign`]
//! writes view elements in increasing order, so the last write to a shared element wins. Compound
//! assignment (`+=` and friends) materializes the view, applies the operator and assigns the
//! result, so a repeated element receives one update, not several.

mod ops;

use std::{fmt, marker::PhantomData, ops::Index, ops::IndexMut};

use crate::Vector;

prism_macros::swizzles!(2);
prism_macros::swizzles!(3);
prism_macros::swizzles!(4);

/// An index pattern selecting `N` elements of an `N`-element [`Vector`].
///
/// Implemented by the zero-sized [`Idx2`], [`Idx3`] and [`Idx4`] markers.
pub trait Pattern<const N: usize> {
    /// The backing index read by each element of the view.
    const INDICES: [usize; N];
}

/// Index pattern of a swizzle over a 2-element vector.
pub enum Idx2<const A: usize, const B: usize> {}

/// Index pattern of a swizzle over a 3-element vector.
pub enum Idx3<const A: usize, const B: usize, const C: usize> {}

/// Index pattern of a swizzle over a 4-element vector.
pub enum Idx4<const A: usize, const B: usize, const C: usize, const D: usize> {}

impl<const A: usize, const B: usize> Pattern<2> for Idx2<A, B> {
    const INDICES: [usize; 2] = [A, B];
}

impl<const A: usize, const B: usize, const C: usize> Pattern<3> for Idx3<A, B, C> {
    const INDICES: [usize; 3] = [A, B, C];
}

impl<const A: usize, const B: usize, const C: usize, const D: usize> Pattern<4>
    for Idx4<A, B, C, D>
{
    const INDICES: [usize; 4] = [A, B, C, D];
}

/// A read-only swizzle view of a [`Vector`].
///
/// Element `i` of the view is element `P::INDICES[i]` of the borrowed vector. Arithmetic
/// operators materialize the view and return a new [`Vector`].
pub struct Swizzle<'a, T, const N: usize, P> {
    vector: &'a Vector<T, N>,
    _pattern: PhantomData<P>,
}

impl<'a, T, const N: usize, P: Pattern<N>> Swizzle<'a, T, N, P> {
    #[inline]
    pub(crate) fn new(vector: &'a Vector<T, N>) -> Self {
        Self {
            vector,
            _pattern: PhantomData,
        }
    }

    /// Returns the backing index read by each element of the view.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// assert_eq!(Vec4f::ZERO.wzyx().indices(), [3, 2, 1, 0]);
    /// ```
    #[inline]
    pub fn indices(&self) -> [usize; N] {
        P::INDICES
    }

    /// Returns the [`Vector`] this view borrows from.
    #[inline]
    pub fn backing(&self) -> &'a Vector<T, N> {
        self.vector
    }

    /// Copies the viewed elements into a new [`Vector`].
    #[inline]
    pub fn materialize(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::from_fn(|i| self.vector[P::INDICES[i]])
    }
}

/// A write-through swizzle view of a [`Vector`].
///
/// Reads behave like [`Swizzle`]. [`SwizzleMut::assign`], [`IndexMut`] and the compound
/// assignment operators modify the borrowed vector.
///
/// ```
/// # use prism_linalg::*;
/// let mut v = vec2(1, 2);
/// v.yx_mut().assign(vec2(7, 8));
/// assert_eq!(v, vec2(8, 7));
///
/// let mut view = v.ts_mut();
/// view += vec2(100, 200);
/// assert_eq!(v, vec2(208, 107));
/// ```
pub struct SwizzleMut<'a, T, const N: usize, P> {
    vector: &'a mut Vector<T, N>,
    _pattern: PhantomData<P>,
}

impl<'a, T, const N: usize, P: Pattern<N>> SwizzleMut<'a, T, N, P> {
    #[inline]
    pub(crate) fn new(vector: &'a mut Vector<T, N>) -> Self {
        Self {
            vector,
            _pattern: PhantomData,
        }
    }

    /// Returns the backing index read and written by each element of the view.
    #[inline]
    pub fn indices(&self) -> [usize; N] {
        P::INDICES
    }

    /// Returns the [`Vector`] this view borrows from.
    #[inline]
    pub fn backing(&self) -> &Vector<T, N> {
        &*self.vector
    }

    /// Returns the [`Vector`] this view borrows from, mutably.
    #[inline]
    pub fn backing_mut(&mut self) -> &mut Vector<T, N> {
        &mut *self.vector
    }

    /// Reborrows this view as a read-only [`Swizzle`] with the same pattern.
    #[inline]
    pub fn as_view(&self) -> Swizzle<'_, T, N, P> {
        Swizzle::new(&*self.vector)
    }

    /// Copies the viewed elements into a new [`Vector`].
    #[inline]
    pub fn materialize(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        self.as_view().materialize()
    }

    /// Writes element `i` of `rhs` to backing element `INDICES[i]`, for increasing `i`.
    ///
    /// If the pattern repeats an index, that backing element ends up with the value written last.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let mut v = vec3(1, 2, 3);
    /// v.xxy_mut().assign(vec3(7, 8, 9));
    /// assert_eq!(v, vec3(8, 9, 3));
    /// ```
    pub fn assign(&mut self, rhs: Vector<T, N>) {
        for (index, value) in P::INDICES.into_iter().zip(rhs.into_array()) {
            self.vector[index] = value;
        }
    }
}

/// A read-only view that repeats element `A` of a [`Vector`] in every position.
///
/// Returned by swizzle accessors whose pattern names a single element, like `v.xx()` or
/// `v.aaaa()`. There is no write-through counterpart.
///
/// ```
/// # use prism_linalg::*;
/// let v = vec4(1, 2, 3, 4);
/// assert_eq!(v.zzzz().materialize(), Vec4::splat(3));
/// assert_eq!(v.yyyy() * vec4(1, 2, 3, 4), vec4(2, 4, 6, 8));
/// ```
pub struct Splat<'a, T, const N: usize, const A: usize> {
    vector: &'a Vector<T, N>,
}

impl<'a, T, const N: usize, const A: usize> Splat<'a, T, N, A> {
    #[inline]
    pub(crate) fn new(vector: &'a Vector<T, N>) -> Self {
        Self { vector }
    }

    /// Returns the backing index read by each element of the view (always `[A; N]`).
    #[inline]
    pub fn indices(&self) -> [usize; N] {
        [A; N]
    }

    /// Returns the [`Vector`] this view borrows from.
    #[inline]
    pub fn backing(&self) -> &'a Vector<T, N> {
        self.vector
    }

    /// Broadcasts the viewed element into a new [`Vector`].
    #[inline]
    pub fn materialize(&self) -> Vector<T, N>
    where
        T: Copy,
    {
        Vector::splat(self.vector[A])
    }
}

// Manual impls: a derive would require `T: Copy` and `P: Copy`.
impl<T, const N: usize, P> Clone for Swizzle<'_, T, N, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize, P> Copy for Swizzle<'_, T, N, P> {}

impl<T, const N: usize, const A: usize> Clone for Splat<'_, T, N, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, const N: usize, const A: usize> Copy for Splat<'_, T, N, A> {}

impl<T, const N: usize, P: Pattern<N>> Index<usize> for Swizzle<'_, T, N, P> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.vector[P::INDICES[index]]
    }
}

impl<T, const N: usize, P: Pattern<N>> Index<usize> for SwizzleMut<'_, T, N, P> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.vector[P::INDICES[index]]
    }
}

impl<T, const N: usize, P: Pattern<N>> IndexMut<usize> for SwizzleMut<'_, T, N, P> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.vector[P::INDICES[index]]
    }
}

impl<T, const N: usize, const A: usize> Index<usize> for Splat<'_, T, N, A> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.vector[[A; N][index]]
    }
}

fn fmt_elements<T: fmt::Debug, const N: usize>(
    vector: &Vector<T, N>,
    indices: [usize; N],
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let mut tup = f.debug_tuple("");
    for index in indices {
        tup.field(&vector[index]);
    }
    tup.finish()
}

impl<T: fmt::Debug, const N: usize, P: Pattern<N>> fmt::Debug for Swizzle<'_, T, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(self.vector, P::INDICES, f)
    }
}

impl<T: fmt::Debug, const N: usize, P: Pattern<N>> fmt::Debug for SwizzleMut<'_, T, N, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(&*self.vector, P::INDICES, f)
    }
}

impl<T: fmt::Debug, const N: usize, const A: usize> fmt::Debug for Splat<'_, T, N, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_elements(self.vector, [A; N], f)
    }
}

impl<T: Copy, const N: usize, P: Pattern<N>> From<Swizzle<'_, T, N, P>> for Vector<T, N> {
    #[inline]
    fn from(view: Swizzle<'_, T, N, P>) -> Self {
        view.materialize()
    }
}

impl<T: Copy, const N: usize, P: Pattern<N>> From<SwizzleMut<'_, T, N, P>> for Vector<T, N> {
    #[inline]
    fn from(view: SwizzleMut<'_, T, N, P>) -> Self {
        view.materialize()
    }
}

impl<T: Copy, const N: usize, const A: usize> From<Splat<'_, T, N, A>> for Vector<T, N> {
    #[inline]
    fn from(view: Splat<'_, T, N, A>) -> Self {
        view.materialize()
    }
}

#[cfg(test)]
mod tests {
    use std::ptr;

    use crate::{vec2, vec3, vec4, Vec3i, Vec4i, Vector};

    #[test]
    fn materialize() {
        let v = vec2(1, 2);
        assert_eq!(v.yx().materialize(), vec2(2, 1));
        assert_eq!(v.xy().materialize(), v);
        assert_eq!(v.gr().materialize(), vec2(2, 1));
        assert_eq!(v.ts().materialize(), vec2(2, 1));

        let v = vec4(1, 2, 3, 4);
        assert_eq!(v.wzyx().materialize(), vec4(4, 3, 2, 1));
        assert_eq!(v.bgra().materialize(), vec4(3, 2, 1, 4));
        assert_eq!(v.xyzz().materialize(), vec4(1, 2, 3, 3));
        assert_eq!(Vector::from(v.qpts()), vec4(4, 3, 2, 1));
    }

    #[test]
    fn splat() {
        let v = vec2(1, 2);
        assert_eq!(v.xx().materialize(), vec2(1, 1));
        assert_eq!(v.yy().materialize(), vec2(2, 2));
        assert_eq!(v.xx().indices(), [0, 0]);

        let v = vec3(1, 2, 3);
        assert_eq!(v.zzz().materialize(), Vec3i::splat(3));
        assert_eq!(v.ppp()[2], 3);
        assert_eq!(v.ggg() + vec3(1, 2, 3), vec3(3, 4, 5));
        assert_eq!(v.xxx() * 5, Vec3i::splat(5));
    }

    #[test]
    fn assign() {
        let mut v = vec2(1, 2);
        v.yx_mut().assign(vec2(7, 8));
        assert_eq!(v, vec2(8, 7));

        let mut v = vec4(0, 0, 0, 0);
        v.abgr_mut().assign(vec4(1, 2, 3, 4));
        assert_eq!(v, vec4(4, 3, 2, 1));
    }

    #[test]
    fn repeated_index_last_write_wins() {
        let mut v = vec3(1, 2, 3);
        v.xxy_mut().assign(vec3(7, 8, 9));
        assert_eq!(v, vec3(8, 9, 3));

        let mut v = vec4(0, 0, 0, 0);
        v.wxww_mut().assign(vec4(1, 2, 3, 4));
        assert_eq!(v, vec4(2, 0, 0, 4));
    }

    #[test]
    fn self_assignment_through_snapshot() {
        let mut v = vec3(1, 2, 3);
        let reversed = v.zyx().materialize();
        v.xyz_mut().assign(reversed);
        assert_eq!(v, vec3(3, 2, 1));
    }

    #[test]
    fn index() {
        let mut v = vec3(1, 2, 3);
        assert_eq!(v.zxy()[0], 3);
        assert_eq!(v.zxy()[2], 2);

        let mut view = v.zxy_mut();
        view[0] = 30;
        view[1] *= 10;
        assert_eq!(view[0], 30);
        assert_eq!(v, vec3(10, 2, 30));
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let v = vec2(1, 2);
        assert_eq!(v.xx()[2], 1);
    }

    #[test]
    fn backing() {
        let mut v = vec4(1, 2, 3, 4);
        assert!(ptr::eq(v.yxwz().backing(), &v));
        assert!(ptr::eq(v.yyyy().backing(), &v));

        let addr: *const Vec4i = &v;
        let mut view = v.yxwz_mut();
        assert!(ptr::eq(view.backing(), addr));
        view.backing_mut()[0] = 100;
        assert_eq!(view.as_view().materialize(), vec4(2, 100, 4, 3));
        assert_eq!(v, vec4(100, 2, 3, 4));
    }

    #[test]
    fn writes_are_visible_through_every_accessor() {
        let mut v = vec3(1.0, 2.0, 3.0);
        v.bgr_mut().assign(vec3(30.0, 20.0, 10.0));
        assert_eq!(v.x(), 10.0);
        assert_eq!(v.r(), 10.0);
        assert_eq!(v.s(), 10.0);
        assert_eq!(v[2], 30.0);
        assert_eq!(v.pts().materialize(), vec3(30.0, 20.0, 10.0));
    }

    #[test]
    fn fmt() {
        let v = vec3(1, 2, 3);
        assert_eq!(format!("{:?}", v.zyx()), "(3, 2, 1)");
        assert_eq!(format!("{:?}", v.yyy()), "(2, 2, 2)");

        let mut v = vec2(1, 2);
        assert_eq!(format!("{:?}", v.yx_mut()), "(2, 1)");
    }
}
