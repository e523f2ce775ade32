//! Approximate equality for floating-point scalars, vectors and matrices.
//!
//! Comparisons go through the [`ApproxEq`] trait. Tests usually reach for the
//! [`assert_approx_eq!`][crate::assert_approx_eq] and
//! [`assert_approx_ne!`][crate::assert_approx_ne] macros instead of calling it directly.

mod impls;

use std::{fmt, panic::Location};

/// Types that can be compared for *approximate equality*.
///
/// Compound types (vectors, matrices, arrays) are considered equal if all of their elements are.
///
/// For the subtleties of comparing floating-point numbers, see:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// Type of the tolerance for absolute and relative comparisons ([`f32`] or [`f64`]).
    type Tolerance: DefaultTolerances + Copy;

    /// Returns `true` if the absolute difference of `self` and `other` is at most
    /// `abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if the absolute difference of `self` and `other` is at most the larger of
    /// their magnitudes times `rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if at most `ulps_tolerance` representable values lie between `self` and
    /// `other` ([*units in the last place*]).
    ///
    /// `NaN` never compares equal. `-0.0` and `+0.0` always compare equal; any other values with
    /// differing signs never do.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;
}

/// Default tolerances used by the assertion macros when no comparison is configured.
pub trait DefaultTolerances {
    /// Default tolerance for [`ApproxEq::abs_diff_eq`].
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Default tolerance for [`ApproxEq::rel_diff_eq`].
    const DEFAULT_REL_TOLERANCE: Self;
    /// Default tolerance for [`ApproxEq::ulps_diff_eq`].
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = Self::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// Assertion guard returned by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The assertion is checked when the guard is dropped. Before that, [`Asserter::abs`],
/// [`Asserter::rel`] and [`Asserter::ulps`] select which comparisons to run; the values are
/// considered equal if *any* selected comparison says so.
///
/// Without any configuration, the values compare equal if either an absolute or a relative
/// comparison with the [`DefaultTolerances`] of the element type considers them equal.
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    kind: AssertionKind,
    location: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    abs: Option<T::Tolerance>,
    rel: Option<T::Tolerance>,
    ulps: Option<u32>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            kind,
            location: Location::caller(),
            msg,
            abs: None,
            rel: None,
            ulps: None,
        }
    }

    /// Compare the *absolute difference* of the values against `abs`.
    ///
    /// Works well for values close to zero, including ones with opposing signs.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.abs = Some(abs);
        self
    }

    /// Compare the *relative difference* of the values against `rel`.
    ///
    /// A good default for values of larger magnitude. Any non-zero number only compares equal to
    /// 0.0 with a relative tolerance of at least 1.0.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.rel = Some(rel);
        self
    }

    /// Compare the values by counting the representable values between them.
    ///
    /// Respects the uneven density of floats, but is a poor fit for values very close to zero.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.ulps = Some(ulps);
        self
    }

    fn equal(&mut self) -> bool {
        let abs = self
            .abs
            .take()
            .map_or(false, |abs| T::abs_diff_eq(self.left, self.right, abs));
        let rel = self
            .rel
            .take()
            .map_or(false, |rel| T::rel_diff_eq(self.left, self.right, rel));
        let ulps = self
            .ulps
            .take()
            .map_or(false, |ulps| T::ulps_diff_eq(self.left, self.right, ulps));
        abs || rel || ulps
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` has no effect on destructors, so the location captured in `new` is
    // printed instead.
    fn drop(&mut self) {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            self.abs = Some(T::Tolerance::DEFAULT_ABS_TOLERANCE);
            self.rel = Some(T::Tolerance::DEFAULT_REL_TOLERANCE);
        }

        let equal = self.equal();
        let failed = match self.kind {
            AssertionKind::Eq => !equal,
            AssertionKind::Ne => equal,
        };
        if failed {
            assert_failed_inner(self.left, self.right, self.kind, self.location, self.msg);
        }
    }
}

fn assert_failed_inner(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    kind: AssertionKind,
    location: &Location<'_>,
    args: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = match kind {
        AssertionKind::Eq => "==",
        AssertionKind::Ne => "!=",
    };
    match args {
        Some(args) => panic!(
            r#"assertion `left {op} right` failed at {location}: {args}
  left: {left:?}
 right: {right:?}"#
        ),
        None => panic!(
            r#"assertion `left {op} right` failed at {location}
  left: {left:?}
 right: {right:?}"#
        ),
    }
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// Asserts that two expressions are approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_eq!`], but returns an [`Asserter`] that selects the comparison method and
/// tolerance. Also see [`assert_approx_ne!`].
///
/// # Examples
///
/// ```
/// # use prism_linalg::*;
/// let one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(one, 1.0);
///
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
///
/// assert_approx_eq!(vec3(1.0, 2.0, 3.0) * 0.1, vec3(0.1, 0.2, 0.3)).ulps(2);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($($args:tt)+) => {
        $crate::__approx_asserter!(Eq, $($args)+)
    };
}

/// Asserts that two expressions are *not* approximately equal (using [`ApproxEq`]).
///
/// Works like [`assert_ne!`], but returns an [`Asserter`] that selects the comparison method and
/// tolerance. Also see [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use prism_linalg::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(100.0, 99.0).rel(0.005);
/// assert_approx_ne!(1.0, 1.0 + f64::EPSILON + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($($args:tt)+) => {
        $crate::__approx_asserter!(Ne, $($args)+)
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __approx_asserter {
    ($kind:ident, $lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::$kind,
            ::core::option::Option::None,
        )
    };
    ($kind:ident, $lhs:expr, $rhs:expr, $($msg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::$kind,
            ::core::option::Option::Some(::core::format_args!($($msg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "normalization drifted")]
    fn assertion_message() {
        assert_approx_eq!(1.0, 2.0, "normalization drifted");
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn ulps() {
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON);
        assert_approx_eq!(1.0, 1.0 + f32::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + f32::EPSILON).ulps(0);
        assert_approx_eq!(-0.0f64, 0.0).ulps(0);
    }

    #[test]
    fn signs() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).rel(0.0);
    }

    #[test]
    fn non_finite() {
        assert_approx_ne!(f32::NAN, f32::NAN).abs(1.0);
        assert_approx_ne!(f32::NAN, f32::NAN).rel(1.0);
        assert_approx_ne!(f64::NAN, 0.0).ulps(100);

        assert_approx_eq!(f32::INFINITY, f32::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).abs(f64::MAX);
        assert_approx_ne!(f64::INFINITY, f64::MAX).rel(10000.0);
        assert_approx_eq!(f64::MAX, f64::INFINITY).ulps(1);
    }
}
