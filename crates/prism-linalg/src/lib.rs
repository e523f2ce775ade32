//! Fixed-size vectors with swizzle views, and the matrices that transform them.
//!
//! # Overview
//!
//! - [`Vector`] is an `N`-element vector backed by a single array. [`Vec2`], [`Vec3`] and
//!   [`Vec4`] (plus their `f`, `d`, `i` and `u` suffixed aliases) are the commonly used sizes.
//! - Elements can be accessed by index, or by name in three families: `x`/`y`/`z`/`w`,
//!   `r`/`g`/`b`/`a` and `s`/`t`/`p`/`q`. All of them refer to the same storage.
//! - Swizzles like `v.zyx()` or `v.bgra_mut()` return lightweight views over the vector's storage
//!   that can be read, written through and used in arithmetic. See the [`swizzle`] module.
//! - [`Matrix`] is a column-major matrix. [`Mat3`] and [`Mat4`] double as homogeneous 2D and 3D
//!   transforms with `translate` and `scale` operations.
//! - The [`approx`] module provides approximate floating-point comparisons for all of the above.
//!
//! ```
//! # use prism_linalg::*;
//! let mut color = vec4(0.2, 0.4, 0.6, 1.0);
//! color.bgra_mut().assign(vec4(0.0, 0.5, 1.0, 1.0));
//! assert_eq!(color, vec4(1.0, 0.5, 0.0, 1.0));
//!
//! let position = vec3(1.0, 2.0, 2.0);
//! assert_eq!(position.length(), 3.0);
//! assert_eq!(position.zyx() * 2.0, vec3(4.0, 4.0, 2.0));
//! ```
//!
//! # Goals & Non-Goals
//!
//! - Only fixed-size vectors and matrices are supported. Dimensions are specified with const
//!   generics. Swizzles and named accessors exist for 2, 3 and 4 dimensional vectors only.
//! - Vectors and matrices use a single, unpadded data layout, and implement [`bytemuck::Pod`] so
//!   that they can be uploaded to the GPU as-is. Matrices are column-major.
//! - Be generic over the element type, but don't try to support non-[`Copy`] numeric types (eg.
//!   "big decimals").
//! - No SIMD. The element-wise operations are simple enough for the compiler to vectorize.
//! - Operations never fail at runtime. Division by zero follows the semantics of the element
//!   type, and swizzle patterns are checked at compile time.

pub mod approx;
mod matrix;
pub mod swizzle;
mod traits;
mod vector;

pub use matrix::*;
pub use swizzle::{Splat, Swizzle, SwizzleMut};
pub use traits::*;
pub use vector::*;
