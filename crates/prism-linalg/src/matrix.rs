use std::{array, fmt};

use crate::{Number, One, Vector, Zero};

mod ops;

/// A 3x3 matrix.
pub type Mat3<T> = Matrix<T, 3, 3>;
/// A 3x3 matrix with [`f32`] elements.
pub type Mat3f = Mat3<f32>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix.
pub type Mat4<T> = Matrix<T, 4, 4>;
/// A 4x4 matrix with [`f32`] elements.
pub type Mat4f = Mat4<f32>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;

/// A column-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// # Construction
///
/// - [`Matrix::from_rows`] and [`Matrix::from_columns`] fill a matrix from nested arrays (so a
///   4x4 matrix can be written down as 16 scalars in row-major order) or from row or column
///   vectors.
/// - [`Matrix::from_fn`] creates each element by invoking a closure with its row and column.
/// - [`Matrix::from_diagonal`] creates a square matrix with the given diagonal.
/// - [`Matrix::ZERO`] has every element set to 0.
/// - [`Matrix::identity`] (also the [`Default`] for square matrices) has 1 on its diagonal and 0
///   everywhere else.
///
/// # Element Access
///
/// [`Matrix`] implements [`Index`] and [`IndexMut`] for `(row, column)` tuples, matching common
/// mathematical notation. Indices are 0-based.
///
/// ```
/// # use prism_linalg::*;
/// let mut mat = Matrix::from_rows([
///     [0, 1]
/// ]);
/// mat[(0, 0)] = 4;
/// assert_eq!(mat[(0, 0)], 4);
/// assert_eq!(mat[(0, 1)], 1);
/// ```
///
/// Indexing out of bounds panics, just like it does for slices. [`Matrix::get`] and
/// [`Matrix::get_mut`] return [`Option`]s instead.
///
/// Whole rows and columns are read and written with [`Matrix::row`], [`Matrix::column`],
/// [`Matrix::set_row`] and [`Matrix::set_column`].
///
/// # Transforms
///
/// [`Mat4`] and [`Mat3`] act as homogeneous transforms of 3D and 2D points respectively. The
/// `translate` and `scale` methods multiply the transform from the right, so that the new
/// operation is applied to points *before* the existing transform:
///
/// ```
/// # use prism_linalg::*;
/// let mut transform = Mat4f::identity();
/// transform.translate([1.0, 2.0, 3.0]);
/// transform.scale([2.0, 2.0, 2.0, 1.0]);
///
/// let point = vec4(1.0, 1.0, 1.0, 1.0);
/// assert_eq!(transform * point, vec4(3.0, 4.0, 5.0, 1.0));
/// ```
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; R]; C]);

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable
    for Matrix<T, R, C>
{
}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod
    for Matrix<T, R, C>
{
}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Creates a [`Matrix`] from an array of row vectors.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let rows = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// let columns = Matrix::from_columns([
    ///     [0, 2],
    ///     [1, 3],
    /// ]);
    /// assert_eq!(rows, columns);
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self
    where
        T: Copy,
    {
        Matrix::from_columns(rows).transposed()
    }

    /// Creates a [`Matrix`] from an array of column vectors.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Self(columns.map(|col| col.into().into_array()))
    }

    /// Creates a [`Matrix`] by invoking a closure with the position (row and column) of each
    /// element.
    ///
    /// This mirrors [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let mat = Matrix::from_fn(|row, col| row * 10 + col);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0,  1,  2],
    ///     [10, 11, 12],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut cb: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|col| array::from_fn(|row| cb(row, col))))
    }

    /// Applies a closure to each element, returning a new matrix.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|column| column.map(&mut f)))
    }

    /// Returns a copy of this matrix with rows and columns swapped.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]).transposed();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 3],
    ///     [1, 4],
    ///     [2, 5],
    /// ]));
    /// ```
    pub fn transposed(self) -> Matrix<T, C, R>
    where
        T: Copy,
    {
        Matrix::from_fn(|row, col| self[(col, row)])
    }

    /// Returns a reference to the element at `(row, col)`, or [`None`] if out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let mat = Matrix::from_rows([
    ///     [0, 1, 2],
    ///     [3, 4, 5],
    /// ]);
    /// assert_eq!(mat.get(0, 0), Some(&0));
    /// assert_eq!(mat.get(1, 0), Some(&3));
    /// assert_eq!(mat.get(2, 0), None);
    /// ```
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(col).and_then(|col| col.get(row))
    }

    /// Returns a mutable reference to the element at `(row, col)`, or [`None`] if out of bounds.
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut T> {
        self.0.get_mut(col).and_then(|col| col.get_mut(row))
    }

    /// Returns row `row` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self[(row, col)])
    }

    /// Returns column `col` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn column(&self, col: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from(self.0[col])
    }

    /// Overwrites row `row` with the elements of `elems`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let mut mat = Mat3::identity();
    /// mat.set_row(1, [4, 5, 6]);
    /// assert_eq!(mat.row(1), vec3(4, 5, 6));
    /// assert_eq!(mat.column(0), vec3(1, 4, 0));
    /// ```
    pub fn set_row(&mut self, row: usize, elems: impl Into<Vector<T, C>>) {
        assert!(row < R, "row index {row} out of bounds for {R}x{C} matrix");
        for (column, elem) in self.0.iter_mut().zip(elems.into().into_array()) {
            column[row] = elem;
        }
    }

    /// Overwrites column `col` with the elements of `elems`.
    ///
    /// # Panics
    ///
    /// Panics if `col` is out of bounds.
    pub fn set_column(&mut self, col: usize, elems: impl Into<Vector<T, R>>) {
        self.0[col] = elems.into().into_array();
    }

    /// Overwrites the upper left corner of `self` with the elements of `block`.
    ///
    /// Elements of `self` outside of the block keep their value. Elements of `block` that don't
    /// fit into `self` are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let mut mat = Mat3::from_fn(|row, col| (row * 3 + col) as i32);
    /// mat.set_upper_left(Matrix::from_rows([[-1, -2], [-3, -4]]));
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [-1, -2, 2],
    ///     [-3, -4, 5],
    ///     [ 6,  7, 8],
    /// ]));
    /// ```
    pub fn set_upper_left<const R2: usize, const C2: usize>(&mut self, block: Matrix<T, R2, C2>) {
        for (dest, src) in self.0.iter_mut().zip(block.0) {
            for (dest, src) in dest.iter_mut().zip(src) {
                *dest = src;
            }
        }
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug, const R: usize, const C: usize>(
            &'a Matrix<T, R, C>,
            usize,
        );
        impl<'a, T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for FormatRow<'a, T, R, C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for col in 0..C {
                    if col != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", self.0[(self.1, col)])?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in 0..R {
            list.entry(&FormatRow(self, row));
        }
        list.finish()
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// A matrix with every element set to 0.
    pub const ZERO: Self = Self([[T::ZERO; R]; C]);
}

impl<T: Zero + One + Copy, const N: usize> Matrix<T, N, N> {
    /// Returns the identity matrix.
    ///
    /// The matrix has the value 1 on its diagonal and 0 everywhere else. Multiplying any vector
    /// with this matrix returns the vector unchanged.
    pub fn identity() -> Self {
        Self::from_diagonal(Vector::splat(T::ONE))
    }

    /// Creates a square matrix with `diag` on its diagonal and 0 everywhere else.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let mat = Matrix::from_diagonal([1, 2]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [1, 0],
    ///     [0, 2],
    /// ]));
    /// ```
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }
}

impl<T: Copy, const N: usize> Matrix<T, N, N> {
    /// Swaps the rows and columns of this square matrix, in place.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let mut mat = Matrix::from_rows([
    ///     [0, 1],
    ///     [2, 3],
    /// ]);
    /// mat.transpose();
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [0, 2],
    ///     [1, 3],
    /// ]));
    /// ```
    pub fn transpose(&mut self) {
        for col in 0..N {
            for row in col + 1..N {
                let upper = self[(row, col)];
                self[(row, col)] = self[(col, row)];
                self[(col, row)] = upper;
            }
        }
    }

    /// Returns a [`Vector`] holding the diagonal elements of this square matrix.
    pub fn diagonal(&self) -> Vector<T, N> {
        Vector::from_fn(|i| self[(i, i)])
    }

    /// Overwrites the diagonal of this matrix with `factors`, leaving all other elements alone.
    ///
    /// # Examples
    ///
    /// ```
    /// # use prism_linalg::*;
    /// let mut mat = Matrix::from_rows([
    ///     [1, 2],
    ///     [3, 4],
    /// ]);
    /// mat.set_scaling([9, 9]);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [9, 2],
    ///     [3, 9],
    /// ]));
    /// ```
    pub fn set_scaling(&mut self, factors: impl Into<Vector<T, N>>) {
        for (i, factor) in factors.into().into_array().into_iter().enumerate() {
            self[(i, i)] = factor;
        }
    }
}

impl<T: Number, const N: usize> Matrix<T, N, N> {
    /// Multiplies `self` with a scaling matrix from the right, in place.
    ///
    /// This scales column `i` of the matrix by `factors[i]`.
    pub fn scale(&mut self, factors: impl Into<Vector<T, N>>) {
        *self = self.scaled(factors);
    }

    /// Returns `self` multiplied with a scaling matrix from the right.
    ///
    /// See [`Matrix::scale`].
    pub fn scaled(self, factors: impl Into<Vector<T, N>>) -> Self {
        self * Self::from_diagonal(factors)
    }
}

impl<T: Zero + One + Copy, const N: usize> Default for Matrix<T, N, N> {
    /// Returns the [identity matrix][Matrix::identity].
    fn default() -> Self {
        Self::identity()
    }
}

// Translation lives in the last column of a homogeneous transform. Written out per dimension,
// since `N - 1` can't be expressed with const generics.
macro_rules! translation {
    ($($n:literal => $dim:literal),+) => {
        $(
            /// Homogeneous transforms.
            impl<T: Number> Matrix<T, $n, $n> {
                #[doc = concat!("Returns a transform translating ", stringify!($dim), "D points by `offset`.")]
                pub fn translation(offset: impl Into<Vector<T, $dim>>) -> Self {
                    let mut mat = Self::identity();
                    mat.set_translation(offset);
                    mat
                }

                /// Multiplies `self` with a translation by `offset` from the right, in place.
                ///
                /// The last column becomes `self * (offset, 1)`.
                pub fn translate(&mut self, offset: impl Into<Vector<T, $dim>>) {
                    *self = self.translated(offset);
                }

                /// Returns `self` multiplied with a translation by `offset` from the right.
                ///
                /// See [`Matrix::translate`].
                pub fn translated(self, offset: impl Into<Vector<T, $dim>>) -> Self {
                    self * Self::translation(offset)
                }

                /// Overwrites the last column with `offset`, followed by a 1.
                pub fn set_translation(&mut self, offset: impl Into<Vector<T, $dim>>) {
                    let offset = offset.into();
                    let mut column: Vector<T, $n> = Vector::splat(T::ONE);
                    column.as_mut_slice()[..$dim].copy_from_slice(offset.as_slice());
                    self.set_column($dim, column);
                }
            }
        )+
    };
}

translation!(3 => 2, 4 => 3);
